pub mod api;
pub mod dashboard;
pub mod r#static;
