pub use self::error::ErrorMiddleware;
pub use self::security_headers::SecurityHeaders;
pub use self::sentry::SentryMiddleware;
pub use self::timeit::TimeItMiddleware;

mod error;
mod security_headers;
mod sentry;
mod timeit;
