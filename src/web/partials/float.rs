use std::fmt::Display;

use maud::{html, Markup, Render};

/// Rounded number with the exact value in the tooltip.
pub struct Float<T> {
    value: T,
    precision: usize,
}

impl<T> From<T> for Float<T> {
    fn from(value: T) -> Self {
        Self {
            value,
            precision: 0,
        }
    }
}

impl<T> Float<T> {
    pub const fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

impl<T: Display> Render for Float<T> {
    fn render(&self) -> Markup {
        html! {
            span title=(self.value.to_string()) { (format!("{0:.1$}", self.value, self.precision)) }
        }
    }
}
