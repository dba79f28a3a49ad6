use std::fmt;

use crate::render::{self, Printable};

/// A network address attached to a host, kept in display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    value: String,
}

impl Address {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Address {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Printable for Address {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        writeln!(out, "{prefix}{}{}", render::connector(is_last), self.value)
    }
}
