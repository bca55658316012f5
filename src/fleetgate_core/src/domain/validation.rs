use thiserror::Error;

/// Collected field-level validation messages.
///
/// All violations for a payload are gathered and returned together instead of
/// failing on the first one.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Validation failed: {}", messages.join("; "))]
pub struct ValidationErrors {
    pub messages: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Consumes the collector: `Ok(value)` when no message was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}
