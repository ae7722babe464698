//! Per-request feedback log.
//!
//! The engine returns one result per mutation; the page may apply several
//! mutations before it re-renders. The log keeps the ordered success and
//! error messages for one render cycle and is drained and reset by the
//! caller afterwards.

use tabula_schema::request::MutationResult;

/// Ordered success and error messages for one render cycle.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    successes: Vec<String>,
    errors: Vec<String>,
}

impl MessageLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a success message.
    pub fn push_success(&mut self, message: impl Into<String>) {
        self.successes.push(message.into());
    }

    /// Appends an error message.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Files a mutation result under the matching list.
    pub fn absorb(&mut self, result: MutationResult) {
        if result.success {
            self.successes.push(result.message);
        } else {
            self.errors.push(result.message);
        }
    }

    /// Returns the success messages collected so far.
    #[must_use]
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Returns the error messages collected so far.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns true when nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.successes.is_empty() && self.errors.is_empty()
    }

    /// Takes all messages, leaving the log empty for the next cycle.
    pub fn drain(&mut self) -> (Vec<String>, Vec<String>) {
        (
            std::mem::take(&mut self.successes),
            std::mem::take(&mut self.errors),
        )
    }
}
