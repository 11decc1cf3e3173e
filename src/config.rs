//! Resolution configuration.

/// Settings carried by a profile or passed to a single call.
///
/// Nothing here is global: two profiles built with different settings never
/// affect each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Emit `tracing` diagnostics for unrecognized input, dropped segments
    /// and empty completions.
    pub logging: bool,
}

impl Config {
    /// Quiet configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with diagnostics enabled.
    pub fn verbose() -> Self {
        Self { logging: true }
    }

    /// Toggle diagnostics.
    pub fn with_logging(mut self, logging: bool) -> Self {
        self.logging = logging;
        self
    }
}
