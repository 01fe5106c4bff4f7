//! ANSI styling for status messages, with `NO_COLOR` support.

/// Check if color output is enabled (respects `NO_COLOR` env var).
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Escape codes for the few styles the shell uses.
///
/// When disabled every code is the empty string, so callers can always
/// interpolate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    enabled: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self::new()
    }
}

impl Style {
    pub fn new() -> Self {
        Self {
            enabled: color_enabled(),
        }
    }

    /// Create a style with colors explicitly enabled (for tests).
    pub fn force_enabled() -> Self {
        Self { enabled: true }
    }

    /// Create a style with colors explicitly disabled.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn bold_start(&self) -> &'static str {
        self.code("\x1b[1m")
    }

    pub fn red_start(&self) -> &'static str {
        self.code("\x1b[31m")
    }

    pub fn yellow_start(&self) -> &'static str {
        self.code("\x1b[33m")
    }

    pub fn green_start(&self) -> &'static str {
        self.code("\x1b[32m")
    }

    pub fn reset(&self) -> &'static str {
        self.code("\x1b[0m")
    }

    /// Command names in the help listing: bold green.
    pub fn command_name(&self, name: &str) -> String {
        format!(
            "{}{}{}{}",
            self.green_start(),
            self.bold_start(),
            name,
            self.reset()
        )
    }

    fn code(&self, seq: &'static str) -> &'static str {
        if self.enabled { seq } else { "" }
    }
}
