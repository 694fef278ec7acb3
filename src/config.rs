//! Session configuration
//!
//! Configuration for how the backend process is launched and which terminals
//! are used for interactive display and image export. All defaults are
//! explicit here - no hidden fallbacks elsewhere in the crate.

use serde::{Deserialize, Serialize};

/// Default backend invocation when none is supplied
pub const DEFAULT_COMMAND: &str = "gnuplot";

/// Configuration for a [`PlotSession`](crate::session::PlotSession)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Backend invocation string, e.g. `"gnuplot"` or `"/opt/gnuplot/bin/gnuplot"`.
    /// May carry extra arguments separated by whitespace.
    pub command: String,

    /// Keep interactive plot windows open after the session disconnects.
    /// Appends `-persist` to the invocation. Default: true.
    pub persist: bool,

    /// Terminal used for image export, switched to temporarily by
    /// `export`. Default: "pngcairo".
    pub image_terminal: String,

    /// Interactive terminal restored after an export. The backend has no
    /// portable "previous terminal" query, so the restore target is
    /// configured here. Default: "qt".
    pub interactive_terminal: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            command: DEFAULT_COMMAND.to_string(),
            persist: true,
            image_terminal: "pngcairo".to_string(),
            interactive_terminal: "qt".to_string(),
        }
    }
}

impl SessionConfig {
    /// Config with a custom backend invocation, other fields at defaults
    pub fn with_command(command: impl Into<String>) -> Self {
        SessionConfig {
            command: command.into(),
            ..SessionConfig::default()
        }
    }

    /// Split the invocation string into program + arguments, appending
    /// `-persist` when enabled. Returns None for a blank command.
    pub(crate) fn invocation(&self) -> Option<(String, Vec<String>)> {
        let mut parts = self.command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        let mut args: Vec<String> = parts.collect();
        if self.persist {
            args.push("-persist".to_string());
        }
        Some((program, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_invocation() {
        let (program, args) = SessionConfig::default().invocation().unwrap();
        assert_eq!(program, "gnuplot");
        assert_eq!(args, vec!["-persist".to_string()]);
    }

    #[test]
    fn test_invocation_with_arguments() {
        let mut config = SessionConfig::with_command("gnuplot --default-settings");
        config.persist = false;
        let (program, args) = config.invocation().unwrap();
        assert_eq!(program, "gnuplot");
        assert_eq!(args, vec!["--default-settings".to_string()]);
    }

    #[test]
    fn test_blank_command_has_no_invocation() {
        let config = SessionConfig::with_command("   ");
        assert!(config.invocation().is_none());
    }
}
