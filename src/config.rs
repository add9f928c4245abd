//! Analyzer configuration
//!
//! Thresholds and tool settings with the defaults the review contract is
//! specified against. Tests override these to pin down edge behavior.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Function bodies spanning more than this many lines are flagged.
    pub long_function_lines: u32,
    /// Functions with more than this many positional parameters are flagged.
    pub max_params: usize,
    /// Maximum line length passed to the style linter.
    pub max_line_length: usize,
    /// External linter executable.
    pub linter: String,
    /// Hard timeout for the linter subprocess, in seconds.
    pub lint_timeout_secs: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            long_function_lines: 20,
            max_params: 5,
            max_line_length: 88,
            linter: "flake8".to_string(),
            lint_timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.long_function_lines, 20);
        assert_eq!(config.max_params, 5);
        assert_eq!(config.max_line_length, 88);
        assert_eq!(config.linter, "flake8");
        assert_eq!(config.lint_timeout_secs, 10);
    }
}
