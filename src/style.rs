//! Style checking via an external linter
//!
//! Writes the submission to a temporary `.py` file, runs flake8 against it
//! with a bounded timeout, and maps the `file:line:column:code message`
//! output into STYLE issues. Style checking is always best-effort: any
//! fault yields zero issues, never a request failure.

use crate::config::AnalyzerConfig;
use crate::external_tool::run_tool;
use crate::models::{Issue, IssueType, Severity};
use std::io::Write;
use tracing::{debug, warn};

pub struct StyleChecker {
    linter: String,
    max_line_length: usize,
    timeout_secs: u64,
}

impl StyleChecker {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            linter: config.linter.clone(),
            max_line_length: config.max_line_length,
            timeout_secs: config.lint_timeout_secs,
        }
    }

    /// Lint `source` and return one WARNING/STYLE issue per reported line.
    ///
    /// The temp file is deleted on every exit path; its lifetime is this
    /// call. Faults (linter missing, timeout, unwritable temp file) are
    /// absorbed to an empty result.
    pub fn check(&self, source: &str) -> Vec<Issue> {
        let temp = match tempfile::Builder::new().suffix(".py").tempfile() {
            Ok(mut file) => {
                if file.write_all(source.as_bytes()).is_err() {
                    warn!("could not write lint temp file");
                    return vec![];
                }
                file
            }
            Err(e) => {
                warn!("could not create lint temp file: {e}");
                return vec![];
            }
        };

        let args = vec![
            format!("--max-line-length={}", self.max_line_length),
            temp.path().to_string_lossy().to_string(),
        ];

        match run_tool(&self.linter, &args, self.timeout_secs) {
            Ok(output) if output.return_code != 0 => parse_lint_output(&output.stdout),
            Ok(_) => vec![],
            Err(fault) => {
                debug!("style check skipped: {fault}");
                vec![]
            }
        }
    }
}

impl Default for StyleChecker {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

/// Parse linter output in `file:line:column:code message` format.
///
/// Pure so it is testable without spawning the linter. Lines that do not
/// carry all four fields, or whose line field is not an integer, are
/// silently skipped.
pub fn parse_lint_output(output: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.splitn(4, ':').collect();
        if parts.len() < 4 {
            continue;
        }
        let Ok(line_num) = parts[1].trim().parse::<u32>() else {
            continue;
        };
        let message = parts[3].trim();
        let Some(code) = message.split_whitespace().next() else {
            continue;
        };

        issues.push(
            Issue::new(
                format!("{code}: {message}"),
                Severity::Warning,
                IssueType::Style,
            )
            .with_line(line_num),
        );
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_violation() {
        let output = "/tmp/check.py:1:1: W292 no newline at end of file\n";
        let issues = parse_lint_output(output);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].description, "W292: W292 no newline at end of file");
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].issue_type, IssueType::Style);
        assert_eq!(issues[0].line_number, Some(1));
    }

    #[test]
    fn test_parse_multiple_violations() {
        let output = "\
/tmp/check.py:3:80: E501 line too long (92 > 88 characters)
/tmp/check.py:7:1: F401 'os' imported but unused
";
        let issues = parse_lint_output(output);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].line_number, Some(3));
        assert!(issues[0].description.starts_with("E501:"));
        assert_eq!(issues[1].line_number, Some(7));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let output = "\
not a lint line
/tmp/check.py:abc:1: E999 bad line field
/tmp/check.py:2
/tmp/check.py:4:1: E111 indentation is not a multiple of four
";
        let issues = parse_lint_output(output);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line_number, Some(4));
    }

    #[test]
    fn test_empty_output() {
        assert!(parse_lint_output("").is_empty());
        assert!(parse_lint_output("\n\n").is_empty());
    }

    #[test]
    fn test_missing_linter_is_absorbed() {
        let checker = StyleChecker::new(&AnalyzerConfig {
            linter: "definitely-not-a-real-linter-binary".to_string(),
            ..AnalyzerConfig::default()
        });
        assert!(checker.check("print('hello')\n").is_empty());
    }
}
