//! Command-line front end
//!
//! Thin wrapper over the library: reads a file (or stdin with `-`), runs
//! the requested analysis, and prints the text report or a JSON envelope.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coderev::models::ReviewStatus;
use coderev::{AnalyzerConfig, CodeAnalyzer};
use console::style;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coderev", version, about = "Static code review for Python submissions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Full review: syntax, style, smells, improvements, score
    Review {
        /// Python file to review, or `-` for stdin
        file: PathBuf,
        /// Free-form context attached to the review
        #[arg(long, default_value = "")]
        context: String,
        /// Emit the review as JSON instead of a text report
        #[arg(long)]
        json: bool,
        /// Style linter executable
        #[arg(long, env = "CODEREV_LINTER")]
        linter: Option<String>,
    },
    /// Quick check: syntax errors and critical smells only
    Quick {
        /// Python file to check, or `-` for stdin
        file: PathBuf,
        /// Emit the result as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Review {
            file,
            context,
            json,
            linter,
        } => {
            let code = read_source(&file)?;
            let mut config = AnalyzerConfig::default();
            if let Some(linter) = linter {
                config.linter = linter;
            }
            let analyzer = CodeAnalyzer::with_config(&config);

            if json {
                let review = analyzer.review(&code, &context);
                println!("{}", serde_json::to_string_pretty(&review)?);
            } else {
                let review = analyzer.review(&code, &context);
                let report = coderev::report::render_full(
                    &review.issues,
                    &review.improvements,
                    review.score,
                    review.status.as_str(),
                );
                print!("{report}");
                print_status_line(review.status);
            }
        }
        Command::Quick { file, json } => {
            let code = read_source(&file)?;
            let analyzer = CodeAnalyzer::new();

            if json {
                let check = analyzer.quick_check(&code);
                println!("{}", serde_json::to_string_pretty(&check)?);
            } else {
                print!("{}", analyzer.quick_report(&code));
            }
        }
    }
    Ok(())
}

fn read_source(file: &PathBuf) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut code = String::new();
        std::io::stdin()
            .read_to_string(&mut code)
            .context("failed to read source from stdin")?;
        Ok(code)
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))
    }
}

fn print_status_line(status: ReviewStatus) {
    let styled = match status {
        ReviewStatus::Excellent => style(status.as_str()).green().bold(),
        ReviewStatus::Good => style(status.as_str()).yellow().bold(),
        ReviewStatus::NeedsWork => style(status.as_str()).yellow().bold(),
        ReviewStatus::Critical => style(status.as_str()).red().bold(),
    };
    eprintln!("\n{styled}");
}
