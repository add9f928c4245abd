//! coderev - deterministic static analysis for Python code submissions
//!
//! Parses source text into a syntax tree, walks it to detect structural
//! defects, classifies them by severity and type, and aggregates them into
//! a reproducible quality score with a status label. Style checking shells
//! out to flake8; everything else is pure, synchronous computation with no
//! state shared between calls.

pub mod advisor;
pub mod config;
pub mod detectors;
pub mod external_tool;
pub mod models;
pub mod parser;
pub mod report;
pub mod scoring;
pub mod service;
pub mod style;
pub mod tree;

pub use config::AnalyzerConfig;
pub use models::{
    Category, CodeReview, Improvement, Issue, IssueType, QuickCheck, QuickStatus, ReviewStatus,
    Severity,
};
pub use parser::SyntaxFault;
pub use service::CodeAnalyzer;
