//! Test harness for scripting full study sessions.
//!
//! Provides programmatic tools for driving the real message-dispatch
//! path through multi-step study workflows, verifying correctness at
//! every step, and generating diagnostic output.
//!
//! # Key Components
//!
//! - [`StudyBuilder`] — Fluent API for browsing, computing, and quizzing
//! - [`oracle`] — Verification functions returning pass/fail verdicts
//! - [`report`] — Structured text session descriptions
//! - [`helpers`] — The harness error type

pub mod helpers;
pub mod oracle;
pub mod report;
pub mod workflow;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
pub use report::StudyReport;
pub use workflow::{QuizStep, StudyBuilder};
