//! CLI output formatting for all commands.
//!
//! # Output Format
//!
//! ## Single-file mode
//!
//! ```text
//! Saved assets/popup_640x400.jpg (640x400)
//!     Source: assets/popup.jpg (800x600)
//! ```
//!
//! ## Batch
//!
//! ```text
//! Resized assets/content.jpg → assets/content_1280x800.jpg (1280x800)
//! Warning: file not found: assets/options.jpg
//! Error resizing assets/popup.jpg: Failed to decode assets/popup.jpg: ...
//! Processed 3 jobs: 1 resized, 1 missing, 1 failed
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 assets/content.jpg 1280x800 topleft
//! 002 assets/options.jpg 1280x800 center (missing)
//! 2 jobs, 1 missing input
//! ```
//!
//! # Architecture
//!
//! Each command has `format_*` functions (returning strings) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure —
//! no I/O, no side effects.

use crate::batch::{BatchJob, ItemOutcome};
use crate::imaging::FitCropOutcome;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Single-file mode
// ============================================================================

/// Format the success report for a single fit-and-crop.
pub fn format_single_outcome(source: &Path, outcome: &FitCropOutcome) -> Vec<String> {
    vec![
        format!(
            "Saved {} ({}x{})",
            outcome.output.display(),
            outcome.final_dims.width,
            outcome.final_dims.height
        ),
        format!(
            "    Source: {} ({}x{})",
            source.display(),
            outcome.source_dims.width,
            outcome.source_dims.height
        ),
    ]
}

pub fn print_single_outcome(source: &Path, outcome: &FitCropOutcome) {
    for line in format_single_outcome(source, outcome) {
        println!("{}", line);
    }
}

// ============================================================================
// Batch
// ============================================================================

/// Format one batch item's outcome as a single line.
pub fn format_item_outcome(outcome: &ItemOutcome) -> String {
    match outcome {
        ItemOutcome::Resized {
            input,
            output,
            dims,
        } => format!(
            "Resized {} → {} ({}x{})",
            input.display(),
            output.display(),
            dims.width,
            dims.height
        ),
        ItemOutcome::Missing { input } => {
            format!("Warning: file not found: {}", input.display())
        }
        ItemOutcome::Failed { input, error } => {
            format!("Error resizing {}: {}", input.display(), error)
        }
    }
}

/// Format the batch summary line with per-outcome counts.
pub fn format_batch_summary(outcomes: &[ItemOutcome]) -> String {
    let resized = outcomes
        .iter()
        .filter(|o| matches!(o, ItemOutcome::Resized { .. }))
        .count();
    let missing = outcomes
        .iter()
        .filter(|o| matches!(o, ItemOutcome::Missing { .. }))
        .count();
    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, ItemOutcome::Failed { .. }))
        .count();
    format!(
        "Processed {} jobs: {} resized, {} missing, {} failed",
        outcomes.len(),
        resized,
        missing,
        failed
    )
}

pub fn print_batch_report(outcomes: &[ItemOutcome]) {
    for outcome in outcomes {
        println!("{}", format_item_outcome(outcome));
    }
    println!("{}", format_batch_summary(outcomes));
}

// ============================================================================
// Check
// ============================================================================

/// Format one job line for the check report.
pub fn format_check_line(index: usize, job: &BatchJob, exists: bool) -> String {
    let line = format!(
        "{} {} {} {}",
        format_index(index),
        job.input.display(),
        job.target,
        job.anchor
    );
    if exists {
        line
    } else {
        format!("{} (missing)", line)
    }
}

/// Format the check summary line.
pub fn format_check_summary(total: usize, missing: usize) -> String {
    if missing == 0 {
        format!("{} jobs, all inputs present", total)
    } else {
        format!("{} jobs, {} missing input{}", total, missing, plural(missing))
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

pub fn print_check_report(jobs: &[(BatchJob, bool)]) {
    for (i, (job, exists)) in jobs.iter().enumerate() {
        println!("{}", format_check_line(i + 1, job, *exists));
    }
    let missing = jobs.iter().filter(|(_, exists)| !exists).count();
    println!("{}", format_check_summary(jobs.len(), missing));
}
