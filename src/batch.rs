//! Sequential batch driver.
//!
//! Runs a list of fit-and-crop jobs in order and collects a per-item outcome
//! for each. The batch never aborts early: a missing input or a failed
//! transform is recorded and the next item runs regardless. Items are
//! independent; no state is carried between them.
//!
//! Each item holds its image in memory only for the duration of its own
//! transform; handles are released before the next item starts.

use crate::imaging::{
    AnchorMode, BackendError, Dimensions, ImageBackend, TargetSize, fit_crop_file,
};
use std::path::PathBuf;

/// A single batch entry: input path, target size, crop anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchJob {
    pub input: PathBuf,
    pub target: TargetSize,
    pub anchor: AnchorMode,
}

/// Per-item result of a batch run.
#[derive(Debug)]
pub enum ItemOutcome {
    /// Input resized and cropped; output written at exactly `dims`.
    Resized {
        input: PathBuf,
        output: PathBuf,
        dims: Dimensions,
    },
    /// Input path does not exist; no transform was attempted.
    Missing { input: PathBuf },
    /// Decode, transform, or save failed.
    Failed {
        input: PathBuf,
        error: BackendError,
    },
}

/// Run every job in input order, one at a time.
///
/// Returns one [`ItemOutcome`] per job, in the same order.
pub fn run_batch(backend: &impl ImageBackend, jobs: &[BatchJob]) -> Vec<ItemOutcome> {
    jobs.iter().map(|job| run_item(backend, job)).collect()
}

fn run_item(backend: &impl ImageBackend, job: &BatchJob) -> ItemOutcome {
    if !job.input.exists() {
        return ItemOutcome::Missing {
            input: job.input.clone(),
        };
    }

    match fit_crop_file(backend, &job.input, job.target, job.anchor) {
        Ok(outcome) => ItemOutcome::Resized {
            input: job.input.clone(),
            output: outcome.output,
            dims: outcome.final_dims,
        },
        Err(error) => ItemOutcome::Failed {
            input: job.input.clone(),
            error,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::MockBackend;
    use std::fs;

    fn touch(path: &std::path::Path) {
        fs::write(path, b"stub").unwrap();
    }

    fn job(input: PathBuf, width: u32, height: u32, anchor: AnchorMode) -> BatchJob {
        BatchJob {
            input,
            target: TargetSize::new(width, height),
            anchor,
        }
    }

    #[test]
    fn missing_item_does_not_stop_the_batch() {
        let tmp = tempfile::TempDir::new().unwrap();
        let first = tmp.path().join("first.jpg");
        let third = tmp.path().join("third.jpg");
        touch(&first);
        touch(&third);

        // identify results pop from the end: one per existing input
        let backend = MockBackend::with_dimensions(vec![
            Dimensions {
                width: 800,
                height: 600,
            },
            Dimensions {
                width: 800,
                height: 600,
            },
        ]);

        let jobs = vec![
            job(first, 400, 400, AnchorMode::Center),
            job(tmp.path().join("absent.jpg"), 400, 400, AnchorMode::Center),
            job(third, 640, 400, AnchorMode::TopLeft),
        ];
        let outcomes = run_batch(&backend, &jobs);

        assert_eq!(outcomes.len(), 3);
        assert!(matches!(&outcomes[0], ItemOutcome::Resized { .. }));
        assert!(matches!(&outcomes[1], ItemOutcome::Missing { .. }));
        assert!(matches!(
            &outcomes[2],
            ItemOutcome::Resized { dims, .. } if dims.width == 640 && dims.height == 400
        ));
    }

    #[test]
    fn missing_item_skips_the_transform() {
        let tmp = tempfile::TempDir::new().unwrap();
        let backend = MockBackend::new();

        let jobs = vec![job(
            tmp.path().join("absent.jpg"),
            100,
            100,
            AnchorMode::Center,
        )];
        let outcomes = run_batch(&backend, &jobs);

        assert!(matches!(&outcomes[0], ItemOutcome::Missing { .. }));
        assert!(backend.get_operations().is_empty());
    }

    #[test]
    fn failed_item_records_error_and_continues() {
        let tmp = tempfile::TempDir::new().unwrap();
        let bad = tmp.path().join("bad.jpg");
        let good = tmp.path().join("good.jpg");
        touch(&bad);
        touch(&good);

        let backend = MockBackend::with_dimensions(vec![
            Dimensions {
                width: 800,
                height: 600,
            },
            Dimensions {
                width: 800,
                height: 600,
            },
        ])
        .failing_on(vec![bad.clone()]);

        let jobs = vec![
            job(bad, 200, 200, AnchorMode::Center),
            job(good, 200, 200, AnchorMode::Center),
        ];
        let outcomes = run_batch(&backend, &jobs);

        assert!(matches!(&outcomes[0], ItemOutcome::Failed { .. }));
        assert!(matches!(&outcomes[1], ItemOutcome::Resized { .. }));
    }

    #[test]
    fn outcomes_preserve_job_order() {
        let tmp = tempfile::TempDir::new().unwrap();
        let a = tmp.path().join("a.jpg");
        let b = tmp.path().join("b.jpg");
        touch(&a);
        touch(&b);

        let backend = MockBackend::with_dimensions(vec![
            Dimensions {
                width: 10,
                height: 10,
            },
            Dimensions {
                width: 10,
                height: 10,
            },
        ]);

        let jobs = vec![
            job(a.clone(), 5, 5, AnchorMode::Center),
            job(b.clone(), 5, 5, AnchorMode::Center),
        ];
        let outcomes = run_batch(&backend, &jobs);

        assert!(matches!(&outcomes[0], ItemOutcome::Resized { input, .. } if *input == a));
        assert!(matches!(&outcomes[1], ItemOutcome::Resized { input, .. } if *input == b));
    }

    #[test]
    fn empty_job_list_yields_no_outcomes() {
        let backend = MockBackend::new();
        assert!(run_batch(&backend, &[]).is_empty());
    }
}
