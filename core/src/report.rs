//! Report driver: turns calculators into summary lines.

use std::io::Write;

use tracing::{debug, info, warn};

use crate::error::TrainingError;
use crate::models::WorkoutPackage;
use crate::package::read_package;
use crate::session::SessionRecord;
use crate::settings::Settings;
use crate::training::Training;

/// What to do when a package in a batch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Stop at the first failing package and return its error.
    #[default]
    Abort,
    /// Record the failure and continue with the next package.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One summary line per record.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportOptions {
    pub settings: Settings,
    pub format: OutputFormat,
    pub policy: BatchPolicy,
}

/// A package that failed under [`BatchPolicy::Skip`].
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    /// Position of the package in the batch
    pub index: usize,
    pub workout_type: String,
    pub error: TrainingError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub records: Vec<SessionRecord>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Compute the summary for `training` and write it to `out`.
pub fn run<W: Write>(
    training: &dyn Training,
    options: &ReportOptions,
    out: &mut W,
) -> Result<SessionRecord, TrainingError> {
    let record = training.show_training_info(&options.settings)?;
    debug!(
        training_type = %record.training_type,
        distance = record.distance,
        speed = record.speed,
        calories = record.calories,
        "computed session"
    );

    match options.format {
        OutputFormat::Text => {
            writeln!(out, "{}", record.format_message_in(options.settings.language))?;
        }
        OutputFormat::Json => {
            let line = serde_json::to_string(&record)
                .map_err(|e| TrainingError::Output(e.to_string()))?;
            writeln!(out, "{line}")?;
        }
    }
    Ok(record)
}

/// Process packages in order, writing one line per successful record.
///
/// Write failures always abort, whatever the policy.
pub fn run_batch<W: Write>(
    packages: &[WorkoutPackage],
    options: &ReportOptions,
    out: &mut W,
) -> Result<BatchReport, TrainingError> {
    let mut report = BatchReport::default();

    for (index, package) in packages.iter().enumerate() {
        let outcome = read_package(&package.workout_type, &package.data)
            .and_then(|training| run(training.as_ref(), options, out));

        match outcome {
            Ok(record) => report.records.push(record),
            Err(error @ TrainingError::Output(_)) => return Err(error),
            Err(error) => match options.policy {
                BatchPolicy::Abort => return Err(error),
                BatchPolicy::Skip => {
                    warn!(index, workout_type = %package.workout_type, %error, "skipping package");
                    report.failures.push(BatchFailure {
                        index,
                        workout_type: package.workout_type.clone(),
                        error,
                    });
                }
            },
        }
    }

    out.flush()?;
    info!(
        records = report.records.len(),
        failures = report.failures.len(),
        "batch complete"
    );
    Ok(report)
}
