pub mod error;
pub mod models;
pub mod package;
pub mod report;
pub mod session;
pub mod settings;
pub mod training;

uniffi::setup_scaffolding!();

pub use error::TrainingError;
pub use models::{RawValue, WorkoutCode, WorkoutPackage};
pub use package::{default_packages, parse_packages, read_package};
pub use report::{
    run, run_batch, BatchFailure, BatchPolicy, BatchReport, OutputFormat, ReportOptions,
};
pub use session::{format_summary, SessionRecord};
pub use settings::{Language, Settings, WalkingDivision};
pub use training::{Running, SportsWalking, Swimming, Training};

/// Dispatch one package and compute its summary record.
#[uniffi::export]
pub fn summarize_package(
    workout_type: String,
    data: Vec<RawValue>,
    settings: Settings,
) -> Result<SessionRecord, TrainingError> {
    let training = read_package(&workout_type, &data)?;
    training.show_training_info(&settings)
}
