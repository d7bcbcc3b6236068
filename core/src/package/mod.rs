//! Sensor packages and dispatch to training calculators.
//!
//! A package is a workout code plus positional raw values. [`read_package`]
//! selects the calculator for the code and builds it from the values.
//!
//! # Example
//!
//! ```
//! use workout_compute::package::{parse_packages, read_package};
//! use workout_compute::{Settings, Training};
//!
//! let packages = parse_packages("SWM 720, 1, 80, 25, 40").expect("should parse");
//! let training = read_package(&packages[0].workout_type, &packages[0].data)
//!     .expect("known workout");
//! let record = training.show_training_info(&Settings::default()).expect("should compute");
//! assert!((record.calories - 336.0).abs() < 1e-9);
//! ```

pub mod parser;

pub use parser::parse_packages;

use tracing::debug;

use crate::error::TrainingError;
use crate::models::{RawValue, WorkoutCode, WorkoutPackage};
use crate::training::{Running, SportsWalking, Swimming, Training};

/// Build the calculator for `workout_type` from positional `data`.
pub fn read_package(
    workout_type: &str,
    data: &[RawValue],
) -> Result<Box<dyn Training>, TrainingError> {
    let code = WorkoutCode::parse(workout_type)?;
    debug!(workout_type, values = data.len(), "reading package");

    let training: Box<dyn Training> = match code {
        WorkoutCode::Swimming => Box::new(Swimming::from_values(data)?),
        WorkoutCode::Running => Box::new(Running::from_values(data)?),
        WorkoutCode::SportsWalking => Box::new(SportsWalking::from_values(data)?),
    };
    Ok(training)
}

/// The reference packages processed when no input is supplied.
#[uniffi::export]
pub fn default_packages() -> Vec<WorkoutPackage> {
    let ints = |values: &[i64]| -> Vec<RawValue> {
        values.iter().copied().map(RawValue::int).collect()
    };
    vec![
        WorkoutPackage::new("SWM", ints(&[720, 1, 80, 25, 40])),
        WorkoutPackage::new("RUN", ints(&[15000, 1, 75])),
        WorkoutPackage::new("WLK", ints(&[9000, 1, 75, 180])),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn ints(values: &[i64]) -> Vec<RawValue> {
        values.iter().copied().map(RawValue::int).collect()
    }

    #[test]
    fn test_read_package_selects_variant() {
        let swim = read_package("SWM", &ints(&[720, 1, 80, 25, 40])).unwrap();
        assert_eq!(swim.code(), WorkoutCode::Swimming);

        let run = read_package("RUN", &ints(&[15000, 1, 75])).unwrap();
        assert_eq!(run.code(), WorkoutCode::Running);

        let walk = read_package("WLK", &ints(&[9000, 1, 75, 180])).unwrap();
        assert_eq!(walk.code(), WorkoutCode::SportsWalking);
    }

    #[test]
    fn test_read_package_unknown_code() {
        let result = read_package("XYZ", &ints(&[1, 1, 1]));
        assert_eq!(
            result.err(),
            Some(TrainingError::UnknownWorkoutType("XYZ".to_string()))
        );
    }

    #[test]
    fn test_read_package_wrong_arity() {
        let result = read_package("SWM", &ints(&[720, 1, 80]));
        assert!(matches!(
            result,
            Err(TrainingError::InvalidInput { ref workout_type, .. }) if workout_type == "SWM"
        ));

        let result = read_package("RUN", &ints(&[15000, 1, 75, 180]));
        assert!(matches!(result, Err(TrainingError::InvalidInput { .. })));
    }

    #[test]
    fn test_default_packages_compute() {
        let settings = Settings::default();
        let calories: Vec<f64> = default_packages()
            .iter()
            .map(|p| {
                read_package(&p.workout_type, &p.data)
                    .and_then(|t| t.show_training_info(&settings))
                    .unwrap()
                    .calories
            })
            .collect();
        assert_eq!(calories.len(), 3);
        assert!((calories[0] - 336.0).abs() < 1e-9);
        assert!((calories[1] - 699.75).abs() < 1e-9);
        assert!((calories[2] - 157.5).abs() < 1e-9);
    }
}
