//! Training calculators.
//!
//! Every workout variant implements [`Training`]. Distance and mean speed are
//! shared formulas with per-variant overrides; calorie consumption has no
//! shared formula, so each variant must provide its own.
//!
//! # Example
//!
//! ```
//! use workout_compute::training::{Running, Training};
//! use workout_compute::Settings;
//!
//! let run = Running::new(15_000, 1.0, 75.0);
//! let record = run.show_training_info(&Settings::default()).expect("should compute");
//! assert_eq!(
//!     record.format_message(),
//!     "Training type: Running Duration: 1.000 h.; Distance: 9.750 km; \
//!      Mean speed: 9.750 km/h; Calories burned: 699.750."
//! );
//! ```

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::error::TrainingError;
use crate::models::{RawValue, WorkoutCode};
use crate::session::SessionRecord;
use crate::settings::Settings;

/// Distance covered by one action (step or stroke), in metres.
pub const LEN_STEP_M: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MINS_IN_HOUR: f64 = 60.0;

/// Inputs common to every workout: action count, duration and body weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

impl TrainingBase {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }

    fn read(fields: &FieldReader<'_>) -> Result<Self, TrainingError> {
        Ok(Self {
            action: fields.count(0)?,
            duration_h: fields.real(1)?,
            weight_kg: fields.real(2)?,
        })
    }
}

/// Shared interface of all workout calculators.
pub trait Training: Send + Sync + std::fmt::Debug {
    fn code(&self) -> WorkoutCode;

    fn base(&self) -> &TrainingBase;

    /// Metres covered per action.
    fn len_step_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance in kilometres.
    fn distance_km(&self) -> f64 {
        self.base().action as f64 * self.len_step_m() / M_IN_KM
    }

    /// Mean speed in km/h. Fails when the duration is zero.
    fn mean_speed_kmh(&self) -> Result<f64, TrainingError> {
        divide(self.distance_km(), self.base().duration_h, "mean speed")
    }

    /// Kilocalories spent during the workout.
    fn spent_calories(&self, settings: &Settings) -> Result<f64, TrainingError>;

    /// Compute the summary record for this workout.
    fn show_training_info(&self, settings: &Settings) -> Result<SessionRecord, TrainingError> {
        let base = self.base();
        Ok(SessionRecord {
            training_type: self.code().training_type().to_string(),
            duration: base.duration_h,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh()?,
            calories: self.spent_calories(settings)?,
        })
    }
}

pub(crate) fn divide(numerator: f64, denominator: f64, quantity: &str) -> Result<f64, TrainingError> {
    if denominator == 0.0 {
        Err(TrainingError::division_by_zero(quantity))
    } else {
        Ok(numerator / denominator)
    }
}

/// Positional access to raw package values, checked against the variant's field list.
pub(crate) struct FieldReader<'a> {
    code: WorkoutCode,
    values: &'a [RawValue],
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(code: WorkoutCode, values: &'a [RawValue]) -> Result<Self, TrainingError> {
        let expected = code.expected_fields();
        if values.len() != expected.len() {
            return Err(TrainingError::invalid_input(
                code.as_str(),
                format!(
                    "expected {} values ({}), got {}",
                    expected.len(),
                    expected.join(", "),
                    values.len()
                ),
            ));
        }
        Ok(Self { code, values })
    }

    /// A non-negative integer field.
    pub(crate) fn count(&self, index: usize) -> Result<u32, TrainingError> {
        let name = self.code.expected_fields()[index];
        match self.values[index] {
            RawValue::Integer { value } => u32::try_from(value).map_err(|_| {
                TrainingError::invalid_input(
                    self.code.as_str(),
                    format!("{name} must be a non-negative integer, got {value}"),
                )
            }),
            RawValue::Real { value } => Err(TrainingError::invalid_input(
                self.code.as_str(),
                format!("{name} must be an integer, got {value}"),
            )),
        }
    }

    /// A finite numeric field; integers are widened.
    pub(crate) fn real(&self, index: usize) -> Result<f64, TrainingError> {
        let name = self.code.expected_fields()[index];
        let value = self.values[index].as_f64();
        if value.is_finite() {
            Ok(value)
        } else {
            Err(TrainingError::invalid_input(
                self.code.as_str(),
                format!("{name} must be finite, got {value}"),
            ))
        }
    }
}
