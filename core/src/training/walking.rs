//! Sports walking calculator.

use super::{divide, FieldReader, Training, TrainingBase, MINS_IN_HOUR};
use crate::error::TrainingError;
use crate::models::{RawValue, WorkoutCode};
use crate::settings::{Settings, WalkingDivision};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const SPEED_EXPONENT: i32 = 2;
const RATIO_QUANTITY: &str = "walking speed to height ratio";

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration_h, weight_kg),
            height_cm,
        }
    }

    /// Build from `[action, duration_h, weight_kg, height_cm]`.
    pub fn from_values(values: &[RawValue]) -> Result<Self, TrainingError> {
        let fields = FieldReader::new(WorkoutCode::SportsWalking, values)?;
        Ok(Self {
            base: TrainingBase::read(&fields)?,
            height_cm: fields.real(3)?,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::SportsWalking
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    /// Height enters the formula in centimetres and the speed/height ratio
    /// is floored unless `WalkingDivision::True` is selected.
    fn spent_calories(&self, settings: &Settings) -> Result<f64, TrainingError> {
        let speed = self.mean_speed_kmh()?;
        let squared = speed.powi(SPEED_EXPONENT);
        let ratio = match settings.walking_division {
            WalkingDivision::Floor => floor_div(squared, self.height_cm, RATIO_QUANTITY)?,
            WalkingDivision::True => divide(squared, self.height_cm, RATIO_QUANTITY)?,
        };
        Ok(
            (CALORIES_WEIGHT_MULTIPLIER + ratio * CALORIES_SPEED_HEIGHT_MULTIPLIER)
                * self.base.weight_kg
                * self.base.duration_h
                * MINS_IN_HOUR,
        )
    }
}

/// Floor division rounded the way the historical reports computed it: the
/// quotient comes from the remainder, so `floor_div(1.0, 0.1)` is 9, not 10.
fn floor_div(numerator: f64, denominator: f64, quantity: &str) -> Result<f64, TrainingError> {
    if denominator == 0.0 {
        return Err(TrainingError::division_by_zero(quantity));
    }
    let remainder = numerator % denominator;
    let mut quotient = (numerator - remainder) / denominator;
    if remainder != 0.0 && (denominator < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }
    if quotient == 0.0 {
        return Ok(0.0_f64.copysign(numerator / denominator));
    }
    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        Ok(floored + 1.0)
    } else {
        Ok(floored)
    }
}
