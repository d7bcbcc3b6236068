//! Running calculator.

use super::{FieldReader, Training, TrainingBase, MINS_IN_HOUR, M_IN_KM};
use crate::error::TrainingError;
use crate::models::{RawValue, WorkoutCode};
use crate::settings::Settings;

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration_h, weight_kg),
        }
    }

    /// Build from `[action, duration_h, weight_kg]`.
    pub fn from_values(values: &[RawValue]) -> Result<Self, TrainingError> {
        let fields = FieldReader::new(WorkoutCode::Running, values)?;
        Ok(Self {
            base: TrainingBase::read(&fields)?,
        })
    }
}

impl Training for Running {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::Running
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self, _settings: &Settings) -> Result<f64, TrainingError> {
        let speed = self.mean_speed_kmh()?;
        Ok(
            (CALORIES_MEAN_SPEED_MULTIPLIER * speed - CALORIES_MEAN_SPEED_SHIFT)
                * self.base.weight_kg
                / M_IN_KM
                * self.base.duration_h
                * MINS_IN_HOUR,
        )
    }
}
