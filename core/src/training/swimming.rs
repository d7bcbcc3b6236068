//! Swimming calculator.
//!
//! Distance still comes from the stroke count, but mean speed is taken from
//! pool length and laps completed.

use super::{divide, FieldReader, Training, TrainingBase, M_IN_KM};
use crate::error::TrainingError;
use crate::models::{RawValue, WorkoutCode};
use crate::settings::Settings;

/// Distance covered by one stroke, in metres.
const LEN_STROKE_M: f64 = 1.38;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    length_pool_m: f64,
    count_pool: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: u32,
    ) -> Self {
        Self {
            base: TrainingBase::new(action, duration_h, weight_kg),
            length_pool_m,
            count_pool,
        }
    }

    /// Build from `[action, duration_h, weight_kg, length_pool_m, count_pool]`.
    pub fn from_values(values: &[RawValue]) -> Result<Self, TrainingError> {
        let fields = FieldReader::new(WorkoutCode::Swimming, values)?;
        Ok(Self {
            base: TrainingBase::read(&fields)?,
            length_pool_m: fields.real(3)?,
            count_pool: fields.count(4)?,
        })
    }

    pub fn length_pool_m(&self) -> f64 {
        self.length_pool_m
    }

    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::Swimming
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn len_step_m(&self) -> f64 {
        LEN_STROKE_M
    }

    fn mean_speed_kmh(&self) -> Result<f64, TrainingError> {
        divide(
            self.length_pool_m * self.count_pool as f64 / M_IN_KM,
            self.base.duration_h,
            "mean speed",
        )
    }

    fn spent_calories(&self, _settings: &Settings) -> Result<f64, TrainingError> {
        let speed = self.mean_speed_kmh()?;
        Ok((speed + CALORIES_MEAN_SPEED_SHIFT) * CALORIES_WEIGHT_MULTIPLIER * self.base.weight_kg)
    }
}
