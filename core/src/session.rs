//! Computed workout summaries and their rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::settings::Language;

/// Immutable summary of one workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct SessionRecord {
    /// Workout name, e.g. `Running`
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometres
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Kilocalories spent
    pub calories: f64,
}

impl SessionRecord {
    /// Render the English summary line.
    pub fn format_message(&self) -> String {
        self.format_message_in(Language::English)
    }

    pub fn format_message_in(&self, language: Language) -> String {
        match language {
            Language::English => format!(
                "Training type: {} Duration: {:.3} h.; Distance: {:.3} km; \
                 Mean speed: {:.3} km/h; Calories burned: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
            Language::Russian => format!(
                "Тип тренировки: {} Длительность: {:.3} ч.; Дистанция: {:.3} км; \
                 Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
        }
    }
}

impl fmt::Display for SessionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_message())
    }
}

#[uniffi::export]
pub fn format_summary(record: SessionRecord, language: Language) -> String {
    record.format_message_in(language)
}
