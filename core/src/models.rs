use crate::error::TrainingError;

/// Workout codes emitted by the sensor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum WorkoutCode {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutCode {
    pub const ALL: [WorkoutCode; 3] = [
        WorkoutCode::Swimming,
        WorkoutCode::Running,
        WorkoutCode::SportsWalking,
    ];

    /// Resolve a three-letter package code. Matching is case-sensitive.
    pub fn parse(code: &str) -> Result<Self, TrainingError> {
        match code {
            "SWM" => Ok(WorkoutCode::Swimming),
            "RUN" => Ok(WorkoutCode::Running),
            "WLK" => Ok(WorkoutCode::SportsWalking),
            other => Err(TrainingError::UnknownWorkoutType(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Swimming => "SWM",
            WorkoutCode::Running => "RUN",
            WorkoutCode::SportsWalking => "WLK",
        }
    }

    /// Name shown in the "Training type" field of a summary.
    pub fn training_type(&self) -> &'static str {
        match self {
            WorkoutCode::Swimming => "Swimming",
            WorkoutCode::Running => "Running",
            WorkoutCode::SportsWalking => "SportsWalking",
        }
    }

    /// Positional field names, in package order.
    pub fn expected_fields(&self) -> &'static [&'static str] {
        match self {
            WorkoutCode::Running => &["action", "duration_h", "weight_kg"],
            WorkoutCode::SportsWalking => &["action", "duration_h", "weight_kg", "height_cm"],
            WorkoutCode::Swimming => &[
                "action",
                "duration_h",
                "weight_kg",
                "length_pool_m",
                "count_pool",
            ],
        }
    }
}

/// A single positional sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, uniffi::Enum)]
pub enum RawValue {
    Integer { value: i64 },
    Real { value: f64 },
}

impl RawValue {
    pub fn int(value: i64) -> Self {
        RawValue::Integer { value }
    }

    pub fn real(value: f64) -> Self {
        RawValue::Real { value }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            RawValue::Integer { value } => *value as f64,
            RawValue::Real { value } => *value,
        }
    }
}

/// One workout code with its raw positional values.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct WorkoutPackage {
    pub workout_type: String,
    pub data: Vec<RawValue>,
}

impl WorkoutPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<RawValue>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}
