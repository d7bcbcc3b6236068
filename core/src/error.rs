use thiserror::Error;

/// Error type for package parsing, dispatch and training computations.
#[derive(Error, Debug, Clone, PartialEq, uniffi::Error)]
#[uniffi(flat_error)]
pub enum TrainingError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("invalid input for {workout_type}: {message}")]
    InvalidInput {
        workout_type: String,
        message: String,
    },

    #[error("division by zero computing {quantity}")]
    DivisionByZero { quantity: String },

    #[error("parse error on line {line}: {message}")]
    Parse { line: u32, message: String },

    #[error("output error: {0}")]
    Output(String),
}

impl TrainingError {
    pub(crate) fn invalid_input(workout_type: &str, message: impl Into<String>) -> Self {
        TrainingError::InvalidInput {
            workout_type: workout_type.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn division_by_zero(quantity: &str) -> Self {
        TrainingError::DivisionByZero {
            quantity: quantity.to_string(),
        }
    }
}

impl From<std::io::Error> for TrainingError {
    fn from(err: std::io::Error) -> Self {
        TrainingError::Output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_error_display() {
        let err = TrainingError::UnknownWorkoutType("XYZ".to_string());
        assert_eq!(err.to_string(), "unknown workout type: XYZ");

        let err = TrainingError::invalid_input("RUN", "expected 3 values, got 2");
        assert_eq!(
            err.to_string(),
            "invalid input for RUN: expected 3 values, got 2"
        );

        let err = TrainingError::division_by_zero("mean speed");
        assert_eq!(err.to_string(), "division by zero computing mean speed");

        let err = TrainingError::Parse {
            line: 3,
            message: "missing workout code".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "parse error on line 3: missing workout code"
        );
    }

    #[test]
    fn test_io_error_becomes_output_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: TrainingError = io.into();
        assert!(matches!(err, TrainingError::Output(msg) if msg == "pipe closed"));
    }
}
