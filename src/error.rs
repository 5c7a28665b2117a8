use thiserror::Error;

/// Everything that can go wrong turning a raw package into a workout.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("unknown workout type: {0:?} (expected RUN, WLK or SWM)")]
    UnknownWorkoutType(String),

    #[error("{kind} expects {expected} fields, got {got}")]
    FieldCount {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid {field}: {value} ({reason})")]
    InvalidField {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("duration must be nonzero")]
    ZeroDuration,

    #[error("height must be nonzero")]
    ZeroHeight,

    #[error("{quantity} is not a finite number ({value})")]
    NonFinite { quantity: &'static str, value: f64 },

    #[error("malformed package input: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
