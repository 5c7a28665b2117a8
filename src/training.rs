//! Distance, speed and calorie formulas per activity.
//!
//! All speeds are km/h, distances km, durations hours.

use crate::error::{Result, WorkoutError};
use crate::types::{
    Basics, Running, SportsWalking, Swimming, Workout, WorkoutKind, WorkoutSummary,
};
use crate::utils::floor_div;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Step length for running and walking.
pub const LEN_STEP: f64 = 0.65;
/// Stroke length for swimming.
pub const LEN_STROKE: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// What every workout variant must be able to report.
pub trait Training {
    fn kind(&self) -> WorkoutKind;
    fn basics(&self) -> &Basics;

    /// Length covered per action, in meters.
    fn step_len(&self) -> f64 {
        LEN_STEP
    }

    fn distance(&self) -> f64 {
        let b = self.basics();
        as_f64(b.action) * self.step_len() / M_IN_KM
    }

    fn mean_speed(&self) -> f64 {
        self.distance() / self.basics().duration
    }

    fn calories(&self) -> f64;

    fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            label: self.kind().label(),
            duration: self.basics().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.calories(),
        }
    }

    /// Like [`Training::summary`], but refuses results that overflowed to inf or NaN.
    fn checked_summary(&self) -> Result<WorkoutSummary> {
        let s = self.summary();
        for (quantity, value) in [
            ("distance", s.distance),
            ("mean speed", s.speed),
            ("calories", s.calories),
        ] {
            if !value.is_finite() {
                return Err(WorkoutError::NonFinite { quantity, value });
            }
        }
        Ok(s)
    }
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(n: u64) -> f64 {
    n as f64
}

fn minutes(b: &Basics) -> f64 {
    b.duration * MIN_IN_H
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn basics(&self) -> &Basics {
        &self.basics
    }

    fn calories(&self) -> f64 {
        let b = &self.basics;
        (RUN_SPEED_MULTIPLIER * self.mean_speed() - RUN_SPEED_SHIFT) * b.weight / M_IN_KM
            * minutes(b)
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn basics(&self) -> &Basics {
        &self.basics
    }

    fn calories(&self) -> f64 {
        let b = &self.basics;
        let speed = self.mean_speed();
        (WLK_WEIGHT_MULTIPLIER * b.weight
            + floor_div(speed.powi(2), self.height) * WLK_SPEED_HEIGHT_MULTIPLIER * b.weight)
            * minutes(b)
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn basics(&self) -> &Basics {
        &self.basics
    }

    fn step_len(&self) -> f64 {
        LEN_STROKE
    }

    // Pool distance, not strokes.
    fn mean_speed(&self) -> f64 {
        self.length_pool * as_f64(self.count_pool) / M_IN_KM / self.basics.duration
    }

    fn calories(&self) -> f64 {
        (self.mean_speed() + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * self.basics.weight
    }
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Self::Running(w) => w,
            Self::SportsWalking(w) => w,
            Self::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn kind(&self) -> WorkoutKind {
        self.as_training().kind()
    }

    fn basics(&self) -> &Basics {
        self.as_training().basics()
    }

    fn step_len(&self) -> f64 {
        self.as_training().step_len()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn calories(&self) -> f64 {
        self.as_training().calories()
    }
}
