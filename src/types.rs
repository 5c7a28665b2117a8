use crate::error::WorkoutError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Sensor package code, one per supported activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [Self; 3] = [Self::Running, Self::SportsWalking, Self::Swimming];

    /// Three-letter code used by the tracker packages.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Label shown in the summary line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Names of the positional fields, in package order.
    pub const fn field_names(self) -> &'static [&'static str] {
        match self {
            Self::Running => &["action", "duration", "weight"],
            Self::SportsWalking => &["action", "duration", "weight", "height"],
            Self::Swimming => &[
                "action",
                "duration",
                "weight",
                "length_pool",
                "count_pool",
            ],
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            "SWM" => Ok(Self::Swimming),
            other => Err(WorkoutError::UnknownWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Fields every workout carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basics {
    /// Steps or strokes.
    pub action: u64,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub basics: Basics,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub basics: Basics,
    /// Centimeters.
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub basics: Basics,
    /// Meters.
    pub length_pool: f64,
    /// Pool lengths completed.
    pub count_pool: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

/// Read-only result of one workout, ready to print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    #[serde(rename = "type")]
    pub label: &'static str,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl WorkoutSummary {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.label, self.duration, self.distance, self.speed, self.calories
        )
    }
}
