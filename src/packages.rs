use crate::dlog;
use crate::error::{Result, WorkoutError};
use crate::types::{Basics, Running, SportsWalking, Swimming, Workout, WorkoutKind};
use anyhow::Context;
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

/// One raw tracker reading: package code plus positional fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,
    pub fields: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, fields: &[f64]) -> Self {
        Self {
            code: code.into(),
            fields: fields.to_vec(),
        }
    }
}

/// The packages processed when no input file is given.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Build the workout a package code names, consuming fields in package order.
pub fn read_package(code: &str, fields: &[f64]) -> Result<Workout> {
    let kind: WorkoutKind = code.parse()?;
    let names = kind.field_names();
    if fields.len() != names.len() {
        return Err(WorkoutError::FieldCount {
            kind: kind.label(),
            expected: names.len(),
            got: fields.len(),
        });
    }

    let basics = Basics {
        action: count(names[0], fields[0])?,
        duration: measure(names[1], fields[1])?,
        weight: measure(names[2], fields[2])?,
    };
    if basics.duration == 0.0 {
        return Err(WorkoutError::ZeroDuration);
    }

    let workout = match kind {
        WorkoutKind::Running => Workout::Running(Running { basics }),
        WorkoutKind::SportsWalking => {
            let height = measure(names[3], fields[3])?;
            if height == 0.0 {
                return Err(WorkoutError::ZeroHeight);
            }
            Workout::SportsWalking(SportsWalking { basics, height })
        }
        WorkoutKind::Swimming => Workout::Swimming(Swimming {
            basics,
            length_pool: measure(names[3], fields[3])?,
            count_pool: count(names[4], fields[4])?,
        }),
    };

    dlog!("package code={code} fields={fields:?} -> {workout:?}");
    Ok(workout)
}

fn measure(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(WorkoutError::InvalidField {
            field,
            value,
            reason: "not a finite number",
        });
    }
    if value < 0.0 {
        return Err(WorkoutError::InvalidField {
            field,
            value,
            reason: "negative",
        });
    }
    Ok(value)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(field: &'static str, value: f64) -> Result<u64> {
    let value = measure(field, value)?;
    if value.fract() != 0.0 {
        return Err(WorkoutError::InvalidField {
            field,
            value,
            reason: "not a whole number",
        });
    }
    // 2^53: above this f64 no longer holds every integer.
    if value > 9_007_199_254_740_992.0 {
        return Err(WorkoutError::InvalidField {
            field,
            value,
            reason: "too large",
        });
    }
    Ok(value as u64)
}

/// Parse a JSON array of `[code, [fields...]]` pairs.
pub fn parse_packages(text: &str) -> Result<Vec<Package>> {
    let root: JsonValue =
        serde_json::from_str(text).map_err(|e| WorkoutError::Input(e.to_string()))?;
    let Some(entries) = root.as_array() else {
        return Err(WorkoutError::Input("top level must be an array".into()));
    };

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| parse_entry(entry).ok_or_else(|| bad_entry(i)))
        .collect()
}

fn parse_entry(entry: &JsonValue) -> Option<Package> {
    let [code, fields] = entry.as_array()?.as_slice() else {
        return None;
    };
    let code = code.as_str()?;
    let fields = fields
        .as_array()?
        .iter()
        .map(JsonValue::as_f64)
        .collect::<Option<Vec<f64>>>()?;
    Some(Package {
        code: code.to_string(),
        fields,
    })
}

fn bad_entry(i: usize) -> WorkoutError {
    WorkoutError::Input(format!("entry {i} must be [\"CODE\", [numbers...]]"))
}

/// Read packages from a JSON file.
pub fn read_packages_file(path: &Path) -> anyhow::Result<Vec<Package>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading packages: {}", path.display()))?;
    let packages =
        parse_packages(&text).with_context(|| format!("parsing packages: {}", path.display()))?;
    tracing::info!(path = %path.display(), packages = packages.len(), "packages loaded");
    Ok(packages)
}
