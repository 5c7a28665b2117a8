use chrono::Duration;
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Initialize colorful logging on stderr, leaving stdout to the summaries.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let level = log_level(verbose, quiet);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,sportlog={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

fn log_level(verbose: u8, quiet: u8) -> &'static str {
    let net = i16::from(verbose) - i16::from(quiet);
    match net {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    }
}

/// Render a duration given in hours as `HH:MM:SS`.
#[allow(clippy::cast_possible_truncation)]
pub fn format_duration(hours: f64) -> String {
    let ms = (hours * 3_600_000.0).round() as i64;
    Duration::try_milliseconds(ms).map_or_else(
        || "unknown".to_string(),
        |d| {
            let secs = d.num_seconds().unsigned_abs();
            let h = secs / 3600;
            let m = (secs % 3600) / 60;
            let s = secs % 60;
            format!("{h:02}:{m:02}:{s:02}")
        },
    )
}

/// Floor division of floats, rounding toward negative infinity.
///
/// Goes through `fmod` rather than `(a / b).floor()` so that quotients which
/// round up to an integer in `a / b` still floor correctly.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_div_truncates_fraction() {
        assert_eq!(floor_div(7.5_f64.powi(2), 180.0), 0.0);
        assert_eq!(floor_div(400.0, 180.0), 2.0);
    }

    #[test]
    fn floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(-3.0, 2.0), -2.0);
        assert_eq!(floor_div(5.0, -3.0), -2.0);
        assert_eq!(floor_div(-7.0, -2.0), 3.0);
    }

    #[test]
    fn floor_div_handles_inexact_divisors() {
        // 1.0 / 0.1 rounds to 10.0 but the true quotient is just below it.
        assert_eq!(floor_div(1.0, 0.1), 9.0);
        assert_eq!(floor_div(0.3, 0.1), 2.0);
    }

    #[test]
    fn format_duration_pads_fields() {
        assert_eq!(format_duration(1.0), "01:00:00");
        assert_eq!(format_duration(1.5), "01:30:00");
        assert_eq!(format_duration(0.0125), "00:00:45");
    }

    #[test]
    fn format_duration_rejects_out_of_range() {
        assert_eq!(format_duration(f64::MIN), "unknown");
    }

    #[test]
    fn log_level_nets_verbose_against_quiet() {
        assert_eq!(log_level(0, 0), "info");
        assert_eq!(log_level(1, 0), "debug");
        assert_eq!(log_level(5, 0), "trace");
        assert_eq!(log_level(0, 1), "warn");
        assert_eq!(log_level(1, 3), "error");
    }
}
