use crate::cli::OutputFormat;
use crate::packages::{Package, read_package};
use crate::training::Training;
use crate::types::WorkoutSummary;
use crate::utils::format_duration;
use anyhow::{Context, Result};

/// Turn one summary into its output line.
pub fn render(
    summary: &WorkoutSummary,
    format: OutputFormat,
    details: Option<(usize, &str)>,
) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(summary).context("serializing summary"),
        OutputFormat::Text => Ok(match details {
            Some((i, code)) => {
                let dur = format_duration(summary.duration);
                format!("{i}\t{code}\t{dur}\t{summary}")
            }
            None => summary.message(),
        }),
    }
}

/// Summarise packages in order, handing each result to `emit`.
///
/// Stops at the first bad package unless `keep_going` is set, in which case
/// bad packages are logged and counted. Returns the number skipped.
pub fn run_batch<F>(packages: &[Package], keep_going: bool, mut emit: F) -> Result<usize>
where
    F: FnMut(usize, &Package, &WorkoutSummary) -> Result<()>,
{
    let mut failed = 0usize;

    for (i, pkg) in packages.iter().enumerate() {
        let summary = match read_package(&pkg.code, &pkg.fields)
            .and_then(|workout| workout.checked_summary())
        {
            Ok(summary) => summary,
            Err(e) if keep_going => {
                tracing::warn!(index = i + 1, code = %pkg.code, err = %e, "skipping package");
                failed += 1;
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("package {} ({})", i + 1, pkg.code));
            }
        };
        emit(i + 1, pkg, &summary)?;
    }

    tracing::debug!(total = packages.len(), failed, "batch done");
    Ok(failed)
}

/// Fail when `run_batch` had to skip packages.
pub fn ensure_all_summarised(failed: usize, total: usize) -> Result<()> {
    if failed > 0 {
        anyhow::bail!("{failed} of {total} packages could not be summarised");
    }
    Ok(())
}
