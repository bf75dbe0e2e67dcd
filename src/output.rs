//! Output: serialise a [`RunResult`] to stdout or a file.
//!
//! stdout carries nothing but the JSON document so it can be piped straight
//! into another tool; status messages go to stderr.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use jobagg_core::RunResult;

/// Serialise `result`, pretty-printed or compact.
pub fn render(result: &RunResult, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    }
}

/// Write `result` to `output_file` when given, otherwise to stdout.
pub fn write_result(result: &RunResult, output_file: Option<&Path>, pretty: bool) -> anyhow::Result<()> {
    let json = render(result, pretty).context("serialising run result")?;

    match output_file {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("writing results to {}", path.display()))?;
            tracing::info!(path = %path.display(), jobs = result.total_count, "results written");
            eprintln!("Results saved to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("writing results to stdout")?;
            stdout.flush().context("flushing stdout")?;
        }
    }
    Ok(())
}
