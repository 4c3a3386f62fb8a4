use std::io::{self, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use eseries::core::params::SearchParams;
use eseries::{SearchMode, api, render};

use super::args::{CliArgs, Invocation};

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr so the stdout tables stay clean; enable
    // with RUST_LOG (e.g. RUST_LOG=eseries=debug).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    render::title_banner(&mut out)?;

    let invocation = Invocation::from_tokens(&args.args)?;
    let params = SearchParams {
        max_error: invocation.max_error,
        mode: invocation.mode,
    };

    render::search_preamble(&mut out, params.max_error)?;

    match params.mode {
        SearchMode::Values => match api::find_series(&invocation.values, &params)? {
            Some(found) => {
                info!(
                    series = found.series,
                    largest_error = found.largest_error,
                    "series found"
                );
                render::series_table(&mut out, &found)?;
            }
            None => render::failure_banner(&mut out)?,
        },
        SearchMode::Ratio => {
            // Non-empty in ratio mode, checked by the token scanner.
            let ratio = invocation.values[0];
            match api::find_ratio(ratio, &params)? {
                Some(found) => {
                    info!(series = found.series, error = found.error, "ratio pair found");
                    render::ratio_table(&mut out, &found)?;
                }
                None => render::failure_banner(&mut out)?,
            }
        }
    }

    out.flush()?;
    Ok(())
}
