use clap::Parser;

use eseries::SearchMode;

use super::errors::AppError;

/// Command shell for the legacy argument grammar.
///
/// The grammar uses single-dash flags mixed with positional values, which
/// clap cannot model directly, so clap only captures the raw token list;
/// the actual scan happens in [`Invocation::from_tokens`].
#[derive(Parser)]
#[command(
    name = "eseries",
    version,
    about = "Find the smallest IEC 60063 E-series matching a set of component values",
    long_about = "Find the smallest IEC 60063 E-series matching a set of component values.\n\n\
        Values are decade-normalized before matching, so 4.7, 470 and 0.047 are\n\
        equivalent. Values must come first: once -err or -ratio has been consumed,\n\
        any further value arguments are ignored."
)]
pub struct CliArgs {
    /// Target values, then `-err <percent>` (max. relative error, default 1)
    /// and/or `-ratio` (treat the first value as a target ratio)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARG")]
    pub args: Vec<String>,
}

/// A fully scanned invocation: the collected values, the error bound, and
/// the selected search mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub values: Vec<f64>,
    pub max_error: f64,
    pub mode: SearchMode,
}

impl Invocation {
    /// Linear scan over the legacy grammar `[value...] [-err <percent>]
    /// [-ratio]`.
    ///
    /// Consuming either flag freezes value accumulation: later positionals
    /// are ignored, not rejected. The `-err` percentage may be zero or
    /// negative (the search then reports the no-match outcome), but value
    /// tokens must be positive finite numbers.
    pub fn from_tokens(tokens: &[String]) -> Result<Self, AppError> {
        let mut values = Vec::new();
        let mut max_error = 0.01;
        let mut mode = SearchMode::Values;
        let mut accept_values = true;

        let mut iter = tokens.iter();
        while let Some(token) = iter.next() {
            match token.as_str() {
                "-err" => {
                    let percent = iter.next().ok_or(AppError::MissingErrArgument)?;
                    max_error = parse_number(percent)? / 100.0;
                    accept_values = false;
                }
                "-ratio" => {
                    mode = SearchMode::Ratio;
                    accept_values = false;
                }
                _ if accept_values => values.push(parse_value(token)?),
                _ => {}
            }
        }

        if mode == SearchMode::Ratio && values.is_empty() {
            return Err(AppError::MissingRatioValue);
        }

        Ok(Self {
            values,
            max_error,
            mode,
        })
    }
}

fn parse_number(token: &str) -> Result<f64, AppError> {
    token.parse().map_err(|_| AppError::InvalidNumber {
        token: token.to_string(),
    })
}

fn parse_value(token: &str) -> Result<f64, AppError> {
    let value = parse_number(token)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::InvalidValue { value });
    }
    Ok(value)
}
