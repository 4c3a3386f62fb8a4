use std::io::Write;

use crate::core::matching::{RatioMatch, SeriesMatch};
use crate::error::Result;

// 256-color foreground escapes: values in green, errors and the requested
// tolerance in yellow.
static TITLE_COLOR: &str = "\x1b[38;5;214m";
static VALUE_COLOR: &str = "\x1b[38;5;76m";
static ERROR_COLOR: &str = "\x1b[38;5;190m";
static FAILURE_COLOR: &str = "\x1b[38;5;196m";
static RESET: &str = "\x1b[0m";

// Box rows are printed first, then the cursor moves back up one line and
// the text is written inside the pre-drawn border.
static CURSOR_UP: &str = "\x1b[1A";

static TOP: &str = "╔═══════════════════════════════════════╗";
static BLANK: &str = "║                                       ║";
static SEPARATOR: &str = "╟───────────────────────────────────────╢";
static BOTTOM: &str = "╚═══════════════════════════════════════╝";

static VALUE_HEADER: &str = "║ R_orig     ┆ R_series   ┆ error       ║";
static RATIO_HEADER: &str = "║ value 1    ┆ value 2    ┆ ratio       ║";
static ROW_BLANK: &str = "║            ┆            ┆             ║";

/// Program title box, shown once at startup.
pub fn title_banner(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", TOP)?;
    writeln!(out, "{}", BLANK)?;
    writeln!(
        out,
        "  {}{}eseries preferred value matcher{}",
        CURSOR_UP, TITLE_COLOR, RESET
    )?;
    writeln!(out, "{}", BOTTOM)?;
    Ok(())
}

/// Requested tolerance box, shown before the search runs.
pub fn search_preamble(out: &mut impl Write, max_error: f64) -> Result<()> {
    writeln!(out, "{}", TOP)?;
    writeln!(out, "{}", BLANK)?;
    writeln!(
        out,
        "  {}requested max. error: {}{:.2} %{}",
        CURSOR_UP,
        ERROR_COLOR,
        max_error * 100.0,
        RESET
    )?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "{}", BLANK)?;
    writeln!(out, "  {}trying to find best E-series", CURSOR_UP)?;
    writeln!(out, "{}", BOTTOM)?;
    Ok(())
}

/// Value-mode result: best series, largest error, and one table row per
/// normalized input value.
pub fn series_table(out: &mut impl Write, found: &SeriesMatch) -> Result<()> {
    writeln!(out, "{}", TOP)?;
    writeln!(out, "{}", BLANK)?;
    writeln!(
        out,
        "  {}best series: {}E{}{}",
        CURSOR_UP, VALUE_COLOR, found.series, RESET
    )?;
    writeln!(out, "{}", BLANK)?;
    writeln!(
        out,
        "  {}largest error: {}{:.2} %{}",
        CURSOR_UP,
        ERROR_COLOR,
        found.largest_error * 100.0,
        RESET
    )?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "{}", VALUE_HEADER)?;

    for row in &found.assignments {
        writeln!(out, "{}", ROW_BLANK)?;
        writeln!(
            out,
            "  {} {}{:.3}{}",
            CURSOR_UP, VALUE_COLOR, row.requested, RESET
        )?;
        writeln!(
            out,
            "               {} {}{:.3}{}",
            CURSOR_UP, VALUE_COLOR, row.matched, RESET
        )?;
        writeln!(
            out,
            "                            {} {}{:.2} %{}",
            CURSOR_UP,
            ERROR_COLOR,
            row.error * 100.0,
            RESET
        )?;
    }

    writeln!(out, "{}", BOTTOM)?;
    Ok(())
}

/// Ratio-mode result: best series, achieved error, and the rescaled pair
/// with its ratio.
pub fn ratio_table(out: &mut impl Write, found: &RatioMatch) -> Result<()> {
    writeln!(out, "{}", TOP)?;
    writeln!(out, "{}", BLANK)?;
    writeln!(
        out,
        "  {}best series: {}E{}{}",
        CURSOR_UP, VALUE_COLOR, found.series, RESET
    )?;
    writeln!(out, "{}", BLANK)?;
    writeln!(
        out,
        "  {}achieved error: {}{:.2} %{}",
        CURSOR_UP,
        ERROR_COLOR,
        found.error * 100.0,
        RESET
    )?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "{}", RATIO_HEADER)?;
    writeln!(out, "{}", ROW_BLANK)?;
    writeln!(
        out,
        "  {} {}{:.3}{}",
        CURSOR_UP, VALUE_COLOR, found.value1, RESET
    )?;
    writeln!(
        out,
        "               {} {}{:.3}{}",
        CURSOR_UP, VALUE_COLOR, found.value2, RESET
    )?;
    writeln!(
        out,
        "                            {} {}{:.3}{}",
        CURSOR_UP,
        VALUE_COLOR,
        found.value1 / found.value2,
        RESET
    )?;
    writeln!(out, "{}", BOTTOM)?;
    Ok(())
}

/// Distinct banner for the no-match outcome.
pub fn failure_banner(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", TOP)?;
    writeln!(out, "{}", BLANK)?;
    writeln!(
        out,
        "  {}{}[!] unable to satisfy conditions{}",
        CURSOR_UP, FAILURE_COLOR, RESET
    )?;
    writeln!(out, "{}", BOTTOM)?;
    Ok(())
}
