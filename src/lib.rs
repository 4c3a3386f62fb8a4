#![doc = r#"
eseries — an IEC 60063 E-series preferred-value matcher.

This crate finds the smallest standard E-series (E3, E6, E12, E24, and
synthesized denser series) in which a set of component values — resistor
values, typically — can each be matched within a requested relative error.
It can alternatively search for a pair of standard values whose ratio
approximates a target ratio. It powers the `eseries` command-line tool and
can be embedded in your own Rust applications.

Values are decade-normalized before matching: only the mantissa in
`[1.0, 10.0)` matters, so `4.7`, `470` and `0.047` are all the same target.

Quick start: match values against a series
------------------------------------------
```rust
use eseries::{SearchParams, find_series};

fn main() -> eseries::Result<()> {
    let params = SearchParams::default(); // 1% max error, value mode

    if let Some(found) = find_series(&[4.7, 3.3, 0.000082], &params)? {
        println!(
            "best series: E{} (largest error {:.2} %)",
            found.series,
            found.largest_error * 100.0
        );
        for row in &found.assignments {
            println!("{:.3} -> {:.3}", row.requested, row.matched);
        }
    }
    Ok(())
}
```

Match a ratio
-------------
```rust
use eseries::{SearchParams, find_ratio};

fn main() -> eseries::Result<()> {
    let params = SearchParams::default();

    if let Some(found) = find_ratio(2.0, &params)? {
        println!(
            "E{}: {:.3} / {:.3} = {:.3}",
            found.series,
            found.value1,
            found.value2,
            found.value1 / found.value2
        );
    }
    Ok(())
}
```

Outcomes
--------
Both entry points return `Result<Option<..>>`: `Err` only for invalid input
(non-positive or non-finite values), `Ok(None)` when no series up to the
bounded search cap satisfies the error bound, and `Ok(Some(..))` on success.
A non-positive `max_error` always yields `Ok(None)` — matching is strict.

Useful modules
--------------
- [`api`] — high-level, validated entry points.
- [`core`] — the normalizer, the preferred-value tables, and the searches.
- [`render`] — the bordered console tables used by the CLI.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod types;

// Curated public API surface
// Types
pub use core::matching::series::{E3, E6, E12, E24, Series};
pub use core::matching::{RatioMatch, SeriesMatch, ValueMatch, cut_down, relative_error};
pub use core::params::SearchParams;
pub use error::{Error, Result};
pub use types::SearchMode;

// High-level API re-exports
pub use api::{find_ratio, find_series};
