//! The series matcher: decade normalization, the preferred-value tables,
//! and the value- and ratio-mode searches over increasingly dense series.
pub mod normalize;
pub mod ratio;
pub mod series;
pub mod value;

pub use normalize::{cut_down, relative_error};
pub use ratio::{RatioMatch, find_ratio};
pub use series::{E3, E6, E12, E24, Series};
pub use value::{SeriesMatch, ValueMatch, find_series};
