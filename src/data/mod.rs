//! Data module - resampling, ranking and comparison frames

mod comparison;
pub mod extract;
mod frequency;
mod ranking;
mod resample;

pub use comparison::{forecast_comparison_frame, FORECAST_COLUMN, HOVER_COLUMN, INDEX_COLUMN};
pub use frequency::Frequency;
pub use ranking::{
    measure_column, rank_comparison_frame, top_value_counts, COUNT_COLUMN, PROPORTION_COLUMN,
    RANK_COLUMN,
};
pub use resample::resample;

use polars::prelude::{concat, DataFrame, LazyFrame, PolarsResult, UnionArgs};

/// Tag column naming which input dataset a comparison row came from.
pub const SERIES_COLUMN: &str = "series";

/// Concatenate tagged frames, casting differing column dtypes to their supertype.
pub(crate) fn stack(frames: [LazyFrame; 2]) -> PolarsResult<DataFrame> {
    let args = UnionArgs {
        to_supertypes: true,
        ..Default::default()
    };
    concat(frames, args)?.collect()
}
