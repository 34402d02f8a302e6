//! GUI module - native chart window

mod viewer;

pub use viewer::{show_figure, ChartWindow};
