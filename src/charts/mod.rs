//! Charts module - figure model and rendering backends

mod figure;
mod plotter;
mod renderer;

pub use figure::{
    bar_slot, format_x_value, series_color, ChartKind, Figure, Series, XAxisKind, PALETTE,
};
pub use plotter::ChartPlotter;
pub use renderer::{StaticChartRenderer, DEFAULT_HEIGHT, DEFAULT_WIDTH};
