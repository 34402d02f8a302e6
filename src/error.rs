//! Error types shared by the data preparation and rendering layers.

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Failed to encode chart image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to write chart image: {0}")]
    Io(#[from] std::io::Error),
    #[error("Chart window error: {0}")]
    Window(#[from] eframe::Error),
}

impl PlotError {
    /// Wrap a plotters drawing error, whose type is generic over the backend.
    pub(crate) fn draw<E: std::fmt::Display>(err: E) -> Self {
        PlotError::Draw(err.to_string())
    }
}

pub type Result<T, E = PlotError> = std::result::Result<T, E>;
