//! Chart Window
//! Native window showing one figure, either as a pre-rendered plotters image
//! or as an interactive egui_plot chart.

use crate::charts::{ChartPlotter, Figure, StaticChartRenderer, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::Result;
use crate::options::RenderMode;
use egui::{ColorImage, TextureHandle, TextureOptions};

const WINDOW_TITLE: &str = "Chartify";

/// Single-figure window. The static image is rendered before the window opens.
pub struct ChartWindow {
    figure: Figure,
    mode: RenderMode,
    /// Rendered bitmap waiting to be uploaded on the first frame
    pending_image: Option<ColorImage>,
    texture: Option<TextureHandle>,
}

impl ChartWindow {
    pub fn new(figure: Figure, mode: RenderMode) -> Result<Self> {
        let pending_image = match mode {
            RenderMode::Static => {
                let rgb = StaticChartRenderer::render_rgb(&figure, DEFAULT_WIDTH, DEFAULT_HEIGHT)?;
                Some(ColorImage::from_rgb(
                    [DEFAULT_WIDTH as usize, DEFAULT_HEIGHT as usize],
                    &rgb,
                ))
            }
            RenderMode::Interactive => None,
        };

        Ok(Self {
            figure,
            mode,
            pending_image,
            texture: None,
        })
    }

    fn title(&self) -> String {
        if self.figure.title.is_empty() {
            WINDOW_TITLE.to_string()
        } else {
            format!("{} - {}", WINDOW_TITLE, self.figure.title)
        }
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| match self.mode {
            RenderMode::Static => {
                if let Some(image) = self.pending_image.take() {
                    self.texture =
                        Some(ctx.load_texture("static_chart", image, TextureOptions::LINEAR));
                }
                if let Some(texture) = &self.texture {
                    ui.centered_and_justified(|ui| {
                        ui.add(egui::Image::new(texture).shrink_to_fit());
                    });
                }
            }
            RenderMode::Interactive => ChartPlotter::draw_figure(ui, &self.figure),
        });
    }
}

/// Open a window for `figure` and block until it is closed.
///
/// Must be called from the main thread.
pub fn show_figure(figure: Figure, mode: RenderMode) -> Result<()> {
    let window = ChartWindow::new(figure, mode)?;
    let title = window.title();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([DEFAULT_WIDTH as f32 + 20.0, DEFAULT_HEIGHT as f32 + 20.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    log::info!("opening {:?} chart window '{}'", mode, title);
    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(window))))?;
    Ok(())
}
