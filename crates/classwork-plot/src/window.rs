//! Native chart window (feature `gui`)

use crate::chart::Chart;
use crate::error::PlotError;
use crate::sink::ChartSink;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use tracing::info;

const PLOT_HEIGHT: f32 = 320.0;

/// Collects charts and shows them all in one window when finished
///
/// The window blocks until the user closes it.
#[derive(Debug)]
pub struct WindowSink {
    app_name: String,
    charts: Vec<Chart>,
}

impl WindowSink {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            charts: Vec::new(),
        }
    }
}

impl ChartSink for WindowSink {
    fn show(&mut self, chart: &Chart) -> Result<(), PlotError> {
        self.charts.push(chart.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), PlotError> {
        if self.charts.is_empty() {
            return Ok(());
        }
        info!(charts = self.charts.len(), "opening chart window");
        let charts = std::mem::take(&mut self.charts);
        let options = eframe::NativeOptions::default();
        eframe::run_native(
            &self.app_name,
            options,
            Box::new(move |cc| {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
                Ok(Box::new(ChartApp { charts }))
            }),
        )
        .map_err(|e| PlotError::Window(e.to_string()))
    }
}

struct ChartApp {
    charts: Vec<Chart>,
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for chart in &self.charts {
                    draw_chart(ui, chart);
                    ui.separator();
                }
            });
        });
    }
}

fn draw_chart(ui: &mut egui::Ui, chart: &Chart) {
    ui.heading(&chart.title);
    Plot::new(&chart.title)
        .legend(Legend::default())
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .show_grid(chart.grid)
        .height(PLOT_HEIGHT)
        .show(ui, |plot_ui| {
            for curve in &chart.curves {
                let points = PlotPoints::new(curve.points.clone());
                plot_ui.line(Line::new(points).name(&curve.label));
            }
        });
}
