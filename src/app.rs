use egui::{
    plot::{Legend, Line, Plot, PlotPoints, Points},
    Ui,
};
use log::info;

use crate::{
    chart::{ChartConfig, ChartData},
    report::Report,
};

/// Which series are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChartSettings {
    pub show_data: bool,
    pub show_fit: bool,
    pub show_cross_check: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            show_data: true,
            show_fit: true,
            show_cross_check: true,
        }
    }
}

pub(crate) struct HubbleApp {
    chart: ChartData,
    report: String,
    config: ChartConfig,
    settings: ChartSettings,
}

impl HubbleApp {
    pub(crate) fn new(chart: ChartData, report: &Report, config: ChartConfig) -> Self {
        Self {
            chart,
            report: report.to_string(),
            config,
            settings: Default::default(),
        }
    }
}

impl eframe::App for HubbleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("fit_summary").show(ctx, |ui| self.side_panel(ui));
        egui::TopBottomPanel::top("y_label").show(ctx, |ui| {
            ui.strong(self.config.y_label.as_str());
        });
        egui::TopBottomPanel::bottom("x_label").show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.strong(self.config.x_label.as_str()));
        });
        egui::CentralPanel::default().show(ctx, |ui| self.main_view(ui));
    }
}

impl HubbleApp {
    fn side_panel(&mut self, ui: &mut Ui) {
        ui.heading("Fit");
        ui.monospace(self.report.as_str());
        ui.separator();
        ui.checkbox(&mut self.settings.show_data, self.config.data_name.as_str());
        ui.checkbox(&mut self.settings.show_fit, self.config.fit_name.as_str());
        if self.chart.cross_check_line.is_some() {
            ui.checkbox(
                &mut self.settings.show_cross_check,
                self.config.cross_check_name.as_str(),
            );
        }
    }

    fn main_view(&mut self, ui: &mut Ui) {
        let x_label = self.config.x_label.clone();
        let y_label = self.config.y_label.clone();
        Plot::new("hubble plot")
            .legend(Legend::default())
            .label_formatter(move |name, value| {
                let head = if name.is_empty() {
                    String::new()
                } else {
                    format!("{}\n", name)
                };
                format!(
                    "{}{}: {:.3}\n{}: {:.1}",
                    head, x_label, value.x, y_label, value.y
                )
            })
            .show(ui, |plot_ui| {
                if self.settings.show_data {
                    plot_ui.points(
                        Points::new(PlotPoints::from(self.chart.points.clone()))
                            .radius(self.config.point_radius)
                            .name(&self.config.data_name),
                    );
                }
                if self.settings.show_fit {
                    plot_ui.line(
                        Line::new(PlotPoints::from(self.chart.fit_line.clone()))
                            .name(&self.config.fit_name),
                    );
                }
                if self.settings.show_cross_check {
                    if let Some(line) = self.chart.cross_check_line.as_ref() {
                        plot_ui.line(
                            Line::new(PlotPoints::from(line.clone()))
                                .name(&self.config.cross_check_name),
                        );
                    }
                }
            });
    }
}

/// Opens the chart window and blocks until it is closed.
pub fn show_chart(chart: ChartData, report: &Report, config: ChartConfig) {
    let app = HubbleApp::new(chart, report, config);
    info!("opening chart window");
    eframe::run_native(
        "Hubble's constant",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Box::new(app)),
    );
}
