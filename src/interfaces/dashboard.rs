use crate::application::market_data::chart_series::ChartSeries;
use crate::application::risk_management::pipeline::SourceReport;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::indicator_grid::render_indicator_grid;
use crate::interfaces::components::price_chart::render_price_chart;
use crate::interfaces::components::ticker_picker::render_ticker_picker;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub const DASHBOARD_TITLE: &str = "Dashboard Final: Acciones vs Criptomonedas";

/// Per-source view state: ticker picker, cached chart lines and grid page.
pub struct SourceSection {
    pub report: SourceReport,
    pub available: Vec<String>,
    pub selection: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub page: usize,
}

impl SourceSection {
    pub fn new(report: SourceReport) -> Self {
        let available = report.tickers();
        let selection = report.default_selection();
        let series = report.chart(&selection);
        Self {
            report,
            available,
            selection,
            series,
            page: 0,
        }
    }

    fn refresh_chart(&mut self) {
        self.series = self.report.chart(&self.selection);
    }

    fn show(&mut self, ui: &mut egui::Ui) {
        let name = self.report.name.clone();
        Card::new().title(&name).show(ui, |ui| {
            let label = format!("Selecciona {}:", name);
            if render_ticker_picker(ui, &label, &self.available, &mut self.selection) {
                self.refresh_chart();
            }
            ui.add_space(DesignSystem::SPACING_SMALL);

            render_price_chart(
                ui,
                &name,
                &format!("Precios de Cierre: {}", name),
                &self.series,
            );
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            ui.label(
                egui::RichText::new(format!("Indicadores de Riesgo: {}", name))
                    .size(14.0)
                    .strong(),
            );
            ui.add_space(DesignSystem::SPACING_SMALL);
            render_indicator_grid(ui, &name, &self.report.table, &mut self.page);
        });
    }
}

/// Side-by-side view of every loaded source. Reports are computed once at startup.
pub struct RiskDashboard {
    sections: Vec<SourceSection>,
}

impl RiskDashboard {
    pub fn new(reports: Vec<SourceReport>) -> Self {
        Self {
            sections: reports.into_iter().map(SourceSection::new).collect(),
        }
    }
}

impl eframe::App for RiskDashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(DASHBOARD_TITLE);
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("{} sources", self.sections.len()))
                        .color(DesignSystem::TEXT_SECONDARY),
                );
            });
        });

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("dashboard_scroll")
                    .show(ui, |ui| {
                        if self.sections.is_empty() {
                            ui.label(
                                egui::RichText::new("No price sources could be loaded.")
                                    .color(DesignSystem::TEXT_MUTED),
                            );
                        }
                        for section in &mut self.sections {
                            section.show(ui);
                            ui.add_space(DesignSystem::SPACING_LARGE);
                        }
                    });
            });
    }
}
