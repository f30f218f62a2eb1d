use crate::application::market_data::chart_series::{ChartSeries, date_from_day_number};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{Legend, Line, Plot};

/// Closing-price line chart, one line per selected ticker.
pub fn render_price_chart(ui: &mut egui::Ui, id: &str, title: &str, series: &[ChartSeries]) {
    ui.label(egui::RichText::new(title).size(14.0).strong());
    ui.add_space(DesignSystem::SPACING_SMALL);

    if series.is_empty() {
        ui.label(
            egui::RichText::new("Select at least one ticker to plot.")
                .italics()
                .color(DesignSystem::TEXT_MUTED),
        );
        return;
    }

    Plot::new(format!("price_chart_{}", id))
        .height(280.0)
        .show_grid([true, true])
        .legend(Legend::default())
        .x_axis_formatter(|mark, _range| {
            date_from_day_number(mark.value)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for (i, s) in series.iter().enumerate() {
                plot_ui.line(
                    Line::new(s.ticker.clone(), s.plot_points())
                        .color(DesignSystem::series_color(i))
                        .width(1.5),
                );
            }
        });
}
