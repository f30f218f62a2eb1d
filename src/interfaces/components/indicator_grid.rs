use crate::domain::risk::indicators::format_cell;
use crate::domain::risk::{INDICATOR_COLUMNS, RiskTable};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 10;

const PRECISION: usize = 6;

fn cell_color(value: Option<f64>) -> egui::Color32 {
    match value {
        None => DesignSystem::TEXT_MUTED,
        Some(v) if !v.is_finite() => DesignSystem::NON_FINITE,
        Some(v) if v < 0.0 => DesignSystem::NEGATIVE,
        Some(_) => DesignSystem::POSITIVE,
    }
}

/// Striped indicator table with paging.
pub fn render_indicator_grid(ui: &mut egui::Ui, id: &str, table: &RiskTable, page: &mut usize) {
    if table.is_empty() {
        ui.label(
            egui::RichText::new("No assets in this source.")
                .italics()
                .color(DesignSystem::TEXT_MUTED),
        );
        return;
    }

    let pages = table.page_count(PAGE_SIZE);
    *page = (*page).min(pages.saturating_sub(1));

    egui::ScrollArea::horizontal()
        .id_salt(format!("indicator_scroll_{}", id))
        .show(ui, |ui| {
            egui::Grid::new(format!("indicator_grid_{}", id))
                .striped(true)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    for column in INDICATOR_COLUMNS {
                        ui.strong(column);
                    }
                    ui.end_row();

                    for record in table.page(*page, PAGE_SIZE) {
                        ui.label(&record.ticker);
                        for value in record.values() {
                            ui.colored_label(cell_color(value), format_cell(value, PRECISION));
                        }
                        ui.end_row();
                    }
                });
        });

    if pages > 1 {
        ui.horizontal(|ui| {
            if ui.add_enabled(*page > 0, egui::Button::new("◀")).clicked() {
                *page -= 1;
            }
            ui.label(format!("{} / {}", *page + 1, pages));
            if ui.add_enabled(*page + 1 < pages, egui::Button::new("▶")).clicked() {
                *page += 1;
            }
        });
    }
}
