use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Multi-select row of tickers. Returns true when the selection changed.
pub fn render_ticker_picker(
    ui: &mut egui::Ui,
    label: &str,
    available: &[String],
    selection: &mut Vec<String>,
) -> bool {
    let mut changed = false;

    ui.label(egui::RichText::new(label).color(DesignSystem::TEXT_SECONDARY));
    ui.horizontal_wrapped(|ui| {
        for ticker in available {
            let is_selected = selection.contains(ticker);
            if ui.selectable_label(is_selected, ticker.as_str()).clicked() {
                toggle(selection, ticker);
                changed = true;
            }
        }
    });

    changed
}

/// Adds or removes `ticker`, keeping the selection order of first click.
pub fn toggle(selection: &mut Vec<String>, ticker: &str) {
    if let Some(pos) = selection.iter().position(|t| t == ticker) {
        selection.remove(pos);
    } else {
        selection.push(ticker.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut selection = vec!["PG".to_string()];
        toggle(&mut selection, "KO");
        assert_eq!(selection, vec!["PG", "KO"]);
        toggle(&mut selection, "PG");
        assert_eq!(selection, vec!["KO"]);
    }
}
