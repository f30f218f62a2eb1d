use eframe::egui;

/// Colors and spacing shared by the dashboard widgets.
pub struct DesignSystem;

impl DesignSystem {
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(10, 12, 16);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(22, 27, 34);
    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(48, 54, 61);
    pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(41, 121, 255);

    // Indicator grid cells
    pub const POSITIVE: egui::Color32 = egui::Color32::from_rgb(0, 230, 118);
    pub const NEGATIVE: egui::Color32 = egui::Color32::from_rgb(255, 23, 68);
    pub const NON_FINITE: egui::Color32 = egui::Color32::from_rgb(255, 145, 0);

    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 246, 252);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(160);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(100);

    /// Chart line colors, cycled by selection index.
    pub const SERIES: [egui::Color32; 6] = [
        Self::ACCENT,
        Self::NON_FINITE,
        Self::POSITIVE,
        egui::Color32::from_rgb(213, 0, 249),
        egui::Color32::from_rgb(255, 234, 0),
        egui::Color32::from_rgb(0, 229, 255),
    ];

    pub const CORNER_RADIUS: f32 = 8.0;
    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    pub fn series_color(index: usize) -> egui::Color32 {
        Self::SERIES[index % Self::SERIES.len()]
    }

    /// Dark visuals with the accent used for selected tickers.
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.window_fill = Self::BG_WINDOW;
        visuals.selection.bg_fill = Self::ACCENT.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT);
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER);
        visuals
    }

    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::CORNER_RADIUS)
            .stroke(egui::Stroke::new(1.0, Self::BORDER))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
