use eframe::egui;

/// Circular color swatch used by the palette picker
pub struct ColorSwatch {
    pub color: egui::Color32,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: egui::Color32, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let swatch_size = egui::vec2(60.0, 60.0);
        let (rect, response) = ui.allocate_exact_size(swatch_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = rect.width() / 2.0 - 4.0;
            let painter = ui.painter();

            painter.circle_filled(center, radius, self.color);

            if self.selected {
                painter.circle_stroke(center, radius, egui::Stroke::new(4.0, egui::Color32::WHITE));
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    "✔",
                    egui::FontId::proportional(22.0),
                    egui::Color32::WHITE,
                );
            } else if response.hovered() {
                painter.circle_stroke(
                    center,
                    radius,
                    egui::Stroke::new(2.0, egui::Color32::from_white_alpha(120)),
                );
            }
        }

        response
    }
}
