use crate::CanvasApp;
use crate::input::InputMode;

pub fn toolbar(app: &mut CanvasApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("toolbar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let can_undo = app.state().can_undo();
            let can_redo = app.state().can_redo();

            if ui.add_enabled(can_undo, egui::Button::new("↺ Undo")).clicked() {
                app.state_mut().undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("↻ Redo")).clicked() {
                app.state_mut().redo();
            }

            ui.add_space(20.0);

            let color = app.state().brush().color();
            let color_label = egui::RichText::new("⬤ Color").color(color);
            if ui.selectable_label(app.show_color_picker(), color_label).clicked() {
                app.toggle_color_picker();
            }
            if ui.selectable_label(app.show_stroke_picker(), "✏ Stroke").clicked() {
                app.toggle_stroke_picker();
            }

            let clear_label = egui::RichText::new("🗑 Clear").color(egui::Color32::RED);
            if ui.button(clear_label).clicked() {
                app.state_mut().clear();
            }

            ui.separator();

            let mut mode = app.input_mode();
            egui::ComboBox::from_id_salt("input_mode")
                .selected_text(mode.label())
                .show_ui(ui, |ui| {
                    for option in [InputMode::Pointer, InputMode::Detector] {
                        ui.selectable_value(&mut mode, option, option.label());
                    }
                });
            app.set_input_mode(mode);
        });
        ui.add_space(4.0);
    });
}
