use crate::CanvasApp;
use crate::components::ColorSwatch;

/// Width slider, shown while the stroke button is toggled on
pub fn stroke_picker(app: &mut CanvasApp, ctx: &egui::Context) {
    let visible = app.show_stroke_picker();
    egui::TopBottomPanel::bottom("stroke_picker").show_animated(ctx, visible, |ui| {
        let brush = app.state().brush();
        let range = brush.width_range();
        let mut width = brush.width();

        ui.add_space(5.0);
        let slider = egui::Slider::new(&mut width, range).text("Width");
        if ui.add(slider).changed() {
            app.state_mut().set_stroke_width(width);
        }
        ui.add_space(5.0);
    });
}

/// Row of palette swatches, shown while the color button is toggled on
pub fn color_picker(app: &mut CanvasApp, ctx: &egui::Context) {
    let visible = app.show_color_picker();
    let palette = app.config().palette.clone();

    egui::TopBottomPanel::bottom("color_picker").show_animated(ctx, visible, |ui| {
        egui::ScrollArea::horizontal().show(ui, |ui| {
            ui.horizontal(|ui| {
                let selected = app.state().brush().color();
                for color in palette {
                    if ColorSwatch::new(color, color == selected).show(ui).clicked() {
                        log::debug!("Selected color {:?}", color);
                        app.state_mut().set_color(color);
                    }
                }
            });
        });
    });
}
