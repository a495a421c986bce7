use crate::{CanvasApp, Renderer};

pub fn canvas_panel(app: &mut CanvasApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(10.0))
            .rounding(12.0)
            .show(ui, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::drag());
                let rect = response.rect;

                app.handle_canvas_input(&response, rect);

                let painter = painter.with_clip_rect(rect);
                Renderer::from_visuals(ui.visuals()).render(&painter, rect, app.state());
            });
    });
}
