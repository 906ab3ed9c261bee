use egui::{Align2, Color32, FontId};

use crate::app::ConfiguratorApp;
use crate::renderer;

pub fn central_panel(app: &mut ConfiguratorApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let canvas = response.rect;

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let canvas_pos = pointer - canvas.min.to_vec2();
                app.handle_canvas_click(canvas_pos);
            }
        }

        renderer::paint_canvas(&painter, canvas, app.scene(), app.grid());

        if app.scene().is_empty() {
            painter.text(
                canvas.center(),
                Align2::CENTER_CENTER,
                "Select a tool and click on the canvas to add elements",
                FontId::proportional(14.0),
                Color32::from_gray(150),
            );
        }
    });
}
