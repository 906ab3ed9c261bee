use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};

use crate::grid::GridConfig;
use crate::scene::Scene;

const CANVAS_FILL: Color32 = Color32::from_rgb(0xfa, 0xfa, 0xfa);
const GRID_DOT: Color32 = Color32::from_rgb(0xd1, 0xd5, 0xdb);
const ELEMENT_BORDER: Color32 = Color32::from_rgb(0xd4, 0xd4, 0xd8);
const SELECTION_BORDER: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24);
const LABEL_TEXT: Color32 = Color32::from_rgb(0x52, 0x52, 0x5b);

/// Paint the whole canvas: backdrop, optional grid dots, then every element
/// in scene order so later elements land on top.
pub fn paint_canvas(painter: &Painter, canvas: Rect, scene: &Scene, grid: &GridConfig) {
    painter.rect_filled(canvas, 0.0, CANVAS_FILL);

    if grid.enabled {
        paint_grid(painter, canvas, grid.pitch);
    }

    for element in scene.elements() {
        // Element geometry is canvas-space; shift into screen space here.
        let rect = element.painted_rect().translate(canvas.min.to_vec2());
        let selected = scene.selected_id() == Some(element.id);

        painter.rect_filled(rect, 2.0, element.color_tag);
        let border = if selected {
            Stroke::new(2.0, SELECTION_BORDER)
        } else {
            Stroke::new(1.0, ELEMENT_BORDER)
        };
        painter.rect_stroke(rect, 2.0, border);

        painter.text(
            rect.left_top() - egui::vec2(0.0, 4.0),
            Align2::LEFT_BOTTOM,
            element.kind.name(),
            FontId::proportional(10.0),
            LABEL_TEXT,
        );
    }
}

fn paint_grid(painter: &Painter, canvas: Rect, pitch: f32) {
    let mut y = canvas.min.y;
    while y <= canvas.max.y {
        let mut x = canvas.min.x;
        while x <= canvas.max.x {
            painter.circle_filled(Pos2::new(x, y), 1.0, GRID_DOT);
            x += pitch;
        }
        y += pitch;
    }
}
