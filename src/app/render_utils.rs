use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, pos2};

use crate::util::stable_pair;

pub(super) const SKILL_COLOR: Color32 = Color32::from_rgb(235, 238, 245);
pub(super) const PROJECT_COLOR: Color32 = Color32::from_rgb(0, 255, 255);

pub(super) fn label_color() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 178)
}

pub(super) fn connector_stroke() -> Stroke {
    Stroke::new(1.0, Color32::from_rgba_unmultiplied(0, 255, 255, 102))
}

pub(super) fn draw_background(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(7, 9, 18));

    // Sparse static speckle, scattered by hash so it does not shimmer
    // between frames.
    for index in 0..96u32 {
        let (sx, sy) = stable_pair(&format!("speck-{index}"));
        let position = pos2(
            rect.left() + ((sx * 0.5) + 0.5) * rect.width(),
            rect.top() + ((sy * 0.5) + 0.5) * rect.height(),
        );
        let alpha = 24 + ((index * 37) % 40) as u8;
        painter.circle_filled(
            position,
            0.7,
            Color32::from_rgba_unmultiplied(200, 210, 230, alpha),
        );
    }
}

/// Cheap stand-in for a canvas shadow blur: a few widening translucent
/// rings under the node fill. `strength` scales how far the halo reaches.
pub(super) fn draw_glow(
    painter: &Painter,
    center: Pos2,
    radius: f32,
    color: Color32,
    strength: f32,
) {
    for ring in 1..=3u32 {
        let spread = ring as f32 * strength;
        let alpha = (48.0 / ring as f32) as u8;
        painter.circle_filled(
            center,
            radius + spread,
            Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha),
        );
    }
}
