use eframe::egui::{self, Align2, FontId, Painter, Sense, Ui, Vec2, vec2};

use super::ViewModel;
use super::interaction::{click_target, connector_endpoints};
use super::render_utils::{
    PROJECT_COLOR, SKILL_COLOR, connector_stroke, draw_background, draw_glow, label_color,
};
use super::sim::{Node, NodeKind, Scene};

fn draw_node(painter: &Painter, node: &Node, origin: Vec2) {
    let center = node.pos + origin;
    let (color, glow_strength) = match node.kind {
        NodeKind::Skill => (SKILL_COLOR, 2.2),
        NodeKind::Project => (PROJECT_COLOR, 3.4),
    };

    draw_glow(painter, center, node.radius, color, glow_strength);
    painter.circle_filled(center, node.radius, color);
    painter.text(
        center + vec2(15.0, 4.0),
        Align2::LEFT_CENTER,
        &node.name,
        FontId::monospace(10.0),
        label_color(),
    );
}

impl ViewModel {
    pub(in crate::app) fn draw_scene(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect);

        // The scene spawns on the first frame that knows the canvas
        // extent and is never respawned; later frames only resize the
        // viewport, which deliberately leaves existing nodes where the
        // extent at their creation time put them.
        let scene = self
            .scene
            .get_or_insert_with(|| Scene::new(&self.universe, rect.width(), rect.height()));
        scene.viewport.resize(rect.width(), rect.height());

        // The latest pointer position fully replaces the cursor; while
        // the pointer is outside the canvas the previous value is kept.
        if let Some(pointer) = response.hover_pos() {
            scene.cursor = (pointer - rect.left_top()).to_pos2();
        }

        let any_hovered = scene.step();
        if any_hovered {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        let origin = rect.left_top().to_vec2();
        for star in &scene.stars {
            draw_node(&painter, star, origin);
        }
        for planet in &scene.planets {
            draw_node(&painter, planet, origin);
            if planet.hovered {
                for endpoint in connector_endpoints(planet, &scene.stars) {
                    painter.line_segment(
                        [planet.pos + origin, endpoint + origin],
                        connector_stroke(),
                    );
                }
            }
        }

        if response.clicked_by(egui::PointerButton::Primary)
            && let Some(click) = response.interact_pointer_pos()
        {
            let local = (click - rect.left_top()).to_pos2();
            if let Some(url) = click_target(&scene.planets, local) {
                ui.ctx().open_url(egui::OpenUrl::same_tab(url));
            }
        }

        // Keep the drift animating; egui only repaints on demand.
        ui.ctx().request_repaint();
    }
}
