use eframe::egui::{Pos2, Vec2, pos2, vec2};

use crate::universe::{ProjectRecord, SkillRecord, Universe};
use crate::util::stable_pair;

/// Pointer proximity (pixels) that counts as hovering a node. Also the
/// click hit radius.
pub(in crate::app) const HOVER_RADIUS: f32 = 30.0;
pub(in crate::app) const HOVER_SCALE: f32 = 1.5;
/// Per-axis cap on drift speed, in pixels per frame.
pub(in crate::app) const MAX_DRIFT_SPEED: f32 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::app) enum NodeKind {
    Skill,
    Project,
}

/// Canvas extent in pixels. Resized every frame from the central panel
/// rect; existing nodes keep the absolute positions they were spawned
/// with, only nodes created afterwards see the new extent.
#[derive(Clone, Copy, Debug)]
pub(in crate::app) struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub(in crate::app) fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub(in crate::app) fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

pub(in crate::app) struct Node {
    pub kind: NodeKind,
    pub id: String,
    pub name: String,
    pub base_radius: f32,
    pub links: Vec<String>,
    pub url: Option<String>,
    pub pos: Pos2,
    pub velocity: Vec2,
    pub radius: f32,
    pub hovered: bool,
}

impl Node {
    fn spawn(
        kind: NodeKind,
        id: String,
        name: String,
        normalized: Vec2,
        base_radius: f32,
        links: Vec<String>,
        url: Option<String>,
        viewport: &Viewport,
    ) -> Self {
        let (dx, dy) = stable_pair(&id);
        Self {
            kind,
            name,
            base_radius,
            links,
            url,
            // Normalized fraction converted to pixels exactly once, here.
            pos: pos2(normalized.x * viewport.width, normalized.y * viewport.height),
            velocity: vec2(dx * MAX_DRIFT_SPEED, dy * MAX_DRIFT_SPEED),
            radius: base_radius,
            hovered: false,
            id,
        }
    }

    pub(in crate::app) fn from_skill(record: &SkillRecord, viewport: &Viewport) -> Self {
        Self::spawn(
            NodeKind::Skill,
            record.id.clone(),
            record.name.clone(),
            vec2(record.x, record.y),
            record.size,
            Vec::new(),
            None,
            viewport,
        )
    }

    pub(in crate::app) fn from_project(record: &ProjectRecord, viewport: &Viewport) -> Self {
        Self::spawn(
            NodeKind::Project,
            record.name.clone(),
            record.name.clone(),
            vec2(record.x, record.y),
            record.size,
            record.links.clone(),
            record.navigable_url().map(str::to_owned),
            viewport,
        )
    }

    /// Advances the node one frame and recomputes its hover state.
    /// Returns the hover flag so the caller can aggregate "is anything
    /// hovered" across the whole pass.
    pub(in crate::app) fn update(&mut self, viewport: &Viewport, cursor: Pos2) -> bool {
        self.pos += self.velocity;

        // Reflect after moving: the node may sit outside the extent for a
        // frame, the sign flip only takes effect on the next step.
        if self.pos.x < 0.0 || self.pos.x > viewport.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.pos.y < 0.0 || self.pos.y > viewport.height {
            self.velocity.y = -self.velocity.y;
        }

        self.hovered = cursor.distance(self.pos) < HOVER_RADIUS;
        self.radius = if self.hovered {
            self.base_radius * HOVER_SCALE
        } else {
            self.base_radius
        };
        self.hovered
    }
}

/// The whole simulation context: created once when the first frame knows
/// the canvas extent, mutated every frame, never respawned.
pub(in crate::app) struct Scene {
    pub viewport: Viewport,
    pub cursor: Pos2,
    pub stars: Vec<Node>,
    pub planets: Vec<Node>,
}

impl Scene {
    pub(in crate::app) fn new(universe: &Universe, width: f32, height: f32) -> Self {
        let viewport = Viewport::new(width, height);
        let stars = universe
            .skills
            .iter()
            .map(|skill| Node::from_skill(skill, &viewport))
            .collect();
        let planets = universe
            .projects
            .iter()
            .map(|project| Node::from_project(project, &viewport))
            .collect();

        Self {
            viewport,
            cursor: Pos2::ZERO,
            stars,
            planets,
        }
    }

    /// One simulation step: stars first, then planets, so connector
    /// endpoints are both final within the same frame. Returns whether
    /// any node is hovered, applied once by the caller as the pointer
    /// style hint.
    pub(in crate::app) fn step(&mut self) -> bool {
        let mut any_hovered = false;
        for star in &mut self.stars {
            any_hovered |= star.update(&self.viewport, self.cursor);
        }
        for planet in &mut self.planets {
            any_hovered |= planet.update(&self.viewport, self.cursor);
        }
        any_hovered
    }
}
