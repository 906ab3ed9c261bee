use egui::{Color32, Pos2, Rect, Vec2, pos2, vec2};
use serde::{Deserialize, Serialize};

use crate::id_generator::ElementId;

/// Default footprint of a wall element, elongated along the x axis.
pub const WALL_SIZE: Vec2 = vec2(100.0, 20.0);

/// Default square footprint for every non-wall element.
pub const DEFAULT_SIZE: Vec2 = vec2(60.0, 60.0);

/// The closed set of element kinds that can be placed on the canvas.
///
/// All kinds share the same record shape; they differ only in their default
/// footprint and display tint, so this is a plain tag rather than a trait
/// hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Wall,
    Door,
    Window,
    Furniture,
    Light,
}

impl ElementKind {
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Wall,
        ElementKind::Door,
        ElementKind::Window,
        ElementKind::Furniture,
        ElementKind::Light,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Wall => "Wall",
            ElementKind::Door => "Door",
            ElementKind::Window => "Window",
            ElementKind::Furniture => "Furniture",
            ElementKind::Light => "Light",
        }
    }

    /// Footprint assigned at creation. Walls are elongated (length along x,
    /// thickness along y); everything else starts square.
    pub fn default_size(self) -> Vec2 {
        match self {
            ElementKind::Wall => WALL_SIZE,
            _ => DEFAULT_SIZE,
        }
    }

    /// Display tint of the tool that places this kind.
    pub fn tint(self) -> Color32 {
        match self {
            ElementKind::Wall => Color32::from_rgb(0x6b, 0x72, 0x80),
            ElementKind::Door => Color32::from_rgb(0xf5, 0x9e, 0x0b),
            ElementKind::Window => Color32::from_rgb(0x06, 0xb6, 0xd4),
            ElementKind::Furniture => Color32::from_rgb(0x22, 0xc5, 0x5e),
            ElementKind::Light => Color32::from_rgb(0xea, 0xb3, 0x08),
        }
    }
}

/// Surface material of an element.
///
/// Semantic and exportable, unlike the cosmetic display tint. The field is
/// mutable for forward compatibility, but the current UI only shows the
/// swatch palette without wiring per-element editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    #[default]
    Concrete,
    Wood,
    Glass,
    Steel,
    Brick,
    Marble,
}

impl Material {
    pub const ALL: [Material; 6] = [
        Material::Concrete,
        Material::Wood,
        Material::Glass,
        Material::Steel,
        Material::Brick,
        Material::Marble,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Material::Concrete => "Concrete",
            Material::Wood => "Wood",
            Material::Glass => "Glass",
            Material::Steel => "Steel",
            Material::Brick => "Brick",
            Material::Marble => "Marble",
        }
    }

    /// Swatch color shown in the materials palette.
    pub fn swatch(self) -> Color32 {
        match self {
            Material::Concrete => Color32::from_rgb(0x8b, 0x86, 0x80),
            Material::Wood => Color32::from_rgb(0x8b, 0x45, 0x13),
            Material::Glass => Color32::from_rgb(0x87, 0xce, 0xeb),
            Material::Steel => Color32::from_rgb(0x46, 0x82, 0xb4),
            Material::Brick => Color32::from_rgb(0xb2, 0x22, 0x22),
            Material::Marble => Color32::from_rgb(0xf5, 0xf5, 0xdc),
        }
    }
}

/// A single placed architectural element.
///
/// Position and size are canvas-space units, never raw pointer pixels; the
/// caller snaps coordinates before construction. The serde representation is
/// the element record of the export document, so the field names and renames
/// here are part of the snapshot contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Degrees, always a multiple of 90 in [0, 360).
    pub rotation: u16,
    pub material: Material,
    /// Display tint inherited from the originating tool. Cosmetic only, but
    /// it must round-trip through export/import unchanged.
    #[serde(rename = "color")]
    pub color_tag: Color32,
}

impl Element {
    /// Create an element of `kind` at a canvas-space position, with the
    /// kind's default footprint, rotation 0 and concrete material.
    pub fn new(id: ElementId, kind: ElementKind, position: Pos2) -> Self {
        let size = kind.default_size();
        Self {
            id,
            kind,
            x: position.x,
            y: position.y,
            width: size.x,
            height: size.y,
            rotation: 0,
            material: Material::default(),
            color_tag: kind.tint(),
        }
    }

    pub fn position(&self) -> Pos2 {
        pos2(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    /// Axis-aligned footprint ignoring rotation.
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position(), self.size())
    }

    /// Footprint as painted: rotation happens about the center, so a quarter
    /// turn swaps width and height around it.
    pub fn painted_rect(&self) -> Rect {
        let rect = self.rect();
        if self.rotation % 180 == 90 {
            Rect::from_center_size(rect.center(), vec2(self.height, self.width))
        } else {
            rect
        }
    }

    /// Test whether a canvas-space point lands on the painted footprint.
    pub fn hit_test(&self, pos: Pos2) -> bool {
        self.painted_rect().contains(pos)
    }

    /// Advance rotation by a quarter turn, wrapping 360 back to 0.
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 90) % 360;
    }

    /// Footprint area in canvas units squared.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
