use egui::Color32;

use crate::element::ElementKind;

/// The canvas tools. Exactly one is active at a time, owned by the app
/// controller; the tool only advises how the next canvas click is
/// interpreted and knows nothing about the scene.
///
/// Membership in the closed set is enforced by the type system, so an
/// unknown tool identifier cannot be represented at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Select,
    Wall,
    Door,
    Window,
    Furniture,
    Light,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Select,
        Tool::Wall,
        Tool::Door,
        Tool::Window,
        Tool::Furniture,
        Tool::Light,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Wall => "Wall",
            Tool::Door => "Door",
            Tool::Window => "Window",
            Tool::Furniture => "Furniture",
            Tool::Light => "Light",
        }
    }

    /// The element kind this tool places, or `None` for the select tool.
    pub fn element_kind(self) -> Option<ElementKind> {
        match self {
            Tool::Select => None,
            Tool::Wall => Some(ElementKind::Wall),
            Tool::Door => Some(ElementKind::Door),
            Tool::Window => Some(ElementKind::Window),
            Tool::Furniture => Some(ElementKind::Furniture),
            Tool::Light => Some(ElementKind::Light),
        }
    }

    pub fn is_placement(self) -> bool {
        self.element_kind().is_some()
    }

    /// Swatch color shown next to the tool button.
    pub fn tint(self) -> Color32 {
        match self.element_kind() {
            Some(kind) => kind.tint(),
            None => Color32::from_rgb(0x3b, 0x82, 0xf6),
        }
    }
}
