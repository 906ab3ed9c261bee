use egui::{Pos2, Vec2, vec2};
use log::info;

use crate::element::{Element, ElementKind};
use crate::id_generator::{self, ElementId};
use crate::tools::Tool;

/// Offset applied to a duplicated element so the copy does not occlude its
/// source.
pub const DUPLICATE_OFFSET: Vec2 = vec2(20.0, 20.0);

/// Canvas-space units per meter, used to convert footprint area to m².
pub const UNITS_PER_METER: f32 = 100.0;

/// One editing session's worth of placed elements.
///
/// Insertion order is paint order (front-most last). The selection is a weak
/// lookup key into the element list, never a direct link, so deleting the
/// selected element clears the selection in the same step and can never
/// leave it dangling.
///
/// Operating on an id that is not in the scene, or placing while the select
/// tool is active, is a silent no-op rather than an error: the UI can only
/// produce such calls from stale state, and there is nothing actionable to
/// surface to the user.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: Vec<Element>,
    selected: Option<ElementId>,
}

/// Read-only aggregates shown in the statistics strip. Derived on demand,
/// never cached.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneSummary {
    pub elements: usize,
    pub walls: usize,
    pub furniture: usize,
    pub total_area_m2: f32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a scene from elements loaded out of a snapshot, with nothing
    /// selected. Reserves every loaded id so freshly placed elements keep
    /// the uniqueness invariant.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        for element in &elements {
            id_generator::reserve_through(element.id);
        }
        Self {
            elements,
            selected: None,
        }
    }

    /// Elements in paint order, front-most last.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.find(id))
    }

    fn find(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    fn find_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|element| element.id == id)
    }

    /// Place a new element of the active tool's kind at an already snapped
    /// canvas-space position and return it.
    ///
    /// The select tool places nothing: the call is ignored before an id is
    /// consumed.
    pub fn place_element(&mut self, tool: Tool, position: Pos2) -> Option<&Element> {
        let kind = tool.element_kind()?;
        let element = Element::new(id_generator::generate_id(), kind, position);
        info!(
            "placed {} #{} at ({}, {})",
            kind.name(),
            element.id,
            element.x,
            element.y
        );
        self.elements.push(element);
        self.elements.last()
    }

    /// Select the element with `id`. Silently keeps the current selection if
    /// the id is not in the scene.
    pub fn select_element(&mut self, id: ElementId) {
        if self.find(id).is_some() {
            self.selected = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Remove the element with `id`. If it was selected, the selection goes
    /// absent in the same step. Unknown ids are ignored.
    pub fn delete_element(&mut self, id: ElementId) {
        let before = self.elements.len();
        self.elements.retain(|element| element.id != id);
        if self.elements.len() != before {
            info!("deleted element #{id}");
            if self.selected == Some(id) {
                self.selected = None;
            }
        }
    }

    /// Advance the element's rotation by a quarter turn. Unknown ids are
    /// ignored.
    pub fn rotate_element(&mut self, id: ElementId) {
        if let Some(element) = self.find_mut(id) {
            element.rotate();
        }
    }

    /// Clone the element with `id`, offset so the copy is visibly distinct,
    /// and append it above its source. Returns `None` for unknown ids.
    pub fn duplicate_element(&mut self, id: ElementId) -> Option<&Element> {
        let mut copy = self.find(id)?.clone();
        copy.id = id_generator::generate_id();
        copy.x += DUPLICATE_OFFSET.x;
        copy.y += DUPLICATE_OFFSET.y;
        info!("duplicated element #{id} as #{}", copy.id);
        self.elements.push(copy);
        self.elements.last()
    }

    /// The front-most element whose painted footprint contains the
    /// canvas-space point.
    pub fn element_at(&self, pos: Pos2) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|element| element.hit_test(pos))
            .map(|element| element.id)
    }

    pub fn elements_of_type(&self, kind: ElementKind) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(move |element| element.kind == kind)
    }

    pub fn count_of(&self, kind: ElementKind) -> usize {
        self.elements_of_type(kind).count()
    }

    /// Sum of element footprints converted to square meters.
    pub fn total_area_m2(&self) -> f32 {
        self.elements.iter().map(Element::area).sum::<f32>() / (UNITS_PER_METER * UNITS_PER_METER)
    }

    pub fn summary(&self) -> SceneSummary {
        SceneSummary {
            elements: self.len(),
            walls: self.count_of(ElementKind::Wall),
            furniture: self.count_of(ElementKind::Furniture),
            total_area_m2: self.total_area_m2(),
        }
    }
}
