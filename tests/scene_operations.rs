use egui::pos2;
use space_configurator::element::ElementKind;
use space_configurator::grid::{GridConfig, snap_point};
use space_configurator::scene::{DUPLICATE_OFFSET, Scene};
use space_configurator::tools::Tool;

// Helper to build a scene with one wall and one furniture element
fn create_test_scene() -> Scene {
    let mut scene = Scene::new();
    scene.place_element(Tool::Wall, pos2(20.0, 40.0));
    scene.place_element(Tool::Furniture, pos2(200.0, 200.0));
    scene
}

#[test]
fn test_place_appends_in_paint_order_with_unique_ids() {
    let mut scene = Scene::new();

    let first = scene.place_element(Tool::Wall, pos2(0.0, 0.0)).unwrap().id;
    let second = scene.place_element(Tool::Door, pos2(40.0, 40.0)).unwrap().id;
    let third = scene.place_element(Tool::Light, pos2(80.0, 80.0)).unwrap().id;

    assert_ne!(first, second);
    assert_ne!(second, third);
    assert_ne!(first, third);

    // Newest element paints on top (last in the sequence).
    let ids: Vec<_> = scene.elements().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![first, second, third]);
}

#[test]
fn test_place_with_select_tool_is_rejected() {
    let mut scene = create_test_scene();
    let selected_before = scene.selected_id();

    let placed = scene.place_element(Tool::Select, pos2(50.0, 50.0));

    assert!(placed.is_none());
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.selected_id(), selected_before);
}

#[test]
fn test_select_and_clear_selection() {
    let mut scene = create_test_scene();
    let id = scene.elements()[0].id;

    scene.select_element(id);
    assert_eq!(scene.selected_id(), Some(id));
    assert_eq!(scene.selected_element().unwrap().id, id);

    scene.clear_selection();
    assert_eq!(scene.selected_id(), None);
}

#[test]
fn test_selecting_an_unknown_id_changes_nothing() {
    let mut scene = create_test_scene();
    let id = scene.elements()[0].id;
    scene.select_element(id);

    scene.select_element(usize::MAX);

    assert_eq!(scene.selected_id(), Some(id));
}

#[test]
fn test_delete_clears_its_own_selection() {
    let mut scene = create_test_scene();
    let id = scene.elements()[0].id;
    scene.select_element(id);

    scene.delete_element(id);

    assert_eq!(scene.len(), 1);
    assert_eq!(scene.selected_id(), None);
    assert!(scene.elements().iter().all(|e| e.id != id));
}

#[test]
fn test_delete_of_another_element_keeps_selection() {
    let mut scene = create_test_scene();
    let selected = scene.elements()[0].id;
    let other = scene.elements()[1].id;
    scene.select_element(selected);

    scene.delete_element(other);

    assert_eq!(scene.len(), 1);
    assert_eq!(scene.selected_id(), Some(selected));
}

#[test]
fn test_delete_of_an_unknown_id_is_a_no_op() {
    let mut scene = create_test_scene();

    scene.delete_element(usize::MAX);

    assert_eq!(scene.len(), 2);
}

#[test]
fn test_rotate_cycles_back_after_four_turns() {
    let mut scene = create_test_scene();
    let id = scene.elements()[0].id;

    scene.rotate_element(id);
    assert_eq!(scene.elements()[0].rotation, 90);

    scene.rotate_element(id);
    scene.rotate_element(id);
    scene.rotate_element(id);
    assert_eq!(scene.elements()[0].rotation, 0);
}

#[test]
fn test_rotate_of_an_unknown_id_is_a_no_op() {
    let mut scene = create_test_scene();

    scene.rotate_element(usize::MAX);

    assert!(scene.elements().iter().all(|e| e.rotation == 0));
}

#[test]
fn test_duplicate_copies_fields_with_fresh_id_and_offset() {
    let mut scene = create_test_scene();
    let source = scene.elements()[0].clone();

    let copy = scene.duplicate_element(source.id).unwrap().clone();

    assert_ne!(copy.id, source.id);
    assert_eq!(copy.x, source.x + DUPLICATE_OFFSET.x);
    assert_eq!(copy.y, source.y + DUPLICATE_OFFSET.y);
    assert_eq!(copy.kind, source.kind);
    assert_eq!(copy.width, source.width);
    assert_eq!(copy.height, source.height);
    assert_eq!(copy.rotation, source.rotation);
    assert_eq!(copy.material, source.material);
    assert_eq!(copy.color_tag, source.color_tag);

    // The copy paints above its source, and the source is untouched.
    assert_eq!(scene.elements().last().unwrap().id, copy.id);
    assert_eq!(scene.elements()[0], source);
}

#[test]
fn test_duplicate_never_reuses_an_existing_id() {
    let mut scene = create_test_scene();
    let source = scene.elements()[0].id;

    for _ in 0..10 {
        scene.duplicate_element(source);
    }

    let mut ids: Vec<_> = scene.elements().iter().map(|e| e.id).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn test_duplicate_of_an_unknown_id_returns_nothing() {
    let mut scene = create_test_scene();

    assert!(scene.duplicate_element(usize::MAX).is_none());
    assert_eq!(scene.len(), 2);
}

#[test]
fn test_element_at_picks_the_front_most_hit() {
    let mut scene = Scene::new();
    let below = scene
        .place_element(Tool::Furniture, pos2(100.0, 100.0))
        .unwrap()
        .id;
    let above = scene
        .place_element(Tool::Furniture, pos2(120.0, 120.0))
        .unwrap()
        .id;

    // (130, 130) lies inside both footprints; the later element wins.
    assert_eq!(scene.element_at(pos2(130.0, 130.0)), Some(above));
    // (105, 105) only hits the first one.
    assert_eq!(scene.element_at(pos2(105.0, 105.0)), Some(below));
    assert_eq!(scene.element_at(pos2(500.0, 500.0)), None);
}

#[test]
fn test_type_query_and_summary_aggregates() {
    // Scenario: one wall (100x20) and one furniture (60x60).
    let scene = create_test_scene();

    assert_eq!(scene.elements_of_type(ElementKind::Wall).count(), 1);
    assert_eq!(scene.elements_of_type(ElementKind::Furniture).count(), 1);
    assert_eq!(scene.elements_of_type(ElementKind::Door).count(), 0);

    let summary = scene.summary();
    assert_eq!(summary.elements, 2);
    assert_eq!(summary.walls, 1);
    assert_eq!(summary.furniture, 1);
    // (100*20 + 60*60) canvas units² at 100 units per meter.
    assert!((summary.total_area_m2 - 0.56).abs() < 1e-6);
}

#[test]
fn test_placement_scenario_with_snapping() {
    // Raw pointer (23, 47), snapping on, pitch 20 -> element at (20, 40).
    let grid = GridConfig::default();
    let mut scene = Scene::new();

    let snapped = snap_point(pos2(23.0, 47.0), &grid);
    let element = scene.place_element(Tool::Wall, snapped).unwrap();

    assert_eq!(element.x, 20.0);
    assert_eq!(element.y, 40.0);
    assert_eq!(element.kind, ElementKind::Wall);
    assert_eq!(element.rotation, 0);
}

#[test]
fn test_from_elements_keeps_ids_collision_free() {
    let mut scene = create_test_scene();
    scene.select_element(scene.elements()[0].id);
    let elements = scene.elements().to_vec();
    let existing: Vec<_> = elements.iter().map(|e| e.id).collect();

    let mut restored = Scene::from_elements(elements);

    // Restored scenes start with nothing selected.
    assert_eq!(restored.selected_id(), None);
    assert_eq!(restored.len(), 2);

    let fresh = restored
        .place_element(Tool::Door, pos2(0.0, 0.0))
        .unwrap()
        .id;
    assert!(!existing.contains(&fresh));
}
