use egui::pos2;
use space_configurator::element::{Element, ElementKind, Material};
use space_configurator::id_generator::generate_id;

fn create_element(kind: ElementKind) -> Element {
    Element::new(generate_id(), kind, pos2(100.0, 200.0))
}

#[test]
fn test_wall_defaults_are_elongated() {
    let wall = create_element(ElementKind::Wall);

    assert_eq!(wall.width, 100.0);
    assert_eq!(wall.height, 20.0);
    assert!(wall.width > wall.height);
}

#[test]
fn test_non_wall_defaults_are_square() {
    for kind in [
        ElementKind::Door,
        ElementKind::Window,
        ElementKind::Furniture,
        ElementKind::Light,
    ] {
        let element = create_element(kind);
        assert_eq!(element.width, 60.0, "{} width", kind.name());
        assert_eq!(element.height, 60.0, "{} height", kind.name());
    }
}

#[test]
fn test_new_element_starts_unrotated_concrete() {
    let element = create_element(ElementKind::Door);

    assert_eq!(element.rotation, 0);
    assert_eq!(element.material, Material::Concrete);
    assert_eq!(element.x, 100.0);
    assert_eq!(element.y, 200.0);
}

#[test]
fn test_color_tag_comes_from_the_placing_tool() {
    let wall = create_element(ElementKind::Wall);
    let light = create_element(ElementKind::Light);

    assert_eq!(wall.color_tag, ElementKind::Wall.tint());
    assert_eq!(light.color_tag, ElementKind::Light.tint());
    assert_ne!(wall.color_tag, light.color_tag);
}

#[test]
fn test_rotate_advances_in_quarter_turns_and_wraps() {
    let mut element = create_element(ElementKind::Furniture);

    element.rotate();
    assert_eq!(element.rotation, 90);
    element.rotate();
    assert_eq!(element.rotation, 180);
    element.rotate();
    assert_eq!(element.rotation, 270);
    element.rotate();
    assert_eq!(element.rotation, 0);
}

#[test]
fn test_painted_rect_swaps_axes_on_quarter_turns() {
    let mut wall = create_element(ElementKind::Wall);
    let upright = wall.painted_rect();

    wall.rotate();
    let turned = wall.painted_rect();

    // A quarter turn about the center swaps the footprint's axes.
    assert_eq!(turned.width(), upright.height());
    assert_eq!(turned.height(), upright.width());
    assert_eq!(turned.center(), upright.center());

    wall.rotate();
    assert_eq!(wall.painted_rect(), upright);
}

#[test]
fn test_hit_test_uses_the_painted_footprint() {
    let mut wall = create_element(ElementKind::Wall);

    // 100x20 footprint at (100, 200)
    assert!(wall.hit_test(pos2(150.0, 210.0)));
    assert!(!wall.hit_test(pos2(150.0, 260.0)));

    // After a quarter turn the footprint stands upright around the center.
    wall.rotate();
    assert!(wall.hit_test(pos2(150.0, 260.0)));
    assert!(!wall.hit_test(pos2(105.0, 210.0)));
}

#[test]
fn test_area_is_width_times_height() {
    let wall = create_element(ElementKind::Wall);
    let furniture = create_element(ElementKind::Furniture);

    assert_eq!(wall.area(), 2000.0);
    assert_eq!(furniture.area(), 3600.0);
}
