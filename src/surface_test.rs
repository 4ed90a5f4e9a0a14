#![allow(clippy::float_cmp)]

use super::*;
use crate::catalog::{Catalog, CatalogProduct, Category, Footprint};

fn product(id: &str, width: f64, height: f64, price: u64) -> CatalogProduct {
    CatalogProduct {
        id: id.to_string(),
        name: id.to_string(),
        localized_name: id.to_string(),
        image: format!("/assets/{id}.svg"),
        footprint: Footprint { width, height },
        price,
        category: Category::Audio,
    }
}

fn test_surface() -> CanvasSurface {
    CanvasSurface::new(PlacementStore::new(Catalog::from_products(vec![
        product("speaker", 100.0, 150.0, 100),
        product("hub", 100.0, 100.0, 250),
    ])))
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_marks_an_existing_instance() {
    let mut surface = test_surface();
    let id = surface.add_instance("speaker", None).unwrap();
    surface.select(id);
    assert_eq!(surface.selected(), Some(id));
}

#[test]
fn select_unknown_is_a_noop() {
    let mut surface = test_surface();
    surface.select(InstanceId::new_v4());
    assert_eq!(surface.selected(), None);
}

#[test]
fn empty_canvas_click_clears_selection() {
    let mut surface = test_surface();
    let id = surface.add_instance("speaker", None).unwrap();
    surface.select(id);
    surface.clear_selection();
    assert_eq!(surface.selected(), None);
}

#[test]
fn select_does_not_reorder() {
    let mut surface = test_surface();
    let a = surface.add_instance("speaker", None).unwrap();
    let b = surface.add_instance("hub", None).unwrap();
    let z_a = surface.store().get(a).unwrap().z_index;
    surface.select(a);
    assert_eq!(surface.store().get(a).unwrap().z_index, z_a);
    assert!(surface.store().get(b).unwrap().z_index > z_a);
}

// =============================================================
// Drag protocol
// =============================================================

#[test]
fn drag_start_selects_and_begins_the_gesture() {
    let mut surface = test_surface();
    let id = surface.add_instance("speaker", Some((10.0, 20.0))).unwrap();
    assert!(surface.drag_start(id));
    assert_eq!(surface.selected(), Some(id));
    assert_eq!(surface.drag_state(), DragState::Dragging { id, x: 10.0, y: 20.0 });
}

#[test]
fn drag_start_unknown_is_rejected() {
    let mut surface = test_surface();
    assert!(!surface.drag_start(InstanceId::new_v4()));
    assert_eq!(surface.drag_state(), DragState::Idle);
}

#[test]
fn second_drag_start_is_rejected_while_active() {
    let mut surface = test_surface();
    let a = surface.add_instance("speaker", None).unwrap();
    let b = surface.add_instance("hub", None).unwrap();
    assert!(surface.drag_start(a));
    assert!(!surface.drag_start(b));
    assert!(matches!(surface.drag_state(), DragState::Dragging { id, .. } if id == a));
}

#[test]
fn drag_move_is_visual_only() {
    let mut surface = test_surface();
    let id = surface.add_instance("speaker", Some((10.0, 20.0))).unwrap();
    surface.drag_start(id);
    surface.drag_move(300.0, 200.0);

    // Store still holds the pre-gesture position.
    let placed = surface.store().get(id).unwrap();
    assert_eq!(placed.x, 10.0);
    assert_eq!(placed.y, 20.0);
    assert_eq!(surface.drag_state(), DragState::Dragging { id, x: 300.0, y: 200.0 });
}

#[test]
fn drag_end_commits_only_the_final_position() {
    let mut surface = test_surface();
    let id = surface.add_instance("speaker", Some((10.0, 20.0))).unwrap();
    surface.drag_start(id);
    surface.drag_move(100.0, 100.0);
    surface.drag_move(250.0, 180.0);
    surface.drag_end();

    let placed = surface.store().get(id).unwrap();
    assert_eq!(placed.x, 250.0);
    assert_eq!(placed.y, 180.0);
    assert_eq!(surface.drag_state(), DragState::Idle);
}

#[test]
fn drag_end_without_gesture_is_a_noop() {
    let mut surface = test_surface();
    surface.drag_end();
    assert_eq!(surface.drag_state(), DragState::Idle);
}

#[test]
fn drag_move_without_gesture_is_a_noop() {
    let mut surface = test_surface();
    surface.drag_move(50.0, 50.0);
    assert_eq!(surface.drag_state(), DragState::Idle);
}

#[test]
fn drag_is_bounded_by_the_canvas() {
    let mut surface = test_surface();
    // speaker footprint is 100x150 at scale 1.0 in an 800x600 frame.
    let id = surface.add_instance("speaker", Some((10.0, 20.0))).unwrap();
    surface.drag_start(id);
    surface.drag_move(10_000.0, -40.0);
    assert_eq!(surface.drag_state(), DragState::Dragging { id, x: 700.0, y: 0.0 });
}

#[test]
fn drag_bounds_account_for_scale() {
    let mut surface = test_surface();
    let id = surface.add_instance("hub", Some((0.0, 0.0))).unwrap();
    surface.update_scale(id, 1.0); // 100x100 footprint at scale 2.0
    surface.drag_start(id);
    surface.drag_move(10_000.0, 10_000.0);
    assert_eq!(surface.drag_state(), DragState::Dragging { id, x: 600.0, y: 400.0 });
}

// =============================================================
// Drop from the dock
// =============================================================

#[test]
fn drop_centers_under_the_cursor() {
    let mut surface = test_surface();
    let rect = CanvasRect { left: 50.0, top: 50.0, width: 800.0, height: 600.0 };
    let id = surface.drop_from_dock("hub", Point::new(350.0, 250.0), rect).unwrap();

    // Canvas-local (300, 200) minus half the 100x100 footprint.
    let placed = surface.store().get(id).unwrap();
    assert_eq!(placed.x, 250.0);
    assert_eq!(placed.y, 150.0);
}

#[test]
fn drop_clamps_to_the_canvas_origin() {
    let mut surface = test_surface();
    let rect = CanvasRect { left: 50.0, top: 50.0, width: 800.0, height: 600.0 };
    let id = surface.drop_from_dock("hub", Point::new(60.0, 55.0), rect).unwrap();

    let placed = surface.store().get(id).unwrap();
    assert_eq!(placed.x, 0.0);
    assert_eq!(placed.y, 0.0);
}

#[test]
fn drop_unknown_product_is_rejected() {
    let mut surface = test_surface();
    let rect = CanvasRect { left: 0.0, top: 0.0, width: 800.0, height: 600.0 };
    assert!(surface.drop_from_dock("toaster", Point::new(100.0, 100.0), rect).is_none());
    assert!(surface.store().is_empty());
}

// =============================================================
// Removal and clearing
// =============================================================

#[test]
fn remove_clears_a_matching_selection() {
    let mut surface = test_surface();
    let id = surface.add_instance("speaker", None).unwrap();
    surface.select(id);
    surface.remove_instance(id);
    assert_eq!(surface.selected(), None);
    assert!(surface.store().is_empty());
}

#[test]
fn remove_keeps_an_unrelated_selection() {
    let mut surface = test_surface();
    let a = surface.add_instance("speaker", None).unwrap();
    let b = surface.add_instance("hub", None).unwrap();
    surface.select(a);
    surface.remove_instance(b);
    assert_eq!(surface.selected(), Some(a));
}

#[test]
fn remove_cancels_a_matching_drag() {
    let mut surface = test_surface();
    let id = surface.add_instance("speaker", None).unwrap();
    surface.drag_start(id);
    surface.remove_instance(id);
    assert_eq!(surface.drag_state(), DragState::Idle);
}

#[test]
fn clear_all_resets_every_interaction_state() {
    let mut surface = test_surface();
    let a = surface.add_instance("speaker", None).unwrap();
    surface.add_instance("hub", None).unwrap();
    surface.select(a);
    surface.drag_start(a);

    surface.clear_all();
    assert!(surface.store().is_empty());
    assert_eq!(surface.selected(), None);
    assert_eq!(surface.drag_state(), DragState::Idle);
}

// =============================================================
// Derived quote
// =============================================================

#[test]
fn quote_reflects_the_current_arrangement() {
    let mut surface = test_surface();
    surface.add_instance("speaker", None).unwrap();
    surface.add_instance("speaker", None).unwrap();
    surface.add_instance("hub", None).unwrap();

    let quote = surface.quote();
    assert_eq!(quote.lines.len(), 2);
    assert_eq!(quote.grand_total, 2 * 100 + 250);
}
