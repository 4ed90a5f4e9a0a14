//! Canvas surface: selection and the pointer-gesture state machine.
//!
//! The surface bridges pointer input to placement-store mutations and owns
//! the transient interaction state not worth persisting. During a drag the
//! live position is tracked here and only the final position is committed,
//! so the store is not churned on every pointer-move event. Gestures are
//! modal: one drag at a time.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use tracing::debug;

use crate::quote::QuoteAggregate;
use crate::store::{InstanceId, PlacementStore};

/// A point in screen or canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Screen bounding rectangle of the canvas element, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// The active pointer gesture, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// An instance is being moved; `x`/`y` is the live visual-only position.
    Dragging { id: InstanceId, x: f64, y: f64 },
}

/// Interactive view over a [`PlacementStore`].
///
/// At most one instance is selected at a time. Selecting an instance readies
/// it for dragging but never reorders it; only the explicit raise/lower
/// operations touch z-order.
pub struct CanvasSurface {
    store: PlacementStore,
    selected: Option<InstanceId>,
    drag: DragState,
}

impl CanvasSurface {
    #[must_use]
    pub fn new(store: PlacementStore) -> Self {
        Self { store, selected: None, drag: DragState::Idle }
    }

    /// Read access to the underlying store.
    #[must_use]
    pub fn store(&self) -> &PlacementStore {
        &self.store
    }

    /// Totals for the current arrangement, recomputed on every call.
    #[must_use]
    pub fn quote(&self) -> QuoteAggregate {
        QuoteAggregate::from_store(&self.store)
    }

    // --- Selection ---

    /// The currently selected instance, if any.
    #[must_use]
    pub fn selected(&self) -> Option<InstanceId> {
        self.selected
    }

    /// Select an instance. No-op if it does not exist.
    pub fn select(&mut self, id: InstanceId) {
        if self.store.get(id).is_some() {
            self.selected = Some(id);
        }
    }

    /// Clear the selection (a click on empty canvas area).
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // --- Drag gesture ---

    /// The gesture currently in progress.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Begin dragging an instance, selecting it as a side effect.
    ///
    /// Returns `false` without starting a gesture when another drag is
    /// already active or the instance does not exist.
    pub fn drag_start(&mut self, id: InstanceId) -> bool {
        if self.drag != DragState::Idle {
            return false;
        }
        let Some(instance) = self.store.get(id) else {
            return false;
        };
        self.drag = DragState::Dragging { id, x: instance.x, y: instance.y };
        self.selected = Some(id);
        true
    }

    /// Track the pointer during an active drag. Visual-only: nothing is
    /// committed to the store. The position is clamped so the scaled
    /// footprint stays inside the canvas frame.
    pub fn drag_move(&mut self, x: f64, y: f64) {
        let DragState::Dragging { id, .. } = self.drag else {
            return;
        };
        let Some((w, h)) = self.scaled_footprint(id) else {
            return;
        };
        let config = self.store.config();
        let x = x.clamp(0.0, (config.width - w).max(0.0));
        let y = y.clamp(0.0, (config.height - h).max(0.0));
        self.drag = DragState::Dragging { id, x, y };
    }

    /// End the active drag, committing the final position to the store.
    pub fn drag_end(&mut self) {
        if let DragState::Dragging { id, x, y } = self.drag {
            self.store.update_position(id, x, y);
            debug!(instance = %id, x, y, "drag committed");
        }
        self.drag = DragState::Idle;
    }

    /// Place a product dropped from the dock. The canvas-local position is
    /// the pointer offset into `rect` minus half the product footprint, so
    /// the item centers under the cursor, clamped to stay at or inside the
    /// canvas origin.
    ///
    /// Returns `None` when the product is unknown.
    pub fn drop_from_dock(&mut self, product_id: &str, client: Point, rect: CanvasRect) -> Option<InstanceId> {
        let footprint = self.store.catalog().get(product_id)?.footprint;
        let x = (client.x - rect.left - footprint.width / 2.0).max(0.0);
        let y = (client.y - rect.top - footprint.height / 2.0).max(0.0);
        self.store.add_instance(product_id, Some((x, y)))
    }

    // --- Store mutations with surface bookkeeping ---

    /// Place a product, centered when no position is given.
    pub fn add_instance(&mut self, product_id: &str, position: Option<(f64, f64)>) -> Option<InstanceId> {
        self.store.add_instance(product_id, position)
    }

    /// Grow or shrink an instance by `delta`, clamped to the scale limits.
    pub fn update_scale(&mut self, id: InstanceId, delta: f64) {
        self.store.update_scale(id, delta);
    }

    /// Raise an instance above all others.
    pub fn bring_to_front(&mut self, id: InstanceId) {
        self.store.bring_to_front(id);
    }

    /// Lower an instance beneath all others.
    pub fn send_to_back(&mut self, id: InstanceId) {
        self.store.send_to_back(id);
    }

    /// Remove an instance, clearing the selection and any active gesture
    /// that pointed at it.
    pub fn remove_instance(&mut self, id: InstanceId) {
        self.store.remove_instance(id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        if matches!(self.drag, DragState::Dragging { id: dragged, .. } if dragged == id) {
            self.drag = DragState::Idle;
        }
    }

    /// Empty the canvas and reset all interaction state.
    pub fn clear_all(&mut self) {
        self.store.clear_all();
        self.selected = None;
        self.drag = DragState::Idle;
    }

    fn scaled_footprint(&self, id: InstanceId) -> Option<(f64, f64)> {
        let instance = self.store.get(id)?;
        let footprint = self.store.catalog().get(&instance.product_id)?.footprint;
        Some((footprint.width * instance.scale, footprint.height * instance.scale))
    }
}
