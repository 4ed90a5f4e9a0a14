//! Placement store: the source of truth for what is on the canvas.
//!
//! DESIGN
//! ======
//! Placed instances live in a map keyed by instance id, with a monotone
//! insertion counter breaking z-index ties deterministically. Operations
//! against unknown ids are silent no-ops: the embedding surface only issues
//! ids it produced itself, so a miss indicates a caller bug rather than a
//! user-facing error condition.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::config::CanvasConfig;

/// Unique identifier for a placed instance.
pub type InstanceId = Uuid;

/// A catalog product placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedInstance {
    /// Unique identifier, assigned at creation.
    pub instance_id: InstanceId,
    /// Catalog product this instance was created from.
    pub product_id: String,
    /// Left edge of the unscaled footprint, in canvas units.
    pub x: f64,
    /// Top edge of the unscaled footprint, in canvas units.
    pub y: f64,
    /// Display scale factor, always within the configured limits.
    pub scale: f64,
    /// Stacking order; higher values draw on top.
    pub z_index: i64,
    /// Insertion counter; breaks z-index ties deterministically.
    pub seq: u64,
}

/// In-memory collection of placed instances and their mutation API.
pub struct PlacementStore {
    catalog: Catalog,
    config: CanvasConfig,
    instances: HashMap<InstanceId, PlacedInstance>,
    next_seq: u64,
}

impl PlacementStore {
    /// Create an empty store over `catalog` with the default canvas frame.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, CanvasConfig::default())
    }

    /// Create an empty store with an explicit canvas configuration.
    #[must_use]
    pub fn with_config(catalog: Catalog, config: CanvasConfig) -> Self {
        Self { catalog, config, instances: HashMap::new(), next_seq: 0 }
    }

    /// The reference data instances resolve against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The canvas frame and scale limits in effect.
    #[must_use]
    pub fn config(&self) -> CanvasConfig {
        self.config
    }

    // --- Mutations ---

    /// Place a new instance of `product_id`, optionally at an explicit
    /// position. Without one, the instance is centered in the canvas frame
    /// using its catalog footprint so it starts fully visible. The new
    /// instance lands above everything already placed.
    ///
    /// Returns `None` when the product is unknown to the catalog.
    pub fn add_instance(&mut self, product_id: &str, position: Option<(f64, f64)>) -> Option<InstanceId> {
        let product = self.catalog.get(product_id)?;
        let (x, y) = position.unwrap_or((
            (self.config.width - product.footprint.width) / 2.0,
            (self.config.height - product.footprint.height) / 2.0,
        ));
        let z_index = self.top_z().map_or(1, |z| z + 1);

        let instance = PlacedInstance {
            instance_id: Uuid::new_v4(),
            product_id: product_id.to_string(),
            x,
            y,
            scale: 1.0,
            z_index,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        let id = instance.instance_id;
        debug!(instance = %id, product = product_id, x, y, z_index, "instance placed");
        self.instances.insert(id, instance);
        Some(id)
    }

    /// Move an instance. The store applies no bounds clamping; constraining
    /// a live gesture to the viewport is the surface's concern.
    pub fn update_position(&mut self, id: InstanceId, x: f64, y: f64) {
        let Some(instance) = self.instances.get_mut(&id) else {
            return;
        };
        instance.x = x;
        instance.y = y;
        debug!(instance = %id, x, y, "instance moved");
    }

    /// Adjust an instance's scale by `delta`, clamped to the configured
    /// limits.
    pub fn update_scale(&mut self, id: InstanceId, delta: f64) {
        let limits = self.config;
        let Some(instance) = self.instances.get_mut(&id) else {
            return;
        };
        instance.scale = limits.clamp_scale(instance.scale + delta);
        debug!(instance = %id, scale = instance.scale, "instance rescaled");
    }

    /// Raise an instance above every other instance.
    ///
    /// No-op when the id is unknown or the store holds a single instance,
    /// which is already at both extremes.
    pub fn bring_to_front(&mut self, id: InstanceId) {
        if self.instances.len() <= 1 || !self.instances.contains_key(&id) {
            return;
        }
        let top = self.top_z().unwrap_or(0);
        if let Some(instance) = self.instances.get_mut(&id) {
            instance.z_index = top + 1;
            debug!(instance = %id, z_index = instance.z_index, "instance raised");
        }
    }

    /// Lower an instance beneath every other instance.
    ///
    /// No-op when the id is unknown or the store holds a single instance.
    pub fn send_to_back(&mut self, id: InstanceId) {
        if self.instances.len() <= 1 || !self.instances.contains_key(&id) {
            return;
        }
        let bottom = self.bottom_z().unwrap_or(0);
        if let Some(instance) = self.instances.get_mut(&id) {
            instance.z_index = bottom - 1;
            debug!(instance = %id, z_index = instance.z_index, "instance lowered");
        }
    }

    /// Remove an instance. Removing an id that does not exist is a no-op.
    pub fn remove_instance(&mut self, id: InstanceId) {
        if self.instances.remove(&id).is_some() {
            debug!(instance = %id, "instance removed");
        }
    }

    /// Remove every instance unconditionally. There is no undo.
    pub fn clear_all(&mut self) {
        let removed = self.instances.len();
        self.instances.clear();
        debug!(removed, "canvas cleared");
    }

    // --- Queries ---

    /// Return a reference to an instance by id.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&PlacedInstance> {
        self.instances.get(&id)
    }

    /// Number of instances currently placed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if nothing is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// All instances in paint order: ascending `(z_index, seq)`.
    #[must_use]
    pub fn sorted_instances(&self) -> Vec<&PlacedInstance> {
        let mut instances: Vec<&PlacedInstance> = self.instances.values().collect();
        instances.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.seq.cmp(&b.seq)));
        instances
    }

    /// All instances in the order they were placed.
    #[must_use]
    pub fn in_insertion_order(&self) -> Vec<&PlacedInstance> {
        let mut instances: Vec<&PlacedInstance> = self.instances.values().collect();
        instances.sort_by_key(|i| i.seq);
        instances
    }

    fn top_z(&self) -> Option<i64> {
        self.instances.values().map(|i| i.z_index).max()
    }

    fn bottom_z(&self) -> Option<i64> {
        self.instances.values().map(|i| i.z_index).min()
    }
}
