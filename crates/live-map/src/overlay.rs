//! Replaces the displayed marker set with the latest vehicle list.

use std::sync::Arc;

use tracing::debug;
use vehicle_feed::VehiclePosition;

use crate::marker::{Marker, SelectHandler};

/// Map rendering collaborator.
///
/// Implementations are not expected to be thread-safe; they are only touched
/// from the display actor.
pub trait MapSurface {
    /// Remove every marker currently shown.
    fn clear(&mut self);

    /// Add a marker on top of those already shown.
    fn add(&mut self, marker: Marker);

    /// Signal that the marker set changed and the map should be redrawn.
    fn repaint(&mut self);
}

/// Owns the map surface and rebuilds its markers each cycle.
pub struct OverlaySync<M> {
    surface: M,
    on_select: SelectHandler,
}

impl<M: MapSurface> OverlaySync<M> {
    pub fn new(surface: M, on_select: SelectHandler) -> Self {
        Self { surface, on_select }
    }

    /// Clear the surface, add one marker per vehicle in list order, then
    /// repaint. Returns the number of markers shown.
    pub fn sync(&mut self, vehicles: Vec<VehiclePosition>) -> usize {
        self.surface.clear();

        let count = vehicles.len();
        for vehicle in vehicles {
            let marker = Marker::new(Arc::new(vehicle), Arc::clone(&self.on_select));
            self.surface.add(marker);
        }

        self.surface.repaint();
        debug!(markers = count, "overlay replaced");
        count
    }

    pub const fn surface(&self) -> &M {
        &self.surface
    }

    pub fn into_surface(self) -> M {
        self.surface
    }
}
