//! Renderer that narrates playback through `tracing` instead of drawing.

use flightpath_core::{MarkerKind, RouteRenderer, TimedPoint, Waypoint};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct TracingRenderer {
    /// Layers currently on the map
    pub visible_layers: Vec<usize>,
    pub animations: usize,
}

impl RouteRenderer for TracingRenderer {
    fn place_marker(&mut self, kind: MarkerKind, at: &TimedPoint) {
        tracing::info!(
            ?kind,
            lat = at.lat,
            lon = at.lon,
            reach_time = %at.reach_time,
            icon_px = kind.icon_size_px(),
            "marker placed"
        );
    }

    fn draw_polyline(&mut self, layer: usize, points: &[Waypoint]) {
        self.visible_layers.push(layer);
        tracing::info!(layer, points = points.len(), "polyline drawn");
    }

    fn set_layer_opacity(&mut self, layer: usize, opacity: f64) {
        tracing::trace!(layer, opacity, "layer opacity");
    }

    fn remove_layer(&mut self, layer: usize) {
        self.visible_layers.retain(|l| *l != layer);
        tracing::debug!(layer, "layer removed");
    }

    fn animate(&mut self, from: &TimedPoint, to: &TimedPoint, duration: Duration) {
        self.animations += 1;
        tracing::info!(
            from = %from.reach_time,
            to = %to.reach_time,
            heading = from.bearing.unwrap_or_default(),
            duration_ms = duration.as_millis() as u64,
            "aircraft moving"
        );
    }
}
