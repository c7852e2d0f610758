//! Renderer-agnostic playback of split chunks.
//!
//! The map layer is injected as a [`RouteRenderer`]; this module only decides
//! what to draw and for how long.

use crate::config::PlaybackConfig;
use crate::models::{Chunk, TimedPoint, Waypoint};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Peak opacity of a fully faded-in chunk layer.
pub const LAYER_OPACITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Start,
    End,
    Aircraft,
}

impl MarkerKind {
    /// Icon edge length in pixels.
    pub fn icon_size_px(self) -> f64 {
        match self {
            MarkerKind::Aircraft => 20.0,
            MarkerKind::Start | MarkerKind::End => 15.0,
        }
    }

    /// Icon anchor offset, centered on the position.
    pub fn icon_anchor_px(self) -> f64 {
        self.icon_size_px() / 2.0
    }
}

/// Drawing capability supplied by the map layer.
pub trait RouteRenderer {
    fn place_marker(&mut self, kind: MarkerKind, at: &TimedPoint);

    fn draw_polyline(&mut self, layer: usize, points: &[Waypoint]);

    fn set_layer_opacity(&mut self, layer: usize, opacity: f64);

    fn remove_layer(&mut self, layer: usize);

    /// Move the aircraft marker from `from` to `to` over `duration`, rotated to `from.bearing`.
    fn animate(&mut self, from: &TimedPoint, to: &TimedPoint, duration: Duration);
}

/// Opacities of an outgoing and incoming layer at one instant of a cross-fade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeFrame {
    pub old_opacity: f64,
    pub new_opacity: f64,
    pub finished: bool,
}

/// Linear cross-fade between two overlay layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeOverlay {
    pub duration: Duration,
    pub peak_opacity: f64,
}

impl Default for FadeOverlay {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(500),
            peak_opacity: LAYER_OPACITY,
        }
    }
}

impl FadeOverlay {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Default::default()
        }
    }

    pub fn frame_at(&self, elapsed: Duration) -> FadeFrame {
        let ratio = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };
        FadeFrame {
            old_opacity: self.peak_opacity * (1.0 - ratio),
            new_opacity: self.peak_opacity * ratio,
            finished: ratio >= 1.0,
        }
    }

    /// Frames every `step` from the start until the fade finishes; the last frame is always finished.
    pub fn frames(&self, step: Duration) -> impl Iterator<Item = FadeFrame> + '_ {
        let step = step.max(Duration::from_millis(1));
        let mut elapsed = Duration::ZERO;
        let mut done = false;
        std::iter::from_fn(move || {
            if done {
                return None;
            }
            let frame = self.frame_at(elapsed);
            done = frame.finished;
            elapsed += step;
            Some(frame)
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSummary {
    pub chunks: usize,
    pub legs: usize,
    pub total_ms: u64,
}

/// Drive `renderer` through every chunk in order.
pub fn play_route<R: RouteRenderer + ?Sized>(
    chunks: &[Chunk],
    renderer: &mut R,
    config: &PlaybackConfig,
) -> PlaybackSummary {
    let mut summary = PlaybackSummary::default();
    let (Some(first), Some(last)) = (
        chunks.first().and_then(Chunk::first),
        chunks.last().and_then(Chunk::last),
    ) else {
        return summary;
    };

    renderer.place_marker(MarkerKind::Start, first);
    renderer.place_marker(MarkerKind::End, last);
    renderer.place_marker(MarkerKind::Aircraft, first);

    let fade = FadeOverlay::new(Duration::from_millis(config.fade_duration_ms));
    let frame_step = Duration::from_millis(config.fade_frame_ms);

    for (layer, chunk) in chunks.iter().enumerate() {
        renderer.draw_polyline(layer, &chunk.positions());
        if layer == 0 {
            renderer.set_layer_opacity(layer, fade.peak_opacity);
        } else {
            for frame in fade.frames(frame_step) {
                renderer.set_layer_opacity(layer - 1, frame.old_opacity);
                renderer.set_layer_opacity(layer, frame.new_opacity);
            }
            renderer.remove_layer(layer - 1);
        }

        for pair in chunk.points.windows(2) {
            let minutes = (pair[1].elapsed_min - pair[0].elapsed_min).max(0.0);
            let ms = (minutes * config.ms_per_flight_minute as f64).round() as u64;
            renderer.animate(&pair[0], &pair[1], Duration::from_millis(ms));
            summary.legs += 1;
            summary.total_ms = summary.total_ms.saturating_add(ms);
        }
        summary.chunks += 1;
    }

    summary
}
