//! Wabi-sabi sketching: noise-driven perturbation of lines, arcs and circles.
//!
//! Every primitive is resampled into a polyline and each sample is pushed
//! off the true geometry by a smooth noise field. Two rules keep the
//! drawing measurable:
//!
//! - lines are only displaced along their normal, so the projection of the
//!   wobbled path onto the line is the exact segment;
//! - displacement of open paths is weighted by `sin(pi t)`, so endpoints
//!   land exactly where the geometry says they are.

pub mod noise;

use std::f64::consts::{PI, TAU};

use glam::{DVec2, dvec2};
use serde::{Deserialize, Serialize};

use crate::engine::Sketch;
use crate::errors::ConfigError;
use crate::types::{Path, check_non_negative, check_positive};
pub use noise::Simplex2;

/// Lines shorter than this are returned as their two endpoints.
pub const MIN_LINE_LENGTH: f64 = 0.001;
/// Samples on a full circle.
pub const CIRCLE_SEGMENTS: usize = 60;
/// Most segments a single primitive is sampled into, however long it is.
pub const MAX_SEGMENTS: usize = 10_000;

/// Configuration for the wabi-sabi sketch effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Frequency of the noise field (per drawing unit)
    pub noise_scale: f64,
    /// Peak displacement in drawing units
    pub noise_amplitude: f64,
    /// Noise seed; `None` behaves like seed 0
    pub seed: Option<u64>,
    /// Samples per drawing unit of line length
    pub density: f64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            noise_scale: 0.02,
            noise_amplitude: 1.5,
            seed: None,
            density: 20.0,
        }
    }
}

impl SketchConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive(self.noise_scale).map_err(|e| ConfigError::value("noise_scale", e))?;
        check_non_negative(self.noise_amplitude)
            .map_err(|e| ConfigError::value("noise_amplitude", e))?;
        check_positive(self.density).map_err(|e| ConfigError::value("density", e))?;
        Ok(())
    }

    fn noise(&self) -> Simplex2 {
        Simplex2::new(self.seed.unwrap_or(0))
    }
}

/// Applies wabi-sabi perturbation to geometric primitives.
#[derive(Debug, Clone)]
pub struct WabiSketch {
    config: SketchConfig,
    noise: Simplex2,
}

impl Default for WabiSketch {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl WabiSketch {
    /// Create a sketcher (unchecked). Use `try_new` for user-provided settings.
    pub fn new(config: SketchConfig) -> Self {
        let noise = config.noise();
        Self { config, noise }
    }

    /// Create a sketcher with validated settings.
    pub fn try_new(config: SketchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Sketch a line with wabi-sabi effect.
    pub fn sketch_line(&self, start: DVec2, end: DVec2) -> Path {
        line_with(&self.noise, &self.config, start, end)
    }

    /// Sketch a closed circle with wabi-sabi effect.
    pub fn sketch_circle(&self, center: DVec2, radius: f64) -> Path {
        circle_with(&self.noise, &self.config, center, radius, CIRCLE_SEGMENTS)
    }

    /// Sketch an arc from `start` to `end` around `center`.
    pub fn sketch_arc(&self, start: DVec2, end: DVec2, center: DVec2, radius: f64) -> Path {
        arc_with(&self.noise, &self.config, start, end, center, radius)
    }

    /// Sketch every primitive of a projected sketch: lines, then arcs, then circles.
    pub fn sketch(&self, sketch: &Sketch) -> Vec<Path> {
        let lines = sketch.lines.iter().map(|l| self.sketch_line(l.start, l.end));
        let arcs = sketch
            .arcs
            .iter()
            .map(|a| self.sketch_arc(a.start, a.end, a.center, a.radius));
        let circles = sketch
            .circles
            .iter()
            .map(|c| self.sketch_circle(c.center, c.radius));
        lines.chain(arcs).chain(circles).collect()
    }
}

/// Apply wabi-sabi perturbation to a line segment.
///
/// Returns a polyline whose intermediate points are displaced perpendicular
/// to the line direction. The first and last points are exactly `start`
/// and `end`.
pub fn perturb_line(start: DVec2, end: DVec2, config: &SketchConfig) -> Path {
    line_with(&config.noise(), config, start, end)
}

/// Apply wabi-sabi perturbation to a circle. The path is closed: its last
/// point repeats the first.
pub fn perturb_circle(center: DVec2, radius: f64, config: &SketchConfig, segments: usize) -> Path {
    circle_with(&config.noise(), config, center, radius, segments)
}

/// Apply wabi-sabi perturbation to an arc.
pub fn perturb_arc(
    start: DVec2,
    end: DVec2,
    center: DVec2,
    radius: f64,
    config: &SketchConfig,
) -> Path {
    arc_with(&config.noise(), config, start, end, center, radius)
}

/// Weight that pins open paths at both ends.
#[inline]
fn envelope(t: f64) -> f64 {
    (PI * t).sin()
}

fn line_with(noise: &Simplex2, config: &SketchConfig, start: DVec2, end: DVec2) -> Path {
    let delta = end - start;
    let length = delta.length();

    if length < MIN_LINE_LENGTH {
        return vec![start, end];
    }

    let normal = dvec2(-delta.y, delta.x) / length;
    let segments = ((length * config.density).min(MAX_SEGMENTS as f64) as usize).max(3);

    let mut points: Path = (0..=segments)
        .map(|i| {
            let t = i as f64 / segments as f64;
            let base = start + delta * t;
            let n = noise.sample(base.x * config.noise_scale + t, base.y * config.noise_scale);
            base + normal * (n * config.noise_amplitude * envelope(t))
        })
        .collect();

    points[0] = start;
    points[segments] = end;
    points
}

fn circle_with(
    noise: &Simplex2,
    config: &SketchConfig,
    center: DVec2,
    radius: f64,
    segments: usize,
) -> Path {
    let segments = segments.clamp(3, MAX_SEGMENTS);
    let mut points: Path = (0..segments)
        .map(|i| {
            let angle = TAU * i as f64 / segments as f64;
            let (sin, cos) = angle.sin_cos();
            let n = noise.sample(
                center.x * config.noise_scale + cos,
                center.y * config.noise_scale + sin,
            );
            let r = radius + n * config.noise_amplitude;
            center + dvec2(cos, sin) * r
        })
        .collect();
    points.push(points[0]);
    points
}

fn arc_with(
    noise: &Simplex2,
    config: &SketchConfig,
    start: DVec2,
    end: DVec2,
    center: DVec2,
    radius: f64,
) -> Path {
    let (s, e) = (start - center, end - center);
    let a0 = s.y.atan2(s.x);
    let a1 = e.y.atan2(e.x);
    let segments = ((radius * 5.0).min(MAX_SEGMENTS as f64) as usize).max(10);

    let mut points: Path = (0..=segments)
        .map(|i| {
            let t = i as f64 / segments as f64;
            let angle = a0 + (a1 - a0) * t;
            let (sin, cos) = angle.sin_cos();
            let n = noise.sample(
                center.x * config.noise_scale + cos,
                center.y * config.noise_scale + sin,
            );
            let r = radius + n * config.noise_amplitude * envelope(t);
            center + dvec2(cos, sin) * r
        })
        .collect();

    points[0] = start;
    points[segments] = end;
    points
}
