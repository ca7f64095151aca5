//! Rendering context - per-document state during rendering

use glam::DVec2;

use crate::types::Palette;

use super::RenderOptions;
use super::svg::{fmt_num, path_data};

/// Rendering context
pub struct RenderContext {
    /// Colors for this document
    pub palette: Palette,
    /// Decimal places for coordinates
    pub precision: usize,
    /// Drawing units per inch, for measured labels
    pub units_per_inch: f64,
    /// Finest shop-fraction denominator
    pub fraction_precision: u32,
    /// Clip paths emitted so far
    clip_count: usize,
}

impl RenderContext {
    pub fn new(palette: Palette, options: &RenderOptions) -> Self {
        Self {
            palette,
            precision: options.precision,
            units_per_inch: 1.0,
            fraction_precision: crate::drawing::fraction::DEFAULT_PRECISION,
            clip_count: 0,
        }
    }

    /// Next unique clip-path id (`hatch-clip-1`, `hatch-clip-2`, ...).
    pub fn next_clip_id(&mut self) -> String {
        self.clip_count += 1;
        format!("hatch-clip-{}", self.clip_count)
    }

    /// Format a coordinate.
    pub fn num(&self, value: f64) -> String {
        fmt_num(value, self.precision)
    }

    /// Format a point as `x,y`.
    pub fn point(&self, p: DVec2) -> String {
        format!("{},{}", self.num(p.x), self.num(p.y))
    }

    pub fn path_data(&self, points: &[DVec2]) -> Option<String> {
        path_data(points, self.precision)
    }
}
