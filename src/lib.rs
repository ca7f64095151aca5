//! Hand-drawn technical drawings.
//!
//! `kintsugi` turns precise geometry into SVG drawings that look sketched
//! by hand while staying measurable:
//!
//! - [`engine`] projects 3D parts into 2D sketches through the
//!   [`CadEngine`] trait.
//! - [`sketch`] wobbles lines, arcs and circles with seeded noise. Line
//!   endpoints never move, and lines only wobble sideways.
//! - [`text`] letters annotations with single-stroke glyphs.
//! - [`drawing`] collects paths, dimensions, callouts, hatching and labels.
//! - [`render`] writes the drawing out as SVG.
//!
//! ```
//! use glam::dvec2;
//! use kintsugi::{Dimension, DimensionLabel, Drawing, WabiSketch, render_to_svg};
//!
//! let wabi = WabiSketch::default();
//! let mut drawing = Drawing::default();
//! drawing
//!     .add_sketch_path(wabi.sketch_line(dvec2(50.0, 200.0), dvec2(450.0, 200.0)))
//!     .add_dimension(Dimension::new(
//!         dvec2(50.0, 200.0),
//!         dvec2(450.0, 200.0),
//!         DimensionLabel::Text("24\"".into()),
//!     ));
//! let svg = render_to_svg(&drawing).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod drawing;
pub mod engine;
pub mod errors;
pub mod log;
pub mod render;
pub mod sketch;
pub mod text;
pub mod types;

pub use drawing::{
    Callout, CenterLine, Dimension, DimensionLabel, Drawing, Element, HatchRegion, Label,
    LabelStyle, Layer, Side, to_shop_fraction,
};
pub use engine::{CadEngine, CadError, Sketch, View, Wireframe, WireframeEngine};
pub use errors::{ConfigError, RenderError, SceneError};
pub use render::{RenderOptions, render_to_svg, render_with_options};
pub use sketch::{SketchConfig, WabiSketch, perturb_arc, perturb_circle, perturb_line};
pub use text::{HandTextRenderer, HersheyFont, TextConfig};
pub use types::{Color, Palette, Path, StrokeWeight};

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec2, DVec3, dvec2};

    #[test]
    fn sketch_and_letter_a_part() {
        let part = Wireframe::cuboid(DVec3::ZERO, DVec3::new(100.0, 40.0, 20.0));
        let sketch = WireframeEngine::default().project(&part, View::Top).unwrap();
        assert!(!sketch.is_empty());

        let mut drawing = Drawing::default();
        drawing
            .add_sketch(&WabiSketch::default(), &sketch.transform(|p| p + dvec2(50.0, 50.0), 1.0))
            .add_text(&HandTextRenderer::default(), "PANEL", 50.0, 20.0);
        assert_eq!(drawing.layer(Layer::Sketch).count(), sketch.len());
        assert!(drawing.layer(Layer::Lettering).count() > 0);

        let svg = render_to_svg(&drawing).unwrap();
        assert_eq!(svg.matches("stroke-width=\"1.8\"").count(), sketch.len());
    }

    #[test]
    fn reexported_fraction() {
        assert_eq!(to_shop_fraction(0.5, 16), "1/2\"");
    }

    #[test]
    fn measured_dimension_renders_fraction() {
        let mut drawing = Drawing::default();
        drawing.add_dimension(Dimension::new(
            DVec2::ZERO + dvec2(10.0, 10.0),
            dvec2(13.75, 10.0),
            DimensionLabel::Measured,
        ));
        let svg = render_to_svg(&drawing).unwrap();
        assert!(svg.contains(">3 3/4\"</text>"), "{svg}");
    }
}
