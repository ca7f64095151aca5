//! The drawing model: a canvas, a palette and an ordered list of elements.
//!
//! Elements are kept in insertion order; the renderer groups them into
//! layers (see [`Layer`]) without reordering within a layer.

pub mod elements;
pub mod fraction;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::engine::Sketch;
use crate::errors::{ConfigError, SceneError};
use crate::render::RenderElement;
use crate::sketch::WabiSketch;
use crate::text::HandTextRenderer;
use crate::types::{Color, NumericError, Palette, Path, check_positive};

pub use elements::{
    Callout, CenterLine, Dimension, DimensionLabel, Element, HatchRegion, Label, LabelStyle,
    Layer, Side, SketchPath, TextPath,
};
pub use fraction::to_shop_fraction;

/// A technical drawing ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Drawing {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    /// Drawing units per inch, used for measured dimension labels
    pub units_per_inch: f64,
    /// Finest denominator for measured labels
    pub fraction_precision: u32,
    pub palette: Palette,
    pub elements: Vec<Element>,
}

impl Default for Drawing {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            width: 500.0,
            height: 380.0,
            background: palette.cream,
            units_per_inch: 1.0,
            fraction_precision: fraction::DEFAULT_PRECISION,
            palette,
            elements: Vec::new(),
        }
    }
}

impl Drawing {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Load a scene description from JSON.
    pub fn from_json(source: &str) -> Result<Self, SceneError> {
        Self::from_named_json("scene.json", source)
    }

    /// Load a scene description from JSON, naming the source in diagnostics.
    pub fn from_named_json(name: &str, source: &str) -> Result<Self, SceneError> {
        let drawing: Drawing =
            serde_json::from_str(source).map_err(|e| SceneError::from_json(name, source, &e))?;
        drawing.validate()?;
        crate::log::debug!(scene = name, elements = drawing.elements.len(), "loaded scene");
        Ok(drawing)
    }

    /// Serialize the scene description back to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check drawing-level settings. Canvas size is checked at render time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive(self.units_per_inch)
            .map_err(|e| ConfigError::value("units_per_inch", e))?;
        if self.fraction_precision == 0 {
            return Err(ConfigError::value(
                "fraction_precision",
                NumericError::Zero,
            ));
        }
        if self.fraction_precision > fraction::MAX_PRECISION {
            return Err(ConfigError::value(
                "fraction_precision",
                NumericError::TooLarge {
                    max: fraction::MAX_PRECISION.into(),
                },
            ));
        }
        Ok(())
    }

    pub fn push(&mut self, element: impl Into<Element>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    pub fn add_dimension(&mut self, dimension: Dimension) -> &mut Self {
        self.push(dimension)
    }

    pub fn add_callout(&mut self, center: DVec2, number: u32) -> &mut Self {
        self.push(Callout::new(center, number))
    }

    pub fn add_hatch(&mut self, hatch: HatchRegion) -> &mut Self {
        self.push(hatch)
    }

    pub fn add_centerline(&mut self, start: DVec2, end: DVec2) -> &mut Self {
        self.push(CenterLine { start, end })
    }

    pub fn add_sketch_path(&mut self, points: Path) -> &mut Self {
        self.push(SketchPath { points })
    }

    pub fn add_text_path(&mut self, points: Path) -> &mut Self {
        self.push(TextPath { points })
    }

    pub fn add_label(
        &mut self,
        text: impl Into<String>,
        position: DVec2,
        style: LabelStyle,
    ) -> &mut Self {
        self.push(Label {
            text: text.into(),
            position,
            style,
        })
    }

    /// Wobble every primitive of a projected sketch and add the results.
    pub fn add_sketch(&mut self, wabi: &WabiSketch, sketch: &Sketch) -> &mut Self {
        for points in wabi.sketch(sketch) {
            self.add_sketch_path(points);
        }
        self
    }

    /// Letter `text` starting at `(x, y)` and add its strokes.
    pub fn add_text(&mut self, renderer: &HandTextRenderer, text: &str, x: f64, y: f64) -> &mut Self {
        for points in renderer.render_text(text, x, y) {
            self.add_text_path(points);
        }
        self
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Elements on one layer, in insertion order.
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.layer() == layer)
    }

    pub fn dimensions(&self) -> impl Iterator<Item = &Dimension> {
        self.elements.iter().filter_map(|e| match e {
            Element::Dimension(d) => Some(d),
            _ => None,
        })
    }

    /// Label text for a dimension as it will be rendered.
    pub fn dimension_label(&self, dimension: &Dimension) -> Option<String> {
        dimension.label_text(self.units_per_inch, self.fraction_precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn defaults() {
        let d = Drawing::default();
        assert_eq!(d.width, 500.0);
        assert_eq!(d.height, 380.0);
        assert_eq!(d.background.to_string(), "#f5f0e8");
        assert!(d.elements().is_empty());
    }

    #[test]
    fn builders_chain_in_order() {
        let mut d = Drawing::new(200.0, 100.0);
        d.add_centerline(DVec2::ZERO, dvec2(10.0, 0.0))
            .add_callout(dvec2(5.0, 5.0), 1)
            .add_label("NOTE", dvec2(1.0, 1.0), LabelStyle::Note);
        assert_eq!(d.elements().len(), 3);
        assert!(matches!(d.elements()[0], Element::CenterLine(_)));
        assert_eq!(d.layer(Layer::Callout).count(), 1);
    }

    #[test]
    fn measured_label_uses_units() {
        let mut d = Drawing {
            units_per_inch: 16.0,
            ..Default::default()
        };
        d.add_dimension(Dimension::new(
            DVec2::ZERO,
            dvec2(28.0, 0.0),
            DimensionLabel::Measured,
        ));
        let dim = d.dimensions().next().unwrap();
        assert_eq!(d.dimension_label(dim).as_deref(), Some("1 3/4\""));
    }

    #[test]
    fn json_round_trip_keeps_elements() {
        let mut d = Drawing::default();
        d.add_hatch(HatchRegion::new(dvec2(1.0, 2.0), 30.0, 40.0));
        let back = Drawing::from_json(&d.to_json().unwrap()).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn malformed_json_points_at_error() {
        let src = "{\n  \"width\": \"wide\"\n}";
        let err = Drawing::from_json(src).unwrap_err();
        let SceneError::Malformed { span, .. } = err else {
            panic!("expected malformed scene")
        };
        assert!(span.offset() > 2, "{span:?}");
    }

    #[test]
    fn fraction_precision_is_bounded() {
        let err = Drawing::from_json(r#"{"fraction_precision": 4294967295}"#).unwrap_err();
        assert!(err.to_string().contains("fraction_precision"), "{err}");
        assert!(Drawing::from_json(r#"{"fraction_precision": 256}"#).is_ok());
    }

    #[test]
    fn bad_units_are_rejected() {
        let err = Drawing::from_json(r#"{"units_per_inch": 0}"#).unwrap_err();
        assert!(matches!(err, SceneError::Config(_)), "{err}");
    }
}
