//! Drawing elements: the things a [`Drawing`](super::Drawing) is made of.

use enum_dispatch::enum_dispatch;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::fraction::to_shop_fraction;
use crate::render::RenderElement;
use crate::types::Path;

/// Paint order. Lower layers are drawn first (behind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Sketch,
    Lettering,
    Hatch,
    CenterLine,
    Dimension,
    Callout,
    Label,
}

/// Which side of the measured edge a dimension line sits on.
///
/// `Above`/`Left` offset along the left-hand normal of the edge direction,
/// `Below`/`Right` along the right-hand normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    #[default]
    Above,
    Below,
}

impl Side {
    pub fn is_flipped(self) -> bool {
        matches!(self, Side::Below | Side::Right)
    }
}

/// What a dimension line is labelled with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionLabel {
    #[default]
    None,
    /// Literal text
    Text(String),
    /// Shop fraction computed from the exact length
    Measured,
}

impl From<&str> for DimensionLabel {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            DimensionLabel::None
        } else {
            DimensionLabel::Text(s.to_string())
        }
    }
}

impl From<String> for DimensionLabel {
    fn from(s: String) -> Self {
        if s.is_empty() {
            DimensionLabel::None
        } else {
            DimensionLabel::Text(s)
        }
    }
}

/// A linear dimension with arrows and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub start: DVec2,
    pub end: DVec2,
    #[serde(default)]
    pub label: DimensionLabel,
    /// Distance from the measured edge to the dimension line
    #[serde(default = "Dimension::default_offset")]
    pub offset: f64,
    #[serde(default)]
    pub side: Side,
}

impl Dimension {
    pub const DEFAULT_OFFSET: f64 = 12.0;

    fn default_offset() -> f64 {
        Self::DEFAULT_OFFSET
    }

    pub fn new(start: DVec2, end: DVec2, label: impl Into<DimensionLabel>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            offset: Self::DEFAULT_OFFSET,
            side: Side::default(),
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Exact measured length in drawing units.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Label text as rendered. Measured labels come from the exact length,
    /// never from a wobbled path.
    pub fn label_text(&self, units_per_inch: f64, precision: u32) -> Option<String> {
        match &self.label {
            DimensionLabel::None => None,
            DimensionLabel::Text(s) if s.is_empty() => None,
            DimensionLabel::Text(s) => Some(s.clone()),
            DimensionLabel::Measured => Some(to_shop_fraction(
                self.length() / units_per_inch,
                precision,
            )),
        }
    }
}

/// A numbered callout bubble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callout {
    pub center: DVec2,
    pub number: u32,
    #[serde(default = "Callout::default_radius")]
    pub radius: f64,
}

impl Callout {
    pub const DEFAULT_RADIUS: f64 = 10.0;

    fn default_radius() -> f64 {
        Self::DEFAULT_RADIUS
    }

    pub fn new(center: DVec2, number: u32) -> Self {
        Self {
            center,
            number,
            radius: Self::DEFAULT_RADIUS,
        }
    }

    /// Circled digit for 1..=9, decimal text otherwise.
    pub fn glyph(&self) -> String {
        const CIRCLED: [char; 9] = ['①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨'];
        match self.number {
            n @ 1..=9 => CIRCLED[n as usize - 1].to_string(),
            n => n.to_string(),
        }
    }
}

/// A rectangular hatching region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HatchRegion {
    /// Top-left corner
    pub origin: DVec2,
    pub width: f64,
    pub height: f64,
    #[serde(default = "HatchRegion::default_angle")]
    pub angle_deg: f64,
    #[serde(default = "HatchRegion::default_spacing")]
    pub spacing: f64,
}

impl HatchRegion {
    pub const DEFAULT_ANGLE: f64 = 45.0;
    pub const DEFAULT_SPACING: f64 = 6.0;

    fn default_angle() -> f64 {
        Self::DEFAULT_ANGLE
    }

    fn default_spacing() -> f64 {
        Self::DEFAULT_SPACING
    }

    pub fn new(origin: DVec2, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
            angle_deg: Self::DEFAULT_ANGLE,
            spacing: Self::DEFAULT_SPACING,
        }
    }

    pub fn with_angle(mut self, angle_deg: f64) -> Self {
        self.angle_deg = angle_deg;
        self
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn center(&self) -> DVec2 {
        self.origin + DVec2::new(self.width, self.height) / 2.0
    }
}

/// A dash-dot center line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterLine {
    pub start: DVec2,
    pub end: DVec2,
}

/// How a free text label is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Amber, like dimension text
    #[default]
    Dimension,
    /// Brown, for notes and titles
    Note,
}

/// A plain text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub position: DVec2,
    #[serde(default)]
    pub style: LabelStyle,
}

/// A wobbled outline path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SketchPath {
    pub points: Path,
}

/// A lettering stroke
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextPath {
    pub points: Path,
}

/// Any drawable element
#[enum_dispatch(RenderElement)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    SketchPath(SketchPath),
    TextPath(TextPath),
    Hatch(HatchRegion),
    CenterLine(CenterLine),
    Dimension(Dimension),
    Callout(Callout),
    Label(Label),
}
