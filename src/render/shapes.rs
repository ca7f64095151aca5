//! Per-element SVG rendering
//!
//! Each element type knows how to:
//! - Report its paint layer
//! - Check its own geometry before anything is written
//! - Render itself to SVG nodes

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use crate::drawing::elements::{
    Callout, CenterLine, Dimension, Element, HatchRegion, Label, LabelStyle,
    Layer, SketchPath, TextPath,
};
use crate::errors::RenderError;
use crate::types::{Color, StrokeWeight, is_finite_point};

use super::context::RenderContext;
use super::svg::{SvgNode, Tag, fmt_trim};

/// Gap between the measured geometry and the start of an extension line
const EXTENSION_GAP: f64 = 2.0;
const ARROW_SIZE: f64 = 6.0;
/// Distance from the dimension line to the label center
const LABEL_OFFSET: f64 = 8.0;
const LABEL_HEIGHT: f64 = 14.0;
const LABEL_MIN_WIDTH: f64 = 36.0;
const LABEL_FONT_SIZE: f64 = 10.0;
/// Most lines one hatch region may draw
pub const MAX_HATCH_LINES: usize = 2_000;

/// Half diagonal of a hatch region and the line count either side of its center.
fn hatch_extent(hatch: &HatchRegion) -> (f64, f64) {
    let half = hatch.width.hypot(hatch.height) / 2.0;
    (half, (half / hatch.spacing).ceil())
}

/// Common behavior for all drawing elements
///
/// Signatures use full paths: the dispatch impl for [`Element`] may be
/// expanded next to either the trait or the enum.
#[enum_dispatch]
pub trait RenderElement {
    /// Paint layer; lower layers are emitted first
    fn layer(&self) -> crate::drawing::elements::Layer;

    /// Short name used in error messages
    fn kind(&self) -> &'static str;

    /// Reject geometry that cannot be written out
    fn validate(&self, index: usize) -> Result<(), crate::errors::RenderError>;

    /// Render to zero or more top-level nodes
    fn render(&self, ctx: &mut crate::render::RenderContext) -> Vec<crate::render::svg::SvgNode>;
}

/// Elements in paint order. The sort is stable, so insertion order is kept
/// within a layer.
pub fn paint_order(elements: &[Element]) -> Vec<&Element> {
    let mut ordered: Vec<&Element> = elements.iter().collect();
    ordered.sort_by_key(|e| e.layer());
    ordered
}

fn check_points<'a>(
    kind: &'static str,
    index: usize,
    points: impl IntoIterator<Item = &'a DVec2>,
) -> Result<(), RenderError> {
    if points.into_iter().all(|p| is_finite_point(*p)) {
        Ok(())
    } else {
        Err(RenderError::NonFinite {
            element: kind,
            index,
        })
    }
}

fn check_values(
    kind: &'static str,
    index: usize,
    values: &[f64],
) -> Result<(), RenderError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(RenderError::NonFinite {
            element: kind,
            index,
        })
    }
}

fn stroked_path(ctx: &RenderContext, points: &[DVec2], color: Color, weight: StrokeWeight) -> Option<Tag> {
    let d = ctx.path_data(points)?;
    Some(
        Tag::new("path")
            .attr("d", d)
            .attr("fill", "none")
            .attr("stroke", color)
            .attr("stroke-width", weight)
            .attr("stroke-linecap", "round"),
    )
}

fn line(ctx: &RenderContext, a: DVec2, b: DVec2, color: Color, weight: StrokeWeight) -> Tag {
    Tag::new("line")
        .attr("x1", ctx.num(a.x))
        .attr("y1", ctx.num(a.y))
        .attr("x2", ctx.num(b.x))
        .attr("y2", ctx.num(b.y))
        .attr("stroke", color)
        .attr("stroke-width", weight)
}

/// Filled arrowhead with its tip at `tip`, pointing along `dir` (unit).
fn arrowhead(ctx: &RenderContext, tip: DVec2, dir: DVec2, size: f64) -> Tag {
    let base = tip - dir * size;
    let side = dvec2(dir.y, -dir.x) * (size * 0.4);
    let points = [tip, base + side, base - side]
        .iter()
        .map(|p| ctx.point(*p))
        .collect::<Vec<_>>()
        .join(" ");
    Tag::new("polygon")
        .attr("points", points)
        .attr("fill", ctx.palette.amber)
}

fn serif_text(ctx: &RenderContext, at: DVec2, size: f64, color: Color, centered: bool) -> Tag {
    let mut tag = Tag::new("text")
        .attr("x", ctx.num(at.x))
        .attr("y", ctx.num(at.y));
    if centered {
        tag = tag.attr("text-anchor", "middle");
    }
    tag.attr("font-family", "serif")
        .attr("font-size", fmt_trim(size))
        .attr("fill", color)
}

impl RenderElement for SketchPath {
    fn layer(&self) -> Layer {
        Layer::Sketch
    }

    fn kind(&self) -> &'static str {
        "sketch path"
    }

    fn validate(&self, index: usize) -> Result<(), RenderError> {
        check_points(self.kind(), index, &self.points)
    }

    fn render(&self, ctx: &mut RenderContext) -> Vec<SvgNode> {
        stroked_path(ctx, &self.points, ctx.palette.ink, StrokeWeight::Heavy)
            .map(SvgNode::from)
            .into_iter()
            .collect()
    }
}

impl RenderElement for TextPath {
    fn layer(&self) -> Layer {
        Layer::Lettering
    }

    fn kind(&self) -> &'static str {
        "text path"
    }

    fn validate(&self, index: usize) -> Result<(), RenderError> {
        check_points(self.kind(), index, &self.points)
    }

    fn render(&self, ctx: &mut RenderContext) -> Vec<SvgNode> {
        stroked_path(ctx, &self.points, ctx.palette.brown, StrokeWeight::Medium)
            .map(|tag| SvgNode::from(tag.attr("stroke-linejoin", "round")))
            .into_iter()
            .collect()
    }
}

impl RenderElement for HatchRegion {
    fn layer(&self) -> Layer {
        Layer::Hatch
    }

    fn kind(&self) -> &'static str {
        "hatch"
    }

    fn validate(&self, index: usize) -> Result<(), RenderError> {
        check_points(self.kind(), index, [&self.origin])?;
        check_values(
            self.kind(),
            index,
            &[self.width, self.height, self.angle_deg],
        )?;
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(RenderError::HatchSpacing {
                index,
                spacing: self.spacing,
            });
        }
        let (_, steps) = hatch_extent(self);
        if 2.0 * steps + 1.0 > MAX_HATCH_LINES as f64 {
            return Err(RenderError::HatchTooDense {
                index,
                spacing: self.spacing,
            });
        }
        Ok(())
    }

    fn render(&self, ctx: &mut RenderContext) -> Vec<SvgNode> {
        let clip_id = ctx.next_clip_id();
        let clip = Tag::new("defs").child(
            Tag::new("clipPath").attr("id", &clip_id).child(
                Tag::new("rect")
                    .attr("x", ctx.num(self.origin.x))
                    .attr("y", ctx.num(self.origin.y))
                    .attr("width", ctx.num(self.width))
                    .attr("height", ctx.num(self.height)),
            ),
        );

        // Lines run along `angle_deg` and are stepped along its normal,
        // symmetric about the region center.
        let (sin, cos) = self.angle_deg.to_radians().sin_cos();
        let along = dvec2(cos, sin);
        let across = dvec2(-sin, cos);
        let (half, steps) = hatch_extent(self);
        let steps = steps as i64;
        let center = self.center();

        let lines: Vec<SvgNode> = (-steps..=steps)
            .map(|k| {
                let mid = center + across * (k as f64 * self.spacing);
                let hatch = ctx.palette.hatch;
                SvgNode::from(line(
                    ctx,
                    mid - along * half,
                    mid + along * half,
                    hatch,
                    StrokeWeight::Light,
                ))
            })
            .collect();
        let group = Tag::new("g")
            .attr("clip-path", format!("url(#{clip_id})"))
            .attr("opacity", "0.5")
            .children(lines);

        vec![clip.into(), group.into()]
    }
}

impl RenderElement for CenterLine {
    fn layer(&self) -> Layer {
        Layer::CenterLine
    }

    fn kind(&self) -> &'static str {
        "center line"
    }

    fn validate(&self, index: usize) -> Result<(), RenderError> {
        check_points(self.kind(), index, [&self.start, &self.end])
    }

    fn render(&self, ctx: &mut RenderContext) -> Vec<SvgNode> {
        let tag = line(ctx, self.start, self.end, ctx.palette.amber, StrokeWeight::Light)
            .attr("stroke-dasharray", "8,3,2,3")
            .attr("opacity", "0.7");
        vec![tag.into()]
    }
}

impl RenderElement for Dimension {
    fn layer(&self) -> Layer {
        Layer::Dimension
    }

    fn kind(&self) -> &'static str {
        "dimension"
    }

    fn validate(&self, index: usize) -> Result<(), RenderError> {
        check_points(self.kind(), index, [&self.start, &self.end])?;
        check_values(self.kind(), index, &[self.offset])
    }

    fn render(&self, ctx: &mut RenderContext) -> Vec<SvgNode> {
        let delta = self.end - self.start;
        let length = delta.length();
        if length < 1.0 {
            crate::log::debug!(length, "skipping degenerate dimension");
            return Vec::new();
        }

        let dir = delta / length;
        let mut normal = dvec2(-dir.y, dir.x);
        if self.side.is_flipped() {
            normal = -normal;
        }

        let l1 = self.start + normal * self.offset;
        let l2 = self.end + normal * self.offset;
        let amber = ctx.palette.amber;

        let mut nodes: Vec<SvgNode> = vec![
            line(ctx, self.start + normal * EXTENSION_GAP, l1, amber, StrokeWeight::Light).into(),
            line(ctx, self.end + normal * EXTENSION_GAP, l2, amber, StrokeWeight::Light).into(),
            line(ctx, l1, l2, amber, StrokeWeight::Medium).into(),
            arrowhead(ctx, l1, -dir, ARROW_SIZE).into(),
            arrowhead(ctx, l2, dir, ARROW_SIZE).into(),
        ];

        let Some(text) = self.label_text(ctx.units_per_inch, ctx.fraction_precision) else {
            return nodes;
        };

        let at = (l1 + l2) / 2.0 + normal * LABEL_OFFSET;
        let width = LABEL_MIN_WIDTH.max(text.chars().count() as f64 * 6.0 + 6.0);
        nodes.push(
            Tag::new("rect")
                .attr("x", ctx.num(at.x - width / 2.0))
                .attr("y", ctx.num(at.y - LABEL_HEIGHT / 2.0))
                .attr("width", fmt_trim(width))
                .attr("height", fmt_trim(LABEL_HEIGHT))
                .attr("rx", "2")
                .attr("fill", ctx.palette.cream)
                .attr("opacity", "0.85")
                .into(),
        );
        nodes.push(
            serif_text(ctx, at + dvec2(0.0, 4.0), LABEL_FONT_SIZE, amber, true)
                .text(text)
                .into(),
        );
        nodes
    }
}

impl RenderElement for Callout {
    fn layer(&self) -> Layer {
        Layer::Callout
    }

    fn kind(&self) -> &'static str {
        "callout"
    }

    fn validate(&self, index: usize) -> Result<(), RenderError> {
        check_points(self.kind(), index, [&self.center])?;
        check_values(self.kind(), index, &[self.radius])
    }

    fn render(&self, ctx: &mut RenderContext) -> Vec<SvgNode> {
        let circle = Tag::new("circle")
            .attr("cx", ctx.num(self.center.x))
            .attr("cy", ctx.num(self.center.y))
            .attr("r", ctx.num(self.radius))
            .attr("fill", ctx.palette.cream)
            .attr("stroke", ctx.palette.amber)
            .attr("stroke-width", StrokeWeight::Medium);
        let text = serif_text(
            ctx,
            self.center + dvec2(0.0, 4.5),
            self.radius * 1.2,
            ctx.palette.amber,
            true,
        )
        .text(self.glyph());
        vec![circle.into(), text.into()]
    }
}

impl RenderElement for Label {
    fn layer(&self) -> Layer {
        Layer::Label
    }

    fn kind(&self) -> &'static str {
        "label"
    }

    fn validate(&self, index: usize) -> Result<(), RenderError> {
        check_points(self.kind(), index, [&self.position])
    }

    fn render(&self, ctx: &mut RenderContext) -> Vec<SvgNode> {
        let color = match self.style {
            LabelStyle::Dimension => ctx.palette.amber,
            LabelStyle::Note => ctx.palette.brown,
        };
        let tag = serif_text(ctx, self.position, LABEL_FONT_SIZE, color, false)
            .text(self.text.clone());
        vec![tag.into()]
    }
}
