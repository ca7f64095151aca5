//! SVG rendering for drawings
//!
//! This module is organized into submodules:
//! - `context`: RenderContext for per-document state (clip ids, number format)
//! - `shapes`: the `RenderElement` trait and one impl per element type
//! - `svg`: a small SVG DOM and its serializer

pub mod context;
pub mod shapes;
pub mod svg;

pub use context::RenderContext;
pub use shapes::RenderElement;

use serde::{Deserialize, Serialize};

use crate::drawing::Drawing;
use crate::errors::RenderError;
use svg::{SvgNode, Tag, fmt_trim, write_document};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Decimal places for coordinates
    pub precision: usize,
    /// Prefix the document with `<?xml ...?>`
    pub xml_declaration: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            precision: 2,
            xml_declaration: false,
        }
    }
}

/// Render a drawing to an SVG string with default options.
pub fn render_to_svg(drawing: &Drawing) -> Result<String, RenderError> {
    render_with_options(drawing, &RenderOptions::default())
}

/// Render a drawing to an SVG string.
///
/// The whole drawing is validated before any output is produced, so an
/// error never leaves a partial document behind.
pub fn render_with_options(
    drawing: &Drawing,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let root = render_document(drawing, options)?;
    Ok(write_document(&root, options.xml_declaration))
}

/// Build the document tree without serializing it.
pub fn render_document(drawing: &Drawing, options: &RenderOptions) -> Result<Tag, RenderError> {
    let (width, height) = (drawing.width, drawing.height);
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(RenderError::InvalidCanvas { width, height });
    }
    drawing.validate()?;
    for (index, element) in drawing.elements.iter().enumerate() {
        element.validate(index)?;
    }

    crate::log::debug!(
        width,
        height,
        elements = drawing.elements.len(),
        "rendering drawing"
    );

    let mut ctx = RenderContext::new(drawing.palette.clone(), options);
    ctx.units_per_inch = drawing.units_per_inch;
    ctx.fraction_precision = drawing.fraction_precision;

    let (w, h) = (fmt_trim(width), fmt_trim(height));
    let background = Tag::new("rect")
        .attr("width", "100%")
        .attr("height", "100%")
        .attr("fill", drawing.background);

    let mut nodes: Vec<SvgNode> = vec![background.into()];
    for element in shapes::paint_order(&drawing.elements) {
        nodes.extend(element.render(&mut ctx));
    }

    crate::log::debug!(nodes = nodes.len(), "rendered");

    Ok(Tag::new("svg")
        .attr("xmlns", SVG_NS)
        .attr("viewBox", format!("0 0 {w} {h}"))
        .attr("width", w)
        .attr("height", h)
        .children(nodes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec2, dvec2};

    #[test]
    fn empty_drawing() {
        let svg = render_to_svg(&Drawing::new(100.0, 50.0)).unwrap();
        assert_eq!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 50\" width=\"100\" height=\"50\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"#f5f0e8\" />\n\
             </svg>"
        );
    }

    #[test]
    fn xml_declaration() {
        let options = RenderOptions {
            xml_declaration: true,
            ..Default::default()
        };
        let svg = render_with_options(&Drawing::default(), &options).unwrap();
        assert!(svg.starts_with("<?xml version=\"1.0\""));
    }

    #[test]
    fn invalid_canvas() {
        let err = render_to_svg(&Drawing::new(0.0, 10.0)).unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidCanvas {
                width: 0.0,
                height: 10.0
            }
        );
    }

    #[test]
    fn error_names_offending_element() {
        let mut d = Drawing::default();
        d.add_centerline(DVec2::ZERO, dvec2(1.0, 1.0))
            .add_callout(dvec2(f64::INFINITY, 0.0), 2);
        let err = render_to_svg(&d).unwrap_err();
        assert_eq!(
            err,
            RenderError::NonFinite {
                element: "callout",
                index: 1
            }
        );
    }

    #[test]
    fn layers_override_insertion_order() {
        let mut d = Drawing::default();
        d.add_label("A", dvec2(1.0, 1.0), Default::default())
            .add_sketch_path(vec![DVec2::ZERO, dvec2(5.0, 5.0)]);
        let svg = render_to_svg(&d).unwrap();
        let path = svg.find("<path").unwrap();
        let text = svg.find("<text").unwrap();
        assert!(path < text);
    }
}
