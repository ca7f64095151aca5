//! CAD engine abstraction.
//!
//! Drawings consume already-modelled geometry. A [`CadEngine`] is whatever
//! owns the 3D parts (a B-rep kernel, a mesh library, a file importer) and
//! can flatten them into a 2D [`Sketch`] for one orthographic view.
//! [`WireframeEngine`] is a self-contained implementation over plain edge
//! lists.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use glam::{DVec2, DVec3};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Orthographic view direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Looking along +Y onto the XZ plane
    #[default]
    Front,
    /// Looking along -X onto the YZ plane
    Side,
    /// Looking down -Z onto the XY plane
    Top,
}

impl View {
    /// Unit vector pointing from the viewer into the scene.
    pub fn direction(self) -> DVec3 {
        match self {
            View::Front => DVec3::Y,
            View::Side => DVec3::NEG_X,
            View::Top => DVec3::NEG_Z,
        }
    }

    /// Drop the depth axis.
    pub fn project(self, p: DVec3) -> DVec2 {
        match self {
            View::Front => DVec2::new(p.x, p.z),
            View::Side => DVec2::new(p.y, p.z),
            View::Top => DVec2::new(p.x, p.y),
        }
    }

    /// Parse a view name, falling back to [`View::Front`] for anything unknown.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for View {
    type Err = CadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "front" => Ok(View::Front),
            "side" => Ok(View::Side),
            "top" => Ok(View::Top),
            other => Err(CadError::UnknownView(other.to_string())),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            View::Front => "front",
            View::Side => "side",
            View::Top => "top",
        })
    }
}

/// Error type for CAD engine operations
#[derive(Debug, Clone, Error, Diagnostic, PartialEq)]
pub enum CadError {
    #[error("Unknown view: {0}")]
    #[diagnostic(code(kintsugi::cad::unknown_view), help("expected front, side or top"))]
    UnknownView(String),

    #[error("Projection failed: {0}")]
    #[diagnostic(code(kintsugi::cad::projection_failed))]
    ProjectionFailed(String),

    #[error("Invalid geometry: {0}")]
    #[diagnostic(code(kintsugi::cad::invalid_geometry))]
    InvalidGeometry(String),
}

/// Result type for CAD operations
pub type CadResult<T> = Result<T, CadError>;

/// A straight 2D segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSeg {
    pub start: DVec2,
    pub end: DVec2,
}

impl LineSeg {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A circular arc from `start` to `end` around `center`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSeg {
    pub start: DVec2,
    pub end: DVec2,
    pub center: DVec2,
    pub radius: f64,
}

impl ArcSeg {
    /// Signed angle from `start` to `end`, taken as the raw difference of
    /// their `atan2` angles. This is the sweep the sketcher draws.
    pub fn sweep(&self) -> f64 {
        let (s, e) = (self.start - self.center, self.end - self.center);
        e.y.atan2(e.x) - s.y.atan2(s.x)
    }
}

/// A full circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleSeg {
    pub center: DVec2,
    pub radius: f64,
}

/// 2D geometry produced by projecting a part
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sketch {
    pub lines: Vec<LineSeg>,
    pub arcs: Vec<ArcSeg>,
    pub circles: Vec<CircleSeg>,
}

impl Sketch {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.arcs.is_empty() && self.circles.is_empty()
    }

    /// Total number of primitives
    pub fn len(&self) -> usize {
        self.lines.len() + self.arcs.len() + self.circles.len()
    }

    /// Map every coordinate through `f` (radii are scaled by `scale`).
    ///
    /// Used to place model-space projections onto the page, e.g.
    /// `sketch.transform(|p| origin + DVec2::new(p.x, -p.y) * 20.0, 20.0)`.
    pub fn transform(&self, f: impl Fn(DVec2) -> DVec2, scale: f64) -> Sketch {
        Sketch {
            lines: self
                .lines
                .iter()
                .map(|l| LineSeg::new(f(l.start), f(l.end)))
                .collect(),
            arcs: self
                .arcs
                .iter()
                .map(|a| ArcSeg {
                    start: f(a.start),
                    end: f(a.end),
                    center: f(a.center),
                    radius: a.radius * scale.abs(),
                })
                .collect(),
            circles: self
                .circles
                .iter()
                .map(|c| CircleSeg {
                    center: f(c.center),
                    radius: c.radius * scale.abs(),
                })
                .collect(),
        }
    }
}

/// Common interface for CAD engines
pub trait CadEngine {
    /// The engine's 3D part handle
    type Part;
    /// Edge handle returned by [`CadEngine::edges`]
    type Edge;
    /// Face handle returned by [`CadEngine::faces`]
    type Face;

    /// Project a 3D part onto the plane of `view`.
    fn project(&self, part: &Self::Part, view: View) -> CadResult<Sketch>;

    /// Extract edges from a 3D part.
    fn edges(&self, part: &Self::Part) -> Vec<Self::Edge>;

    /// Extract faces from a 3D part.
    fn faces(&self, part: &Self::Part) -> Vec<Self::Face>;
}

// ============================================================================
// Wireframe engine
// ============================================================================

/// A 3D edge of a wireframe part
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Edge3 {
    Line {
        start: DVec3,
        end: DVec3,
    },
    /// Counter-clockwise about `normal` from `start` to `end`
    Arc {
        center: DVec3,
        normal: DVec3,
        start: DVec3,
        end: DVec3,
    },
    Circle {
        center: DVec3,
        normal: DVec3,
        radius: f64,
    },
}

/// A planar polygonal face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face3 {
    pub outline: Vec<DVec3>,
}

impl Face3 {
    /// Newell normal, unnormalized length = 2 * area.
    fn newell(&self) -> DVec3 {
        let n = self.outline.len();
        (0..n).fold(DVec3::ZERO, |acc, i| {
            let a = self.outline[i];
            let b = self.outline[(i + 1) % n];
            acc + DVec3::new(
                (a.y - b.y) * (a.z + b.z),
                (a.z - b.z) * (a.x + b.x),
                (a.x - b.x) * (a.y + b.y),
            )
        })
    }

    pub fn normal(&self) -> DVec3 {
        self.newell().normalize_or_zero()
    }

    pub fn area(&self) -> f64 {
        self.newell().length() * 0.5
    }
}

/// A part described only by its edges (and optionally faces)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wireframe {
    pub edges: Vec<Edge3>,
    pub faces: Vec<Face3>,
}

impl Wireframe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, start: DVec3, end: DVec3) -> Self {
        self.edges.push(Edge3::Line { start, end });
        self
    }

    pub fn circle(mut self, center: DVec3, normal: DVec3, radius: f64) -> Self {
        self.edges.push(Edge3::Circle {
            center,
            normal,
            radius,
        });
        self
    }

    /// Axis-aligned box: twelve edges and six faces.
    pub fn cuboid(min: DVec3, max: DVec3) -> Self {
        let c = |x: bool, y: bool, z: bool| {
            DVec3::new(
                if x { max.x } else { min.x },
                if y { max.y } else { min.y },
                if z { max.z } else { min.z },
            )
        };
        let corners = [
            c(false, false, false),
            c(true, false, false),
            c(true, true, false),
            c(false, true, false),
            c(false, false, true),
            c(true, false, true),
            c(true, true, true),
            c(false, true, true),
        ];
        const EDGES: [(usize, usize); 12] = [
            (0, 1), (1, 2), (2, 3), (3, 0),
            (4, 5), (5, 6), (6, 7), (7, 4),
            (0, 4), (1, 5), (2, 6), (3, 7),
        ];
        const FACES: [[usize; 4]; 6] = [
            [0, 3, 2, 1],
            [4, 5, 6, 7],
            [0, 1, 5, 4],
            [2, 3, 7, 6],
            [1, 2, 6, 5],
            [0, 4, 7, 3],
        ];
        Wireframe {
            edges: EDGES
                .iter()
                .map(|&(a, b)| Edge3::Line {
                    start: corners[a],
                    end: corners[b],
                })
                .collect(),
            faces: FACES
                .iter()
                .map(|f| Face3 {
                    outline: f.iter().map(|&i| corners[i]).collect(),
                })
                .collect(),
        }
    }
}

/// Orthographic projection of [`Wireframe`] parts
#[derive(Debug, Clone, Copy)]
pub struct WireframeEngine {
    /// Chord count for tessellating circles seen at an angle
    pub segments: usize,
    /// Lengths below this are treated as degenerate
    pub tolerance: f64,
}

impl Default for WireframeEngine {
    fn default() -> Self {
        Self {
            segments: 48,
            tolerance: 1e-9,
        }
    }
}

impl WireframeEngine {
    /// Project a point, failing on coordinates that are not finite.
    fn place(view: View, p: DVec3) -> CadResult<DVec2> {
        let q = view.project(p);
        if q.is_finite() {
            Ok(q)
        } else {
            Err(CadError::ProjectionFailed(format!(
                "point {p} has no finite {view} projection"
            )))
        }
    }

    fn project_line(&self, sketch: &mut Sketch, view: View, a: DVec3, b: DVec3) -> CadResult<()> {
        let (pa, pb) = (Self::place(view, a)?, Self::place(view, b)?);
        if pa.distance(pb) > self.tolerance {
            sketch.lines.push(LineSeg::new(pa, pb));
        }
        Ok(())
    }

    /// In-plane basis (u, v) for a circle with the given unit normal.
    fn basis(normal: DVec3) -> (DVec3, DVec3) {
        let u = normal.any_orthonormal_vector();
        (u, normal.cross(u))
    }

    fn project_edge(&self, sketch: &mut Sketch, view: View, edge: &Edge3) -> CadResult<()> {
        let dir = view.direction();
        match *edge {
            Edge3::Line { start, end } => self.project_line(sketch, view, start, end)?,
            Edge3::Circle {
                center,
                normal,
                radius,
            } => {
                let n = normal.try_normalize().ok_or_else(|| {
                    CadError::InvalidGeometry("circle normal has zero length".into())
                })?;
                let facing = n.dot(dir).abs();
                if (facing - 1.0).abs() <= 1e-9 {
                    sketch.circles.push(CircleSeg {
                        center: Self::place(view, center)?,
                        radius,
                    });
                } else if facing <= 1e-9 {
                    // Edge-on: the circle collapses to its diameter across the view.
                    let across = n.cross(dir).normalize_or_zero() * radius;
                    self.project_line(sketch, view, center - across, center + across)?;
                } else {
                    let (u, v) = Self::basis(n);
                    let pts: Vec<DVec3> = (0..=self.segments)
                        .map(|i| {
                            let th = TAU * i as f64 / self.segments as f64;
                            center + (u * th.cos() + v * th.sin()) * radius
                        })
                        .collect();
                    for w in pts.windows(2) {
                        self.project_line(sketch, view, w[0], w[1])?;
                    }
                }
            }
            Edge3::Arc {
                center,
                normal,
                start,
                end,
            } => {
                let n = normal.try_normalize().ok_or_else(|| {
                    CadError::InvalidGeometry("arc normal has zero length".into())
                })?;
                let radius = start.distance(center);
                if (end.distance(center) - radius).abs() > 1e-6 * radius.max(1.0) {
                    return Err(CadError::InvalidGeometry(
                        "arc endpoints are not equidistant from the center".into(),
                    ));
                }
                let u = (start - center).normalize_or_zero();
                let v = n.cross(u);
                let rel = end - center;
                let mut sweep = rel.dot(v).atan2(rel.dot(u));
                if sweep <= 0.0 {
                    sweep += TAU;
                }

                if (n.dot(dir).abs() - 1.0).abs() <= 1e-9 {
                    let arc = ArcSeg {
                        start: Self::place(view, start)?,
                        end: Self::place(view, end)?,
                        center: Self::place(view, center)?,
                        radius,
                    };
                    // Every view looks into the page, so a normal pointing
                    // back at the viewer keeps counter-clockwise on the page.
                    let signed = if n.dot(dir) < 0.0 { sweep } else { -sweep };
                    if (arc.sweep() - signed).abs() <= 1e-6 {
                        sketch.arcs.push(arc);
                        return Ok(());
                    }
                    crate::log::trace!(sweep = signed, "arc crosses the atan2 cut, tessellating");
                }

                let steps = ((self.segments as f64 * sweep / TAU).ceil() as usize).max(1);
                let pts: Vec<DVec3> = (0..=steps)
                    .map(|i| {
                        let th = sweep * i as f64 / steps as f64;
                        center + (u * th.cos() + v * th.sin()) * radius
                    })
                    .collect();
                for w in pts.windows(2) {
                    self.project_line(sketch, view, w[0], w[1])?;
                }
            }
        }
        Ok(())
    }
}

impl CadEngine for WireframeEngine {
    type Part = Wireframe;
    type Edge = Edge3;
    type Face = Face3;

    fn project(&self, part: &Wireframe, view: View) -> CadResult<Sketch> {
        let mut sketch = Sketch::empty();
        for edge in &part.edges {
            self.project_edge(&mut sketch, view, edge)?;
        }
        crate::log::debug!(
            %view,
            lines = sketch.lines.len(),
            arcs = sketch.arcs.len(),
            circles = sketch.circles.len(),
            "projected wireframe"
        );
        Ok(sketch)
    }

    fn edges(&self, part: &Wireframe) -> Vec<Edge3> {
        part.edges.clone()
    }

    fn faces(&self, part: &Wireframe) -> Vec<Face3> {
        part.faces.clone()
    }
}
