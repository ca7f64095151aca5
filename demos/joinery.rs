//! Draws a small bookshelf side panel with a through mortise.
//!
//! Writes SVG to stdout, or to the path given as the first argument.
//! Set `RUST_LOG=kintsugi=debug` (with `--features tracing`) to see what
//! the renderer is doing.

use glam::{DVec2, DVec3, dvec2, dvec3};
use kintsugi::{
    CadEngine, Dimension, DimensionLabel, Drawing, HandTextRenderer, HatchRegion, LabelStyle,
    Side, SketchConfig, TextConfig, View, WabiSketch, Wireframe, WireframeEngine,
    render_to_svg,
};
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

/// Drawing units per inch on the page
const SCALE: f64 = 12.0;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // 30" x 11.25" x 0.75" panel, with a 4" x 0.75" mortise for the shelf tenon
    let panel = Wireframe::cuboid(DVec3::ZERO, dvec3(11.25, 0.75, 30.0));
    let mortise = Wireframe::cuboid(dvec3(3.625, 0.0, 14.0), dvec3(7.625, 0.75, 14.75));
    let peg = Wireframe::new().circle(dvec3(5.625, 0.0, 16.5), DVec3::Y, 0.25);

    let engine = WireframeEngine::default();
    let origin = dvec2(180.0, 370.0);
    let place = |p: DVec2| origin + DVec2::new(p.x, -p.y) * SCALE;

    let wabi = WabiSketch::try_new(SketchConfig::default().with_seed(7))?;
    let lettering = HandTextRenderer::try_new(TextConfig {
        size: 10.0,
        ..Default::default()
    })?;

    let mut drawing = Drawing {
        width: 500.0,
        height: 420.0,
        units_per_inch: SCALE,
        ..Default::default()
    };

    for part in [&panel, &mortise, &peg] {
        let sketch = engine.project(part, View::Front)?;
        drawing.add_sketch(&wabi, &sketch.transform(place, SCALE));
    }

    let (bl, br) = (place(dvec2(0.0, 0.0)), place(dvec2(11.25, 0.0)));
    let tl = place(dvec2(0.0, 30.0));
    drawing
        .add_dimension(
            Dimension::new(bl, br, DimensionLabel::Measured)
                .with_side(Side::Below)
                .with_offset(18.0),
        )
        .add_dimension(
            Dimension::new(bl, tl, DimensionLabel::Measured)
                .with_side(Side::Left)
                .with_offset(24.0),
        )
        .add_dimension(Dimension::new(
            place(dvec2(3.625, 14.75)),
            place(dvec2(7.625, 14.75)),
            DimensionLabel::Measured,
        ))
        .add_hatch(
            HatchRegion::new(place(dvec2(3.625, 14.75)), 4.0 * SCALE, 0.75 * SCALE)
                .with_spacing(4.0),
        )
        .add_centerline(place(dvec2(5.625, -1.0)), place(dvec2(5.625, 31.0)))
        .add_callout(place(dvec2(9.5, 15.5)), 1)
        .add_callout(place(dvec2(7.0, 17.5)), 2)
        .add_label("1 THROUGH MORTISE", dvec2(340.0, 60.0), LabelStyle::Note)
        .add_label("2 1/2\" OAK PEG", dvec2(340.0, 76.0), LabelStyle::Note)
        .add_text(&lettering, "SIDE PANEL", 340.0, 20.0);

    let svg = render_to_svg(&drawing)?;
    match std::env::args().nth(1) {
        Some(path) => std::fs::write(&path, svg).into_diagnostic()?,
        None => println!("{svg}"),
    }
    Ok(())
}
