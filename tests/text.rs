use approx::assert_abs_diff_eq;
use glam::dvec2;
use kintsugi::{HandTextRenderer, HersheyFont, TextConfig};

fn exact(size: f64) -> HandTextRenderer {
    HandTextRenderer::new(TextConfig {
        size,
        wobble: 0.0,
        ..Default::default()
    })
}

#[test]
fn render_text_returns_strokes() {
    let renderer = HandTextRenderer::default();
    let strokes = renderer.render_text("ABC", 0.0, 0.0);
    // A has two strokes, B and C one each
    assert_eq!(strokes.len(), 4);
    assert!(strokes.iter().all(|s| s.len() >= 2));
}

#[test]
fn lowercase_renders_as_uppercase() {
    let renderer = HandTextRenderer::default();
    assert_eq!(
        renderer.render_text("panel", 10.0, 10.0),
        renderer.render_text("PANEL", 10.0, 10.0)
    );
}

#[test]
fn characters_advance_left_to_right() {
    let renderer = exact(12.0);
    let strokes = renderer.render_text("II", 0.0, 0.0);
    // I is three strokes; the second I starts one advance to the right
    assert_eq!(strokes.len(), 6);
    assert_abs_diff_eq!(strokes[3][0].x - strokes[0][0].x, 18.0, epsilon = 1e-12);
}

#[test]
fn spaces_use_word_spacing() {
    let renderer = HandTextRenderer::new(TextConfig {
        size: 10.0,
        wobble: 0.0,
        word_spacing: 3.0,
        ..Default::default()
    });
    let strokes = renderer.render_text("- -", 0.0, 0.0);
    assert_eq!(strokes.len(), 2);
    // one advance (15) plus a space (30)
    assert_abs_diff_eq!(strokes[1][0].x - strokes[0][0].x, 45.0, epsilon = 1e-12);
    assert_abs_diff_eq!(renderer.measure("- -"), 60.0, epsilon = 1e-12);
}

#[test]
fn unknown_characters_are_skipped() {
    let renderer = HandTextRenderer::default();
    assert!(renderer.render_text("@#%", 0.0, 0.0).is_empty());
}

#[test]
fn wobble_is_bounded() {
    let wobble = 0.8;
    let jittered = HandTextRenderer::new(TextConfig {
        wobble,
        ..Default::default()
    });
    let clean = exact(12.0);
    let a = jittered.render_text("KINTSUGI 1/2\"", 5.0, 5.0);
    let b = clean.render_text("KINTSUGI 1/2\"", 5.0, 5.0);
    assert_eq!(a.len(), b.len());
    for (sa, sb) in a.iter().zip(&b) {
        for (pa, pb) in sa.iter().zip(sb) {
            assert!((pa.x - pb.x).abs() <= wobble / 2.0);
            assert!((pa.y - pb.y).abs() <= wobble / 2.0);
        }
    }
}

#[test]
fn text_is_deterministic() {
    let renderer = HandTextRenderer::default();
    assert_eq!(
        renderer.render_text("SHELF", 0.0, 0.0),
        renderer.render_text("SHELF", 0.0, 0.0)
    );
}

#[test]
fn glyph_fills_cell() {
    let strokes = exact(20.0).render_character('H', 100.0, 50.0, 0);
    let xs: Vec<f64> = strokes.iter().flatten().map(|p| p.x).collect();
    let ys: Vec<f64> = strokes.iter().flatten().map(|p| p.y).collect();
    assert_eq!(xs.iter().cloned().fold(f64::INFINITY, f64::min), 100.0);
    assert_eq!(xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max), 120.0);
    assert_eq!(ys.iter().cloned().fold(f64::INFINITY, f64::min), 50.0);
    assert_eq!(ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max), 70.0);
}

#[test]
fn centered_origin_splits_width() {
    let renderer = exact(10.0);
    let origin = renderer.centered_origin("AB", dvec2(100.0, 40.0));
    assert_eq!(origin, dvec2(85.0, 40.0));
}

#[test]
fn unbundled_fonts_fall_back_to_roman() {
    let script = HandTextRenderer::new(TextConfig {
        font: HersheyFont::ScriptSimplex,
        ..Default::default()
    });
    let roman = HandTextRenderer::default();
    assert_eq!(
        script.render_text("OAK", 0.0, 0.0),
        roman.render_text("OAK", 0.0, 0.0)
    );
}
