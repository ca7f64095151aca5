use approx::assert_abs_diff_eq;
use glam::{DVec2, dvec2};
use kintsugi::sketch::CIRCLE_SEGMENTS;
use kintsugi::{SketchConfig, WabiSketch, perturb_circle, perturb_line};

fn lines() -> Vec<(DVec2, DVec2)> {
    vec![
        (dvec2(0.0, 0.0), dvec2(100.0, 0.0)),
        (dvec2(10.0, 10.0), dvec2(10.0, 250.0)),
        (dvec2(-40.0, 7.5), dvec2(33.3, -91.2)),
        (dvec2(300.0, 200.0), dvec2(301.0, 200.5)),
    ]
}

#[test]
fn line_endpoints_are_exact() {
    let wabi = WabiSketch::new(SketchConfig::default().with_seed(7));
    for (a, b) in lines() {
        let pts = wabi.sketch_line(a, b);
        assert_eq!(pts.first(), Some(&a));
        assert_eq!(pts.last(), Some(&b));
    }
}

#[test]
fn line_wobble_is_perpendicular_only() {
    let wabi = WabiSketch::new(SketchConfig {
        noise_amplitude: 4.0,
        ..SketchConfig::default().with_seed(3)
    });
    for (a, b) in lines() {
        let pts = wabi.sketch_line(a, b);
        let len = a.distance(b);
        let dir = (b - a) / len;
        let n = pts.len() - 1;
        for (i, p) in pts.iter().enumerate() {
            // projection onto the line is the undisplaced sample position
            let along = (*p - a).dot(dir);
            assert_abs_diff_eq!(along, len * i as f64 / n as f64, epsilon = 1e-9);
        }
    }
}

#[test]
fn line_wobble_stays_within_amplitude() {
    let config = SketchConfig {
        noise_amplitude: 2.5,
        ..Default::default()
    };
    let (a, b) = (dvec2(0.0, 0.0), dvec2(200.0, 50.0));
    let dir = (b - a).normalize();
    let normal = dvec2(-dir.y, dir.x);
    let pts = perturb_line(a, b, &config);
    let max = pts
        .iter()
        .map(|p| (*p - a).dot(normal).abs())
        .fold(0.0, f64::max);
    assert!(max <= 2.5, "max displacement {max}");
    assert!(max > 0.0, "line was not wobbled");
}

#[test]
fn same_seed_same_line() {
    let config = SketchConfig::default().with_seed(99);
    let a = perturb_line(DVec2::ZERO, dvec2(80.0, 30.0), &config);
    let b = perturb_line(DVec2::ZERO, dvec2(80.0, 30.0), &config);
    assert_eq!(a, b);

    let other = perturb_line(
        DVec2::ZERO,
        dvec2(80.0, 30.0),
        &SketchConfig::default().with_seed(100),
    );
    assert_ne!(a, other);
}

#[test]
fn short_line_is_two_points() {
    let wabi = WabiSketch::default();
    let pts = wabi.sketch_line(DVec2::ZERO, dvec2(0.0005, 0.0));
    assert_eq!(pts, vec![DVec2::ZERO, dvec2(0.0005, 0.0)]);
}

#[test]
fn circle_is_closed() {
    let wabi = WabiSketch::default();
    let pts = wabi.sketch_circle(dvec2(50.0, 50.0), 25.0);
    assert_eq!(pts.len(), CIRCLE_SEGMENTS + 1);
    assert_eq!(pts.first(), pts.last());
}

#[test]
fn circle_radius_within_amplitude() {
    let config = SketchConfig::default().with_seed(5);
    let center = dvec2(120.0, 80.0);
    for p in perturb_circle(center, 30.0, &config, 90) {
        let r = p.distance(center);
        assert!((r - 30.0).abs() <= config.noise_amplitude + 1e-9, "r = {r}");
    }
}

#[test]
fn arc_endpoints_are_exact() {
    let wabi = WabiSketch::new(SketchConfig::default().with_seed(11));
    let center = dvec2(40.0, 40.0);
    let (start, end) = (dvec2(60.0, 40.0), dvec2(40.0, 60.0));
    let pts = wabi.sketch_arc(start, end, center, 20.0);
    assert_eq!(pts.len(), 101);
    assert_eq!(pts[0], start);
    assert_eq!(pts[100], end);
}

#[test]
fn reversed_arc_runs_clockwise() {
    let wabi = WabiSketch::new(SketchConfig::default().with_seed(11));
    let center = dvec2(40.0, 40.0);
    let pts = wabi.sketch_arc(dvec2(40.0, 60.0), dvec2(60.0, 40.0), center, 20.0);
    for p in &pts {
        let rel = *p - center;
        assert!(rel.x > -2.0 && rel.y > -2.0, "point {p} left the quarter");
    }
    let mid = center + dvec2(1.0, 1.0).normalize() * 20.0;
    assert!(pts[50].distance(mid) < 2.0, "midpoint {}", pts[50]);
}

#[test]
fn arc_sweep_is_the_raw_angle_difference() {
    // -135 to 135 degrees: the sweep passes through 0, not 180
    let wabi = WabiSketch::new(SketchConfig::default().with_seed(2));
    let r = 20.0;
    let corner = r * std::f64::consts::FRAC_1_SQRT_2;
    let pts = wabi.sketch_arc(dvec2(-corner, -corner), dvec2(-corner, corner), DVec2::ZERO, r);
    assert!(pts[50].distance(dvec2(r, 0.0)) < 2.0, "midpoint {}", pts[50]);
    assert!(pts.iter().all(|p| p.x > -16.0));
}

#[test]
fn zero_amplitude_is_straight() {
    let config = SketchConfig {
        noise_amplitude: 0.0,
        ..Default::default()
    };
    let pts = perturb_line(dvec2(0.0, 5.0), dvec2(10.0, 5.0), &config);
    for p in pts {
        assert_abs_diff_eq!(p.y, 5.0, epsilon = 1e-12);
    }
}
