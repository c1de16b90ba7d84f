//! The "database" figure: a right-circular-cylinder silhouette.
//!
//! The outline is three figures drawn in order: a filled body (flattened
//! ellipse caps joined by vertical sides) and two open rim bands suggesting
//! the lid of the cylinder. Every coordinate is `width * fraction` or
//! `height * fraction`, so the output scales linearly with the requested
//! bounding box.

use crate::geometry::{Geometry, PathFigure, Spot};

/// Cubic-Bezier coefficient approximating a quarter circle: `4(√2−1)/3`.
///
/// The cap curves use this constant scaled to the cap's proportions:
/// `KAPPA * 0.5` horizontally (half the width per quarter arc) and
/// `KAPPA * 0.1` vertically (the cap band is a tenth of the height).
/// The asymmetry is what flattens the ellipse; both factors must stay
/// exactly as they are for the icon to keep its proportions at any size.
pub const KAPPA: f64 = 4.0 * (std::f64::consts::SQRT_2 - 1.0) / 3.0;

/// Fraction of the height taken by each ellipse cap band.
pub const CAP_BAND: f64 = 0.1;

/// Generate the cylinder outline for a `width` x `height` bounding box.
///
/// Pure arithmetic: same input, bit-identical output, a fresh value per
/// call. Dimensions must be positive and finite; the renderer clamps node
/// sizes before calling, and non-positive input produces degenerate
/// geometry rather than an error.
pub fn database(width: f64, height: f64) -> Geometry {
    let (w, h) = (width, height);
    let cpx = KAPPA * 0.5;
    let cpy = KAPPA * 0.1;

    // Clockwise from the right edge of the top cap seam.
    let body = PathFigure::filled(w, 0.1 * h)
        .line_to(w, 0.9 * h)
        .curve_to(w, (0.9 + cpy) * h, (0.5 + cpx) * w, h, 0.5 * w, h)
        .curve_to((0.5 - cpx) * w, h, 0.0, (0.9 + cpy) * h, 0.0, 0.9 * h)
        .line_to(0.0, 0.1 * h)
        .curve_to(0.0, (0.1 - cpy) * h, (0.5 - cpx) * w, 0.0, 0.5 * w, 0.0)
        .curve_to((0.5 + cpx) * w, 0.0, w, (0.1 - cpy) * h, w, 0.1 * h);

    let upper_ring = rim(w, h, 0.1, 0.2, 0.3);
    let lower_ring = rim(w, h, 0.2, 0.3, 0.4);

    // Content goes below the rings and above the bottom cap curve.
    Geometry::new(vec![body, upper_ring, lower_ring])
        .with_spots(Spot::new(0.0, 0.4), Spot::new(1.0, 0.9))
}

/// One rim band: two front arcs at heights `t0..t1` and `t1..t2`, joined by
/// a pen lift. Band positions are literal fractions rather than derived
/// sums so equal heights compare bit-equal across figures.
fn rim(w: f64, h: f64, t0: f64, t1: f64, t2: f64) -> PathFigure {
    let cpx = KAPPA * 0.5;
    let cpy = KAPPA * 0.1;

    PathFigure::open(w, t0 * h)
        .curve_to(w, (t0 + cpy) * h, (0.5 + cpx) * w, t1 * h, 0.5 * w, t1 * h)
        .curve_to((0.5 - cpx) * w, t1 * h, 0.0, (t0 + cpy) * h, 0.0, t0 * h)
        .move_to(w, t1 * h)
        .curve_to(w, (t1 + cpy) * h, (0.5 + cpx) * w, t2 * h, 0.5 * w, t2 * h)
        .curve_to((0.5 - cpx) * w, t2 * h, 0.0, (t1 + cpy) * h, 0.0, t1 * h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PathSegment;
    use glam::DVec2;

    fn all_points(geo: &Geometry) -> Vec<DVec2> {
        let mut pts = Vec::new();
        for fig in geo.figures() {
            pts.push(fig.start());
            for seg in fig.segments() {
                pts.extend(seg.points());
            }
        }
        pts
    }

    #[test]
    fn three_figures_body_first() {
        let geo = database(80.0, 120.0);
        assert_eq!(geo.figures().len(), 3);
        assert!(geo.figures()[0].is_filled());
        assert!(!geo.figures()[1].is_filled());
        assert!(!geo.figures()[2].is_filled());
    }

    #[test]
    fn body_is_closed_with_six_drawing_segments() {
        for (w, h) in [(1.0, 1.0), (100.0, 50.0), (3.7, 912.4)] {
            let geo = database(w, h);
            let body = &geo.figures()[0];
            assert!(body.is_closed(), "body must close for {w}x{h}");

            let kinds: Vec<_> = body
                .segments()
                .iter()
                .map(|seg| match seg {
                    PathSegment::Move { .. } => "move",
                    PathSegment::Line { .. } => "line",
                    PathSegment::Bezier { .. } => "bezier",
                })
                .collect();
            assert_eq!(kinds, ["line", "bezier", "bezier", "line", "bezier", "bezier"]);
        }
    }

    #[test]
    fn concrete_100_by_50() {
        let geo = database(100.0, 50.0);
        let body = &geo.figures()[0];

        assert_eq!(body.start(), DVec2::new(100.0, 5.0));
        assert_eq!(body.segments()[0], PathSegment::Line { to: DVec2::new(100.0, 45.0) });

        let PathSegment::Bezier { ctrl1, ctrl2, to } = body.segments()[1] else {
            panic!("second body segment must be a bezier");
        };
        assert_eq!(to, DVec2::new(50.0, 50.0));
        assert!((ctrl1.x - 100.0).abs() < 1e-12);
        assert!((ctrl1.y - (45.0 + KAPPA * 0.1 * 50.0)).abs() < 1e-12);
        assert!((ctrl2.x - (50.0 + KAPPA * 0.5 * 100.0)).abs() < 1e-12);
        assert!((ctrl2.y - 50.0).abs() < 1e-12);
    }

    #[test]
    fn coordinates_stay_within_overshoot_margin() {
        let eps_x = KAPPA * 0.5;
        let eps_y = KAPPA * 0.1;
        for (w, h) in [(1.0, 1.0), (100.0, 50.0), (640.0, 480.0), (0.25, 9.0)] {
            for p in all_points(&database(w, h)) {
                assert!(p.x >= -eps_x * w && p.x <= (1.0 + eps_x) * w, "x={} out of range for {w}x{h}", p.x);
                assert!(p.y >= -eps_y * h && p.y <= (1.0 + eps_y) * h, "y={} out of range for {w}x{h}", p.y);
            }
        }
    }

    #[test]
    fn doubling_the_box_exactly_doubles_every_coordinate() {
        // Every coordinate is a literal fraction times w or h, and doubling
        // an f64 only bumps the exponent, so equality here is exact.
        let base = all_points(&database(123.0, 77.0));
        let doubled = all_points(&database(246.0, 154.0));
        assert_eq!(base.len(), doubled.len());
        for (p, q) in base.iter().zip(&doubled) {
            assert_eq!(q.x, p.x * 2.0);
            assert_eq!(q.y, p.y * 2.0);
        }
    }

    #[test]
    fn spots_are_dimension_independent() {
        for (w, h) in [(1.0, 1.0), (100.0, 50.0), (9999.0, 2.0)] {
            let geo = database(w, h);
            assert_eq!(geo.spot1, Spot::new(0.0, 0.4));
            assert_eq!(geo.spot2, Spot::new(1.0, 0.9));
        }
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(database(100.0, 50.0), database(100.0, 50.0));
        assert_eq!(database(0.3, 0.7), database(0.3, 0.7));
    }

    #[test]
    fn unit_box_stays_near_unit_range() {
        let geo = database(1.0, 1.0);
        for p in all_points(&geo) {
            assert!(p.x >= -0.056 && p.x <= 1.056, "x={}", p.x);
            assert!(p.y >= -0.056 && p.y <= 1.056, "y={}", p.y);
        }
    }

    #[test]
    fn rings_are_one_move_and_four_beziers() {
        let geo = database(64.0, 64.0);
        for ring in &geo.figures()[1..] {
            let moves = ring
                .segments()
                .iter()
                .filter(|seg| matches!(seg, PathSegment::Move { .. }))
                .count();
            let beziers = ring
                .segments()
                .iter()
                .filter(|seg| matches!(seg, PathSegment::Bezier { .. }))
                .count();
            assert_eq!(moves, 1);
            assert_eq!(beziers, 4);
            assert!(!ring.is_closed());
        }
    }

    #[test]
    fn lower_ring_sits_one_band_below_the_upper() {
        let geo = database(200.0, 100.0);
        let upper = &geo.figures()[1];
        let lower = &geo.figures()[2];

        assert_eq!(upper.start(), DVec2::new(200.0, 10.0));
        assert_eq!(lower.start(), DVec2::new(200.0, 20.0));

        // Deepest arc of the lower ring reaches 0.4h.
        assert_eq!(lower.segments()[3].end(), DVec2::new(100.0, 40.0));
    }
}
