//! Plain box figures: the default visuals for untagged nodes.

use crate::geometry::{Geometry, PathFigure, Spot};

use super::database::KAPPA;

/// Extra corner radius in units added on top of the proportional part.
const CORNER_BASE: f64 = 3.0;

/// A plain rectangle filling the whole bounding box.
pub fn rectangle(width: f64, height: f64) -> Geometry {
    let fig = PathFigure::filled(0.0, 0.0)
        .line_to(width, 0.0)
        .line_to(width, height)
        .line_to(0.0, height)
        .line_to(0.0, 0.0);
    Geometry::new(vec![fig])
}

/// A rectangle with quarter-circle corner arcs.
///
/// The radius grows slowly with the box (`0.1 * min(w, h) + 3`) and is
/// clamped so opposite corners can never overlap. Anchor spots are inset by
/// half the radius to keep content off the curved corners.
pub fn rounded_rectangle(width: f64, height: f64) -> Geometry {
    let (w, h) = (width, height);
    let r = (0.1 * w.min(h) + CORNER_BASE).min(w / 2.0).min(h / 2.0);
    let k = KAPPA * r;

    let fig = PathFigure::filled(r, 0.0)
        .line_to(w - r, 0.0)
        .curve_to(w - r + k, 0.0, w, r - k, w, r)
        .line_to(w, h - r)
        .curve_to(w, h - r + k, w - r + k, h, w - r, h)
        .line_to(r, h)
        .curve_to(r - k, h, 0.0, h - r + k, 0.0, h - r)
        .line_to(0.0, r)
        .curve_to(0.0, r - k, r - k, 0.0, r, 0.0);

    let inset_x = 0.5 * r / w;
    let inset_y = 0.5 * r / h;
    Geometry::new(vec![fig])
        .with_spots(Spot::new(inset_x, inset_y), Spot::new(1.0 - inset_x, 1.0 - inset_y))
}
