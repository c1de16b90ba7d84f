//! Resolution-independent vector outlines for diagram figures.
//!
//! A [`Geometry`] is an ordered list of [`PathFigure`]s plus two anchor
//! [`Spot`]s bounding the content-safe interior. Figures are built once with
//! the consuming fluent API and never mutated afterwards; the renderer only
//! reads them.

use glam::DVec2;

/// A fractional reference point within a figure's bounding box.
///
/// `(0, 0)` is the top-left corner, `(1, 1)` the bottom-right. Spots are
/// dimension-independent: the caller multiplies by the rendered size to get
/// document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spot {
    pub x: f64,
    pub y: f64,
}

impl Spot {
    pub const TOP_LEFT: Spot = Spot { x: 0.0, y: 0.0 };
    pub const BOTTOM_RIGHT: Spot = Spot { x: 1.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Spot {
        Spot { x, y }
    }
}

/// One drawing instruction with absolute coordinates.
///
/// Coordinates live in the figure's own space: origin top-left, x right,
/// y down, in the same units as the bounding box the generator was given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Lift the pen and continue the same figure elsewhere.
    Move { to: DVec2 },
    /// Straight line to `to`.
    Line { to: DVec2 },
    /// Cubic Bezier to `to` via two control points.
    Bezier { ctrl1: DVec2, ctrl2: DVec2, to: DVec2 },
}

impl PathSegment {
    /// The point the pen is at after this segment.
    pub fn end(&self) -> DVec2 {
        match *self {
            PathSegment::Move { to } | PathSegment::Line { to } | PathSegment::Bezier { to, .. } => to,
        }
    }

    /// Every coordinate this segment carries, endpoints and control points alike.
    pub fn points(&self) -> Vec<DVec2> {
        match *self {
            PathSegment::Move { to } | PathSegment::Line { to } => vec![to],
            PathSegment::Bezier { ctrl1, ctrl2, to } => vec![ctrl1, ctrl2, to],
        }
    }
}

/// One drawing pass of a geometry.
///
/// A filled figure contributes to the shape's fill region and is expected to
/// close back on its start point; an open figure is stroke-only decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFigure {
    start: DVec2,
    filled: bool,
    segments: Vec<PathSegment>,
}

impl PathFigure {
    /// Start a filled (closed) figure at the given point.
    pub fn filled(x: f64, y: f64) -> PathFigure {
        PathFigure {
            start: DVec2::new(x, y),
            filled: true,
            segments: Vec::new(),
        }
    }

    /// Start an open (stroke-only) figure at the given point.
    pub fn open(x: f64, y: f64) -> PathFigure {
        PathFigure {
            start: DVec2::new(x, y),
            filled: false,
            segments: Vec::new(),
        }
    }

    /// Straight line to `(x, y)`.
    pub fn line_to(mut self, x: f64, y: f64) -> PathFigure {
        self.segments.push(PathSegment::Line { to: DVec2::new(x, y) });
        self
    }

    /// Cubic Bezier to `(x, y)` via the control points `(c1x, c1y)` and
    /// `(c2x, c2y)`, in SVG argument order.
    pub fn curve_to(mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> PathFigure {
        self.segments.push(PathSegment::Bezier {
            ctrl1: DVec2::new(c1x, c1y),
            ctrl2: DVec2::new(c2x, c2y),
            to: DVec2::new(x, y),
        });
        self
    }

    /// Lift the pen and continue at `(x, y)` without stroking.
    pub fn move_to(mut self, x: f64, y: f64) -> PathFigure {
        self.segments.push(PathSegment::Move { to: DVec2::new(x, y) });
        self
    }

    pub fn start(&self) -> DVec2 {
        self.start
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The point the pen ends at (the start point for an empty figure).
    pub fn end(&self) -> DVec2 {
        self.segments.last().map_or(self.start, PathSegment::end)
    }

    /// True when the figure's final point coincides with its start.
    pub fn is_closed(&self) -> bool {
        !self.segments.is_empty() && self.end() == self.start
    }
}

/// A complete vector outline: ordered figures (draw order matters — the fill
/// body comes before decorative rings) plus the two anchor spots.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    figures: Vec<PathFigure>,
    pub spot1: Spot,
    pub spot2: Spot,
}

impl Geometry {
    /// A geometry with the default full-box spots.
    pub fn new(figures: Vec<PathFigure>) -> Geometry {
        Geometry {
            figures,
            spot1: Spot::TOP_LEFT,
            spot2: Spot::BOTTOM_RIGHT,
        }
    }

    /// Replace the anchor spots.
    pub fn with_spots(mut self, spot1: Spot, spot2: Spot) -> Geometry {
        self.spot1 = spot1;
        self.spot2 = spot2;
        self
    }

    pub fn figures(&self) -> &[PathFigure] {
        &self.figures
    }
}
