//! Default sizes and settings (document units, 1 unit = 1 CSS pixel).

/// Label padding inside a node.
pub const NODE_MARGIN: f64 = 8.0;
pub const MIN_NODE_WIDTH: f64 = 60.0;
pub const MIN_NODE_HEIGHT: f64 = 30.0;

/// Crude average glyph advance for 14px Roboto; good enough for sizing
/// boxes around short labels.
pub const CHAR_WIDTH: f64 = 7.5;

/// 0.875rem at the browser-default 16px root size.
pub const FONT_SIZE: f64 = 14.0;
pub const FONT_WEIGHT: &str = "400";
pub const FONT_FAMILY: &str = "Roboto, sans-serif";
pub const LABEL_COLOR: &str = "black";

/// Fraction of the font size the baseline sits below the label center.
pub const BASELINE_SHIFT: f64 = 0.35;

pub const FIGURE_STROKE: &str = "black";
pub const FIGURE_STROKE_WIDTH: f64 = 1.0;

pub const LINK_STROKE: &str = "black";
pub const LINK_STROKE_WIDTH: f64 = 1.0;
pub const ARROW_LENGTH: f64 = 10.0;
pub const ARROW_WIDTH: f64 = 8.0;

/// Whitespace around the diagram bounds.
pub const PADDING: f64 = 10.0;
