//! SVG text fragments: number formatting, escaping, path data.

use crate::geometry::{PathFigure, PathSegment};

/// Format a number like `%.10g`: ten decimals, trailing zeros trimmed.
pub fn fmt_num(v: f64) -> String {
    let s = format!("{:.10}", v);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Escape text for use in SVG content or attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize one figure as SVG path data.
///
/// Filled figures that close back on their start also get a `Z` so the
/// fill rule sees an explicit subpath closure.
pub fn path_data(figure: &PathFigure) -> String {
    let start = figure.start();
    let mut d = format!("M{},{}", fmt_num(start.x), fmt_num(start.y));
    for seg in figure.segments() {
        match *seg {
            PathSegment::Move { to } => {
                d.push_str(&format!("M{},{}", fmt_num(to.x), fmt_num(to.y)));
            }
            PathSegment::Line { to } => {
                d.push_str(&format!("L{},{}", fmt_num(to.x), fmt_num(to.y)));
            }
            PathSegment::Bezier { ctrl1, ctrl2, to } => {
                d.push_str(&format!(
                    "C{},{} {},{} {},{}",
                    fmt_num(ctrl1.x),
                    fmt_num(ctrl1.y),
                    fmt_num(ctrl2.x),
                    fmt_num(ctrl2.y),
                    fmt_num(to.x),
                    fmt_num(to.y)
                ));
            }
        }
    }
    if figure.is_filled() && figure.is_closed() {
        d.push('Z');
    }
    d
}
