//! Turn a diagram model into an SVG document.
//!
//! Nodes resolve their figure through the injected registry, scale the
//! geometry to the node's size, and draw label text inside the figure's
//! anchor-spot rectangle. Links run straight between node centers, chopped
//! back to each node's edge by discrete compass points, with a filled
//! arrowhead at the target end.

pub mod defaults;
pub mod svg;

use glam::DVec2;

use crate::errors::RenderError;
use crate::figures::database::CAP_BAND;
use crate::figures::{DEFAULT_FIGURE, FigureRegistry};
use crate::log::{debug, trace};
use crate::model::{DiagramModel, NodeData};

use svg::{escape_xml, fmt_num, path_data};

/// Knobs for a single rendering pass.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Whitespace around the diagram bounds, in document units.
    pub padding: f64,
    /// Optional background fill for the whole document.
    pub background: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            padding: defaults::PADDING,
            background: None,
        }
    }
}

/// A node with its rendered box worked out: center, half-size, figure name.
struct PlacedNode<'a> {
    node: &'a NodeData,
    center: DVec2,
    half: DVec2,
    figure_name: &'a str,
}

/// Discrete attachment directions for link endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompassPoint {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassPoint {
    /// Classify a direction vector into one of 8 sectors. `dy` is in y-up
    /// convention. The slope thresholds 2.414 ≈ tan(67.5°) and
    /// 0.414 ≈ tan(22.5°) define the sector boundaries.
    fn from_direction(dx: f64, dy: f64) -> CompassPoint {
        if dx > 0.0 {
            if dy >= 2.414 * dx {
                CompassPoint::North
            } else if dy > 0.414 * dx {
                CompassPoint::NorthEast
            } else if dy > -0.414 * dx {
                CompassPoint::East
            } else if dy > -2.414 * dx {
                CompassPoint::SouthEast
            } else {
                CompassPoint::South
            }
        } else if dx < 0.0 {
            if dy >= -2.414 * dx {
                CompassPoint::North
            } else if dy > -0.414 * dx {
                CompassPoint::NorthWest
            } else if dy > 0.414 * dx {
                CompassPoint::West
            } else if dy > 2.414 * dx {
                CompassPoint::SouthWest
            } else {
                CompassPoint::South
            }
        } else if dy >= 0.0 {
            CompassPoint::North
        } else {
            CompassPoint::South
        }
    }
}

/// Offset from a node's center to its edge at the given compass point,
/// in document (y-down) coordinates.
///
/// Database nodes inset the diagonal attachments by the ellipse cap band so
/// links meet the curved silhouette instead of the empty box corner.
fn edge_offset(figure_name: &str, half: DVec2, cp: CompassPoint) -> DVec2 {
    let (hw, hh) = (half.x, half.y);
    let vh = if figure_name == "database" {
        hh - CAP_BAND * (2.0 * hh)
    } else {
        hh
    };
    match cp {
        CompassPoint::North => DVec2::new(0.0, -hh),
        CompassPoint::NorthEast => DVec2::new(hw, -vh),
        CompassPoint::East => DVec2::new(hw, 0.0),
        CompassPoint::SouthEast => DVec2::new(hw, vh),
        CompassPoint::South => DVec2::new(0.0, hh),
        CompassPoint::SouthWest => DVec2::new(-hw, vh),
        CompassPoint::West => DVec2::new(-hw, 0.0),
        CompassPoint::NorthWest => DVec2::new(-hw, -vh),
    }
}

impl PlacedNode<'_> {
    /// The point on this node's edge facing `toward`.
    fn edge_point(&self, toward: DVec2) -> DVec2 {
        // Normalize dx by the aspect ratio so the sector split treats the
        // box as square, then flip dy into y-up for the sector math.
        let dx = (toward.x - self.center.x) * (self.half.y / self.half.x);
        let dy = -(toward.y - self.center.y);
        let cp = CompassPoint::from_direction(dx, dy);
        self.center + edge_offset(self.figure_name, self.half, cp)
    }
}

/// Work out a node's rendered size from its label.
fn node_size(node: &NodeData) -> DVec2 {
    let text_width = node.text.chars().count() as f64 * defaults::CHAR_WIDTH;
    let w = (text_width + 2.0 * defaults::NODE_MARGIN).max(defaults::MIN_NODE_WIDTH);
    let h = (defaults::FONT_SIZE + 2.0 * defaults::NODE_MARGIN).max(defaults::MIN_NODE_HEIGHT);
    DVec2::new(w, h)
}

/// Render the model to an SVG document string.
///
/// Fails on a link whose endpoint names no node, or on a node naming a
/// figure the registry doesn't know. An empty model renders a placeholder
/// comment rather than erroring.
pub fn render_svg(
    model: &DiagramModel,
    registry: &FigureRegistry,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    if model.nodes().is_empty() {
        return Ok("<!-- empty diagram -->\n".to_string());
    }

    debug!(
        nodes = model.nodes().len(),
        links = model.links().len(),
        "rendering diagram"
    );

    for link in model.links() {
        for key in [link.from, link.to] {
            if model.find_node(key).is_none() {
                return Err(RenderError::DanglingLink {
                    link_key: link.key,
                    node_key: key,
                });
            }
        }
    }

    let placed: Vec<PlacedNode> = model
        .nodes()
        .iter()
        .map(|node| PlacedNode {
            node,
            center: DVec2::new(node.loc.x, node.loc.y),
            half: node_size(node) / 2.0,
            figure_name: node.figure.as_deref().unwrap_or(DEFAULT_FIGURE),
        })
        .collect();

    let mut min = DVec2::splat(f64::MAX);
    let mut max = DVec2::splat(f64::MIN);
    for p in &placed {
        min = min.min(p.center - p.half);
        max = max.max(p.center + p.half);
    }
    min -= DVec2::splat(options.padding);
    max += DVec2::splat(options.padding);
    let view = max - min;

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\">\n",
        fmt_num(min.x),
        fmt_num(min.y),
        fmt_num(view.x),
        fmt_num(view.y),
        fmt_num(view.x),
        fmt_num(view.y)
    ));

    if let Some(background) = &options.background {
        out.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            fmt_num(min.x),
            fmt_num(min.y),
            fmt_num(view.x),
            fmt_num(view.y),
            escape_xml(background)
        ));
    }

    for p in &placed {
        render_node(&mut out, p, registry)?;
    }

    for link in model.links() {
        let from = placed.iter().find(|p| p.node.key == link.from);
        let to = placed.iter().find(|p| p.node.key == link.to);
        let (Some(from), Some(to)) = (from, to) else {
            // Checked above; keys can't go missing between the two passes.
            continue;
        };
        render_link(&mut out, from, to);
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn render_node(out: &mut String, p: &PlacedNode, registry: &FigureRegistry) -> Result<(), RenderError> {
    let generator =
        registry
            .resolve(p.figure_name)
            .ok_or_else(|| RenderError::UnknownFigure {
                name: p.figure_name.to_string(),
                registered: registry.names().join(", "),
            })?;

    let size = p.half * 2.0;
    let geo = generator(size.x, size.y);
    trace!(key = p.node.key, figure = p.figure_name, "placing node");

    let origin = p.center - p.half;
    out.push_str(&format!(
        "<g transform=\"translate({},{})\">\n",
        fmt_num(origin.x),
        fmt_num(origin.y)
    ));

    for fig in geo.figures() {
        if fig.is_filled() {
            out.push_str(&format!(
                "<path d=\"{}\" fill=\"{}\"/>\n",
                path_data(fig),
                escape_xml(&p.node.color)
            ));
        } else {
            out.push_str(&format!(
                "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                path_data(fig),
                defaults::FIGURE_STROKE,
                fmt_num(defaults::FIGURE_STROKE_WIDTH)
            ));
        }
    }

    // Center the label in the anchor-spot rectangle, nudged down so the
    // baseline visually centers the text.
    let spot_center = DVec2::new(
        (geo.spot1.x + geo.spot2.x) * 0.5 * size.x,
        (geo.spot1.y + geo.spot2.y) * 0.5 * size.y,
    );
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\" fill=\"{}\">{}</text>\n",
        fmt_num(spot_center.x),
        fmt_num(spot_center.y + defaults::FONT_SIZE * defaults::BASELINE_SHIFT),
        defaults::FONT_FAMILY,
        fmt_num(defaults::FONT_SIZE),
        defaults::FONT_WEIGHT,
        defaults::LABEL_COLOR,
        escape_xml(&p.node.text)
    ));

    out.push_str("</g>\n");
    Ok(())
}

fn render_link(out: &mut String, from: &PlacedNode, to: &PlacedNode) {
    let start = from.edge_point(to.center);
    let end = to.edge_point(from.center);

    let Some(dir) = (end - start).try_normalize() else {
        // Coincident endpoints (overlapping nodes); nothing sensible to draw.
        trace!(from = from.node.key, to = to.node.key, "skipping zero-length link");
        return;
    };

    out.push_str(&format!(
        "<path d=\"M{},{}L{},{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
        fmt_num(start.x),
        fmt_num(start.y),
        fmt_num(end.x),
        fmt_num(end.y),
        defaults::LINK_STROKE,
        fmt_num(defaults::LINK_STROKE_WIDTH)
    ));

    let base = end - dir * defaults::ARROW_LENGTH;
    let perp = DVec2::new(-dir.y, dir.x) * (defaults::ARROW_WIDTH / 2.0);
    let (left, right) = (base + perp, base - perp);
    out.push_str(&format!(
        "<polygon points=\"{},{} {},{} {},{}\" fill=\"{}\"/>\n",
        fmt_num(end.x),
        fmt_num(end.y),
        fmt_num(left.x),
        fmt_num(left.y),
        fmt_num(right.x),
        fmt_num(right.y),
        defaults::LINK_STROKE
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Loc;

    fn placed(node: &NodeData) -> PlacedNode<'_> {
        PlacedNode {
            node,
            center: DVec2::new(node.loc.x, node.loc.y),
            half: node_size(node) / 2.0,
            figure_name: node.figure.as_deref().unwrap_or(DEFAULT_FIGURE),
        }
    }

    #[test]
    fn compass_sectors_split_at_the_expected_slopes() {
        assert_eq!(CompassPoint::from_direction(1.0, 0.0), CompassPoint::East);
        assert_eq!(CompassPoint::from_direction(1.0, 1.0), CompassPoint::NorthEast);
        assert_eq!(CompassPoint::from_direction(0.0, 1.0), CompassPoint::North);
        assert_eq!(CompassPoint::from_direction(-1.0, 1.0), CompassPoint::NorthWest);
        assert_eq!(CompassPoint::from_direction(-1.0, 0.0), CompassPoint::West);
        assert_eq!(CompassPoint::from_direction(-1.0, -1.0), CompassPoint::SouthWest);
        assert_eq!(CompassPoint::from_direction(0.0, -1.0), CompassPoint::South);
        assert_eq!(CompassPoint::from_direction(1.0, -1.0), CompassPoint::SouthEast);
        // Steep positive slope tips over into North.
        assert_eq!(CompassPoint::from_direction(1.0, 3.0), CompassPoint::North);
    }

    #[test]
    fn edge_point_faces_the_target() {
        let node = NodeData::new("Jobs", "white", Loc::new(0.0, 0.0));
        let p = placed(&node);

        // 60x30 box: east edge at (30, 0), south edge at (0, 15).
        assert_eq!(p.edge_point(DVec2::new(200.0, 0.0)), DVec2::new(30.0, 0.0));
        assert_eq!(p.edge_point(DVec2::new(0.0, 50.0)), DVec2::new(0.0, 15.0));
        // Diagonal target lands on the corner.
        assert_eq!(p.edge_point(DVec2::new(200.0, 100.0)), DVec2::new(30.0, 15.0));
    }

    #[test]
    fn database_diagonals_are_inset_by_the_cap_band() {
        let node = NodeData::new("DB", "white", Loc::new(0.0, 0.0)).with_figure("database");
        let p = placed(&node);

        // 60x30 box: cap band is 3 units, so the SE attachment is (30, 12).
        assert_eq!(p.edge_point(DVec2::new(200.0, 100.0)), DVec2::new(30.0, 12.0));
        // Cardinal points are unaffected.
        assert_eq!(p.edge_point(DVec2::new(0.0, 50.0)), DVec2::new(0.0, 15.0));
    }

    #[test]
    fn node_size_grows_with_the_label_but_never_shrinks() {
        let small = NodeData::new("A", "white", Loc::new(0.0, 0.0));
        assert_eq!(node_size(&small), DVec2::new(60.0, 30.0));

        let wide = NodeData::new("A much longer label", "white", Loc::new(0.0, 0.0));
        assert!(node_size(&wide).x > 60.0);
        assert_eq!(node_size(&wide).y, 30.0);
    }
}
