//! Node and link records plus the model that owns them.
//!
//! A flat node list and a flat link list, each record addressed by an integer
//! key. Node keys are positive and count up, link keys are negative and count
//! down, so the two key spaces can never collide and a key's sign tells you
//! what it names.

use std::fmt;
use std::str::FromStr;

use crate::errors::ParseLocError;

/// A node's location in document coordinates (the node's center).
///
/// Round-trips through an `"x y"` string form via [`FromStr`] and
/// [`fmt::Display`], for hosts that store locations as text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Loc {
    pub x: f64,
    pub y: f64,
}

impl Loc {
    pub const fn new(x: f64, y: f64) -> Loc {
        Loc { x, y }
    }
}

impl FromStr for Loc {
    type Err = ParseLocError;

    fn from_str(s: &str) -> Result<Loc, ParseLocError> {
        let err = || ParseLocError { text: s.to_string() };
        let mut parts = s.split_whitespace();
        let x = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let y = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Loc { x, y })
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// One box in the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    /// Positive, unique within the model. Zero means "assign me one".
    pub key: i64,
    /// Label text drawn inside the figure's spot rectangle.
    pub text: String,
    /// Fill color for the figure body (any SVG color value).
    pub color: String,
    /// Center of the node in document coordinates.
    pub loc: Loc,
    /// Figure name to look up in the registry; `None` uses the default.
    pub figure: Option<String>,
}

impl NodeData {
    pub fn new(text: impl Into<String>, color: impl Into<String>, loc: Loc) -> NodeData {
        NodeData {
            key: 0,
            text: text.into(),
            color: color.into(),
            loc,
            figure: None,
        }
    }

    /// Request a specific key; clashes are resolved upward on insertion.
    pub fn with_key(mut self, key: i64) -> NodeData {
        self.key = key;
        self
    }

    /// Render with a named figure instead of the default.
    pub fn with_figure(mut self, figure: impl Into<String>) -> NodeData {
        self.figure = Some(figure.into());
        self
    }
}

/// One arrow between two nodes, addressed by their keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkData {
    /// Negative, unique within the model. Zero means "assign me one".
    pub key: i64,
    pub from: i64,
    pub to: i64,
}

impl LinkData {
    pub fn new(from: i64, to: i64) -> LinkData {
        LinkData { key: 0, from, to }
    }

    /// Request a specific key; clashes are resolved downward on insertion.
    pub fn with_key(mut self, key: i64) -> LinkData {
        self.key = key;
        self
    }
}

/// The whole diagram: ordered nodes and links.
#[derive(Debug, Clone, Default)]
pub struct DiagramModel {
    nodes: Vec<NodeData>,
    links: Vec<LinkData>,
}

impl DiagramModel {
    pub fn new() -> DiagramModel {
        DiagramModel::default()
    }

    pub fn nodes(&self) -> &[NodeData] {
        &self.nodes
    }

    pub fn links(&self) -> &[LinkData] {
        &self.links
    }

    pub fn find_node(&self, key: i64) -> Option<&NodeData> {
        self.nodes.iter().find(|node| node.key == key)
    }

    pub fn find_link(&self, key: i64) -> Option<&LinkData> {
        self.links.iter().find(|link| link.key == key)
    }

    /// Insert a node, assigning the first free positive key counting up from
    /// the node's own key (or 1). Returns the assigned key.
    pub fn add_node(&mut self, mut node: NodeData) -> i64 {
        let mut key = if node.key > 0 { node.key } else { 1 };
        while self.find_node(key).is_some() {
            key += 1;
        }
        node.key = key;
        self.nodes.push(node);
        key
    }

    /// Insert a link, assigning the first free negative key counting down
    /// from the link's own key (or -1). Returns the assigned key.
    pub fn add_link(&mut self, mut link: LinkData) -> i64 {
        let mut key = if link.key < 0 { link.key } else { -1 };
        while self.find_link(key).is_some() {
            key -= 1;
        }
        link.key = key;
        self.links.push(link);
        key
    }
}
