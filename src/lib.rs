//! drumlin — node-link diagram figures in pure Rust.
//!
//! The heart of the crate is the procedural "database" figure: a cylinder
//! silhouette built from cubic Bezier arcs, generated fresh for any bounding
//! box. Around it sit the pieces a host needs to put figures on screen: a
//! [`FigureRegistry`] of named generators, a [`DiagramModel`] of nodes and
//! links, and an SVG renderer.
//!
//! ```
//! use drumlin::{DiagramModel, FigureRegistry, LinkData, Loc, NodeData, RenderOptions};
//!
//! let mut model = DiagramModel::new();
//! let orders = model.add_node(NodeData::new("Orders", "lightblue", Loc::new(0.0, 0.0)));
//! let store = model.add_node(
//!     NodeData::new("Store", "orange", Loc::new(200.0, 0.0)).with_figure("database"),
//! );
//! model.add_link(LinkData::new(orders, store));
//!
//! let registry = FigureRegistry::with_defaults();
//! let svg = drumlin::render_svg(&model, &registry, &RenderOptions::default())?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), drumlin::RenderError>(())
//! ```
//!
//! Geometry generators are pure functions: no global registration table, no
//! caching, no hidden state. Registries are plain values the caller owns and
//! hands to the renderer.

pub mod errors;
pub mod figures;
pub mod geometry;
pub mod log;
pub mod model;
pub mod render;

pub use errors::{ParseLocError, RenderError};
pub use figures::{DEFAULT_FIGURE, FigureGenerator, FigureRegistry};
pub use geometry::{Geometry, PathFigure, PathSegment, Spot};
pub use model::{DiagramModel, LinkData, Loc, NodeData};
pub use render::{RenderOptions, render_svg};
