//! Named figure generators and the registry that owns them.
//!
//! A figure generator is a pure function from a bounding box to a
//! [`Geometry`](crate::geometry::Geometry). The registry is an explicit
//! value owned by the caller and passed to the renderer — there is no
//! global shape table anywhere in the crate. Registration is idempotent:
//! registering a name twice silently replaces the earlier generator.

pub mod boxes;
pub mod database;

use std::collections::HashMap;

use crate::geometry::Geometry;

pub use boxes::{rectangle, rounded_rectangle};
pub use database::database;

/// Figure name used for nodes that don't name one.
pub const DEFAULT_FIGURE: &str = "rounded-rectangle";

/// A named figure generator: bounding box in, outline out.
///
/// Plain `fn` pointers keep generators `Send + Sync` and trivially
/// copyable; a registry built during startup can be shared by reference
/// across rendering passes without locking.
pub type FigureGenerator = fn(width: f64, height: f64) -> Geometry;

/// Name → generator table, injected into the renderer.
#[derive(Debug, Clone, Default)]
pub struct FigureRegistry {
    table: HashMap<String, FigureGenerator>,
}

impl FigureRegistry {
    /// An empty registry.
    pub fn new() -> FigureRegistry {
        FigureRegistry::default()
    }

    /// A registry seeded with the built-in figures:
    /// `"database"`, `"rectangle"`, and `"rounded-rectangle"`.
    pub fn with_defaults() -> FigureRegistry {
        let mut registry = FigureRegistry::new();
        registry.register("database", database);
        registry.register("rectangle", rectangle);
        registry.register("rounded-rectangle", rounded_rectangle);
        registry
    }

    /// Register `generator` under `name`. Last write wins.
    pub fn register(&mut self, name: impl Into<String>, generator: FigureGenerator) {
        self.table.insert(name.into(), generator);
    }

    /// Look up a generator by name.
    pub fn resolve(&self, name: &str) -> Option<FigureGenerator> {
        self.table.get(name).copied()
    }

    /// Registered names, sorted for stable diagnostics.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.table.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
