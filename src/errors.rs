//! Error types with diagnostic codes and help text.

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced while turning a diagram model into SVG.
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("unknown figure: {name}")]
    #[diagnostic(
        code(drumlin::render::unknown_figure),
        help("registered figures: {registered}")
    )]
    UnknownFigure { name: String, registered: String },

    #[error("link {link_key} references missing node {node_key}")]
    #[diagnostic(
        code(drumlin::render::dangling_link),
        help("every link endpoint must name an existing node key")
    )]
    DanglingLink { link_key: i64, node_key: i64 },
}

/// Failure to parse an `"x y"` location string.
#[derive(Error, Diagnostic, Debug)]
#[error("invalid location: {text:?}")]
#[diagnostic(
    code(drumlin::model::invalid_location),
    help("expected two numbers separated by whitespace, e.g. \"120 -35.5\"")
)]
pub struct ParseLocError {
    pub text: String,
}
