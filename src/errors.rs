//! Error types with rich diagnostics using miette
//!
//! Scene errors carry source spans so a bad JSON scene points at the
//! offending line.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised when validating sketch, text or render settings
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    #[diagnostic(code(kintsugi::config::invalid_value))]
    InvalidValue {
        field: &'static str,
        reason: NumericError,
    },

    #[error("invalid color {value:?}")]
    #[diagnostic(
        code(kintsugi::config::invalid_color),
        help("colors are written as #rgb or #rrggbb")
    )]
    InvalidColor { value: String },
}

impl ConfigError {
    pub(crate) fn value(field: &'static str, reason: NumericError) -> Self {
        ConfigError::InvalidValue { field, reason }
    }
}

// ============================================================================
// Scene Errors
// ============================================================================

/// Errors that occur while loading a scene description
#[derive(Error, Diagnostic, Debug)]
pub enum SceneError {
    #[error("malformed scene description: {message}")]
    #[diagnostic(code(kintsugi::scene::malformed))]
    Malformed {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

impl SceneError {
    /// Convert a serde_json error into a diagnostic pointing into `source`.
    pub(crate) fn from_json(name: &str, source: &str, err: &serde_json::Error) -> Self {
        let offset = line_col_to_offset(source, err.line(), err.column());
        SceneError::Malformed {
            message: err.to_string(),
            src: NamedSource::new(name, source.to_string()),
            span: SourceSpan::from((offset, 0)),
        }
    }
}

/// Map serde_json's 1-based line / column into a byte offset.
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur during rendering
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("invalid canvas size {width} x {height}")]
    #[diagnostic(
        code(kintsugi::render::invalid_canvas),
        help("width and height must be finite and greater than zero")
    )]
    InvalidCanvas { width: f64, height: f64 },

    #[error("non-finite coordinate in {element} #{index}")]
    #[diagnostic(code(kintsugi::render::non_finite))]
    NonFinite { element: &'static str, index: usize },

    #[error("hatch #{index} has non-positive spacing {spacing}")]
    #[diagnostic(code(kintsugi::render::hatch_spacing))]
    HatchSpacing { index: usize, spacing: f64 },

    #[error("hatch #{index} spacing {spacing} draws too many lines")]
    #[diagnostic(
        code(kintsugi::render::hatch_too_dense),
        help("a hatch region draws at most 2000 lines; increase the spacing")
    )]
    HatchTooDense { index: usize, spacing: f64 },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}
