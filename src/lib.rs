//! svgtidy - shrink and pretty-print traced SVG
//!
//! svgtidy post-processes the SVG text a raster tracer emits: it strips
//! non-visual markup, rounds coordinates and drops redundant path commands
//! and empty attributes, and it can re-indent the result for display.

mod check;
mod error;
mod format;
mod log;
mod number;
mod optimize;
mod stats;
mod trace;

pub use check::*;
pub use error::*;
pub use format::*;
pub use number::round_decimal;
pub use optimize::*;
pub use stats::*;
pub use trace::*;

/// Optimize an SVG string with default settings.
pub fn optimize(svg: &str) -> String {
    optimize_with_options(svg, &Options::default())
}

/// Optimize an SVG string with custom options.
pub fn optimize_with_options(svg: &str, options: &Options) -> String {
    run_passes(svg, options)
}

/// Optimization options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Number of decimal places for coordinates (default: 1)
    pub precision: u8,
    /// Remove comments
    pub remove_comments: bool,
    /// Remove XML declaration
    pub remove_xml_declaration: bool,
    /// Collapse whitespace and drop it between tags
    pub collapse_whitespace: bool,
    /// Round decimal numbers to `precision` places
    pub round_coordinates: bool,
    /// Collapse repeated path commands
    pub remove_redundant_commands: bool,
    /// Remove `name=""` attributes
    pub remove_empty_attributes: bool,
}

impl Options {
    /// Options with every pass disabled. The output is only trimmed.
    pub fn none() -> Self {
        Self {
            precision: 1,
            remove_comments: false,
            remove_xml_declaration: false,
            collapse_whitespace: false,
            round_coordinates: false,
            remove_redundant_commands: false,
            remove_empty_attributes: false,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            precision: 1,
            remove_comments: true,
            remove_xml_declaration: true,
            collapse_whitespace: true,
            round_coordinates: true,
            remove_redundant_commands: true,
            remove_empty_attributes: true,
        }
    }
}
