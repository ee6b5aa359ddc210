//! The tracer boundary: pixels in, SVG text out, then optimization.
//!
//! The tracer itself is a black box behind [`Tracer`]. [`convert`] runs it
//! and feeds its output through the optimizer.

use crate::check::is_well_formed;
use crate::error::SvgTidyError;
use crate::log::{debug, warn};
use crate::stats::SizeStats;
use crate::{Options, optimize_with_options};

/// An RGBA image, row-major, 4 bytes per pixel.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, SvgTidyError> {
        if width == 0 || height == 0 {
            return Err(SvgTidyError::EmptyImage);
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(SvgTidyError::InvalidPixelBuffer {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// RGBA of the pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.rgba.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Tracer tuning parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceParams {
    /// Error threshold for straight lines
    pub line_threshold: f32,
    /// Error threshold for quadratic curves
    pub curve_threshold: f32,
    /// Paths shorter than this are dropped
    pub path_omit: u32,
    /// Number of output colors
    pub colors: u32,
    /// Decimal places the tracer rounds coordinates to
    pub round_coords: u8,
}

impl TraceParams {
    /// Coarse tracing for small output: few colors, short paths dropped.
    pub fn aggressive() -> Self {
        Self {
            line_threshold: 3.0,
            curve_threshold: 2.0,
            path_omit: 15,
            colors: 2,
            round_coords: 1,
        }
    }
}

impl Default for TraceParams {
    fn default() -> Self {
        Self::aggressive()
    }
}

/// A raster-to-vector tracer.
pub trait Tracer {
    fn trace(&self, pixels: &PixelBuffer, params: &TraceParams) -> Result<String, SvgTidyError>;
}

impl<F> Tracer for F
where
    F: Fn(&PixelBuffer, &TraceParams) -> Result<String, SvgTidyError>,
{
    fn trace(&self, pixels: &PixelBuffer, params: &TraceParams) -> Result<String, SvgTidyError> {
        self(pixels, params)
    }
}

/// The result of tracing and optimizing one image.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Tracer output, untouched
    pub raw: String,
    /// The canonical result: optimized, or `raw` if optimizing broke it
    pub svg: String,
    pub stats: SizeStats,
    /// Whether `svg` is the raw output because the optimized one was not
    /// well-formed
    pub fell_back: bool,
}

/// Trace `pixels` and optimize the tracer's SVG.
///
/// If the tracer produced well-formed XML but the optimized text is not,
/// the raw output is kept as the result.
pub fn convert(
    tracer: &impl Tracer,
    pixels: &PixelBuffer,
    params: &TraceParams,
    options: &Options,
) -> Result<Conversion, SvgTidyError> {
    let raw = tracer.trace(pixels, params)?;
    debug!(
        width = pixels.width(),
        height = pixels.height(),
        bytes = raw.len(),
        "traced image"
    );

    let optimized = optimize_with_options(&raw, options);
    let fell_back = !is_well_formed(&optimized) && is_well_formed(&raw);
    let svg = if fell_back {
        warn!("optimized svg is not well-formed, keeping tracer output");
        raw.clone()
    } else {
        optimized
    };

    Ok(Conversion {
        stats: SizeStats::measure(&raw, &svg),
        raw,
        svg,
        fell_back,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::new(width, height, vec![255; (width * height * 4) as usize]).unwrap()
    }

    #[test]
    fn test_pixel_buffer_validation() {
        assert!(matches!(
            PixelBuffer::new(0, 4, Vec::new()),
            Err(SvgTidyError::EmptyImage)
        ));
        assert!(matches!(
            PixelBuffer::new(2, 2, vec![0; 15]),
            Err(SvgTidyError::InvalidPixelBuffer {
                expected: 16,
                actual: 15,
                ..
            })
        ));
    }

    #[test]
    fn test_pixel_lookup() {
        let mut rgba = vec![0; 2 * 2 * 4];
        rgba[12..16].copy_from_slice(&[1, 2, 3, 4]);
        let pixels = PixelBuffer::new(2, 2, rgba).unwrap();
        assert_eq!(pixels.pixel(1, 1), Some([1, 2, 3, 4]));
        assert_eq!(pixels.pixel(2, 0), None);
    }

    #[test]
    fn test_default_params_are_aggressive() {
        let params = TraceParams::default();
        assert_eq!(params.line_threshold, 3.0);
        assert_eq!(params.curve_threshold, 2.0);
        assert_eq!(params.path_omit, 15);
        assert_eq!(params.colors, 2);
        assert_eq!(params.round_coords, 1);
    }

    #[test]
    fn test_convert_optimizes_tracer_output() {
        let tracer = |pixels: &PixelBuffer, _: &TraceParams| -> Result<String, SvgTidyError> {
            Ok(format!(
                "<svg width=\"{}\" height=\"{}\">\n  <path d=\"M0.25 0.75 L1.125 1.5\" fill=\"\" />\n</svg>",
                pixels.width(),
                pixels.height()
            ))
        };
        let conversion = convert(
            &tracer,
            &white(4, 3),
            &TraceParams::default(),
            &Options::default(),
        )
        .unwrap();

        assert!(!conversion.fell_back);
        assert_eq!(
            conversion.svg,
            r#"<svg width="4" height="3"><path d="M0.3 0.8 L1.1 1.5" /></svg>"#
        );
        assert_eq!(conversion.stats.compressed_size, conversion.svg.len());
        assert!(conversion.stats.ratio() > 0.0);
    }

    #[test]
    fn test_convert_falls_back_when_optimizing_breaks_markup() {
        // the comment pass eats the `<!--` inside the CDATA section
        let raw = "<svg><style><![CDATA[<!--]]></style><g></g><!-- --></svg>";
        let tracer =
            |_: &PixelBuffer, _: &TraceParams| -> Result<String, SvgTidyError> { Ok(raw.into()) };
        let conversion = convert(
            &tracer,
            &white(1, 1),
            &TraceParams::default(),
            &Options::default(),
        )
        .unwrap();

        assert!(conversion.fell_back);
        assert_eq!(conversion.svg, raw);
        assert_eq!(conversion.stats.ratio(), 0.0);
    }

    #[test]
    fn test_convert_propagates_tracer_errors() {
        let tracer = |_: &PixelBuffer, _: &TraceParams| -> Result<String, SvgTidyError> {
            Err(SvgTidyError::Trace("no paths".into()))
        };
        let err = convert(
            &tracer,
            &white(1, 1),
            &TraceParams::default(),
            &Options::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SvgTidyError::Trace(ref msg) if msg == "no paths"));
    }
}
