//! Streaming sparkline engine
//!
//! A stream ingests a scalar time series and keeps a fixed-size glyph matrix
//! up to date. [`BrailleStream`] packs two samples and four vertical
//! sub-units into every character cell; [`BlockCharStream`] is the simpler
//! one-sample-per-column variant.

mod blockchar;
mod braille;
mod error;
pub mod glyphs;
pub mod overlay;
pub mod quantize;

pub use blockchar::BlockCharStream;
pub use braille::BrailleStream;
pub use error::StreamError;

/// Common surface of every rolling graph a panel can own.
pub trait Sparkline {
    /// Append one sample, dropping the oldest.
    fn add_value(&mut self, value: f64);

    /// Rendered rows, top to bottom.
    fn rows(&self) -> Vec<String>;

    /// Most recent sample.
    fn last_value(&self) -> f64;

    /// Number of character columns.
    fn width(&self) -> usize;

    /// Change the number of character columns, keeping the newest samples.
    fn resize_width(&mut self, width: usize) -> Result<(), StreamError>;
}
