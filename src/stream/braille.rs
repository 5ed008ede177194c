//! Multi-row braille sparkline

use std::collections::VecDeque;

use super::error::{check_bounds, StreamError};
use super::glyphs::{self, Orientation};
use super::quantize;
use super::Sparkline;

/// One full glyph matrix, rows stored top to bottom.
type Matrix = Vec<VecDeque<char>>;

/// Rolling braille graph of `width` columns and `height` rows.
///
/// Every character column encodes two consecutive samples, so the stream
/// keeps two matrices whose column pairings are offset by one sample. Each
/// `add_value` writes the inactive matrix and then makes it the active one,
/// so a reader only ever sees fully formed columns.
#[derive(Debug, Clone)]
pub struct BrailleStream {
    width: usize,
    height: usize,
    minval: f64,
    maxval: f64,
    orientation: Orientation,
    auto_raise: bool,
    graphs: [Matrix; 2],
    active: usize,
    /// Row levels of the newest sample, bottom-most row first.
    pending: Vec<u8>,
    /// Raw samples, oldest first; always `2 * width + 1` long.
    history: VecDeque<f64>,
}

impl BrailleStream {
    pub fn new(width: usize, height: usize, minval: f64, maxval: f64) -> Result<Self, StreamError> {
        Self::with_orientation(width, height, minval, maxval, Orientation::Normal)
    }

    /// A stream whose dots hang from the top of each cell.
    pub fn flipped(width: usize, height: usize, minval: f64, maxval: f64) -> Result<Self, StreamError> {
        Self::with_orientation(width, height, minval, maxval, Orientation::Flipped)
    }

    pub fn with_orientation(
        width: usize,
        height: usize,
        minval: f64,
        maxval: f64,
        orientation: Orientation,
    ) -> Result<Self, StreamError> {
        check_size(width, height)?;
        check_bounds(minval, maxval)?;

        let blank = blank_matrix(width, height);
        Ok(Self {
            width,
            height,
            minval,
            maxval,
            orientation,
            auto_raise: false,
            graphs: [blank.clone(), blank],
            active: 0,
            pending: vec![0; height],
            history: std::iter::repeat(minval).take(2 * width + 1).collect(),
        })
    }

    /// Raise `maxval` to any sample that exceeds it, before quantizing that
    /// sample. Columns already drawn keep their old scale.
    pub fn with_auto_raise(mut self, enabled: bool) -> Self {
        self.auto_raise = enabled;
        self
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn minval(&self) -> f64 {
        self.minval
    }

    pub fn maxval(&self) -> f64 {
        self.maxval
    }

    #[cfg(test)]
    pub fn history(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.history.iter().copied()
    }

    /// Change the value range. Glyphs already drawn are not rescaled.
    pub fn set_bounds(&mut self, minval: f64, maxval: f64) -> Result<(), StreamError> {
        check_bounds(minval, maxval)?;
        self.minval = minval;
        self.maxval = maxval;
        Ok(())
    }

    /// Per-row levels for `value` at the current height, bottom row first.
    pub fn value_to_levels(&self, value: f64) -> Vec<u8> {
        quantize::row_levels(value, self.minval, self.maxval, self.height)
    }

    pub fn add_value(&mut self, value: f64) {
        // An infinite maximum would flatten every later sample.
        if self.auto_raise && value.is_finite() && value > self.maxval {
            self.maxval = value;
        }

        let levels = self.value_to_levels(value);
        let column = self.column(&self.pending, &levels);

        let next = 1 - self.active;
        for (row, glyph) in self.graphs[next].iter_mut().zip(column) {
            row.pop_front();
            row.push_back(glyph);
        }
        self.active = next;

        self.history.pop_front();
        self.history.push_back(value);
        self.pending = levels;
    }

    /// The visible rows, top to bottom.
    pub fn graph(&self) -> Vec<String> {
        self.graphs[self.active]
            .iter()
            .map(|row| row.iter().collect())
            .collect()
    }

    pub fn last_value(&self) -> f64 {
        self.history.back().copied().unwrap_or(self.minval)
    }

    pub fn resize_width(&mut self, width: usize) -> Result<(), StreamError> {
        check_size(width, self.height)?;
        if width == self.width {
            return Ok(());
        }

        if width > self.width {
            let extra = width - self.width;
            for matrix in &mut self.graphs {
                for row in matrix.iter_mut() {
                    for _ in 0..extra {
                        row.push_front(' ');
                    }
                }
            }
            for _ in 0..2 * extra {
                self.history.push_front(self.minval);
            }
        } else {
            let excess = self.width - width;
            for matrix in &mut self.graphs {
                for row in matrix.iter_mut() {
                    row.drain(..excess);
                }
            }
            self.history.drain(..2 * excess);
        }

        self.width = width;
        tracing::trace!(width, "braille stream width changed");
        Ok(())
    }

    pub fn resize_height(&mut self, height: usize) -> Result<(), StreamError> {
        check_size(self.width, height)?;
        if height == self.height {
            return Ok(());
        }
        self.height = height;
        self.rebuild();
        tracing::trace!(height, "braille stream height changed");
        Ok(())
    }

    /// Replace the history with `samples` (newest last) and redraw both
    /// matrices from it. Older samples beyond the window are dropped, a
    /// short series is padded on the left with `minval`.
    #[cfg(test)]
    pub fn load_history<I>(&mut self, samples: I)
    where
        I: IntoIterator<Item = f64>,
    {
        let len = 2 * self.width + 1;
        let mut history: VecDeque<f64> = samples.into_iter().collect();
        if history.len() > len {
            history.drain(..history.len() - len);
        }
        while history.len() < len {
            history.push_front(self.minval);
        }
        self.history = history;
        self.rebuild();
    }

    /// Redraw everything from `history`. Glyphs are lossy, so the matrices
    /// can never be converted from one height to another directly.
    fn rebuild(&mut self) {
        let levels: Vec<Vec<u8>> = self
            .history
            .iter()
            .map(|&value| self.value_to_levels(value))
            .collect();

        // Matrix `offset` pairs samples (2k + offset, 2k + offset + 1).
        let build = |offset: usize| -> Matrix {
            let mut matrix = blank_matrix(0, self.height);
            for k in 0..self.width {
                let column = self.column(&levels[2 * k + offset], &levels[2 * k + offset + 1]);
                for (row, glyph) in matrix.iter_mut().zip(column) {
                    row.push_back(glyph);
                }
            }
            matrix
        };
        let older = build(0);
        let newest = build(1);

        // The matrix that ends with the newest sample is the visible one.
        self.graphs = [newest, older];
        self.active = 0;
        self.pending = levels.last().cloned().unwrap_or_else(|| vec![0; self.height]);
    }

    /// Glyphs for one column, top row first.
    fn column(&self, left: &[u8], right: &[u8]) -> Vec<char> {
        let mut glyphs: Vec<char> = left
            .iter()
            .zip(right)
            .map(|(&l, &r)| glyphs::braille(self.orientation, l, r))
            .collect();
        // Levels run bottom-up; an upright graph shows the bottom row last.
        if !self.orientation.is_flipped() {
            glyphs.reverse();
        }
        glyphs
    }
}

impl Sparkline for BrailleStream {
    fn add_value(&mut self, value: f64) {
        BrailleStream::add_value(self, value);
    }

    fn rows(&self) -> Vec<String> {
        self.graph()
    }

    fn last_value(&self) -> f64 {
        BrailleStream::last_value(self)
    }

    fn width(&self) -> usize {
        self.width
    }

    fn resize_width(&mut self, width: usize) -> Result<(), StreamError> {
        BrailleStream::resize_width(self, width)
    }
}

fn check_size(width: usize, height: usize) -> Result<(), StreamError> {
    if width == 0 {
        return Err(StreamError::ZeroWidth);
    }
    if height == 0 {
        return Err(StreamError::ZeroHeight);
    }
    Ok(())
}

fn blank_matrix(width: usize, height: usize) -> Matrix {
    (0..height)
        .map(|_| std::iter::repeat(' ').take(width).collect())
        .collect()
}
