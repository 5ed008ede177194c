//! Single-row eighth-block sparkline

use std::collections::VecDeque;

use super::error::{check_bounds, StreamError};
use super::glyphs::BLOCKS;
use super::quantize;
use super::Sparkline;

/// One sample per column, eight vertical levels per cell.
#[derive(Debug, Clone)]
pub struct BlockCharStream {
    graph: VecDeque<char>,
    minval: f64,
    maxval: f64,
    last_value: f64,
}

impl BlockCharStream {
    pub fn new(width: usize, minval: f64, maxval: f64) -> Result<Self, StreamError> {
        if width == 0 {
            return Err(StreamError::ZeroWidth);
        }
        check_bounds(minval, maxval)?;
        Ok(Self {
            graph: std::iter::repeat(' ').take(width).collect(),
            minval,
            maxval,
            last_value: minval,
        })
    }

    pub fn add_value(&mut self, value: f64) {
        let level = quantize::level(value, self.minval, self.maxval, BLOCKS.len() - 1);
        self.graph.pop_front();
        self.graph.push_back(BLOCKS[level]);
        self.last_value = value;
    }

    pub fn graph(&self) -> String {
        self.graph.iter().collect()
    }
}

impl Sparkline for BlockCharStream {
    fn add_value(&mut self, value: f64) {
        BlockCharStream::add_value(self, value);
    }

    fn rows(&self) -> Vec<String> {
        vec![self.graph()]
    }

    fn last_value(&self) -> f64 {
        self.last_value
    }

    fn width(&self) -> usize {
        self.graph.len()
    }

    fn resize_width(&mut self, width: usize) -> Result<(), StreamError> {
        if width == 0 {
            return Err(StreamError::ZeroWidth);
        }
        let current = self.graph.len();
        if width > current {
            for _ in current..width {
                self.graph.push_front(' ');
            }
        } else {
            self.graph.drain(..current - width);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_sample_per_column() {
        let mut stream = BlockCharStream::new(5, 0.0, 100.0).unwrap();

        stream.add_value(10.0);
        assert_eq!(stream.graph(), "    ▁");

        stream.add_value(30.0);
        assert_eq!(stream.graph(), "   ▁▃");

        stream.add_value(60.0);
        assert_eq!(stream.graph(), "  ▁▃▅");

        stream.add_value(90.0);
        assert_eq!(stream.graph(), " ▁▃▅█");
    }

    #[test]
    fn clamps_and_resizes() {
        let mut stream = BlockCharStream::new(3, 0.0, 100.0).unwrap();
        stream.add_value(-10.0);
        stream.add_value(500.0);
        assert_eq!(stream.graph(), "  █");
        assert_eq!(stream.last_value(), 500.0);

        stream.resize_width(5).unwrap();
        assert_eq!(stream.graph(), "    █");
        stream.resize_width(1).unwrap();
        assert_eq!(stream.graph(), "█");
        assert_eq!(stream.resize_width(0), Err(StreamError::ZeroWidth));
    }
}
