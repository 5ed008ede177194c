//! A pair of opposed rate graphs with running maxima and totals

use crate::stream::{BrailleStream, StreamError};
use crate::ui::format;

pub const GRAPH_WIDTH: usize = 20;
pub const GRAPH_HEIGHT: usize = 5;
/// Outer width of each side box, borders included.
pub const BOX_WIDTH: usize = 22;

/// Read/write or down/up. The second graph is drawn upside down under the
/// first so the two directions face each other.
pub struct Throughput {
    labels: [&'static str; 2],
    streams: [BrailleStream; 2],
    max_rates: [f64; 2],
    totals: [u64; 2],
}

impl Throughput {
    pub fn new(labels: [&'static str; 2], maxval: f64, auto_raise: bool) -> Result<Self, StreamError> {
        let upper = BrailleStream::new(GRAPH_WIDTH, GRAPH_HEIGHT, 0.0, maxval)?.with_auto_raise(auto_raise);
        let lower = BrailleStream::flipped(GRAPH_WIDTH, GRAPH_HEIGHT, 0.0, maxval)?.with_auto_raise(auto_raise);
        Ok(Self {
            labels,
            streams: [upper, lower],
            max_rates: [0.0; 2],
            totals: [0; 2],
        })
    }

    /// A direction without a rate keeps its graph as it is.
    pub fn update(&mut self, rates: [Option<f64>; 2], totals: [u64; 2]) {
        for ((stream, peak), rate) in self.streams.iter_mut().zip(&mut self.max_rates).zip(rates) {
            if let Some(rate) = rate {
                stream.add_value(rate);
                *peak = peak.max(rate);
            }
        }
        self.totals = totals;
    }

    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), StreamError> {
        for stream in &mut self.streams {
            stream.resize_width(width.max(1))?;
            stream.resize_height(height.max(1))?;
        }
        Ok(())
    }

    pub fn graph_height(&self) -> usize {
        self.streams[0].height()
    }

    /// Rows of the upper graph followed by the flipped lower one.
    pub fn graph_rows(&self) -> Vec<String> {
        self.streams.iter().flat_map(BrailleStream::graph).collect()
    }

    /// Current rate, maximum and total for one direction.
    pub fn side_box(&self, index: usize) -> [String; 3] {
        [
            format!("{:<5} {}", self.labels[index], format::rate(self.streams[index].last_value())),
            format!("{:<5} {}", "max", format::rate(self.max_rates[index])),
            format!("{:<5} {}", "total", format::bytes(self.totals[index])),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_max_and_skips_missing_rates() {
        let mut io = Throughput::new(["read", "write"], 1e6, false).unwrap();
        io.update([None, None], [0, 0]);
        io.update([Some(2048.0), Some(10.0)], [4096, 10]);
        io.update([Some(1024.0), None], [5120, 10]);

        let read = io.side_box(0);
        assert!(read[0].starts_with("read  1"));
        assert!(read[1].starts_with("max   2"));
        assert!(read[2].starts_with("total 5"));
        assert_eq!(io.max_rates, [2048.0, 10.0]);
    }

    #[test]
    fn lower_graph_is_flipped() {
        let mut io = Throughput::new(["down", "up"], 100.0, false).unwrap();
        io.resize(3, 1).unwrap();
        io.update([Some(100.0), Some(100.0)], [0, 0]);
        let rows = io.graph_rows();
        assert_eq!(rows, vec!["  ⢸".to_string(), "  ⢸".to_string()]);
        assert_eq!(io.graph_height(), 1);
    }

    #[test]
    fn auto_raise_lifts_maxval() {
        let mut io = Throughput::new(["down", "up"], 100.0, true).unwrap();
        io.update([Some(400.0), None], [0, 0]);
        assert_eq!(io.streams[0].maxval(), 400.0);
        assert_eq!(io.streams[1].maxval(), 100.0);
    }
}
