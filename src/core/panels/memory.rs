//! Memory panel: one graph per reported memory quantity

use ratatui::layout::Rect;

use crate::integrations::memory::{available_fields, MemoryField, MemoryReading};
use crate::stream::overlay::overlay_left;
use crate::stream::{BrailleStream, StreamError};
use crate::ui::format;

use super::{inner_size, split_evenly};

const GRAPH_WIDTH: usize = 40;
const GRAPH_HEIGHT: usize = 4;
const LABEL_WIDTH: usize = 5;

pub struct MemoryPanel {
    fields: Vec<MemoryField>,
    labels: Vec<String>,
    streams: Vec<BrailleStream>,
    last: MemoryReading,
}

impl MemoryPanel {
    /// The set of fields is fixed by the first reading.
    pub fn new(first: MemoryReading) -> Result<Self, StreamError> {
        let fields = available_fields(&first);
        let labels = labels(&fields);
        let streams = fields
            .iter()
            .map(|field| BrailleStream::new(GRAPH_WIDTH, GRAPH_HEIGHT, 0.0, graph_max(field, &first)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            fields,
            labels,
            streams,
            last: first,
        })
    }

    pub fn update(&mut self, reading: MemoryReading) {
        for (field, stream) in self.fields.iter().zip(&mut self.streams) {
            let max = graph_max(field, &reading);
            if max != stream.maxval() {
                if let Err(e) = stream.set_bounds(0.0, max) {
                    tracing::debug!(name = field.label, "memory bounds unchanged: {e}");
                }
            }
            stream.add_value((field.value)(&reading) as f64);
        }
        self.last = reading;
    }

    pub fn resize(&mut self, area: Rect) -> Result<(), StreamError> {
        let (width, height) = inner_size(area);
        let heights = split_evenly(height, self.streams.len());
        for (stream, height) in self.streams.iter_mut().zip(heights) {
            stream.resize_width(width.max(1))?;
            stream.resize_height(height)?;
        }
        Ok(())
    }

    pub fn title(&self) -> String {
        format!("mem - {}", format::bytes(self.last.total))
    }

    /// Graph rows per field, top to bottom, each labelled on its first row.
    pub fn field_rows(&self) -> Vec<Vec<String>> {
        self.fields
            .iter()
            .zip(&self.labels)
            .zip(&self.streams)
            .map(|((field, label), stream)| {
                let value = (field.value)(&self.last);
                let total = (field.total)(&self.last);
                let text = format!(
                    "{label} {} ({:.0}%)",
                    format::bytes_precise(value),
                    format::percent_of(value, total)
                );
                let mut rows = stream.graph();
                if let Some(top) = rows.first_mut() {
                    *top = overlay_left(top, &text);
                }
                rows
            })
            .collect()
    }
}

/// Labels cut to a common width, padded so the values line up.
fn labels(fields: &[MemoryField]) -> Vec<String> {
    let width = fields
        .iter()
        .map(|field| field.label.len())
        .max()
        .unwrap_or(0)
        .min(LABEL_WIDTH);
    fields
        .iter()
        .map(|field| {
            let label: String = field.label.chars().take(width).collect();
            format!("{label:<width$}")
        })
        .collect()
}

fn graph_max(field: &MemoryField, reading: &MemoryReading) -> f64 {
    ((field.total)(reading) as f64).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GIB: u64 = 1024 * 1024 * 1024;

    fn reading(swap_total: u64) -> MemoryReading {
        MemoryReading {
            total: 4 * GIB,
            used: GIB,
            available: 3 * GIB,
            free: 2 * GIB,
            swap_used: 0,
            swap_total,
        }
    }

    #[test]
    fn labels_share_width() {
        let panel = MemoryPanel::new(reading(GIB)).unwrap();
        assert_eq!(panel.labels, vec!["free ", "avail", "used ", "swap "]);
    }

    #[test]
    fn swap_only_when_present() {
        assert_eq!(MemoryPanel::new(reading(0)).unwrap().field_rows().len(), 3);
        assert_eq!(MemoryPanel::new(reading(GIB)).unwrap().field_rows().len(), 4);
    }

    #[test]
    fn label_overlays_first_row() {
        let mut panel = MemoryPanel::new(reading(0)).unwrap();
        panel.update(reading(0));

        let rows = panel.field_rows();
        let used = &rows[2];
        assert_eq!(used.len(), GRAPH_HEIGHT);
        assert!(used[0].starts_with("used  1"));
        assert!(used[0].contains("(25%)"));
        assert_eq!(used[0].chars().count(), GRAPH_WIDTH);
    }

    #[test]
    fn rows_split_with_remainder_first() {
        let mut panel = MemoryPanel::new(reading(GIB)).unwrap();
        panel.resize(Rect::new(0, 0, 30, 12)).unwrap();
        let heights: Vec<usize> = panel.field_rows().iter().map(Vec::len).collect();
        assert_eq!(heights, vec![3, 3, 2, 2]);
        assert!(panel.field_rows()[0].iter().all(|row| row.chars().count() == 28));
    }
}
