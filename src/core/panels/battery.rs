//! Battery panel: charge history filling the panel

use ratatui::layout::Rect;

use crate::integrations::battery::{status_text, BatteryReading};
use crate::stream::{BrailleStream, StreamError};

use super::inner_size;

const CRITICAL_PERCENT: f64 = 15.0;

pub struct BatteryPanel {
    stream: BrailleStream,
    last: Option<BatteryReading>,
}

impl BatteryPanel {
    pub fn new() -> Result<Self, StreamError> {
        Ok(Self {
            stream: BrailleStream::new(40, 3, 0.0, 100.0)?,
            last: None,
        })
    }

    /// A failed read keeps the previous title and graph.
    pub fn update(&mut self, reading: Option<BatteryReading>) {
        if let Some(reading) = reading {
            self.stream.add_value(reading.percent);
            self.last = Some(reading);
        }
    }

    pub fn resize(&mut self, area: Rect) -> Result<(), StreamError> {
        let (width, height) = inner_size(area);
        self.stream.resize_width(width.max(1))?;
        self.stream.resize_height(height.max(1))
    }

    pub fn title(&self) -> String {
        match &self.last {
            Some(reading) => format!("battery - {:.1}% - {}", reading.percent, status_text(reading)),
            None => "battery".to_string(),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.last
            .map_or(false, |reading| !reading.plugged && reading.percent < CRITICAL_PERCENT)
    }

    pub fn rows(&self) -> Vec<String> {
        self.stream.graph()
    }
}
