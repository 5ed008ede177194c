//! CPU panel: total load, package temperature and per-thread graphs

use ratatui::layout::Rect;

use crate::config::{CpuConfig, ThreadGraph};
use crate::integrations::cpu::{CpuInfo, CpuReading, Topology};
use crate::stream::overlay::overlay_right;
use crate::stream::{BlockCharStream, BrailleStream, Sparkline, StreamError};

use super::inner_size;

const GRAPH_WIDTH: usize = 50;
const GRAPH_HEIGHT: usize = 7;
const THREAD_GRAPH_WIDTH: usize = 10;
const CORE_TEMP_WIDTH: usize = 5;

/// One row of the per-thread box. The first thread of every core also
/// carries that core's temperature, when known.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadRow {
    pub thread: usize,
    pub graph: String,
    pub load: f64,
    pub core_temp: Option<(String, f64)>,
}

pub struct CpuPanel {
    brand: String,
    topology: Topology,
    total: BrailleStream,
    temp: Option<BrailleStream>,
    /// Cleared when the panel is too short to show both graphs.
    temp_visible: bool,
    /// Indexed by logical thread id.
    threads: Vec<Box<dyn Sparkline + Send + Sync>>,
    /// Indexed by physical core.
    core_temps: Vec<BrailleStream>,
    /// Number of cores the last reading had a temperature for.
    core_temps_seen: usize,
    frequency_mhz: Option<u64>,
}

impl CpuPanel {
    pub fn new(info: &CpuInfo, config: &CpuConfig, thread_graph: ThreadGraph) -> Result<Self, StreamError> {
        let total = BrailleStream::new(GRAPH_WIDTH, GRAPH_HEIGHT, 0.0, 100.0)?;

        let temp = info.temp_high.and_then(|high| {
            match BrailleStream::flipped(GRAPH_WIDTH, GRAPH_HEIGHT, config.temp_low, high) {
                Ok(stream) => Some(stream),
                Err(e) => {
                    tracing::warn!("temperature graph disabled: {e}");
                    None
                }
            }
        });

        let threads = (0..info.topology.num_threads())
            .map(|_| thread_stream(thread_graph))
            .collect::<Result<Vec<_>, _>>()?;

        let core_temps = match &temp {
            Some(stream) => (0..info.topology.num_cores())
                .map(|_| BrailleStream::new(CORE_TEMP_WIDTH, 1, stream.minval(), stream.maxval()))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            brand: info.brand.clone(),
            topology: info.topology.clone(),
            total,
            temp,
            temp_visible: true,
            threads,
            core_temps,
            core_temps_seen: 0,
            frequency_mhz: None,
        })
    }

    pub fn update(&mut self, reading: &CpuReading) {
        self.total.add_value(reading.total_percent);
        if let (Some(stream), Some(temp)) = (self.temp.as_mut(), reading.package_temp) {
            stream.add_value(temp);
        }
        for (stream, load) in self.threads.iter_mut().zip(&reading.per_thread) {
            stream.add_value(*load);
        }
        for (stream, temp) in self.core_temps.iter_mut().zip(&reading.core_temps) {
            stream.add_value(*temp);
        }
        self.core_temps_seen = reading.core_temps.len().min(self.core_temps.len());
        self.frequency_mhz = reading.frequency_mhz;
    }

    /// Fit the big graphs next to the thread box inside `area`.
    pub fn resize(&mut self, area: Rect) -> Result<(), StreamError> {
        let (width, height) = inner_size(area);

        // The thread box never takes more than half the panel.
        let thread_width = THREAD_GRAPH_WIDTH
            .min((width / 2).saturating_sub(self.box_overhead()))
            .max(1);
        for stream in &mut self.threads {
            stream.resize_width(thread_width)?;
        }

        let graph_width = width.saturating_sub(self.thread_box_width() + 1).max(1);
        let (load_height, temp_height) = split_height(height, self.temp.is_some());

        self.total.resize_width(graph_width)?;
        self.total.resize_height(load_height)?;
        self.temp_visible = temp_height > 0;
        if let Some(temp) = self.temp.as_mut().filter(|_| temp_height > 0) {
            temp.resize_width(graph_width)?;
            temp.resize_height(temp_height)?;
        }
        tracing::debug!(graph_width, thread_width, load_height, temp_height, "cpu panel resized");
        Ok(())
    }

    pub fn title(&self) -> String {
        format!("cpu - {}", self.brand)
    }

    pub fn box_title(&self) -> String {
        format!(
            "{} threads, {} cores",
            self.topology.num_threads(),
            self.topology.num_cores()
        )
    }

    pub fn frequency(&self) -> Option<String> {
        self.frequency_mhz.map(|mhz| format!("{mhz:4} MHz"))
    }

    /// Load rows with the newest value written over the top row.
    pub fn load_rows(&self) -> Vec<String> {
        let mut rows = self.total.graph();
        if let Some(top) = rows.first_mut() {
            *top = overlay_right(top, &format!(" {:5.1}%", self.total.last_value()));
        }
        rows
    }

    /// Temperature rows with the newest value written over the bottom row.
    /// Empty without a temperature sensor or when the panel is one row tall.
    pub fn temp_rows(&self) -> Vec<String> {
        let Some(temp) = self.temp.as_ref().filter(|_| self.temp_visible) else {
            return Vec::new();
        };
        let mut rows = temp.graph();
        if let Some(bottom) = rows.last_mut() {
            *bottom = overlay_right(bottom, &format!(" {:3.0}°C", temp.last_value()));
        }
        rows
    }

    /// Thread rows grouped by physical core.
    pub fn thread_rows(&self) -> Vec<ThreadRow> {
        let mut rows = Vec::with_capacity(self.threads.len());
        for (core, threads) in self.topology.cores().iter().enumerate() {
            for (position, &thread) in threads.iter().enumerate() {
                let Some(stream) = self.threads.get(thread) else {
                    continue;
                };
                let core_temp = (position == 0 && core < self.core_temps_seen).then(|| {
                    let temp = &self.core_temps[core];
                    (temp.graph().concat(), temp.last_value())
                });
                rows.push(ThreadRow {
                    thread,
                    graph: stream.rows().concat(),
                    load: stream.last_value(),
                    core_temp,
                });
            }
        }
        rows
    }

    /// Outer width of the thread box, borders included.
    pub fn thread_box_width(&self) -> usize {
        let graph = self.threads.first().map_or(THREAD_GRAPH_WIDTH, |stream| stream.width());
        graph + self.box_overhead()
    }

    /// Thread box columns besides the thread graph itself.
    fn box_overhead(&self) -> usize {
        // " 100%", borders
        let mut width = 5 + 2;
        if !self.core_temps.is_empty() {
            // " ", graph, " 100°C"
            width += 1 + CORE_TEMP_WIDTH + 6;
        }
        width
    }
}

fn thread_stream(kind: ThreadGraph) -> Result<Box<dyn Sparkline + Send + Sync>, StreamError> {
    Ok(match kind {
        ThreadGraph::Braille => Box::new(BrailleStream::new(THREAD_GRAPH_WIDTH, 1, 0.0, 100.0)?),
        ThreadGraph::Block => Box::new(BlockCharStream::new(THREAD_GRAPH_WIDTH, 0.0, 100.0)?),
    })
}

/// Load gets the lower half of the rows, temperature the rest. A single
/// row only fits the load graph.
fn split_height(height: usize, with_temp: bool) -> (usize, usize) {
    if with_temp && height >= 2 {
        (height / 2, height - height / 2)
    } else {
        (height.max(1), 0)
    }
}
