//! Main application orchestrator

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::time::Duration;

use crate::config::Config;
use crate::core::events::{Event, EventHandler, EventResult, KeyBindings, Source};
use crate::core::panels::{
    BatteryPanel, CpuPanel, DiskPanel, InfoLine, MemoryPanel, NetworkPanel, Panels, ProcessPanel,
};
use crate::core::state::{AppState, StateStore};
use crate::integrations::battery::BatterySampler;
use crate::integrations::cpu::CpuSampler;
use crate::integrations::disk::DiskSampler;
use crate::integrations::host::HostInfo;
use crate::integrations::memory::MemorySampler;
use crate::integrations::network::{local_ipv4, NetworkSampler};
use crate::integrations::processes::ProcessSampler;
use crate::ui::renderer::Renderer;
use crate::ui::theme::Theme;

/// Adapters for every sensor found at startup.
struct Sensors {
    cpu: CpuSampler,
    memory: MemorySampler,
    disk: DiskSampler,
    network: Option<NetworkSampler>,
    battery: Option<BatterySampler>,
    processes: ProcessSampler,
}

impl Sensors {
    fn has(&self, source: Source) -> bool {
        match source {
            Source::Network | Source::Addresses => self.network.is_some(),
            Source::Battery => self.battery.is_some(),
            _ => true,
        }
    }
}

pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: StateStore,
    sensors: Sensors,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        // Initialize terminal
        let backend = CrosstermBackend::new(std::io::stdout());
        let terminal = Terminal::new(backend)?;

        // Load theme
        let theme = Theme::from_name(&config.display.theme);

        // Probe sensors; whatever is missing gets no panel
        let mut sensors = Sensors {
            cpu: CpuSampler::new(config.cpu.temp_high_fallback),
            memory: MemorySampler::new(),
            disk: DiskSampler::new(config.disk.skip_loop_devices),
            network: NetworkSampler::new(config.network.interface.clone()),
            battery: BatterySampler::probe(),
            processes: ProcessSampler::new(),
        };
        tracing::info!(
            network = sensors.network.is_some(),
            battery = sensors.battery.is_some(),
            "sensors probed"
        );

        let panels = Panels {
            info: InfoLine::new(HostInfo::probe()),
            cpu: CpuPanel::new(sensors.cpu.info(), &config.cpu, config.display.thread_graph)?,
            memory: MemoryPanel::new(sensors.memory.sample())?,
            disk: DiskPanel::new(&config.disk)?,
            network: sensors
                .network
                .as_ref()
                .map(|sampler| NetworkPanel::new(sampler.interface(), &config.network))
                .transpose()?,
            battery: sensors
                .battery
                .as_ref()
                .map(|_| BatteryPanel::new())
                .transpose()?,
            processes: ProcessPanel::default(),
        };

        Ok(Self {
            terminal,
            state: StateStore::new(AppState::new(panels, theme)),
            sensors,
            config,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        self.setup_terminal()?;

        let result = self.run_dashboard().await;

        // Cleanup, even when the loop failed
        self.shutdown()?;
        result
    }

    async fn run_dashboard(&mut self) -> Result<()> {
        let size = self.terminal.size()?;
        self.state.update(|s| s.resize(size.width, size.height))?;

        // Prime every panel before first render
        for source in Source::ALL {
            if self.sensors.has(source) {
                self.sample(source);
            }
        }

        // Spawn background tasks
        let (mut event_handler, event_tx) = EventHandler::new();
        EventHandler::spawn_sources(event_tx, self.schedule());

        // Initial render
        self.render()?;

        // Main event loop
        self.event_loop(&mut event_handler).await
    }

    fn setup_terminal(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::EnterAlternateScreen,
            crossterm::cursor::Hide,
        )?;
        tracing::info!("terminal ready");
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        crossterm::terminal::disable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show,
        )?;
        tracing::info!("terminal restored");
        Ok(())
    }

    /// One ticker per source this machine can sample.
    fn schedule(&self) -> Vec<(Source, Duration)> {
        Source::ALL
            .into_iter()
            .filter(|source| self.sensors.has(*source))
            .map(|source| (source, source.interval(&self.config.intervals)))
            .collect()
    }

    async fn event_loop(&mut self, event_handler: &mut EventHandler) -> Result<()> {
        while let Some(event) = event_handler.next().await {
            if self.handle_event(event)? == EventResult::Quit {
                tracing::info!("quit requested");
                break;
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<EventResult> {
        match event {
            Event::Key(key) => return Ok(self.handle_key(key)),
            Event::Resize(w, h) => {
                self.state.update(|s| s.resize(w, h))?;
            }
            Event::Sample(source) => self.sample(source),
            Event::Quit => return Ok(EventResult::Quit),
        }

        self.render()?;
        Ok(EventResult::Continue)
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if KeyBindings::is_quit(&key) {
            EventResult::Quit
        } else {
            EventResult::Continue
        }
    }

    /// Read one sensor and feed its panel.
    fn sample(&mut self, source: Source) {
        let sensors = &mut self.sensors;
        self.state.update(|s| {
            let panels = &mut s.panels;
            match source {
                Source::Cpu => panels.cpu.update(&sensors.cpu.sample()),
                Source::Memory => panels.memory.update(sensors.memory.sample()),
                Source::Disk => panels.disk.update(sensors.disk.sample()),
                Source::Network => {
                    if let (Some(sampler), Some(panel)) =
                        (sensors.network.as_mut(), panels.network.as_mut())
                    {
                        panel.update(&sampler.sample());
                    }
                }
                Source::Processes => panels.processes.update(sensors.processes.sample()),
                Source::Battery => {
                    if let (Some(sampler), Some(panel)) =
                        (sensors.battery.as_mut(), panels.battery.as_mut())
                    {
                        panel.update(sampler.sample());
                    }
                }
                Source::Addresses => {
                    if let Some(panel) = panels.network.as_mut() {
                        panel.set_address(local_ipv4());
                    }
                }
                Source::Clock => panels.info.tick(),
            }
        });
    }

    fn render(&mut self) -> Result<()> {
        let state = self.state.read();
        self.terminal
            .draw(|frame| Renderer::render(frame, &state))?;
        Ok(())
    }
}
