//! Unified event handling system

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

use crate::config::{period, IntervalsConfig};

/// Something that is sampled on its own schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Cpu,
    Memory,
    Disk,
    Network,
    Processes,
    Battery,
    /// The local IP address shown in the network panel.
    Addresses,
    /// Info line clock and uptime.
    Clock,
}

impl Source {
    pub const ALL: [Source; 8] = [
        Source::Cpu,
        Source::Memory,
        Source::Disk,
        Source::Network,
        Source::Processes,
        Source::Battery,
        Source::Addresses,
        Source::Clock,
    ];

    pub fn interval(self, intervals: &IntervalsConfig) -> Duration {
        period(match self {
            Source::Cpu => intervals.cpu,
            Source::Memory => intervals.memory,
            Source::Disk => intervals.disk,
            Source::Network => intervals.network,
            Source::Processes => intervals.processes,
            Source::Battery => intervals.battery,
            Source::Addresses => intervals.addresses,
            Source::Clock => intervals.clock,
        })
    }
}

/// All possible events in the system
#[derive(Debug, Clone)]
pub enum Event {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    /// A source is due for sampling.
    Sample(Source),

    // Lifecycle
    Quit,
}

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new() -> (Self, mpsc::UnboundedSender<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx }, tx)
    }

    /// Start the terminal reader and one ticker per scheduled source.
    pub fn spawn_sources(event_tx: mpsc::UnboundedSender<Event>, schedule: Vec<(Source, Duration)>) {
        tokio::spawn(Self::terminal_events(event_tx.clone()));

        for (source, interval) in schedule {
            tracing::debug!(?source, ?interval, "ticker started");
            tokio::spawn(Self::tick_events(event_tx.clone(), interval, source));
        }
    }

    async fn terminal_events(tx: mpsc::UnboundedSender<Event>) {
        use crossterm::event::{self, Event as CrosstermEvent};
        use futures::StreamExt;

        let mut reader = event::EventStream::new();
        while let Some(event_result) = reader.next().await {
            let event = match event_result {
                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => Event::Key(key),
                Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!("terminal input failed: {e}");
                    let _ = tx.send(Event::Quit);
                    break;
                }
            };
            if tx.send(event).is_err() {
                break;
            }
        }
    }

    /// The first tick fires one interval after start; sources are sampled
    /// once before the loop begins.
    async fn tick_events(tx: mpsc::UnboundedSender<Event>, interval: Duration, source: Source) {
        let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if tx.send(Event::Sample(source)).is_err() {
                break;
            }
        }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key binding helper
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.code == self.key && event.modifiers == self.modifiers
    }
}

/// Standard key bindings
pub struct KeyBindings;

impl KeyBindings {
    pub fn quit() -> KeyBinding {
        KeyBinding::new(KeyCode::Char('q'))
    }

    pub fn quit_alt() -> KeyBinding {
        KeyBinding::ctrl(KeyCode::Char('c'))
    }

    pub fn escape() -> KeyBinding {
        KeyBinding::new(KeyCode::Esc)
    }

    pub fn is_quit(key: &KeyEvent) -> bool {
        [Self::quit(), Self::quit_alt(), Self::escape()]
            .iter()
            .any(|binding| binding.matches(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        let press = |code, modifiers| KeyEvent::new(code, modifiers);
        assert!(KeyBindings::is_quit(&press(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(KeyBindings::is_quit(&press(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(KeyBindings::is_quit(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!KeyBindings::is_quit(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!KeyBindings::is_quit(&press(KeyCode::Char('x'), KeyModifiers::NONE)));
    }

    #[test]
    fn intervals_come_from_config() {
        let intervals = IntervalsConfig::default();
        assert_eq!(Source::Processes.interval(&intervals), Duration::from_secs(6));
        assert_eq!(Source::Clock.interval(&intervals), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn ticker_sends_samples() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(EventHandler::tick_events(tx, Duration::from_millis(10), Source::Memory));

        for _ in 0..2 {
            let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
                .await
                .expect("ticker stalled");
            assert!(matches!(event, Some(Event::Sample(Source::Memory))));
        }

        drop(rx);
        tokio::time::timeout(Duration::from_secs(2), task)
            .await
            .expect("ticker kept running")
            .unwrap();
    }
}
