//! Application state shared between the event loop and the renderer

use parking_lot::RwLock;
use ratatui::layout::Rect;

use crate::core::panels::Panels;
use crate::stream::StreamError;
use crate::ui::layout::{ComputedLayout, LayoutManager};
use crate::ui::theme::Theme;

/// Main application state
pub struct AppState {
    pub panels: Panels,
    pub theme: Theme,
    pub layout: ComputedLayout,
    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(panels: Panels, theme: Theme) -> Self {
        Self {
            panels,
            theme,
            layout: ComputedLayout::default(),
            terminal_size: (0, 0),
        }
    }

    /// Lay the dashboard out for a new terminal size and fit every stream
    /// to its panel.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<(), StreamError> {
        self.terminal_size = (width, height);
        self.layout = LayoutManager::compute(
            Rect::new(0, 0, width, height),
            self.panels.network.is_some(),
            self.panels.battery.is_some(),
        );
        tracing::debug!(width, height, "layout recomputed");
        self.panels.resize(&self.layout)
    }
}

/// State store guarding mutation behind a lock
pub struct StateStore {
    state: RwLock<AppState>,
}

impl StateStore {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: RwLock::new(initial),
        }
    }

    /// Mutate the state, returning whatever the mutator returns
    pub fn update<F, R>(&self, mutator: F) -> R
    where
        F: FnOnce(&mut AppState) -> R,
    {
        let mut state = self.state.write();
        mutator(&mut state)
    }

    /// Read current state
    pub fn read(&self) -> parking_lot::RwLockReadGuard<'_, AppState> {
        self.state.read()
    }
}
