//! Application core: event loop, state and panel models

pub mod app;
pub mod events;
pub mod panels;
pub mod state;
