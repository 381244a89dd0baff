//! Shared building blocks for the dashboard screens.
pub mod coin_icon;
pub mod empty_state;
pub mod pico;
