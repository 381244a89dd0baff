//! Input the view model consumes each frame.

use crate::plan::DetailTab;
use crate::plan::Tab;

/// The keys the dashboard distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: KeyCode,
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyPress {
    pub fn new(key: KeyCode) -> Self {
        Self {
            key,
            control: false,
            shift: false,
            alt: false,
        }
    }

    pub fn with_control(mut self) -> Self {
        self.control = true;
        self
    }

    /// Ctrl+R, in either case.
    pub fn is_reload_chord(&self) -> bool {
        self.control && matches!(self.key, KeyCode::Char(c) if c.eq_ignore_ascii_case(&'r'))
    }
}

/// Position and size of the window, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WindowGeometry {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    KeyPressed(KeyPress),
    SelectAsset { index: usize, ticker: String },
    SelectTab(Tab),
    SelectDetailTab(DetailTab),
    OpenEnableDialog,
    CloseEnableDialog,
    CloseWindow,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameInput {
    pub window: WindowGeometry,
    pub events: Vec<UiEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reload_chord_needs_control() {
        assert!(KeyPress::new(KeyCode::Char('r')).with_control().is_reload_chord());
        assert!(KeyPress::new(KeyCode::Char('R')).with_control().is_reload_chord());
        assert!(!KeyPress::new(KeyCode::Char('r')).is_reload_chord());
        assert!(!KeyPress::new(KeyCode::Char('o')).with_control().is_reload_chord());
        assert!(!KeyPress::new(KeyCode::Escape).with_control().is_reload_chord());
    }
}
