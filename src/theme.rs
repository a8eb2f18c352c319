//! Theme value and the shared holder the animation loop reads each pass.

use std::cell::Cell;
use std::rc::Rc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The two visual ensembles the engine can draw.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Star field with constellation overlays.
    #[default]
    Dark,
    /// Clouds with floating petals and glow motes.
    Light,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Whether this is the dark theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Shared, externally written theme holder.
///
/// The theme authority keeps one clone and writes it; the animation loop
/// keeps another and reads it fresh on every pass. Clones share the same
/// cell, so a write is visible on the next pass without restarting the loop.
#[derive(Debug, Clone, Default)]
pub struct ThemeCell(Rc<Cell<Theme>>);

impl ThemeCell {
    /// New holder starting at `theme`.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self(Rc::new(Cell::new(theme)))
    }

    /// Current theme.
    #[must_use]
    pub fn get(&self) -> Theme {
        self.0.get()
    }

    /// Replace the current theme.
    pub fn set(&self, theme: Theme) {
        self.0.set(theme);
    }

    /// Flip between dark and light, returning the new value.
    pub fn toggle(&self) -> Theme {
        let next = self.get().toggled();
        self.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_observe_writes() {
        let authority = ThemeCell::new(Theme::Dark);
        let reader = authority.clone();
        assert_eq!(authority.toggle(), Theme::Light);
        assert_eq!(reader.get(), Theme::Light);
        authority.set(Theme::Dark);
        assert!(reader.get().is_dark());
    }

    #[test]
    fn theme_serializes_snake_case() {
        let json = serde_json::to_string(&Theme::Light).unwrap();
        assert_eq!(json, "\"light\"");
    }
}
