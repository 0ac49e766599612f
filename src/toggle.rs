//! Two-image checkbox: flips between the checked and empty sprite and notifies a listener

use crate::assets;

/// Called after every flip with the control and its new state.
pub type ToggleListener = Box<dyn FnMut(&ToggleImage, bool)>;

pub struct ToggleImage {
    active: bool,
    source: &'static str,
    on_state: Option<ToggleListener>,
}

impl ToggleImage {
    pub fn new(active: bool, on_state: Option<ToggleListener>) -> Self {
        let mut toggle = Self {
            active,
            source: assets::CHECKBOX_OFF,
            on_state,
        };
        toggle.update_image();
        toggle
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Asset name for the current state.
    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
        self.update_image();
        if let Some(mut listener) = self.on_state.take() {
            listener(self, self.active);
            self.on_state = Some(listener);
        }
    }

    fn update_image(&mut self) {
        self.source = if self.active {
            assets::CHECKBOX_ON
        } else {
            assets::CHECKBOX_OFF
        };
    }
}

impl std::fmt::Debug for ToggleImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleImage")
            .field("active", &self.active)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
