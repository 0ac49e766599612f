//! One to-do entry: checkbox + label + delete control. Reports upward through callbacks only.

use std::rc::Rc;

use egui::{Color32, Ui, vec2};

use crate::assets::{self, AssetStore};
use crate::sprite;
use crate::toggle::{ToggleImage, ToggleListener};

pub const ROW_HEIGHT: f32 = 40.0;
const CONTROL_SIZE: egui::Vec2 = egui::vec2(60.0, ROW_HEIGHT);

/// Process-local handle for a row; never persisted or shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowId(pub u64);

pub type RemoveCallback = Rc<dyn Fn(RowId)>;
pub type ProgressCallback = Rc<dyn Fn()>;

/// Plain view of a row's data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub text: String,
    pub completed: bool,
}

pub struct TodoRow {
    id: RowId,
    text: String,
    checkbox: ToggleImage,
    remove_callback: RemoveCallback,
    progress_callback: Option<ProgressCallback>,
}

impl TodoRow {
    pub fn new(
        id: RowId,
        text: impl Into<String>,
        remove_callback: RemoveCallback,
        progress_callback: Option<ProgressCallback>,
    ) -> Self {
        let on_state = progress_callback.clone().map(|progress| {
            Box::new(move |_: &ToggleImage, _: bool| progress()) as ToggleListener
        });
        Self {
            id,
            text: text.into(),
            checkbox: ToggleImage::new(false, on_state),
            remove_callback,
            progress_callback,
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.checkbox.is_active()
    }

    pub fn checkbox(&self) -> &ToggleImage {
        &self.checkbox
    }

    pub fn task(&self) -> Task {
        Task {
            text: self.text.clone(),
            completed: self.is_completed(),
        }
    }

    /// Checkbox clicked; the checkbox listener forwards to the progress callback.
    pub fn on_toggle(&mut self) {
        self.checkbox.toggle();
    }

    /// Delete clicked: ask the owner to drop this row, then report progress.
    pub fn remove_item(&self) {
        (self.remove_callback)(self.id);
        if let Some(progress) = &self.progress_callback {
            progress();
        }
    }

    pub fn show(&mut self, ui: &mut Ui, store: &mut AssetStore) {
        ui.allocate_ui_with_layout(
            vec2(ui.available_width(), ROW_HEIGHT),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                if sprite::image_button(ui, store, self.checkbox.source(), CONTROL_SIZE).clicked() {
                    self.on_toggle();
                }

                let label_width = (ui.available_width() - CONTROL_SIZE.x).max(0.0);
                ui.add_sized(
                    [label_width, ROW_HEIGHT],
                    egui::Label::new(egui::RichText::new(&self.text).color(Color32::WHITE))
                        .halign(egui::Align::Min)
                        .wrap(),
                );

                if sprite::image_button(ui, store, assets::DELETE_BUTTON, CONTROL_SIZE).clicked() {
                    self.remove_item();
                }
            },
        );
    }
}
