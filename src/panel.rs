//! Bordered rounded-rectangle container (border layer + fill layer) that tracks its bounds

use egui::{Color32, Rect, Ui};

/// Border thickness around the fill, on every side.
const BORDER_WIDTH: f32 = 2.0;
/// The fill's corner radius is this much smaller than the border's.
const INNER_RADIUS_INSET: f32 = 3.0;
const PADDING: f32 = 10.0;

pub struct BorderedPanel {
    fill: Color32,
    border_color: Color32,
    radius: f32,
    rect: Rect,
    border: Rect,
    bg: Rect,
}

impl BorderedPanel {
    pub fn new(fill: Color32, border_color: Color32, radius: f32) -> Self {
        Self {
            fill,
            border_color,
            radius,
            rect: Rect::NOTHING,
            border: Rect::NOTHING,
            bg: Rect::NOTHING,
        }
    }

    pub fn border_rect(&self) -> Rect {
        self.border
    }

    pub fn fill_rect(&self) -> Rect {
        self.bg
    }

    pub fn fill_radius(&self) -> f32 {
        (self.radius - INNER_RADIUS_INSET).max(0.0)
    }

    /// Moves/resizes the panel; both layers follow.
    pub fn set_rect(&mut self, rect: Rect) {
        if rect == self.rect {
            return;
        }
        self.rect = rect;
        self.update_bg();
    }

    fn update_bg(&mut self) {
        self.border = self.rect.expand(BORDER_WIDTH);
        self.bg = self.rect;
    }

    pub fn paint(&self, painter: &egui::Painter) {
        painter.rect_filled(self.border_rect(), self.radius, self.border_color);
        painter.rect_filled(self.fill_rect(), self.fill_radius(), self.fill);
    }

    /// Paints the panel at `rect` and lays out `add_contents` inside its padding.
    pub fn show<R>(&mut self, ui: &mut Ui, rect: Rect, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
        self.set_rect(rect);
        self.paint(ui.painter());
        let inner = rect.shrink(PADDING);
        ui.scope_builder(egui::UiBuilder::new().max_rect(inner), add_contents)
            .inner
    }
}
