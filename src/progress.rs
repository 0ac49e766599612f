//! Rounded progress bar showing completed/total as a fill and an integer percentage

use egui::{Align2, Color32, FontId, Rect};

const CORNER_RADIUS: f32 = 20.0;
const TRACK_INSET: f32 = 3.0;
const FILL_INSET: f32 = 6.0;

const FRAME_COLOR: Color32 = Color32::BLACK;
/// (0.3, 0.12, 0.0)
const TRACK_COLOR: Color32 = Color32::from_rgb(77, 31, 0);
/// (1.0, 0.6, 0.0)
const FILL_COLOR: Color32 = Color32::from_rgb(255, 153, 0);

/// Shapes derived from the bounds and the ratio on every redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressShapes {
    pub frame: Rect,
    pub track: Rect,
    pub fill: Rect,
    pub fill_color: Color32,
}

pub struct ProgressBar {
    value: u32,
    max: u32,
    rect: Rect,
    ratio: f64,
    percent_text: String,
    shapes: ProgressShapes,
}

impl Default for ProgressBar {
    fn default() -> Self {
        let mut bar = Self {
            value: 0,
            max: 1,
            rect: Rect::NOTHING,
            ratio: 0.0,
            percent_text: String::new(),
            shapes: ProgressShapes {
                frame: Rect::NOTHING,
                track: Rect::NOTHING,
                fill: Rect::NOTHING,
                fill_color: TRACK_COLOR,
            },
        };
        bar.redraw();
        bar
    }
}

impl ProgressBar {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// 0.0..=1.0
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// e.g. "50%"
    pub fn percent_text(&self) -> &str {
        &self.percent_text
    }

    pub fn shapes(&self) -> &ProgressShapes {
        &self.shapes
    }

    pub fn set_value(&mut self, value: u32) {
        if value != self.value {
            self.value = value;
            self.redraw();
        }
    }

    pub fn set_max(&mut self, max: u32) {
        if max != self.max {
            self.max = max;
            self.redraw();
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        if rect != self.rect {
            self.rect = rect;
            self.redraw();
        }
    }

    fn redraw(&mut self) {
        self.ratio = if self.max > 0 {
            f64::from(self.value) / f64::from(self.max)
        } else {
            0.0
        };

        let r = self.rect;
        let fill_width = ((r.width() - 2.0 * FILL_INSET) as f64 * self.ratio).max(0.0) as f32;
        self.shapes = ProgressShapes {
            frame: r,
            track: r.shrink(TRACK_INSET),
            fill: Rect::from_min_size(
                r.min + egui::vec2(FILL_INSET, FILL_INSET),
                egui::vec2(fill_width, (r.height() - 2.0 * FILL_INSET).max(0.0)),
            ),
            fill_color: if self.ratio > 0.0 { FILL_COLOR } else { TRACK_COLOR },
        };

        self.percent_text = format!("{}%", (self.ratio * 100.0).floor() as u32);
    }

    pub fn paint(&self, painter: &egui::Painter) {
        let s = &self.shapes;
        painter.rect_filled(s.frame, CORNER_RADIUS, FRAME_COLOR);
        painter.rect_filled(s.track, CORNER_RADIUS, TRACK_COLOR);
        painter.rect_filled(s.fill, CORNER_RADIUS, s.fill_color);
        painter.text(
            s.frame.center(),
            Align2::CENTER_CENTER,
            &self.percent_text,
            FontId::proportional(18.0),
            Color32::BLACK,
        );
    }

    /// Allocates `size` in `ui`, repositions the bar there and paints it.
    pub fn show(&mut self, ui: &mut egui::Ui, size: egui::Vec2) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
        self.set_rect(rect);
        self.paint(ui.painter());
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn bar_at(width: f32) -> ProgressBar {
        let mut bar = ProgressBar::default();
        bar.set_rect(Rect::from_min_size(pos2(0.0, 0.0), vec2(width, 40.0)));
        bar
    }

    #[test]
    fn starts_at_zero_percent() {
        let bar = ProgressBar::default();
        assert_eq!((bar.value(), bar.max()), (0, 1));
        assert_eq!(bar.percent_text(), "0%");
    }

    #[test]
    fn percentage_is_floored() {
        let mut bar = bar_at(112.0);
        bar.set_max(3);
        bar.set_value(1);
        assert_eq!(bar.percent_text(), "33%");
        bar.set_value(2);
        assert_eq!(bar.percent_text(), "66%");
        bar.set_value(3);
        assert_eq!(bar.percent_text(), "100%");
    }

    #[test]
    fn zero_max_does_not_divide() {
        let mut bar = bar_at(112.0);
        bar.set_max(0);
        assert_eq!(bar.ratio(), 0.0);
        assert_eq!(bar.percent_text(), "0%");
    }

    #[test]
    fn fill_width_follows_ratio_and_bounds() {
        let mut bar = bar_at(112.0);
        bar.set_max(4);
        bar.set_value(1);
        let s = *bar.shapes();
        assert_eq!(s.fill.min, pos2(6.0, 6.0));
        assert_eq!(s.fill.width(), 25.0);
        assert_eq!(s.fill.height(), 28.0);
        assert_eq!(s.track, Rect::from_min_size(pos2(3.0, 3.0), vec2(106.0, 34.0)));
        assert_eq!(s.fill_color, FILL_COLOR);

        // Resizing alone recomputes the geometry.
        bar.set_rect(Rect::from_min_size(pos2(10.0, 0.0), vec2(212.0, 40.0)));
        assert_eq!(bar.shapes().fill.width(), 50.0);
        assert_eq!(bar.shapes().fill.min.x, 16.0);
    }

    #[test]
    fn empty_fill_uses_track_color() {
        let bar = bar_at(112.0);
        assert_eq!(bar.shapes().fill.width(), 0.0);
        assert_eq!(bar.shapes().fill_color, TRACK_COLOR);
    }
}
