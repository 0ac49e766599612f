//! Painting helpers for the image widgets, with procedural stand-ins when an asset is missing

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2, pos2, vec2};

use crate::assets::{self, AssetStore};

const LEAF_ORANGE: Color32 = Color32::from_rgb(204, 102, 0);
const DARK_BROWN: Color32 = Color32::from_rgb(26, 13, 0);

/// Paints asset `name` into `rect`, or its stand-in if the asset did not load.
pub fn paint_asset(ui: &Ui, store: &mut AssetStore, name: &'static str, rect: Rect) {
    match store.texture(ui.ctx(), name) {
        Some(texture) => {
            egui::Image::new(&texture).paint_at(ui, rect);
        }
        None => paint_stand_in(ui.painter(), name, rect),
    }
}

/// Clickable image with the hover/press feedback of a plain egui button.
pub fn image_button(ui: &mut Ui, store: &mut AssetStore, name: &'static str, size: Vec2) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    paint_asset(ui, store, name, rect);
    if response.hovered() {
        let visuals = ui.style().interact(&response);
        ui.painter()
            .rect_filled(rect, 4.0, visuals.weak_bg_fill.gamma_multiply(0.25));
    }
    response
}

/// Leaf sprite rotated by `angle_deg` (counter-clockwise, y-up convention) around the centre of `rect`.
pub fn paint_leaf(ui: &Ui, store: &mut AssetStore, rect: Rect, angle_deg: f32) {
    // screen space is y-down, so flip the sign
    let angle = -angle_deg.to_radians();
    match store.texture(ui.ctx(), assets::LEAF) {
        Some(texture) => {
            egui::Image::new(&texture)
                .rotate(angle, vec2(0.5, 0.5))
                .paint_at(ui, rect);
        }
        None => {
            let c = rect.center();
            let (hx, hy) = (rect.width() * 0.5, rect.height() * 0.25);
            let points = [vec2(-hx, 0.0), vec2(0.0, -hy), vec2(hx, 0.0), vec2(0.0, hy)]
                .into_iter()
                .map(|p| c + egui::emath::Rot2::from_angle(angle) * p)
                .collect();
            ui.painter()
                .add(Shape::convex_polygon(points, LEAF_ORANGE, Stroke::new(1.5, DARK_BROWN)));
        }
    }
}

fn paint_stand_in(painter: &egui::Painter, name: &str, rect: Rect) {
    let glyph = |text: &str, color: Color32| {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(rect.height().min(rect.width()) * 0.6),
            color,
        );
    };
    match name {
        assets::BACKGROUND => {
            painter.rect_filled(rect, 0.0, Color32::from_rgb(60, 36, 20));
        }
        assets::CHECKBOX_ON | assets::CHECKBOX_OFF => {
            let side = rect.height().min(rect.width()) * 0.7;
            let b = Rect::from_center_size(rect.center(), Vec2::splat(side));
            painter.rect_filled(b, 4.0, LEAF_ORANGE);
            painter.rect_stroke(b, 4.0, Stroke::new(2.0, DARK_BROWN), egui::StrokeKind::Inside);
            if name == assets::CHECKBOX_ON {
                let tick = [
                    lerp(b, 0.2, 0.55),
                    lerp(b, 0.42, 0.78),
                    lerp(b, 0.82, 0.25),
                ];
                painter.line(tick.to_vec(), Stroke::new(3.0, DARK_BROWN));
            }
        }
        assets::DELETE_BUTTON => glyph("×", Color32::WHITE),
        assets::ADD_BUTTON => glyph("+", DARK_BROWN),
        assets::AUDIO_ON => glyph("🔊", Color32::WHITE),
        assets::AUDIO_OFF => glyph("🔇", Color32::WHITE),
        _ => {
            painter.rect_filled(rect, 4.0, LEAF_ORANGE);
        }
    }
}

fn lerp(r: Rect, tx: f32, ty: f32) -> Pos2 {
    pos2(r.min.x + r.width() * tx, r.min.y + r.height() * ty)
}
