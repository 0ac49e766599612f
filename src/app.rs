//! egui front end: background, falling leaves, to-do column, progress footer and music button

use std::time::Duration;

use chrono::Utc;
use eframe::egui;
use egui::{Color32, Layout, Rect, RichText, Ui, pos2, vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::assets::{self, AssetStore};
use crate::audio::MusicToggle;
use crate::config::AppConfig;
use crate::panel::BorderedPanel;
use crate::scene::Scene;
use crate::scheduler::{FrameClock, Scheduler};
use crate::sprite;

/// Autumn palette shared by the panels.
mod autumn_theme {
    use egui::Color32;

    /// (0.8, 0.4, 0.0)
    pub const PANEL_FILL: Color32 = Color32::from_rgb(204, 102, 0);
    /// (0.5, 0.2, 0.0, 0.8), premultiplied
    pub const LIST_FILL: Color32 = Color32::from_rgba_premultiplied(102, 41, 0, 204);
    /// (0.1, 0.05, 0.0)
    pub const BORDER: Color32 = Color32::from_rgb(26, 13, 0);
}

const HEADER_HEIGHT: f32 = 100.0;
const COLUMN_SPACING: f32 = 10.0;
const FOOTER_HEIGHT: f32 = 110.0;
const MUSIC_BUTTON: f32 = 48.0;
const ICON_SIZE: f32 = 44.0;
const INPUT_HEIGHT: f32 = 40.0;
const ROW_SPACING: f32 = 5.0;

/// Screen-space rectangles of the fixed layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLayout {
    pub header: Rect,
    pub list: Rect,
    pub footer: Rect,
    pub music: Rect,
}

impl SceneLayout {
    /// To-do column: 70 % × 70 % of the screen, centred, top 5 % down.
    /// Footer: full width along the bottom. Music button: top-right corner.
    pub fn new(screen: Rect) -> Self {
        let w = screen.width();
        let h = screen.height();
        let column = Rect::from_min_size(
            pos2(screen.center().x - w * 0.35, screen.min.y + h * 0.05),
            vec2(w * 0.7, h * 0.7),
        );
        let header = Rect::from_min_size(column.min, vec2(column.width(), HEADER_HEIGHT));
        let list = Rect::from_min_max(
            pos2(column.min.x, header.max.y + COLUMN_SPACING),
            column.max,
        );
        let footer = Rect::from_min_max(pos2(screen.min.x, screen.max.y - FOOTER_HEIGHT), screen.max);
        let music = Rect::from_min_size(
            pos2(screen.max.x - MUSIC_BUTTON, screen.min.y),
            vec2(MUSIC_BUTTON, MUSIC_BUTTON),
        );
        Self {
            header,
            list,
            footer,
            music,
        }
    }
}

pub struct TodoApp {
    scene: Scene,
    assets: AssetStore,
    clock: FrameClock,
    scheduler: Scheduler,
    header: BorderedPanel,
    list: BorderedPanel,
    footer: BorderedPanel,
}

impl TodoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        let music = MusicToggle::load(&config.music_path, config.music_volume);
        Self {
            scene: Scene::new(music, StdRng::from_entropy()),
            assets: AssetStore::new(config.assets_dir.clone()),
            clock: FrameClock::default(),
            scheduler: Scheduler::new(config.leaf_spawn_interval_secs, config.frame_interval_secs()),
            header: BorderedPanel::new(autumn_theme::PANEL_FILL, autumn_theme::BORDER, 15.0),
            list: BorderedPanel::new(autumn_theme::LIST_FILL, autumn_theme::BORDER, 15.0),
            footer: BorderedPanel::new(autumn_theme::PANEL_FILL, autumn_theme::BORDER, 0.0),
        }
    }
}

impl eframe::App for TodoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let elapsed = self.clock.tick(Utc::now());
        let due = self.scheduler.advance(elapsed);
        self.scene.tick(due);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let screen = ui.max_rect();
                let layout = SceneLayout::new(screen);

                sprite::paint_asset(ui, &mut self.assets, assets::BACKGROUND, screen);
                self.paint_leaves(ui, screen);

                let (scene, store) = (&mut self.scene, &mut self.assets);
                self.header
                    .show(ui, layout.header, |ui| header_contents(ui, scene, store));
                self.list
                    .show(ui, layout.list, |ui| task_list(ui, scene, store));
                scene.pump_events();
                self.footer
                    .show(ui, layout.footer, |ui| progress_contents(ui, scene, store));

                let icon = self.scene.music().icon();
                let clicked = ui
                    .scope_builder(egui::UiBuilder::new().max_rect(layout.music), |ui| {
                        sprite::image_button(ui, &mut self.assets, icon, layout.music.size())
                    })
                    .inner
                    .clicked();
                if clicked {
                    self.scene.toggle_music();
                }
            });

        ctx.request_repaint_after(Duration::from_secs_f64(self.scheduler.frame_interval()));
    }
}

impl TodoApp {
    fn paint_leaves(&mut self, ui: &Ui, screen: Rect) {
        let viewport = self.scene.viewport();
        for leaf in self.scene.leaves() {
            let rect = leaf.screen_rect(viewport).translate(screen.min.to_vec2());
            sprite::paint_leaf(ui, &mut self.assets, rect, leaf.angle);
        }
    }
}

/// "TO DO" title and the input row.
fn header_contents(ui: &mut Ui, scene: &mut Scene, store: &mut AssetStore) {
    ui.spacing_mut().item_spacing.y = 5.0;
    title_row(ui, store, "TO DO", 28.0, 40.0);

    ui.allocate_ui_with_layout(
        vec2(ui.available_width(), INPUT_HEIGHT),
        Layout::left_to_right(egui::Align::Center),
        |ui| {
            ui.spacing_mut().item_spacing.x = 5.0;
            let edit_width = (ui.available_width() - INPUT_HEIGHT - 5.0).max(0.0);
            let edit = ui.add_sized(
                [edit_width, INPUT_HEIGHT],
                egui::TextEdit::singleline(&mut scene.input)
                    .hint_text(" ")
                    .vertical_align(egui::Align::Center),
            );
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = sprite::image_button(ui, store, assets::ADD_BUTTON, vec2(INPUT_HEIGHT, INPUT_HEIGHT))
                .on_hover_text("Add task")
                .clicked();
            if submitted || clicked {
                scene.submit_input();
            }
            if submitted {
                edit.request_focus();
            }
        },
    );
}

/// Scrollable rows. Row clicks land in the scene inbox; the caller pumps it.
fn task_list(ui: &mut Ui, scene: &mut Scene, store: &mut AssetStore) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = ROW_SPACING;
            for row in scene.rows_mut() {
                row.show(ui, store);
            }
        });
}

/// "PROGRESS" title and the bar.
fn progress_contents(ui: &mut Ui, scene: &mut Scene, store: &mut AssetStore) {
    ui.spacing_mut().item_spacing.y = 5.0;
    title_row(ui, store, "PROGRESS", 24.0, 48.0);
    let width = ui.available_width();
    scene.progress_mut().show(ui, vec2(width, 40.0));
}

/// Bold black title flanked by two leaf icons.
fn title_row(ui: &mut Ui, store: &mut AssetStore, title: &str, font_size: f32, height: f32) {
    ui.allocate_ui_with_layout(
        vec2(ui.available_width(), height),
        Layout::left_to_right(egui::Align::Center),
        |ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            let icon = vec2(ICON_SIZE, ICON_SIZE);
            let (left, _) = ui.allocate_exact_size(icon, egui::Sense::hover());
            sprite::paint_asset(ui, store, assets::LEAF, left);

            let label_width = (ui.available_width() - ICON_SIZE - 2.0).max(0.0);
            ui.add_sized(
                [label_width, height],
                egui::Label::new(
                    RichText::new(title)
                        .size(font_size)
                        .strong()
                        .color(Color32::BLACK),
                ),
            );

            let (right, _) = ui.allocate_exact_size(icon, egui::Sense::hover());
            sprite::paint_asset(ui, store, assets::LEAF, right);
        },
    );
}
