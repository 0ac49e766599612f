//! Root scene state: the ordered task rows, the progress bar, the leaf
//! particles and the music toggle. Everything here is UI-independent; the
//! egui layer in `app.rs` only forwards clicks and paints.
//!
//! Rows talk back through callbacks that push [`RowEvent`]s into a
//! scene-owned inbox. Every public operation drains the inbox before
//! returning, so callers always observe a settled state.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use egui::Vec2;
use rand::rngs::StdRng;

use crate::audio::MusicToggle;
use crate::leaf::{LEAF_SIZE, LeafParticle, LeafState};
use crate::progress::ProgressBar;
use crate::row::{ProgressCallback, RemoveCallback, RowId, Task, TodoRow};
use crate::scheduler::Due;

pub const VIEWPORT: Vec2 = egui::vec2(800.0, 600.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowEvent {
    Remove(RowId),
    ProgressChanged,
}

pub struct Scene {
    rows: Vec<TodoRow>,
    next_row_id: u64,
    inbox: Rc<RefCell<VecDeque<RowEvent>>>,
    /// Text field contents.
    pub input: String,
    progress: ProgressBar,
    leaves: Vec<LeafParticle>,
    rng: StdRng,
    music: MusicToggle,
    viewport: Vec2,
}

impl Scene {
    pub fn new(music: MusicToggle, rng: StdRng) -> Self {
        Self {
            rows: Vec::new(),
            next_row_id: 0,
            inbox: Rc::new(RefCell::new(VecDeque::new())),
            input: String::new(),
            progress: ProgressBar::default(),
            leaves: Vec::new(),
            rng,
            music,
            viewport: VIEWPORT,
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn rows(&self) -> &[TodoRow] {
        &self.rows
    }

    /// For the UI layer; call [`Scene::pump_events`] after interacting.
    pub fn rows_mut(&mut self) -> &mut [TodoRow] {
        &mut self.rows
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.rows.iter().map(TodoRow::task).collect()
    }

    pub fn progress(&self) -> &ProgressBar {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut ProgressBar {
        &mut self.progress
    }

    pub fn leaves(&self) -> &[LeafParticle] {
        &self.leaves
    }

    pub fn music(&self) -> &MusicToggle {
        &self.music
    }

    /// Appends a row for `text` unless it trims to nothing; clears the input field.
    pub fn add_task(&mut self, text: &str) -> Option<RowId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;

        let inbox = Rc::clone(&self.inbox);
        let remove: RemoveCallback = Rc::new(move |id| inbox.borrow_mut().push_back(RowEvent::Remove(id)));
        let inbox = Rc::clone(&self.inbox);
        let progress: ProgressCallback =
            Rc::new(move || inbox.borrow_mut().push_back(RowEvent::ProgressChanged));

        self.rows.push(TodoRow::new(id, text, remove, Some(progress)));
        self.input.clear();
        log::debug!("task added: {id:?} {text:?}");
        self.recompute_progress();
        Some(id)
    }

    /// Adds whatever is in the input field.
    pub fn submit_input(&mut self) -> Option<RowId> {
        let text = self.input.clone();
        self.add_task(&text)
    }

    /// Detaches the row. Returns false if it was already gone.
    pub fn remove_task(&mut self, id: RowId) -> bool {
        let Some(index) = self.rows.iter().position(|row| row.id() == id) else {
            return false;
        };
        self.rows.remove(index);
        log::debug!("task removed: {id:?}");
        self.recompute_progress();
        true
    }

    /// Clicks the row's checkbox.
    pub fn toggle_task(&mut self, id: RowId) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.id() == id) else {
            return false;
        };
        row.on_toggle();
        self.pump_events();
        true
    }

    /// Clicks the row's delete control.
    pub fn delete_task(&mut self, id: RowId) -> bool {
        let Some(row) = self.rows.iter().find(|row| row.id() == id) else {
            return false;
        };
        row.remove_item();
        self.pump_events();
        true
    }

    /// Applies everything the rows reported since the last call.
    pub fn pump_events(&mut self) {
        loop {
            let event = self.inbox.borrow_mut().pop_front();
            match event {
                Some(RowEvent::Remove(id)) => {
                    self.remove_task(id);
                }
                Some(RowEvent::ProgressChanged) => self.recompute_progress(),
                None => break,
            }
        }
    }

    pub fn recompute_progress(&mut self) {
        let total = self.rows.len() as u32;
        let completed = self.rows.iter().filter(|row| row.is_completed()).count() as u32;
        self.progress.set_max(total.max(1));
        self.progress.set_value(completed);
        log::debug!("progress {completed}/{total} ({})", self.progress.percent_text());
    }

    pub fn spawn_particle(&mut self) {
        let leaf = LeafParticle::spawn(&mut self.rng, self.viewport, LEAF_SIZE);
        log::trace!("leaf spawned at x={}", leaf.x);
        self.leaves.push(leaf);
    }

    pub fn advance_particles(&mut self, dt: f64) {
        let dt = dt as f32;
        self.leaves
            .retain_mut(|leaf| leaf.update(dt) == LeafState::Airborne);
    }

    /// Runs whatever the scheduler says is due this frame.
    pub fn tick(&mut self, due: Due) {
        if due.spawn {
            self.spawn_particle();
        }
        if let Some(dt) = due.advance {
            self.advance_particles(dt);
        }
    }

    pub fn toggle_music(&mut self) {
        self.music.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;
    use crate::audio::tests::RecordingPlayback;
    use rand::{Rng, SeedableRng};

    fn scene() -> Scene {
        Scene::new(MusicToggle::new(None), StdRng::seed_from_u64(3))
    }

    fn progress(scene: &Scene) -> (u32, u32, String) {
        let bar = scene.progress();
        (bar.value(), bar.max(), bar.percent_text().to_owned())
    }

    fn task(text: &str, completed: bool) -> Task {
        Task {
            text: text.into(),
            completed,
        }
    }

    #[test]
    fn walkthrough() {
        let mut s = scene();
        let milk = s.add_task("Buy milk").unwrap();
        assert_eq!(s.tasks(), vec![task("Buy milk", false)]);
        assert_eq!(progress(&s), (0, 1, "0%".into()));

        s.toggle_task(milk);
        assert_eq!(progress(&s), (1, 1, "100%".into()));

        s.add_task("Walk dog");
        assert_eq!(progress(&s), (1, 2, "50%".into()));

        s.delete_task(milk);
        assert_eq!(s.tasks(), vec![task("Walk dog", false)]);
        assert_eq!(progress(&s), (0, 1, "0%".into()));
    }

    #[test]
    fn whitespace_is_ignored() {
        let mut s = scene();
        s.add_task("keep");
        let before = progress(&s);
        s.input = "   \t ".into();
        assert_eq!(s.submit_input(), None);
        assert_eq!(s.add_task(""), None);
        assert_eq!(s.tasks(), vec![task("keep", false)]);
        assert_eq!(progress(&s), before);
        // The field is only cleared when a task is created.
        assert_eq!(s.input, "   \t ");
    }

    #[test]
    fn submit_trims_and_clears_input() {
        let mut s = scene();
        s.input = "  Walk dog  ".into();
        assert!(s.submit_input().is_some());
        assert_eq!(s.tasks(), vec![task("Walk dog", false)]);
        assert!(s.input.is_empty());
    }

    #[test]
    fn double_toggle_restores_completed_count() {
        let mut s = scene();
        let a = s.add_task("a").unwrap();
        s.add_task("b");
        s.toggle_task(a);
        let before = progress(&s);
        let b = s.rows()[1].id();
        s.toggle_task(b);
        s.toggle_task(b);
        assert_eq!(progress(&s), before);
    }

    #[test]
    fn removing_unknown_row_is_harmless() {
        let mut s = scene();
        let a = s.add_task("a").unwrap();
        assert!(s.remove_task(a));
        assert!(!s.remove_task(a));
        assert!(!s.delete_task(a));
        assert!(!s.toggle_task(a));
        assert_eq!(progress(&s), (0, 1, "0%".into()));
    }

    #[test]
    fn random_sequences_keep_progress_consistent() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut s = scene();
        let mut expected_len: i64 = 0;
        for step in 0..2_000 {
            match rng.gen_range(0..4) {
                0 => {
                    let text = if rng.gen_bool(0.2) { "  ".to_owned() } else { format!("task {step}") };
                    if s.add_task(&text).is_some() {
                        expected_len += 1;
                    }
                }
                1 if !s.rows().is_empty() => {
                    let id = s.rows()[rng.gen_range(0..s.rows().len())].id();
                    assert!(s.delete_task(id));
                    expected_len -= 1;
                }
                _ if !s.rows().is_empty() => {
                    let id = s.rows()[rng.gen_range(0..s.rows().len())].id();
                    s.toggle_task(id);
                }
                _ => {}
            }
            let bar = s.progress();
            assert_eq!(s.rows().len() as i64, expected_len);
            assert!(bar.max() >= 1);
            assert!(bar.value() <= bar.max());
            assert_eq!(bar.max() as usize, s.rows().len().max(1));
            assert_eq!(
                bar.value() as usize,
                s.tasks().iter().filter(|t| t.completed).count()
            );
        }
    }

    #[test]
    fn rows_keep_insertion_order() {
        let mut s = scene();
        for text in ["one", "two", "three"] {
            s.add_task(text);
        }
        let two = s.rows()[1].id();
        s.delete_task(two);
        let texts: Vec<_> = s.rows().iter().map(|r| r.text().to_owned()).collect();
        assert_eq!(texts, ["one", "three"]);
    }

    #[test]
    fn particles_spawn_fall_and_get_pruned() {
        let mut s = scene();
        s.spawn_particle();
        s.spawn_particle();
        assert_eq!(s.leaves().len(), 2);

        // Slowest leaf needs (600 + 48) / 80 = 8.1 s.
        for _ in 0..(60 * 8) {
            s.advance_particles(1.0 / 60.0);
        }
        s.advance_particles(0.2);
        assert!(s.leaves().is_empty());
    }

    #[test]
    fn tick_runs_due_work() {
        let mut s = scene();
        s.tick(Due {
            spawn: true,
            advance: None,
        });
        assert_eq!(s.leaves().len(), 1);
        let y0 = s.leaves()[0].y;
        s.tick(Due {
            spawn: false,
            advance: Some(0.5),
        });
        assert_eq!(s.leaves().len(), 1);
        assert!(s.leaves()[0].y < y0);
    }

    #[test]
    fn music_toggle_twice_round_trips() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut s = Scene::new(
            MusicToggle::new(Some(Box::new(RecordingPlayback(calls.clone())))),
            StdRng::seed_from_u64(0),
        );
        let before = (s.music().is_playing(), s.music().icon());
        s.toggle_music();
        assert_eq!(s.music().icon(), assets::AUDIO_OFF);
        s.toggle_music();
        assert_eq!((s.music().is_playing(), s.music().icon()), before);
    }
}
