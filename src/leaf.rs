//! Falling, spinning leaf particle.
//!
//! Coordinates are y-up with the origin at the bottom-left of the viewport:
//! a leaf spawns at `y = viewport height` and is removed once it has fallen
//! fully below `y = 0`. [`LeafParticle::screen_rect`] converts to egui's
//! top-left space for painting.

use egui::{Rect, Vec2, pos2};
use rand::Rng;

pub const LEAF_SIZE: Vec2 = egui::vec2(48.0, 48.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafState {
    Airborne,
    Removed,
}

#[derive(Clone, Debug)]
pub struct LeafParticle {
    pub x: f32,
    pub y: f32,
    pub size: Vec2,
    /// Degrees.
    pub angle: f32,
    /// Degrees added per update call, not per second.
    pub angular_speed: f32,
    /// Units per second.
    pub speed_y: f32,
    state: LeafState,
}

impl LeafParticle {
    pub fn spawn(rng: &mut impl Rng, viewport: Vec2, size: Vec2) -> Self {
        let max_x = (viewport.x - size.x).max(0.0) as i32;
        Self {
            x: rng.gen_range(0..=max_x) as f32,
            y: viewport.y,
            size,
            angle: rng.gen_range(0.0..360.0),
            angular_speed: rng.gen_range(-1.0..=1.0),
            speed_y: rng.gen_range(80.0..=180.0),
            state: LeafState::Airborne,
        }
    }

    pub fn state(&self) -> LeafState {
        self.state
    }

    /// Advances by `dt` seconds. Fall scales with `dt`; spin does not.
    pub fn update(&mut self, dt: f32) -> LeafState {
        if self.state == LeafState::Removed {
            return self.state;
        }
        self.y -= self.speed_y * dt;
        self.angle += self.angular_speed;
        if self.y < -self.size.y {
            self.state = LeafState::Removed;
        }
        self.state
    }

    pub fn screen_rect(&self, viewport: Vec2) -> Rect {
        Rect::from_min_size(pos2(self.x, viewport.y - self.y - self.size.y), self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const VIEWPORT: Vec2 = egui::vec2(800.0, 600.0);

    fn leaf(speed_y: f32, angular_speed: f32) -> LeafParticle {
        LeafParticle {
            x: 0.0,
            y: VIEWPORT.y,
            size: LEAF_SIZE,
            angle: 0.0,
            angular_speed,
            speed_y,
            state: LeafState::Airborne,
        }
    }

    #[test]
    fn spawn_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let p = LeafParticle::spawn(&mut rng, VIEWPORT, LEAF_SIZE);
            assert!((0.0..=752.0).contains(&p.x));
            assert_eq!(p.x.fract(), 0.0);
            assert_eq!(p.y, 600.0);
            assert!((0.0..360.0).contains(&p.angle));
            assert!((-1.0..=1.0).contains(&p.angular_speed));
            assert!((80.0..=180.0).contains(&p.speed_y));
            assert_eq!(p.state(), LeafState::Airborne);
        }
    }

    #[test]
    fn spawn_in_viewport_narrower_than_leaf() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = LeafParticle::spawn(&mut rng, egui::vec2(20.0, 100.0), LEAF_SIZE);
        assert_eq!(p.x, 0.0);
    }

    #[test]
    fn fall_is_time_scaled_spin_is_not() {
        let mut p = leaf(100.0, 0.5);
        p.update(0.5);
        assert_eq!(p.y, 550.0);
        assert_eq!(p.angle, 0.5);

        let mut q = leaf(100.0, 0.5);
        q.update(0.25);
        q.update(0.25);
        assert_eq!(q.y, 550.0);
        assert_eq!(q.angle, 1.0);
    }

    #[test]
    fn removed_only_once_fully_below_viewport() {
        let mut p = leaf(64.0, 0.0);
        // 600 + 48 = 648 units of fall puts it exactly at -height: still airborne.
        assert_eq!(p.update(10.125), LeafState::Airborne);
        assert_eq!(p.y, -48.0);
        assert_eq!(p.update(1.0 / 64.0), LeafState::Removed);
    }

    #[test]
    fn every_leaf_eventually_removed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut p = LeafParticle::spawn(&mut rng, VIEWPORT, LEAF_SIZE);
            let mut ticks = 0;
            while p.update(1.0 / 60.0) == LeafState::Airborne {
                ticks += 1;
                assert!(ticks < 60 * 10, "leaf never left the viewport");
            }
        }
    }

    #[test]
    fn screen_rect_flips_y() {
        let p = leaf(0.0, 0.0);
        assert_eq!(p.screen_rect(VIEWPORT).min, pos2(0.0, -48.0));
        let mut q = leaf(0.0, 0.0);
        q.y = 0.0;
        assert_eq!(q.screen_rect(VIEWPORT).min, pos2(0.0, 552.0));
    }
}
