//! Actor physics
//!
//! Gravity and the jump impulse are per-tick constants: one application per
//! simulation step regardless of frame time. Only the game-over fall is
//! scaled by elapsed milliseconds.

use super::state::Actor;
use crate::tuning::Tuning;

impl Actor {
    /// One physics step: gravity, position, then tilt
    pub fn integrate(&mut self, tuning: &Tuning) {
        self.vel_y += tuning.gravity;
        self.pos.y += self.vel_y;
        self.update_tilt(tuning);
    }

    /// Nose up quickly while rising, nose down slowly otherwise
    pub fn update_tilt(&mut self, tuning: &Tuning) {
        if self.vel_y < tuning.tilt_up_threshold {
            self.rotation = (self.rotation + tuning.tilt_up_step).min(tuning.tilt_up_cap);
        } else {
            self.rotation = (self.rotation - tuning.tilt_down_step).max(tuning.tilt_down_cap);
        }
    }

    pub fn jump(&mut self, tuning: &Tuning) {
        self.vel_y = tuning.jump_impulse;
    }

    /// Post-death descent, stopping just below the playfield
    pub fn fall(&mut self, delta_ms: f64, tuning: &Tuning) {
        let floor = tuning.playfield_height + self.radius;
        if self.pos.y < floor {
            self.pos.y = (self.pos.y + tuning.death_fall_rate * delta_ms as f32).min(floor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_accumulates() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(&tuning);
        actor.integrate(&tuning);
        assert!((actor.vel_y - 0.35).abs() < 1e-6);
        assert!((actor.pos.y - 300.35).abs() < 1e-4);
        actor.integrate(&tuning);
        assert!((actor.vel_y - 0.7).abs() < 1e-6);
        assert!((actor.pos.y - 301.05).abs() < 1e-4);
    }

    #[test]
    fn test_jump_sets_impulse() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(&tuning);
        actor.vel_y = 5.0;
        actor.jump(&tuning);
        assert_eq!(actor.vel_y, -7.0);
    }

    #[test]
    fn test_tilt_is_asymmetric() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(&tuning);

        actor.vel_y = -5.0;
        actor.update_tilt(&tuning);
        assert!((actor.rotation - 0.2).abs() < 1e-6);
        for _ in 0..10 {
            actor.update_tilt(&tuning);
        }
        assert_eq!(actor.rotation, 0.6);

        actor.vel_y = 1.0;
        actor.update_tilt(&tuning);
        assert!((actor.rotation - 0.45).abs() < 1e-6);
        for _ in 0..20 {
            actor.update_tilt(&tuning);
        }
        assert_eq!(actor.rotation, -1.2);
    }

    #[test]
    fn test_tilt_threshold_is_exclusive() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(&tuning);
        actor.vel_y = -2.0;
        actor.update_tilt(&tuning);
        assert!((actor.rotation + 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_fall_is_time_scaled_and_bounded() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(&tuning);
        actor.fall(100.0, &tuning);
        assert!((actor.pos.y - 310.0).abs() < 1e-4);

        for _ in 0..100 {
            actor.fall(100.0, &tuning);
        }
        assert_eq!(actor.pos.y, 615.0);
    }
}
