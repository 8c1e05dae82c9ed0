//! Collision detection and scoring checks
//!
//! The actor is treated as a circle's bounding box against axis-aligned
//! obstacle columns with a vertical gap.

use super::state::{Actor, Obstacle};
use crate::tuning::Tuning;

/// True when the actor overlaps the obstacle horizontally and pokes out of
/// the gap above or below
pub fn check_collision(actor: &Actor, obstacle: &Obstacle) -> bool {
    let overlaps_x = actor.pos.x + actor.radius > obstacle.x
        && actor.pos.x - actor.radius < obstacle.trailing_edge();
    if !overlaps_x {
        return false;
    }

    actor.pos.y - actor.radius < obstacle.gap_top()
        || actor.pos.y + actor.radius > obstacle.gap_bottom()
}

/// One-shot pass detection: returns true exactly once, the first time the
/// obstacle's trailing edge is behind the actor's centre
pub fn check_pass(actor: &Actor, obstacle: &mut Obstacle) -> bool {
    if !obstacle.passed && obstacle.trailing_edge() < actor.pos.x {
        obstacle.passed = true;
        true
    } else {
        false
    }
}

/// Actor touched the ground or left through the top
pub fn out_of_bounds(actor: &Actor, tuning: &Tuning) -> bool {
    actor.pos.y + actor.radius > tuning.ground_y() || actor.pos.y < actor.radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn actor_at(x: f32, y: f32) -> Actor {
        Actor {
            pos: Vec2::new(x, y),
            radius: 15.0,
            vel_y: 0.0,
            rotation: 0.0,
        }
    }

    fn obstacle(x: f32, gap_center: f32) -> Obstacle {
        Obstacle {
            x,
            width: 60.0,
            gap_center,
            gap_height: 140.0,
            passed: false,
        }
    }

    #[test]
    fn test_collision_below_gap() {
        // Gap spans [130, 270]; actor bottom at 315
        let actor = actor_at(100.0, 300.0);
        assert!(check_collision(&actor, &obstacle(80.0, 200.0)));
    }

    #[test]
    fn test_collision_above_gap() {
        let actor = actor_at(100.0, 140.0);
        assert!(check_collision(&actor, &obstacle(80.0, 200.0)));
    }

    #[test]
    fn test_no_collision_inside_gap() {
        let actor = actor_at(100.0, 200.0);
        assert!(!check_collision(&actor, &obstacle(80.0, 200.0)));

        // Touching the gap edge exactly is still safe
        let actor = actor_at(100.0, 255.0);
        assert!(!check_collision(&actor, &obstacle(80.0, 200.0)));
    }

    #[test]
    fn test_no_collision_without_horizontal_overlap() {
        let actor = actor_at(100.0, 300.0);
        // Obstacle starts exactly at the actor's right extent
        assert!(!check_collision(&actor, &obstacle(115.0, 200.0)));
        // Obstacle ends exactly at the actor's left extent
        assert!(!check_collision(&actor, &obstacle(25.0, 200.0)));
        assert!(check_collision(&actor, &obstacle(114.0, 200.0)));
    }

    #[test]
    fn test_pass_fires_once() {
        let actor = actor_at(100.0, 300.0);
        let mut o = obstacle(40.0, 300.0);
        assert!(!check_pass(&actor, &mut o));

        o.x = 39.0;
        assert!(check_pass(&actor, &mut o));
        assert!(o.passed);

        o.x = 0.0;
        assert!(!check_pass(&actor, &mut o));
        assert!(o.passed);
    }

    #[test]
    fn test_bounds() {
        let tuning = Tuning::default();
        assert!(!out_of_bounds(&actor_at(100.0, 300.0), &tuning));
        assert!(!out_of_bounds(&actor_at(100.0, 545.0), &tuning));
        assert!(out_of_bounds(&actor_at(100.0, 545.5), &tuning));
        assert!(!out_of_bounds(&actor_at(100.0, 15.0), &tuning));
        assert!(out_of_bounds(&actor_at(100.0, 14.0), &tuning));
    }
}
