use crate::dynamics;
use crate::types::{Rocket, State};

// ---------------------------------------------------------------------------
// Heun (improved Euler) integrator
// ---------------------------------------------------------------------------

/// Single Heun step: advance state by dt.
///
/// Predictor-corrector: a plain Euler predictor, a second derivative
/// evaluation at the predicted point, then a trapezoidal average of the
/// two slopes. Second-order accurate at exactly two derivative
/// evaluations per step.
pub fn heun_step(state: &State, rocket: &Rocket, dt: f64) -> State {
    let k1 = dynamics::derivatives(state, rocket);
    let k2 = dynamics::derivatives(&state.apply(&k1, dt), rocket);

    State {
        time: state.time + dt,
        pos: state.pos + (k1.dpos + k2.dpos) * (dt * 0.5),
        vel: state.vel + (k1.dvel + k2.dvel) * (dt * 0.5),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    fn ballistic() -> Rocket {
        Rocket {
            thrust: 0.0,
            cd: 0.0,
            ..Rocket::default()
        }
    }

    #[test]
    fn time_advances_by_exactly_dt() {
        let next = heun_step(&State::launch(), &Rocket::default(), 0.01);
        assert_eq!(next.time, 0.01);
    }

    #[test]
    fn free_fall_step_is_exact() {
        // With constant acceleration the trapezoidal corrector reproduces
        // the quadratic solution without truncation error.
        let state = State {
            time: 0.0,
            pos: Vector2::new(0.0, 100.0),
            vel: Vector2::new(2.0, 10.0),
        };
        let dt = 0.1;
        let next = heun_step(&state, &ballistic(), dt);
        assert_relative_eq!(next.vel.y, 10.0 - crate::types::G * dt, epsilon = 1e-12);
        assert_relative_eq!(
            next.pos.y,
            100.0 + 10.0 * dt - 0.5 * crate::types::G * dt * dt,
            epsilon = 1e-12
        );
        assert_relative_eq!(next.pos.x, 0.0 + 2.0 * dt, epsilon = 1e-12);
        assert_relative_eq!(next.vel.x, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn step_is_deterministic() {
        let rocket = Rocket::default();
        let state = State {
            time: 2.5,
            pos: Vector2::new(40.0, 180.0),
            vel: Vector2::new(15.0, 55.0),
        };
        let a = heun_step(&state, &rocket, 0.01);
        let b = heun_step(&state, &rocket, 0.01);
        // Bit-identical, not just approximately equal
        assert_eq!(a, b);
    }

    #[test]
    fn tighter_timestep_reduces_drag_error() {
        // Integrate 1 s of draggy coast with one coarse step vs many fine
        // steps; the coarse result must land close to the fine one.
        let rocket = Rocket { thrust: 0.0, ..Rocket::default() };
        let start = State {
            time: 0.0,
            pos: Vector2::new(0.0, 500.0),
            vel: Vector2::new(60.0, 60.0),
        };

        let coarse = heun_step(&start, &rocket, 1.0);

        let mut fine = start;
        for _ in 0..1000 {
            fine = heun_step(&fine, &rocket, 0.001);
        }

        assert_relative_eq!(coarse.pos.y, fine.pos.y, max_relative = 1e-2);
        assert_relative_eq!(coarse.vel.norm(), fine.vel.norm(), max_relative = 1e-2);
    }
}
