use crate::errors::ConfigError;
use crate::sim::ground;
use crate::sim::integrator::heun_step;
use crate::types::{Rocket, SimConfig, State};

// ---------------------------------------------------------------------------
// Terminal outcome
// ---------------------------------------------------------------------------

/// How a run ended. Carried explicitly so callers never have to infer the
/// ending from the last trajectory element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The vehicle returned to the ground plane; the last trajectory
    /// element is the interpolated touchdown state.
    Landed,
    /// The time budget expired while still aloft. Not an error; the
    /// trajectory is valid up to its last element.
    OutOfTime,
}

/// A finished run: the ordered trajectory and how it ended.
#[derive(Debug, Clone)]
pub struct Flight {
    pub trajectory: Vec<State>,
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// Full simulation loop
// ---------------------------------------------------------------------------

/// Run one flight from ignition to touchdown (or the time bound).
///
/// Malformed parameters are rejected before the first step. The trajectory
/// starts at the pad state and never contains an element below the ground
/// plane: a detected crossing is resolved to the exact touchdown state
/// instead of the raw overshooting step.
pub fn simulate(rocket: &Rocket, config: &SimConfig) -> Result<Flight, ConfigError> {
    rocket.validate()?;
    config.validate()?;

    let mut state = State::launch();

    let capacity = (config.max_time / config.dt) as usize + 1;
    let mut trajectory = Vec::with_capacity(capacity.min(200_000));
    trajectory.push(state.clone());

    while state.time < config.max_time {
        let next = heun_step(&state, rocket, config.dt);

        // Ground crossing after launch
        if next.pos.y <= 0.0 && next.time > 0.0 {
            trajectory.push(ground::touchdown(&state, &next));
            return Ok(Flight {
                trajectory,
                outcome: Outcome::Landed,
            });
        }

        trajectory.push(next.clone());
        state = next;
    }

    Ok(Flight {
        trajectory,
        outcome: Outcome::OutOfTime,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
