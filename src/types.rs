use nalgebra::Vector2;

use crate::errors::ConfigError;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G: f64 = 9.81; // uniform gravity, m/s^2

// ---------------------------------------------------------------------------
// Flight state
// ---------------------------------------------------------------------------

/// Flight state at a single point in time.
/// Frame: x downrange, y altitude, origin at the launch pad.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub time: f64,           // s
    pub pos: Vector2<f64>,   // m   [downrange, altitude]
    pub vel: Vector2<f64>,   // m/s
}

impl State {
    /// Pad state at ignition: origin, at rest, t = 0.
    pub fn launch() -> State {
        State {
            time: 0.0,
            pos: Vector2::zeros(),
            vel: Vector2::zeros(),
        }
    }

    /// Advance state by a derivative scaled by dt (the predictor inside Heun).
    pub fn apply(&self, d: &Deriv, dt: f64) -> State {
        State {
            time: self.time + dt,
            pos: self.pos + d.dpos * dt,
            vel: self.vel + d.dvel * dt,
        }
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }
}

// ---------------------------------------------------------------------------
// State derivative (dp/dt, dv/dt)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Deriv {
    pub dpos: Vector2<f64>,   // velocity
    pub dvel: Vector2<f64>,   // acceleration
}

// ---------------------------------------------------------------------------
// Vehicle definition
// ---------------------------------------------------------------------------

/// Vehicle and environment parameters for one run.
///
/// Mass is constant over the flight (no propellant depletion). Negative
/// drag coefficient, area, or air density are accepted as given: the
/// model evaluates them as-is, so physically sensible values are the
/// caller's responsibility. Only non-finite fields and a non-positive
/// mass are rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Rocket {
    pub mass: f64,           // kg
    pub thrust: f64,         // N  (constant during burn)
    pub launch_angle: f64,   // deg from horizontal
    pub cd: f64,             // drag coefficient (dimensionless)
    pub area: f64,           // aerodynamic reference area, m^2
    pub air_density: f64,    // kg/m^3 (constant with altitude)
    pub burn_time: f64,      // s
}

impl Rocket {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("mass", self.mass)?;
        finite("thrust", self.thrust)?;
        finite("launch_angle", self.launch_angle)?;
        finite("cd", self.cd)?;
        finite("area", self.area)?;
        finite("air_density", self.air_density)?;
        finite("burn_time", self.burn_time)?;
        Ok(())
    }

    /// Thrust-to-weight ratio at ignition.
    pub fn twr(&self) -> f64 {
        self.thrust / (self.mass * G)
    }
}

impl Default for Rocket {
    fn default() -> Self {
        Self {
            mass: 50.0,          // kg
            thrust: 1500.0,      // N (~3x weight)
            launch_angle: 75.0,  // deg
            cd: 0.5,             // blunt body
            area: 0.03,          // m^2 (~20 cm diameter)
            air_density: 1.225,  // sea level
            burn_time: 5.0,      // s
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub dt: f64,              // integration timestep, s
    pub max_time: f64,        // hard stop, s
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("dt", self.dt)?;
        positive("max_time", self.max_time)?;
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,         // 100 Hz
            max_time: 60.0,   // 1 min ceiling
        }
    }
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_state_is_all_zeros() {
        let s = State::launch();
        assert_eq!(s.time, 0.0);
        assert_eq!(s.pos, Vector2::zeros());
        assert_eq!(s.vel, Vector2::zeros());
    }

    #[test]
    fn default_rocket_is_valid() {
        assert!(Rocket::default().validate().is_ok());
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn default_rocket_can_lift_off() {
        assert!(Rocket::default().twr() > 1.0);
    }

    #[test]
    fn zero_mass_rejected() {
        let rocket = Rocket { mass: 0.0, ..Rocket::default() };
        assert_eq!(
            rocket.validate(),
            Err(ConfigError::NonPositive { name: "mass", value: 0.0 })
        );
    }

    #[test]
    fn nan_field_rejected() {
        let rocket = Rocket { cd: f64::NAN, ..Rocket::default() };
        assert!(matches!(
            rocket.validate(),
            Err(ConfigError::NonFinite { name: "cd", .. })
        ));
    }

    #[test]
    fn non_positive_timestep_rejected() {
        let config = SimConfig { dt: -0.01, ..SimConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive { name: "dt", value: -0.01 })
        );
    }

    #[test]
    fn negative_drag_is_permitted() {
        // Unphysical but accepted: the model runs with whatever it is given.
        let rocket = Rocket { cd: -0.5, ..Rocket::default() };
        assert!(rocket.validate().is_ok());
    }

    #[test]
    fn apply_advances_all_components() {
        let s = State::launch();
        let d = Deriv {
            dpos: Vector2::new(1.0, 2.0),
            dvel: Vector2::new(3.0, 4.0),
        };
        let next = s.apply(&d, 0.5);
        assert_eq!(next.time, 0.5);
        assert_eq!(next.pos, Vector2::new(0.5, 1.0));
        assert_eq!(next.vel, Vector2::new(1.5, 2.0));
    }
}
