use nalgebra::Vector2;

use crate::types::{Deriv, Rocket, State, G};

// ---------------------------------------------------------------------------
// Equations of motion (2DOF point-mass)
// ---------------------------------------------------------------------------

/// Compute state derivatives for a given state and vehicle.
///
/// Forces modeled:
///   1. Thrust  — constant magnitude during burn, along the fixed launch angle
///   2. Drag    — quadratic, opposing velocity
///   3. Gravity — uniform, straight down
pub fn derivatives(state: &State, rocket: &Rocket) -> Deriv {
    // --- Thrust (acceleration) ---
    // Direction stays pinned to the launch angle for the whole burn; there
    // is no gravity turn in this model.
    let a_thrust = if state.time <= rocket.burn_time && rocket.thrust > 0.0 {
        let angle = rocket.launch_angle.to_radians();
        Vector2::new(angle.cos(), angle.sin()) * (rocket.thrust / rocket.mass)
    } else {
        Vector2::zeros()
    };

    // --- Aerodynamic drag (acceleration) ---
    let a_drag = {
        let speed = state.vel.norm();
        if speed > 1e-6 {
            let q = 0.5 * rocket.air_density * speed * speed; // dynamic pressure
            let f_drag = q * rocket.cd * rocket.area;
            -state.vel.normalize() * (f_drag / rocket.mass)
        } else {
            // Exactly zero below the cutoff; keeps the unit vector defined
            // near rest.
            Vector2::zeros()
        }
    };

    // --- Gravity (acceleration) ---
    let a_gravity = Vector2::new(0.0, -G);

    Deriv {
        dpos: state.vel,
        dvel: a_thrust + a_drag + a_gravity,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
