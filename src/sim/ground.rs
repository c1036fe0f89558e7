use nalgebra::Vector2;

use crate::types::State;

// ---------------------------------------------------------------------------
// Touchdown interpolation
// ---------------------------------------------------------------------------

/// Resolve the exact touchdown state between the last airborne state and the
/// first state at or below the ground plane.
///
/// Linear in every component; the fraction is clamped to [0, 1] to absorb
/// numerical overshoot, and the resulting altitude is forced to exactly
/// zero.
pub fn touchdown(s1: &State, s2: &State) -> State {
    let y1 = s1.pos.y;
    let y2 = s2.pos.y;

    // Near-equal altitudes leave no usable slope; take the later state.
    if (y1 - y2).abs() < 1e-9 {
        let mut grounded = s2.clone();
        grounded.pos.y = 0.0;
        return grounded;
    }

    let alpha = (y1 / (y1 - y2)).clamp(0.0, 1.0);

    State {
        time: s1.time + alpha * (s2.time - s1.time),
        pos: Vector2::new(s1.pos.x + alpha * (s2.pos.x - s1.pos.x), 0.0),
        vel: s1.vel + alpha * (s2.vel - s1.vel),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
