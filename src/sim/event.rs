use crate::types::State;

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

/// Kinds of flight events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Burnout,
    Apogee,
    Touchdown,
    Custom(String),
}

/// A discrete event that occurred during a flight.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub state: State,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive states and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind>;
}

/// Replay a finished trajectory through a set of detectors.
pub fn scan(trajectory: &[State], detectors: &mut [Box<dyn EventDetector>]) -> Vec<SimEvent> {
    let mut events = Vec::new();
    for pair in trajectory.windows(2) {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&pair[0], &pair[1]) {
                events.push(SimEvent {
                    time: pair[1].time,
                    kind,
                    state: pair[1].clone(),
                });
            }
        }
    }
    events
}

// ---------------------------------------------------------------------------
// Detectors
// ---------------------------------------------------------------------------

/// Detects the end of the burn (time crossing the burn duration).
pub struct BurnoutDetector {
    pub burn_time: f64,
    fired: bool,
}

impl BurnoutDetector {
    pub fn new(burn_time: f64) -> Self {
        Self { burn_time, fired: false }
    }
}

impl EventDetector for BurnoutDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        if prev.time < self.burn_time && current.time >= self.burn_time {
            self.fired = true;
            Some(EventKind::Burnout)
        } else {
            None
        }
    }
}

/// Detects apogee (vertical velocity going from positive to non-positive).
pub struct ApogeeDetector;

impl EventDetector for ApogeeDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if prev.vel.y > 0.0 && current.vel.y <= 0.0 && current.pos.y > 1.0 {
            Some(EventKind::Apogee)
        } else {
            None
        }
    }
}

/// Detects ground contact (altitude reaching zero after launch).
pub struct TouchdownDetector;

impl EventDetector for TouchdownDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if prev.pos.y > 0.0 && current.pos.y <= 0.0 && current.time > 0.0 {
            Some(EventKind::Touchdown)
        } else {
            None
        }
    }
}

/// Detects when altitude crosses a threshold (ascending or descending).
pub struct AltitudeDetector {
    pub altitude: f64,
    pub ascending: bool,
    fired: bool,
}

impl AltitudeDetector {
    pub fn new(altitude: f64, ascending: bool) -> Self {
        Self { altitude, ascending, fired: false }
    }
}

impl EventDetector for AltitudeDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        let crossed = if self.ascending {
            prev.pos.y < self.altitude && current.pos.y >= self.altitude
        } else {
            prev.pos.y > self.altitude && current.pos.y <= self.altitude
        };
        if crossed {
            self.fired = true;
            Some(EventKind::Custom(format!(
                "Altitude {:.0}m ({})",
                self.altitude,
                if self.ascending { "ascending" } else { "descending" }
            )))
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn make_state(t: f64, alt: f64, vy: f64) -> State {
        State {
            time: t,
            pos: Vector2::new(0.0, alt),
            vel: Vector2::new(0.0, vy),
        }
    }

    #[test]
    fn apogee_detected() {
        let mut det = ApogeeDetector;
        let prev = make_state(10.0, 500.0, 2.0);
        let curr = make_state(10.01, 500.01, -0.1);
        assert_eq!(det.check(&prev, &curr), Some(EventKind::Apogee));
    }

    #[test]
    fn burnout_fires_once() {
        let mut det = BurnoutDetector::new(5.0);
        let prev = make_state(4.99, 200.0, 80.0);
        let curr = make_state(5.0, 200.8, 80.0);
        assert_eq!(det.check(&prev, &curr), Some(EventKind::Burnout));
        assert!(det.check(&prev, &curr).is_none());
    }

    #[test]
    fn altitude_detector_ascending() {
        let mut det = AltitudeDetector::new(100.0, true);
        let prev = make_state(1.0, 90.0, 50.0);
        let curr = make_state(1.2, 105.0, 50.0);
        assert!(det.check(&prev, &curr).is_some());
        // Should not fire again
        assert!(det.check(&prev, &curr).is_none());
    }

    #[test]
    fn scan_finds_burnout_apogee_and_touchdown() {
        use crate::sim::simulate;
        use crate::types::{Rocket, SimConfig};

        let rocket = Rocket::default();
        let flight = simulate(&rocket, &SimConfig::default()).unwrap();

        let mut detectors: Vec<Box<dyn EventDetector>> = vec![
            Box::new(BurnoutDetector::new(rocket.burn_time)),
            Box::new(ApogeeDetector),
            Box::new(TouchdownDetector),
        ];
        let events = scan(&flight.trajectory, &mut detectors);

        assert!(events.iter().any(|e| e.kind == EventKind::Burnout));
        assert!(events.iter().any(|e| e.kind == EventKind::Apogee));
        assert!(events.iter().any(|e| e.kind == EventKind::Touchdown));

        let apogee = events.iter().find(|e| e.kind == EventKind::Apogee).unwrap();
        let burnout = events.iter().find(|e| e.kind == EventKind::Burnout).unwrap();
        assert!(apogee.time > burnout.time, "apogee comes after burnout");
    }
}
