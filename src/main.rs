use flightpath::io::json::FlightSummary;
use flightpath::sim::event::{
    ApogeeDetector, BurnoutDetector, EventDetector, EventKind, TouchdownDetector,
};
use flightpath::sim::{self, Outcome};
use flightpath::types::{Rocket, SimConfig};

fn main() {
    let rocket = Rocket::default();
    let config = SimConfig::default();

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let flight = match sim::simulate(&rocket, &config) {
        Ok(flight) => flight,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let summary = FlightSummary::from_flight(&flight);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  ROCKET LAUNCH & TRAJECTORY SIMULATION");
    println!("====================================================================");
    println!();
    println!("  Vehicle Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mass:          {:>8.1} kg    Thrust:       {:>8.0} N",
        rocket.mass, rocket.thrust
    );
    println!(
        "  Launch angle:  {:>8.1} deg   TWR:          {:>8.2}",
        rocket.launch_angle,
        rocket.twr()
    );
    println!(
        "  Cd:            {:>8.3}       Area:         {:>8.4} m^2",
        rocket.cd, rocket.area
    );
    println!(
        "  Air density:   {:>8.3} kg/m^3",
        rocket.air_density
    );
    println!(
        "  Burn time:     {:>8.1} s     dt:           {:>8.3} s",
        rocket.burn_time, config.dt
    );
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");

    let mut detectors: Vec<Box<dyn EventDetector>> = vec![
        Box::new(BurnoutDetector::new(rocket.burn_time)),
        Box::new(ApogeeDetector),
        Box::new(TouchdownDetector),
    ];
    for event in sim::event::scan(&flight.trajectory, &mut detectors) {
        let label = match &event.kind {
            EventKind::Burnout => "BURNOUT",
            EventKind::Apogee => "APOGEE",
            EventKind::Touchdown => "TOUCHDOWN",
            EventKind::Custom(name) => name.as_str(),
        };
        println!(
            "  {:<10} t={:>6.2}s   x={:>8.1}m   y={:>8.1}m   vel={:>7.1}m/s",
            label,
            event.time,
            event.state.pos.x,
            event.state.pos.y,
            event.state.speed()
        );
    }
    if flight.outcome == Outcome::OutOfTime {
        println!(
            "  TIME BOUND  reached at t={:.1}s while still aloft",
            summary.flight_time
        );
    }
    println!();

    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Max altitude:  {:>8.1} m     at t={:.2} s",
        summary.apogee_m, summary.apogee_time
    );
    println!("  Max range:     {:>8.1} m", summary.range_m);
    println!("  Max speed:     {:>8.1} m/s", summary.max_speed);
    println!(
        "  Max accel:     {:>8.1} m/s^2 ({:.1} g)",
        summary.max_accel, summary.max_accel_g
    );
    println!("  Flight time:   {:>8.2} s", summary.flight_time);
    println!("  Impact speed:  {:>8.1} m/s", summary.impact_speed);
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>9}  {:>9}  {:>9}  {:>7}",
        "t (s)", "x (m)", "y (m)", "vel (m/s)", "phase"
    );
    println!("  {}", "─".repeat(50));

    let sample_interval = (flight.trajectory.len() / 30).max(1);
    for (i, s) in flight.trajectory.iter().enumerate() {
        let print = i % sample_interval == 0
            || i == 0
            || (s.time - rocket.burn_time).abs() < config.dt * 1.5
            || i == flight.trajectory.len() - 1;

        if !print {
            continue;
        }

        let phase = if s.time < rocket.burn_time {
            "BURN"
        } else if s.vel.y > 0.0 {
            "COAST"
        } else {
            "DESC"
        };

        println!(
            "  {:>7.2}  {:>9.1}  {:>9.1}  {:>9.1}  {:>7}",
            s.time,
            s.pos.x,
            s.pos.y,
            s.speed(),
            phase
        );
    }

    println!();
    println!(
        "  Simulation: {} steps, dt={} s, outcome: {:?}",
        flight.trajectory.len(),
        config.dt,
        flight.outcome
    );
    println!("====================================================================");
    println!();
}
