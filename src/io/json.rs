use std::io::{self, Write};

use crate::sim::{Flight, Outcome};
use crate::types::{Rocket, G};

/// Summary statistics computed from a finished flight.
#[derive(Debug, Clone)]
pub struct FlightSummary {
    pub apogee_m: f64,
    pub apogee_time: f64,
    pub range_m: f64,
    pub max_speed: f64,
    pub max_accel: f64,
    pub max_accel_g: f64,
    pub flight_time: f64,
    pub impact_speed: f64,
    pub landed: bool,
}

impl FlightSummary {
    /// Compute summary from flight data.
    pub fn from_flight(flight: &Flight) -> Self {
        let (apogee_m, apogee_time) = flight
            .trajectory
            .iter()
            .map(|s| (s.pos.y, s.time))
            .fold((0.0, 0.0), |best, cur| if cur.0 > best.0 { cur } else { best });

        let range_m = flight
            .trajectory
            .iter()
            .map(|s| s.pos.x)
            .fold(0.0_f64, f64::max);

        let max_speed = flight
            .trajectory
            .iter()
            .map(|s| s.speed())
            .fold(0.0_f64, f64::max);

        let max_accel = flight
            .trajectory
            .windows(2)
            .map(|w| {
                let dt = w[1].time - w[0].time;
                if dt > 0.0 {
                    (w[1].vel - w[0].vel).norm() / dt
                } else {
                    0.0
                }
            })
            .fold(0.0_f64, f64::max);

        let last = flight.trajectory.last();

        FlightSummary {
            apogee_m,
            apogee_time,
            range_m,
            max_speed,
            max_accel,
            max_accel_g: max_accel / G,
            flight_time: last.map_or(0.0, |s| s.time),
            impact_speed: last.map_or(0.0, |s| s.speed()),
            landed: flight.outcome == Outcome::Landed,
        }
    }
}

/// Write flight summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    rocket: &Rocket,
    summary: &FlightSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"vehicle\": {{")?;
    writeln!(writer, "    \"mass_kg\": {:.3},", rocket.mass)?;
    writeln!(writer, "    \"thrust_n\": {:.1},", rocket.thrust)?;
    writeln!(writer, "    \"launch_angle_deg\": {:.1},", rocket.launch_angle)?;
    writeln!(writer, "    \"cd\": {:.3},", rocket.cd)?;
    writeln!(writer, "    \"area_m2\": {:.4},", rocket.area)?;
    writeln!(writer, "    \"air_density_kgm3\": {:.4},", rocket.air_density)?;
    writeln!(writer, "    \"burn_time_s\": {:.2}", rocket.burn_time)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"performance\": {{")?;
    writeln!(writer, "    \"apogee_m\": {:.2},", summary.apogee_m)?;
    writeln!(writer, "    \"apogee_time_s\": {:.2},", summary.apogee_time)?;
    writeln!(writer, "    \"range_m\": {:.2},", summary.range_m)?;
    writeln!(writer, "    \"max_speed_ms\": {:.2},", summary.max_speed)?;
    writeln!(writer, "    \"max_accel_ms2\": {:.2},", summary.max_accel)?;
    writeln!(writer, "    \"max_accel_g\": {:.2},", summary.max_accel_g)?;
    writeln!(writer, "    \"flight_time_s\": {:.2},", summary.flight_time)?;
    writeln!(writer, "    \"impact_speed_ms\": {:.2},", summary.impact_speed)?;
    writeln!(writer, "    \"landed\": {}", summary.landed)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write flight summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    rocket: &Rocket,
    summary: &FlightSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, rocket, summary)
}
