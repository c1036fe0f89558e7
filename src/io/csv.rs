use std::io::{self, Write};

use crate::types::State;

/// Write trajectory data to CSV format.
///
/// Columns: time, x, y, vx, vy, speed
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[State]) -> io::Result<()> {
    writeln!(writer, "time,x,y,vx,vy,speed")?;

    for s in trajectory {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
            s.time,
            s.pos.x,
            s.pos.y,
            s.vel.x,
            s.vel.y,
            s.speed(),
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, trajectory: &[State]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn csv_output_has_header_and_rows() {
        let traj = vec![
            State {
                time: 0.0,
                pos: Vector2::zeros(),
                vel: Vector2::zeros(),
            },
            State {
                time: 0.01,
                pos: Vector2::new(0.1, 0.2),
                vel: Vector2::new(10.0, 20.0),
            },
        ];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "time,x,y,vx,vy,speed");
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0.0000,"));
        assert!(lines[2].starts_with("0.0100,0.1000,0.2000,"));
    }
}
