use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use flightpath::io::json::FlightSummary;
use flightpath::sim::{self, Flight};
use flightpath::types::{Rocket, SimConfig};

fn main() -> eframe::Result {
    let rocket = Rocket::default();
    let config = SimConfig::default();
    let flight = match sim::simulate(&rocket, &config) {
        Ok(flight) => flight,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let app = FlightViz { flight };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 750.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Rocket Trajectory Simulator",
        options,
        Box::new(|_| Ok(Box::new(app))),
    )
}

struct FlightViz {
    flight: Flight,
}

impl eframe::App for FlightViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let step = (self.flight.trajectory.len() / 2000).max(1);
        let sampled: Vec<_> = self.flight.trajectory.iter().step_by(step).collect();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Launch-to-impact trajectory");
            let summary = FlightSummary::from_flight(&self.flight);
            ui.label(format!(
                "Apogee: {:.1} m  |  Range: {:.1} m  |  Max speed: {:.1} m/s  |  Flight: {:.2} s  |  {:?}",
                summary.apogee_m,
                summary.range_m,
                summary.max_speed,
                summary.flight_time,
                self.flight.outcome,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Trajectory profile (y vs x)
                ui.vertical(|ui| {
                    ui.label("Trajectory Profile (m)");
                    let points: PlotPoints = sampled
                        .iter()
                        .map(|s| [s.pos.x, s.pos.y])
                        .collect();
                    Plot::new("profile")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Downrange (m)")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Trajectory", points));
                        });
                });

                // Altitude vs Time
                ui.vertical(|ui| {
                    ui.label("Altitude (m)");
                    let points: PlotPoints = sampled
                        .iter()
                        .map(|s| [s.time, s.pos.y])
                        .collect();
                    Plot::new("altitude")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Altitude", points));
                        });
                });
            });

            ui.horizontal(|ui| {
                // Speed vs Time
                ui.vertical(|ui| {
                    ui.label("Speed (m/s)");
                    let points: PlotPoints = sampled
                        .iter()
                        .map(|s| [s.time, s.speed()])
                        .collect();
                    Plot::new("speed")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Speed", points));
                        });
                });

                // Vertical velocity vs Time
                ui.vertical(|ui| {
                    ui.label("Vertical Velocity (m/s)");
                    let points: PlotPoints = sampled
                        .iter()
                        .map(|s| [s.time, s.vel.y])
                        .collect();
                    Plot::new("vy")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("vy", points));
                        });
                });
            });
        });
    }
}
