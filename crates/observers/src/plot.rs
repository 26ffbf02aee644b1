//! Live egui view of a driven simulation.
//!
//! See [`LiveView`] for usage.

use std::time::Instant;

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use twang_core::{Pluck, SimulationEngine};
use twang_drive::{Command, Driver, Frame, Notification, apply};
use uom::si::{frequency::hertz, length::meter, velocity::meter_per_second};

use crate::FrameRate;

/// Slider positions, kept in step with the engine after every command.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Controls {
    resolution: usize,
    wave_speed: f64,
    damping: f64,
    steps_per_frame: usize,
}

impl From<&SimulationEngine> for Controls {
    fn from(engine: &SimulationEngine) -> Self {
        let params = engine.parameters();
        Self {
            resolution: params.resolution(),
            wave_speed: params.wave_speed().get::<meter_per_second>(),
            damping: params.damping().get::<hertz>(),
            steps_per_frame: params.steps_per_frame(),
        }
    }
}

/// An interactive window that animates a string.
///
/// Sliders change resolution, wave speed, damping, and steps per frame while
/// the simulation runs. Space or the pause button toggles pausing. Pressing
/// on the plot draws the string under the pointer, paused or not.
///
/// # Example
///
/// ```ignore
/// let engine = SimulationEngine::from_config(&Config::default())?;
/// LiveView::new(engine).show()?;
/// ```
pub struct LiveView {
    engine: SimulationEngine,
    driver: Driver,
    frame_rate: FrameRate,
    controls: Controls,
    pluck: Pluck,
    points: Vec<[f64; 2]>,
    y_limit: f64,
    status: String,
}

impl LiveView {
    #[must_use]
    pub fn new(engine: SimulationEngine) -> Self {
        let y_limit = engine
            .state()
            .peak()
            .map_or(0.0, |(_, y)| y.abs())
            .max(Pluck::default().amplitude.get::<meter>());
        Self {
            controls: Controls::from(&engine),
            engine,
            driver: Driver::new(),
            frame_rate: FrameRate::default(),
            pluck: Pluck::default(),
            points: Vec::new(),
            y_limit,
            status: String::new(),
        }
    }

    /// Sets the pluck used by the pluck button.
    #[must_use]
    pub fn with_pluck(self, pluck: Pluck) -> Self {
        Self { pluck, ..self }
    }

    /// Opens a blocking window running the simulation.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self) -> Result<(), eframe::Error> {
        eframe::run_native(
            "twang",
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(self))),
        )
    }

    fn submit(&mut self, command: Command) {
        match apply(&mut self.engine, command) {
            Ok(Some(Notification::SampleFrequency(frequency))) => {
                self.status = format!("sample frequency {:.0} Hz", frequency.get::<hertz>());
            }
            Ok(Some(Notification::Paused(paused))) => {
                self.status = if paused { "paused" } else { "running" }.to_owned();
            }
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(%error, ?command, "command rejected");
                self.status = error.to_string();
            }
        }
        self.controls = Controls::from(&self.engine);
    }

    fn advance(&mut self) -> usize {
        let points = &mut self.points;
        self.driver.tick(&mut self.engine, &mut |frame: &Frame<'_>| {
            points.clear();
            points.extend(
                frame
                    .displacement
                    .iter()
                    .enumerate()
                    .map(|(i, y)| [frame.parameters.position_of(i).get::<meter>(), *y]),
            );
        })
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui, commands: &mut Vec<Command>) {
        let controls = &mut self.controls;
        ui.horizontal(|ui| {
            if ui
                .add(egui::Slider::new(&mut controls.resolution, 2..=400).text("samples"))
                .changed()
            {
                commands.push(Command::SetResolution(controls.resolution));
            }
            if ui
                .add(
                    egui::Slider::new(&mut controls.wave_speed, 10.0..=400.0)
                        .text("wave speed (m/s)"),
                )
                .changed()
            {
                commands.push(Command::SetWaveSpeed(controls.wave_speed));
            }
        });
        ui.horizontal(|ui| {
            if ui
                .add(egui::Slider::new(&mut controls.damping, 0.0..=50.0).text("damping (1/s)"))
                .changed()
            {
                commands.push(Command::SetDamping(controls.damping));
            }
            if ui
                .add(
                    egui::Slider::new(&mut controls.steps_per_frame, 1..=100)
                        .text("steps per frame"),
                )
                .changed()
            {
                commands.push(Command::SetStepsPerFrame(controls.steps_per_frame));
            }
        });

        let paused = self.engine.is_paused();
        let sample_frequency = self.engine.parameters().sample_frequency().get::<hertz>();
        let fps = self.frame_rate.fps();
        ui.horizontal(|ui| {
            if ui.button(if paused { "Resume" } else { "Pause" }).clicked() {
                commands.push(Command::TogglePause);
            }
            if ui.button("Pluck").clicked() {
                commands.push(Command::Pluck {
                    position: self.pluck.position.get::<meter>(),
                    amplitude: self.pluck.amplitude.get::<meter>(),
                });
            }
            ui.separator();
            ui.label(format!("{sample_frequency:.0} Hz"));
            if let Some(fps) = fps {
                ui.label(format!("{fps:.0} fps"));
            }
            ui.label(self.status.as_str());
        });
    }
}

impl eframe::App for LiveView {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame_rate.tick(Instant::now());

        let mut commands = Vec::new();
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            commands.push(Command::TogglePause);
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls_ui(ui, &mut commands);
        });

        self.advance();

        let length = self.engine.parameters().length().get::<meter>();
        let resolution = self.engine.parameters().resolution();
        let limit = self.y_limit;
        let points = PlotPoints::from(self.points.clone());

        egui::CentralPanel::default().show(ctx, |ui| {
            let response = Plot::new("string")
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .include_x(0.0)
                .include_x(length)
                .include_y(-limit)
                .include_y(limit)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(points).name("displacement"));
                    let pressed = plot_ui.response().is_pointer_button_down_on();
                    plot_ui.pointer_coordinate().filter(|_| pressed)
                });

            if let Some(pointer) = response.inner {
                commands.push(Command::draw_at(pointer.x / length, pointer.y, resolution));
            }
        });

        for command in commands {
            self.submit(command);
        }

        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn controls_follow_the_engine() {
        let mut view = LiveView::new(SimulationEngine::default());

        view.submit(Command::SetResolution(150));
        view.submit(Command::SetWaveSpeed(120.0));

        assert_eq!(view.controls.resolution, 150);
        assert_relative_eq!(view.controls.wave_speed, 120.0);
        assert!(view.status.contains("Hz"));
    }

    #[test]
    fn rejected_commands_reset_controls() {
        let mut view = LiveView::new(SimulationEngine::default());
        view.controls.damping = -3.0;

        view.submit(Command::SetDamping(-3.0));

        assert_relative_eq!(view.controls.damping, 4.0);
        assert!(view.status.contains("damping"));
    }

    #[test]
    fn advance_plots_every_sample_against_position() {
        let mut view = LiveView::new(SimulationEngine::default());

        assert_eq!(view.advance(), 1);

        assert_eq!(view.points.len(), 100);
        assert_relative_eq!(view.points[99][0], 0.25, max_relative = 1e-12);
        assert_eq!(view.points[0][1], 0.0);
    }

    #[test]
    fn paused_view_still_refreshes_points() {
        let mut view = LiveView::new(SimulationEngine::default());
        view.submit(Command::Pause);
        view.submit(Command::Draw {
            index: 30,
            value: 0.002,
        });

        assert_eq!(view.advance(), 0);
        assert_eq!(view.points[30][1], 0.002);
        assert_eq!(view.status, "paused");
    }
}
