use std::{collections::VecDeque, time::Instant};

use anyhow::Context;
use cgmath::{vec2, InnerSpace, Vector2, Zero};
use drop_sim::{Error, ParameterSet, Simulation};
use tracing::{info, warn};

use crate::config::RunConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Lay the drops out again with the current parameters.
    Reset,
    SetParams(ParameterSet),
    TogglePause,
    /// Advance a single tick while paused.
    Step,
    /// Turn the "down" axis by this many degrees.
    Rotate(f32),
}

/// Frame driver standing in for the windowed front end: it owns the one
/// writable [`ParameterSet`] and the rotation, and feeds both to the
/// simulation once per frame.
#[derive(Debug)]
pub struct App {
    pub sim: Simulation,
    pub config: RunConfig,
    pub params: ParameterSet,
    pub command_queue: VecDeque<Command>,

    /// Degrees, kept in `[0, 360)`.
    pub rotation: f32,
    pub paused: bool,
    pub paused_pending_step: u64,

    pub last_report: Instant,
    pub frame_count: u64,
    pub tick_count: u64,
}

impl App {
    pub fn new(config: &RunConfig) -> anyhow::Result<Self> {
        let mut params = config.params;
        let sim = match Simulation::with_capacity(config.capacity, &params) {
            Ok(sim) => sim,
            Err(err) => {
                params = config.clamp(params);
                warn!("{err}, retrying with {params:?}");
                Simulation::with_capacity(config.capacity, &params)
                    .context("failed to initialize simulation")?
            }
        };

        Ok(Self {
            sim,
            config: *config,
            params,
            command_queue: VecDeque::new(),

            rotation: config.rotation.rem_euclid(360.0),
            paused: false,
            paused_pending_step: 0,

            last_report: Instant::now(),
            frame_count: 0,
            tick_count: 0,
        })
    }

    /// Runs one frame: drains queued commands, then ticks unless paused.
    /// Returns whether the simulation advanced.
    pub fn frame(&mut self, dt: f32) -> anyhow::Result<bool> {
        while let Some(command) = self.command_queue.pop_front() {
            info!("on command: {command:?}");
            self.apply(command)?;
        }

        let should_tick = !self.paused || self.paused_pending_step > 0;
        self.paused_pending_step = self.paused_pending_step.saturating_sub(1);

        if should_tick {
            self.tick(dt)?;
            self.tick_count += 1;
        }

        self.frame_count += 1;
        let elapsed = self.last_report.elapsed().as_secs_f64();
        if elapsed >= 1.0 {
            info!(
                "fps: {:.2}, tps: {:.2}, drops: {}",
                self.frame_count as f64 / elapsed,
                self.tick_count as f64 / elapsed,
                self.sim.store().active_count(),
            );
            self.frame_count = 0;
            self.tick_count = 0;
            self.last_report = Instant::now();
        }

        Ok(should_tick)
    }

    fn apply(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Reset => self.relayout(self.params)?,
            Command::SetParams(params) => {
                let previous = self.params;
                self.params = params;
                if params.needs_relayout(&previous) {
                    self.relayout(params)?;
                }
            }
            Command::TogglePause => {
                self.paused = !self.paused;
                if !self.paused {
                    self.paused_pending_step = 0;
                }
                info!("paused: {}", self.paused);
            }
            Command::Step => {
                if self.paused {
                    info!("adding pending step");
                    self.paused_pending_step += 1;
                }
            }
            Command::Rotate(degrees) => {
                self.rotation = (self.rotation + degrees).rem_euclid(360.0);
                info!("rotation: {:.2}", self.rotation);
            }
        }
        Ok(())
    }

    fn relayout(&mut self, params: ParameterSet) -> anyhow::Result<()> {
        if let Err(err) = self.sim.reconfigure(&params) {
            self.params = self.config.clamp(params);
            warn!("{err}, clamped to {:?}", self.params);
            self.sim
                .reconfigure(&self.params)
                .context("failed to lay out clamped parameters")?;
        }
        Ok(())
    }

    fn tick(&mut self, dt: f32) -> anyhow::Result<()> {
        let direction = gravity_direction(self.rotation);
        match self.sim.step(dt, direction, &self.params) {
            Err(err @ Error::InvalidParameter { .. }) => {
                let previous = self.params;
                self.params = self.config.clamp(previous);
                warn!("{err}, clamped to {:?}", self.params);
                if self.params.needs_relayout(&previous) {
                    self.relayout(self.params)?;
                }
                self.sim
                    .step(dt, direction, &self.params)
                    .context("failed to step with clamped parameters")
            }
            result => result.context("failed to step simulation"),
        }
    }

    pub fn log_summary(&self) -> anyhow::Result<()> {
        let (min, max) = self.sim.positions().fold(
            (vec2(f32::MAX, f32::MAX), vec2(f32::MIN, f32::MIN)),
            |(min, max), pos| {
                (
                    vec2(min.x.min(pos.x), min.y.min(pos.y)),
                    vec2(max.x.max(pos.x), max.y.max(pos.y)),
                )
            },
        );
        let peak = self
            .sim
            .density_grid(&self.params, 64, 48)
            .context("failed to sample density")?
            .into_iter()
            .fold(0.0_f32, f32::max);

        info!(
            "ticks: {}, drops: {}, bounds: ({:.2}, {:.2})..({:.2}, {:.2}), peak density: {:.5}",
            self.sim.tick(),
            self.sim.store().active_count(),
            min.x,
            min.y,
            max.x,
            max.y,
            peak,
        );
        Ok(())
    }
}

/// Unit "down" axis for a view rotated by `degrees`; zero stays zero.
pub fn gravity_direction(degrees: f32) -> Vector2<f32> {
    let radians = degrees.to_radians();
    let direction = vec2(-radians.sin(), radians.cos());

    if direction.is_zero() {
        direction
    } else {
        direction.normalize()
    }
}
