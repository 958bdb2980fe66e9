#![warn(missing_debug_implementations)]

use std::{
    io::{self, BufRead},
    sync::mpsc::{self, Receiver},
    thread,
    time::Instant,
};

use anyhow::Context;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use crate::{
    app::App,
    config::RunConfig,
    input::{parse_line, Input},
};

mod app;
mod config;
mod input;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = RunConfig::from_env().context("failed to load config")?;
    info!("config: {config:?}");

    let mut app = App::new(&config).context("failed to initialize app")?;
    let lines = spawn_stdin_reader();

    let mut last_frame = Instant::now();
    let mut frame = 0_u64;
    'frames: while config.frames == 0 || frame < config.frames {
        for line in lines.try_iter() {
            match parse_line(&line, &app.params) {
                Ok(Some(Input::Command(command))) => app.command_queue.push_back(command),
                Ok(Some(Input::Quit)) => break 'frames,
                Ok(None) => {}
                Err(err) => warn!("{err:#}"),
            }
        }

        let dt = config
            .fixed_dt
            .unwrap_or_else(|| last_frame.elapsed().as_secs_f32());
        last_frame = Instant::now();

        app.frame(dt)
            .with_context(|| format!("failed to run frame {frame}"))?;
        frame += 1;
    }

    app.log_summary()
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if sender.send(line).is_err() {
                break;
            }
        }
    });
    receiver
}
