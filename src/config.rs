use std::{env, str::FromStr};

use anyhow::Context;
use drop_sim::{params::MAX_DROPS, ParameterSet};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfig {
    pub params: ParameterSet,
    pub capacity: usize,
    /// Upper bounds for the domain size when parameters get range-limited.
    pub max_width: f32,
    pub max_height: f32,

    /// Frames to run before exiting, `0` runs until `quit`.
    pub frames: u64,
    /// Seconds per frame. `None` uses the measured wall-clock delta.
    pub fixed_dt: Option<f32>,
    /// Initial rotation of the "down" axis in degrees.
    pub rotation: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            params: ParameterSet::default(),
            capacity: MAX_DROPS,
            max_width: 1920.0,
            max_height: 1080.0,

            frames: 600,
            fixed_dt: None,
            rotation: 0.0,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let lookup = &lookup as &dyn Fn(&str) -> Option<String>;
        let mut config = Self::default();

        let params = &mut config.params;
        read_into(lookup, "DROP_SIM_COUNT", &mut params.active_count)?;
        read_into(lookup, "DROP_SIM_SPACING", &mut params.spacing)?;
        read_into(lookup, "DROP_SIM_RADIUS", &mut params.radius)?;
        read_into(lookup, "DROP_SIM_SMOOTHING", &mut params.smoothing_radius)?;
        read_into(lookup, "DROP_SIM_GRAVITY", &mut params.gravity)?;
        read_into(lookup, "DROP_SIM_DAMPING", &mut params.damping)?;
        read_into(
            lookup,
            "DROP_SIM_TERMINAL_VELOCITY",
            &mut params.terminal_velocity,
        )?;
        read_into(lookup, "DROP_SIM_WIDTH", &mut params.domain_width)?;
        read_into(lookup, "DROP_SIM_HEIGHT", &mut params.domain_height)?;

        read_into(lookup, "DROP_SIM_CAPACITY", &mut config.capacity)?;
        read_into(lookup, "DROP_SIM_MAX_WIDTH", &mut config.max_width)?;
        read_into(lookup, "DROP_SIM_MAX_HEIGHT", &mut config.max_height)?;
        read_into(lookup, "DROP_SIM_FRAMES", &mut config.frames)?;
        read_into(lookup, "DROP_SIM_ROTATION", &mut config.rotation)?;
        if let Some(raw) = lookup("DROP_SIM_FIXED_DT") {
            config.fixed_dt = Some(parse("DROP_SIM_FIXED_DT", &raw)?);
        }

        Ok(config)
    }

    /// `params` limited to the ranges the configuration surface allows.
    pub fn clamp(&self, params: ParameterSet) -> ParameterSet {
        params.clamp_to_ranges(self.capacity, self.max_width, self.max_height)
    }
}

fn read_into<T>(
    lookup: &dyn Fn(&str) -> Option<String>,
    key: &str,
    field: &mut T,
) -> anyhow::Result<()>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    if let Some(raw) = lookup(key) {
        *field = parse(key, &raw)?;
    }
    Ok(())
}

fn parse<T>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("failed to parse {key}={raw:?}"))
}
