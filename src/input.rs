use anyhow::{anyhow, bail, Context};
use drop_sim::ParameterSet;

use crate::app::Command;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Command(Command),
    Quit,
}

/// Parses one line of the stdin control surface.
///
/// ```text
/// r | reset            lay the drops out again
/// p | pause            toggle pause
/// s | step             single tick while paused
/// rotate <degrees>     turn the "down" axis
/// set <field> <value>  edit a parameter of `params`
/// q | quit
/// ```
pub fn parse_line(line: &str, params: &ParameterSet) -> anyhow::Result<Option<Input>> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };

    let input = match head {
        "r" | "reset" => Input::Command(Command::Reset),
        "p" | "pause" => Input::Command(Command::TogglePause),
        "s" | "step" => Input::Command(Command::Step),
        "q" | "quit" => Input::Quit,
        "rotate" => {
            let degrees = words
                .next()
                .ok_or(anyhow!("rotate needs an angle"))?
                .parse()
                .context("failed to parse angle")?;
            Input::Command(Command::Rotate(degrees))
        }
        "set" => {
            let (Some(field), Some(value)) = (words.next(), words.next()) else {
                bail!("usage: set <field> <value>");
            };
            Input::Command(Command::SetParams(with_field(params, field, value)?))
        }
        _ => bail!("unknown command: {line:?}"),
    };

    if words.next().is_some() {
        bail!("trailing input: {line:?}");
    }
    Ok(Some(input))
}

fn with_field(params: &ParameterSet, field: &str, value: &str) -> anyhow::Result<ParameterSet> {
    let mut params = *params;
    let context = || format!("failed to parse value for {field}: {value:?}");

    if field == "count" {
        params.active_count = value.parse().with_context(context)?;
        return Ok(params);
    }

    let value: f32 = value.parse().with_context(context)?;
    let slot = match field {
        "spacing" => &mut params.spacing,
        "radius" => &mut params.radius,
        "smoothing" => &mut params.smoothing_radius,
        "gravity" => &mut params.gravity,
        "damping" => &mut params.damping,
        "terminal" => &mut params.terminal_velocity,
        "width" => &mut params.domain_width,
        "height" => &mut params.domain_height,
        _ => bail!("unknown field: {field:?}"),
    };
    *slot = value;

    Ok(params)
}
