use std::time::Duration;

use anyhow::Result;

use super::args::Cli;
use super::handlers;

/// Upper bound on `--duration`; anything past a day is a typo, and huge
/// values would overflow the animation's end-time arithmetic.
const MAX_DURATION_SECS: f64 = 86_400.0;

pub fn run(cli: Cli) -> Result<()> {
    // try_from rejects NaN, infinities, and negatives in one place
    let duration = Duration::try_from_secs_f64(cli.duration)
        .map_err(|_| anyhow::anyhow!("--duration must be a finite, non-negative number of seconds"))?;
    if cli.duration > MAX_DURATION_SECS {
        anyhow::bail!("--duration must be at most {} seconds", MAX_DURATION_SECS as u64);
    }

    handlers::spin::handle(cli.ext.as_deref(), duration, cli.seed)
}
