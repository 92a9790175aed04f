use clap::Parser;

#[derive(Parser)]
#[command(name = "filereel")]
#[command(about = "Pick a random tracked file with a slot-machine spin", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Only spin over files with this extension (e.g. "rs" or ".rs")
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// How long the reel spins, in seconds
    #[arg(long, default_value_t = 5.0, value_name = "SECS")]
    pub duration: f64,

    /// Fix the winner selection for a reproducible spin
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}
