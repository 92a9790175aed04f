mod args;
mod commands;
mod flicker;
mod handlers;
mod terminal;

pub use args::Cli;
pub use commands::run;
