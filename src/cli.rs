use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "dk", about = concat!("[#] desk v", env!("CARGO_PKG_VERSION"), " - tasks, notes, and a calendar for your terminal"), version)]
pub struct Cli {
    /// Start in the notes workspace
    #[arg(long)]
    pub notes: bool,

    /// Start on the calendar pane
    #[arg(long)]
    pub calendar: bool,

    /// Use a different config file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Level for the session log file (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Don't restore the previous session's view state
    #[arg(long)]
    pub fresh: bool,
}
