use clap::Parser;
use desk::cli::Cli;
use desk::io::config_io;

fn main() {
    let cli = Cli::parse();

    // Best-effort: a session without a log file is still usable
    if let Err(e) = desk::logging::init(&cli.log_level) {
        eprintln!("warning: file logging disabled: {}", e);
    }

    let config = match config_io::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = desk::tui::run(config, &cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
