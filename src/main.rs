use clap::Parser;
use nexus::cli::commands::Cli;
use nexus::cli::handlers;
use nexus::io::logging::{LOG_DIR_ENV, init_logging, log_target};

fn main() {
    let cli = Cli::parse();

    let log_dir = std::env::var_os(LOG_DIR_ENV).map(std::path::PathBuf::from);
    let target = log_target(
        cli.log_file.as_deref(),
        log_dir.as_deref(),
        cli.command.is_none(),
    );
    init_logging(&target, cli.verbose);

    if cli.command.is_none() {
        // No subcommand → launch TUI
        let result = handlers::effective_config(&cli)
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
            .and_then(|config| nexus::tui::run(config, cli.route.as_deref()));
        if let Err(e) = result {
            tracing::error!(error = %e, "exiting");
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    } else if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
