use crate::cli::commands::*;
use crate::cli::output::format_route_table;
use crate::io::config_io::{self, ConfigError};
use crate::model::config::AppConfig;
use crate::router::{RouteSet, route_table};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a subcommand against the effective config
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = effective_config(&cli)?;
    match cli.command {
        None => Err("no subcommand given".into()),
        Some(Commands::Routes(args)) => cmd_routes(args, &config),
    }
}

/// Load the config file (explicit or from the working directory) and apply
/// command-line overrides
pub fn effective_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let cwd = std::env::current_dir().unwrap_or_default();
    let mut config = config_io::load_config(cli.config.as_deref(), &cwd)?;
    cli.apply_overrides(&mut config);
    Ok(config)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_routes(args: RoutesArgs, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let rows = route_table(&RouteSet::from_features(&config.features));
    tracing::debug!(enabled = rows.iter().filter(|r| r.enabled).count(), "route table");
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", format_route_table(&rows));
    }
    Ok(())
}
