use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use svcguard_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() {
    // Load .env before parsing so env-backed flags can see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            e.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
        }
    };

    std::process::exit(code);
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    if cli.command.is_none() {
        Cli::command().print_help()?;
        return Ok(0);
    }

    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(config)?;

    match cli.command {
        Some(Commands::Run(args)) => handlers::run::execute(&ctx, args).await,
        Some(Commands::Status { service, json }) => {
            handlers::status::execute(&ctx, service.as_ref(), json)?;
            Ok(0)
        }
        Some(Commands::Stop { service }) => {
            handlers::stop::execute(&ctx, &service).await?;
            Ok(0)
        }
        Some(Commands::Paths) => {
            handlers::paths::execute(&ctx)?;
            Ok(0)
        }
        None => Ok(0),
    }
}
