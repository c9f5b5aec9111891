use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("coparent error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = cp_config::CoparentConfig::load_with_dotenv()
        .context("failed to load coparent configuration")?;

    let flags = cli.global_flags(&config.general);
    ui::init(&flags);

    let ctx = context::AppContext::init(config).context("failed to open the session store")?;

    if command_requires_session(&cli.command) && !ctx.session.is_logged_in() {
        anyhow::bail!("not logged in; run `coparent auth login <email> <password>` first");
    }

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("COPARENT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Commands behind the "must be logged in" gate.
const fn command_requires_session(command: &cli::Commands) -> bool {
    match command {
        cli::Commands::Dashboard
        | cli::Commands::Children { .. }
        | cli::Commands::Plans { .. }
        | cli::Commands::Visits { .. }
        | cli::Commands::Messages { .. }
        | cli::Commands::Journal { .. } => true,
        cli::Commands::Home | cli::Commands::Auth { .. } => false,
    }
}
