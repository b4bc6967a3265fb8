use clap::Parser;
use color_eyre::Result;
use ieam_admin::cli::CliArgs;
use ieam_admin::{event, logging, terminal, App, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = AppConfig::from_env()?;
    logging::init(&config.log_file, config.debug)?;
    info!(database = %config.database_path.display(), "Starting ieam-admin");

    let mut app = App::new(config);

    if args.wants_export() {
        let path = event::run_export(&mut app).await?;
        println!("Site export written to {}", path.display());
        return Ok(());
    }

    if args.headless || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    if let Err(e) = app.actions.initialize().await {
        error!("Error initializing database: {e}");
        app.show_alert("Erro ao conectar ao banco de dados.");
    }

    let mut terminal = terminal::setup_terminal()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup_terminal_state(true, true);

    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
