use airdesk_cli::Session;
use airdesk_store::{app_config::Config, load_schedule};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let schedule_arg = std::env::args().nth(1);
    let config = Config::load_with_schedule(schedule_arg.as_deref())
        .context("Failed to load config")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let registry = load_schedule(&config.schedule.path).map_err(|err| {
        tracing::error!(error = %err, "Schedule could not be loaded");
        err
    })?;
    tracing::info!(flights = registry.len(), "Starting booking desk");

    let stdout = std::io::stdout();
    let mut session = Session::new(registry, stdout.lock())
        .with_format(config.cli.output)
        .with_prompt(config.cli.prompt.clone());

    session.run(std::io::stdin().lock())
}
