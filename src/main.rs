use clap::Parser;
use jobagg::cli::Cli;
use jobagg::{output, Pipeline};
use jobagg_core::config::Config;
use jobagg_sources::{Provider, ScrapeOptions};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout is reserved for the JSON document.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level())),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not load user config; using defaults");
            Config::defaults()
        }),
    };

    let request = cli.to_request(&config.search)?;
    let provider = Provider::from_config(&config.provider)?;
    let pipeline = Pipeline::new(provider, config.provider.timeout()).with_options(ScrapeOptions {
        fetch_description: config.provider.fetch_description,
        description_format: config.provider.description_format,
    });

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(pipeline.run(&request));

    output::write_result(
        &result,
        cli.output_file.as_deref(),
        config.output.pretty && !cli.compact,
    )
}
