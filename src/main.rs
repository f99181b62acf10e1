//! kwhstat - Chart PG&E interval billing exports

use clap::Parser;
use kwhstat::{
    charts::build_chart,
    cli::Cli,
    diagnostics::{CollectingSink, DiagnosticSink, ReportingSink, SilentSink},
    error::Result,
    output::get_renderer,
    provider::RecordSource,
};
use kwhstat_provider_pge::DataLoader;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --verbose overrides RUST_LOG
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("kwhstat=info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kwhstat=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let graph = cli.graph()?;
    let range = cli.date_range()?;
    info!("Producing view {} for {}", graph, cli.display_name());

    let show_progress = !cli.json && is_terminal::is_terminal(std::io::stdout());
    let loader = DataLoader::new(&cli.filename)
        .with_skip_lines(cli.skip_lines)
        .with_progress(show_progress);
    let loaded = loader.load()?;
    let name = loader.source_name();

    let chart = if cli.quiet {
        build_chart(graph, &loaded.records, &range, name, &mut SilentSink::new())
    } else if cli.json {
        // Keep stdout valid JSON
        let mut sink = CollectingSink::new();
        let chart = build_chart(graph, &loaded.records, &range, name, &mut sink);
        for message in sink.messages() {
            warn!("{message}");
        }
        chart
    } else {
        let mut sink = ReportingSink::new();
        let chart = build_chart(graph, &loaded.records, &range, name, &mut sink);
        if let Some(last) = sink.last_message() {
            info!("Last data warning: {last}");
        }
        chart
    };

    println!("{}", get_renderer(cli.json).render(&chart)?);
    Ok(())
}
