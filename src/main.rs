use anyhow::Result;
use clap::Parser;
use factor_pairs::cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only results (and clean JSON)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("factor_pairs=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
