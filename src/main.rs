use clap::Parser;

mod cli;
mod stats;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    cli::Cli::parse().execute()
}
