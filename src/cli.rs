use clap::{CommandFactory, Parser, ValueEnum};
use colored::Colorize;
use std::time::Duration;
use url::Url;

use crate::stats::{self, Aggregator, ApiClient, Endpoint};

/// CLI tool to track COVID-19 statistics.
#[derive(Parser)]
#[command(version, about, long_about=None)]
pub struct Cli {
    /// View global, country, state, or county-specific data
    #[arg(short, long, value_enum)]
    scope: Scope,

    /// The country to view data for (required for --scope country)
    #[arg(short = 'C', long)]
    country: Option<String>,

    /// The 2-letter code of the state to view data for (required for
    /// --scope state and --scope county)
    #[arg(short = 'S', long)]
    state: Option<String>,

    /// The county to view data for (required for --scope county)
    #[arg(short = 'c', long)]
    county: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// API root to query
    #[arg(long, default_value = stats::DEFAULT_BASE_URL)]
    base_url: Url,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scope {
    Global,
    Country,
    State,
    County,
}

enum Query {
    Global,
    Country(String),
    State(String),
    County { county: String, state: String },
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        let Some(query) = self.query() else {
            Cli::command().print_help()?;
            return Ok(());
        };
        let client = ApiClient::new(self.base_url, Duration::from_secs(self.timeout))?;
        if let Err(err) = run(&client, query) {
            // Lookup misses and API trouble go to stdout, not stderr.
            println!("{} {err}", "[-]".red());
        }
        Ok(())
    }

    /// Checks the flag combination for the requested scope. `None` means the
    /// combination is incomplete and only the help text should be shown.
    fn query(&self) -> Option<Query> {
        match self.scope {
            Scope::Global => Some(Query::Global),
            Scope::Country => self.country.clone().map(Query::Country),
            Scope::State => self.state_code().map(Query::State),
            Scope::County => match (self.county.clone(), self.state_code()) {
                (Some(county), Some(state)) => Some(Query::County { county, state }),
                _ => None,
            },
        }
    }

    fn state_code(&self) -> Option<String> {
        self.state.clone().filter(|code| code.len() == 2)
    }
}

fn run(client: &ApiClient, query: Query) -> Result<(), stats::Error> {
    let aggregator = Aggregator::new();
    match query {
        Query::Global => {
            let records = client.fetch(Endpoint::Countries)?;
            print!("{}", stats::render("global", &aggregator.global(&records)));
        }
        Query::Country(country) => {
            let records = client.fetch(Endpoint::Countries)?;
            let summary = aggregator.country(&records, &country)?;
            print!("{}", stats::render(&country, &summary));
        }
        Query::State(code) => {
            let records = client.fetch(Endpoint::Cities)?;
            let (full_name, summary) = aggregator.state(&records, &code)?;
            print!("{}", stats::render(&full_name, &summary));
        }
        Query::County { county, state } => {
            let records = client.fetch(Endpoint::Cities)?;
            let (label, summary) = aggregator.county(&records, &county, &state)?;
            print!("{}", stats::render(&label, &summary));
        }
    }
    Ok(())
}
