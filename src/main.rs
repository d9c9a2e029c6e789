use anyhow::Result;
use clap::{Parser, ValueEnum};
use country_search::interactive::constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_REQUEST_TIMEOUT_SECS};
use country_search::{
    InteractiveSearch, RestCountries, SearchOptions, SuggestionClient, format_country_line,
    logging,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "country-search",
    version,
    about = "Search-as-you-type country lookup for the terminal",
    long_about = None
)]
struct Cli {
    /// Initial search text
    query: Option<String>,

    /// Base URL of the country lookup API
    #[arg(long, env = "COUNTRY_SEARCH_API_URL", default_value = country_search::api::DEFAULT_API_URL)]
    api_url: String,

    /// Quiet interval after the last keystroke before a lookup is issued
    #[arg(long, default_value_t = DEFAULT_DEBOUNCE_MS)]
    debounce_ms: u64,

    /// HTTP timeout for a single lookup
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Look up the query once, print the matches and exit
    #[arg(short, long, requires = "query")]
    print: bool,

    /// Output format for --print
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Write diagnostics to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    JsonL,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(cli.log_file.as_deref(), cli.verbose)?;

    let options = SearchOptions {
        api_url: cli.api_url,
        debounce_ms: cli.debounce_ms,
        request_timeout: Duration::from_secs(cli.timeout_secs),
        verbose: cli.verbose,
    };

    if cli.print {
        let query = cli.query.unwrap_or_default();
        return print_matches(&options, &query, cli.format, !cli.no_color);
    }

    let mut interactive = InteractiveSearch::new(options)?;
    interactive.run(cli.query.as_deref())
}

fn print_matches(
    options: &SearchOptions,
    query: &str,
    format: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let lookup = RestCountries::new(options.api_url.clone(), options.request_timeout)?;
    let client = SuggestionClient::new(Arc::new(lookup));

    if options.verbose {
        eprintln!("Looking up: {query}");
    }

    let countries = client.fetch_suggestions(query);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            if countries.is_empty() {
                writeln!(&mut handle, "No countries found.")?;
            } else {
                for country in &countries {
                    writeln!(&mut handle, "{}", format_country_line(country, use_color))?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, &countries)?;
            writeln!(&mut handle)?;
        }
        OutputFormat::JsonL => {
            for country in &countries {
                serde_json::to_writer(&mut handle, country)?;
                writeln!(&mut handle)?;
            }
        }
    }

    Ok(())
}
