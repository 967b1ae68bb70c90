use crate::config::FetcherConfig;
use crate::constants::DEFAULT_STORE_ID;
use crate::errors::AppResult;
use crate::listing::{ListingDocument, ListingFetcher};
use crate::models::StoreId;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

fn command() -> Command<'static> {
    Command::new("publix-bogo")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .after_help("Example:\n  publix-bogo --store 2500579 --timeout 5")
        .arg(
            Arg::new("store")
                .short('s')
                .long("store")
                .help("Publix store number")
                .default_value(DEFAULT_STORE_ID)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a TOML file overriding base_url, category_id, timeout_secs or user_agent")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .action(ArgAction::Set),
        )
}

/// Resolves the store and fetcher configuration from parsed arguments.
///
/// A `--timeout` flag takes precedence over `timeout_secs` from the config file.
fn resolve(matches: &ArgMatches) -> AppResult<(StoreId, FetcherConfig)> {
    let store = StoreId::new(
        matches
            .get_one::<String>("store")
            .expect("store has default_value")
            .as_str(),
    )?;

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => FetcherConfig::from_toml_file(path)?,
        None => FetcherConfig::default(),
    };
    if let Some(&timeout) = matches.get_one::<u64>("timeout") {
        config.timeout_secs = timeout;
    }
    config.validate()?;

    Ok((store, config))
}

/// Writes the raw date, the normalized date, then one item per line.
///
/// Lines are written as they are extracted, so the raw date is already out when
/// the normalized lookup fails.
pub fn write_listing<W: Write>(out: &mut W, document: &ListingDocument) -> AppResult<()> {
    writeln!(out, "{}", document.validity_date_raw()?)?;
    writeln!(out, "{}", document.validity_date_normalized()?)?;
    let items = document.bogo_items();
    for item in &items {
        writeln!(out, "{item}")?;
    }
    info!(items = items.len(), "BOGO listing printed");
    Ok(())
}

/// Parses command-line arguments, fetches the store's listing and prints it.
///
/// # Returns
///
/// Returns an error if the arguments or config file are invalid, the fetch fails,
/// or the page has no recognizable validity dates.
pub fn cli() -> AppResult<()> {
    let matches = command().get_matches();
    let (store, config) = resolve(&matches)?;

    info!(store = %store, base_url = %config.base_url, "Starting fetch");
    let fetcher = ListingFetcher::with_config(store, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listing(&mut out, fetcher.document())
}
