// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use crate::{
    config::{
        consts::{BROKERS_URL, COMPANIES_URL, DEFAULT_OUT_DIR, GEOCODE_ENDPOINT, GEOCODE_KEY_ENV},
        options::{AddressFallback, Directory, ScrapeOptions, out_path_in},
    },
    core::net::HttpClient,
    file::read_records,
    geocode::{Geocode, GoogleGeocoder},
    normalize::AddressNormalizer,
    runner,
    scrape::Scraper,
    search::search,
};

#[derive(Debug, Parser)]
#[command(name = "tira_scrape", version, about = "Scrape the TIRA licensed insurance companies and brokers directory")]
pub struct Cli {
    /// More output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also append log lines to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Without a subcommand the binary scrapes, taking these flags directly.
    #[command(flatten)]
    pub scrape: ScrapeArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape the directories and write one JSON file per directory.
    Scrape(ScrapeArgs),
    /// Search scraped collections by company name.
    Search(SearchArgs),
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Only scrape these directories (companies, brokers). Repeatable.
    #[arg(long = "only", value_name = "DIRECTORY")]
    pub only: Vec<Directory>,

    #[arg(short, long, env = "TIRA_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Stop after this many listing pages per directory.
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// What to store when an address can't be geocoded: null, raw or omit.
    #[arg(long, default_value = "null")]
    pub address_fallback: AddressFallback,

    #[arg(long, env = GEOCODE_KEY_ENV, hide_env_values = true)]
    pub geocode_key: Option<String>,

    #[arg(long, env = "TIRA_GEOCODE_ENDPOINT", default_value = GEOCODE_ENDPOINT)]
    pub geocode_endpoint: String,

    /// Per-request HTTP timeout in seconds.
    #[arg(long, env = "TIRA_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Rewrite the output file after every listing page.
    #[arg(long)]
    pub checkpoint: bool,

    #[arg(long, env = "TIRA_COMPANIES_URL", default_value = COMPANIES_URL)]
    pub companies_url: String,

    #[arg(long, env = "TIRA_BROKERS_URL", default_value = BROKERS_URL)]
    pub brokers_url: String,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub query: String,

    /// Directory holding the scraped JSON files.
    #[arg(short, long, env = "TIRA_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,
}

impl From<ScrapeArgs> for ScrapeOptions {
    fn from(a: ScrapeArgs) -> Self {
        let directories = if a.only.is_empty() {
            Directory::ALL.to_vec()
        } else {
            let mut dirs = Vec::new();
            for d in a.only {
                if !dirs.contains(&d) {
                    dirs.push(d);
                }
            }
            dirs
        };
        Self {
            directories,
            companies_url: a.companies_url,
            brokers_url: a.brokers_url,
            max_pages: a.max_pages,
            address_fallback: a.address_fallback,
            geocode_key: a.geocode_key,
            geocode_endpoint: a.geocode_endpoint,
            out_dir: a.out_dir,
            timeout: a.timeout.map(Duration::from_secs),
            checkpoint: a.checkpoint,
        }
    }
}

pub fn run() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    crate::log::init(cli.verbose, cli.log_file.as_deref())?;

    match cli.command.unwrap_or(Command::Scrape(cli.scrape)) {
        Command::Scrape(args) => scrape(args.into()),
        Command::Search(args) => search_cmd(args),
    }
}

fn scrape(options: ScrapeOptions) -> Result<()> {
    let http = HttpClient::with_timeout(options.timeout)?;

    let geocoder = options.geocode_key().map(|key| {
        Box::new(GoogleGeocoder::with_endpoint(http.client().clone(), options.geocode_endpoint.clone(), key))
            as Box<dyn Geocode>
    });
    let address = AddressNormalizer::new(geocoder, options.address_fallback);
    let scraper = Scraper::new(&http, &address).with_max_pages(options.max_pages);

    let summary = runner::run(&options, &scraper, None)?;
    for ((dir, count), path) in summary.counts.iter().zip(&summary.files_written) {
        println!("{dir}: {count} records -> {}", path.display());
    }
    Ok(())
}

fn search_cmd(args: SearchArgs) -> Result<()> {
    let mut collections = Vec::new();
    for dir in Directory::ALL {
        let path = out_path_in(&args.out_dir, dir);
        if !path.exists() {
            info!("No {dir} collection at {}; skipping", path.display());
            continue;
        }
        let records = read_records(&path).wrap_err_with(|| format!("loading {}", path.display()))?;
        collections.push((dir, records));
    }

    let hits = search(&collections, &args.query);
    println!("{}", serde_json::to_string_pretty(&hits)?);
    Ok(())
}
