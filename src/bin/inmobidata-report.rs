//! inmobidata-report: generate PDF reports for listings from the command line.

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use inmobidata_report::{
    format::format_price, mock, Image, ImageFetchError, ImageLoader, OfflineImageLoader, Property,
    Report, ReportComposer, ReportConfig, UrlImageLoader,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "inmobidata-report",
    version,
    about = "Generate PDF reports for real-estate listings",
    arg_required_else_help = true
)]
struct Cli {
    /// JSON array of listings to report on, instead of the demo listings
    #[arg(long, global = true, env = "INMOBIDATA_INPUT")]
    input: Option<PathBuf>,

    /// Report configuration (JSON)
    #[arg(long, global = true, env = "INMOBIDATA_CONFIG")]
    config: Option<PathBuf>,

    /// Don't fetch any images; galleries are left out
    #[arg(long, global = true)]
    offline: bool,

    /// Directory reports are written to
    #[arg(short, long, global = true, default_value = ".")]
    out_dir: PathBuf,

    /// More logging; repeat for more detail
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available listings
    List,
    /// Report on one listing
    Single {
        /// Listing id, e.g. 0000001
        id: String,
    },
    /// Combined report on several listings (all of them if none are named)
    Multi {
        ids: Vec<String>,
    },
    /// One-page PDF of a captured image (URL, path or data URI)
    Snapshot {
        image: String,
        /// Filename of the PDF
        #[arg(long, default_value = "captura.pdf")]
        name: String,
    },
}

/// Picks the image source at runtime
enum Loader {
    Url(UrlImageLoader),
    Offline(OfflineImageLoader),
}

impl ImageLoader for Loader {
    async fn load(&self, url: &str) -> Result<Image, ImageFetchError> {
        match self {
            Loader::Url(loader) => loader.load(url).await,
            Loader::Offline(loader) => loader.load(url).await,
        }
    }
}

fn load_properties(input: Option<&Path>) -> Result<Vec<Property>> {
    let Some(path) = input else {
        return Ok(mock::properties());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read listings from {}", path.display()))?;
    Property::list_from_json(&json)
        .with_context(|| format!("Invalid listings in {}", path.display()))
}

fn select<'a>(properties: &'a [Property], ids: &[String]) -> Result<Vec<&'a Property>> {
    ids.iter()
        .map(|id| {
            properties
                .iter()
                .find(|p| &p.id == id)
                .with_context(|| format!("No listing with id '{id}'"))
        })
        .collect()
}

fn write_report(report: &Report, out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let path = report.save(out_dir).context("Failed to save report")?;
    println!("{} ({} pages)", path.display(), report.page_count());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => ReportConfig::load(path).context("Failed to load report config")?,
        None => ReportConfig::default(),
    };
    let properties = load_properties(cli.input.as_deref())?;

    let loader = if cli.offline {
        Loader::Offline(OfflineImageLoader)
    } else {
        Loader::Url(UrlImageLoader::new(config.image_timeout_secs))
    };
    let composer = ReportComposer::new(config, loader);

    match &cli.command {
        Command::List => {
            for p in &properties {
                println!("{}  {}  {}", p.id, format_price(p.price), p.title);
            }
        }
        Command::Single { id } => {
            let property = select(&properties, std::slice::from_ref(id))?
                .pop()
                .with_context(|| format!("No listing with id '{id}'"))?;
            let report = composer.generate_single(property).await?;
            write_report(&report, &cli.out_dir)?;
        }
        Command::Multi { ids } => {
            let selected: Vec<Property> = if ids.is_empty() {
                properties.clone()
            } else {
                select(&properties, ids)?.into_iter().cloned().collect()
            };
            if selected.is_empty() {
                bail!("No listings to report on");
            }
            let report = composer.generate_multi(&selected).await?;
            write_report(&report, &cli.out_dir)?;
        }
        Command::Snapshot { image, name } => {
            let report = composer.generate_snapshot(image, name).await?;
            write_report(&report, &cli.out_dir)?;
        }
    }

    Ok(())
}
