//! Print the absolute links of a page, one per line.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use page_links::{extract_links, fetch_links, FetchConfig, Result};

/// Fetch a web page and list the links it contains
#[derive(Parser, Debug)]
#[command(name = "fetch-links", version, about)]
struct Cli {
    /// Page to fetch
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    url: Option<String>,

    /// Read the document from a file instead of fetching it ("-" for stdin)
    #[arg(short, long, requires = "base")]
    file: Option<PathBuf>,

    /// URL the local document is resolved against
    #[arg(short, long)]
    base: Option<String>,

    /// User-Agent header sent with the request
    #[arg(long)]
    user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn read_document(path: &Path, base: &str) -> Result<Vec<String>> {
    let reader: Box<dyn Read> = if path.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(File::open(path)?)
    };
    Ok(extract_links(reader, base))
}

async fn run(cli: Cli) -> Result<()> {
    let links = match &cli.file {
        Some(path) => read_document(path, cli.base.as_deref().unwrap_or_default())?,
        None => {
            let url = cli.url.unwrap_or_default();
            let mut config =
                FetchConfig::default().with_timeout(Duration::from_secs(cli.timeout_secs));
            if let Some(user_agent) = cli.user_agent {
                config = config.with_user_agent(user_agent);
            }
            fetch_links(&url, &config).await?
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for link in &links {
        writeln!(out, "{link}")?;
    }
    out.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
