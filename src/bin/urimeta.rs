//! Print link-preview metadata for a URL as JSON.
//!
//! ```text
//! urimeta [--config options.toml] <url>
//! urimeta [--config options.toml] --html <url> < page.html
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, Read};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use uri_meta::{Options, UriMetaExtractor};

const USAGE: &str = "usage: urimeta [--config <file>] [--html] <url>";

struct Args {
    config: Option<String>,
    html_from_stdin: bool,
    url: String,
}

fn parse_args() -> Result<Args, String> {
    let mut config = None;
    let mut html_from_stdin = false;
    let mut url = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                config = Some(args.next().ok_or("--config needs a file")?);
            }
            "--html" => html_from_stdin = true,
            "--help" | "-h" => return Err(USAGE.to_string()),
            _ if url.is_none() => url = Some(arg),
            _ => return Err(format!("unexpected argument `{arg}`\n{USAGE}")),
        }
    }

    Ok(Args {
        config,
        html_from_stdin,
        url: url.ok_or(USAGE)?,
    })
}

fn run(args: &Args) -> Result<String, String> {
    let options = match &args.config {
        Some(path) => Options::from_file(path).map_err(|err| err.to_string())?,
        None => Options::default(),
    };
    let extractor = UriMetaExtractor::new(options);

    let meta = if args.html_from_stdin {
        let mut html = String::new();
        io::stdin()
            .read_to_string(&mut html)
            .map_err(|err| format!("failed to read stdin: {err}"))?;
        extractor.from_html(&html, &args.url)
    } else {
        extractor.extract(&args.url)
    }
    .map_err(|err| err.to_string())?;

    serde_json::to_string_pretty(&meta.to_json()).map_err(|err| err.to_string())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let result = parse_args().and_then(|args| run(&args));
    match result {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
