//! Command-line caller for the challenges leaderboard: loads configuration
//! from the environment (optionally from a .env file), fetches the
//! leaderboard once and prints the status line and body.

use challenges_api::{
    config::{self, ApiConfig},
    GameApiClient, LeaderboardApi,
};
use chrono::Utc;
use std::{env, process};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Exit code used when the server answered with a non-success status.
const EXIT_HTTP_STATUS: i32 = 2;

#[derive(Debug, Default)]
struct Args {
    env_file: Option<String>,
    base_url: Option<String>,
    origin: Option<String>,
    proxy: Option<String>,
    verbose: bool,
}

/// The main entry point of the CLI
#[tokio::main]
async fn main() {
    let args = env::args().skip(1).collect::<Vec<String>>();

    // Show help and exit if requested.
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        process::exit(0);
    }

    // Show version and exit if requested.
    if args.iter().any(|a| a == "--version") {
        println!("challenges {}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    let args = match parse_args(&args) {
        Ok(a) => a,
        Err(msg) => {
            eprintln!("[ERROR] {msg}");
            eprintln!("Try 'challenges --help' for more information.");
            process::exit(1);
        }
    };

    init_logging(args.verbose);

    // If we have an env file, load it before reading any configuration.
    if let Some(env_path) = &args.env_file {
        debug!(path = %env_path, "loading environment file");
        if let Err(e) = dotenvy::from_filename(env_path) {
            error!("Failed to load .env file '{env_path}': {e}");
            process::exit(1);
        }
    }

    let config = match build_config(&args) {
        Ok(c) => c,
        Err(msg) => {
            error!("{msg}");
            process::exit(1);
        }
    };

    let client = match GameApiClient::new(config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create client: {e}");
            process::exit(1);
        }
    };

    info!(
        url = %challenges_api::leaderboard_url(client.config()),
        "requesting leaderboard"
    );
    let started = Utc::now();

    let resp = match client.leaderboard().await {
        Ok(r) => r,
        Err(e) => {
            error!("Leaderboard request failed: {e}");
            process::exit(1);
        }
    };

    let status = resp.status();
    let body = match resp.text().await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to read response body: {e}");
            process::exit(1);
        }
    };
    debug!(
        elapsed_ms = (Utc::now() - started).num_milliseconds(),
        bytes = body.len(),
        "response received"
    );

    println!("HTTP {status}");
    println!("{}", render_body(&body));

    if !status.is_success() {
        process::exit(EXIT_HTTP_STATUS);
    }
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--env-file" | "-e" => {
                parsed.env_file = Some(take_value(args, &mut i, "--env-file requires a file name.")?);
            }
            "--base-url" | "-b" => {
                parsed.base_url = Some(take_value(args, &mut i, "--base-url requires a URL.")?);
            }
            "--origin" | "-o" => {
                parsed.origin = Some(take_value(args, &mut i, "--origin requires a URL.")?);
            }
            "--proxy" | "-x" => {
                parsed.proxy = Some(take_value(args, &mut i, "--proxy requires a proxy URL.")?);
            }
            "--verbose" | "-v" => {
                parsed.verbose = true;
            }
            other => return Err(format!("Unrecognized argument '{other}'.")),
        }
        i += 1;
    }

    Ok(parsed)
}

fn take_value(args: &[String], i: &mut usize, missing: &str) -> Result<String, String> {
    *i += 1;
    args.get(*i).cloned().ok_or_else(|| missing.to_string())
}

/// Environment first, then command-line flags on top.
fn build_config(args: &Args) -> Result<ApiConfig, String> {
    let mut config = ApiConfig::from_env().map_err(|e| e.to_string())?;

    if let Some(base) = &args.base_url {
        config.base_url = base.clone();
    }
    if let Some(origin) = &args.origin {
        let url = Url::parse(origin)
            .map_err(|e| format!("Invalid --origin '{origin}' (expected an absolute URL): {e}"))?;
        config = config.with_origin(url);
    }
    if let Some(proxy) = &args.proxy {
        config = config.with_proxy(proxy.clone());
    }

    Ok(config)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Pretty-print JSON bodies, pass anything else through as-is.
fn render_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
        .unwrap_or_else(|| body.to_string())
}

fn print_help() {
    println!(
        r#"Usage: challenges [OPTION]...
Fetch the challenges leaderboard once and print the response.

The base URL comes from {base_env} (default "{default_base}").
Relative base URLs need an origin, from {origin_env} or --origin.

Options:
  -e, --env-file [FILE]        Load environment variables from a .env file.
  -b, --base-url [URL]         Override the base URL.
  -o, --origin [URL]           Resolve a relative base URL against this origin.
  -x, --proxy [PROXY]          Send the request through an HTTP proxy.
  -v, --verbose                Log at debug level (RUST_LOG takes precedence).
  -h, --help                   Display this help and exit.
      --version                Output version information and exit.

Exit status:
  0  success
  1  configuration or transport failure
  2  the server answered with a non-success status

Examples:
  challenges -b http://localhost:9000
  challenges -e .env
  challenges -o https://challenges.example.com
"#,
        base_env = config::BASE_URL_ENV,
        default_base = config::DEFAULT_BASE_URL,
        origin_env = config::ORIGIN_ENV,
    );
}
