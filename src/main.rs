use std::env;

use invest_calc::api::{AppState, run_http_server};
use invest_calc::config::ConfigLoader;
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 8080;
const USAGE: &str = "Usage: invest-calc serve [port] [config.yaml]";

/// Reads the optional port argument. An absent port means the default; an
/// unparseable one is `None`.
fn parse_port(arg: Option<&str>) -> Option<u16> {
    match arg {
        Some(text) => text.parse::<u16>().ok(),
        None => Some(DEFAULT_PORT),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let raw_args: Vec<String> = env::args().collect();
    if raw_args.get(1).map(|s| s.as_str()) == Some("serve") {
        let port_arg = raw_args.get(2).map(|s| s.as_str());
        let Some(port) = parse_port(port_arg) else {
            error!(port = port_arg.unwrap_or_default(), "Invalid port");
            eprintln!("{}", USAGE);
            std::process::exit(1);
        };

        let loader = match raw_args.get(3) {
            Some(path) => match ConfigLoader::load(path) {
                Ok(loader) => loader,
                Err(e) => {
                    error!(error = %e, "Failed to load configuration");
                    std::process::exit(1);
                }
            },
            None => ConfigLoader::builtin(),
        };

        if let Err(e) = run_http_server(port, AppState::new(loader)).await {
            error!(error = %e, "Server error");
            std::process::exit(1);
        }
        return;
    }

    eprintln!("{}", USAGE);
    std::process::exit(1);
}
