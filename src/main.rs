use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use tracing::{error, info};

use time_window::cli::{parse_args, print_help};
use time_window::config::Config;

fn main() -> Result<()> {
    let args = parse_args();

    if args.help {
        print_help();
        return Ok(());
    }

    if let Some(e) = args.error {
        bail!("{}", e);
    }

    // Initialize logging; stdout is reserved for the answer
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("time_window=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let window = config.window();
    info!("Window: {}", window);

    // Handle --validate mode
    if args.validate {
        info!("Validating configuration...");
        match config.validate() {
            Ok(()) => {
                info!("Configuration is valid");
                return Ok(());
            }
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
    }

    // Instants are normalized to UTC, the same frame start/stop are parsed into
    let instant = match args.at {
        Some(at) => DateTime::parse_from_rfc3339(&at)
            .with_context(|| format!("--at '{}' is not an RFC 3339 timestamp", at))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    if window.contains(&instant) {
        info!("{} is inside the window", instant.to_rfc3339());
        println!("inside");
        Ok(())
    } else {
        info!("{} is outside the window", instant.to_rfc3339());
        println!("outside");
        std::process::exit(1);
    }
}
