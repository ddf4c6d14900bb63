//! Mintgate API server binary
//!
//! Usage: `mintgate-api [config.json] [--profile <name>]`
//!
//! The config file may hold either a single configuration or a set of named
//! deployment profiles.

use std::path::Path;

use anyhow::Context;
use mintgate_api::{start_server, AppState};
use mintgate_core::{AppConfig, DeployConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mintgate=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .init();

    let (config_path, profile) = parse_args();
    let config = load_config(&config_path, profile.as_deref())?;

    tracing::info!(
        network = %config.network,
        contract = %config.drop.address,
        "Starting Mintgate"
    );

    let port = config.api_port;
    let state = AppState::connect(config)
        .await
        .context("Failed to connect chain client")?;

    start_server(state, port).await.context("API server failed")
}

fn parse_args() -> (String, Option<String>) {
    let mut config_path = "mintgate.json".to_string();
    let mut profile = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--profile" {
            profile = args.next();
        } else {
            config_path = arg;
        }
    }

    (config_path, profile)
}

fn load_config(path: &str, profile: Option<&str>) -> anyhow::Result<AppConfig> {
    if !Path::new(path).exists() {
        tracing::warn!("Config file {} not found, using defaults", path);
        return Ok(AppConfig::default());
    }

    // A profile file carries `active` + `profiles`; anything else is treated
    // as a single flat configuration.
    match DeployConfig::load(path) {
        Ok(deploy) => {
            let config = deploy.select(profile)?.clone();
            config.drop.validate()?;
            Ok(config)
        }
        Err(_) => AppConfig::load(path).with_context(|| format!("Failed to load {}", path)),
    }
}
