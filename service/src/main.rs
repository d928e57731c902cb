use std::path::Path;

use abi::Config;
use anyhow::{anyhow, Result};
use hms_service::start_server;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // we would first try HMS_CONFIG env var,
    // then try "./hms.yml", then try "~/.config/hms.yml"
    // then try "/etc/hms.yml"
    let filename = match std::env::var("HMS_CONFIG") {
        Ok(filename) => filename,
        Err(_) => find_config().ok_or_else(|| anyhow!("no config file found"))?,
    };
    let config = Config::load(&filename)?;

    tracing_subscriber::fmt()
        .with_max_level(Level::from(config.log.level))
        .init();
    info!("config file: {}", filename);

    start_server(&config).await
}

fn find_config() -> Option<String> {
    let home = shellexpand::tilde("~/.config/hms.yml").into_owned();
    first_existing(["./hms.yml".to_string(), home, "/etc/hms.yml".to_string()])
}

fn first_existing(candidates: impl IntoIterator<Item = String>) -> Option<String> {
    candidates.into_iter().find(|p| Path::new(p).exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_existing_config_should_win() {
        let found = first_existing([
            "./no-such-hms.yml".to_string(),
            "fixtures/config.yml".to_string(),
            "Cargo.toml".to_string(),
        ]);
        assert_eq!(found.as_deref(), Some("fixtures/config.yml"));
        assert_eq!(first_existing(["./no-such-hms.yml".to_string()]), None);
    }

    #[test]
    fn lookup_should_not_panic_without_config() {
        if let Some(path) = find_config() {
            assert!(Path::new(&path).exists());
        }
    }
}
