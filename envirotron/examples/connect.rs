//! Connection settings overridden from the environment
//!
//! ```sh
//! THING_URL=https://thing.example.com THING_USERNAME=admin cargo run --example connect
//! ```

use envirotron::Override;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Override)]
pub struct Config {
    #[env(name = "THING_URL")]
    pub url: String,

    #[env(name = "THING_USERNAME")]
    pub username: String,

    // Also readable from the file named by THING_PASSWORD_FILE
    #[env(name = "THING_PASSWORD", from_file)]
    pub password: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut config = Config::default();
    envirotron::override_env(&mut config)?;

    println!("connecting to {}, as {}", config.url, config.username);

    Ok(())
}
