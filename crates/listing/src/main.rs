use std::path::PathBuf;

use anyhow::Context;

use storefront_listing::ListingConfig;

fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: storefront-listing <catalog.json>")?;

    let config = ListingConfig::from_env()?;
    if config.now.is_none() {
        tracing::debug!("STOREFRONT_NOW not set; using the system clock");
    }

    let listing = storefront_listing::run(&path, &config).inspect_err(|e| {
        tracing::warn!(error = %e, "listing failed");
    })?;

    print!("{listing}");
    Ok(())
}
