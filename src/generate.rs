//! The generation pipeline: fetch, enrich, render, write.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::enrich::{EnrichedPackage, enrich};
use crate::registry::FetchRegistry;
use crate::render::{render_document, render_table};
use crate::runtime::Runtime;

#[tracing::instrument(skip(runtime, docs_dir, registry_url, output))]
pub async fn generate<R: Runtime>(
    runtime: R,
    docs_dir: Option<PathBuf>,
    registry_url: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = Config::new(runtime, docs_dir, registry_url, output)?;
    run(config).await
}

/// Runs the whole pipeline. The document is assembled in memory and written
/// only after every record enriched successfully, so a failing run leaves
/// the previous output untouched.
#[tracing::instrument(skip(config))]
pub async fn run<R: Runtime, F: FetchRegistry>(config: Config<R, F>) -> Result<()> {
    let registry = config.registry.fetch().await?;
    info!("Registry lists {} package(s)", registry.packages.len());

    let providers_dir = config.providers_dir();
    let mut packages: Vec<EnrichedPackage> = Vec::new();
    for package in &registry.packages {
        if let Some(enriched) = enrich(&config.runtime, &providers_dir, package)? {
            packages.push(enriched);
        }
    }
    debug!(
        "{} of {} package(s) included",
        packages.len(),
        registry.packages.len()
    );

    let document = render_document(&render_table(&packages));
    write_document(&config.runtime, &config.output, &document)?;

    println!(
        "       wrote {} ({} packages)",
        config.output.display(),
        packages.len()
    );

    Ok(())
}

/// Writes the document atomically: temp file first, then rename over the
/// target.
#[tracing::instrument(skip(runtime, output, document))]
fn write_document<R: Runtime>(runtime: &R, output: &Path, document: &str) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !runtime.exists(parent) {
            runtime.create_dir_all(parent)?;
        }
    }

    let tmp_path = output.with_extension("mdx.tmp");
    runtime.write(&tmp_path, document.as_bytes())?;
    runtime
        .rename(&tmp_path, output)
        .context("Failed to replace output document")?;

    Ok(())
}
