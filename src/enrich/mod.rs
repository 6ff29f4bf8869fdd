//! Turning raw registry entries into validated, display-ready rows.
//!
//! Enrichment derives the short name, display title, ownership kind and
//! links for one entry, probing the docs tree to confirm its provider page
//! exists. Excluded packages short-circuit before any probing.

mod classify;
mod title;

pub use classify::{IGNORED_PACKAGES, MAIN_REPO, ORG_PREFIX, PackageKind, classify};
pub use title::derive_title;

use anyhow::Result;
use glob::Pattern;
use log::debug;
use std::fmt;
use std::path::Path;

use crate::registry::RegistryPackage;
use crate::runtime::Runtime;

/// Prefix shared by all integration package names.
pub const PACKAGE_PREFIX: &str = "langchain-";

/// Site path under which provider pages are published.
pub const PROVIDER_PAGE_ROOT: &str = "/oss/integrations/providers";

/// A registry entry with every derived field needed to render its row.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedPackage {
    pub name: String,
    pub name_short: String,
    pub name_title: String,
    pub kind: PackageKind,
    pub js_exists: bool,
    pub provider_page: Option<String>,
    pub package_url: String,
    pub downloads: u64,
}

/// A non-ignored package with no provider documentation page.
///
/// Fatal for the whole run: the generated table must never link to a page
/// that does not exist.
#[derive(Debug)]
pub struct MissingProviderPage {
    pub name_short: String,
}

impl fmt::Display for MissingProviderPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Provider page not found for {}. Please add one at oss/integrations/providers/{}.{{mdx,ipynb}}",
            self.name_short, self.name_short
        )
    }
}

impl std::error::Error for MissingProviderPage {}

/// Derives the display fields for one registry entry.
///
/// Returns `Ok(None)` for excluded packages. Classification runs before page
/// validation so an excluded package can never fail the run over a missing
/// page.
#[tracing::instrument(skip(runtime, providers_dir, package))]
pub fn enrich<R: Runtime>(
    runtime: &R,
    providers_dir: &Path,
    package: &RegistryPackage,
) -> Result<Option<EnrichedPackage>> {
    let name_short = package
        .name
        .strip_prefix(PACKAGE_PREFIX)
        .unwrap_or(&package.name)
        .to_string();

    let name_title = package
        .name_title
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| derive_title(&name_short));

    let kind = classify(package);
    if kind == PackageKind::Ignored {
        debug!("Skipping excluded package {}", package.name);
        return Ok(None);
    }

    let js_exists = package.js_exists();

    let provider_page = match package.provider_page.as_deref().filter(|s| !s.is_empty()) {
        Some(slug) => format!("{}/{}", PROVIDER_PAGE_ROOT, slug),
        None => {
            if provider_page_exists(runtime, providers_dir, &name_short)? {
                format!("{}/{}/", PROVIDER_PAGE_ROOT, name_short)
            } else {
                return Err(MissingProviderPage { name_short }.into());
            }
        }
    };

    let package_url = if kind == PackageKind::External {
        format!("https://pypi.org/project/{}/", package.name)
    } else {
        format!(
            "https://python.langchain.com/api_reference/{}/",
            name_short.replace('-', "_")
        )
    };

    Ok(Some(EnrichedPackage {
        name: package.name.clone(),
        name_short,
        name_title,
        kind,
        js_exists,
        provider_page: Some(provider_page),
        package_url,
        downloads: package.downloads.unwrap_or(0),
    }))
}

/// True if any `{name_short}.*` page exists in the providers source
/// directory. A missing directory counts as no page.
fn provider_page_exists<R: Runtime>(
    runtime: &R,
    providers_dir: &Path,
    name_short: &str,
) -> Result<bool> {
    if !runtime.exists(providers_dir) {
        return Ok(false);
    }

    let pattern = Pattern::new(&format!("{}.*", name_short))?;
    let entries = runtime.read_dir(providers_dir)?;

    Ok(entries.iter().any(|entry| {
        entry
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| pattern.matches(n))
    }))
}
