use crate::registry::RegistryPackage;

/// Repository that hosts packages maintained in the main monorepo.
pub const MAIN_REPO: &str = "langchain-ai/langchain";

/// Organization prefix for first-party repositories.
pub const ORG_PREFIX: &str = "langchain-ai/";

/// Packages that never appear in the table regardless of registry content.
pub const IGNORED_PACKAGES: &[&str] = &[
    // top-level packages
    "langchain-core",
    "langchain-text-splitters",
    "langchain",
    "langchain-community",
    "langchain-experimental",
    "langchain-cli",
    "langchain-tests",
    // integration packages merged before a provider page was required;
    // remove once their pages exist
    "langchain-yt-dlp",
    // TODO: add a provider page for langchain-recallio, then drop this
    "langchain-recallio",
];

/// Ownership of a package relative to the main repository and organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    /// Excluded from the table entirely.
    Ignored,
    /// Lives in the main monorepo.
    MainRepo,
    /// Separate repository under the first-party organization.
    OrgOwned,
    /// Maintained outside the organization.
    External,
}

/// Classifies a registry entry by ownership. Pure and total.
pub fn classify(package: &RegistryPackage) -> PackageKind {
    if IGNORED_PACKAGES.contains(&package.name.as_str()) {
        PackageKind::Ignored
    } else if package.repo == MAIN_REPO {
        PackageKind::MainRepo
    } else if package.repo.starts_with(ORG_PREFIX) {
        PackageKind::OrgOwned
    } else {
        PackageKind::External
    }
}
