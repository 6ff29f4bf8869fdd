use anyhow::Result;
use clap::Parser;
use provtab::runtime::RealRuntime;
use std::path::PathBuf;

/// provtab - Provider Table Generator
///
/// Regenerates the integration providers landing page from the package
/// registry. Run from the docs repository root with no arguments; every
/// option below exists for tests and unusual layouts.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Docs repository root (defaults to the current directory)
    #[arg(
        long = "docs-dir",
        short = 'd',
        env = "PROVTAB_DOCS_DIR",
        value_name = "PATH"
    )]
    pub docs_dir: Option<PathBuf>,

    /// Package registry URL (defaults to the canonical packages.yml)
    #[arg(long = "registry-url", env = "PROVTAB_REGISTRY_URL", value_name = "URL")]
    pub registry_url: Option<String>,

    /// Output file (defaults to the providers index under the docs root)
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    provtab::generate::generate(runtime, cli.docs_dir, cli.registry_url, cli.output).await
}
