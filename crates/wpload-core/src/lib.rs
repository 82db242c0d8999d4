pub mod aggregator;
pub mod config;
pub mod engine;
pub mod extractor;
pub mod generator;
pub mod package_map;
pub mod rule_set;
pub mod writer;

pub use aggregator::RuleAggregator;
pub use config::GeneratorConfig;
pub use engine::{AutoloadEngine, DependencyEngine};
pub use extractor::RuleExtractor;
pub use generator::AutoloadGenerator;
pub use package_map::{InstallEntry, InstallationManager, PackageMap, PackageMapBuilder};
pub use rule_set::RuleSet;
pub use writer::ArtifactWriter;

use std::path::{Path, PathBuf};

use wpload_error::{AutoloadError, Result};
use wpload_project::{InstalledRepository, Package, read_root_package};

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub vendor_dir: Option<String>,
    pub no_dev: bool,
    pub injected: bool,
    pub debug: bool,
}

/// Read the root manifest and installed repository of a project.
pub fn load_project(
    project_dir: &Path,
    options: &GenerateOptions,
) -> Result<(GeneratorConfig, Package, InstalledRepository)> {
    let root = read_root_package(project_dir)
        .map_err(|e| AutoloadError::ManifestError(format!("{e:#}")))?;

    let config = GeneratorConfig::resolve(project_dir, options.vendor_dir.as_deref(), &root)
        .with_dev_mode(!options.no_dev)
        .with_injected(options.injected)
        .with_debug(options.debug);

    let repository = InstalledRepository::load(&config.vendor_dir)
        .map_err(|e| AutoloadError::InstalledRepositoryError(format!("{e:#}")))?;

    wpload_logger::debug(
        &format!(
            "Loaded {} installed packages from {}",
            repository.packages.len(),
            config.vendor_dir.display()
        ),
        options.debug,
    );

    Ok((config, root, repository))
}

pub fn dump_autoloader(project_dir: &Path, options: &GenerateOptions) -> anyhow::Result<PathBuf> {
    let (config, root, repository) =
        load_project(project_dir, options).map_err(|e| anyhow::anyhow!(e))?;
    AutoloadGenerator::new(config)
        .dump(&repository, &root)
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn render_autoloader(project_dir: &Path, options: &GenerateOptions) -> anyhow::Result<String> {
    let (config, root, repository) =
        load_project(project_dir, options).map_err(|e| anyhow::anyhow!(e))?;
    AutoloadGenerator::new(config)
        .generate(&repository, &root)
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn list_rules(
    project_dir: &Path,
    options: &GenerateOptions,
) -> anyhow::Result<Vec<(String, Vec<String>)>> {
    let (config, root, repository) =
        load_project(project_dir, options).map_err(|e| anyhow::anyhow!(e))?;
    AutoloadGenerator::new(config)
        .path_literals(&repository, &root)
        .map_err(|e| anyhow::anyhow!(e))
}
