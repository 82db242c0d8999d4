use std::fs;
use std::path::PathBuf;

use crate::aggregator::RuleAggregator;
use crate::config::GeneratorConfig;
use crate::engine::{AutoloadEngine, DependencyEngine};
use crate::package_map::InstallationManager;
use crate::rule_set::RuleSet;
use crate::writer::ArtifactWriter;
use wpload_error::{AutoloadError, Result};
use wpload_project::{InstalledRepository, Package};
use wpload_utils::{ensure_dir_exists, get_artifact_path};

pub struct AutoloadGenerator<E: AutoloadEngine = DependencyEngine> {
    config: GeneratorConfig,
    engine: E,
}

impl AutoloadGenerator<DependencyEngine> {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        let engine = DependencyEngine::new(config.debug);
        Self { config, engine }
    }
}

impl<E: AutoloadEngine> AutoloadGenerator<E> {
    #[must_use]
    pub fn with_engine(config: GeneratorConfig, engine: E) -> Self {
        Self { config, engine }
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn collect_rules(
        &self,
        manager: &impl InstallationManager,
        root: &Package,
        packages: &[&Package],
        dev_package_names: &[String],
    ) -> Result<RuleSet> {
        RuleAggregator::new(&self.engine, self.config.dev_mode)
            .with_dev_package_names(dev_package_names)
            .with_debug(self.config.debug)
            .collect(manager, root, packages)
    }

    /// Final rule set of an installed repository.
    pub fn repository_rules(
        &self,
        repository: &InstalledRepository,
        root: &Package,
    ) -> Result<RuleSet> {
        let packages = repository.canonical_packages();
        let dev_names = repository.dev_package_names.as_deref().unwrap_or_default();
        self.collect_rules(repository, root, &packages, dev_names)
    }

    /// Namespace rules as the PHP path expressions that would be written.
    pub fn path_literals(
        &self,
        repository: &InstalledRepository,
        root: &Package,
    ) -> Result<Vec<(String, Vec<String>)>> {
        let rules = self.repository_rules(repository, root)?;
        let base_path = self.config.base_path();
        let vendor_path = self.config.vendor_path();
        Ok(ArtifactWriter::new(&base_path, &vendor_path).path_literals(&rules))
    }

    pub fn generate(&self, repository: &InstalledRepository, root: &Package) -> Result<String> {
        let rules = self.repository_rules(repository, root)?;
        let base_path = self.config.base_path();
        let vendor_path = self.config.vendor_path();
        Ok(ArtifactWriter::new(&base_path, &vendor_path).render(&rules, self.config.injected))
    }

    /// Generate and overwrite `<vendor-dir>/wordpress-autoload.php`.
    pub fn dump(&self, repository: &InstalledRepository, root: &Package) -> Result<PathBuf> {
        let contents = self.generate(repository, root)?;
        let path = get_artifact_path(&self.config.vendor_dir);

        ensure_dir_exists(&self.config.vendor_dir).map_err(|e| {
            AutoloadError::WriteFailed(self.config.vendor_dir.display().to_string(), e.to_string())
        })?;
        fs::write(&path, contents)
            .map_err(|e| AutoloadError::WriteFailed(path.display().to_string(), e.to_string()))?;

        Ok(path)
    }
}
