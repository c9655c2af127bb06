//! ActionsBuilder for writing `_generated/{Actor}Actions.php`

use crate::codegen::{is_up_to_date, ActionsGenerator};
use crate::decorators::DecoratorRegistry;
use crate::error::GenerateError;
use crate::ir::ModuleContainer;
use crate::settings::GeneratorSettings;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while building an actions file
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generation error
    #[error("Generation error: {0}")]
    GenerateError(#[from] GenerateError),
}

/// Result of a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    /// Path of the generated file
    pub path: PathBuf,
    /// Stamp of the file on disk
    pub fingerprint: String,
    /// Number of primary wrappers; zero when the file was not rewritten
    pub num_methods: usize,
    /// Whether the file was (re)written
    pub written: bool,
}

/// Builder for an actor's generated actions file
///
/// # Example
/// ```ignore
/// use mixin_weld::ActionsBuilder;
///
/// let outcome = ActionsBuilder::new(&container, &settings)
///     .root("/path/to/project")
///     .build()?;
/// println!("{} methods added", outcome.num_methods);
/// ```
pub struct ActionsBuilder<'a> {
    container: &'a ModuleContainer,
    settings: &'a GeneratorSettings,
    registry: Option<DecoratorRegistry>,
    root: PathBuf,
    output_dir: Option<PathBuf>,
    force: bool,
}

impl<'a> ActionsBuilder<'a> {
    /// Create a builder; paths resolve against the current directory
    pub fn new(container: &'a ModuleContainer, settings: &'a GeneratorSettings) -> Self {
        Self {
            container,
            settings,
            registry: None,
            root: PathBuf::from("."),
            output_dir: None,
            force: false,
        }
    }

    /// Resolve the settings' support path against this directory
    pub fn root(mut self, root: impl AsRef<Path>) -> Self {
        self.root = root.as_ref().to_path_buf();
        self
    }

    /// Write into this support directory instead of the configured one
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Use a custom decorator registry
    pub fn registry(mut self, registry: DecoratorRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Rewrite the file even if its stamp is current
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Path of the generated file
    pub fn target_path(&self) -> PathBuf {
        let support_dir = match self.output_dir {
            Some(ref dir) => dir.clone(),
            None => self.root.join(&self.settings.path),
        };
        support_dir
            .join("_generated")
            .join(self.settings.file_name())
    }

    /// Generate and write the file unless it is up to date
    pub fn build(self) -> Result<BuildOutcome, BuildError> {
        let path = self.target_path();
        let mut generator = match self.registry {
            Some(ref registry) => {
                ActionsGenerator::with_registry(self.container, self.settings, registry)?
            }
            None => ActionsGenerator::new(self.container, self.settings)?,
        };
        let fingerprint = generator.fingerprint()?;

        if !self.force && path.exists() {
            // Undecodable bytes never match the stamp, so such a file is rebuilt
            let existing = fs::read(&path)?;
            if is_up_to_date(&String::from_utf8_lossy(&existing), &fingerprint) {
                debug!(path = %path.display(), "Actions file is up to date");
                return Ok(BuildOutcome {
                    path,
                    fingerprint,
                    num_methods: 0,
                    written: false,
                });
            }
        }

        let source = generator.produce()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, source)?;
        debug!(path = %path.display(), "Wrote actions file");

        Ok(BuildOutcome {
            path,
            fingerprint,
            num_methods: generator.num_methods(),
            written: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_path() {
        let container = ModuleContainer::default();
        let settings = GeneratorSettings::new("Acceptance");

        let builder = ActionsBuilder::new(&container, &settings).root("/project");
        assert_eq!(
            builder.target_path(),
            PathBuf::from("/project/tests/_support/_generated/AcceptanceActions.php")
        );

        let builder = builder.output_dir("/tmp/support");
        assert_eq!(
            builder.target_path(),
            PathBuf::from("/tmp/support/_generated/AcceptanceActions.php")
        );
    }

    #[test]
    fn test_build_skips_current_file() {
        let dir = tempfile::tempdir().unwrap();
        let container = ModuleContainer::default();
        let settings = GeneratorSettings::new("Unit");

        let first = ActionsBuilder::new(&container, &settings)
            .root(dir.path())
            .build()
            .unwrap();
        assert!(first.written);
        assert!(first.path.exists());

        let second = ActionsBuilder::new(&container, &settings)
            .root(dir.path())
            .build()
            .unwrap();
        assert!(!second.written);
        assert_eq!(first.fingerprint, second.fingerprint);

        let forced = ActionsBuilder::new(&container, &settings)
            .root(dir.path())
            .force(true)
            .build()
            .unwrap();
        assert!(forced.written);
    }

    #[test]
    fn test_build_rewrites_stale_file() {
        let dir = tempfile::tempdir().unwrap();
        let container = ModuleContainer::default();
        let settings = GeneratorSettings::new("Unit");

        let builder = ActionsBuilder::new(&container, &settings).root(dir.path());
        let path = builder.target_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "<?php  //[STAMP] deadbeef\n").unwrap();

        let outcome = builder.build().unwrap();
        assert!(outcome.written);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(&format!("<?php  //[STAMP] {}", outcome.fingerprint)));
    }

    #[test]
    fn test_build_rewrites_non_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let container = ModuleContainer::default();
        let settings = GeneratorSettings::new("Unit");

        let builder = ActionsBuilder::new(&container, &settings).root(dir.path());
        let path = builder.target_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, [0xff, 0xfe, b'<', b'?', 0xc3]).unwrap();

        let outcome = builder.build().unwrap();
        assert!(outcome.written);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(&format!("<?php  //[STAMP] {}", outcome.fingerprint)));
    }
}
