//! Shared argument parsing and input loading

use anyhow::{bail, Context, Result};
use mixin_weld::{GeneratorSettings, Manifest, ModuleContainer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Positional suite file plus the flags every command accepts
pub struct Inputs {
    /// Suite configuration (TOML)
    pub suite: PathBuf,
    /// Module metadata (JSON)
    pub manifest: PathBuf,
}

impl Inputs {
    /// Parse `<suite.toml> --manifest <file>`, handing any other flag to `extra`.
    ///
    /// `extra` receives the remaining arguments starting at the unknown flag and
    /// returns how many it consumed, or `None` if it does not recognize the flag.
    pub fn parse<F>(args: &[String], mut extra: F) -> Result<Self>
    where
        F: FnMut(&[String]) -> Result<Option<usize>>,
    {
        let mut suite = None;
        let mut manifest = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--manifest" | "-m" => {
                    if i + 1 < args.len() {
                        manifest = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        bail!("--manifest requires a value");
                    }
                }
                arg if !arg.starts_with('-') => {
                    if suite.is_some() {
                        bail!("Unexpected argument: {}", arg);
                    }
                    suite = Some(PathBuf::from(arg));
                    i += 1;
                }
                _ => match extra(&args[i..])? {
                    Some(consumed) => i += consumed,
                    None => bail!("Unknown flag: {}", args[i]),
                },
            }
        }

        let Some(suite) = suite else {
            bail!("Missing suite configuration file");
        };
        let Some(manifest) = manifest else {
            bail!("--manifest is required");
        };

        Ok(Self { suite, manifest })
    }

    /// Directory the suite's support path is relative to
    pub fn root(&self) -> &Path {
        match self.suite.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Read the suite settings
    pub fn settings(&self) -> Result<GeneratorSettings> {
        let text = fs::read_to_string(&self.suite)
            .with_context(|| format!("Failed to read {}", self.suite.display()))?;
        let settings: GeneratorSettings = toml::from_str(&text)
            .with_context(|| format!("Failed to parse {}", self.suite.display()))?;
        debug!(
            actor = %settings.actor,
            modules = ?settings.modules.enabled,
            "Loaded suite settings"
        );
        Ok(settings)
    }

    /// Read the module metadata and validate it
    pub fn container(&self) -> Result<ModuleContainer> {
        let text = fs::read_to_string(&self.manifest)
            .with_context(|| format!("Failed to read {}", self.manifest.display()))?;
        let manifest: Manifest = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", self.manifest.display()))?;
        debug!(
            classes = manifest.classes.len(),
            modules = manifest.modules.len(),
            "Loaded module manifest"
        );
        Ok(manifest.into_container()?)
    }
}
