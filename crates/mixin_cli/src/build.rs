//! `mixin build`: write the actor's actions trait

use crate::input::Inputs;
use anyhow::{bail, Result};
use mixin_weld::ActionsBuilder;
use std::path::PathBuf;

/// Run the build command with the given arguments
pub fn run(args: &[String]) -> Result<()> {
    let cmd = BuildCommand::parse(args)?;
    let settings = cmd.inputs.settings()?;
    let container = cmd.inputs.container()?;

    let mut builder = ActionsBuilder::new(&container, &settings)
        .root(cmd.inputs.root())
        .force(cmd.force);
    if let Some(ref output) = cmd.output {
        builder = builder.output_dir(output);
    }
    let outcome = builder.build()?;

    if outcome.written {
        println!(
            "{} generated successfully. {} methods added",
            settings.file_name(),
            outcome.num_methods
        );
    } else {
        println!("{} is up to date", settings.file_name());
    }

    Ok(())
}

/// Build command configuration
struct BuildCommand {
    inputs: Inputs,
    /// Rewrite even when the stamp matches
    force: bool,
    /// Support directory override
    output: Option<PathBuf>,
}

impl BuildCommand {
    fn parse(args: &[String]) -> Result<Self> {
        let mut force = false;
        let mut output = None;

        let inputs = Inputs::parse(args, |rest| match rest[0].as_str() {
            "--force" | "-f" => {
                force = true;
                Ok(Some(1))
            }
            "--output" | "-o" => {
                if rest.len() > 1 {
                    output = Some(PathBuf::from(&rest[1]));
                    Ok(Some(2))
                } else {
                    bail!("--output requires a value");
                }
            }
            _ => Ok(None),
        })?;

        Ok(BuildCommand {
            inputs,
            force,
            output,
        })
    }
}
