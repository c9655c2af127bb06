//! `mixin stamp`: print the fingerprint a fresh build would carry

use crate::input::Inputs;
use anyhow::Result;
use mixin_weld::ActionsGenerator;

/// Run the stamp command with the given arguments
pub fn run(args: &[String]) -> Result<()> {
    let inputs = Inputs::parse(args, |_| Ok(None))?;
    let settings = inputs.settings()?;
    let container = inputs.container()?;

    let generator = ActionsGenerator::new(&container, &settings)?;
    println!("{}", generator.fingerprint()?);

    Ok(())
}
