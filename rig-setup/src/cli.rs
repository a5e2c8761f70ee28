// External crates
use clap::{Parser, Subcommand};
use rig_core::error::Result;
use rig_core::{rig_error, rig_println, rig_success};
use std::path::PathBuf;

// Internal imports
use crate::manifest::SetupManifest;
use crate::{doctor, plan, prompt};

/// Command-line arguments for rig-setup.
///
/// The tool provisions a host for building and cross-compiling the vision
/// rig pipeline. Everything it runs is driven by an optional YAML manifest;
/// without one, the built-in defaults apply.
#[derive(Parser)]
#[command(name = "rig-setup")]
#[command(about = "Provision a host for building the vision rig pipeline")]
#[command(version)]
pub struct Args {
    /// Path to a setup manifest (YAML)
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the provisioning steps in order (the default)
    Run {
        /// Stop at the first failing step instead of continuing
        #[arg(long)]
        fail_fast: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the steps without executing them
    Plan,

    /// Check that the provisioned tools are available
    Doctor,
}

/// Dispatches the parsed arguments and returns the process exit code.
pub fn execute(args: Args) -> Result<i32> {
    let manifest = SetupManifest::load_or_default(args.manifest.as_deref())?;

    let command = args.command.unwrap_or(Command::Run {
        fail_fast: false,
        yes: false,
    });

    match command {
        Command::Run { fail_fast, yes } => run(&manifest, fail_fast, yes),
        Command::Plan => {
            let steps = plan::build_plan(&manifest)?;
            for (index, step) in steps.iter().enumerate() {
                rig_println!("{}. {}", index + 1, step.render());
            }
            Ok(0)
        }
        Command::Doctor => doctor::run(&manifest),
    }
}

fn run(manifest: &SetupManifest, fail_fast: bool, yes: bool) -> Result<i32> {
    let steps = plan::build_plan(manifest)?;

    rig_println!("The following steps will run:");
    for (index, step) in steps.iter().enumerate() {
        rig_println!("  {}. {}", index + 1, step.render());
    }
    rig_println!();

    if !yes && !prompt::confirm_prompt("Proceed with provisioning?")? {
        rig_println!("Aborted.");
        return Ok(0);
    }

    let outcome = plan::execute_plan(&steps, fail_fast);
    if outcome.success() {
        rig_success!("Provisioning complete ({} steps)", outcome.completed);
        rig_println!("Restart your shell or source your profile to pick up the toolchain.");
        Ok(0)
    } else {
        rig_error!(
            "{} of {} steps failed:",
            outcome.failures.len(),
            steps.len()
        );
        for (name, error) in &outcome.failures {
            rig_error!("  {} — {}", name, error);
        }
        Ok(outcome.exit_code())
    }
}
