//! The provisioning plan: a fixed, linear sequence of steps.
//!
//! There is deliberately no branching here. The same manifest always
//! produces the same steps in the same order, every step blocks until its
//! command exits, and no step decides whether a later one runs (unless
//! fail-fast is requested explicitly).

use std::path::PathBuf;

use rig_core::command_stream;
use rig_core::error::{Result, RigError};
use rig_core::{rig_error, rig_progress, rig_success};

use crate::manifest::SetupManifest;
use crate::steps::{pkg, profile, toolchain};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn render(&self) -> String {
        let mut rendered = self.program.clone();
        for arg in &self.args {
            rendered.push(' ');
            rendered.push_str(arg);
        }
        rendered
    }
}

#[derive(Debug, Clone)]
pub enum StepAction {
    Command(CommandSpec),
    Pipeline(Vec<CommandSpec>),
    AppendLine { path: PathBuf, line: String },
}

#[derive(Debug, Clone)]
pub struct Step {
    pub name: &'static str,
    pub action: StepAction,
}

impl Step {
    /// The literal command line (or append) this step performs.
    pub fn render(&self) -> String {
        match &self.action {
            StepAction::Command(spec) => spec.render(),
            StepAction::Pipeline(stages) => stages
                .iter()
                .map(CommandSpec::render)
                .collect::<Vec<_>>()
                .join(" | "),
            StepAction::AppendLine { path, line } => {
                format!("echo '{}' >> {}", line, path.display())
            }
        }
    }
}

/// Builds the six provisioning steps in their documented order:
/// index refresh, package install, toolchain bootstrap, profile append,
/// target registration, cross-compiler install.
pub fn build_plan(manifest: &SetupManifest) -> Result<Vec<Step>> {
    let profile_path = profile::resolve_profile_path(manifest)?;

    Ok(vec![
        Step {
            name: "refresh package index",
            action: StepAction::Command(pkg::refresh_index(manifest)),
        },
        Step {
            name: "install build packages",
            action: StepAction::Command(pkg::install_packages(manifest)),
        },
        Step {
            name: "install toolchain manager",
            action: StepAction::Pipeline(toolchain::bootstrap_pipeline(manifest)),
        },
        Step {
            name: "append toolchain env to shell profile",
            action: StepAction::AppendLine {
                path: profile_path,
                line: manifest.profile_line.clone(),
            },
        },
        Step {
            name: "register cross-compilation target",
            action: StepAction::Command(toolchain::add_target(manifest)),
        },
        Step {
            name: "install cross-compiler",
            action: StepAction::Command(pkg::install_cross_compiler(manifest)),
        },
    ])
}

#[derive(Debug)]
pub struct PlanOutcome {
    pub completed: usize,
    pub failures: Vec<(String, RigError)>,
}

impl PlanOutcome {
    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }

    /// The exit-code contract: whatever the last failing command returned.
    pub fn exit_code(&self) -> i32 {
        match self.failures.last() {
            Some((_, error)) => error.exit_code().unwrap_or(1),
            None => 0,
        }
    }
}

/// Runs every step in order. A failing step is recorded and later steps
/// still run; `fail_fast` opts into halting at the first failure instead.
/// No retries either way.
pub fn execute_plan(steps: &[Step], fail_fast: bool) -> PlanOutcome {
    let mut outcome = PlanOutcome {
        completed: 0,
        failures: Vec::new(),
    };

    for step in steps {
        rig_progress!("{}", step.name);
        match run_step(step) {
            Ok(()) => {
                outcome.completed += 1;
                rig_success!("{}", step.name);
            }
            Err(error) => {
                rig_error!("✗ {}: {}", step.name, error);
                outcome.failures.push((step.name.to_string(), error));
                if fail_fast {
                    break;
                }
            }
        }
    }

    outcome
}

fn run_step(step: &Step) -> Result<()> {
    match &step.action {
        StepAction::Command(spec) => command_stream::stream_command(&spec.program, &spec.args),
        StepAction::Pipeline(stages) => {
            let stages: Vec<(&str, Vec<&str>)> = stages
                .iter()
                .map(|spec| {
                    (
                        spec.program.as_str(),
                        spec.args.iter().map(String::as_str).collect(),
                    )
                })
                .collect();
            command_stream::stream_pipeline(&stages)
        }
        StepAction::AppendLine { path, line } => profile::append_line(path, line),
    }
}
