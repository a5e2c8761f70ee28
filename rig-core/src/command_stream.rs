// Standard library
use std::ffi::OsStr;
use std::io::{BufRead, BufReader};

// External crates
use crate::error::{Result, RigError};
use duct::cmd;
use tracing::info;
use which::which;

fn render_command<A: AsRef<OsStr>>(command: &str, args: &[A]) -> String {
    let mut rendered = command.to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(&arg.as_ref().to_string_lossy());
    }
    rendered
}

fn stream_expression(expression: duct::Expression, rendered: &str) -> Result<()> {
    let reader = expression.unchecked().stderr_to_stdout().reader()?;
    let mut lines = BufReader::new(reader);
    let mut line = String::new();
    loop {
        line.clear();
        if lines.read_line(&mut line)? == 0 {
            break;
        }
        info!("{}", line.trim_end_matches('\n'));
    }

    // EOF reached; the handle now holds the exit status.
    let reader = lines.into_inner();
    match reader.try_wait()? {
        Some(output) if output.status.success() => Ok(()),
        Some(output) => Err(RigError::Command {
            command: rendered.to_string(),
            code: output.status.code(),
        }),
        None => Err(RigError::Internal(format!(
            "Command finished without a status: {rendered}"
        ))),
    }
}

/// Run a single external command, streaming its merged stdout/stderr
/// through the logging system. Blocks until the command exits.
pub fn stream_command<A: AsRef<OsStr>>(command: &str, args: &[A]) -> Result<()> {
    let rendered = render_command(command, args);
    stream_expression(cmd(command, args), &rendered)
}

/// Run a pipeline of commands with stdout piped between stages, streaming
/// the final stage's merged output. Used for "fetch installer | shell".
pub fn stream_pipeline<A: AsRef<OsStr>>(stages: &[(&str, Vec<A>)]) -> Result<()> {
    let Some(((first_cmd, first_args), rest)) = stages.split_first() else {
        return Err(RigError::Internal("Empty command pipeline".to_string()));
    };

    let mut expression = cmd(*first_cmd, first_args);
    let mut rendered = render_command(first_cmd, first_args);
    for (stage_cmd, stage_args) in rest {
        expression = expression.pipe(cmd(*stage_cmd, stage_args));
        rendered.push_str(" | ");
        rendered.push_str(&render_command(stage_cmd, stage_args));
    }

    stream_expression(expression, &rendered)
}

/// Run a command and capture its stdout. For read-only checks only.
pub fn command_output<A: AsRef<OsStr>>(command: &str, args: &[A]) -> Result<String> {
    let rendered = render_command(command, args);
    let output = cmd(command, args)
        .stdout_capture()
        .stderr_capture()
        .unchecked()
        .run()?;

    if !output.status.success() {
        return Err(RigError::Command {
            command: rendered,
            code: output.status.code(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Checks if a command-line tool is available in the system's PATH.
pub fn is_tool_installed(tool_name: &str) -> bool {
    which(tool_name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_joins_program_and_args() {
        let rendered = render_command("apt-get", &["install", "-y", "cmake"]);
        assert_eq!(rendered, "apt-get install -y cmake");
    }

    #[test]
    fn empty_pipeline_is_rejected() {
        let stages: Vec<(&str, Vec<&str>)> = Vec::new();
        let result = stream_pipeline(&stages);
        assert!(matches!(result, Err(RigError::Internal(_))));
    }

    #[test]
    fn failed_command_carries_exit_code() {
        let result = stream_command("sh", &["-c", "exit 3"]);
        match result {
            Err(RigError::Command { code, .. }) => assert_eq!(code, Some(3)),
            other => panic!("expected Command error, got {other:?}"),
        }
    }

    #[test]
    fn command_output_captures_stdout() {
        let output = command_output("sh", &["-c", "echo check"]).unwrap();
        assert_eq!(output.trim(), "check");
    }

    #[test]
    #[cfg(unix)]
    fn tool_detection_follows_path() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("rig-fake-tool");
        std::fs::write(&tool, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        // Prepend rather than replace so concurrent tests can still spawn sh.
        let saved = std::env::var("PATH").unwrap_or_default();
        std::env::set_var("PATH", format!("{}:{}", dir.path().display(), saved));

        let found = is_tool_installed("rig-fake-tool");
        let missing = is_tool_installed("rig-absent-tool");

        std::env::set_var("PATH", saved);

        assert!(found, "executable placed on PATH should be detected");
        assert!(!missing, "name absent from PATH should not be detected");
    }
}
