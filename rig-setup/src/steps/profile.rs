//! Shell-profile handling: resolving which profile file to touch and the
//! unguarded one-line append.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use rig_core::error::{Result, RigError};

use crate::manifest::SetupManifest;

pub fn resolve_profile_path(manifest: &SetupManifest) -> Result<PathBuf> {
    match &manifest.profile_file {
        Some(raw) => Ok(PathBuf::from(shellexpand::tilde(raw).into_owned())),
        None => detect_shell_profile(),
    }
}

/// Maps $SHELL to its profile file, defaulting to .bashrc so the append
/// step always has a destination.
pub fn detect_shell_profile() -> Result<PathBuf> {
    let shell = env::var("SHELL").unwrap_or_default();
    let home = dirs::home_dir()
        .ok_or_else(|| RigError::Filesystem("Could not find home directory".to_string()))?;

    Ok(match shell.split('/').next_back() {
        Some("zsh") => home.join(".zshrc"),
        Some("fish") => home.join(".config/fish/config.fish"),
        _ => home.join(".bashrc"),
    })
}

/// Appends the line unconditionally. Running the setup twice appends it
/// twice; that matches the upstream provisioning script.
pub fn append_line(path: &Path, line: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}
