//! Setup manifest: the configuration data behind the provisioning plan.
//!
//! Package names, the installer URL, its pinned transport flags, the shell
//! profile line, and the cross target are environment-specific, so they live
//! in an optional YAML manifest. The built-in defaults provision a host for
//! the rig's capture (ZeroMQ + OpenCV) and inference (ONNX Runtime) daemons
//! and an ARM cross-build of both.

use std::fs;
use std::path::Path;

use rig_core::error::{Result, RigError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupManifest {
    /// OS package manager used for every package step
    #[serde(default = "default_package_manager")]
    pub package_manager: String,

    /// Fixed package list installed after the index refresh
    #[serde(default = "default_packages")]
    pub packages: Vec<String>,

    /// URL of the remote toolchain-manager installer
    #[serde(default = "default_installer_url")]
    pub installer_url: String,

    /// Transport-security flags passed to curl, enforced literally
    #[serde(default = "default_transport_flags")]
    pub installer_transport_flags: Vec<String>,

    /// Extra arguments for the shell the installer is piped into
    #[serde(default)]
    pub installer_shell_args: Vec<String>,

    /// Shell profile to receive the init line; detected from $SHELL when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_file: Option<String>,

    /// Line appended to the shell profile
    #[serde(default = "default_profile_line")]
    pub profile_line: String,

    /// Cross-compilation target registered with the toolchain manager
    #[serde(default = "default_target_triple")]
    pub target_triple: String,

    /// Cross-compiler package installed last
    #[serde(default = "default_cross_package")]
    pub cross_package: String,
}

fn default_package_manager() -> String {
    "apt-get".to_string()
}

fn default_packages() -> Vec<String> {
    [
        "build-essential",
        "cmake",
        "libzmq3-dev",
        "libopencv-dev",
        "python3-opencv",
        "libonnxruntime-dev",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_installer_url() -> String {
    "https://sh.rustup.rs".to_string()
}

fn default_transport_flags() -> Vec<String> {
    ["--proto", "=https", "--tlsv1.2", "-sSf"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_profile_line() -> String {
    "source \"$HOME/.cargo/env\"".to_string()
}

fn default_target_triple() -> String {
    "armv7-unknown-linux-gnueabihf".to_string()
}

fn default_cross_package() -> String {
    "gcc-arm-linux-gnueabihf".to_string()
}

impl Default for SetupManifest {
    fn default() -> Self {
        Self {
            package_manager: default_package_manager(),
            packages: default_packages(),
            installer_url: default_installer_url(),
            installer_transport_flags: default_transport_flags(),
            installer_shell_args: Vec::new(),
            profile_file: None,
            profile_line: default_profile_line(),
            target_triple: default_target_triple(),
            cross_package: default_cross_package(),
        }
    }
}

impl SetupManifest {
    /// Parse a YAML manifest. Fields left out fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            RigError::Filesystem(format!("Could not read manifest {}: {}", path.display(), e))
        })?;
        Ok(serde_yaml_ng::from_str(&raw)?)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_rig_stack() {
        let manifest = SetupManifest::default();
        assert_eq!(manifest.package_manager, "apt-get");
        assert!(manifest.packages.contains(&"libzmq3-dev".to_string()));
        assert!(manifest.packages.contains(&"libopencv-dev".to_string()));
        assert_eq!(manifest.installer_url, "https://sh.rustup.rs");
        assert_eq!(
            manifest.installer_transport_flags,
            vec!["--proto", "=https", "--tlsv1.2", "-sSf"]
        );
        assert_eq!(manifest.target_triple, "armv7-unknown-linux-gnueabihf");
        assert_eq!(manifest.cross_package, "gcc-arm-linux-gnueabihf");
    }

    #[test]
    fn partial_yaml_overrides_only_named_fields() {
        let manifest: SetupManifest =
            serde_yaml_ng::from_str("packages:\n  - cmake\ntarget_triple: aarch64-unknown-linux-gnu\n")
                .unwrap();
        assert_eq!(manifest.packages, vec!["cmake"]);
        assert_eq!(manifest.target_triple, "aarch64-unknown-linux-gnu");
        assert_eq!(manifest.package_manager, "apt-get");
        assert_eq!(manifest.profile_line, "source \"$HOME/.cargo/env\"");
    }
}
