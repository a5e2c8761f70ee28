//! Toolchain-manager steps: the remote installer pipeline and target
//! registration. Installer internals stay upstream's job.

use crate::manifest::SetupManifest;
use crate::plan::CommandSpec;

/// `curl <transport flags> <url> | sh` — the transport flags pin the TLS
/// policy and are passed through literally from the manifest.
pub fn bootstrap_pipeline(manifest: &SetupManifest) -> Vec<CommandSpec> {
    let mut fetch_args = manifest.installer_transport_flags.clone();
    fetch_args.push(manifest.installer_url.clone());

    vec![
        CommandSpec::new("curl", fetch_args),
        CommandSpec::new("sh", manifest.installer_shell_args.clone()),
    ]
}

pub fn add_target(manifest: &SetupManifest) -> CommandSpec {
    CommandSpec::new(
        "rustup",
        ["target".to_string(), "add".to_string(), manifest.target_triple.clone()],
    )
}
