//! Post-provisioning diagnostics. Read-only: reports what is missing and
//! never mutates the system.

use rig_core::command_stream::{command_output, is_tool_installed};
use rig_core::error::Result;
use rig_core::{rig_println, rig_warning};

use crate::manifest::SetupManifest;

const BASE_TOOLS: &[&str] = &["cc", "cmake", "rustup", "cargo", "rustc"];

/// Runs every check and returns the process exit code (0 when all pass).
pub fn run(manifest: &SetupManifest) -> Result<i32> {
    rig_println!("Running diagnostics...\n");
    let mut all_ok = true;

    for tool in BASE_TOOLS {
        all_ok &= check(tool, is_tool_installed(tool));
    }

    if let Some(cross_cc) = cross_compiler_binary(&manifest.cross_package) {
        all_ok &= check(&cross_cc, is_tool_installed(&cross_cc));
    }

    all_ok &= check(
        &format!("target {}", manifest.target_triple),
        target_installed(&manifest.target_triple),
    );

    rig_println!();
    if all_ok {
        rig_println!("All checks passed.");
        Ok(0)
    } else {
        rig_warning!("Some checks failed. Run `rig-setup run` to provision this host.");
        Ok(1)
    }
}

fn check(label: &str, ok: bool) -> bool {
    if ok {
        rig_println!("  {}... ✓", label);
    } else {
        rig_println!("  {}... ❌", label);
    }
    ok
}

/// gcc cross packages are named `gcc-<triple>`; the binary they ship is
/// `<triple>-gcc`. Other package names get no binary check.
fn cross_compiler_binary(cross_package: &str) -> Option<String> {
    cross_package
        .strip_prefix("gcc-")
        .map(|triple| format!("{triple}-gcc"))
}

fn target_installed(triple: &str) -> bool {
    if !is_tool_installed("rustup") {
        return false;
    }
    command_output("rustup", &["target", "list", "--installed"])
        .map(|output| output.lines().any(|line| line.trim() == triple))
        .unwrap_or(false)
}
