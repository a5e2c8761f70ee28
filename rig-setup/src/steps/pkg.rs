//! Package-manager invocations. Dependency resolution stays the package
//! manager's job; these only spell out the commands.

use crate::manifest::SetupManifest;
use crate::plan::CommandSpec;

pub fn refresh_index(manifest: &SetupManifest) -> CommandSpec {
    CommandSpec::new(&manifest.package_manager, ["update"])
}

pub fn install_packages(manifest: &SetupManifest) -> CommandSpec {
    let mut args = vec!["install".to_string(), "-y".to_string()];
    args.extend(manifest.packages.iter().cloned());
    CommandSpec::new(&manifest.package_manager, args)
}

pub fn install_cross_compiler(manifest: &SetupManifest) -> CommandSpec {
    CommandSpec::new(
        &manifest.package_manager,
        ["install".to_string(), "-y".to_string(), manifest.cross_package.clone()],
    )
}
