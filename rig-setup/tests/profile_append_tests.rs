use std::fs;

use rig_setup::steps::profile::append_line;
use tempfile::TempDir;

const PROFILE_LINE: &str = "source \"$HOME/.cargo/env\"";

#[test]
fn append_modifies_profile() {
    let temp = TempDir::new().unwrap();
    let profile = temp.path().join(".bashrc");
    let initial_content = "# initial content\n";
    fs::write(&profile, initial_content).unwrap();

    append_line(&profile, PROFILE_LINE).unwrap();

    let content = fs::read_to_string(&profile).unwrap();
    assert_ne!(content, initial_content, "The file content should have changed.");
    assert!(content.contains(PROFILE_LINE));
}

// The append is deliberately unguarded: provisioning a host twice leaves
// the line in the profile twice, matching the upstream script.
#[test]
fn appending_twice_appends_twice() {
    let temp = TempDir::new().unwrap();
    let profile = temp.path().join(".bashrc");

    append_line(&profile, PROFILE_LINE).unwrap();
    append_line(&profile, PROFILE_LINE).unwrap();

    let content = fs::read_to_string(&profile).unwrap();
    assert_eq!(content.matches(PROFILE_LINE).count(), 2);
}

#[test]
fn append_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let profile = temp.path().join(".config/fish/config.fish");

    append_line(&profile, "fish_add_path -p \"$HOME/.cargo/bin\"").unwrap();

    assert!(profile.exists());
}
