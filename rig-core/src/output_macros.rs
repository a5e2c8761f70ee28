//! Themed output macros for the rig CLI tools.
//!
//! Consistent user-facing output across crates: plain lines go to stdout,
//! status markers go to stderr.

#[macro_export]
macro_rules! rig_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! rig_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! rig_success {
    ($($arg:tt)*) => {
        eprintln!("✓ {}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! rig_info {
    ($($arg:tt)*) => {
        eprintln!("ℹ {}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! rig_warning {
    ($($arg:tt)*) => {
        eprintln!("⚠ {}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! rig_progress {
    ($($arg:tt)*) => {
        eprintln!("▶ {}", format!($($arg)*));
    }
}
