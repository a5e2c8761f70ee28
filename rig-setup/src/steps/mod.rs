pub mod pkg;
pub mod profile;
pub mod toolchain;
