//! Host provisioning for the vision rig pipeline.
//!
//! The rig's capture and inference daemons need a C/C++ build toolchain,
//! CMake, ZeroMQ, OpenCV (plus its Python binding), an ML inference
//! runtime, and a Rust toolchain with a cross-compilation target. This
//! crate turns the fixed provisioning sequence into an inspectable plan:
//! build it, print it, or run it.

pub mod cli;
pub mod doctor;
pub mod manifest;
pub mod plan;
pub mod prompt;
pub mod steps;
