// draftcatch - core/mod.rs
//
// Core business logic layer: URL extraction and step-output publishing.
// Must NOT read the process environment or touch the filesystem except
// through the explicit publish entry point.

pub mod extract;
pub mod publish;
