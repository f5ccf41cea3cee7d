// draftcatch - lib.rs
//
// Library entry point, exposing the extraction and publishing modules for
// integration testing and potential future programmatic use.

pub mod core;
pub mod util;
