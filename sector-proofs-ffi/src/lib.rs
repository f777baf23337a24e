#![deny(clippy::all, clippy::perf, clippy::correctness)]

// This needs to be here because of cbindgen: https://github.com/eqrion/cbindgen/issues/292
extern crate sector_proofs;

#[macro_use]
extern crate log;

pub mod api;
pub mod types;
