#![deny(clippy::all, clippy::perf, clippy::correctness)]

#[macro_use]
extern crate log;

pub use crate::aggregate::*;
pub use crate::commcid::*;
pub use crate::error::*;
pub use crate::sector_info::*;
pub use crate::sorted::*;
pub use crate::types::*;

pub(crate) mod aggregate;
pub(crate) mod commcid;
pub(crate) mod error;
pub(crate) mod helpers;
pub(crate) mod sector_info;
pub(crate) mod sorted;
pub(crate) mod types;
