//! Configuration registry adapters.

mod cargo;

pub use cargo::{CargoDirectives, cfg_name};
