pub mod common;
pub mod sla;

pub use common::*;
pub use sla::*;
