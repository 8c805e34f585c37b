pub mod cmd_utils;
mod combiner;
mod error;

pub use crate::combiner::{combine, Combiner, Report};
pub use crate::error::{Error, Result};
