mod error;
mod parser;

pub use crate::{error::*, parser::*};
