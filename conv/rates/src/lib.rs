mod compact;
mod constants;
mod convert;
mod error;
mod yearly;

pub use crate::{compact::*, constants::*, convert::*, error::*, yearly::*};
