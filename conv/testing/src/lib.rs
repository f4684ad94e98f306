mod reference;

pub use crate::reference::*;
