mod conversions;
mod error;
mod int;
mod number;
mod number_const;
mod precise;
mod ray;

pub use crate::{
    conversions::*, error::*, int::*, number::*, number_const::*, precise::*, ray::*,
};
