use {
    crate::{MathError, Number},
    bnum::types::{U256, U512},
    serde::{de, ser},
    std::{
        fmt::{self, Display},
        marker::PhantomData,
        ops::{Add, Div, Mul, Rem, Sub},
        str::FromStr,
    },
};

// ------------------------------- generic type --------------------------------

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int<U>(pub U);

impl<U> Int<U> {
    pub const fn new(value: U) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> U {
        self.0
    }
}

impl<U> FromStr for Int<U>
where
    U: FromStr,
    <U as FromStr>::Err: ToString,
{
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U::from_str(s)
            .map(Self)
            .map_err(|err| MathError::parse_number::<Self>(s, err))
    }
}

impl<U> fmt::Display for Int<U>
where
    U: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<U> ser::Serialize for Int<U>
where
    Int<U>: Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, U> de::Deserialize<'de> for Int<U>
where
    Int<U>: FromStr,
    <Int<U> as FromStr>::Err: Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(IntVisitor::<U>::new())
    }
}

struct IntVisitor<U> {
    _marker: PhantomData<U>,
}

impl<U> IntVisitor<U> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<U> de::Visitor<'_> for IntVisitor<U>
where
    Int<U>: FromStr,
    <Int<U> as FromStr>::Err: Display,
{
    type Value = Int<U>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string-encoded unsigned integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Int::<U>::from_str(v).map_err(E::custom)
    }
}

impl<U> Add for Int<U>
where
    U: Number,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Sub for Int<U>
where
    U: Number,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Mul for Int<U>
where
    U: Number,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Div for Int<U>
where
    U: Number,
{
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Rem for Int<U>
where
    U: Number,
{
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

// ------------------------------ concrete types -------------------------------

pub type Uint128 = Int<u128>;

pub type Uint256 = Int<U256>;

pub type Uint512 = Int<U512>;

impl Uint256 {
    pub const fn new_from_u128(value: u128) -> Self {
        Self(U256::from_digits([value as u64, (value >> 64) as u64, 0, 0]))
    }
}

impl Uint512 {
    pub const fn new_from_u128(value: u128) -> Self {
        Self(U512::from_digits([
            value as u64,
            (value >> 64) as u64,
            0,
            0,
            0,
            0,
            0,
            0,
        ]))
    }
}

macro_rules! impl_from_primitive {
    ($($p:ty),+ => $t:ty) => {
        $(
            impl From<$p> for $t {
                fn from(value: $p) -> Self {
                    Self::new_from_u128(value as u128)
                }
            }
        )+
    };
}

impl_from_primitive!(u32, u64, u128 => Uint256);
impl_from_primitive!(u32, u64, u128 => Uint512);

impl From<u32> for Uint128 {
    fn from(value: u32) -> Self {
        Self(value as u128)
    }
}

impl From<u64> for Uint128 {
    fn from(value: u64) -> Self {
        Self(value as u128)
    }
}

// ----------------------------------- tests -----------------------------------
