use {
    crate::{MathError, MathResult, NumberConst, Uint128, Uint256, Uint512},
    bnum::{cast::As, types::U512},
};

/// Describes a number type can be cast into another type of a bigger word size.
///
/// For example, [`Uint256`] can be safely cast to [`Uint512`]. In this case,
/// [`NextNumber`] is implemented for [`Uint256`] with `Next` being [`Uint512`].
pub trait NextNumber {
    type Next;

    fn into_next(self) -> Self::Next;
}

/// Describes a number type can be cast into another type of a smaller word size.
///
/// The cast fails with [`MathError::OverflowConversion`] if the value doesn't
/// fit in the smaller type.
pub trait PrevNumber {
    type Prev;

    fn checked_into_prev(self) -> MathResult<Self::Prev>;
}

// ----------------------------------- next ------------------------------------

impl NextNumber for Uint128 {
    type Next = Uint256;

    fn into_next(self) -> Self::Next {
        Uint256::new_from_u128(self.0)
    }
}

impl NextNumber for Uint256 {
    type Next = Uint512;

    fn into_next(self) -> Self::Next {
        Uint512::new(self.0.as_())
    }
}

// ----------------------------------- prev ------------------------------------

impl PrevNumber for Uint256 {
    type Prev = Uint128;

    fn checked_into_prev(self) -> MathResult<Self::Prev> {
        self.0
            .try_into()
            .map(Uint128::new)
            .map_err(|_| MathError::overflow_conversion::<_, Uint128>(self))
    }
}

impl PrevNumber for Uint512 {
    type Prev = Uint256;

    fn checked_into_prev(self) -> MathResult<Self::Prev> {
        if self.0 > Uint256::MAX.0.as_::<U512>() {
            return Err(MathError::overflow_conversion::<_, Uint256>(self));
        }

        Ok(Uint256::new(self.0.as_()))
    }
}

// ----------------------------------- tests -----------------------------------
