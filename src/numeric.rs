//! Conversion and constant traits shared by the two wide integer types.

/// A trait for types that have the basic integer constants.
pub trait Numeric: Copy + PartialEq + PartialOrd + Send + Sync {
    const BITS: usize;
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const MAX: Self;
}

/// Casts a value from one type to another.
///
/// Every impl follows the semantics of the native `as` operator: widening
/// conversions zero-extend unsigned sources and sign-extend signed ones,
/// narrowing conversions truncate, and same-width signed/unsigned pairs
/// reinterpret the bit pattern.
pub trait CastFrom<Input>: Sized {
    fn cast_from(input: Input) -> Self;
}

/// Casts a value into another type, the mirror of [`CastFrom`].
pub trait CastInto<Dest>: Sized {
    fn cast_into(self) -> Dest;
}

impl<Input, Dest> CastInto<Dest> for Input
where
    Dest: CastFrom<Input>,
{
    fn cast_into(self) -> Dest {
        Dest::cast_from(self)
    }
}
