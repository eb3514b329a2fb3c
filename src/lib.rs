//! Portable fixed-width 128-bit integer arithmetic built from 64-bit limbs.
//!
//! [`U128`] is the unsigned leaf type: every arithmetic, comparison, bit,
//! shift, parse/format and float-conversion primitive is implemented directly
//! on its two limbs. [`I128`] reinterprets the same limb layout as two's
//! complement and delegates its multiplication cross terms and division to
//! the unsigned algorithms after sign normalization.
//!
//! No native 128-bit type backs the arithmetic: carries, borrows and partial
//! products are propagated across 64-bit limbs, so the crate ports to targets
//! without wide integer support. Both types are plain immutable values; every
//! operation is a pure function of its operands and safe to use from any
//! number of threads.
//!
//! Unchecked operators wrap modulo 2^128 like the native fixed-width
//! integers; the `overflowing_*`/`checked_*` variants report overflow
//! instead. Division by zero and out-of-domain float conversions panic.
//!
//! ```
//! use wideint::{I128, U128};
//!
//! let a = U128::from_str_radix("ff", 16).unwrap();
//! assert_eq!(a + U128::ONE, U128::from(256u32));
//!
//! let b: I128 = "-170141183460469231731687303715884105728".parse().unwrap();
//! assert_eq!(b, I128::MIN);
//! assert_eq!(b.checked_div(I128::from(-1i64)), None);
//! ```

mod algorithms;
mod error;
mod numeric;
mod signed;
mod unsigned;

pub use error::{IntErrorKind, ParseIntError};
pub use numeric::{CastFrom, CastInto, Numeric};
pub use signed::I128;
pub use unsigned::U128;
