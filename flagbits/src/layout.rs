//! Flag layout validation.
//!
//! A flag type is trusted to encode or decode integers only if its layout
//! is valid: every member's position unique and below 64. Gaps are fine -
//! positions `{0, 2, 3}` leave bit 1 permanently clear, nothing more.
//! Validation runs eagerly on every fallible constructor; it is a single
//! pass over at most 64 members, so nothing is cached.

use crate::error::{InvalidLayout, LayoutFault};
use crate::flag::BitFlag;

/// Checks `T`'s layout, reporting the first fault found.
///
/// # Example
///
/// ```
/// use flagbits::{layout, BitFlag};
///
/// #[derive(Debug, Clone, Copy)]
/// struct Broken(u32);
///
/// impl BitFlag for Broken {
///     const MEMBERS: &'static [Self] = &[Broken(3), Broken(3)];
///     fn position(self) -> u32 {
///         self.0
///     }
/// }
///
/// let err = layout::validate::<Broken>().unwrap_err();
/// assert_eq!(err.position, 3);
/// ```
pub fn validate<T: BitFlag>() -> Result<(), InvalidLayout> {
    let mut seen: u64 = 0;

    for &flag in T::MEMBERS {
        let position = flag.position();

        if position >= u64::BITS {
            return Err(InvalidLayout {
                type_name: core::any::type_name::<T>(),
                position,
                fault: LayoutFault::PositionOutOfRange,
            });
        }

        let mask = 1u64 << position;
        if seen & mask != 0 {
            return Err(InvalidLayout {
                type_name: core::any::type_name::<T>(),
                position,
                fault: LayoutFault::DuplicatePosition,
            });
        }
        seen |= mask;
    }

    Ok(())
}

/// Returns true if `T`'s layout is valid.
///
/// An empty member list is valid; sparse positions are valid.
#[inline]
pub fn is_valid<T: BitFlag>() -> bool {
    validate::<T>().is_ok()
}
