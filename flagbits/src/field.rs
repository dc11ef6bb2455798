//! The immutable bit field value type.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::error::{DecodeError, InvalidLayout, UnknownBits};
use crate::flag::BitFlag;
use crate::layout;

/// An immutable set of `T` flags backed by a `u64`.
///
/// Bit `p` of [`bits`](BitField::bits) is set exactly when the flag at
/// position `p` is active. Two fields over the same flag type compare
/// equal whenever their bits match, regardless of how they were built;
/// fields over different flag types are different types and never
/// compare at all.
///
/// The value is `Copy` and never mutated - every "mutating" helper
/// returns a new field and leaves the receiver untouched.
///
/// # Example
///
/// ```
/// use flagbits::{BitField, BitFlag};
///
/// #[derive(BitFlag, Debug, Clone, Copy, PartialEq, Eq)]
/// enum Role {
///     #[flag(0)]
///     Viewer,
///     #[flag(1)]
///     Editor,
///     #[flag(2)]
///     Owner,
/// }
///
/// let field = BitField::new(&[Role::Viewer, Role::Owner]).unwrap();
/// assert_eq!(field.bits(), 0b101);
///
/// let widened = field.with(Role::Editor);
/// assert_eq!(widened.bits(), 0b111);
/// assert_eq!(field.bits(), 0b101);
/// ```
pub struct BitField<T> {
    bits: u64,
    _flags: PhantomData<T>,
}

impl<T: BitFlag> BitField<T> {
    /// The field with no active flags; its integer form is 0.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _flags: PhantomData,
        }
    }

    /// Builds a field from the given flags.
    ///
    /// Duplicates in the slice collapse onto the same bit. Fails if `T`'s
    /// layout is invalid (duplicate or out-of-range positions).
    pub fn new(flags: &[T]) -> Result<Self, InvalidLayout> {
        layout::validate::<T>()?;

        let mut bits = 0u64;
        for &flag in flags {
            bits |= mask(flag);
        }

        Ok(Self {
            bits,
            _flags: PhantomData,
        })
    }

    /// Decodes a raw integer, e.g. one loaded from a database column.
    ///
    /// Every set bit must belong to some member of `T`; a leftover bit
    /// means the value is corrupt or written by an incompatible schema,
    /// and the whole decode fails. The stored integer form is `value`
    /// verbatim.
    ///
    /// # Example
    ///
    /// ```
    /// # use flagbits::{BitField, BitFlag, DecodeError};
    /// # #[derive(BitFlag, Debug, Clone, Copy, PartialEq, Eq)]
    /// # enum Role {
    /// #     #[flag(0)]
    /// #     Viewer,
    /// #     #[flag(1)]
    /// #     Editor,
    /// # }
    /// let field = BitField::<Role>::from_bits(0b11).unwrap();
    /// assert_eq!(field.len(), 2);
    ///
    /// // Bit 2 maps to no Role
    /// assert!(matches!(
    ///     BitField::<Role>::from_bits(0b100),
    ///     Err(DecodeError::UnknownBits(_))
    /// ));
    /// ```
    pub fn from_bits(value: u64) -> Result<Self, DecodeError> {
        layout::validate::<T>()?;

        // Clear each known flag's bit; whatever survives maps to nothing.
        let mut remaining = value;
        for &flag in T::MEMBERS {
            let mask = mask(flag);
            if remaining & mask != 0 {
                remaining ^= mask;
            }
        }

        if remaining != 0 {
            return Err(UnknownBits {
                type_name: core::any::type_name::<T>(),
                value,
                unknown: remaining,
            }
            .into());
        }

        Ok(Self {
            bits: value,
            _flags: PhantomData,
        })
    }

    /// The integer form, verbatim - this is what you persist.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Returns true if `flag` is active.
    #[inline]
    pub fn contains(self, flag: T) -> bool {
        self.bits & mask(flag) != 0
    }

    /// Number of active flags.
    #[inline]
    pub const fn len(self) -> u32 {
        self.bits.count_ones()
    }

    /// Returns true if no flag is active.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// A new field with `flag` also active. Idempotent.
    #[inline]
    pub fn with(self, flag: T) -> Self {
        Self {
            bits: self.bits | mask(flag),
            _flags: PhantomData,
        }
    }

    /// A new field with every flag in `flags` also active.
    ///
    /// An empty slice yields an equal field.
    pub fn with_all(self, flags: &[T]) -> Self {
        let mut bits = self.bits;
        for &flag in flags {
            bits |= mask(flag);
        }
        Self {
            bits,
            _flags: PhantomData,
        }
    }

    /// A new field with `flag` inactive.
    #[inline]
    pub fn without(self, flag: T) -> Self {
        Self {
            bits: self.bits & !mask(flag),
            _flags: PhantomData,
        }
    }

    /// A new field with `flag` flipped.
    #[inline]
    pub fn toggle(self, flag: T) -> Self {
        Self {
            bits: self.bits ^ mask(flag),
            _flags: PhantomData,
        }
    }

    /// A new field whose active set is exactly `flags`, discarding the
    /// receiver's flags entirely.
    pub fn replace(self, flags: &[T]) -> Self {
        let mut bits = 0u64;
        for &flag in flags {
            bits |= mask(flag);
        }
        Self {
            bits,
            _flags: PhantomData,
        }
    }

    /// Iterates the active flags in ascending position order.
    ///
    /// Each call starts a fresh traversal; the field itself is never
    /// touched. Collect into a `Vec` or set for a standalone copy of the
    /// active set.
    #[inline]
    pub fn iter(self) -> Iter<T> {
        Iter {
            remaining: self.bits,
            _flags: PhantomData,
        }
    }
}

/// Bit mask for one flag.
///
/// # Panics
///
/// Panics if the flag's position is >= 64. Only a hand-written `BitFlag`
/// impl that validation has not seen yet can get here.
#[inline]
fn mask<T: BitFlag>(flag: T) -> u64 {
    let position = flag.position();
    assert!(
        position < u64::BITS,
        "flag position exceeds bit field bounds"
    );
    1u64 << position
}

// Manual impls: the field is Copy and compared by bits alone, whatever
// extra traits T carries.

impl<T> Clone for BitField<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BitField<T> {}

impl<T: BitFlag> Default for BitField<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> PartialEq for BitField<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T> Eq for BitField<T> {}

impl<T> Hash for BitField<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<T: BitFlag + fmt::Debug> fmt::Debug for BitField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Flags<T>(Iter<T>);

        impl<T: BitFlag + fmt::Debug> fmt::Debug for Flags<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_set().entries(self.0.clone()).finish()
            }
        }

        f.debug_struct("BitField")
            .field("bits", &self.bits)
            .field("flags", &Flags(self.iter()))
            .finish()
    }
}

impl<T: BitFlag> IntoIterator for BitField<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    #[inline]
    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

impl<T: BitFlag> IntoIterator for &BitField<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    #[inline]
    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

/// Iterator over a field's active flags, lowest position first.
pub struct Iter<T> {
    remaining: u64,
    _flags: PhantomData<T>,
}

impl<T> Clone for Iter<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            remaining: self.remaining,
            _flags: PhantomData,
        }
    }
}

impl<T: BitFlag> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while self.remaining != 0 {
            let position = self.remaining.trailing_zeros();
            // Drop the lowest set bit
            self.remaining &= self.remaining - 1;

            if let Some(&flag) = T::MEMBERS.iter().find(|f| f.position() == position) {
                return Some(flag);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.remaining.count_ones() as usize;
        (0, Some(upper))
    }
}

impl<T: BitFlag> core::iter::FusedIterator for Iter<T> {}
