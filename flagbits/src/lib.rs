//! Typed 64-bit flag sets for database storage.
//!
//! `flagbits` converts between a set of named flags and a compact `u64`
//! representation - the form you store in an integer column instead of a
//! join table. Each flag type assigns every flag a fixed bit position;
//! [`BitField`] holds a subset of those flags as an immutable value and
//! round-trips it to and from the raw integer.
//!
//! # Example
//!
//! ```
//! use flagbits::{BitField, BitFlag};
//!
//! #[derive(BitFlag, Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum WeekDay {
//!     #[flag(0)]
//!     Monday,
//!     #[flag(1)]
//!     Tuesday,
//!     #[flag(2)]
//!     Wednesday,
//!     #[flag(3)]
//!     Thursday,
//!     #[flag(4)]
//!     Friday,
//!     #[flag(5)]
//!     Saturday,
//!     #[flag(6)]
//!     Sunday,
//! }
//!
//! // Encode
//! let days = BitField::new(&[WeekDay::Monday, WeekDay::Friday]).unwrap();
//! assert_eq!(days.bits(), 17);
//!
//! // Decode the stored integer
//! let loaded = BitField::<WeekDay>::from_bits(17).unwrap();
//! assert_eq!(loaded, days);
//! assert!(loaded.contains(WeekDay::Friday));
//!
//! // Copy-on-write updates
//! let more = days.with(WeekDay::Sunday);
//! assert_eq!(days.bits(), 17);
//! assert_eq!(more.bits(), 81);
//! ```

#![no_std]
#![warn(missing_docs)]

mod error;
mod field;
mod flag;
pub mod layout;

#[cfg(feature = "serde")]
mod serde;

pub use error::{DecodeError, InvalidLayout, LayoutFault, UnknownBits};
pub use field::{BitField, Iter};
pub use flag::BitFlag;

#[cfg(feature = "derive")]
pub use flagbits_derive::BitFlag;
