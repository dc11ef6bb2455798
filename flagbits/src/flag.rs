//! The flag descriptor contract.

/// A named flag with a fixed bit position.
///
/// Implement this (or derive it) on the closed set of flags belonging to
/// one domain - days of a week, permissions of a role. Each member maps
/// to one bit of the stored `u64`, so positions must be unique within the
/// type and below 64. Never derive positions from declaration order; if
/// the order changes, every persisted value changes meaning with it.
///
/// # Example
///
/// ```
/// use flagbits::BitFlag;
///
/// #[derive(BitFlag, Debug, Clone, Copy, PartialEq, Eq)]
/// pub enum Permission {
///     #[flag(0)]
///     Read,
///     #[flag(1)]
///     Write,
///     #[flag(4)]
///     Admin,
/// }
///
/// assert_eq!(Permission::Admin.position(), 4);
/// assert_eq!(Permission::MEMBERS.len(), 3);
/// ```
pub trait BitFlag: Copy + 'static {
    /// Every member of the flag type, in declaration order.
    ///
    /// Stands in for runtime enum reflection: constructors and decoders
    /// walk this list to learn which bits are meaningful.
    const MEMBERS: &'static [Self];

    /// Bit index of this flag within the stored integer.
    fn position(self) -> u32;
}
