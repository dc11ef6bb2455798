#![cfg(feature = "serde")]

use flagbits::{BitField, BitFlag};

#[derive(BitFlag, Debug, Clone, Copy, PartialEq, Eq)]
enum WeekDay {
    #[flag(0)]
    Monday,
    #[flag(1)]
    Tuesday,
    #[flag(2)]
    Wednesday,
    #[flag(3)]
    Thursday,
    #[flag(4)]
    Friday,
    #[flag(5)]
    Saturday,
    #[flag(6)]
    Sunday,
}

#[test]
fn serializes_as_raw_integer() {
    let field = BitField::new(&[WeekDay::Monday, WeekDay::Friday]).unwrap();
    assert_eq!(serde_json::to_string(&field).unwrap(), "17");
}

#[test]
fn deserializes_from_raw_integer() {
    let field: BitField<WeekDay> = serde_json::from_str("17").unwrap();
    assert_eq!(field.bits(), 17);
    assert!(field.contains(WeekDay::Friday));
}

#[test]
fn round_trip() {
    let field = BitField::new(&[WeekDay::Tuesday, WeekDay::Sunday]).unwrap();
    let json = serde_json::to_string(&field).unwrap();
    let back: BitField<WeekDay> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, field);
}

#[test]
fn rejects_unknown_bits() {
    let result: Result<BitField<WeekDay>, _> = serde_json::from_str("128");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("unknown bits"));
}

#[test]
fn zero_is_empty() {
    let field: BitField<WeekDay> = serde_json::from_str("0").unwrap();
    assert!(field.is_empty());
}
