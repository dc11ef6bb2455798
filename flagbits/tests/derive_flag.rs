use flagbits::{BitField, BitFlag};

#[derive(BitFlag, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    #[flag(0)]
    Read,
    #[flag(1)]
    Write,
    #[flag(2)]
    Delete,
    #[flag(3)]
    Admin,
}

#[test]
fn positions() {
    assert_eq!(Permission::Read.position(), 0);
    assert_eq!(Permission::Write.position(), 1);
    assert_eq!(Permission::Delete.position(), 2);
    assert_eq!(Permission::Admin.position(), 3);
}

#[test]
fn members_in_declaration_order() {
    assert_eq!(
        Permission::MEMBERS,
        &[
            Permission::Read,
            Permission::Write,
            Permission::Delete,
            Permission::Admin
        ]
    );
}

#[test]
fn works_with_bit_field() {
    let field = BitField::new(&[Permission::Read, Permission::Admin]).unwrap();
    assert_eq!(field.bits(), 0b1001);

    let decoded = BitField::<Permission>::from_bits(0b1001).unwrap();
    assert_eq!(decoded, field);
}

// Positions need not follow declaration order or be contiguous
#[derive(BitFlag, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scrambled {
    #[flag(5)]
    A,
    #[flag(0)]
    B,
    #[flag(3)]
    C,
}

#[test]
fn scrambled_positions() {
    assert_eq!(Scrambled::A.position(), 5);
    assert_eq!(Scrambled::B.position(), 0);
    assert_eq!(Scrambled::C.position(), 3);
}

#[test]
fn scrambled_members_keep_declaration_order() {
    assert_eq!(
        Scrambled::MEMBERS,
        &[Scrambled::A, Scrambled::B, Scrambled::C]
    );
}

#[test]
fn scrambled_iteration_is_by_position() {
    let field = BitField::new(&[Scrambled::A, Scrambled::B, Scrambled::C]).unwrap();
    let flags: Vec<Scrambled> = field.iter().collect();
    assert_eq!(flags, vec![Scrambled::B, Scrambled::C, Scrambled::A]);
}

// Single variant
#[derive(BitFlag, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solo {
    #[flag(0)]
    Only,
}

#[test]
fn single_variant() {
    assert_eq!(Solo::MEMBERS, &[Solo::Only]);
    assert_eq!(BitField::new(&[Solo::Only]).unwrap().bits(), 1);
}

// Top of the representable range
#[derive(BitFlag, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    #[flag(63)]
    SignBit,
}

#[test]
fn position_63_allowed() {
    assert_eq!(Edge::SignBit.position(), 63);
    assert_eq!(BitField::new(&[Edge::SignBit]).unwrap().bits(), 1u64 << 63);
}
