//! Keyword tables.
//!
//! Three closed, non-overlapping tables decide what a line becomes. They are
//! searched in order: calls, then declarations, then extended statements.

use uwu_ir::{StxTag, TypeTag};

/// Built-in call names.
pub const CALLS: &[&str] = &["UwU"];

/// Declaration keywords and the type they declare.
pub const DECLARATIONS: &[(&str, TypeTag)] = &[("O.O", TypeTag::Int)];

/// Extended statement keywords and their form.
pub const EXTENDED_STATEMENTS: &[(&str, StxTag)] = &[(":v", StxTag::Sum)];

/// What a leading keyword selects.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Keyword {
    Call,
    Decl(TypeTag),
    Stx(StxTag),
}

/// Look a leading name up in the keyword tables.
pub fn lookup(name: &str) -> Option<Keyword> {
    if CALLS.contains(&name) {
        return Some(Keyword::Call);
    }
    if let Some(&(_, tag)) = DECLARATIONS.iter().find(|(k, _)| *k == name) {
        return Some(Keyword::Decl(tag));
    }
    EXTENDED_STATEMENTS
        .iter()
        .find(|(k, _)| *k == name)
        .map(|&(_, tag)| Keyword::Stx(tag))
}

/// Every keyword, for "expected one of" messages.
pub fn all() -> impl Iterator<Item = &'static str> {
    CALLS
        .iter()
        .copied()
        .chain(DECLARATIONS.iter().map(|(k, _)| *k))
        .chain(EXTENDED_STATEMENTS.iter().map(|(k, _)| *k))
}
