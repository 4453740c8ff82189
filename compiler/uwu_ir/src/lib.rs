//! Shared data types for the UwU compiler pipeline.
//!
//! Every stage hands data forward through the types defined here:
//!
//! ```text
//! characters → Token → TreeRoot<TList> → TreeRoot<Node> → target text
//!  (uwu_lexer)  (uwu_parse)  (uwu_lower)    (uwu_codegen)
//! ```
//!
//! Nothing in this crate performs work on its own; it only fixes the shapes
//! that the stages agree on.

mod expr;
mod node;
mod position;
mod token;
mod tree;

pub use expr::{Expr, Identifier, NumberLiteral};
pub use node::{Call, Decl, ExtendedStatement, Node, StxTag, TypeTag};
pub use position::{SourceLabel, SourcePosition};
pub use token::{Token, TokenKind, TokenTag};
pub use tree::{TList, TreeRoot};
