//! Code generation backends for UwU.
//!
//! Every backend implements [`Backend`], a visitor over the closed IR node
//! set, and writes into any [`std::fmt::Write`] sink:
//!
//! ```text
//! TreeRoot<Node>
//!       ↓
//!   Backend::compile   (prologue, one line per node, epilogue)
//!       ↓
//!   target source text
//! ```
//!
//! Identifier sanitization and the accumulate statement's operand checks are
//! shared by all backends.

mod backend;
pub mod c;
mod context;
mod error;
mod kind;
pub mod python;
mod sanitize;

pub use backend::{accumulate_operands, Backend};
pub use c::CBackend;
pub use context::CodegenContext;
pub use error::CodegenError;
pub use kind::BackendKind;
pub use python::PythonBackend;
pub use sanitize::{sanitize, SUBSTITUTIONS};
