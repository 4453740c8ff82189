//! Python backend.
//!
//! One statement per line, no prologue. Variables need no type bookkeeping:
//!
//! ```text
//! _at___at_ = 0
//! _at___at_ += 2
//! print(_at___at_)
//! ```

use uwu_ir::{Call, Decl, ExtendedStatement, StxTag, TypeTag};

use crate::{accumulate_operands, Backend, CodegenContext, CodegenError};

/// Source call name → Python function.
const CALL_NAMES: &[(&str, &str)] = &[("UwU", "print")];

/// Default value for a declared type.
fn decl_initializer(declared_type: TypeTag) -> &'static str {
    match declared_type {
        TypeTag::Int => "0",
    }
}

/// Generates Python source.
#[derive(Default)]
pub struct PythonBackend;

impl PythonBackend {
    pub fn new() -> Self {
        PythonBackend
    }
}

impl Backend for PythonBackend {
    fn visit_call(&mut self, ctx: &mut CodegenContext<'_>, call: &Call) -> Result<(), CodegenError> {
        let Some(&(_, func)) = CALL_NAMES.iter().find(|(n, _)| *n == call.callee.name) else {
            return Err(CodegenError::UnknownCall {
                name: call.callee.name.clone(),
                position: call.callee.position,
            });
        };
        let args = call
            .arguments
            .iter()
            .map(|arg| self.visit_expr(arg))
            .collect::<Vec<_>>()
            .join(", ");
        ctx.writeln(&format!("{func}({args})"))
    }

    fn visit_decl(&mut self, ctx: &mut CodegenContext<'_>, decl: &Decl) -> Result<(), CodegenError> {
        let var = self.visit_identifier(&decl.variable);
        let initializer = decl_initializer(decl.declared_type);
        ctx.writeln(&format!("{var} = {initializer}"))
    }

    fn visit_stx(
        &mut self,
        ctx: &mut CodegenContext<'_>,
        stx: &ExtendedStatement,
    ) -> Result<(), CodegenError> {
        match stx.name {
            StxTag::Sum => {
                let (target, value) = accumulate_operands(stx)?;
                let value = self.visit_expr(value);
                let var = self.visit_identifier(target);
                ctx.writeln(&format!("{var} += {value}"))
            }
        }
    }
}
