//! C backend.
//!
//! Emits a single `main` function. Declared variables are remembered with
//! their C type so that `printf` can pick a format placeholder for each
//! argument.
//!
//! ```text
//! #include <stdio.h>
//!
//! int main(int argc, char** argv) {
//!     int _at___at_ = 0;
//!     _at___at_ += 2;
//!     printf("%d\n", _at___at_);
//!     return 0;
//! }
//! ```

use rustc_hash::FxHashMap;
use uwu_ir::{Call, Decl, Expr, ExtendedStatement, StxTag, TypeTag};

use crate::{accumulate_operands, Backend, CodegenContext, CodegenError};

/// C types a value can have.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CType {
    Int,
    Float,
}

impl CType {
    pub fn as_str(self) -> &'static str {
        match self {
            CType::Int => "int",
            CType::Float => "float",
        }
    }

    /// Placeholder used to print a value of this type, if there is one.
    pub fn format_placeholder(self) -> Option<&'static str> {
        FORMAT_OPTIONS
            .iter()
            .find(|(ty, _)| *ty == self)
            .map(|(_, placeholder)| *placeholder)
    }
}

/// Type → `printf` placeholder.
const FORMAT_OPTIONS: &[(CType, &str)] = &[(CType::Int, "%d")];

/// C type and zero initializer for a declared type.
fn decl_initializer(declared_type: TypeTag) -> (CType, &'static str) {
    match declared_type {
        TypeTag::Int => (CType::Int, "0"),
    }
}

/// Built-in functions a call can lower to.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum CFunc {
    Printf,
}

/// Source call name → C function.
const CALL_NAMES: &[(&str, CFunc)] = &[("UwU", CFunc::Printf)];

impl CFunc {
    fn lookup(name: &str) -> Option<CFunc> {
        CALL_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, f)| f)
    }

    fn name(self) -> &'static str {
        match self {
            CFunc::Printf => "printf",
        }
    }

    /// Render the full argument list, including any format string.
    fn format_args(self, backend: &mut CBackend, args: &[Expr]) -> Result<String, CodegenError> {
        match self {
            CFunc::Printf => {
                let mut placeholders = Vec::with_capacity(args.len());
                for arg in args {
                    let ty = backend.type_of(arg)?;
                    let placeholder = ty.format_placeholder().ok_or(CodegenError::FormatOption {
                        type_name: ty.as_str(),
                        position: arg.position(),
                    })?;
                    placeholders.push(placeholder);
                }

                let mut rendered = vec![format!("\"{}\\n\"", placeholders.join(" "))];
                rendered.extend(args.iter().map(|arg| backend.visit_expr(arg)));
                Ok(rendered.join(", "))
            }
        }
    }
}

/// Generates C source.
#[derive(Default)]
pub struct CBackend {
    /// Declared variables by source name.
    var_types: FxHashMap<String, CType>,
}

impl CBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type of a print argument: declared type for names, inferred for literals.
    fn type_of(&self, expr: &Expr) -> Result<CType, CodegenError> {
        match expr {
            Expr::Identifier(id) => self.var_types.get(&id.name).copied().ok_or_else(|| {
                CodegenError::UnknownVariableType {
                    name: id.name.clone(),
                    position: id.position,
                }
            }),
            Expr::Number(n) if n.is_integral() => Ok(CType::Int),
            Expr::Number(_) => Ok(CType::Float),
        }
    }
}

impl Backend for CBackend {
    fn prologue(&mut self, ctx: &mut CodegenContext<'_>) -> Result<(), CodegenError> {
        self.var_types.clear();
        ctx.writeln("#include <stdio.h>")?;
        ctx.writeln("")?;
        ctx.writeln("int main(int argc, char** argv) {")?;
        ctx.indent();
        Ok(())
    }

    fn epilogue(&mut self, ctx: &mut CodegenContext<'_>) -> Result<(), CodegenError> {
        ctx.writeln("return 0;")?;
        ctx.dedent();
        ctx.writeln("}")
    }

    fn visit_call(&mut self, ctx: &mut CodegenContext<'_>, call: &Call) -> Result<(), CodegenError> {
        let func = CFunc::lookup(&call.callee.name).ok_or_else(|| CodegenError::UnknownCall {
            name: call.callee.name.clone(),
            position: call.callee.position,
        })?;
        let args = func.format_args(self, &call.arguments)?;
        ctx.writeln(&format!("{}({args});", func.name()))
    }

    fn visit_decl(&mut self, ctx: &mut CodegenContext<'_>, decl: &Decl) -> Result<(), CodegenError> {
        let (ty, initializer) = decl_initializer(decl.declared_type);
        self.var_types.insert(decl.variable.name.clone(), ty);
        let var = self.visit_identifier(&decl.variable);
        ctx.writeln(&format!("{} {var} = {initializer};", ty.as_str()))
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
                ctx.writeln(&format!("{var} += {value};"))
            }
        }
    }
}

#[cfg(test)]
mod tests;
