//! The visitor every backend implements.

use std::fmt;

use tracing::debug;
use uwu_ir::{Call, Decl, Expr, ExtendedStatement, Identifier, Node, NumberLiteral, TreeRoot};

use crate::{sanitize, CodegenContext, CodegenError};

/// A code generator for one target language.
///
/// Statement visitors write whole lines through the context; expression
/// visitors return the target text of a leaf. [`Node`] is closed, so
/// [`visit_node`](Self::visit_node) dispatches exhaustively and every node
/// kind is guaranteed a rule.
pub trait Backend {
    /// Lines written before the first statement.
    fn prologue(&mut self, _ctx: &mut CodegenContext<'_>) -> Result<(), CodegenError> {
        Ok(())
    }

    /// Lines written after the last statement.
    fn epilogue(&mut self, _ctx: &mut CodegenContext<'_>) -> Result<(), CodegenError> {
        Ok(())
    }

    fn visit_call(&mut self, ctx: &mut CodegenContext<'_>, call: &Call) -> Result<(), CodegenError>;

    fn visit_decl(&mut self, ctx: &mut CodegenContext<'_>, decl: &Decl) -> Result<(), CodegenError>;

    fn visit_stx(
        &mut self,
        ctx: &mut CodegenContext<'_>,
        stx: &ExtendedStatement,
    ) -> Result<(), CodegenError>;

    /// Shortest decimal form: `2`, `1.5`.
    fn visit_number(&mut self, number: &NumberLiteral) -> String {
        number.to_string()
    }

    fn visit_identifier(&mut self, identifier: &Identifier) -> String {
        sanitize(&identifier.name)
    }

    fn visit_expr(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Identifier(identifier) => self.visit_identifier(identifier),
            Expr::Number(number) => self.visit_number(number),
        }
    }

    fn visit_node(&mut self, ctx: &mut CodegenContext<'_>, node: &Node) -> Result<(), CodegenError> {
        match node {
            Node::Call(call) => self.visit_call(ctx, call),
            Node::Decl(decl) => self.visit_decl(ctx, decl),
            Node::Stx(stx) => self.visit_stx(ctx, stx),
        }
    }

    /// Visit every top-level node in order.
    fn visit_root(
        &mut self,
        ctx: &mut CodegenContext<'_>,
        root: &TreeRoot<Node>,
    ) -> Result<(), CodegenError> {
        for node in root {
            self.visit_node(ctx, node)?;
        }
        Ok(())
    }

    /// Emit a complete translation unit into `out`.
    ///
    /// Output already written when an error occurs is left in `out`.
    fn compile(&mut self, root: &TreeRoot<Node>, out: &mut dyn fmt::Write) -> Result<(), CodegenError> {
        let mut ctx = CodegenContext::new(out);
        self.prologue(&mut ctx)?;
        self.visit_root(&mut ctx, root)?;
        self.epilogue(&mut ctx)?;
        debug!(nodes = root.len(), lines = ctx.lines(), "compiled unit");
        Ok(())
    }
}

/// Operands of an accumulate statement: the target name and the value.
///
/// # Errors
///
/// Fails unless there are exactly two arguments and the first is an
/// identifier.
pub fn accumulate_operands(stx: &ExtendedStatement) -> Result<(&Identifier, &Expr), CodegenError> {
    let [target, value] = stx.arguments.as_slice() else {
        return Err(CodegenError::StatementArity {
            name: stx.name,
            expected: stx.name.arity(),
            found: stx.arguments.len(),
            position: stx.position,
        });
    };
    let Expr::Identifier(target) = target else {
        return Err(CodegenError::StatementTarget {
            name: stx.name,
            found: target.describe(),
            position: target.position(),
        });
    };
    Ok((target, value))
}
