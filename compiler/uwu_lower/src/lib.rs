//! Semantic pass.
//!
//! Turns each flat list of the parsed tree into a typed IR [`Node`] by
//! looking its leading name up in the [`keywords`] tables. Leaves are cloned
//! into the new tree, so the output shares nothing with its input.

mod error;
pub mod keywords;

use tracing::{debug, instrument};
use uwu_ir::{Call, Decl, Expr, ExtendedStatement, Node, TList, TreeRoot};

pub use error::LowerError;
use keywords::Keyword;

/// Lower a parsed tree into IR, preserving line order.
///
/// # Errors
///
/// Returns the first line that cannot become a call, declaration or
/// extended statement.
#[instrument(level = "debug", skip_all, fields(lines = tree.len()))]
pub fn lower(tree: &TreeRoot<TList>) -> Result<TreeRoot<Node>, LowerError> {
    let children = tree.iter().map(lower_list).collect::<Result<Vec<_>, _>>()?;
    Ok(TreeRoot::new(children))
}

/// Lower a single flat list.
///
/// # Errors
///
/// See [`LowerError`] for the individual cases.
pub fn lower_list(list: &TList) -> Result<Node, LowerError> {
    let (head, rest) = list.split_first().ok_or(LowerError::EmptyList)?;

    let Some(keyword) = head.as_identifier() else {
        return Err(LowerError::NotAnIdentifier {
            found: head.describe(),
            position: head.position(),
        });
    };

    let node = match keywords::lookup(&keyword.name) {
        Some(Keyword::Call) => Node::Call(Call {
            callee: keyword.clone(),
            arguments: rest.to_vec(),
        }),
        Some(Keyword::Decl(declared_type)) => {
            let [target] = rest else {
                return Err(LowerError::DeclarationArity {
                    found: rest.len(),
                    position: keyword.position,
                });
            };
            let Expr::Identifier(variable) = target else {
                return Err(LowerError::DeclarationTarget {
                    found: target.describe(),
                    position: target.position(),
                });
            };
            Node::Decl(Decl {
                declared_type,
                variable: variable.clone(),
            })
        }
        Some(Keyword::Stx(name)) => Node::Stx(ExtendedStatement {
            name,
            arguments: rest.to_vec(),
            position: keyword.position,
        }),
        None => {
            return Err(LowerError::UnknownKeyword {
                name: keyword.name.clone(),
                position: keyword.position,
            });
        }
    };

    debug!(keyword = %keyword.name, position = %keyword.position, "lowered line");
    Ok(node)
}

#[cfg(test)]
mod tests;
