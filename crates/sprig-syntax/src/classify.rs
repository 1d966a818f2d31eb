//! Kind-keyed classification table.
//!
//! Every kind falls into exactly one [`SyntaxCategory`]. The `UNKNOWN_*` recovery
//! kinds additionally answer `true` to [`SyntaxKind::is_unknown`].

use crate::SyntaxKind::{self, *};
use crate::SyntaxSet;

/// Primary classification bucket of a kind.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntaxCategory {
    Decl,
    Expr,
    Stmt,
    Type,
    Pattern,
    Other,
}

const DECLS: SyntaxSet = SyntaxSet::new([FUNC_DECL, VARIABLE_DECL, STRUCT_DECL, UNKNOWN_DECL]);

const STMTS: SyntaxSet =
    SyntaxSet::new([EXPR_STMT, RETURN_STMT, IF_STMT, WHILE_STMT, UNKNOWN_STMT]);

const EXPRS: SyntaxSet = SyntaxSet::new([
    INTEGER_LITERAL_EXPR,
    STRING_LITERAL_EXPR,
    IDENTIFIER_EXPR,
    BINARY_EXPR,
    CALL_EXPR,
    PAREN_EXPR,
    UNKNOWN_EXPR,
]);

const TYPES: SyntaxSet = SyntaxSet::new([SIMPLE_TYPE, FUNCTION_TYPE, TUPLE_TYPE, UNKNOWN_TYPE]);

const PATTERNS: SyntaxSet =
    SyntaxSet::new([IDENTIFIER_PATTERN, TUPLE_PATTERN, WILDCARD_PATTERN, UNKNOWN_PATTERN]);

const UNKNOWNS: SyntaxSet = SyntaxSet::new([
    UNKNOWN_DECL,
    UNKNOWN_STMT,
    UNKNOWN_EXPR,
    UNKNOWN_TYPE,
    UNKNOWN_PATTERN,
    UNKNOWN_TOKEN,
    UNKNOWN,
]);

/// Collections whose markers carry no structure of their own when printed.
const TRIVIAL: SyntaxSet = SyntaxSet::new([PARAMETER_LIST, ARGUMENT_LIST, DECL_LIST, STMT_LIST]);

impl SyntaxKind {
    pub const fn category(self) -> SyntaxCategory {
        if DECLS.contains(self) {
            SyntaxCategory::Decl
        } else if STMTS.contains(self) {
            SyntaxCategory::Stmt
        } else if EXPRS.contains(self) {
            SyntaxCategory::Expr
        } else if TYPES.contains(self) {
            SyntaxCategory::Type
        } else if PATTERNS.contains(self) {
            SyntaxCategory::Pattern
        } else {
            SyntaxCategory::Other
        }
    }

    pub const fn is_decl(self) -> bool {
        DECLS.contains(self)
    }

    pub const fn is_stmt(self) -> bool {
        STMTS.contains(self)
    }

    pub const fn is_expr(self) -> bool {
        EXPRS.contains(self)
    }

    pub const fn is_type(self) -> bool {
        TYPES.contains(self)
    }

    pub const fn is_pattern(self) -> bool {
        PATTERNS.contains(self)
    }

    /// Recovery kinds; overlaps the primary bucket of `UNKNOWN_DECL` and friends.
    pub const fn is_unknown(self) -> bool {
        UNKNOWNS.contains(self)
    }

    /// Kinds elided from kind-annotated printing unless explicitly requested.
    pub const fn is_trivial(self) -> bool {
        TRIVIAL.contains(self)
    }
}
