use sprig_syntax::SyntaxKind::*;
use sprig_syntax::{Builder, RawNode, TriviaPiece};

/// Builds a file of `funcs` functions with `stmts` statements each.
pub fn synthetic_file(funcs: usize, stmts: usize) -> RawNode {
    let mut b = Builder::new();
    b.start_node(SOURCE_FILE);
    b.start_node(DECL_LIST);
    for func in 0..funcs {
        b.start_node(FUNC_DECL);
        b.token([TriviaPiece::newlines(2)], FUNC_KW, "func", [TriviaPiece::spaces(1)]);
        b.token([], IDENTIFIER, &format!("f{func}"), []);
        b.start_node(PARAMETER_LIST);
        b.token([], LEFT_PAREN, "(", []);
        b.token([], RIGHT_PAREN, ")", [TriviaPiece::spaces(1)]);
        b.finish_node();
        b.start_node(CODE_BLOCK);
        b.token([], LEFT_BRACE, "{", []);
        b.start_node(STMT_LIST);
        for stmt in 0..stmts {
            b.start_node(VARIABLE_DECL);
            b.token(
                [TriviaPiece::newlines(1), TriviaPiece::spaces(4)],
                LET_KW,
                "let",
                [TriviaPiece::spaces(1)],
            );
            b.start_node(IDENTIFIER_PATTERN);
            b.token([], IDENTIFIER, &format!("x{stmt}"), [TriviaPiece::spaces(1)]);
            b.finish_node();
            b.token([], EQ, "=", [TriviaPiece::spaces(1)]);
            b.start_node(INTEGER_LITERAL_EXPR);
            b.token([], INTEGER_LITERAL, &stmt.to_string(), []);
            b.finish_node();
            b.finish_node();
        }
        b.finish_node();
        b.token([TriviaPiece::newlines(1)], RIGHT_BRACE, "}", []);
        b.finish_node();
        b.finish_node();
    }
    b.finish_node();
    b.token([TriviaPiece::newlines(1)], EOF, "", []);
    b.finish_node();
    b.finish()
}
