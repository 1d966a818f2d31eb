use expect_test::expect;
use text_size::TextSize;

use crate::SyntaxKind::*;
use crate::{
    AbsolutePosition, Builder, PrintOptions, RawNode, Syntax, SyntaxError, SyntaxKind, Trivia,
    TriviaPiece,
};

const SOURCE: &str = "// greeting\nfunc foo(a: Int) {\n    let x = 1\n    return x\n}\n";

fn indent() -> [TriviaPiece; 2] {
    [TriviaPiece::newlines(1), TriviaPiece::spaces(4)]
}

fn space() -> [TriviaPiece; 1] {
    [TriviaPiece::spaces(1)]
}

/// Builds the tree for [`SOURCE`] the way a parser would.
fn fixture() -> RawNode {
    let mut b = Builder::new();
    b.start_node(SOURCE_FILE);
    b.start_node(DECL_LIST);
    b.start_node(FUNC_DECL);
    b.token(
        [TriviaPiece::line_comment("// greeting"), TriviaPiece::newlines(1)],
        FUNC_KW,
        "func",
        space(),
    );
    b.token([], IDENTIFIER, "foo", []);
    b.start_node(PARAMETER_LIST);
    b.token([], LEFT_PAREN, "(", []);
    b.start_node(PARAMETER);
    b.token([], IDENTIFIER, "a", []);
    b.start_node(TYPE_ANNOTATION);
    b.token([], COLON, ":", space());
    b.start_node(SIMPLE_TYPE);
    b.token([], IDENTIFIER, "Int", []);
    b.finish_node();
    b.finish_node();
    b.finish_node();
    b.token([], RIGHT_PAREN, ")", space());
    b.finish_node();
    b.start_node(CODE_BLOCK);
    b.token([], LEFT_BRACE, "{", []);
    b.start_node(STMT_LIST);
    b.start_node(VARIABLE_DECL);
    b.token(indent(), LET_KW, "let", space());
    b.start_node(IDENTIFIER_PATTERN);
    b.token([], IDENTIFIER, "x", space());
    b.finish_node();
    b.token([], EQ, "=", space());
    b.start_node(INTEGER_LITERAL_EXPR);
    b.token([], INTEGER_LITERAL, "1", []);
    b.finish_node();
    b.finish_node();
    b.start_node(RETURN_STMT);
    b.token(indent(), RETURN_KW, "return", space());
    b.start_node(IDENTIFIER_EXPR);
    b.token([], IDENTIFIER, "x", []);
    b.finish_node();
    b.finish_node();
    b.finish_node();
    b.token([TriviaPiece::newlines(1)], RIGHT_BRACE, "}", []);
    b.finish_node();
    b.finish_node();
    b.finish_node();
    b.token([TriviaPiece::newlines(1)], EOF, "", []);
    b.finish_node();
    b.finish()
}

/// Follows logical child indices from the root.
fn at(root: &Syntax, path: &[usize]) -> Syntax {
    path.iter().fold(root.clone(), |node, &n| node.child(n).unwrap())
}

/// Finds the first token of `kind` whose text is `text`.
fn token(root: &Syntax, kind: SyntaxKind, text: &str) -> Syntax {
    root.preorder()
        .find_map(|event| match event {
            crate::WalkEvent::Token(t) if t.kind() == kind && t.raw().token_text() == text => {
                Some(t)
            }
            _ => None,
        })
        .unwrap_or_else(|| panic!("no {kind:?} {text:?} token"))
}

fn pos(offset: u32, line: u32, column: u32) -> AbsolutePosition {
    AbsolutePosition::new(TextSize::new(offset), line, column)
}

#[test]
fn prints_source_back() {
    let root = Syntax::new_root(fixture());

    assert_eq!(root.to_string(), SOURCE);
    assert_eq!(root.raw().text_len(), TextSize::of(SOURCE));
}

#[test]
fn logical_children_skip_tokens() {
    let root = Syntax::new_root(fixture());

    assert_eq!(root.num_children(), 1);
    let func = at(&root, &[0, 0]);
    assert_eq!(func.kind(), FUNC_DECL);
    assert_eq!(func.num_children(), 2);
    assert_eq!(func.raw().layout().len(), 4);

    let body = func.child(1).unwrap();
    assert_eq!(body.kind(), CODE_BLOCK);
    assert_eq!(body.index_in_parent(), Some(3));
    assert_eq!(
        func.child(2).unwrap_err(),
        SyntaxError::ChildIndexOutOfRange { index: 2, len: 2 }
    );

    let kinds = func.children().map(|child| child.kind()).collect::<Vec<_>>();
    assert_eq!(kinds, [PARAMETER_LIST, CODE_BLOCK]);
    let kinds = func.children_with_tokens().map(|child| child.kind()).collect::<Vec<_>>();
    assert_eq!(kinds, [FUNC_KW, IDENTIFIER, PARAMETER_LIST, CODE_BLOCK]);
}

#[test]
fn parent_round_trip() {
    let root = Syntax::new_root(fixture());
    let body = at(&root, &[0, 0, 1]);
    let stmts = body.child(0).unwrap();

    let parent = stmts.parent().unwrap();
    assert_eq!(parent, body);
    assert_eq!(parent.child(0).unwrap(), stmts);
    assert!(root.parent().is_none());
    assert!(root.is_root());

    let kinds = stmts.ancestors().map(|node| node.kind()).collect::<Vec<_>>();
    assert_eq!(kinds, [STMT_LIST, CODE_BLOCK, FUNC_DECL, DECL_LIST, SOURCE_FILE]);
    assert_eq!(stmts.root(), root);
}

#[test]
fn equality_is_positional() {
    let raw = fixture();
    let root = Syntax::new_root(raw.clone());
    let other_root = Syntax::new_root(raw);

    assert_eq!(at(&root, &[0, 0, 1, 0]), at(&root, &[0, 0, 1, 0]));
    assert_ne!(at(&root, &[0, 0, 1, 0, 0]), at(&root, &[0, 0, 1, 0, 1]));
    assert_ne!(at(&root, &[0, 0]), at(&other_root, &[0, 0]));
}

#[test]
fn classification() {
    let root = Syntax::new_root(fixture());
    let func = at(&root, &[0, 0]);
    let stmts = at(&root, &[0, 0, 1, 0]);
    let let_decl = stmts.child(0).unwrap();
    let ret = stmts.child(1).unwrap();

    assert!(func.is_decl() && !func.is_stmt() && !func.is_token());
    assert!(let_decl.is_decl());
    assert!(ret.is_stmt());
    assert!(ret.child(0).unwrap().is_expr());
    assert!(let_decl.child(0).unwrap().is_pattern());
    assert!(at(&root, &[0, 0, 0, 0, 0, 0]).is_type());
    assert!(!root.is_unknown());

    let name = token(&root, IDENTIFIER, "foo");
    assert!(name.is_token() && name.is_present());
    assert!(!(name.is_decl() || name.is_expr() || name.is_unknown()));
}

#[test]
fn token_positions() {
    let root = Syntax::new_root(fixture());
    let cases = [
        (FUNC_KW, "func", pos(12, 1, 0)),
        (IDENTIFIER, "foo", pos(17, 1, 5)),
        (IDENTIFIER, "Int", pos(24, 1, 12)),
        (LEFT_BRACE, "{", pos(29, 1, 17)),
        (LET_KW, "let", pos(35, 2, 4)),
        (INTEGER_LITERAL, "1", pos(43, 2, 12)),
        (RETURN_KW, "return", pos(49, 3, 4)),
        (RIGHT_BRACE, "}", pos(58, 4, 0)),
        (EOF, "", pos(60, 5, 0)),
    ];

    for (kind, text, expected) in cases {
        let token = token(&root, kind, text);
        assert_eq!(token.absolute_position(&root).unwrap(), expected, "{kind:?} {text:?}");
    }
}

#[test]
fn node_positions_skip_leading_trivia() {
    let root = Syntax::new_root(fixture());

    assert_eq!(root.absolute_position(&root).unwrap(), pos(12, 1, 0));
    assert_eq!(at(&root, &[0, 0]).absolute_position(&root).unwrap(), pos(12, 1, 0));
    assert_eq!(at(&root, &[0, 0, 0]).absolute_position(&root).unwrap(), pos(20, 1, 8));
    assert_eq!(at(&root, &[0, 0, 1, 0]).absolute_position(&root).unwrap(), pos(35, 2, 4));
    assert_eq!(at(&root, &[0, 0, 1, 0, 1]).absolute_position(&root).unwrap(), pos(49, 3, 4));
}

#[test]
fn end_positions_exclude_trailing_trivia() {
    let root = Syntax::new_root(fixture());
    let func = at(&root, &[0, 0]);
    let let_decl = at(&root, &[0, 0, 1, 0, 0]);
    let params = func.child(0).unwrap();

    assert_eq!(func.absolute_end_position(&root).unwrap(), pos(59, 4, 1));
    assert_eq!(let_decl.absolute_end_position(&root).unwrap(), pos(44, 2, 13));
    assert_eq!(params.absolute_end_position(&root).unwrap(), pos(28, 1, 16));
}

#[test]
fn position_against_foreign_root_fails() {
    let root = Syntax::new_root(fixture());
    let unrelated = Syntax::new_root(fixture());
    let func = at(&root, &[0, 0]);

    assert_eq!(
        func.absolute_position(&unrelated).unwrap_err(),
        SyntaxError::NodeNotInRoot { kind: FUNC_DECL }
    );
}

#[test]
fn position_in_a_subtree_root() {
    let root = Syntax::new_root(fixture());
    let body = at(&root, &[0, 0, 1]);
    let ret = at(&root, &[0, 0, 1, 0, 1]);

    // Offsets count from the start of the block's text.
    assert_eq!(ret.absolute_position(&body).unwrap(), pos(20, 2, 4));
}

#[test]
fn shared_subtree_across_versions() {
    let old_raw = fixture();
    let old = Syntax::new_root(old_raw.clone());
    let func = at(&old, &[0, 0]);

    let renamed = RawNode::token(Trivia::empty(), IDENTIFIER, "greet", Trivia::empty());
    let new_func = func.raw().replace_child(1, renamed).unwrap();
    let new_decls = old_raw.layout()[0].replace_child(0, new_func).unwrap();
    let new_raw = old_raw.replace_child(0, new_decls).unwrap();
    let new = Syntax::new_root(new_raw);

    let old_body = at(&old, &[0, 0, 1]);
    let new_body = at(&new, &[0, 0, 1]);
    assert!(old_body.raw().ptr_eq(new_body.raw()));
    assert!(new.raw().layout()[1].ptr_eq(&old.raw().layout()[1]));

    assert_eq!(old_body.absolute_position(&old).unwrap(), pos(29, 1, 17));
    assert_eq!(new_body.absolute_position(&new).unwrap(), pos(31, 1, 19));
    assert!(new.to_string().starts_with("// greeting\nfunc greet(a: Int) {"));

    // A handle from the old version resolves by identity against the new root.
    assert_eq!(old_body.absolute_position(&new).unwrap(), pos(31, 1, 19));
}

#[test]
fn repeated_subtree_resolves_each_occurrence() {
    let int =
        RawNode::token(Trivia::new([TriviaPiece::spaces(1)]), IDENTIFIER, "Int", Trivia::empty());
    let shared = RawNode::node(SIMPLE_TYPE, [int]);

    let mut b = Builder::new();
    b.start_node(TUPLE_TYPE);
    b.subtree(shared.clone());
    b.subtree(shared);
    b.finish_node();
    let root = Syntax::new_root(b.finish());
    assert_eq!(root.to_string(), " Int Int");

    let first = root.child(0).unwrap();
    let second = root.child(1).unwrap();
    assert!(first.raw().ptr_eq(second.raw()));
    assert_ne!(first, second);

    assert_eq!(first.absolute_position(&root).unwrap(), pos(1, 0, 1));
    assert_eq!(second.absolute_position(&root).unwrap(), pos(5, 0, 5));
    assert_eq!(second.absolute_end_position(&root).unwrap(), pos(8, 0, 8));

    let second_token = second.child_with_tokens(0).unwrap();
    assert_eq!(second_token.absolute_position(&root).unwrap(), pos(5, 0, 5));
}

#[test]
fn print_with_options() {
    let root = Syntax::new_root(fixture());
    let ret = at(&root, &[0, 0, 1, 0, 1]);

    let mut out = String::new();
    ret.print(&mut out, PrintOptions { print_syntax_kind: true, ..Default::default() }).unwrap();
    assert_eq!(out, "<RETURN_STMT>\n    return <IDENTIFIER_EXPR>x</IDENTIFIER_EXPR></RETURN_STMT>");
}

#[test]
fn dump_subtree() {
    let root = Syntax::new_root(fixture());
    let params = at(&root, &[0, 0, 0]);

    expect![[r#"
        PARAMETER_LIST
          LEFT_PAREN "("
          PARAMETER
            IDENTIFIER "a"
            TYPE_ANNOTATION
              COLON ":" trailing: [Space(" ")]
              SIMPLE_TYPE
                IDENTIFIER "Int"
          RIGHT_PAREN ")" trailing: [Space(" ")]
    "#]]
    .assert_eq(&params.dump_string());
}
