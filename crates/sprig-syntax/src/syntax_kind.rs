#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACKET,
    RIGHT_BRACKET,
    LEFT_BRACE,
    RIGHT_BRACE,
    COMMA,
    COLON,
    SEMICOLON,
    EQ,
    DOT,
    ARROW,
    UNDERSCORE,

    FUNC_KW,
    LET_KW,
    VAR_KW,
    STRUCT_KW,
    IF_KW,
    ELSE_KW,
    WHILE_KW,
    RETURN_KW,

    IDENTIFIER,
    INTEGER_LITERAL,
    STRING_LITERAL,
    OPERATOR,

    UNKNOWN_TOKEN,
    EOF,

    SOURCE_FILE,
    CODE_BLOCK,

    FUNC_DECL,
    VARIABLE_DECL,
    STRUCT_DECL,
    UNKNOWN_DECL,

    EXPR_STMT,
    RETURN_STMT,
    IF_STMT,
    WHILE_STMT,
    UNKNOWN_STMT,

    INTEGER_LITERAL_EXPR,
    STRING_LITERAL_EXPR,
    IDENTIFIER_EXPR,
    BINARY_EXPR,
    CALL_EXPR,
    PAREN_EXPR,
    UNKNOWN_EXPR,

    SIMPLE_TYPE,
    FUNCTION_TYPE,
    TUPLE_TYPE,
    UNKNOWN_TYPE,

    IDENTIFIER_PATTERN,
    TUPLE_PATTERN,
    WILDCARD_PATTERN,
    UNKNOWN_PATTERN,

    PARAMETER,
    TYPE_ANNOTATION,
    PARAMETER_LIST,
    ARGUMENT_LIST,
    DECL_LIST,
    STMT_LIST,

    UNKNOWN,
}
