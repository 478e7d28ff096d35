use tacc::{
    BinOp, Compilation, CompileError, Compiler, ErrorKind, Expr, Handler, SemanticError, Stmt,
    TokenKind, Ty, Value,
};

use std::sync::Once;

/// Setup function that is only run once, even if called multiple times.
fn setup() {
    static INIT: Once = Once::new();
    INIT.call_once(|| env_logger::init());
}

fn run_ok(src: &str) -> Compilation {
    setup();
    let src = String::from(src);
    let mut c = Compiler::new();
    c.run(src).unwrap()
}

fn run_err(src: &str) -> CompileError {
    setup();
    let src = String::from(src);
    let mut c = Compiler::new();
    c.run(src).unwrap_err()
}

fn symbols(out: &Compilation) -> Vec<(String, Ty, Value)> {
    out.symbols
        .entries()
        .map(|(name, ty, value)| (name.to_string(), ty, value.clone()))
        .collect()
}

#[test]
fn end_to_end() {
    let out = run_ok("int a = 3; int b = a + 2; print b;");

    assert_eq!(out.tokens.len(), 15);
    assert_eq!(out.program.stmts.len(), 3);
    assert_eq!(
        symbols(&out),
        vec![
            ("a".into(), Ty::Int, Value::Literal("3".into())),
            ("b".into(), Ty::Int, Value::Composed("3 + 2".into())),
        ]
    );
    assert_eq!(out.code_lines(), vec!["a = 3", "t0 = a + 2", "b = t0", "PRINT b"]);
}

#[test]
fn multi_line_program() {
    let out = run_ok(
        r#"
        int count = 10;
        float rate;
        rate = 0.5;
        float total = count * rate + 1.25;
        print total;
    "#,
    );

    assert_eq!(out.program.stmts.len(), 5);
    assert_eq!(
        out.code_lines(),
        vec![
            "count = 10",
            "DECLARE rate as float",
            "rate = 0.5",
            "t0 = count * rate",
            "t1 = t0 + 1.25",
            "total = t1",
            "PRINT total",
        ]
    );
    assert_eq!(
        out.symbols.get("total").unwrap().value,
        Value::Composed("10 * 0.5 + 1.25".into())
    );
}

#[test]
fn statement_count_matches_terminators() {
    let src = "int a; float b = 2.0; a = b / 2; print a; a = a - 1 - 1; print b;";
    let out = run_ok(src);
    assert_eq!(out.program.stmts.len(), src.matches(';').count());
}

#[test]
fn left_assoc_and_precedence() {
    let out = run_ok("int a = 1; int b = 2; int c = 3; a = a - b - c; a = a + b * c;");
    assert_eq!(
        out.program.stmts[3],
        Stmt::Assignment {
            name: "a".into(),
            value: Expr::binary(
                BinOp::Sub,
                Expr::binary(BinOp::Sub, Expr::ident("a"), Expr::ident("b")),
                Expr::ident("c"),
            ),
        }
    );
    assert_eq!(
        out.program.stmts[4],
        Stmt::Assignment {
            name: "a".into(),
            value: Expr::binary(
                BinOp::Add,
                Expr::ident("a"),
                Expr::binary(BinOp::Mul, Expr::ident("b"), Expr::ident("c")),
            ),
        }
    );
}

#[test]
fn temp_numbering() {
    let out = run_ok("int x = 1 + 2 * 3;");
    assert_eq!(out.code_lines(), vec!["t0 = 2 * 3", "t1 = 1 + t0", "x = t1"]);
}

#[test]
fn declaration_without_init() {
    let out = run_ok("float y;");
    assert_eq!(out.code_lines(), vec!["DECLARE y as float"]);
    assert_eq!(symbols(&out), vec![("y".into(), Ty::Float, Value::Uninitialized)]);
}

#[test]
fn unknown_chars_are_skipped() {
    let out = run_ok("int a = 1 @ ; print a;$");
    assert!(out.tokens.iter().all(|t| !t.text.contains('@')));
    assert_eq!(out.tokens.len(), 8);
    assert_eq!(out.code_lines(), vec!["a = 1", "PRINT a"]);
}

#[test]
fn empty_source() {
    let out = run_ok("");
    assert!(out.tokens.is_empty());
    assert!(out.program.stmts.is_empty());
    assert!(out.code.is_empty());
    assert!(out.symbols.is_empty());
}

#[test]
fn token_kinds() {
    let out = run_ok("float f = 1.5 / 3;");
    let kinds: Vec<_> = out.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::FloatNumber,
            TokenKind::Operator,
            TokenKind::Number,
            TokenKind::Separator,
        ]
    );
}

#[test]
fn int_accepts_float_initializer() {
    let out = run_ok("int x = 1.5;");
    assert_eq!(out.symbols.get("x").unwrap().ty, Ty::Int);
    assert_eq!(out.code_lines(), vec!["x = 1.5"]);
}

#[test]
fn redeclaration() {
    let e = run_err("int x; int x;");
    assert_eq!(e.kind(), ErrorKind::AlreadyDeclared);
    assert_eq!(e, CompileError::Semantic(SemanticError::AlreadyDeclared("x".into())));
}

#[test]
fn use_before_declare() {
    let e = run_err("x = 5;");
    assert_eq!(e.kind(), ErrorKind::Undeclared);
    match e {
        CompileError::Semantic(e) => assert_eq!(e.name(), "x"),
        e => panic!("unexpected error {:?}", e),
    }
}

#[test]
fn print_undeclared() {
    assert_eq!(run_err("int a; print b;").kind(), ErrorKind::Undeclared);
}

#[test]
fn uninitialized_operand() {
    let e = run_err("int x; int y = x + 1;");
    assert_eq!(e.kind(), ErrorKind::UninitializedOperand);
}

#[test]
fn syntax_error_stops_pipeline() {
    let e = run_err("int a = 1;\nint b = 2\nprint a;");
    assert_eq!(e.kind(), ErrorKind::Syntax);
    assert_eq!(e.line(), Some(3));
    match &e {
        CompileError::Syntax(s) => {
            assert_eq!(s.pos, 9);
            assert_eq!(s.found.as_ref().unwrap().text, "print");
        }
        e => panic!("unexpected error {:?}", e),
    }
}

#[test]
fn syntax_errors() {
    for src in &[
        "int;",
        "int a = ;",
        "a + 1;",
        "print 5;",
        "x = y",
        "float f = (1);",
        "int a = 1 2;",
        "= 3;",
    ] {
        assert_eq!(run_err(src).kind(), ErrorKind::Syntax, "{}", src);
    }
}

#[test]
fn error_has_source() {
    use std::error::Error;

    let e = run_err("print q;");
    let source = e.source().unwrap();
    assert_eq!(source.to_string(), "Variable 'q' is not declared.");
}

#[test]
fn handler_renders_line() {
    let src = "int a;\nfloat = 2;";
    let e = run_err(src);
    assert_eq!(
        Handler::new(src).render(&e),
        "SyntaxError: Syntax error: Expect variable name. Found ASSIGNMENT '=' at token 4.\n   2 | float = 2;"
    );
}

#[test]
fn runs_do_not_share_state() {
    setup();
    let mut c = Compiler::new();
    let first = c.run("int x = 1 + 2;".into()).unwrap();
    let second = c.run("int x = 3 * 4;".into()).unwrap();
    assert_eq!(first.code_lines(), vec!["t0 = 1 + 2", "x = t0"]);
    assert_eq!(second.code_lines(), vec!["t0 = 3 * 4", "x = t0"]);
    assert_eq!(second.symbols.len(), 1);
}

#[test]
fn ast_rendering() {
    let out = run_ok("int a = 1 + 1 * 2; print a;");
    assert_eq!(
        out.program.to_string(),
        "Program\n  Declaration: int a\n    BinaryOp: +\n      Number: 1\n      BinaryOp: *\n        Number: 1\n        Number: 2\n  Print: a\n"
    );
}

#[test]
fn symbol_table_rendering() {
    let out = run_ok("int a = 2; float b; a = a / 2;");
    assert_eq!(out.symbols.to_string(), "a: int = 2 / 2\nb: float = <uninitialized>\n");
}
