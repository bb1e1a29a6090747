//! Snapshot tests for analyzed forms
//!
//! Each test reads source text, analyzes it, and snapshots the `Display` rendering of the resulting nodes (or of the
//! errors). Snapshots are inline so the expected s-expression sits next to its input.
//!
//! Review changes: `cargo insta review`

use gosp::parse_str;

fn render(source: &str) -> String {
    let nodes = parse_str("snapshot", source).unwrap_or_else(|errors| panic!("{source}: {errors:?}"));
    nodes.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

fn render_errors(source: &str) -> String {
    let options = gosp::ParseOptions::new().with_batch(gosp::BatchPolicy::Collect);
    let errors = gosp::parse_str_with("snapshot", source, &options).expect_err(source);
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

#[test]
fn test_definitions() {
    insta::assert_snapshot!(render(r#"
        (define answer 42)
        (define (f x . rest) (apply g x rest))
        (define ((adder n) x) (+ n x))
        (define (thunk) (display "hi") 'done)
    "#), @r#"
    (define answer 42)
    (define f (lambda (x . rest) (apply g x rest)))
    (define adder (lambda (n) (lambda (x) (+ n x))))
    (define thunk (lambda () (display "hi") 'done))
    "#);
}

#[test]
fn test_binding_forms() {
    insta::assert_snapshot!(render(r#"
        (let ((x 1) (y 2)) (+ x y))
        (let* [(x 1) (y x)] y)
        (letrec ((loop (lambda (n) (if (= n 0) 'done (loop (- n 1)))))) (loop 10))
        (set! counter (+ counter 1))
    "#), @r"
    (let ((x 1) (y 2)) (+ x y))
    (let* ((x 1) (y x)) y)
    (letrec ((loop (lambda (n) (if (= n 0) 'done (loop (- n 1)))))) (loop 10))
    (set! counter (+ counter 1))
    ");
}

#[test]
fn test_quoted_data() {
    insta::assert_snapshot!(render(r#"
        '(1 2.5 "s\n" #t . x)
        '()
        (quote (a (b c) . d))
        '(quote x)
    "#), @r#"
    '(1 2.5 "s\n" #t . x)
    '()
    '(a (b c) . d)
    '(quote x)
    "#);
}

#[test]
fn test_quasiquote_levels() {
    insta::assert_snapshot!(render(r"
        `(1 ,(+ 1 1) ,@(list 3 4))
        `(a `(b ,(c ,d)))
        `(x . ,tail)
        `(a ,`(b ,c))
    "), @r"
    `(1 ,(+ 1 1) ,@(list 3 4))
    `(a (quasiquote (b (unquote (c ,d)))))
    `(x . ,tail)
    `(a ,`(b ,c))
    ");
}

#[test]
fn test_concurrency_and_promises() {
    insta::assert_snapshot!(render(r"
        (go (worker jobs results))
        (select ((chan-recv ch) 'got) ((chan-send out 1) 'sent) (default 'idle))
        (force (delay (expensive)))
    "), @r"
    (go (worker jobs results))
    (select ((chan-recv ch) 'got) ((chan-send out 1) 'sent) (default 'idle))
    (force (delay (expensive)))
    ");
}

#[test]
fn test_error_messages() {
    insta::assert_snapshot!(render_errors(r"
        (if 1)
        (define x 1 2)
        (lambda (. x) x)
        (let ((x)) x)
        ,oops
        (select (foo))
        (select ((chan-send ch)))
        ()
        (1 2)
    "), @r"
    if: bad syntax, expected 2 or 3 parts, given 1, in: (if 1)
    define: bad syntax (multiple expressions after identifier), in: (define x 1 2)
    lambda: illegal use of `.`, in: (. x)
    let: bad syntax (not an identifier and expression for a binding), in: (x)
    unquote: not in quasiquote, in: (unquote oops)
    select: bad syntax, in: (foo)
    chan-send: arguments mismatch, expected 2, given 1, in: ((chan-send ch))
    application: missing procedure expression, in: ()
    application: not a procedure, in: (1 2)
    ");
}
