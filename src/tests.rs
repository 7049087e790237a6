/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Crate unit tests.

use super::*;
use crate::parser::combinator::{
    item, keyword, literal, never, not_followed_by, pure, recognize, repeat, repeat1, satisfy,
};

fn c(value: i64) -> Expression {
    Expression::constant(value)
}

fn v(name: char) -> Expression {
    Expression::variable(name)
}

fn first_caret_column(pointer: &str) -> Option<usize> {
    pointer.chars().position(|ch| ch == '^').map(|idx| idx + 1)
}

fn expr(text: &str) -> Expression {
    parse_expression(text).unwrap_or_else(|err| panic!("failed to parse '{text}': {err}"))
}

fn constraint(text: &str) -> Constraint {
    parse_constraint(text).unwrap_or_else(|err| panic!("failed to parse '{text}': {err}"))
}

fn eval(text: &str) -> i64 {
    expr(text)
        .evaluate(&Assignment::new())
        .expect("constant expression should evaluate")
}

// --- combinator engine ---

#[test]
fn item_consumes_one_character() {
    let (c, rest) = item().parse(Span::new("ab")).expect("item");
    assert_eq!(c, 'a');
    assert_eq!(*rest.fragment(), "b");
    assert_eq!(rest.location_offset(), 1);
    assert!(item().parse(Span::new("")).is_none());
}

#[test]
fn pure_and_never_consume_nothing() {
    let (value, rest) = pure(7).parse(Span::new("xy")).expect("pure");
    assert_eq!(value, 7);
    assert_eq!(*rest.fragment(), "xy");
    assert!(never::<()>().parse(Span::new("xy")).is_none());
}

#[test]
fn predicate_fails_on_empty_input_or_rejected_head() {
    let digit = satisfy(|c| c.is_ascii_digit());
    assert_eq!(digit.parse(Span::new("7x")).map(|(c, _)| c), Some('7'));
    assert!(digit.parse(Span::new("x7")).is_none());
    assert!(digit.parse(Span::new("")).is_none());
}

#[test]
fn literal_matches_case_sensitive_keywords() {
    let solve = literal("Solve");
    let (matched, rest) = solve.parse(Span::new("Solve x = 1")).expect("literal");
    assert_eq!(*matched.fragment(), "Solve");
    assert_eq!(*rest.fragment(), " x = 1");
    assert!(solve.parse(Span::new("solve x = 1")).is_none());
    assert!(solve.parse(Span::new("Solv")).is_none());
}

#[test]
fn keyword_requires_a_word_boundary() {
    let and = keyword("and");
    assert!(and.matches(Span::new("and y > 0")));
    assert!(and.matches(Span::new("and")));
    assert!(!and.matches(Span::new("andy > 0")));
}

#[test]
fn lookahead_consumes_nothing() {
    let not_digit = not_followed_by(|c| c.is_ascii_digit());
    let (_, rest) = not_digit.parse(Span::new("x1")).expect("letter ahead");
    assert_eq!(*rest.fragment(), "x1");
    assert!(not_digit.parse(Span::new("1x")).is_none());
    assert!(not_digit.matches(Span::new("")));
}

#[test]
fn bind_runs_continuation_on_remainder() {
    let pair = item().bind(|first| item().map(move |second| format!("{first}{second}")));
    let (value, rest) = pair.parse(Span::new("xyz")).expect("pair");
    assert_eq!(value, "xy");
    assert_eq!(*rest.fragment(), "z");
    assert!(pair.parse(Span::new("x")).is_none());
}

#[test]
fn alternative_falls_back_on_direct_failure() {
    let choice = literal("ab").then(literal("x")).or(literal("abc"));
    let (matched, rest) = choice.parse(Span::new("abc")).expect("fallback");
    assert_eq!(*matched.fragment(), "abc");
    assert_eq!(*rest.fragment(), "");
}

#[test]
fn alternative_does_not_retry_after_a_later_stage_fails() {
    // `a` wins the choice, then `c` fails against `bc`; `ab` is never tried.
    let committed = literal("a").or(literal("ab")).then(literal("c"));
    assert!(committed.parse(Span::new("abc")).is_none());
}

#[test]
fn repeat_collects_greedily_and_accepts_zero_matches() {
    let digits = repeat(satisfy(|c| c.is_ascii_digit()));
    let (found, rest) = digits.parse(Span::new("123x")).expect("digits");
    assert_eq!(found, vec!['1', '2', '3']);
    assert_eq!(*rest.fragment(), "x");

    let (none, rest) = digits.parse(Span::new("x1")).expect("zero matches");
    assert!(none.is_empty());
    assert_eq!(*rest.fragment(), "x1");
}

#[test]
fn repeat_rejects_parsers_that_consume_nothing() {
    assert!(repeat(pure('a')).parse(Span::new("abc")).is_none());
    assert!(repeat(not_followed_by(|c| c == 'z')).parse(Span::new("abc")).is_none());
}

#[test]
fn repeat1_and_recognize_yield_the_consumed_slice() {
    let number = recognize(repeat1(satisfy(|c| c.is_ascii_digit())));
    let (digits, rest) = number.parse(Span::new("042+1")).expect("number");
    assert_eq!(*digits.fragment(), "042");
    assert_eq!(*rest.fragment(), "+1");
    assert!(number.parse(Span::new("+1")).is_none());
}

// --- normalizer ---

#[test]
fn normalize_inserts_implicit_multiplication() {
    assert_eq!(normalize("2x+3(y)"), "2*x+3*(y)");
    assert_eq!(normalize("(a+1)b"), "(a+1)*b");
    assert_eq!(normalize("(a)(b)"), "(a)*(b)");
    assert_eq!(normalize("x2"), "x*2");
    assert_eq!(normalize("2x(y)"), "2*x*(y)");
}

#[test]
fn normalize_leaves_explicit_text_alone() {
    let text = "Solve x + 2 = 3, y - x = 1 such that x > 0.";
    assert_eq!(normalize(text), text);
    assert_eq!(normalize("2 x"), "2 x");
}

#[test]
fn normalize_is_idempotent() {
    for text in ["2x+3(y)", "(a)(b)c4", "3(x+1)(y-2)z", "Solve 2x = 4."] {
        let once = normalize(text);
        assert_eq!(normalize(&once), once, "{text}");
    }
}

// --- clause splitter ---

#[test]
fn split_respects_parenthesis_nesting() {
    let split = split_clauses("f(a,b), g=1", &[Terminator::Comma]).expect("split");
    assert_eq!(split.clauses, vec!["f(a,b)", " g=1"]);
    assert_eq!(split.remainder, "");
    assert_eq!(split.stop, None);
}

#[test]
fn split_stops_after_a_period() {
    let split = split_clauses(
        "x=1, y=2. such that x > 0",
        &[Terminator::Comma, Terminator::Period],
    )
    .expect("split");
    assert_eq!(split.clauses, vec!["x=1", " y=2"]);
    assert_eq!(split.remainder, " such that x > 0");
    assert_eq!(split.stop, Some(Terminator::Period));
}

#[test]
fn split_stops_past_such_that_and_one_separator() {
    let split = split_clauses(
        "x + 2 = 3 such that x > 0.",
        &[Terminator::Comma, Terminator::Period, Terminator::SuchThat],
    )
    .expect("split");
    assert_eq!(split.clauses, vec!["x + 2 = 3 "]);
    assert_eq!(split.remainder, "x > 0.");
    assert_eq!(split.stop, Some(Terminator::SuchThat));
}

#[test]
fn split_ignores_terminators_inside_parentheses() {
    let split = split_clauses("(a.b), c\n. d", &[Terminator::Comma, Terminator::Period])
        .expect("split");
    assert_eq!(split.clauses, vec!["(a.b)", " c\n"]);
    assert_eq!(split.remainder, " d");
}

#[test]
fn split_ignores_terminators_it_was_not_given() {
    let split = split_clauses("a such that b. c", &[Terminator::Comma]).expect("split");
    assert_eq!(split.clauses, vec!["a such that b. c"]);
    assert_eq!(split.stop, None);
}

#[test]
fn split_keeps_empty_comma_clauses_but_drops_a_blank_tail() {
    let split = split_clauses("x=1,,y=2, ", &[Terminator::Comma]).expect("split");
    assert_eq!(split.clauses, vec!["x=1", "", "y=2"]);
}

#[test]
fn split_reports_unbalanced_parentheses() {
    let err = split_clauses("f(a, b", &[Terminator::Comma]).expect_err("unclosed");
    assert_eq!(err.kind, FailureKind::Structural);
    assert_eq!(err.column, 2);
    assert!(err.message.contains("unclosed '('"));

    let err = split_clauses("a), b", &[Terminator::Comma]).expect_err("unmatched");
    assert_eq!(err.kind, FailureKind::Structural);
    assert_eq!(err.column, 2);
    assert!(err.message.contains("unmatched ')'"));
}

// --- expression parser ---

#[test]
fn expression_multiplication_binds_tighter_than_addition() {
    assert_eq!(expr("2+3*4"), Expression::add(c(2), Expression::mul(c(3), c(4))));
    assert_eq!(eval("2+3*4"), 14);
    assert_eq!(eval("2*3+4"), 10);
}

#[test]
fn expression_parentheses_group_first() {
    assert_eq!(
        expr("(2+3)*4"),
        Expression::mul(Expression::add(c(2), c(3)), c(4))
    );
    assert_eq!(eval("(2+3)*4"), 20);
    assert_eq!(eval("2*(3+4)*5"), 70);
}

#[test]
fn expression_operators_associate_left() {
    assert_eq!(
        expr("1+2+3"),
        Expression::add(Expression::add(c(1), c(2)), c(3))
    );
    assert_eq!(
        expr("a*b*c"),
        Expression::mul(Expression::mul(v('a'), v('b')), v('c'))
    );
    assert_eq!(
        expr("a+b*c*d+e"),
        Expression::add(
            Expression::add(
                v('a'),
                Expression::mul(Expression::mul(v('b'), v('c')), v('d'))
            ),
            v('e')
        )
    );
}

#[test]
fn expression_subtraction_adds_a_negated_term() {
    assert_eq!(expr("x-y"), Expression::add(v('x'), Expression::negated(v('y'))));
    assert_eq!(expr("x - 3"), Expression::add(v('x'), c(-3)));
    assert_eq!(
        expr("x - 2*y"),
        Expression::add(v('x'), Expression::mul(c(-2), v('y')))
    );
    assert_eq!(eval("10-2*3"), 4);
    assert_eq!(eval("10-(2+3)"), 5);
    assert_eq!(eval("1-2-3"), -4);
}

#[test]
fn expression_unary_minus_rewrites_to_negation() {
    assert_eq!(expr("-x"), Expression::mul(c(-1), v('x')));
    assert_eq!(expr("-7"), c(-7));
    assert_eq!(
        expr("-(x+1)"),
        Expression::negated(Expression::add(v('x'), c(1)))
    );
    assert_eq!(expr("2*-3"), Expression::mul(c(2), c(-3)));
}

#[test]
fn expression_implicit_multiplication() {
    assert_eq!(expr("2x"), Expression::mul(c(2), v('x')));
    assert_eq!(expr("x2"), Expression::mul(v('x'), c(2)));
    assert_eq!(
        expr("3(x+1)"),
        Expression::mul(c(3), Expression::add(v('x'), c(1)))
    );
    assert_eq!(expr("(x)(y)"), Expression::mul(v('x'), v('y')));
    assert_eq!(eval("(2)3"), 6);
}

#[test]
fn expression_leaf_is_not_wrapped() {
    assert_eq!(expr("42"), c(42));
    assert_eq!(expr(" z "), v('z'));
    assert_eq!(expr("((z))"), v('z'));
}

#[test]
fn expression_tolerates_whitespace_and_line_breaks() {
    assert_eq!(expr(" x +\n  1 "), Expression::add(v('x'), c(1)));
}

#[test]
fn expression_reports_syntax_failures() {
    for text in ["x +", "", "x + * 2", "2 3", "x = 1", "()"] {
        let err = parse_expression(text).expect_err(text);
        assert_eq!(err.kind, FailureKind::Syntax, "{text}");
    }
    let err = parse_expression("99999999999999999999").expect_err("overflow");
    assert!(err.message.contains("out of range"));
}

#[test]
fn expression_reports_structural_failures() {
    for text in ["(x + 1", "x + 1)", "((x)"] {
        let err = parse_expression(text).expect_err(text);
        assert_eq!(err.kind, FailureKind::Structural, "{text}");
    }
}

#[test]
fn expression_nesting_is_capped() {
    let at_limit = format!("{}x{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert_eq!(expr(&at_limit), v('x'));

    let over = format!("{}x{}", "(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
    let err = parse_expression(&over).expect_err("too deep");
    assert_eq!(err.kind, FailureKind::Structural);
    assert!(err.message.contains("nesting too deep"));
    assert_eq!(err.column, MAX_NESTING + 1);
}

#[test]
fn expression_evaluates_with_variables() {
    let assignment: Assignment = [('x', 3), ('y', -2)].into_iter().collect();
    assert_eq!(expr("2x - y*y + 1").evaluate(&assignment), Some(3));
    assert_eq!(expr("x + q").evaluate(&assignment), None);
    assert_eq!(
        Expression::mul(c(i64::MAX), c(2)).evaluate(&Assignment::new()),
        None
    );
}

// --- constraint parser ---

#[test]
fn constraint_and_binds_tighter_than_or() {
    assert_eq!(
        constraint("x>0 and y>0 or z<0"),
        Constraint::or(
            Constraint::and(
                Constraint::greater_than(v('x'), c(0)),
                Constraint::greater_than(v('y'), c(0))
            ),
            Constraint::less_than(v('z'), c(0))
        )
    );
    assert_eq!(
        constraint("x>0 or y>0 and z<0"),
        Constraint::or(
            Constraint::greater_than(v('x'), c(0)),
            Constraint::and(
                Constraint::greater_than(v('y'), c(0)),
                Constraint::less_than(v('z'), c(0))
            )
        )
    );
}

#[test]
fn constraint_connectives_associate_left() {
    let x = Constraint::greater_than(v('x'), c(0));
    let y = Constraint::greater_than(v('y'), c(0));
    let z = Constraint::greater_than(v('z'), c(0));
    assert_eq!(
        constraint("x > 0 and y > 0 and z > 0"),
        Constraint::and(Constraint::and(x.clone(), y.clone()), z.clone())
    );
    assert_eq!(
        constraint("x > 0 or y > 0 or z > 0"),
        Constraint::or(Constraint::or(x, y), z)
    );
}

#[test]
fn constraint_parenthesized_groups_parse_as_a_unit() {
    assert_eq!(
        constraint("(x>0 or y>0) and z<1"),
        Constraint::and(
            Constraint::or(
                Constraint::greater_than(v('x'), c(0)),
                Constraint::greater_than(v('y'), c(0))
            ),
            Constraint::less_than(v('z'), c(1))
        )
    );
    assert_eq!(
        constraint("((x > 0))"),
        Constraint::greater_than(v('x'), c(0))
    );
}

#[test]
fn constraint_operands_are_full_expressions() {
    assert_eq!(
        constraint("(x+1) > 0"),
        Constraint::greater_than(Expression::add(v('x'), c(1)), c(0))
    );
    assert_eq!(
        constraint("x + y < 2z"),
        Constraint::less_than(
            Expression::add(v('x'), v('y')),
            Expression::mul(c(2), v('z'))
        )
    );
}

#[test]
fn constraint_keyword_inside_parentheses_is_not_top_level() {
    assert_eq!(
        constraint("x < 1 or (y > 2 and z > 3)"),
        Constraint::or(
            Constraint::less_than(v('x'), c(1)),
            Constraint::and(
                Constraint::greater_than(v('y'), c(2)),
                Constraint::greater_than(v('z'), c(3))
            )
        )
    );
}

#[test]
fn constraint_without_comparator_is_structural() {
    let err = parse_constraint("x + 1").expect_err("no comparator");
    assert_eq!(err.kind, FailureKind::Structural);
    assert!(err.message.contains("'<' or '>'"));
}

#[test]
fn constraint_reports_syntax_failures() {
    for text in ["x >", "x > 0 and", "x > 0 y", "> 1", "x > 0 and y"] {
        let err = parse_constraint(text).expect_err(text);
        assert_eq!(err.kind, FailureKind::Syntax, "{text}");
    }
}

#[test]
fn constraint_nesting_is_capped() {
    let depth = 10_000;
    let text = format!("{}x > 0{}", "(".repeat(depth), ")".repeat(depth));
    let err = parse_constraint(&text).expect_err("too deep");
    assert_eq!(err.kind, FailureKind::Structural);
    assert!(err.message.contains("nesting too deep"));
}

#[test]
fn constraint_holds_under_assignment() {
    let assignment: Assignment = [('x', 2), ('y', -1)].into_iter().collect();
    assert_eq!(constraint("x > 1 and y < 0").holds(&assignment), Some(true));
    assert_eq!(constraint("x > 5 or y > 0").holds(&assignment), Some(false));
    assert_eq!(constraint("q > 0").holds(&assignment), None);
}

// --- problem driver ---

#[test]
fn problem_with_equation_and_constraint() {
    let problem = parse_problem("Solve x + 2 = 3 such that x > 0.").expect("parse");
    assert_eq!(
        problem.equations,
        vec![Equation::new(Expression::add(v('x'), c(2)), c(3))]
    );
    assert_eq!(
        problem.constraints,
        vec![Constraint::greater_than(v('x'), c(0))]
    );
}

#[test]
fn problem_keeps_clause_order() {
    let problem = parse_problem("Solve x + 2 = 3, y - x = 1 such that x > 0, y < 10 or y > 20.")
        .expect("parse");
    assert_eq!(problem.equations.len(), 2);
    assert_eq!(
        problem.equations[1],
        Equation::new(Expression::add(v('y'), Expression::negated(v('x'))), c(1))
    );
    assert_eq!(problem.constraints.len(), 2);
    assert!(matches!(problem.constraints[1], Constraint::Disjunction(_, _)));
    assert_eq!(problem.variables().into_iter().collect::<Vec<_>>(), vec!['x', 'y']);
}

#[test]
fn problem_spans_multiple_lines() {
    let src = "Solve 2x + 3(y - 1) = 7,\n      x - y = 1\nsuch that\n  x > 0,\n  y > 0.\n";
    let problem = parse_problem(src).expect("parse");
    assert_eq!(problem.equations.len(), 2);
    assert_eq!(problem.constraints.len(), 2);
    assert_eq!(
        problem.equations[0].left,
        Expression::add(
            Expression::mul(c(2), v('x')),
            Expression::mul(c(3), Expression::add(v('y'), c(-1)))
        )
    );
}

#[test]
fn problem_without_constraints_or_final_period() {
    let problem = parse_problem("Solve x = 1, y = x").expect("parse");
    assert_eq!(problem.equations.len(), 2);
    assert!(problem.constraints.is_empty());
}

#[test]
fn problem_accepts_such_that_after_a_period() {
    let problem = parse_problem("Solve x*x = 4. such that x < 0.").expect("parse");
    assert_eq!(problem.equations.len(), 1);
    assert_eq!(problem.constraints.len(), 1);
}

#[test]
fn problem_without_solve_is_empty() {
    assert!(parse_problem("Find x such that x > 0.").expect("parse").is_empty());
    assert!(parse_problem("").expect("parse").is_empty());
    assert!(parse_problem("solve x = 1.").expect("parse").is_empty());
}

#[test]
fn problem_calls_are_independent() {
    let first = parse_problem("Solve x = 1.").expect("first");
    let second = parse_problem("Solve y = 2.").expect("second");
    assert_eq!(first.equations.len(), 1);
    assert_eq!(second.equations.len(), 1);
    assert_eq!(second.equations[0].left, v('y'));
}

#[test]
fn problem_with_unbalanced_parenthesis_is_structural() {
    let err = parse_problem("Solve (x + 2 = 3").expect_err("parse should fail");
    assert_eq!(err.kind, FailureKind::Structural);
    assert!(err.is_structural());
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 7);
    assert_eq!(err.snippet, "Solve (x + 2 = 3");
    assert_eq!(first_caret_column(&err.pointer), Some(err.column));
    assert!(err.to_string().contains("unclosed '('"));
    assert!(err.to_string().contains("<inline>:1:7"));
}

#[test]
fn problem_with_deep_nesting_fails_cleanly() {
    let depth = 10_000;
    let text = format!("Solve {}x{} = 1.", "(".repeat(depth), ")".repeat(depth));
    let err = parse_problem(&text).expect_err("too deep");
    assert_eq!(err.kind, FailureKind::Structural);
    assert_eq!(err.line, 1);
    assert_eq!(err.column, "Solve ".len() + MAX_NESTING + 1);
}

#[test]
fn problem_equation_without_equals_is_structural() {
    let err = parse_problem("Solve x + 2 such that x > 0.").expect_err("no '='");
    assert_eq!(err.kind, FailureKind::Structural);
    assert!(err.message.contains("no '='"));
}

#[test]
fn problem_constraint_without_comparator_is_structural() {
    let err = parse_problem("Solve x = 2 such that x + 1.").expect_err("no comparator");
    assert_eq!(err.kind, FailureKind::Structural);
}

#[test]
fn problem_rejects_empty_clauses() {
    let err = parse_problem("Solve x = 1,, y = 2.").expect_err("empty clause");
    assert_eq!(err.kind, FailureKind::Syntax);
    assert!(err.message.contains("empty clause"));
}

#[test]
fn problem_reports_line_and_column_of_offending_clause() {
    let src = "Solve x = 1,\n  y = 2 + * 3\nsuch that x > 0.";
    let err = parse_problem_in_source(src, "problem.txt").expect_err("bad clause");
    assert_eq!(err.kind, FailureKind::Syntax);
    assert_eq!(err.file, "problem.txt");
    assert_eq!(err.line, 2);
    assert_eq!(err.snippet, "  y = 2 + * 3");
    assert_eq!(err.column, 11);
    assert_eq!(first_caret_column(&err.pointer), Some(err.column));
    assert!(err.to_string().contains("problem.txt:2:"));
}

#[test]
fn problem_rendering_reparses_to_the_same_tree() {
    let src = "Solve 2x - 3(y + 1) = -4, x*y = 6 such that x > 0 and y > 0 or x < -2.";
    let problem = parse_problem(src).expect("parse");
    let rendered = problem.to_string();
    assert_eq!(parse_problem(&rendered).expect("reparse"), problem);
}

// --- solver adapter ---

#[test]
fn solves_the_running_example() {
    let outcome = solve_problem(
        "Solve x + 2 = 3, y - x = 1 such that x > 0.",
        SearchConfig::default(),
    )
    .expect("solve");
    assert_eq!(outcome.value('x'), Some(1));
    assert_eq!(outcome.value('y'), Some(2));
    assert_eq!(outcome.to_string(), "[x = 1, y = 2]");
}

#[test]
fn solves_constraint_only_problems() {
    let outcome =
        solve_problem("Solve such that x > 3 and x < 5.", SearchConfig::default()).expect("solve");
    assert_eq!(outcome.value('x'), Some(4));
}

#[test]
fn prefers_small_positive_candidates() {
    let outcome = solve_problem("Solve x*x = 4.", SearchConfig::default()).expect("solve");
    assert_eq!(outcome.value('x'), Some(2));
    let outcome =
        solve_problem("Solve x*x = 9 such that x < 0.", SearchConfig::default()).expect("solve");
    assert_eq!(outcome.value('x'), Some(-3));
}

#[test]
fn reports_unsatisfiable_problems() {
    let outcome =
        solve_problem("Solve x + 1 = x.", SearchConfig::new().bound(5)).expect("solve");
    assert_eq!(outcome, Outcome::Unsatisfiable);
    assert_eq!(outcome.to_string(), "No solution!");

    let outcome = solve_problem("Solve 2 + 2 = 5.", SearchConfig::default()).expect("solve");
    assert!(!outcome.is_satisfiable());
}

#[test]
fn ground_problems_need_no_search() {
    let outcome = solve_problem("Solve 2 + 2 = 4.", SearchConfig::default()).expect("solve");
    assert_eq!(outcome, Outcome::Satisfiable(Assignment::new()));
}

#[test]
fn search_stops_at_candidate_limit() {
    let err = solve_problem("Solve x = 10.", SearchConfig::new().max_candidates(3))
        .expect_err("limit");
    match err {
        SolveError::SearchLimit { examined, bound } => {
            assert_eq!(examined, 3);
            assert_eq!(bound, SearchConfig::default().bound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn search_budget_caps_large_bounds() {
    let err = solve_problem(
        "Solve x*x = 2.",
        SearchConfig::new().bound(1_000_000).max_candidates(1_000),
    )
    .expect_err("limit");
    assert!(matches!(err, SolveError::SearchLimit { examined: 1_000, .. }));
}

#[test]
fn search_visits_each_assignment_once() {
    // Two variables within bound 2 span a 5 x 5 grid.
    let outcome = solve_problem(
        "Solve x + y = 100.",
        SearchConfig::new().bound(2).max_candidates(25),
    )
    .expect("full grid fits the budget");
    assert_eq!(outcome, Outcome::Unsatisfiable);

    let err = solve_problem(
        "Solve x + y = 100.",
        SearchConfig::new().bound(2).max_candidates(24),
    )
    .expect_err("one assignment short");
    assert!(matches!(err, SolveError::SearchLimit { examined: 24, .. }));
}

#[test]
fn search_reaches_every_point_of_a_shell() {
    let outcome = solve_problem("Solve x + y = 1, y - x = 3.", SearchConfig::default())
        .expect("solve");
    assert_eq!(outcome.value('x'), Some(-1));
    assert_eq!(outcome.value('y'), Some(2));

    let outcome = solve_problem(
        "Solve x*y*z = -12 such that x > 1 and y > 1.",
        SearchConfig::default(),
    )
    .expect("solve");
    let assignment = outcome.assignment().expect("satisfiable");
    let product: i64 = assignment.values().product();
    assert_eq!(product, -12);
    assert_eq!(assignment.values().map(|v| v.abs()).max(), Some(3));
}

#[test]
fn solve_surfaces_parse_errors() {
    let err = solve_problem("Solve (x = 1", SearchConfig::default()).expect_err("parse");
    match err {
        SolveError::Parse(parse) => assert_eq!(parse.kind, FailureKind::Structural),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn adapter_lowers_variables_into_slots() {
    use crate::model::{Goal, Term};

    let mut search = BoundedSearch::new(SearchConfig::default());
    let term = search.lower_expression(&expr("x + y*x"));
    assert_eq!(
        term,
        Term::Add(
            Box::new(Term::Variable(0)),
            Box::new(Term::Mul(
                Box::new(Term::Variable(1)),
                Box::new(Term::Variable(0))
            ))
        )
    );
    let goal = search.lower_constraint(&constraint("y > 2"));
    assert_eq!(goal, Goal::Greater(Term::Variable(1), Term::Constant(2)));
    assert_eq!(search.variables(), &['x', 'y']);
}
