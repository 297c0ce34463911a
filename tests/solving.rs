use std::fs;

use isola::{
    algebra::{simplifier::simplify, solver::solve},
    answer,
    error::{ParseError, ResolveError, SolveError, UnsupportedShape},
    interpreter::{evaluator::resolve, parser::core::parse},
};
use walkdir::WalkDir;

#[test]
fn guide_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs").into_iter()
                            .filter_map(Result::ok)
                            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_isola_blocks(&content).into_iter().enumerate() {
            for line in block.lines() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                count += 1;
                if let Err(e) = answer(line) {
                    panic!("Guide example {} in {:?} failed on '{}':\nError: {}",
                           i + 1,
                           path,
                           line,
                           e);
                }
            }
        }
    }

    assert!(count > 0, "No guide examples found in docs");
}

fn extract_isola_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```isola") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn values_of(source: &str) -> Vec<f64> {
    answer(source).unwrap_or_else(|e| panic!("'{source}' failed: {e}"))
                  .values
}

fn failure_of(source: &str) -> Box<dyn std::error::Error> {
    match answer(source) {
        Ok(answer) => panic!("'{source}' yielded {:?} but was expected to fail",
                             answer.values),
        Err(error) => error,
    }
}

fn parse_failure_of(source: &str) -> ParseError {
    match failure_of(source).downcast::<ParseError>() {
        Ok(error) => *error,
        Err(error) => panic!("'{source}' failed outside parsing: {error}"),
    }
}

fn resolve_failure_of(source: &str) -> ResolveError {
    match failure_of(source).downcast::<ResolveError>() {
        Ok(error) => *error,
        Err(error) => panic!("'{source}' failed outside resolution: {error}"),
    }
}

fn solve_failure_of(source: &str) -> SolveError {
    match failure_of(source).downcast::<SolveError>() {
        Ok(error) => *error,
        Err(error) => panic!("'{source}' failed outside solving: {error}"),
    }
}

fn simplified(source: &str) -> String {
    let parsed = parse(source).unwrap_or_else(|e| panic!("'{source}' failed to parse: {e}"));
    simplify(parsed.expr).to_string()
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(),
               "{actual:?} and {expected:?} differ in length");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{actual:?} is not close to {expected:?}");
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(values_of("1 + 2"), vec![3.0]);
    assert_eq!(values_of("7 * 9"), vec![63.0]);
    assert_eq!(values_of("8 - 5"), vec![3.0]);
    assert_eq!(values_of("10 / 2"), vec![5.0]);
    assert_eq!(values_of("7 % 3"), vec![1.0]);
    assert_close(&values_of("2 ^ 10"), &[1024.0]);
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(values_of("2 + 3 * 4"), vec![14.0]);
    assert_eq!(values_of("(2 + 3) * 4"), vec![20.0]);
    assert_eq!(values_of("10 - 2 - 3"), vec![5.0]);
    assert_close(&values_of("2 ^ 3 ^ 2"), &[512.0]);
    assert_close(&values_of("-3 ^ 2"), &[-9.0]);
}

#[test]
fn modulus_sign_follows_dividend() {
    assert_eq!(values_of("-7 % 3"), vec![-1.0]);
    assert_eq!(values_of("7 % -3"), vec![1.0]);
}

#[test]
fn division_by_zero_follows_floats() {
    assert_eq!(values_of("1 / 0"), vec![f64::INFINITY]);
    assert!(values_of("0 / 0")[0].is_nan());
    assert!(values_of("5 % 0")[0].is_nan());
}

#[test]
fn factorials() {
    assert_eq!(values_of("4!"), vec![24.0]);
    assert_eq!(values_of("3!"), vec![6.0]);
    assert_eq!(values_of("0!"), vec![1.0]);
    assert_eq!(values_of("-4!"), vec![-24.0]);
    assert_eq!(values_of("(0 - 4)!"), vec![1.0]);
}

#[test]
fn factorial_requires_an_integer() {
    assert!(matches!(resolve_failure_of("3.5!"),
                     ResolveError::NonIntegerFactorial { .. }));
}

#[test]
fn absolute_values() {
    assert_eq!(values_of("|-5|"), vec![5.0]);
    assert_eq!(values_of("|5|"), vec![5.0]);
    assert_eq!(values_of("|2 - 6| + 1"), vec![5.0]);
}

#[test]
fn possibilities_enumerate_left_major() {
    assert_eq!(values_of("{1, 2} + {10, 20}"), vec![11.0, 21.0, 12.0, 22.0]);
    assert_eq!(values_of("2 * {1, 2, 3}"), vec![2.0, 4.0, 6.0]);
    assert_eq!(values_of("{4}"), vec![4.0]);
    assert_eq!(values_of("-{1, 2}"), vec![-1.0, -2.0]);
}

#[test]
fn plus_minus_branches() {
    assert_eq!(values_of("\u{b1}3"), vec![3.0, -3.0]);
    assert_eq!(values_of("5 \u{b1} 2"), vec![7.0, 3.0]);
}

#[test]
fn rendering_round_trips() {
    for source in ["2 + 3 * 4",
                   "2 ^ 3 ^ 2",
                   "{1, 2} * 10",
                   "4! - |2 - 5|",
                   "-(2 + 3)",
                   "7 % 3 + 1"]
    {
        let parsed = parse(source).unwrap();
        let rendered = parsed.expr.to_string();
        let reparsed = parse(&rendered).unwrap_or_else(|e| {
                           panic!("'{source}' rendered as unparseable '{rendered}': {e}")
                       });
        assert_eq!(resolve(&reparsed.expr).unwrap(),
                   resolve(&parsed.expr).unwrap(),
                   "'{source}' changed value through '{rendered}'");
    }
}

#[test]
fn one_variable_name_is_bound() {
    let parsed = parse("x + x").unwrap();
    assert_eq!(parsed.variable.as_deref(), Some("x"));

    let answer = answer("2 * n + 3 = 11").unwrap();
    assert_eq!(answer.variable.as_deref(), Some("n"));
}

#[test]
fn a_second_variable_name_is_rejected() {
    assert!(matches!(parse_failure_of("x + y"),
                     ParseError::TooManyVariables { .. }));
}

#[test]
fn bare_variables_do_not_resolve() {
    assert!(matches!(resolve_failure_of("x + 1"),
                     ResolveError::ResolvingVariable));
}

#[test]
fn malformed_numbers_are_lexical_errors() {
    assert_eq!(values_of(".5"), vec![0.5]);
    assert!(matches!(parse_failure_of("3."),
                     ParseError::NumberEndingInDot { .. }));
    assert!(matches!(parse_failure_of("."), ParseError::LoneDot));
    assert!(matches!(parse_failure_of("2 @ 2"),
                     ParseError::IllegalCharacter { .. }));
}

#[test]
fn open_delimiters_are_reported() {
    assert!(matches!(parse_failure_of("(2 + 3"),
                     ParseError::ExpectedMoreTokens { .. }));
    assert!(matches!(parse_failure_of("{1, 2"),
                     ParseError::ExpectedMoreTokens { .. }));
    assert!(matches!(parse_failure_of("|2"),
                     ParseError::ExpectedMoreTokens { .. }));
    assert!(matches!(parse_failure_of("2 +"),
                     ParseError::ExpectedMoreTokens { expected: None }));
    assert!(matches!(parse_failure_of("(2 3"),
                     ParseError::UnmatchedParenthesis));
    assert!(matches!(parse_failure_of("{1 2}"), ParseError::UnmatchedBrace));
    assert!(matches!(parse_failure_of("|2 3"),
                     ParseError::UnmatchedAbsolutePipe));
    assert!(matches!(parse_failure_of("|2 3|"),
                     ParseError::UnmatchedAbsolutePipe));
}

#[test]
fn leftover_tokens_are_reported() {
    assert!(matches!(parse_failure_of("1 2"),
                     ParseError::TokensRemainingAfterParsing { .. }));
    assert!(matches!(parse_failure_of("1 = 2 = 3"),
                     ParseError::TokensRemainingAfterParsing { .. }));
    assert!(matches!(parse_failure_of("3!!"),
                     ParseError::TokensRemainingAfterParsing { .. }));
}

#[test]
fn equations_without_the_unknown() {
    assert!(matches!(solve_failure_of("2 = 2"),
                     SolveError::WithoutVariable { equal: true }));
    assert!(matches!(solve_failure_of("2 = 3"),
                     SolveError::WithoutVariable { equal: false }));
}

#[test]
fn solving_requires_an_equation() {
    let parsed = parse("5").unwrap();
    assert!(matches!(solve(parsed.expr), Err(SolveError::NotAnEquation)));
}

#[test]
fn linear_equations() {
    assert_eq!(values_of("2 * x + 3 = 11"), vec![4.0]);
    assert_eq!(values_of("x - 3 = 7"), vec![10.0]);
    assert_eq!(values_of("3 + x = 10"), vec![7.0]);
    assert_eq!(values_of("5 - x = 2"), vec![3.0]);
    assert_eq!(values_of("x / 4 = 3"), vec![12.0]);
    assert_eq!(values_of("11 = 2 * x + 3"), vec![4.0]);
}

#[test]
fn steps_describe_each_stage() {
    let answer = answer("2 * x + 3 = 11").unwrap();
    assert_eq!(answer.values, vec![4.0]);
    assert_eq!(answer.steps,
               vec!["(2 * x) + 3 = 11", "2 * x = 8", "x = 4"]);
}

#[test]
fn plain_expressions_have_no_steps() {
    let answer = answer("2 + 2").unwrap();
    assert!(answer.steps.is_empty());
}

#[test]
fn absolute_value_equations_branch() {
    let answer = answer("|x| = 5").unwrap();
    assert_eq!(answer.values, vec![5.0, -5.0]);
    assert_eq!(answer.steps, vec!["|x| = 5", "x = {5, -5}"]);
}

#[test]
fn branch_equations_solve_branch_wise() {
    assert_eq!(values_of("{x, 2 * x} = 6"), vec![6.0, 3.0]);
}

#[test]
fn solved_results_resolve_to_values() {
    let parsed = parse("|x| = 5").unwrap();
    let solution = solve(parsed.expr).unwrap();
    assert_eq!(resolve(&solution.result).unwrap(), vec![5.0, -5.0]);

    let parsed = parse("x = 3.5!").unwrap();
    let solution = solve(parsed.expr).unwrap();
    assert!(resolve(&solution.result).is_err());
}

#[test]
fn variable_in_a_divisor() {
    let answer = answer("10 / x = 2").unwrap();
    assert_eq!(answer.values, vec![5.0]);
    assert_eq!(answer.steps,
               vec!["10 / x = 2", "10 / 2 = x", "x = 5"]);
}

#[test]
fn negated_unknowns() {
    assert_eq!(values_of("-x = 3"), vec![-3.0]);
}

#[test]
fn powers_of_the_unknown() {
    assert_close(&values_of("x ^ 2 = 9"), &[3.0]);
    assert_close(&values_of("x * x = 25"), &[5.0]);
    assert_eq!(values_of("x ^ 2 / x = 4"), vec![4.0]);
}

#[test]
fn unknown_in_an_exponent_is_unsupported() {
    assert!(matches!(solve_failure_of("2 ^ x = 8"),
                     SolveError::Unsupported { shape: UnsupportedShape::VariableInExponent }));
}

#[test]
fn unknown_in_a_factorial_is_unsupported() {
    assert!(matches!(solve_failure_of("x! = 24"), SolveError::VariableInFactorial));
}

#[test]
fn unknown_in_a_modulus_is_unsupported() {
    assert!(matches!(solve_failure_of("x % 3 = 1"),
                     SolveError::Unsupported { shape: UnsupportedShape::VariableInModulus }));
}

#[test]
fn unknown_on_both_sides_is_unsupported() {
    assert!(matches!(solve_failure_of("2 * x = x + 4"),
                     SolveError::Unsupported { shape: UnsupportedShape::VariableOnBothSides }));
}

#[test]
fn split_terms_are_reported_not_guessed() {
    assert!(matches!(solve_failure_of("x + 3 + x = 11"),
                     SolveError::Unsupported { shape: UnsupportedShape::UnmergeableTerms }));
    assert!(matches!(solve_failure_of("x * x * x = 27"),
                     SolveError::Unsupported { shape: UnsupportedShape::UnmergeableProduct }));
    assert!(matches!(solve_failure_of("x / (x + 1) = 2"),
                     SolveError::Unsupported { shape: UnsupportedShape::UnmergeableQuotient }));
}

#[test]
fn constant_sides_must_still_resolve() {
    assert!(matches!(solve_failure_of("3.5! = 3.5!"),
                     SolveError::Resolve(ResolveError::NonIntegerFactorial { .. })));
}

#[test]
fn simplification_rules() {
    assert_eq!(simplified("2 * x + 3 * x"), "5 * x");
    assert_eq!(simplified("x * 0"), "0");
    assert_eq!(simplified("x * 1"), "x");
    assert_eq!(simplified("x * -1"), "-x");
    assert_eq!(simplified("x / 1"), "x");
    assert_eq!(simplified("x ^ 0"), "1");
    assert_eq!(simplified("x ^ 1"), "x");
    assert_eq!(simplified("2 * (x + 3)"), "(2 * x) + 6");
    assert_eq!(simplified("3 * (2 * x)"), "6 * x");
    assert_eq!(simplified("x * 3"), "3 * x");
    assert_eq!(simplified("2 * x * 3"), "6 * x");
}

#[test]
fn simplification_is_idempotent() {
    for source in ["2 * x + 3 * x",
                   "x * 1 + 0 * x",
                   "2 * (x + 3)",
                   "-(-x)",
                   "x ^ 1 + x ^ 0",
                   "{x, x + 1, 2 * 3}"]
    {
        let parsed = parse(source).unwrap();
        let once = simplify(parsed.expr);
        assert_eq!(simplify(once.clone()), once, "'{source}' kept changing");
    }
}
