use crate::equation::{Equation, FormatError};
use crate::solver::EquationSolver;
use crate::solver::fills::{decode_fill, fill_pool};

fn as_strings(solutions: &[Equation]) -> Vec<String> {
    solutions.iter().map(Equation::to_string).collect()
}

#[test]
fn test_solve_unconstrained_template() {
    let solver = EquationSolver::default();
    let result = solver.solve("73-6_=1_");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(
            as_strings(&solutions),
            vec!["73-60=13", "73-61=12", "73-62=11", "73-63=10"]
        );
    }
}

#[test]
fn test_solve_single_open_cell() {
    let solver = EquationSolver::default();
    let result = solver.solve("73-6_=12");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(as_strings(&solutions), vec!["73-61=12"]);
    }

    let result = solver.solve("73-6_=19");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert!(solutions.is_empty());
    }
}

#[test]
fn test_solve_no_open_cells_validates_directly() {
    let solver = EquationSolver::default();
    let result = solver.solve("12+34=46");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(as_strings(&solutions), vec!["12+34=46"]);
    }

    let result = solver.solve("12+34=47");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert!(solutions.is_empty());
    }
}

#[test]
fn test_solve_keeps_fixed_cells_out_of_constraints() {
    // '1' is blacklisted but only open cells are constrained
    let solver = EquationSolver::new("1", "");
    let result = solver.solve("12+34=46");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(as_strings(&solutions), vec!["12+34=46"]);
    }

    let solver = EquationSolver::new("7", "");
    let result = solver.solve("73-6_=1_");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(
            as_strings(&solutions),
            vec!["73-60=13", "73-61=12", "73-62=11", "73-63=10"]
        );
    }
}

#[test]
fn test_solve_blacklist_narrows_the_pool() {
    let solver = EquationSolver::new("0", "");
    let result = solver.solve("73-6_=1_");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(as_strings(&solutions), vec!["73-61=12", "73-62=11"]);
    }
}

#[test]
fn test_solve_whitelist_must_appear_in_fills() {
    let solver = EquationSolver::new("", "1");
    let result = solver.solve("73-6_=1_");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(as_strings(&solutions), vec!["73-61=12", "73-62=11"]);
    }

    // '7' appears in fixed cells only, which does not count
    let solver = EquationSolver::new("", "7");
    let result = solver.solve("73-6_=1_");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert!(solutions.is_empty());
    }
}

#[test]
fn test_solve_impossible_whitelist_finds_nothing() {
    let solver = EquationSolver::new("", "q");
    let result = solver.solve("73-6_=1_");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert!(solutions.is_empty());
    }

    let solver = EquationSolver::new("1", "1");
    let result = solver.solve("73-6_=1_");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert!(solutions.is_empty());
    }
}

#[test]
fn test_solve_respects_cell_exclusions() {
    let solver = EquationSolver::default();
    let result = solver.solve("__+_1=34");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(as_strings(&solutions), vec!["13+21=34", "23+11=34"]);
    }

    let result = solver.solve("[1]_+_1=34");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(as_strings(&solutions), vec!["23+11=34"]);
    }

    let result = solver.solve("__+[2]1=34");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(as_strings(&solutions), vec!["23+11=34"]);
    }
}

#[test]
fn test_solve_exclusions_only_ever_narrow_results() {
    let solver = EquationSolver::default();
    let plain = solver.solve("__+_1=34");
    let excluded = solver.solve("[1]_+_1=34");
    assert!(plain.is_ok());
    assert!(excluded.is_ok());
    if let (Ok(plain), Ok(excluded)) = (plain, excluded) {
        let plain = as_strings(&plain);
        let excluded = as_strings(&excluded);
        assert!(excluded.iter().all(|solution| plain.contains(solution)));
        assert!(excluded.len() < plain.len());
    }
}

#[test]
fn test_solve_bracket_variant_is_strict_subset() {
    let solver = EquationSolver::new("345", "6");
    let plain = solver.solve("2*8_=17_");
    let bracketed = solver.solve("2*8[26]=17[8]");
    assert!(plain.is_ok());
    assert!(bracketed.is_ok());
    if let (Ok(plain), Ok(bracketed)) = (plain, bracketed) {
        assert_eq!(as_strings(&plain), vec!["2*86=172", "2*88=176"]);
        assert_eq!(as_strings(&bracketed), vec!["2*88=176"]);
    }
}

#[test]
fn test_solve_subtraction_puzzle() {
    let solver = EquationSolver::new("5", "1");
    let result = solver.solve("73-6_=1_");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert!(as_strings(&solutions).iter().any(|s| s == "73-61=12"));
    }
}

#[test]
fn test_solve_multiplication_puzzle() {
    let solver = EquationSolver::new("5689", "24");
    let result = solver.solve("_*_3=1__");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert!(as_strings(&solutions).iter().any(|s| s == "4*33=132"));
    }
}

#[test]
fn test_solve_division_puzzle_with_exclusions() {
    let solver = EquationSolver::new("14568+", "7");
    let result = solver.solve("2[23]/[7][=][=]_0");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert!(as_strings(&solutions).iter().any(|s| s == "27/3-9=0"));
    }
}

#[test]
fn test_solve_orders_solutions_by_fill_rank() {
    // Pool narrowed to {1, 2}, so the walk order is fully pinned down
    let solver = EquationSolver::new("03456789+-*/=", "");
    let result = solver.solve("73-6_=1_");
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(as_strings(&solutions), vec!["73-61=12", "73-62=11"]);
    }
}

#[test]
fn test_solve_is_deterministic() {
    let solver = EquationSolver::default();
    let first = solver.solve("73-6_=1_");
    let second = solver.solve("73-6_=1_");
    assert!(first.is_ok());
    assert!(second.is_ok());
    if let (Ok(first), Ok(second)) = (first, second) {
        assert_eq!(as_strings(&first), as_strings(&second));
    }
}

#[test]
fn test_solve_rejects_bad_templates() {
    let solver = EquationSolver::default();
    for (template, expected_len) in [("_______", 7), ("_________", 9), ("", 0)] {
        let result = solver.solve(template);
        assert_eq!(
            result,
            Err(FormatError::TemplateLength {
                len: expected_len,
                template: template.to_string()
            })
        );
    }
}

#[test]
fn test_fill_pool_keeps_alphabet_order() {
    let pool = fill_pool(&[]);
    assert_eq!(
        pool,
        vec![
            '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '*', '/', '='
        ]
    );

    let pool = fill_pool(&['0', '+', '=']);
    assert_eq!(
        pool,
        vec!['1', '2', '3', '4', '5', '6', '7', '8', '9', '-', '*', '/']
    );
}

#[test]
fn test_decode_fill_walks_ranks_in_order() {
    let pool = vec!['1', '2'];
    assert_eq!(decode_fill(0, &pool, 2), vec!['1', '1']);
    assert_eq!(decode_fill(1, &pool, 2), vec!['1', '2']);
    assert_eq!(decode_fill(2, &pool, 2), vec!['2', '1']);
    assert_eq!(decode_fill(3, &pool, 2), vec!['2', '2']);
}
