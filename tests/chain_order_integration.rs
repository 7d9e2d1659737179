use chain_order::{
    optimal_order, parenthesization, solve_chain, ChainOrderError, ChainOrderSolver, InputFault,
};

#[test]
fn chain_order_clrs_integration() {
    let dims = [30, 35, 15, 5, 10, 20, 25];
    let (costs, splits) = optimal_order(&dims).unwrap();

    assert_eq!(costs[(1, 6)], 15125);
    // Spot-check interior cells against the textbook table.
    assert_eq!(costs[(2, 5)], 7125);
    assert_eq!(costs[(3, 5)], 2500);
    assert_eq!(costs[(1, 2)], 15750);
    assert_eq!(splits[(1, 6)], 3);
    assert_eq!(splits[(1, 3)], 1);
    assert_eq!(splits[(4, 6)], 5);

    let expr = parenthesization(&splits, 1, 6).unwrap();
    assert_eq!(expr, "((A1(A2A3))((A4A5)A6))");
}

#[test]
fn solve_chain_bundles_tables_and_expression() {
    let order = solve_chain(&[30, 35, 15, 5, 10, 20, 25]).unwrap();
    assert_eq!(order.costs[(1, 6)], 15125);
    assert_eq!(order.expression, "((A1(A2A3))((A4A5)A6))");
    assert_eq!(
        order.expression,
        parenthesization(&order.splits, 1, 6).unwrap()
    );
}

#[test]
fn diagonal_is_zero_for_every_sub_chain() {
    let (costs, _splits) = optimal_order(&[30, 35, 15, 5, 10, 20, 25]).unwrap();
    for i in 1..=6 {
        assert_eq!(costs[(i, i)], 0);
    }
}

#[test]
fn single_matrix_edge_case() {
    let order = solve_chain(&[10, 20]).unwrap();
    assert_eq!(order.costs[(1, 1)], 0);
    assert_eq!(order.expression, "A1");
}

#[test]
fn two_matrix_edge_case() {
    let order = solve_chain(&[10, 20, 30]).unwrap();
    assert_eq!(order.costs[(1, 2)], 6000);
    assert_eq!(order.expression, "(A1A2)");
}

#[test]
fn invalid_input_produces_no_tables() {
    assert_eq!(
        optimal_order(&[42]).unwrap_err(),
        ChainOrderError::InvalidInput(InputFault::TooShort { len: 1 })
    );
    assert_eq!(
        optimal_order(&[30, 35, 0, 5]).unwrap_err(),
        ChainOrderError::InvalidInput(InputFault::ZeroDimension { index: 2 })
    );
}

#[test]
fn invalid_ranges_are_rejected() {
    let (_costs, splits) = optimal_order(&[30, 35, 15, 5, 10, 20, 25]).unwrap();
    assert_eq!(
        parenthesization(&splits, 0, 6).unwrap_err(),
        ChainOrderError::InvalidRange {
            start: 0,
            end: 6,
            n: 6
        }
    );
    assert_eq!(
        parenthesization(&splits, 1, 7).unwrap_err(),
        ChainOrderError::InvalidRange {
            start: 1,
            end: 7,
            n: 6
        }
    );
    assert_eq!(
        parenthesization(&splits, 4, 2).unwrap_err(),
        ChainOrderError::InvalidRange {
            start: 4,
            end: 2,
            n: 6
        }
    );
}

#[test]
fn repeated_invocations_are_byte_identical() {
    let dims = vec![7, 3, 11, 2, 9, 5];
    let solver = ChainOrderSolver::new(dims.clone()).unwrap();
    let (c1, s1) = solver.solve();
    let (c2, s2) = solver.solve();
    assert_eq!(c1, c2);
    assert_eq!(s1, s2);

    let e1 = solve_chain(&dims).unwrap().expression;
    let e2 = solve_chain(&dims).unwrap().expression;
    assert_eq!(e1, e2);
}

#[test]
fn demo_grid_shape_matches_the_reference_printout() {
    let (costs, _splits) = optimal_order(&[30, 35, 15, 5, 10, 20, 25]).unwrap();
    let grid = costs.to_string();
    let rows: Vec<&str> = grid.lines().collect();
    assert_eq!(rows.len(), 7);
    for row in &rows {
        assert_eq!(row.matches('\t').count(), 7);
    }
    // Row 0 and column 0 are unused and print as zeros.
    assert_eq!(rows[0], "\t0\t0\t0\t0\t0\t0\t0");
    assert!(rows[1].ends_with("\t15125"));
}
