use std::error::Error;

use runsheet::dag::{TaskGraph, find_cycle, validate_acyclic};
use runsheet::errors::RunsheetError;
use runsheet::sheet::plan_tasks;
use runsheet_test_utils::builders::{TaskRecordBuilder, four_task_fixture};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn mutual_dependency_is_a_cycle() {
    let records = vec![
        TaskRecordBuilder::new("a").after("b").build(),
        TaskRecordBuilder::new("b").after("a").build(),
    ];

    match plan_tasks(&records) {
        Err(RunsheetError::DependencyCycle { tasks }) => {
            assert_eq!(tasks, vec!["a".to_string(), "b".to_string()]);
        }
        other => panic!("expected DependencyCycle, got {other:?}"),
    }
}

#[test]
fn transitive_cycle_is_detected_and_names_only_its_members() {
    // free -> x -> y -> z -> x
    let records = vec![
        TaskRecordBuilder::new("free").build(),
        TaskRecordBuilder::new("x").after("free").after("z").build(),
        TaskRecordBuilder::new("y").after("x").build(),
        TaskRecordBuilder::new("z").after("y").build(),
    ];

    let err = plan_tasks(&records).expect_err("cycle must be rejected");
    match err {
        RunsheetError::DependencyCycle { ref tasks } => {
            assert_eq!(tasks, &["x", "y", "z"]);
        }
        ref other => panic!("expected DependencyCycle, got {other:?}"),
    }
    assert!(err.to_string().contains("dependency loop detected"));
}

#[test]
fn acyclic_graph_passes_validation() -> TestResult {
    let graph = TaskGraph::build(&four_task_fixture())?;
    validate_acyclic(&graph)?;
    Ok(())
}

#[test]
fn self_loop_edge_counts_as_cycle() {
    assert_eq!(find_cycle(3, &[(0, 1), (1, 1)]), Some(vec![1]));
}

#[test]
fn diamond_has_no_cycle() {
    assert_eq!(find_cycle(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]), None);
}

#[test]
fn isolated_nodes_have_no_cycle() {
    assert_eq!(find_cycle(5, &[]), None);
}

#[test]
fn two_node_cycle_is_found_by_index() {
    let mut cycle = find_cycle(3, &[(0, 2), (2, 0)]).expect("cycle expected");
    cycle.sort();
    assert_eq!(cycle, vec![0, 2]);
}

#[test]
fn edges_outside_the_node_range_are_ignored() {
    assert_eq!(find_cycle(2, &[(0, 7), (7, 0)]), None);
    assert_eq!(find_cycle(2, &[(0, 5), (1, 1)]), Some(vec![1]));
}
