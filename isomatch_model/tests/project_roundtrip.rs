//! Round-trip tests for the persisted project format.

use rstest::rstest;

use isomatch_model::{GraphModel, Point, ProjectError, ProjectFile, WeightMatrix};

fn sample_models() -> (GraphModel, WeightMatrix) {
    let mut graph = GraphModel::default();
    graph.create_node(Point::new(0.0, 0.0), None).unwrap();
    graph.create_node(Point::new(100.0, 0.0), None).unwrap();
    graph.create_node(Point::new(0.0, 100.0), None).unwrap();
    graph.create_edge("A", "B");
    graph.create_edge("B", "C");

    let mut matrix = WeightMatrix::new(3);
    matrix.set_cell(0, 1, "5");
    matrix.set_cell(1, 2, "8");

    (graph, matrix)
}

#[rstest]
fn roundtrip_preserves_adjacency_and_matrix() {
    let (graph, matrix) = sample_models();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exercise.json");

    ProjectFile::capture(&graph, &matrix).save(&path).unwrap();

    let mut graph_back = GraphModel::default();
    let mut matrix_back = WeightMatrix::new(0);
    ProjectFile::load(&path)
        .unwrap()
        .restore(&mut graph_back, &mut matrix_back)
        .unwrap();

    assert_eq!(graph_back.adjacency(), graph.adjacency());
    assert_eq!(matrix_back.data(), matrix.data());
}

#[rstest]
fn restore_uses_the_saved_counter_value() {
    let (graph, matrix) = sample_models();
    assert_eq!(graph.node_counter(), 3);

    let project = ProjectFile::capture(&graph, &matrix);
    let mut graph_back = GraphModel::default();
    let mut matrix_back = WeightMatrix::new(0);
    project.restore(&mut graph_back, &mut matrix_back).unwrap();

    // Node re-creation advanced the counter, then the saved value won.
    assert_eq!(graph_back.node_counter(), 3);
    let next = graph_back
        .create_node(Point::new(300.0, 300.0), None)
        .unwrap();
    assert_eq!(next.name, "D");
}

#[rstest]
fn dragged_close_nodes_survive_the_roundtrip() {
    let (mut graph, matrix) = sample_models();
    // Legal through dragging, closer than any placement would allow.
    graph.move_node("B", Point::new(1.0, 0.0));

    let project = ProjectFile::capture(&graph, &matrix);
    let mut graph_back = GraphModel::default();
    let mut matrix_back = WeightMatrix::new(0);
    project.restore(&mut graph_back, &mut matrix_back).unwrap();

    assert_eq!(graph_back.node_count(), 3);
    assert_eq!(graph_back.node("B").unwrap().pos, Point::new(1.0, 0.0));
}

#[rstest]
fn restore_clears_preexisting_state() {
    let (graph, matrix) = sample_models();
    let project = ProjectFile::capture(&graph, &matrix);

    let mut graph_back = GraphModel::default();
    graph_back
        .create_node(Point::new(500.0, 500.0), Some("STALE".to_string()))
        .unwrap();
    let mut matrix_back = WeightMatrix::new(7);

    project.restore(&mut graph_back, &mut matrix_back).unwrap();

    assert!(graph_back.node("STALE").is_none());
    assert_eq!(graph_back.node_count(), 3);
    assert_eq!(matrix_back.size(), 3);
}

#[rstest]
fn edge_with_unknown_id_is_an_error() {
    let (graph, matrix) = sample_models();
    let mut project = ProjectFile::capture(&graph, &matrix);
    project.graph.edges.push(isomatch_model::EdgeRecord { u: 0, v: 99 });

    let mut graph_back = GraphModel::default();
    let mut matrix_back = WeightMatrix::new(0);
    let err = project
        .restore(&mut graph_back, &mut matrix_back)
        .unwrap_err();

    assert!(matches!(err, ProjectError::UnknownNodeId { id: 99 }));
}

#[rstest]
fn duplicate_node_name_is_an_error() {
    let (graph, matrix) = sample_models();
    let mut project = ProjectFile::capture(&graph, &matrix);
    let mut dup = project.graph.nodes[0].clone();
    dup.id = 9;
    project.graph.nodes.push(dup);

    let mut graph_back = GraphModel::default();
    let mut matrix_back = WeightMatrix::new(0);
    let err = project
        .restore(&mut graph_back, &mut matrix_back)
        .unwrap_err();

    assert!(matches!(err, ProjectError::DuplicateNodeName { name } if name == "A"));
}

#[rstest]
fn wire_format_matches_the_shared_contract() {
    let (graph, matrix) = sample_models();
    let project = ProjectFile::capture(&graph, &matrix);
    let value: serde_json::Value = serde_json::to_value(&project).unwrap();

    assert_eq!(value["graph"]["node_counter"], 3);
    assert_eq!(value["graph"]["nodes"][0]["id"], 0);
    assert_eq!(value["graph"]["nodes"][0]["name"], "A");
    assert_eq!(value["graph"]["nodes"][1]["name"], "B");
    assert!(value["graph"]["nodes"][0]["x"].is_number());
    assert_eq!(value["matrix"][0][1], "5");
    assert_eq!(value["matrix"][1][0], "5");

    let edges = value["graph"]["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 2);
    assert!(edges[0].get("u").is_some() && edges[0].get("v").is_some());
}
