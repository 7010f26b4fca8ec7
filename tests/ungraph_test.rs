use std::collections::HashSet;

use weave::qubit_graph::ungraph::UnGraph;

#[test]
fn toggle_is_self_inverse() {
    let nodes = [(0, 0), (0, 2), (2, 0)];
    let mut graph = UnGraph::new(&nodes);

    graph.toggle_edge((0, 0), (0, 2));
    assert!(graph.has_edge((0, 0), (0, 2)));
    assert!(graph.has_edge((0, 2), (0, 0)));
    assert_eq!(graph.size(), 1);

    graph.toggle_edge((0, 2), (0, 0));
    assert!(!graph.has_edge((0, 0), (0, 2)));
    assert_eq!(graph.size(), 0);
}

#[test]
fn degree_counts_incident_edges() {
    let nodes = [(0, 0), (0, 2), (2, 0), (2, 2)];
    let mut graph = UnGraph::new(&nodes);

    graph.toggle_edge((0, 0), (0, 2));
    graph.toggle_edge((0, 0), (2, 0));

    assert_eq!(graph.degree(&(0, 0)), 2);
    assert_eq!(graph.degree(&(0, 2)), 1);
    assert_eq!(graph.degree(&(2, 2)), 0);
    assert_eq!(graph.order(), 4);
}

#[test]
fn clear_edges_keeps_the_node_set() {
    let nodes = [(0, 0), (0, 2)];
    let mut graph = UnGraph::new(&nodes);

    graph.toggle_edge((0, 0), (0, 2));
    graph.clear_edges();

    assert_eq!(graph.size(), 0);
    assert_eq!(graph.order(), 2);
    assert!(graph.edges().is_empty());
}

#[test]
fn connected_components_partition_nodes() {
    let nodes = [(0, 0), (0, 2), (0, 4), (2, 0), (4, 4)];
    let mut graph = UnGraph::new(&nodes);

    graph.toggle_edge((0, 0), (0, 2));
    graph.toggle_edge((0, 2), (0, 4));
    graph.toggle_edge((2, 0), (4, 4));

    let components: Vec<HashSet<_>> = graph
        .connected_components()
        .into_iter()
        .map(|c| c.into_iter().collect())
        .collect();

    assert_eq!(components.len(), 2);

    let chain: HashSet<_> = [(0, 0), (0, 2), (0, 4)].into_iter().collect();
    let pair: HashSet<_> = [(2, 0), (4, 4)].into_iter().collect();
    assert!(components.contains(&chain));
    assert!(components.contains(&pair));
}

#[test]
fn isolated_nodes_are_singleton_components() {
    let nodes = [(0, 0), (0, 2), (2, 2)];
    let mut graph = UnGraph::new(&nodes);
    graph.toggle_edge((0, 0), (0, 2));

    let components = graph.connected_components();
    assert_eq!(components.len(), 2);
    assert!(components.iter().any(|c| c == &vec![(2, 2)]));
}

#[test]
#[should_panic(expected = "node does not exist")]
fn toggling_an_unknown_node_panics() {
    let nodes = [(0, 0)];
    let mut graph = UnGraph::new(&nodes);
    graph.toggle_edge((0, 0), (9, 9));
}
