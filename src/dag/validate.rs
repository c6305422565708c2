// src/dag/validate.rs

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, warn};

use crate::dag::graph::TaskGraph;
use crate::errors::{Result, RunsheetError};

/// Reject a graph containing any dependency cycle, self-loops included.
pub fn validate_acyclic(graph: &TaskGraph) -> Result<()> {
    let edges: Vec<(usize, usize)> = graph.edges().collect();

    match find_cycle(graph.len(), &edges) {
        None => Ok(()),
        Some(component) => {
            let mut tasks: Vec<String> = component
                .into_iter()
                .map(|i| graph.task(i).id.clone())
                .collect();
            tasks.sort();
            warn!(?tasks, "dependency loop detected");
            Err(RunsheetError::DependencyCycle { tasks })
        }
    }
}

/// Strongly connected components over `node_count` nodes and the given
/// `(from, to)` edges. Returns the node indices of the first component that
/// forms a cycle: more than one node, or a single node with an edge to
/// itself.
///
/// Edges naming a node `>= node_count` are ignored.
pub fn find_cycle(node_count: usize, edges: &[(usize, usize)]) -> Option<Vec<usize>> {
    let mut graph: DiGraph<(), ()> = DiGraph::with_capacity(node_count, edges.len());
    for _ in 0..node_count {
        graph.add_node(());
    }
    for &(from, to) in edges {
        if from >= node_count || to >= node_count {
            debug!(from, to, node_count, "ignoring edge outside the graph");
            continue;
        }
        graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
    }

    tarjan_scc(&graph)
        .into_iter()
        .find(|scc| match scc.as_slice() {
            [single] => graph.contains_edge(*single, *single),
            nodes => nodes.len() > 1,
        })
        .map(|scc| scc.into_iter().map(NodeIndex::index).collect())
}
