//! The five classic graph problems, plus connected components.
//!
//! Every algorithm is available as a method on any [Graph] through one of the blanket-implemented
//! traits below, and as a free function that takes the graph explicitly.
//!
//! ```rust
//! use graphclassics::prelude::*;
//!
//! let graph = EditGraph::cycle(6);
//! assert!(is_bipartite(&graph));
//! assert_eq!(find_hamiltonian_cycle(&graph).map(|c| c.len()), Some(7));
//! assert!(!are_isomorphic(&graph, &EditGraph::cycle(3).disj_union(&EditGraph::cycle(3)), false));
//! ```
use union_find_rs::prelude::*;

use crate::graph::*;

pub mod euler;
pub mod hamilton;
pub mod colouring;
pub mod isomorphism;

use crate::colours::{Colour, VertexColouring};
use euler::EulerCycle;
use hamilton::HamiltonCycle;
use colouring::Colouring;
use isomorphism::IsomorphismTest;

pub trait GraphAlgorithms<V> where V: VertexId {
    /// Computes the weakly connected components, i.e. arc directions are ignored.
    fn components(&self) -> Vec<VertexSet<V>>;
}

impl<V, G> GraphAlgorithms<V> for G where V: VertexId, G: Graph<V> {

    #[allow(unused_must_use)]
    fn components(&self) -> Vec<VertexSet<V>> {
        // Union-find works on copyable keys, so vertices are indexed first.
        let index:Vec<&V> = self.vertices().collect();
        let position:VertexMap<&V, usize> = index.iter().enumerate().map(|(i,v)| (*v,i)).collect();

        let mut dsets:DisjointSets<usize> = DisjointSets::new();
        for i in 0..index.len() {
            // This returns a Result<()> but the potential 'error' (adding
            // an element that already exists) will not happen.
            dsets.make_set(i);
        }

        for (u,v) in self.arcs() {
            // Joining two already joined elements is not an error for us.
            dsets.union(&position[u], &position[v]);
        }

        let mut res = Vec::new();
        for comp in dsets {
            res.push(comp.iter().map(|i| index[*i].clone()).collect())
        }
        res
    }
}

/// Returns a closed walk that traverses every edge exactly once, or `None` if none exists.
///
/// `edge_traversals` holds every directed traversal of the graph, that is both arcs
/// of an undirected edge (see [Graph::arc_set]). A graph without edges yields the
/// empty walk.
pub fn find_euler_cycle<V, G>(graph:&G, edge_traversals:&EdgeSet<V>, directed:bool) -> Option<Vec<V>>
    where V: VertexId, G: Graph<V>
{
    graph.euler_cycle_checked(edge_traversals.len(), directed)
}

/// Returns a cycle through every vertex, closed by repeating the first vertex at the end,
/// or `None` if the graph has none. Graphs with fewer than three vertices have none.
pub fn find_hamiltonian_cycle<V, G>(graph:&G) -> Option<Vec<V>> where V: VertexId, G: Graph<V> {
    graph.hamiltonian_cycle()
}

/// Tests whether the underlying undirected graph is bipartite.
pub fn is_bipartite<V, G>(graph:&G) -> bool where V: VertexId, G: Graph<V> {
    graph.is_bipartite()
}

/// Returns a proper colouring of the underlying undirected graph with red, blue and green,
/// or `None` if no such colouring exists.
pub fn three_color<V, G>(graph:&G) -> Option<VertexColouring<V, Colour>> where V: VertexId, G: Graph<V> {
    graph.three_colouring()
}

/// Exact isomorphism test with the default pre-filters, see [IsomorphismTest].
pub fn are_isomorphic<V, W, G, H>(graph_a:&G, graph_b:&H, directed:bool) -> bool
    where V: VertexId, W: VertexId, G: Graph<V>, H: Graph<W>
{
    IsomorphismTest::new(directed).test(graph_a, graph_b)
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
