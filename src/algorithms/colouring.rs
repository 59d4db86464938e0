use std::collections::VecDeque;

use crate::colours::{Colour, Side, VertexColouring};
use crate::graph::*;

/// Proper vertex colourings of the underlying undirected graph: an arc in either
/// direction forbids equal colours on its endpoints.
pub trait Colouring<V> where V: VertexId {
    /// Returns a 2-colouring witnessing that the graph is bipartite, or `None`.
    fn bipartition(&self) -> Option<VertexColouring<V, Side>>;

    fn is_bipartite(&self) -> bool {
        self.bipartition().is_some()
    }

    /// Backtracking search for a proper colouring with [Colour::ALL], or `None` if the
    /// graph is not 3-colourable. Takes exponential time in the worst case.
    fn three_colouring(&self) -> Option<VertexColouring<V, Colour>>;
}

impl<V, G> Colouring<V> for G where V: VertexId, G: Graph<V> {
    fn bipartition(&self) -> Option<VertexColouring<V, Side>> {
        let adj = self.symmetric_adjacency();
        let mut colouring = VertexColouring::default();
        let mut queue = VecDeque::new();

        // One BFS per component
        for seed in self.vertices() {
            if colouring.contains(seed) {
                continue
            }
            colouring.insert(seed.clone(), Side::Left);
            queue.push_back(seed);

            while let Some(u) = queue.pop_front() {
                let side = colouring[u];
                for v in &adj[u] {
                    match colouring.get(v) {
                        None => {
                            colouring.insert(v.clone(), side.opposite());
                            queue.push_back(v);
                        },
                        Some(other) if other == side => {
                            tracing::debug!(?u, ?v, "odd cycle found, graph is not bipartite");
                            return None
                        },
                        Some(_) => {}
                    }
                }
            }
        }

        tracing::debug!(vertices = colouring.len(), "graph is bipartite");
        Some(colouring)
    }

    fn three_colouring(&self) -> Option<VertexColouring<V, Colour>> {
        if let Some((u,_)) = self.arcs().find(|(u,v)| u == v) {
            tracing::debug!(vertex = ?u, "self-loop, no proper colouring");
            return None
        }

        let adj = self.symmetric_adjacency();

        let order:Vec<&V> = self.vertices().collect();
        let n = order.len();
        let mut colouring = VertexColouring::default();

        // next[i] is the index into Colour::ALL that vertex order[i] tries next.
        // Only the first `depth + 1` entries are meaningful.
        let mut next = vec![0; n];
        let mut depth = 0;
        let mut backtracks = 0usize;
        while depth < n {
            let u = order[depth];
            colouring.remove(u);

            let free = (next[depth]..Colour::ALL.len()).find(|&c| {
                adj[u].iter().all(|v| colouring.get(v) != Some(Colour::ALL[c]))
            });

            match free {
                Some(c) => {
                    colouring.insert(u.clone(), Colour::ALL[c]);
                    next[depth] = c + 1;
                    depth += 1;
                    if depth < n {
                        next[depth] = 0;
                    }
                },
                None => {
                    if depth == 0 {
                        tracing::debug!(vertices = n, backtracks, "graph is not 3-colourable");
                        return None
                    }
                    depth -= 1;
                    backtracks += 1;
                }
            }
        }

        tracing::debug!(vertices = n, backtracks, "found 3-colouring");
        Some(colouring)
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
