use crate::graph::*;

/// Eulerian cycles via Hierholzer's algorithm.
pub trait EulerCycle<V> where V: VertexId {
    /// Computes a closed walk that traverses every edge exactly once. The expected number of
    /// traversals is taken from the graph itself, see [EulerCycle::euler_cycle_checked].
    fn euler_cycle(&self, directed:bool) -> Option<Vec<V>>;

    /// Computes a closed walk that traverses every edge exactly once, where `traversals` is the
    /// number of arcs the walk must use (both arcs of an undirected edge count).
    ///
    /// If `directed` is false the graph must be symmetric; the walk then uses each edge $uv$ once
    /// in one of its two directions and has `traversals / 2` steps. Returns the walk as a vertex
    /// sequence starting and ending at the same vertex, an empty sequence if there are no edges,
    /// and `None` if no Eulerian cycle exists.
    fn euler_cycle_checked(&self, traversals:usize, directed:bool) -> Option<Vec<V>>;
}

impl<V, G> EulerCycle<V> for G where V: VertexId, G: Graph<V> {
    fn euler_cycle(&self, directed:bool) -> Option<Vec<V>> {
        self.euler_cycle_checked(self.num_arcs(), directed)
    }

    fn euler_cycle_checked(&self, traversals:usize, directed:bool) -> Option<Vec<V>> {
        if traversals == 0 {
            tracing::debug!("no edges, returning the trivial cycle");
            return Some(Vec::new())
        }

        if directed {
            let in_degs = self.in_degrees();
            if let Some(u) = self.vertices().find(|u| in_degs.get(*u).copied().unwrap_or(0) != self.degree(u)) {
                tracing::debug!(vertex = ?u, "in-degree differs from out-degree, no Eulerian cycle");
                return None
            }
        } else if let Some(u) = self.vertices().find(|u| self.degree(u) % 2 != 0) {
            tracing::debug!(vertex = ?u, "odd degree, no Eulerian cycle");
            return None
        }

        let start = match self.vertices().find(|u| self.degree(u) > 0) {
            Some(u) => u.clone(),
            None => {
                tracing::debug!("graph has no arcs, returning the trivial cycle");
                return Some(Vec::new())
            }
        };

        // Consumed arcs are removed from this copy, never from the graph.
        let mut adj:VertexMap<V, VertexSet<V>> = self.vertices()
                .map(|u| (u.clone(), self.neighbours(u).cloned().collect()))
                .collect();

        // `stack` is the walk under construction, `circuit` collects vertices
        // in reverse order once all their arcs are used up.
        let mut stack = vec![start];
        let mut circuit = Vec::with_capacity(traversals + 1);
        while let Some(u) = stack.last() {
            let next = adj.get(u).and_then(|N| N.iter().next().cloned());
            match next {
                Some(v) => {
                    let u = u.clone();
                    if let Some(N) = adj.get_mut(&u) {
                        N.remove(&v);
                    }
                    if !directed {
                        if let Some(N) = adj.get_mut(&v) {
                            N.remove(&u);
                        }
                    }
                    stack.push(v);
                }
                None => {
                    if let Some(u) = stack.pop() {
                        circuit.push(u);
                    }
                }
            }
        }
        circuit.reverse();

        // Parity and balance do not imply connectivity: if some edges were
        // not reached the walk is too short.
        let steps = circuit.len() - 1;
        let covered = if directed { steps == traversals } else { 2*steps == traversals };
        if !covered {
            tracing::debug!(steps, traversals, "walk misses edges, graph is disconnected");
            return None
        }

        tracing::debug!(steps, "found Eulerian cycle");
        Some(circuit)
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
