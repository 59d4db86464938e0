use std::iter;

use crate::graph::*;

pub trait HamiltonCycle<V> where V: VertexId {
    /// Searches for a cycle that visits every vertex exactly once and follows arc directions.
    /// The cycle is returned as a vertex sequence whose last entry repeats the first one.
    ///
    /// The search is exhaustive backtracking and takes exponential time in the worst case.
    /// Graphs with fewer than three vertices have no Hamiltonian cycle.
    fn hamiltonian_cycle(&self) -> Option<Vec<V>>;
}

impl<V, G> HamiltonCycle<V> for G where V: VertexId, G: Graph<V> {
    fn hamiltonian_cycle(&self) -> Option<Vec<V>> {
        let n = self.num_vertices();
        if n < 3 {
            tracing::debug!(vertices = n, "too few vertices for a Hamiltonian cycle");
            return None
        }

        // A vertex without out- or in-arcs can never lie on a cycle.
        let in_degs = self.in_degrees();
        if self.vertices().any(|u| self.degree(u) == 0 || in_degs.get(u).copied().unwrap_or(0) == 0) {
            tracing::debug!("graph has a source or sink, no Hamiltonian cycle");
            return None
        }

        for start in self.vertices() {
            tracing::trace!(?start, "starting Hamiltonian search");
            if let Some(cycle) = cycle_from(self, start, n) {
                tracing::debug!(vertices = n, "found Hamiltonian cycle");
                return Some(cycle)
            }
        }

        tracing::debug!(vertices = n, "no Hamiltonian cycle");
        None
    }
}

/// Backtracking search for a Hamiltonian cycle through `start`. The frame at depth `i`
/// holds the unexplored out-neighbours of `path[i]`, so popping it also retracts `path[i]`.
fn cycle_from<'a, V, G>(graph:&'a G, start:&'a V, n:usize) -> Option<Vec<V>> where V: VertexId, G: Graph<V> {
    let mut path:Vec<&'a V> = vec![start];
    let mut on_path:VertexSet<&'a V> = VertexSet::default();
    on_path.insert(start);

    let mut frames:Vec<Box<dyn Iterator<Item=&'a V> + 'a>> = vec![graph.neighbours(start)];
    while let Some(frame) = frames.last_mut() {
        match frame.find(|v| !on_path.contains(v)) {
            Some(v) => {
                if path.len() + 1 == n {
                    if graph.adjacent(v, start) {
                        return Some(path.iter().chain(iter::once(&v)).chain(iter::once(&start))
                                        .map(|u| (*u).clone())
                                        .collect())
                    }
                    // Full path that does not close, try the next candidate
                    continue
                }
                path.push(v);
                on_path.insert(v);
                frames.push(graph.neighbours(v));
            }
            None => {
                frames.pop();
                if let Some(u) = path.pop() {
                    on_path.remove(u);
                }
            }
        }
    }

    None
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
