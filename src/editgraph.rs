//!
//! The graph data structure consumed by all algorithms of this crate. It stores, for every vertex,
//! the hash set of its out-neighbours, so adjacency queries run in $O(1)$ expected time.
//!
//! Directed graphs are built arc by arc, undirected graphs edge by edge; an undirected edge is
//! stored as two opposite arcs. Graphs can be read from edge lists (see [`graphclassics::io`](crate::io))
//! or assembled by hand. A few constructors for named graphs exist for vertices of type `u32`:
//!
//! ```rust
//! use graphclassics::graph::*;
//! use graphclassics::editgraph::EditGraph;
//!
//! let graph = EditGraph::cycle(4);
//! assert_eq!(graph.num_vertices(), 4);
//! assert_eq!(graph.num_arcs(), 8);
//! assert!(graph.is_symmetric());
//!
//! let graph = EditGraph::directed_cycle(4);
//! assert_eq!(graph.num_arcs(), 4);
//! assert!(graph.adjacent(&3, &0));
//! assert!(!graph.adjacent(&0, &3));
//! ```
//!
//! Any hashable type works as a vertex identifier:
//!
//! ```rust
//! use graphclassics::graph::*;
//! use graphclassics::editgraph::EditGraph;
//!
//! let mut graph = EditGraph::new();
//! graph.add_edge(&"kyiv", &"lviv");
//! graph.add_arc(&"lviv", &"odesa");
//! graph.add_vertex(&"dnipro");
//!
//! assert_eq!(graph.num_vertices(), 4);
//! assert_eq!(graph.degree(&"lviv"), 2);
//! assert_eq!(graph.degree(&"dnipro"), 0);
//! ```
use fxhash::FxHashMap;
use itertools::Itertools;

use crate::graph::*;

/// An implementation of the [MutableGraph] trait with additional convenient editing and generating functions.
#[derive(Debug)]
pub struct EditGraph<V> where V: VertexId {
    adj: FxHashMap<V, VertexSet<V>>,
    m: usize
}

impl<V> PartialEq for EditGraph<V> where V: VertexId {
    fn eq(&self, other: &Self) -> bool {
        if self.num_vertices() != other.num_vertices() {
            return false
        }
        if self.num_arcs() != other.num_arcs() {
            return false
        }
        self.adj == other.adj
    }
}
impl<V> Eq for EditGraph<V> where V: VertexId {}

impl<V> Clone for EditGraph<V> where V: VertexId {
    fn clone(&self) -> EditGraph<V> {
        EditGraph { adj: self.adj.clone(), m: self.m }
    }
}

impl<V> Default for EditGraph<V> where V: VertexId {
    fn default() -> Self {
        EditGraph::new()
    }
}

impl<V> Graph<V> for EditGraph<V> where V: VertexId {
    /*
        Basic properties and queries
    */
    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_arcs(&self) -> usize {
        self.m
    }

    fn adjacent(&self, u:&V, v:&V) -> bool {
        match self.adj.get(u) {
            Some(N) => N.contains(v),
            _ => false
        }
    }

    fn degree(&self, u:&V) -> usize {
        self.adj.get(u).map_or(0, |N| N.len())
    }

    /*
        Iteration and access
    */
    fn contains(&self, u:&V) -> bool {
        self.adj.contains_key(u)
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a V> + 'a> {
        Box::new(self.adj.keys())
    }

    fn neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&'a V> + 'a> {
        match self.adj.get(u) {
            Some(N) => Box::new(N.iter()),
            None => Box::new(std::iter::empty())
        }
    }
}

impl<V> MutableGraph<V> for EditGraph<V> where V: VertexId {
    fn new() -> EditGraph<V> {
        EditGraph{ adj: FxHashMap::default(), m: 0 }
    }

    fn with_capacity(n_guess:usize) -> Self {
        EditGraph {
            adj: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
            m: 0
        }
    }

    fn add_vertex(&mut self, u:&V) -> bool {
        if !self.adj.contains_key(u) {
            self.adj.insert(u.clone(), VertexSet::default());
            true
        } else {
            false
        }
    }

    fn add_arc(&mut self, u:&V, v:&V) -> bool {
        self.add_vertex(u);
        self.add_vertex(v);
        let inserted = self.adj.get_mut(u).map_or(false, |N| N.insert(v.clone()));
        if inserted {
            self.m += 1;
        }
        inserted
    }

    fn remove_arc(&mut self, u:&V, v:&V) -> bool {
        let removed = self.adj.get_mut(u).map_or(false, |N| N.remove(v));
        if removed {
            self.m -= 1;
        }
        removed
    }

    fn remove_vertex(&mut self, u:&V) -> bool {
        match self.adj.remove(u) {
            None => false,
            Some(N) => {
                self.m -= N.len();
                for (_, M) in self.adj.iter_mut() {
                    if M.remove(u) {
                        self.m -= 1;
                    }
                }
                true
            }
        }
    }
}

impl<V> FromIterator<Arc<V>> for EditGraph<V> where V: VertexId {
    /// Collects *arcs*, i.e. the resulting graph is directed. Use
    /// [EditGraph::from_edges] for undirected input.
    fn from_iter<T: IntoIterator<Item = Arc<V>>>(iter: T) -> Self {
        let mut res = EditGraph::new();
        res.add_arcs(iter);
        res
    }
}

impl<V> EditGraph<V> where V: VertexId {
    /// Builds an undirected graph, storing every edge in both directions.
    pub fn from_edges<I>(edges:I) -> EditGraph<V> where I: IntoIterator<Item=Arc<V>> {
        let mut res = EditGraph::new();
        res.add_edges(edges);
        res
    }

    /// Creates a copy of this graph in which every vertex `u` is renamed to `f(u)`.
    /// The function must be injective on the vertex set, otherwise vertices are merged.
    pub fn relabel<W, F>(&self, f:F) -> EditGraph<W> where W: VertexId, F: Fn(&V) -> W {
        let mut res = EditGraph::with_capacity(self.num_vertices());
        for u in self.vertices() {
            res.add_vertex(&f(u));
        }
        for (u,v) in self.arcs() {
            res.add_arc(&f(u), &f(v));
        }
        res
    }
}

impl EditGraph<u32> {
    /// Generates a path on `n` vertices.
    pub fn path(n:u32) -> EditGraph<u32> {
        let mut res = EditGraph::with_capacity(n as usize);
        res.add_vertices(0..n);
        for u in 1..n {
            res.add_edge(&(u-1), &u);
        }

        res
    }

    /// Generates a cycle on `n` vertices. There is no simple cycle on fewer than
    /// three vertices, for those this is the path on `n` vertices.
    pub fn cycle(n:u32) -> EditGraph<u32> {
        if n < 3 {
            return EditGraph::path(n)
        }
        let mut res = EditGraph::with_capacity(n as usize);
        for u in 0..n {
            let v = (u+1) % n;
            res.add_edge(&u,&v);
        }

        res
    }

    /// Generates a directed cycle $0 \to 1 \to \dots \to n-1 \to 0$. For `n == 1` this
    /// is a single self-loop and for `n == 2` a pair of opposite arcs.
    pub fn directed_cycle(n:u32) -> EditGraph<u32> {
        let mut res = EditGraph::with_capacity(n as usize);
        for u in 0..n {
            let v = (u+1) % n;
            res.add_arc(&u,&v);
        }

        res
    }

    /// Generates a matching on `2n` vertices.
    pub fn matching(n:u32) -> EditGraph<u32> {
        let mut res = EditGraph::with_capacity(2*n as usize);
        for u in 0..n {
            let v = u+n;
            res.add_edge(&u,&v);
        }

        res
    }

    /// Generates a star with `n` leaves, so `n+1` vertices total.
    pub fn star(n:u32) -> EditGraph<u32> {
        EditGraph::biclique(1, n)
    }

    /// Generates a complete graph (clique) on `n` vertices.
    pub fn clique(n:u32) -> EditGraph<u32> {
        let mut res = EditGraph::with_capacity(n as usize);
        res.add_vertices(0..n);
        for (u,v) in (0..n).tuple_combinations() {
            res.add_edge(&u,&v);
        }

        res
    }

    /// Generates a complete bipartite graph (biclique) on `s`+`t` vertices.
    pub fn biclique(s:u32, t:u32) -> EditGraph<u32> {
        let mut res = EditGraph::with_capacity((s+t) as usize);
        res.add_vertices(0..(s+t));
        for u in 0..s {
            for v in s..(s+t) {
                res.add_edge(&u,&v);
            }
        }

        res
    }

    /// Generates an edgeless graph on `n` vertices.
    pub fn independent(n:u32) -> EditGraph<u32> {
        let mut res = EditGraph::with_capacity(n as usize);
        res.add_vertices(0..n);
        res
    }

    /// Creates a new graph that is the disjoint union of `self` and `graph`.
    /// The vertices of the second graph are relabelled to avoid index clashes.
    pub fn disj_union(&self, graph: &EditGraph<u32>) -> EditGraph<u32> {
        let offset:u32 = self.vertices().max().map(|x| x+1).unwrap_or(0);

        let mut res = self.clone();
        res.add_vertices(graph.vertices().map(|v| v+offset));
        res.add_arcs(graph.arcs().map(|(u,v)| (u+offset, v+offset)));

        res
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
