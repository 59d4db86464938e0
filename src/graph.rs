//! The shared graph abstraction every algorithm in this crate is written against.
//!
//! A graph is a set of vertices together with a set of *arcs* (ordered pairs). Undirected graphs
//! are stored as directed graphs whose arcs come in symmetric pairs $u \to v$, $v \to u$; the
//! [MutableGraph::add_edge] helper inserts both. The traits do not enforce symmetry, each
//! algorithm documents what it expects.
use fxhash::{FxHashMap, FxHashSet};

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use crate::iterators::ArcIterator;

/// Vertex identifiers are opaque: anything hashable and cloneable works, typically
/// strings read from an edge list or integers from the generators.
pub trait VertexId: Hash + Eq + Clone + Debug {}
impl<T> VertexId for T where T: Hash + Eq + Clone + Debug {}

pub type Arc<V> = (V, V);
pub type VertexSet<V> = FxHashSet<V>;
pub type VertexMap<V, T> = FxHashMap<V, T>;
pub type EdgeSet<V> = FxHashSet<Arc<V>>;

pub trait Graph<V> where V: VertexId {
    fn num_vertices(&self) -> usize;

    /// Number of stored arcs. An undirected edge counts twice.
    fn num_arcs(&self) -> usize;

    fn contains(&self, u:&V) -> bool;

    /// Returns whether the arc $u \to v$ exists.
    fn adjacent(&self, u:&V, v:&V) -> bool;

    /// The out-degree of `u`, zero for unknown vertices.
    fn degree(&self, u:&V) -> usize;

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a V> + 'a>;

    /// Out-neighbours of `u`. Yields nothing for unknown vertices.
    fn neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&'a V> + 'a>;

    fn len(&self) -> usize {
        self.num_vertices()
    }

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    /// Iterates over every stored arc exactly once.
    fn arcs(&self) -> ArcIterator<'_, V, Self> {
        ArcIterator::new(self)
    }

    /// Collects all arcs into an [EdgeSet], the edge-traversal multiset used by the
    /// Eulerian cycle search.
    fn arc_set(&self) -> EdgeSet<V> {
        self.arcs().map(|(u,v)| (u.clone(), v.clone())).collect()
    }

    fn in_degrees(&self) -> VertexMap<V, usize> {
        let mut res:VertexMap<V, usize> = self.vertices().map(|v| (v.clone(), 0)).collect();
        for (_, v) in self.arcs() {
            *res.entry(v.clone()).or_insert(0) += 1;
        }
        res
    }

    /// Returns `true` if every arc has its reverse, e.g. the graph is a valid
    /// encoding of an undirected graph.
    fn is_symmetric(&self) -> bool {
        self.arcs().all(|(u,v)| self.adjacent(v, u))
    }

    /// Computes the underlying undirected adjacency: $v$ is a neighbour of $u$ if
    /// either $u \to v$ or $v \to u$ is an arc. Every vertex has an entry.
    fn symmetric_adjacency(&self) -> VertexMap<V, VertexSet<V>> {
        let mut res:VertexMap<V, VertexSet<V>> = self.vertices()
                .map(|v| (v.clone(), VertexSet::default()))
                .collect();

        for (u,v) in self.arcs() {
            res.entry(u.clone()).or_default().insert(v.clone());
            res.entry(v.clone()).or_default().insert(u.clone());
        }
        res
    }
}

pub trait MutableGraph<V>: Graph<V> where V: VertexId {
    fn new() -> Self;
    fn with_capacity(n_guess:usize) -> Self;

    fn add_vertex(&mut self, u:&V) -> bool;
    fn remove_vertex(&mut self, u:&V) -> bool;

    /// Adds the arc $u \to v$, inserting missing endpoints. Returns `false` if
    /// the arc already existed.
    fn add_arc(&mut self, u:&V, v:&V) -> bool;
    fn remove_arc(&mut self, u:&V, v:&V) -> bool;

    /// Adds the undirected edge $uv$ as the arc pair $u \to v$, $v \to u$.
    fn add_edge(&mut self, u:&V, v:&V) -> bool {
        let forward = self.add_arc(u, v);
        let backward = self.add_arc(v, u);
        forward || backward
    }

    fn remove_edge(&mut self, u:&V, v:&V) -> bool {
        let forward = self.remove_arc(u, v);
        let backward = self.remove_arc(v, u);
        forward || backward
    }

    fn add_vertices<B, I>(&mut self, vertices:I) where B: Borrow<V>, I: IntoIterator<Item=B> {
        for u in vertices {
            self.add_vertex(u.borrow());
        }
    }

    fn add_arcs<I>(&mut self, arcs:I) where I: IntoIterator<Item=Arc<V>> {
        for (u,v) in arcs {
            self.add_arc(&u, &v);
        }
    }

    fn add_edges<I>(&mut self, edges:I) where I: IntoIterator<Item=Arc<V>> {
        for (u,v) in edges {
            self.add_edge(&u, &v);
        }
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
