//! Five classical graph questions on small and medium graphs: Eulerian cycles, Hamiltonian
//! cycles, bipartiteness, 3-colourings and isomorphism.
//!
//! Graphs are [EditGraph](editgraph::EditGraph)s over arbitrary hashable vertex ids, built by hand,
//! from the named generators, or from edge lists via [io::EdgeListReader]. Undirected graphs store
//! every edge as two opposite arcs.
//!
//! ```rust
//! use graphclassics::prelude::*;
//!
//! let graph = EdgeListReader::new().read("A,B\nB,C\nC,A\n".as_bytes()).unwrap();
//! let tour = find_euler_cycle(&graph, &graph.arc_set(), false).unwrap();
//! assert_eq!(tour.len(), 4);
//! assert!(!is_bipartite(&graph));
//! assert_eq!(three_color(&graph).unwrap().colours().len(), 3);
//! ```
#![allow(non_snake_case)]

pub mod graph;
pub mod iterators;
pub mod editgraph;
pub mod colours;
pub mod algorithms;
pub mod io;
pub mod error;

pub use algorithms::{are_isomorphic, find_euler_cycle, find_hamiltonian_cycle, is_bipartite, three_color};

pub mod prelude {
    pub use crate::graph::*;
    pub use crate::editgraph::EditGraph;
    pub use crate::colours::{Colour, Side, VertexColouring};
    pub use crate::algorithms::*;
    pub use crate::algorithms::euler::EulerCycle;
    pub use crate::algorithms::hamilton::HamiltonCycle;
    pub use crate::algorithms::colouring::Colouring;
    pub use crate::algorithms::isomorphism::IsomorphismTest;
    pub use crate::io::{EdgeListReader, EdgeListWriter};
    pub use crate::error::GraphError;
}
