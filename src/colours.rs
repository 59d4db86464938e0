use std::fmt;
use std::hash::Hash;
use std::ops::Index;

use fxhash::{FxHashMap, FxHashSet};

use crate::graph::*;

/// The two sides of a bipartition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// The three-colour palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Colour {
    Red,
    Blue,
    Green
}

impl Colour {
    /// All colours in the order the colouring search tries them.
    pub const ALL: [Colour; 3] = [Colour::Red, Colour::Blue, Colour::Green];
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Colour::Red => write!(f, "red"),
            Colour::Blue => write!(f, "blue"),
            Colour::Green => write!(f, "green"),
        }
    }
}

/// An assignment of colours from the palette `C` to vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexColouring<V, C> where V: VertexId, C: Copy + Eq + Hash {
    colours: VertexMap<V, C>
}

impl<V, C> Default for VertexColouring<V, C> where V: VertexId, C: Copy + Eq + Hash {
    fn default() -> Self {
        VertexColouring { colours: VertexMap::default() }
    }
}

impl<V, C> VertexColouring<V, C> where V: VertexId, C: Copy + Eq + Hash {
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn contains(&self, u:&V) -> bool {
        self.colours.contains_key(u)
    }

    pub fn get(&self, u:&V) -> Option<C> {
        self.colours.get(u).copied()
    }

    pub(crate) fn insert(&mut self, u:V, colour:C) -> Option<C> {
        self.colours.insert(u, colour)
    }

    pub(crate) fn remove(&mut self, u:&V) -> Option<C> {
        self.colours.remove(u)
    }

    pub fn iter(&self) -> impl Iterator<Item=(&V, &C)> {
        self.colours.iter()
    }

    /// The distinct colours in use.
    pub fn colours(&self) -> FxHashSet<C> {
        self.colours.values().copied().collect()
    }

    /// Returns the colour classes.
    pub fn invert(&self) -> FxHashMap<C, VertexSet<V>> {
        let mut res:FxHashMap<C, VertexSet<V>> = FxHashMap::default();
        for (v, c) in self.colours.iter() {
            res.entry(*c).or_default().insert(v.clone());
        }
        res
    }

    /// Checks that every vertex of `graph` is coloured and that no arc joins two
    /// vertices of the same colour. A self-loop always violates this.
    pub fn is_proper<G>(&self, graph:&G) -> bool where G: Graph<V> {
        if !graph.vertices().all(|u| self.contains(u)) {
            return false
        }
        graph.arcs().all(|(u,v)| self.get(u) != self.get(v))
    }
}

impl<V, C> Index<&V> for VertexColouring<V, C> where V: VertexId, C: Copy + Eq + Hash {
    type Output = C;

    fn index(&self, u:&V) -> &C {
        &self.colours[u]
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
