//! Exact graph isomorphism by backtracking over vertex mappings.
//!
//! Before the search starts, a few invariants are compared: vertex and arc counts, the degree
//! sequences and (unless disabled) the component sizes and a colour-refinement signature. These
//! checks can only reject. Colour refinement alone would be wrong as a decision procedure, it
//! cannot tell a 6-cycle from two disjoint triangles, so a positive answer always comes from an
//! explicit vertex bijection.
//!
//! ```rust
//! use graphclassics::prelude::*;
//!
//! let a = EditGraph::from_edges([("a","b"),("b","c")]);
//! let b = EditGraph::from_edges([(10,20),(20,30)]);
//!
//! let mapping = IsomorphismTest::new(false).find_mapping(&a, &b).unwrap();
//! assert_eq!(mapping[&"b"], 20);
//! ```
use fxhash::FxHashMap;
use itertools::Itertools;

use crate::algorithms::GraphAlgorithms;
use crate::graph::*;

/// Degree signature of a vertex: out-degree and, for directed graphs, in-degree.
type Signature = (usize, usize);

/// Configures an isomorphism test. The defaults (undirected, three rounds of colour
/// refinement, pre-filters enabled) are what [are_isomorphic](crate::algorithms::are_isomorphic) uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsomorphismTest {
    directed: bool,
    refinement_rounds: usize,
    prefilter: bool,
}

impl Default for IsomorphismTest {
    fn default() -> Self {
        IsomorphismTest::new(false)
    }
}

impl IsomorphismTest {
    /// For undirected graphs both inputs must be symmetric. Arc directions then carry no
    /// extra information and only out-degrees are compared.
    pub fn new(directed:bool) -> Self {
        IsomorphismTest { directed, refinement_rounds: 3, prefilter: true }
    }

    /// Number of colour-refinement rounds in the pre-filter, 0 switches it off.
    pub fn refinement_rounds(mut self, rounds:usize) -> Self {
        self.refinement_rounds = rounds;
        self
    }

    /// Enables or disables the component-size and colour-refinement pre-filters.
    /// Count and degree checks always run.
    pub fn prefilter(mut self, enabled:bool) -> Self {
        self.prefilter = enabled;
        self
    }

    pub fn test<V, W, G, H>(&self, graph_a:&G, graph_b:&H) -> bool
        where V: VertexId, W: VertexId, G: Graph<V>, H: Graph<W>
    {
        self.find_mapping(graph_a, graph_b).is_some()
    }

    /// Returns a bijection $f$ from the vertices of `graph_a` to those of `graph_b` such
    /// that $u \to x$ is an arc of A if and only if $f(u) \to f(x)$ is an arc of B, or
    /// `None` if the graphs are not isomorphic.
    pub fn find_mapping<V, W, G, H>(&self, graph_a:&G, graph_b:&H) -> Option<VertexMap<V, W>>
        where V: VertexId, W: VertexId, G: Graph<V>, H: Graph<W>
    {
        let n = graph_a.num_vertices();
        if n != graph_b.num_vertices() || graph_a.num_arcs() != graph_b.num_arcs() {
            tracing::debug!("vertex or arc counts differ");
            return None
        }

        let sig_a = self.degree_signatures(graph_a);
        let sig_b = self.degree_signatures(graph_b);
        if sig_a.values().sorted().ne(sig_b.values().sorted()) {
            tracing::debug!("degree sequences differ");
            return None
        }

        if self.prefilter {
            let sizes_a = graph_a.components().iter().map(|c| c.len()).sorted().collect_vec();
            let sizes_b = graph_b.components().iter().map(|c| c.len()).sorted().collect_vec();
            if sizes_a != sizes_b {
                tracing::debug!(?sizes_a, ?sizes_b, "component sizes differ");
                return None
            }

            if self.refinement_rounds > 0
                && refinement_signature(graph_a, self.refinement_rounds) != refinement_signature(graph_b, self.refinement_rounds) {
                tracing::debug!(rounds = self.refinement_rounds, "colour refinement tells the graphs apart");
                return None
            }
        }

        if n == 0 {
            return Some(VertexMap::default())
        }

        let adj_a = graph_a.symmetric_adjacency();
        let adj_b = graph_b.symmetric_adjacency();
        let (order, parent) = connectivity_order(&adj_a, &sig_a);

        let mut by_signature:FxHashMap<Signature, Vec<&W>> = FxHashMap::default();
        for v in graph_b.vertices() {
            by_signature.entry(sig_b[v]).or_default().push(v);
        }

        // The frame at depth i holds the untried images of order[i]; mapping[i]
        // is the pair committed at that depth. If order[i] has an earlier neighbour,
        // its image must be a neighbour of that neighbour's image.
        let mut mapping:Vec<(&V, &W)> = Vec::with_capacity(n);
        let mut used:VertexSet<&W> = VertexSet::default();
        let mut frames = vec![by_signature.get(&sig_a[order[0]]).cloned().unwrap_or_default().into_iter()];
        let mut backtracks = 0usize;

        while let Some(frame) = frames.last_mut() {
            let u = order[mapping.len()];
            let next = frame.find(|v| {
                let v:&W = v;
                !used.contains(v) && self.compatible(graph_a, graph_b, u, v, &mapping[..])
            });

            match next {
                Some(v) => {
                    mapping.push((u, v));
                    used.insert(v);
                    if mapping.len() == n {
                        tracing::debug!(vertices = n, backtracks, "found isomorphism");
                        return Some(mapping.into_iter().map(|(u,v)| (u.clone(), v.clone())).collect())
                    }
                    let depth = mapping.len();
                    let u = order[depth];
                    let candidates:Vec<&W> = match parent[depth] {
                        Some(p) => adj_b[mapping[p].1].iter().filter(|v| sig_b[*v] == sig_a[u]).collect(),
                        None => by_signature.get(&sig_a[u]).cloned().unwrap_or_default()
                    };
                    frames.push(candidates.into_iter());
                }
                None => {
                    frames.pop();
                    if let Some((_, v)) = mapping.pop() {
                        used.remove(v);
                        backtracks += 1;
                    }
                }
            }
        }

        tracing::debug!(vertices = n, backtracks, "graphs are not isomorphic");
        None
    }

    fn degree_signatures<V, G>(&self, graph:&G) -> VertexMap<V, Signature> where V: VertexId, G: Graph<V> {
        if self.directed {
            let in_degs = graph.in_degrees();
            graph.vertices().map(|u| (u.clone(), (graph.degree(u), in_degs.get(u).copied().unwrap_or(0)))).collect()
        } else {
            graph.vertices().map(|u| (u.clone(), (graph.degree(u), 0))).collect()
        }
    }

    /// Checks whether `u -> v` can extend `mapping`: self-loops and the arcs to every
    /// already mapped vertex must agree.
    fn compatible<V, W, G, H>(&self, graph_a:&G, graph_b:&H, u:&V, v:&W, mapping:&[(&V, &W)]) -> bool
        where V: VertexId, W: VertexId, G: Graph<V>, H: Graph<W>
    {
        if graph_a.adjacent(u, u) != graph_b.adjacent(v, v) {
            return false
        }
        mapping.iter().all(|(x, y)| {
            graph_a.adjacent(u, x) == graph_b.adjacent(v, y)
                && (!self.directed || graph_a.adjacent(x, u) == graph_b.adjacent(y, v))
        })
    }
}

/// Orders the vertices so that each one has as many neighbours as possible among its
/// predecessors, ties going to the larger degree. Returns the order together with, for
/// every position, the position of an earlier neighbour if there is one.
fn connectivity_order<'a, V>(adj:&'a VertexMap<V, VertexSet<V>>, sig:&VertexMap<V, Signature>) -> (Vec<&'a V>, Vec<Option<usize>>)
    where V: VertexId
{
    let weight = |u:&V| sig[u].0 + sig[u].1;

    // Unplaced vertices with their number of placed neighbours
    let mut links:VertexMap<&'a V, usize> = adj.keys().map(|u| (u, 0)).collect();
    let mut position:VertexMap<&'a V, usize> = VertexMap::default();
    let mut order = Vec::with_capacity(adj.len());
    let mut parent = Vec::with_capacity(adj.len());

    loop {
        let next = links.iter()
                .map(|(u, k)| (*k, weight(*u), *u))
                .max_by_key(|(k, w, _)| (*k, *w))
                .map(|(_, _, u)| u);
        let u = match next {
            Some(u) => u,
            None => break
        };

        links.remove(u);
        parent.push(adj[u].iter().filter_map(|x| position.get(x).copied()).min());
        position.insert(u, order.len());
        order.push(u);
        for x in &adj[u] {
            if let Some(k) = links.get_mut(x) {
                *k += 1;
            }
        }
    }

    (order, parent)
}

/// Sorted vertex colours after `rounds` rounds of 1-dimensional Weisfeiler-Lehman refinement.
/// Vertices start out coloured by their out- and in-degree; each round hashes a vertex's colour
/// together with the sorted colours of its in- and out-neighbours. Isomorphic graphs always
/// receive the same signature.
pub(crate) fn refinement_signature<V, G>(graph:&G, rounds:usize) -> Vec<u64> where V: VertexId, G: Graph<V> {
    let mut incoming:VertexMap<&V, Vec<&V>> = graph.vertices().map(|u| (u, Vec::new())).collect();
    for (u,v) in graph.arcs() {
        incoming.entry(v).or_default().push(u);
    }

    let mut colours:VertexMap<&V, u64> = graph.vertices()
            .map(|u| (u, fxhash::hash64(&(graph.degree(u), incoming[u].len()))))
            .collect();

    for _ in 0..rounds {
        let refined:VertexMap<&V, u64> = graph.vertices().map(|u| {
            let in_colours = incoming[u].iter().map(|x| colours[x]).sorted().collect_vec();
            let out_colours = graph.neighbours(u).map(|x| colours[x]).sorted().collect_vec();
            (u, fxhash::hash64(&(colours[u], in_colours, out_colours)))
        }).collect();
        colours = refined;
    }

    colours.into_iter().map(|(_, c)| c).sorted().collect()
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;
    use crate::editgraph::EditGraph;

    fn assert_isomorphism<V, W>(graph_a:&EditGraph<V>, graph_b:&EditGraph<W>, mapping:&VertexMap<V, W>)
        where V: VertexId, W: VertexId
    {
        assert_eq!(mapping.len(), graph_a.num_vertices());
        let image:VertexSet<&W> = mapping.values().collect();
        assert_eq!(image.len(), graph_b.num_vertices());

        for (u, x) in graph_a.arcs() {
            assert!(graph_b.adjacent(&mapping[u], &mapping[x]), "arc {u:?} -> {x:?} is not preserved");
        }
        assert_eq!(graph_a.num_arcs(), graph_b.num_arcs());
    }

    #[test]
    fn cycle_versus_triangles() {
        let C6 = EditGraph::cycle(6);
        let C3 = EditGraph::cycle(3);
        let H = C3.disj_union(&C3);

        // Colour refinement cannot distinguish them, the search must
        assert_eq!(refinement_signature(&C6, 5), refinement_signature(&H, 5));

        for test in [IsomorphismTest::new(false), IsomorphismTest::new(false).prefilter(false)] {
            assert!(!test.test(&C6, &H));
            assert!(!test.test(&H, &C6));
            assert!(test.test(&C6, &C6));
            assert!(test.test(&H, &H));
        }
    }

    #[test]
    fn relabelled_copies() {
        let mut G = EditGraph::cycle(6);
        G.add_edge(&0, &3);
        let H = G.relabel(|u| format!("v{}", (u + 2) % 6));

        for test in [IsomorphismTest::new(false), IsomorphismTest::new(false).prefilter(false), IsomorphismTest::new(true)] {
            let mapping = test.find_mapping(&G, &H).unwrap();
            assert_isomorphism(&G, &H, &mapping);

            let back = test.find_mapping(&H, &G).unwrap();
            assert_isomorphism(&H, &G, &back);
        }
    }

    #[test]
    fn same_degrees_different_structure() {
        // Both are C6 plus one chord, but only the second contains a triangle
        let mut G = EditGraph::cycle(6);
        G.add_edge(&0, &3);
        let mut H = EditGraph::cycle(6);
        H.add_edge(&0, &2);

        assert!(!IsomorphismTest::new(false).test(&G, &H));
        assert!(!IsomorphismTest::new(false).prefilter(false).test(&G, &H));
        assert!(!IsomorphismTest::new(false).refinement_rounds(0).test(&G, &H));
    }

    #[test]
    fn directed_examples() {
        let test = IsomorphismTest::new(true);

        let A:EditGraph<&str> = [("a","b")].into_iter().collect();
        let B:EditGraph<u32> = [(1,2)].into_iter().collect();
        let mapping = test.find_mapping(&A, &B).unwrap();
        assert_eq!(mapping[&"a"], 1);
        assert_eq!(mapping[&"b"], 2);

        let chain:EditGraph<u32> = [(0,1),(1,2)].into_iter().collect();
        let collision:EditGraph<u32> = [(0,1),(2,1)].into_iter().collect();
        assert!(!test.test(&chain, &collision));

        let T1 = EditGraph::directed_cycle(3);
        let T2:EditGraph<u32> = [(10,20),(20,30),(30,10)].into_iter().collect();
        let mapping = test.find_mapping(&T1, &T2).unwrap();
        assert_isomorphism(&T1, &T2, &mapping);
    }

    #[test]
    fn direction_matters() {
        let test = IsomorphismTest::new(true);

        let forward:EditGraph<u32> = [(0,1),(1,2)].into_iter().collect();
        let backward:EditGraph<u32> = [(2,1),(1,0)].into_iter().collect();
        let mapping = test.find_mapping(&forward, &backward).unwrap();
        assert_eq!(mapping[&0], 2);

        let out_star:EditGraph<u32> = [(0,1),(0,2),(0,3)].into_iter().collect();
        let in_star:EditGraph<u32> = [(1,0),(2,0),(3,0)].into_iter().collect();
        assert!(!test.test(&out_star, &in_star));
        assert!(!test.prefilter(false).test(&out_star, &in_star));

        // Same degree sequences: a directed 4-cycle and two 2-cycles differ structurally.
        let C4 = EditGraph::directed_cycle(4);
        let mut D = EditGraph::new();
        D.add_arc(&0, &1);
        D.add_arc(&1, &0);
        D.add_arc(&2, &3);
        D.add_arc(&3, &2);
        assert!(!test.test(&C4, &D));
        assert!(!test.prefilter(false).test(&C4, &D));
    }

    #[test]
    fn self_loops() {
        let test = IsomorphismTest::new(true);

        let mut A = EditGraph::path(2);
        A.add_arc(&0, &0);
        let mut B = EditGraph::path(2);
        B.add_arc(&1, &1);

        let mapping = test.find_mapping(&A, &B).unwrap();
        assert_eq!(mapping[&0], 1);
        assert_eq!(mapping[&1], 0);
    }

    #[test]
    fn counts_differ() {
        let test = IsomorphismTest::default();
        assert!(!test.test(&EditGraph::independent(1), &EditGraph::independent(2)));
        assert!(!test.test(&EditGraph::path(4), &EditGraph::cycle(4)));

        // Same counts, different degree sequence
        assert!(!test.test(&EditGraph::path(4), &EditGraph::star(3)));

        assert!(test.test(&EditGraph::<u32>::new(), &EditGraph::<u32>::new()));
        assert!(test.test(&EditGraph::independent(3), &EditGraph::independent(3)));
    }

    #[test]
    fn regular_graphs() {
        // Two 3-regular graphs on six vertices: K_{3,3} and the prism
        let K33 = EditGraph::biclique(3, 3);
        let mut prism = EditGraph::cycle(3).disj_union(&EditGraph::cycle(3));
        for u in 0..3 {
            prism.add_edge(&u, &(u+3));
        }
        assert!(!IsomorphismTest::new(false).test(&K33, &prism));
        assert!(!IsomorphismTest::new(false).prefilter(false).test(&K33, &prism));

        let shuffled = K33.relabel(|u| [4, 0, 2, 1, 5, 3][*u as usize]);
        let mapping = IsomorphismTest::new(false).find_mapping(&K33, &shuffled).unwrap();
        assert_isomorphism(&K33, &shuffled, &mapping);
    }

    #[test]
    fn long_cycles() {
        // Regular graphs give the degree ordering nothing to work with; the
        // search has to follow edges to stay polynomial here.
        let C40 = EditGraph::cycle(40);
        let shuffled = C40.relabel(|u| (u * 17 + 5) % 40);
        let mapping = IsomorphismTest::new(false).find_mapping(&C40, &shuffled).unwrap();
        assert_isomorphism(&C40, &shuffled, &mapping);
        assert!(crate::algorithms::are_isomorphic(&C40, &C40.relabel(|u| format!("c{u}")), false));

        let C30 = EditGraph::cycle(30);
        let C15 = EditGraph::cycle(15);
        let split = C15.disj_union(&C15);
        assert!(!IsomorphismTest::new(false).prefilter(false).test(&C30, &split));
        assert!(!IsomorphismTest::new(false).prefilter(false).test(&split, &C30));
        assert!(IsomorphismTest::new(false).prefilter(false).test(&split, &split.relabel(|u| 59 - u)));

        let D = EditGraph::directed_cycle(50);
        assert!(IsomorphismTest::new(true).prefilter(false).test(&D, &D.relabel(|u| (u + 13) % 50)));
    }

    #[test]
    fn circular_ladder() {
        // Prism over C20, 3-regular on 40 vertices
        let mut ladder = EditGraph::cycle(20).disj_union(&EditGraph::cycle(20));
        for u in 0..20 {
            ladder.add_edge(&u, &(u+20));
        }
        let shuffled = ladder.relabel(|u| (u * 7 + 3) % 40);
        let mapping = IsomorphismTest::new(false).prefilter(false).find_mapping(&ladder, &shuffled).unwrap();
        assert_isomorphism(&ladder, &shuffled, &mapping);

        // Moving one rung keeps all degrees at three but breaks the structure
        let mut twisted = ladder.clone();
        twisted.remove_edge(&0, &20);
        twisted.remove_edge(&10, &30);
        twisted.add_edge(&0, &30);
        twisted.add_edge(&10, &20);
        assert!(!IsomorphismTest::new(false).prefilter(false).test(&ladder, &twisted));
    }
}
