#![allow(non_snake_case)]

use graphclassics::prelude::*;
use itertools::Itertools;
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Random graph where every possible edge is present with probability `p`.
fn random_graph(n:u32, p:f64, rng:&mut ChaCha8Rng) -> EditGraph<u32> {
    let mut G = EditGraph::independent(n);
    for (u,v) in (0..n).tuple_combinations() {
        if rng.gen_bool(p) {
            G.add_edge(&u, &v);
        }
    }
    G
}

fn random_permutation(n:u32, rng:&mut ChaCha8Rng) -> Vec<u32> {
    let mut perm:Vec<u32> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// A cycle through all vertices in random order plus random edge-disjoint triangles.
/// All degrees stay even (balanced if directed) and the graph stays connected.
fn random_eulerian(n:u32, triangles:usize, directed:bool, rng:&mut ChaCha8Rng) -> EditGraph<u32> {
    let perm = random_permutation(n, rng);
    let mut G = EditGraph::new();
    for i in 0..perm.len() {
        let (u, v) = (perm[i], perm[(i+1) % perm.len()]);
        if directed { G.add_arc(&u, &v); } else { G.add_edge(&u, &v); }
    }

    for _ in 0..triangles {
        let tri = rand::seq::index::sample(rng, n as usize, 3);
        let (a, b, c) = (tri.index(0) as u32, tri.index(1) as u32, tri.index(2) as u32);
        if [(a,b), (b,c), (c,a)].iter().any(|(x,y)| G.adjacent(x, y) || G.adjacent(y, x)) {
            continue
        }
        for (x,y) in [(a,b), (b,c), (c,a)] {
            if directed { G.add_arc(&x, &y); } else { G.add_edge(&x, &y); }
        }
    }
    G
}

fn brute_force_isomorphic(A:&EditGraph<u32>, B:&EditGraph<u32>) -> bool {
    let n = A.num_vertices() as u32;
    if n != B.num_vertices() as u32 || A.num_arcs() != B.num_arcs() {
        return false
    }
    (0..n).permutations(n as usize).any(|perm| {
        A.arcs().all(|(u,v)| B.adjacent(&perm[*u as usize], &perm[*v as usize]))
    })
}

fn brute_force_colourable(G:&EditGraph<u32>, k:usize) -> bool {
    let n = G.num_vertices();
    (0..k.pow(n as u32)).any(|mut code| {
        let mut colour = vec![0; n];
        for c in colour.iter_mut() {
            *c = code % k;
            code /= k;
        }
        G.arcs().all(|(u,v)| colour[*u as usize] != colour[*v as usize])
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cycles_and_bipartiteness(n in 3u32..40) {
        let C = EditGraph::cycle(n);
        prop_assert_eq!(is_bipartite(&C), n % 2 == 0);
        prop_assert!(three_color(&C).is_some());
    }

    #[test]
    fn euler_tours_on_cycle_unions(n in 3u32..25, triangles in 0usize..15, directed in any::<bool>(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let G = random_eulerian(n, triangles, directed, &mut rng);

        let walk = find_euler_cycle(&G, &G.arc_set(), directed).unwrap();
        prop_assert_eq!(walk.first(), walk.last());

        let mut used = EdgeSet::default();
        for pair in walk.windows(2) {
            prop_assert!(G.adjacent(&pair[0], &pair[1]));
            let arc = if directed || pair[0] < pair[1] { (pair[0], pair[1]) } else { (pair[1], pair[0]) };
            prop_assert!(used.insert(arc));
        }
        let expected = if directed { G.num_arcs() } else { G.num_arcs() / 2 };
        prop_assert_eq!(used.len(), expected);

        // Adding a pendant edge creates two odd vertices
        let mut H = G.clone();
        H.add_edge(&0, &n);
        prop_assert_eq!(H.euler_cycle(false), None);
    }

    #[test]
    fn planted_hamiltonian_cycles(n in 3u32..9, p in 0.0f64..0.5, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut G = random_graph(n, p, &mut rng);
        let perm = random_permutation(n, &mut rng);
        for i in 0..perm.len() {
            G.add_edge(&perm[i], &perm[(i+1) % perm.len()]);
        }

        let cycle = find_hamiltonian_cycle(&G).unwrap();
        prop_assert_eq!(cycle.len(), n as usize + 1);
        prop_assert_eq!(cycle.first(), cycle.last());
        prop_assert_eq!(cycle.iter().unique().count(), n as usize);
        for pair in cycle.windows(2) {
            prop_assert!(G.adjacent(&pair[0], &pair[1]));
        }
    }

    #[test]
    fn colourings_agree_with_brute_force(n in 1u32..8, p in 0.1f64..0.9, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let G = random_graph(n, p, &mut rng);

        let sides = G.bipartition();
        prop_assert_eq!(sides.is_some(), brute_force_colourable(&G, 2));
        if let Some(sides) = sides {
            prop_assert!(sides.is_proper(&G));
        }

        let colouring = three_color(&G);
        prop_assert_eq!(colouring.is_some(), brute_force_colourable(&G, 3));
        if let Some(colouring) = colouring {
            prop_assert!(colouring.is_proper(&G));
            prop_assert!(colouring.colours().len() <= 3);
        }
    }

    #[test]
    fn isomorphism_under_relabelling(n in 1u32..14, p in 0.1f64..0.9, directed in any::<bool>(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let G = if directed {
            (0..n).cartesian_product(0..n)
                  .filter(|(u,v)| u != v && rng.gen_bool(p))
                  .collect::<EditGraph<u32>>()
        } else {
            random_graph(n, p, &mut rng)
        };
        let perm = random_permutation(n, &mut rng);
        let H = G.relabel(|u| format!("v{}", perm[*u as usize]));

        prop_assert!(are_isomorphic(&G, &G, directed));
        prop_assert!(are_isomorphic(&G, &H, directed));
        prop_assert!(are_isomorphic(&H, &G, directed));

        let mapping = IsomorphismTest::new(directed).prefilter(false).find_mapping(&G, &H).unwrap();
        for (u,v) in G.arcs() {
            prop_assert!(H.adjacent(&mapping[u], &mapping[v]));
        }
    }

    #[test]
    fn isomorphism_agrees_with_brute_force(n in 2u32..7, p in 0.2f64..0.8, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let G = random_graph(n, p, &mut rng);
        let H = random_graph(n, p, &mut rng);

        let expected = brute_force_isomorphic(&G, &H);
        prop_assert_eq!(are_isomorphic(&G, &H, false), expected);
        prop_assert_eq!(IsomorphismTest::new(false).prefilter(false).test(&G, &H), expected);
    }
}

#[test]
fn edge_list_round_trip() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let G = random_graph(30, 0.2, &mut rng).relabel(|u| format!("node-{u}"));

    let mut buf = Vec::new();
    EdgeListWriter::new().write(&G, &mut buf).unwrap();
    let lines = String::from_utf8(buf.clone()).unwrap().lines().count();

    let H = EdgeListReader::new().read(&buf[..]).unwrap();
    assert_eq!(H.arc_set().len(), 2 * lines);
    assert_eq!(H.arc_set(), G.arc_set());

    // Isolated vertices do not appear in an edge list
    let isolated = G.vertices().filter(|u| G.degree(u) == 0).count();
    assert_eq!(H.num_vertices() + isolated, G.num_vertices());
}
