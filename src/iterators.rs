use crate::graph::{Graph, VertexId};

type BoxedVertexIterator<'a, V> = Box<dyn Iterator<Item=&'a V> + 'a>;

/*
    Arc iterator for all graphs. Walks the vertices once and, for
    each vertex u, yields (u,v) for every out-neighbour v.
*/
pub struct ArcIterator<'a, V, G> where V: VertexId + 'a, G: Graph<V> + ?Sized {
    graph: &'a G,
    v_it: BoxedVertexIterator<'a, V>,
    curr_v: Option<&'a V>,
    curr_it: Option<BoxedVertexIterator<'a, V>>,
}

impl<'a, V, G> ArcIterator<'a, V, G> where V: VertexId + 'a, G: Graph<V> + ?Sized {
    pub fn new(graph: &'a G) -> ArcIterator<'a, V, G> {
        let mut res = ArcIterator {
            graph,
            v_it: graph.vertices(),
            curr_v: None,
            curr_it: None,
        };
        res.advance();
        res
    }

    fn advance(&mut self) {
        if let Some(v) = self.v_it.next() {
            self.curr_v = Some(v);
            self.curr_it = Some(self.graph.neighbours(v));
        } else {
            self.curr_v = None;
            self.curr_it = None;
        }
    }
}

impl<'a, V, G> Iterator for ArcIterator<'a, V, G> where V: VertexId + 'a, G: Graph<V> + ?Sized {
    type Item = (&'a V, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let it = self.curr_it.as_mut()?;
            if let Some(u) = it.next() {
                return Some((self.curr_v?, u));
            }
            self.advance();
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
