use crate::datastructures::BitSet;
use crate::graph::bit_graph::BitGraph;
use crate::graph::graph::Graph;
use crate::graph::vertex_index::VertexIndex;
use log::debug;

/// Facade over a label graph frozen into bit-adjacency form: owns the
/// vertex index and the matrix, keeps the original graph around read-only
/// for label translation, and exposes the subgraph primitives on subsets
/// of its dense index range.
///
/// Construction snapshots the graph; queries never mutate the engine and
/// can run concurrently. `saturate` writes only through its caller-owned
/// argument.
pub struct SubgraphEngine<'a, G: Graph> {
    graph: &'a G,
    index: VertexIndex<usize>,
    bits: BitGraph,
}

impl<'a, G: Graph> SubgraphEngine<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        let index = VertexIndex::from_labels(graph.vertices());
        let bits = BitGraph::from_graph(graph, &index);
        debug!("froze graph with {} vertices", bits.order());
        Self { graph, index, bits }
    }

    #[inline]
    pub fn graph(&self) -> &G {
        self.graph
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.bits.order()
    }

    #[inline]
    pub fn index(&self) -> &VertexIndex<usize> {
        &self.index
    }

    #[inline]
    pub fn bit_graph(&self) -> &BitGraph {
        &self.bits
    }

    pub fn bitset_of<I: IntoIterator<Item = usize>>(&self, labels: I) -> BitSet {
        self.index.bitset_of(labels)
    }

    pub fn labels_of(&self, set: &BitSet) -> Vec<usize> {
        self.index.labels_of(set)
    }

    pub fn interior_border(&self, s: &BitSet) -> BitSet {
        self.bits.interior_border(s)
    }

    pub fn exterior_border(&self, s: &BitSet) -> BitSet {
        self.bits.exterior_border(s)
    }

    pub fn saturate(&self, s: &mut BitSet) {
        self.bits.saturate(s)
    }

    pub fn absorbable(&self, s: &BitSet) -> Option<usize> {
        self.bits.absorbable(s)
    }

    pub fn separate(&self, s: &BitSet) -> Vec<BitSet> {
        self.bits.separate(s)
    }

    pub fn is_potential_maximal_clique(&self, s: &BitSet) -> bool {
        self.bits.is_potential_maximal_clique(s)
    }
}

#[cfg(test)]
mod tests {
    use super::SubgraphEngine;
    use crate::graph::graph::Graph;
    use crate::graph::hash_map_graph::HashMapGraph;

    /// 10 - 20 - 30 - 40 - 50
    fn labeled_path() -> HashMapGraph {
        let mut graph = HashMapGraph::new();
        graph.add_edge(10, 20);
        graph.add_edge(20, 30);
        graph.add_edge(30, 40);
        graph.add_edge(40, 50);
        graph
    }

    #[test]
    fn translation_round_trips() {
        let graph = labeled_path();
        let engine = SubgraphEngine::new(&graph);
        assert_eq!(engine.order(), 5);

        let thirty = engine.index().index_of(&30);
        assert_eq!(engine.index().label_of(thirty), &30);

        let s = engine.bitset_of(vec![20, 40]);
        assert_eq!(s.cardinality(), 2);
        let mut labels = engine.labels_of(&s);
        labels.sort_unstable();
        assert_eq!(labels, vec![20, 40]);
        assert_eq!(engine.bitset_of(labels), s);
    }

    #[test]
    fn queries_through_labels() {
        let graph = labeled_path();
        let engine = SubgraphEngine::new(&graph);

        let s = engine.bitset_of(vec![30]);
        let mut exterior = engine.labels_of(&engine.exterior_border(&s));
        exterior.sort_unstable();
        assert_eq!(exterior, vec![20, 40]);

        let mut sides: Vec<Vec<usize>> = engine
            .separate(&s)
            .iter()
            .map(|c| {
                let mut labels = engine.labels_of(c);
                labels.sort_unstable();
                labels
            })
            .collect();
        sides.sort();
        assert_eq!(sides, vec![vec![10, 20], vec![40, 50]]);

        assert_eq!(engine.absorbable(&s), None);
        assert!(engine.is_potential_maximal_clique(&engine.bitset_of(vec![20, 30])));
        assert!(!engine.is_potential_maximal_clique(&engine.bitset_of(vec![10, 30])));
    }

    #[test]
    fn saturation_through_the_facade() {
        let graph = labeled_path();
        let engine = SubgraphEngine::new(&graph);
        let mut s = engine.bitset_of(vec![20, 40]);
        engine.saturate(&mut s);
        let mut labels = engine.labels_of(&s);
        labels.sort_unstable();
        assert_eq!(labels, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn engine_over_an_edgeless_graph() {
        let mut graph = HashMapGraph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        let engine = SubgraphEngine::new(&graph);
        let components = engine.separate(&engine.bitset_of(Vec::new()));
        assert_eq!(components.len(), 2);
        assert_eq!(engine.graph().order(), 2);
    }
}
