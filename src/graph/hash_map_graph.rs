use crate::graph::graph::Graph;
use fnv::{FnvHashMap, FnvHashSet};

/// Adjacency-set graph used to assemble the input before it is frozen into
/// a bit-adjacency matrix. Vertices are arbitrary `usize` labels.
#[derive(Clone, Debug, Default)]
pub struct HashMapGraph {
    data: FnvHashMap<usize, FnvHashSet<usize>>,
}

impl HashMapGraph {
    pub fn new() -> Self {
        Self {
            data: FnvHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn has_vertex(&self, u: usize) -> bool {
        self.data.contains_key(&u)
    }

    pub fn add_vertex(&mut self, u: usize) {
        self.data.entry(u).or_default();
    }

    pub fn add_edge(&mut self, u: usize, v: usize) {
        if u == v {
            return;
        }
        self.data.entry(u).or_default().insert(v);
        self.data.entry(v).or_default().insert(u);
    }

    pub fn neighborhood_set(&self, u: usize) -> &FnvHashSet<usize> {
        &self.data[&u]
    }
}

impl Graph for HashMapGraph {
    fn order(&self) -> usize {
        self.data.len()
    }

    fn degree(&self, u: usize) -> usize {
        self.data[&u].len()
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.data.get(&u).map_or(false, |nb| nb.contains(&v))
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.data.keys().copied())
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.data[&u].iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::HashMapGraph;
    use crate::graph::graph::Graph;

    #[test]
    fn vertices_and_edges() {
        let mut graph = HashMapGraph::new();
        assert_eq!(graph.order(), 0);

        graph.add_edge(7, 3);
        graph.add_edge(7, 3);
        graph.add_edge(3, 11);

        assert_eq!(graph.order(), 3);
        assert_eq!(graph.degree(7), 1);
        assert_eq!(graph.degree(3), 2);
        assert!(graph.has_edge(3, 7));
        assert!(graph.has_edge(7, 3));
        assert!(!graph.has_edge(7, 11));
    }

    #[test]
    fn self_loops_are_dropped() {
        let mut graph = HashMapGraph::new();
        graph.add_edge(4, 4);
        assert_eq!(graph.order(), 0);

        graph.add_vertex(4);
        graph.add_edge(4, 4);
        assert_eq!(graph.degree(4), 0);
    }

    #[test]
    fn isolated_vertices() {
        let mut graph = HashMapGraph::with_capacity(2);
        graph.add_vertex(0);
        graph.add_vertex(9);
        graph.add_vertex(9);
        assert_eq!(graph.order(), 2);
        assert!(graph.has_vertex(9));
        assert!(graph.neighborhood_set(9).is_empty());
    }
}
