use crate::datastructures::BitSet;
use crate::graph::graph::Graph;
use crate::graph::vertex_index::VertexIndex;

/// A graph frozen into a bit-adjacency matrix: row `v` holds the
/// neighborhood of `v` as an n-bit vector. Subgraphs are plain bit-vectors
/// over the same index range, which makes the border, saturation and
/// separation primitives word-level operations.
///
/// The matrix is immutable after construction; every query is a pure
/// function of the matrix and its input subset.
#[derive(Clone, Debug)]
pub struct BitGraph {
    rows: Vec<BitSet>,
}

impl From<Vec<BitSet>> for BitGraph {
    fn from(rows: Vec<BitSet>) -> Self {
        Self { rows }
    }
}

impl BitGraph {
    pub fn from_graph<G: Graph>(graph: &G, index: &VertexIndex<usize>) -> Self {
        let n = graph.order();
        let mut rows = vec![BitSet::new(n); n];
        for v in graph.vertices() {
            let x = index.index_of(&v);
            for w in graph.neighborhood(v) {
                rows[x].set_bit(index.index_of(&w));
            }
        }
        Self { rows }
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn row(&self, v: usize) -> &BitSet {
        &self.rows[v]
    }

    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.rows[u][v]
    }

    /// Vertices of `s` with at least one neighbor outside of `s`.
    pub fn interior_border(&self, s: &BitSet) -> BitSet {
        let mut border = BitSet::new(self.order());
        let mut outside = s.clone();
        outside.not();
        for v in s.iter() {
            if self.rows[v].intersects(&outside) {
                border.set_bit(v);
            }
        }
        border
    }

    /// Vertices outside of `s` with at least one neighbor in `s`.
    pub fn exterior_border(&self, s: &BitSet) -> BitSet {
        let mut border = BitSet::new(self.order());
        let mut outside = s.clone();
        outside.not();
        for v in s.iter() {
            if self.rows[v].intersects(&outside) {
                border.or(&self.rows[v]);
            }
        }
        border.and_not(s);
        border
    }

    /// Adds to `s` every vertex of N(s) whose neighborhood lies inside
    /// s ∪ N(s). The hull is computed once up front; additions during the
    /// pass do not enlarge it.
    pub fn saturate(&self, s: &mut BitSet) {
        let neighbors = self.exterior_border(s);
        let mut hull = s.clone();
        hull.or(&neighbors);
        for v in neighbors.iter() {
            if self.rows[v].is_subset_of(&hull) {
                s.set_bit(v);
            }
        }
    }

    /// The lowest-indexed vertex of N(s) whose neighborhood lies inside
    /// s ∪ N(s), if any.
    pub fn absorbable(&self, s: &BitSet) -> Option<usize> {
        let neighbors = self.exterior_border(s);
        let mut hull = s.clone();
        hull.or(&neighbors);
        neighbors.iter().find(|&v| self.rows[v].is_subset_of(&hull))
    }

    /// Connected components of the subgraph induced by the complement of
    /// `s`, each as a bit-vector disjoint from `s`. Discovery runs over an
    /// explicit work list, so stack depth is independent of the graph.
    pub fn separate(&self, s: &BitSet) -> Vec<BitSet> {
        let n = self.order();
        let mut components = Vec::new();
        let mut visited = s.clone();
        let mut work: Vec<usize> = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            let mut component = BitSet::new(n);
            component.set_bit(root);
            visited.set_bit(root);
            work.push(root);
            while let Some(v) = work.pop() {
                for w in self.rows[v].iter() {
                    if !visited[w] {
                        component.set_bit(w);
                        visited.set_bit(w);
                        work.push(w);
                    }
                }
            }
            components.push(component);
        }
        components
    }

    /// Decides whether `s` is a maximal clique in some minimal
    /// triangulation, via the local characterization of Bouchitté and
    /// Todinca ("Treewidth and minimum fill-in: grouping the minimal
    /// separators").
    pub fn is_potential_maximal_clique(&self, s: &BitSet) -> bool {
        let components = self.separate(s);

        // a full component, N(C) = S, rules s out; N(C) is a subset of s,
        // so comparing cardinalities suffices
        for c in &components {
            if self.exterior_border(c).cardinality() == s.cardinality() {
                return false;
            }
        }

        // every non-edge of s must be completable through some component
        // seeing both endpoints
        let members: Vec<usize> = s.iter().collect();
        for (i, &u) in members.iter().enumerate() {
            for &v in &members[i + 1..] {
                if self.rows[u][v] {
                    continue;
                }
                let completable = components
                    .iter()
                    .any(|c| c.intersects(&self.rows[u]) && c.intersects(&self.rows[v]));
                if !completable {
                    return false;
                }
            }
        }
        true
    }
}
