/// Read access to a finite, undirected, loop-free graph on `usize` vertices.
///
/// Vertex identifiers are arbitrary; `vertices` enumerates them in the
/// graph's own iteration order, which is the order downstream consumers use
/// to freeze dense indices.
pub trait Graph {
    fn order(&self) -> usize;

    fn degree(&self, u: usize) -> usize;

    fn has_edge(&self, u: usize, v: usize) -> bool;

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_>;

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_>;
}
