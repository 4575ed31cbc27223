use crate::datastructures::BitSet;
use fnv::FnvHashMap;
use std::hash::Hash;

/// Bijection between caller-supplied vertex labels and the dense range
/// `[0, n)`. Indices are handed out in the order labels are first seen, so
/// an engine built over the same label enumeration always assigns the same
/// indices.
#[derive(Clone, Debug)]
pub struct VertexIndex<T> {
    to_index: FnvHashMap<T, usize>,
    to_label: Vec<T>,
}

impl<T: Clone + Eq + Hash> VertexIndex<T> {
    pub fn from_labels<I: IntoIterator<Item = T>>(labels: I) -> Self {
        let mut to_index = FnvHashMap::default();
        let mut to_label = Vec::new();
        for label in labels {
            if to_index.contains_key(&label) {
                continue;
            }
            to_index.insert(label.clone(), to_label.len());
            to_label.push(label);
        }
        Self { to_index, to_label }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.to_label.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.to_label.is_empty()
    }

    /// Panics if `label` was not part of the indexed enumeration.
    #[inline]
    pub fn index_of(&self, label: &T) -> usize {
        self.to_index[label]
    }

    #[inline]
    pub fn get(&self, label: &T) -> Option<usize> {
        self.to_index.get(label).copied()
    }

    #[inline]
    pub fn label_of(&self, index: usize) -> &T {
        &self.to_label[index]
    }

    /// Translates a label collection into a subset bit-vector. Labels that
    /// were never indexed are skipped.
    pub fn bitset_of<I: IntoIterator<Item = T>>(&self, labels: I) -> BitSet {
        let mut set = BitSet::new(self.to_label.len());
        for label in labels {
            if let Some(v) = self.get(&label) {
                set.set_bit(v);
            }
        }
        set
    }

    pub fn labels_of(&self, set: &BitSet) -> Vec<T> {
        set.iter().map(|v| self.to_label[v].clone()).collect()
    }
}
