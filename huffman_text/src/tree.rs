//! Binary huffman tree, stored as an arena of nodes.

use crate::{Error, FrequencyTable, Result};

/// Node of the huffman tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Leaf that holds a symbol.
    Leaf { symbol: Box<str>, frequency: u64 },
    /// Internal node; `left` and `right` are indices of the children, reached by the bits `0` and `1` respectively.
    Internal { left: usize, right: usize, frequency: u64 }
}

impl Node {
    /// Returns the frequency of `self`: of its symbol for a leaf, the sum of the children's for an internal node.
    #[inline] pub fn frequency(&self) -> u64 {
        match self {
            Node::Leaf { frequency, .. } | Node::Internal { frequency, .. } => *frequency
        }
    }

    /// Returns whether `self` is a leaf.
    #[inline] pub fn is_leaf(&self) -> bool { matches!(self, Node::Leaf { .. }) }
}

/// Huffman tree. Nodes are addressed by their indices in the arena.
///
/// Trees constructed by [`Tree::from_frequencies`] are always well-formed;
/// [`Tree::from_nodes`] accepts any arena and leaves validation to [`crate::CodeTable::from_tree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    nodes: Box<[Node]>,
    root: usize
}

impl Tree {
    /// Constructs the huffman tree for given `frequencies`.
    ///
    /// Leaves are created in the order of the UTF-16 code units of their symbols
    /// (which differs from the byte order of `str` for characters above U+FFFF). Then, until one node remains:
    /// the working list is stably sorted by non-increasing frequency,
    /// the two least frequent nodes are selected (see `two_least_frequent`)
    /// and replaced by their parent appended to the end of the list;
    /// the first selected node becomes the left child and the second the right one.
    /// Encoders that follow the same procedure produce identical trees.
    ///
    /// The algorithm runs in *O(n² log n)* time, where *n* is the number of symbols.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        if frequencies.is_empty() { return Err(Error::EmptyAlphabet); }
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * frequencies.len() - 1);
        let mut leaves: Vec<(&str, u32)> = frequencies.iter().collect();
        leaves.sort_unstable_by(|(a, _), (b, _)| a.encode_utf16().cmp(b.encode_utf16()));
        nodes.extend(leaves.into_iter().map(|(symbol, frequency)|
            Node::Leaf { symbol: symbol.into(), frequency: frequency as u64 }));
        let mut working: Vec<usize> = (0..nodes.len()).collect();
        while working.len() > 1 {
            working.sort_by(|&a, &b| nodes[b].frequency().cmp(&nodes[a].frequency()));
            let (left, right) = two_least_frequent(&nodes, &working);
            let frequency = nodes[left].frequency() + nodes[right].frequency();
            working.retain(|&n| n != left && n != right);
            working.push(nodes.len());
            nodes.push(Node::Internal { left, right, frequency });
        }
        Ok(Self { nodes: nodes.into_boxed_slice(), root: working[0] })
    }

    /// Constructs the tree from given arena of `nodes` and index of the `root`, without any validation.
    #[inline] pub fn from_nodes(nodes: Box<[Node]>, root: usize) -> Self {
        Self { nodes, root }
    }

    /// Returns index of the root.
    #[inline] pub fn root(&self) -> usize { self.root }

    /// Returns node with given `index` or `None` if there is no such node.
    #[inline] pub fn get(&self, index: usize) -> Option<&Node> { self.nodes.get(index) }

    /// Returns all nodes of the arena.
    #[inline] pub fn nodes(&self) -> &[Node] { &self.nodes }

    /// Returns the number of nodes.
    #[inline] pub fn len(&self) -> usize { self.nodes.len() }

    /// Returns whether the arena is empty.
    #[inline] pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Returns the number of leaves.
    pub fn leaves_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }
}

/// Returns the two least frequent nodes among `working` (which has at least 2 elements).
///
/// The first two nodes seed the pair (ordered so the first is not more frequent),
/// then the rest are scanned and replace a member of the pair only if strictly less frequent.
fn two_least_frequent(nodes: &[Node], working: &[usize]) -> (usize, usize) {
    let freq = |n: usize| nodes[n].frequency();
    let (mut min1, mut min2) = (working[0], working[1]);
    if freq(min2) < freq(min1) { std::mem::swap(&mut min1, &mut min2); }
    for &n in &working[2..] {
        if freq(n) < freq(min1) {
            min2 = min1;
            min1 = n;
        } else if freq(n) < freq(min2) {
            min2 = n;
        }
    }
    (min1, min2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;

    fn tree(map: std::collections::BTreeMap<&str, u32>) -> Tree {
        Tree::from_frequencies(&map.into_iter().collect()).unwrap()
    }

    fn leaf<'t>(tree: &'t Tree, index: usize) -> &'t str {
        match tree.get(index) {
            Some(Node::Leaf { symbol, .. }) => symbol.as_ref(),
            other => panic!("expected leaf, got {:?}", other)
        }
    }

    fn children(tree: &Tree, index: usize) -> (usize, usize) {
        match tree.get(index) {
            Some(Node::Internal { left, right, .. }) => (*left, *right),
            other => panic!("expected internal node, got {:?}", other)
        }
    }

    #[test]
    fn empty() {
        assert!(matches!(Tree::from_frequencies(&FrequencyTable::new()), Err(Error::EmptyAlphabet)));
    }

    #[test]
    fn single_symbol() {
        let t = tree(btreemap!{"a" => 5});
        assert_eq!(t.len(), 1);
        assert_eq!(t.root(), 0);
        assert_eq!(leaf(&t, 0), "a");
        assert_eq!(t.get(0).unwrap().frequency(), 5);
    }

    #[test]
    fn three_symbols() {
        //   /  \
        //  /\   a
        //  cb
        let t = tree(btreemap!{"a" => 100, "b" => 50, "c" => 10});
        assert_eq!(t.len(), 5);
        assert_eq!(t.get(t.root()).unwrap().frequency(), 160);
        let (l, r) = children(&t, t.root());
        assert_eq!(leaf(&t, r), "a");
        let (ll, lr) = children(&t, l);
        assert_eq!((leaf(&t, ll), leaf(&t, lr)), ("c", "b"));
    }

    #[test]
    fn equal_frequencies_merge_earliest_first() {
        //  /  \
        // c   /\
        //     ab
        let t = tree(btreemap!{"a" => 2, "b" => 2, "c" => 2});
        let (l, r) = children(&t, t.root());
        assert_eq!(leaf(&t, l), "c");
        let (rl, rr) = children(&t, r);
        assert_eq!((leaf(&t, rl), leaf(&t, rr)), ("a", "b"));
    }

    #[test]
    fn leaves_in_utf16_order() {
        // U+1F600 is encoded with surrogates (D83D DE00), which precede U+FF01 in UTF-16
        let t = tree(btreemap!{"a" => 1, "\u{FF01}" => 1, "\u{1F600}" => 1});
        assert_eq!((0..3).map(|i| leaf(&t, i)).collect::<Vec<_>>(), ["a", "\u{1F600}", "\u{FF01}"]);
        let (l, r) = children(&t, t.root());
        assert_eq!(leaf(&t, l), "\u{FF01}");
        let (rl, rr) = children(&t, r);
        assert_eq!((leaf(&t, rl), leaf(&t, rr)), ("a", "\u{1F600}"));
    }

    #[test]
    fn zero_frequencies() {
        let t = tree(btreemap!{"a" => 0, "b" => 0, "c" => 0});
        assert_eq!(t.leaves_count(), 3);
        assert_eq!(t.len(), 5);
        assert_eq!(t.get(t.root()).unwrap().frequency(), 0);
    }

    #[test]
    fn large_frequencies_do_not_overflow() {
        let t = tree(btreemap!{"a" => u32::MAX, "b" => u32::MAX, "c" => u32::MAX});
        assert_eq!(t.get(t.root()).unwrap().frequency(), 3 * u32::MAX as u64);
    }
}
