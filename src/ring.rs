//! Circular doubly linked list of polygon vertices, stored in an arena of nodes.

use alloc::vec::Vec;

use tracing::trace;

use crate::geom::{is_reflex, point_in_triangle, Scalar, Winding};

pub(crate) type NodeIndex = usize;

pub(crate) struct Node<T: Scalar> {
    /// vertex index in the input array
    pub(crate) i: usize,
    /// vertex coordinates
    pub(crate) xy: [T; 2],
    /// previous vertex node in the current ring
    pub(crate) prev_i: NodeIndex,
    /// next vertex node in the current ring
    pub(crate) next_i: NodeIndex,
    /// whether the interior angle with the current neighbors is reflex
    pub(crate) reflex: bool,
}

impl<T: Scalar> Node<T> {
    fn new(i: usize, xy: [T; 2]) -> Self {
        Self {
            i,
            xy,
            prev_i: 0,
            next_i: 0,
            reflex: false,
        }
    }
}

/// create a circular doubly linked list from polygon points in input order, and classify
/// every vertex against its original neighbors
pub(crate) fn linked_list<T: Scalar>(
    nodes: &mut Vec<Node<T>>,
    data: &[[T; 2]],
    winding: Winding,
) -> NodeIndex {
    debug_assert!(data.len() >= 3);
    nodes.clear();
    nodes.reserve(data.len());

    let mut last_i = None;
    for (i, &xy) in data.iter().enumerate() {
        last_i = Some(insert_node(nodes, i, xy, last_i));
    }

    for p_i in 0..nodes.len() {
        update_reflex(nodes, p_i, winding);
        trace!(index = nodes[p_i].i, reflex = nodes[p_i].reflex, "classified vertex");
    }

    0
}

/// create a node and link it after `last` (in a circular doubly linked list)
fn insert_node<T: Scalar>(
    nodes: &mut Vec<Node<T>>,
    i: usize,
    xy: [T; 2],
    last: Option<NodeIndex>,
) -> NodeIndex {
    let mut p = Node::new(i, xy);
    let p_i = nodes.len();
    match last {
        Some(last_i) => {
            let last_next_i = nodes[last_i].next_i;
            (p.prev_i, p.next_i) = (last_i, last_next_i);
            nodes[last_i].next_i = p_i;
            nodes[last_next_i].prev_i = p_i;
        }
        None => {
            (p.prev_i, p.next_i) = (p_i, p_i);
        }
    }
    nodes.push(p);
    p_i
}

/// unlink a node from its ring, returning its former neighbors
pub(crate) fn remove_node<T: Scalar>(
    nodes: &mut [Node<T>],
    p_i: NodeIndex,
) -> (NodeIndex, NodeIndex) {
    let Node { prev_i, next_i, .. } = nodes[p_i];
    nodes[next_i].prev_i = prev_i;
    nodes[prev_i].next_i = next_i;
    (prev_i, next_i)
}

/// recompute the reflex flag of a node from its current neighbors
pub(crate) fn update_reflex<T: Scalar>(nodes: &mut [Node<T>], p_i: NodeIndex, winding: Winding) {
    let p = &nodes[p_i];
    let reflex = is_reflex(nodes[p.prev_i].xy, p.xy, nodes[p.next_i].xy, winding);
    nodes[p_i].reflex = reflex;
}

/// find the first ear of the ring, walking forward from `start_i`
pub(crate) fn find_ear<T: Scalar>(nodes: &[Node<T>], start_i: NodeIndex) -> Option<NodeIndex> {
    let mut ear_i = start_i;
    loop {
        if is_ear(nodes, ear_i) {
            return Some(ear_i);
        }
        ear_i = nodes[ear_i].next_i;
        if ear_i == start_i {
            return None;
        }
    }
}

/// check whether a polygon node forms a valid ear with adjacent nodes
fn is_ear<T: Scalar>(nodes: &[Node<T>], ear_i: NodeIndex) -> bool {
    let b = &nodes[ear_i];
    if b.reflex {
        return false;
    }
    let a = &nodes[b.prev_i];
    let c = &nodes[b.next_i];

    // only reflex vertices can lie inside an ear of a simple polygon
    let mut p_i = c.next_i;
    while p_i != b.prev_i {
        let p = &nodes[p_i];
        if p.reflex && point_in_triangle(p.xy, a.xy, b.xy, c.xy) {
            return false;
        }
        p_i = p.next_i;
    }
    true
}
