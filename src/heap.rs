//! A min Fibonacci heap with decrease-key.
//!
//! Nodes live in one arena (`Vec<Option<Node<T, P>>>`) and reference each
//! other by index rather than by pointer: decrease-key's cut and
//! cascading-cut detach a node from the middle of a tree and reattach it to
//! the root ring, which is awkward to express with owning pointers without
//! risking a double free. Indices sidestep that entirely; a freed slot
//! holds `None` and is reused by the next insert.

/// Handle to a node inserted into a [`FibonacciHeap`].
///
/// Opaque outside this module; returned by [`FibonacciHeap::insert`] and
/// consumed by [`FibonacciHeap::decrease_priority`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Handle(usize);

/// The maximum degree a tree root can reach during consolidation.
///
/// Safe for any heap that fits in memory: a Fibonacci heap's maximum degree
/// is O(log n), and `2^64` nodes will never fit in an address space this
/// library runs in. Exceeding it is an invariant violation, not a case to
/// handle gracefully.
const MAX_DEGREE: usize = 64;

#[derive(Debug)]
struct Node<T, P> {
    payload: T,
    priority: P,
    parent: Option<usize>,
    /// First child; children form their own circular sibling ring.
    child: Option<usize>,
    left: usize,
    right: usize,
    degree: usize,
    mark: bool,
}

/// A min-priority Fibonacci heap, generic over a payload `T` and a priority
/// `P`.
///
/// Supports `insert` in O(1) amortised, `decrease_priority` in O(1)
/// amortised, and `pop_min` in O(log n) amortised. Not thread-safe: callers
/// must serialise access to a single heap instance.
#[derive(Debug)]
pub struct FibonacciHeap<T, P> {
    nodes: Vec<Option<Node<T, P>>>,
    free: Vec<usize>,
    min: Option<usize>,
    len: usize,
}

impl<T, P> Default for FibonacciHeap<T, P> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            min: None,
            len: 0,
        }
    }
}

impl<T, P> FibonacciHeap<T, P> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements currently in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn node(&self, idx: usize) -> &Node<T, P> {
        self.nodes[idx].as_ref().expect("dangling heap index")
    }

    #[inline]
    fn node_mut(&mut self, idx: usize) -> &mut Node<T, P> {
        self.nodes[idx].as_mut().expect("dangling heap index")
    }

    /// Returns a reference to the minimum element's payload and priority,
    /// without removing it.
    pub fn get_min(&self) -> Option<(&T, &P)> {
        self.min.map(|m| {
            let node = self.node(m);
            (&node.payload, &node.priority)
        })
    }

    fn alloc(&mut self, payload: T, priority: P) -> usize {
        let node = Node {
            payload,
            priority,
            parent: None,
            child: None,
            left: 0,
            right: 0,
            degree: 0,
            mark: false,
        };

        if let Some(idx) = self.free.pop() {
            self.nodes[idx] = Some(node);
            idx
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }

    /// Inserts `payload` with priority `p`, returning a handle usable with
    /// [`decrease_priority`](Self::decrease_priority).
    ///
    /// # Panics
    /// Asserts that `handle` is not already present in this heap is the
    /// caller's responsibility; inserting the same payload twice under two
    /// handles is fine, the handles are simply independent.
    pub fn insert(&mut self, payload: T, priority: P) -> Handle
    where
        P: PartialOrd,
    {
        let idx = self.alloc(payload, priority);
        self.node_mut(idx).left = idx;
        self.node_mut(idx).right = idx;

        match self.min {
            None => self.min = Some(idx),
            Some(min) => {
                splice_rings(&mut self.nodes, min, idx);
                if self.node(idx).priority < self.node(min).priority {
                    self.min = Some(idx);
                }
            }
        }

        self.len += 1;
        Handle(idx)
    }

    /// Lowers the priority of the node referenced by `handle` to `p`.
    ///
    /// # Panics
    /// Panics (via `debug_assert!`) if `p` is not strictly smaller than the
    /// node's current priority, or if `handle` does not reference a node
    /// currently in this heap.
    pub fn decrease_priority(&mut self, handle: Handle, p: P)
    where
        P: PartialOrd,
    {
        let idx = handle.0;
        debug_assert!(
            self.nodes[idx].is_some(),
            "handle does not belong to this heap"
        );
        debug_assert!(
            p < self.node(idx).priority,
            "decrease_priority requires a strictly smaller priority"
        );

        self.node_mut(idx).priority = p;
        let parent = self.node(idx).parent;

        if let Some(parent) = parent {
            if self.node(idx).priority < self.node(parent).priority {
                self.cut(idx, parent);
                self.cascading_cut(parent);
            }
        }

        let min = self.min.expect("heap non-empty: node was just touched");
        if self.node(idx).priority < self.node(min).priority {
            self.min = Some(idx);
        }
    }

    /// Detaches `node` from its parent `parent` and moves it into the root
    /// ring with its mark cleared.
    fn cut(&mut self, node: usize, parent: usize) {
        let right = self.node(node).right;
        unlink_from_ring(&mut self.nodes, node);
        self.node_mut(parent).degree -= 1;
        if self.node(parent).child == Some(node) {
            self.node_mut(parent).child = if right == node { None } else { Some(right) };
        }

        self.node_mut(node).parent = None;
        self.node_mut(node).mark = false;
        self.node_mut(node).left = node;
        self.node_mut(node).right = node;

        let min = self.min.expect("heap non-empty: node was just touched");
        splice_rings(&mut self.nodes, min, node);
    }

    /// Propagates a cut upward: marks an unmarked parent, or recursively
    /// cuts an already-marked one.
    fn cascading_cut(&mut self, node: usize) {
        if let Some(parent) = self.node(node).parent {
            if !self.node(node).mark {
                self.node_mut(node).mark = true;
            } else {
                self.cut(node, parent);
                self.cascading_cut(parent);
            }
        }
    }

    /// Extracts and returns the minimum element.
    pub fn pop_min(&mut self) -> Option<(T, P)>
    where
        P: PartialOrd,
    {
        let min = self.min?;

        // Children form their own circular ring, separate from min's
        // sibling ring. Clear their parent links, then merge the whole
        // child ring into the root ring in one splice: `splice_rings`
        // joins two complete rings, so splicing it in per-child (instead
        // of once) would double-splice after the first iteration.
        if let Some(child) = self.node(min).child {
            let mut cur = child;
            loop {
                self.node_mut(cur).parent = None;
                cur = self.node(cur).right;
                if cur == child {
                    break;
                }
            }
            splice_rings(&mut self.nodes, min, child);
        }

        let next_root = if self.node(min).right == min {
            None
        } else {
            Some(self.node(min).right)
        };
        unlink_from_ring(&mut self.nodes, min);

        self.min = next_root;
        self.len -= 1;

        if self.min.is_some() {
            self.consolidate();
        }

        let node = self.nodes[min].take().expect("dangling heap index");
        self.free.push(min);

        Some((node.payload, node.priority))
    }

    /// Merges roots of equal degree until every remaining root has a
    /// distinct degree, then reselects the minimum root.
    fn consolidate(&mut self)
    where
        P: PartialOrd,
    {
        let mut by_degree: [Option<usize>; MAX_DEGREE] = [None; MAX_DEGREE];

        let start = self.min.expect("consolidate called on non-empty root ring");
        let mut roots = Vec::new();
        let mut cur = start;
        loop {
            roots.push(cur);
            cur = self.node(cur).right;
            if cur == start {
                break;
            }
        }

        for root in roots {
            let mut x = root;
            loop {
                let mut d = self.node(x).degree;
                assert!(
                    d < MAX_DEGREE,
                    "Fibonacci heap degree exceeded MAX_DEGREE ({MAX_DEGREE}); heap is corrupt"
                );

                while let Some(y) = by_degree[d] {
                    if y == x {
                        break;
                    }
                    let (small, large) = if self.node(x).priority <= self.node(y).priority {
                        (x, y)
                    } else {
                        (y, x)
                    };
                    self.link(large, small);
                    by_degree[d] = None;
                    x = small;
                    d = self.node(x).degree;
                }
                by_degree[d] = Some(x);
                break;
            }
        }

        self.min = None;
        for slot in by_degree.iter() {
            if let Some(root) = *slot {
                self.node_mut(root).left = root;
                self.node_mut(root).right = root;
                match self.min {
                    None => self.min = Some(root),
                    Some(min) => {
                        splice_rings(&mut self.nodes, min, root);
                        if self.node(root).priority < self.node(min).priority {
                            self.min = Some(root);
                        }
                    }
                }
            }
        }
    }

    /// Makes `child` a child of `parent`. Both must currently be roots.
    fn link(&mut self, child: usize, parent: usize) {
        unlink_from_ring(&mut self.nodes, child);
        self.node_mut(child).left = child;
        self.node_mut(child).right = child;
        self.node_mut(child).parent = Some(parent);
        self.node_mut(child).mark = false;

        match self.node(parent).child {
            None => self.node_mut(parent).child = Some(child),
            Some(existing) => splice_rings(&mut self.nodes, existing, child),
        }
        self.node_mut(parent).degree += 1;
    }

    /// Drops every element, discarding payloads.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.min = None;
        self.len = 0;
    }
}

/// Splices the ring containing `a` together with the ring containing `b`,
/// producing one combined ring.
fn splice_rings<T, P>(nodes: &mut [Option<Node<T, P>>], a: usize, b: usize) {
    let a_right = nodes[a].as_ref().unwrap().right;
    let b_left = nodes[b].as_ref().unwrap().left;
    nodes[a].as_mut().unwrap().right = b;
    nodes[b].as_mut().unwrap().left = a;
    nodes[b_left].as_mut().unwrap().right = a_right;
    nodes[a_right].as_mut().unwrap().left = b_left;
}

/// Removes `node` from whatever ring it currently sits in, bridging its two
/// neighbours.
fn unlink_from_ring<T, P>(nodes: &mut [Option<Node<T, P>>], node: usize) {
    let left = nodes[node].as_ref().unwrap().left;
    let right = nodes[node].as_ref().unwrap().right;
    nodes[left].as_mut().unwrap().right = right;
    nodes[right].as_mut().unwrap().left = left;
}
