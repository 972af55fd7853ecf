//! Structural pattern: Composite
//! Example: a tree where leaves and groups share one interface
//!
//! Run with: cargo run --bin structural_composite

enum Node {
    Leaf(i32),
    Composite(Vec<Node>),
}

impl Node {
    /// Collects leaf values in traversal order. One call works on a single
    /// leaf and on a whole subtree alike.
    fn values(&self) -> Vec<i32> {
        match self {
            Node::Leaf(value) => vec![*value],
            Node::Composite(children) => children.iter().flat_map(Node::values).collect(),
        }
    }

    /// Leaves have no children, so adding to one reports failure instead of
    /// panicking. Same shape as the classic "default no-op" child methods.
    fn add_child(&mut self, node: Node) -> bool {
        match self {
            Node::Leaf(_) => false,
            Node::Composite(children) => {
                children.push(node);
                true
            }
        }
    }

    fn child(&self, index: usize) -> Option<&Node> {
        match self {
            Node::Leaf(_) => None,
            Node::Composite(children) => children.get(index),
        }
    }

    fn remove_child(&mut self, index: usize) -> bool {
        match self {
            Node::Leaf(_) => false,
            Node::Composite(children) => {
                if index < children.len() {
                    children.remove(index);
                    true
                } else {
                    false
                }
            }
        }
    }
}

fn main() {
    let mut root = Node::Composite(vec![Node::Leaf(10), Node::Leaf(15), Node::Leaf(111)]);

    println!("{:?}", root.values());

    match root.child(2) {
        Some(node) => println!("child 2: {:?}", node.values()),
        None => println!("child 2: no such child"),
    }
    match root.child(5) {
        Some(node) => println!("child 5: {:?}", node.values()),
        None => println!("child 5: no such child"),
    }

    root.add_child(Node::Composite(vec![Node::Leaf(1), Node::Leaf(2)]));
    println!("after nesting a group: {:?}", root.values());

    root.remove_child(0);
    println!("after removing child 0: {:?}", root.values());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_flatten_nested_composites() {
        let root = Node::Composite(vec![
            Node::Leaf(1),
            Node::Composite(vec![Node::Leaf(2), Node::Leaf(3)]),
        ]);
        assert_eq!(root.values(), vec![1, 2, 3]);
    }

    #[test]
    fn leaves_refuse_children() {
        let mut leaf = Node::Leaf(7);
        assert!(!leaf.add_child(Node::Leaf(8)));
        assert!(leaf.child(0).is_none());
        assert!(!leaf.remove_child(0));
    }

    #[test]
    fn child_access_is_bounds_checked() {
        let mut root = Node::Composite(vec![Node::Leaf(10)]);
        assert!(root.child(0).is_some());
        assert!(root.child(5).is_none());
        assert!(!root.remove_child(5));
        assert!(root.remove_child(0));
        assert!(root.values().is_empty());
    }
}
