//! Behavioral pattern: Iterator
//! Example: hand-written iterator over a singly linked list
//!
//! Run with: cargo run --bin behavioral_iterator

struct ListNode {
    value: i32,
    next: Option<Box<ListNode>>,
}

impl ListNode {
    fn new(value: i32, next: Option<Box<ListNode>>) -> Self {
        ListNode { value, next }
    }

    fn iter(&self) -> ListIter<'_> {
        ListIter {
            current: Some(self),
        }
    }
}

/// The iterator object holds the traversal cursor, so several independent
/// walks over the same list can coexist.
struct ListIter<'a> {
    current: Option<&'a ListNode>,
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a ListNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(node)
    }
}

impl<'a> IntoIterator for &'a ListNode {
    type Item = &'a ListNode;
    type IntoIter = ListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn main() {
    let root = ListNode::new(
        1,
        Some(Box::new(ListNode::new(
            2,
            Some(Box::new(ListNode::new(
                3,
                Some(Box::new(ListNode::new(4, Some(Box::new(ListNode::new(5, None)))))),
            ))),
        ))),
    );

    for node in &root {
        println!("{}", node.value);
    }

    // Implementing Iterator buys the whole combinator toolbox.
    let sum: i32 = root.iter().map(|node| node.value).sum();
    println!("sum: {sum}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ListNode {
        ListNode::new(
            1,
            Some(Box::new(ListNode::new(
                2,
                Some(Box::new(ListNode::new(3, None))),
            ))),
        )
    }

    #[test]
    fn walks_every_node_in_order() {
        let values: Vec<i32> = sample().iter().map(|node| node.value).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn single_node_list_yields_once() {
        let node = ListNode::new(42, None);
        assert_eq!(node.iter().count(), 1);
    }

    #[test]
    fn independent_iterators_do_not_interfere() {
        let list = sample();
        let mut first = list.iter();
        let mut second = list.iter();

        first.next();
        assert_eq!(second.next().map(|node| node.value), Some(1));
    }
}
