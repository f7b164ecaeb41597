/// Singly-linked list of decimal digits, least significant first.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ListNode {
    pub val: i32,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    #[inline]
    pub fn new(val: i32) -> Self {
        ListNode { next: None, val }
    }

    /// `[2, 4, 3]` becomes `2 -> 4 -> 3`, i.e. the number 342.
    pub fn from_digits(digits: &[i32]) -> Option<Box<ListNode>> {
        // built back to front so every push is O(1)
        digits.iter().rev().fold(None, |next, &val| {
            Some(Box::new(ListNode { val, next }))
        })
    }

    pub fn to_digits(list: &Option<Box<ListNode>>) -> Vec<i32> {
        let mut digits = vec![];
        let mut current = list.as_deref();
        while let Some(node) = current {
            digits.push(node.val);
            current = node.next.as_deref();
        }
        digits
    }
}

// The derived drop recurses once per node.
impl Drop for ListNode {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_keep_their_order() {
        let list = ListNode::from_digits(&[2, 4, 3]);
        assert_eq!(list.as_ref().map(|node| node.val), Some(2));
        assert_eq!(ListNode::to_digits(&list), vec![2, 4, 3]);
        assert_eq!(ListNode::from_digits(&[]), None);
        assert!(ListNode::to_digits(&None).is_empty());
    }

    #[test]
    fn long_list_drops_without_overflow() {
        let list = ListNode::from_digits(&vec![7; 1_000_000]);
        drop(list);
    }
}
