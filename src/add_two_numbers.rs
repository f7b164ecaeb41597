use log::debug;

use crate::{InvalidDigit, ListNode, Result};

/// Adds two numbers stored as reversed digit lists.
///
/// `2 -> 4 -> 3` plus `5 -> 6 -> 4` is `7 -> 0 -> 8` (342 + 465 = 807).
/// Lists may differ in length, and a carry out of the last digit becomes
/// one more node.
pub fn add_two_numbers(
    l1: Option<Box<ListNode>>,
    l2: Option<Box<ListNode>>,
) -> Option<Box<ListNode>> {
    let mut carry = 0;
    let mut head: Option<Box<ListNode>> = None;
    let mut tail = &mut head;

    let (mut l1, mut l2) = (l1, l2);

    while l1.is_some() || l2.is_some() || carry != 0 {
        let mut value = carry;
        // nodes implement Drop, so take `next` rather than moving it out
        if let Some(mut node) = l1 {
            value += node.val;
            l1 = node.next.take();
        }
        if let Some(mut node) = l2 {
            value += node.val;
            l2 = node.next.take();
        }
        carry = value / 10;

        let node = tail.insert(Box::new(ListNode::new(value % 10)));
        tail = &mut node.next;
    }

    head
}

/// [`add_two_numbers`], after checking that every node holds a single digit.
///
/// Positions count through `l1` first and continue into `l2`.
pub fn try_add_two_numbers(
    l1: Option<Box<ListNode>>,
    l2: Option<Box<ListNode>>,
) -> Result<Option<Box<ListNode>>> {
    let digits = ListNode::to_digits(&l1)
        .into_iter()
        .chain(ListNode::to_digits(&l2));
    for (position, value) in digits.enumerate() {
        if !(0..=9).contains(&value) {
            debug!("rejecting list sum: node {position} holds {value}");
            return Err(InvalidDigit { position, value }.into());
        }
    }
    Ok(add_two_numbers(l1, l2))
}
