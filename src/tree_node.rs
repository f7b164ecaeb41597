use std::{cell::RefCell, collections::VecDeque, rc::Rc};

/// A possibly empty, shared binary tree.
pub type Tree = Option<Rc<RefCell<TreeNode>>>;

#[derive(Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i32,
    pub left: Tree,
    pub right: Tree,
}

impl TreeNode {
    #[inline]
    pub fn new(val: i32) -> Self {
        TreeNode {
            val,
            left: None,
            right: None,
        }
    }

    pub fn with_children(val: i32, left: Tree, right: Tree) -> Self {
        TreeNode { val, left, right }
    }

    /// Builds a tree from breadth-first values, `None` marking a missing
    /// child: `[1, 3, 2, 5]` is
    ///
    /// ```text
    ///       1
    ///      / \
    ///     3   2
    ///    /
    ///   5
    /// ```
    ///
    /// Children of a missing node are not listed.
    pub fn from_level_order(values: &[Option<i32>]) -> Tree {
        let mut values = values.iter().copied();
        let root = Rc::new(RefCell::new(TreeNode::new(values.next().flatten()?)));

        let mut queue = VecDeque::from([Rc::clone(&root)]);
        while let Some(parent) = queue.pop_front() {
            let mut guard = parent.borrow_mut();
            let parent = &mut *guard;
            for slot in [&mut parent.left, &mut parent.right] {
                match values.next() {
                    None => return Some(root),
                    Some(None) => {}
                    Some(Some(val)) => {
                        let child = Rc::new(RefCell::new(TreeNode::new(val)));
                        queue.push_back(Rc::clone(&child));
                        *slot = Some(child);
                    }
                }
            }
        }

        Some(root)
    }

    /// Inverse of [`TreeNode::from_level_order`], trailing `None`s trimmed.
    pub fn to_level_order(root: &Tree) -> Vec<Option<i32>> {
        let mut values = vec![];
        let mut queue = VecDeque::from([root.clone()]);
        while let Some(node) = queue.pop_front() {
            match node {
                Some(node) => {
                    let node = node.borrow();
                    values.push(Some(node.val));
                    queue.push_back(node.left.clone());
                    queue.push_back(node.right.clone());
                }
                None => values.push(None),
            }
        }

        while values.last() == Some(&None) {
            values.pop();
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_order_round_trip() {
        let values = [Some(1), Some(3), Some(2), Some(5)];
        let tree = TreeNode::from_level_order(&values);
        assert_eq!(TreeNode::to_level_order(&tree), values.to_vec());
    }

    #[test]
    fn holes_skip_missing_children() {
        let values = [Some(2), Some(1), Some(3), None, Some(4), None, Some(7)];
        let tree = TreeNode::from_level_order(&values);
        let root = tree.as_ref().map(|node| node.borrow().val);
        assert_eq!(root, Some(2));

        let expected = Some(Rc::new(RefCell::new(TreeNode::with_children(
            2,
            Some(Rc::new(RefCell::new(TreeNode::with_children(
                1,
                None,
                Some(Rc::new(RefCell::new(TreeNode::new(4)))),
            )))),
            Some(Rc::new(RefCell::new(TreeNode::with_children(
                3,
                None,
                Some(Rc::new(RefCell::new(TreeNode::new(7)))),
            )))),
        ))));
        assert_eq!(tree, expected);
        assert_eq!(TreeNode::to_level_order(&tree), values.to_vec());
    }

    #[test]
    fn empty_tree() {
        assert_eq!(TreeNode::from_level_order(&[]), None);
        assert_eq!(TreeNode::from_level_order(&[None, Some(1)]), None);
        assert!(TreeNode::to_level_order(&None).is_empty());
    }
}
