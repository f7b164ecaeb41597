use std::{cell::RefCell, rc::Rc};

use crate::{Tree, TreeNode};

/// Overlays `t2` on `t1`: where both trees have a node the result has one
/// node holding the sum, elsewhere it has whichever node exists.
///
/// Neither input is mutated. Subtrees present on only one side are shared
/// with that input rather than copied.
pub fn merge_trees(t1: Tree, t2: Tree) -> Tree {
    match (t1, t2) {
        (None, other) | (other, None) => other,
        (Some(a), Some(b)) => {
            let (a, b) = (a.borrow(), b.borrow());
            Some(Rc::new(RefCell::new(TreeNode::with_children(
                a.val + b.val,
                merge_trees(a.left.clone(), b.left.clone()),
                merge_trees(a.right.clone(), b.right.clone()),
            ))))
        }
    }
}
