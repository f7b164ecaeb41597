//! Pure-function solutions to a handful of classic algorithm problems.
//!
//! The centrepiece is [`is_interleave`] and [`is_interleave_optimized`]:
//! deciding whether one string is an interleaving of two others, once with
//! a full `(m+1) x (n+1)` table and once with a single rolling row. The remaining modules are small peers
//! operating on explicit structures (digit lists, binary trees, sorted
//! slices).
//!
//! Nothing here performs I/O. Diagnostics go through the `log` facade and
//! are silent unless the caller installs a logger.

mod add_two_numbers;
mod assign_cookies;
mod binary_search;
mod errors;
mod interleave;
mod list_node;
mod merge_trees;
mod tree_node;

pub use errors::{InvalidDigit, SolutionErrors, UnknownMethod, UnsortedSlice};

pub type Result<T> = std::result::Result<T, SolutionErrors>;

pub use add_two_numbers::{add_two_numbers, try_add_two_numbers};
pub use assign_cookies::find_content_children;
pub use binary_search::{search, try_search};
pub use interleave::{
    interleaves_rolling, interleaves_table, is_interleave, is_interleave_optimized, Method,
};
pub use list_node::ListNode;
pub use merge_trees::merge_trees;
pub use tree_node::{Tree, TreeNode};

#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
