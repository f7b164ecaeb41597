use std::cmp::Ordering;

use log::debug;

use crate::{Result, UnsortedSlice};

/// Index of `target` in the ascending slice `nums`, or `None`.
///
/// With duplicates any matching index may come back.
pub fn search<T: Ord>(nums: &[T], target: &T) -> Option<usize> {
    // [l, r)
    let (mut l, mut r) = (0, nums.len());
    while l < r {
        let mid = l + (r - l) / 2;
        match nums[mid].cmp(target) {
            Ordering::Less => l = mid + 1,
            Ordering::Greater => r = mid,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}

/// [`search`], refusing slices that are not sorted ascending.
pub fn try_search<T: Ord>(nums: &[T], target: &T) -> Result<Option<usize>> {
    if let Some(index) = nums.windows(2).position(|pair| pair[0] > pair[1]) {
        debug!("refusing to search, slice descends at {index}");
        return Err(UnsortedSlice { index }.into());
    }
    Ok(search(nums, target))
}
