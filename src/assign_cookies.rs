/// How many children can be made content, each child `i` needing one cookie
/// of size at least `greed[i]` and each cookie going to at most one child.
///
/// Greedy over sorted copies: cookies smallest first, each handed to the
/// least greedy child still waiting if it is big enough, discarded otherwise.
pub fn find_content_children(greed: &[i32], sizes: &[i32]) -> usize {
    let mut greed = greed.to_vec();
    let mut sizes = sizes.to_vec();
    greed.sort_unstable();
    sizes.sort_unstable();

    let mut content = 0;
    for size in sizes {
        if content == greed.len() {
            break;
        }
        if greed[content] <= size {
            content += 1;
        }
    }
    content
}
