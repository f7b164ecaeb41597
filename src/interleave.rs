//! Interleaving strings.
//!
//! `s3` is an interleaving of `s1` and `s2` when it can be cut into items
//! drawn from `s1` and `s2`, each source consumed front to back and
//! completely. Alternation is not required: `"cabd"` interleaves `"ab"`
//! and `"cd"`, while `"abdc"` does not since it takes `d` before `c`.
//!
//! Both checkers fill the same reachability recurrence,
//!
//! ```text
//! dp[i][j] = (dp[i-1][j] && s1[i-1] == s3[i+j-1])
//!         || (dp[i][j-1] && s2[j-1] == s3[i+j-1])
//! ```
//!
//! where `dp[i][j]` says the first `i` items of `s1` and the first `j` items
//! of `s2` reproduce the first `i+j` items of `s3`. [`interleaves_table`]
//! keeps the whole grid, [`interleaves_rolling`] keeps one row.

use std::{fmt::Display, str::FromStr};

use log::{debug, trace};

use crate::{Result, UnknownMethod};

/// Which of the two dynamic programs to run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `(m+1) x (n+1)` table, O(m·n) space.
    Table,
    /// One row of `n+1` cells rewritten in place, O(n) space.
    #[default]
    RollingRow,
}

impl Method {
    pub fn check<T: PartialEq>(self, s1: &[T], s2: &[T], s3: &[T]) -> bool {
        match self {
            Method::Table => interleaves_table(s1, s2, s3),
            Method::RollingRow => interleaves_rolling(s1, s2, s3),
        }
    }

    pub fn check_str(self, s1: &str, s2: &str, s3: &str) -> bool {
        match self {
            Method::Table => is_interleave(s1, s2, s3),
            Method::RollingRow => is_interleave_optimized(s1, s2, s3),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Table => write!(f, "table"),
            Method::RollingRow => write!(f, "rolling-row"),
        }
    }
}

impl FromStr for Method {
    type Err = crate::SolutionErrors;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Method::Table),
            "rolling-row" | "rolling" => Ok(Method::RollingRow),
            _ => Err(UnknownMethod(s.to_string()).into()),
        }
    }
}

/// Full-table check over Unicode scalar values.
pub fn is_interleave(s1: &str, s2: &str, s3: &str) -> bool {
    with_chars(s1, s2, s3, interleaves_table)
}

/// Rolling-row check over Unicode scalar values. Same answers as
/// [`is_interleave`] for every input.
pub fn is_interleave_optimized(s1: &str, s2: &str, s3: &str) -> bool {
    with_chars(s1, s2, s3, interleaves_rolling)
}

fn with_chars(
    s1: &str,
    s2: &str,
    s3: &str,
    check: fn(&[char], &[char], &[char]) -> bool,
) -> bool {
    let (c1, c2, c3) = (s1.chars().count(), s2.chars().count(), s3.chars().count());
    if lengths_mismatch(c1, c2, c3) {
        return false;
    }
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    let s3: Vec<char> = s3.chars().collect();
    check(&s1, &s2, &s3)
}

fn lengths_mismatch(m: usize, n: usize, total: usize) -> bool {
    let mismatch = m.checked_add(n) != Some(total);
    if mismatch {
        debug!("fast reject: {m} + {n} != {total}");
    }
    mismatch
}

/// Fills the whole `(m+1) x (n+1)` reachability table and reads `dp[m][n]`.
pub fn interleaves_table<T: PartialEq>(s1: &[T], s2: &[T], s3: &[T]) -> bool {
    let (m, n) = (s1.len(), s2.len());
    if lengths_mismatch(m, n, s3.len()) {
        return false;
    }
    trace!("table: {} x {}", m + 1, n + 1);

    let mut dp = vec![vec![false; n + 1]; m + 1];
    dp[0][0] = true;

    // only s1 consumed
    for i in 1..=m {
        dp[i][0] = dp[i - 1][0] && s1[i - 1] == s3[i - 1];
    }
    // only s2 consumed
    for j in 1..=n {
        dp[0][j] = dp[0][j - 1] && s2[j - 1] == s3[j - 1];
    }

    for i in 1..=m {
        for j in 1..=n {
            let next = &s3[i + j - 1];
            let from_s1 = dp[i - 1][j] && s1[i - 1] == *next;
            let from_s2 = dp[i][j - 1] && s2[j - 1] == *next;
            dp[i][j] = from_s1 || from_s2;
        }
    }

    dp[m][n]
}

/// Same recurrence as [`interleaves_table`], keeping a single row.
///
/// On entry to pass `i`, `dp` holds row `i - 1`. Column 0 is rewritten
/// first; every later column then reads `dp[j]` (still row `i - 1`, the
/// cell above) and `dp[j - 1]` (already row `i`, the cell to the left)
/// before overwriting `dp[j]`. Walking the columns in any other order reads
/// a stale left neighbour.
pub fn interleaves_rolling<T: PartialEq>(s1: &[T], s2: &[T], s3: &[T]) -> bool {
    let (m, n) = (s1.len(), s2.len());
    if lengths_mismatch(m, n, s3.len()) {
        return false;
    }
    trace!("rolling row: {} cells, {} passes", n + 1, m);

    let mut dp = vec![false; n + 1];
    dp[0] = true;
    for j in 1..=n {
        dp[j] = dp[j - 1] && s2[j - 1] == s3[j - 1];
    }

    for i in 1..=m {
        dp[0] = dp[0] && s1[i - 1] == s3[i - 1];
        for j in 1..=n {
            let next = &s3[i + j - 1];
            let from_s1 = dp[j] && s1[i - 1] == *next;
            let from_s2 = dp[j - 1] && s2[j - 1] == *next;
            dp[j] = from_s1 || from_s2;
        }
    }

    dp[n]
}
