use thiserror::Error;

/// A list node held something other than a single decimal digit.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("node {position} holds {value}, expected a digit in 0..=9")]
pub struct InvalidDigit {
    pub position: usize,
    pub value: i32,
}

/// `nums[index] > nums[index + 1]`
#[derive(Debug, Error, PartialEq, Eq)]
#[error("slice descends at index {index}")]
pub struct UnsortedSlice {
    pub index: usize,
}

/// A name that parses to no [`crate::Method`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown interleaving method `{0}`")]
pub struct UnknownMethod(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolutionErrors {
    #[error(transparent)]
    InvalidDigit(#[from] InvalidDigit),
    #[error(transparent)]
    UnsortedSlice(#[from] UnsortedSlice),
    #[error(transparent)]
    UnknownMethod(#[from] UnknownMethod),
}
