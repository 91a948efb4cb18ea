/// Errors returned by the fallible operations on [`LinkedList`][crate::linked_list::LinkedList].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A position-based operation was given an index past the end of the list.
    #[error("index {index} is out of range for a list of length {len}")]
    OutOfRange {
        /// The index that was asked for.
        index: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },
    /// A value-based operation couldn't find the value.
    #[error("value not found")]
    NotFound,
    /// The operation needs at least one element.
    #[error("the operation doesn't work on an empty collection")]
    EmptyCollection,
}
