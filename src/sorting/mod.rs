//! Array-sorting automata
//!
//! Each sort owns a [`SortArray`] rebuilt from its [`ArraySource`] on reset,
//! plus the cursors that stand in for the reference algorithm's loop counters
//! or call stack:
//!
//! | Automaton            | Control state                                  |
//! |----------------------|------------------------------------------------|
//! | [`BubbleSort`]       | `(i, j)`                                       |
//! | [`SelectionSort`]    | `(i, j, min)`                                  |
//! | [`InsertionSort`]    | `(i, hole, key)`                               |
//! | [`MergeSort`]        | `(size, left_start)` + `Idle/Merging` phase    |
//! | [`QuickSort`]        | `(low, high)` range stack + `Idle/Partitioning`|
//! | [`HeapSort`]         | `Idle/Building/Heapifying/Sorting` phase       |
//!
//! One step is one comparison, one shift, one placement or one phase
//! transition, never a whole pass.
//!
//! [`SortArray`]: crate::model::array::SortArray
//! [`ArraySource`]: crate::model::array::ArraySource

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::BubbleSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;
