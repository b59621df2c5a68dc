//! An arena-backed doubly-linked list with in-place restructuring operations.

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod collections;

/// Doubly-Linked List Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::dlist;

    #[doc(no_inline)]
    pub use super::collections::doubly_linked_list::{DoublyLinkedList, Node};
}
