//! Collection Types.

pub mod doubly_linked_list;

/// Collections Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::dlist;

    #[doc(no_inline)]
    pub use super::doubly_linked_list::{DoublyLinkedList, Node};
}
