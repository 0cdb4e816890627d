mod iter;
mod linked_list;
mod node;

pub use iter::*;
pub use linked_list::*;
pub use node::Node;
pub(crate) use node::Link;
