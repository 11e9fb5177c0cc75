mod chained_hash_map;
mod iter;
mod node;

pub use chained_hash_map::*;
pub use iter::*;
pub(crate) use node::*;
