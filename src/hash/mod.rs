pub mod map;

#[doc(inline)]
pub use map::ChainedHashMap;
