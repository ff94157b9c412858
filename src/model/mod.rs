//! Pure data structures; [`StockLevel`] implements the [`Document`](doc_store::Document) trait.

pub mod item;

pub use item::*;
