//! Contains functionality shared by all sorting engines.

mod dominance;
pub use self::dominance::*;

mod index_sort;
pub use self::index_sort::*;

mod presort;
pub use self::presort::*;
