//! This module contains non-dominated sorting engines and their building blocks.

pub mod common;
pub mod rank_query;

mod dcns;
pub use self::dcns::*;

mod domtree;
pub use self::domtree::*;

mod fnds;
pub use self::fnds::*;

pub mod jfb;
pub use self::jfb::JensenFortinBuzdalov;
