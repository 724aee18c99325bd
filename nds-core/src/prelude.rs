//! This module reimports a common used types.

pub use crate::NonDominatedSorting;

pub use crate::builder::Algorithm;
pub use crate::builder::NonDominatedSortingBuilder;

pub use crate::algorithms::FrontSearch;
pub use crate::algorithms::LayerMerge;
pub use crate::algorithms::jfb::BaseCaseStrategy;
pub use crate::algorithms::jfb::ThresholdPolicy;
pub use crate::algorithms::rank_query::RankQueryBacking;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
