pub use self::random::*;

use crate::utils::DefaultRandom;

pub fn create_test_random() -> DefaultRandom {
    DefaultRandom::new_with_seed(0)
}
