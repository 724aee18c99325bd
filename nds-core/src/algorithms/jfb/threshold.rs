//! Threshold policies decide, per recursive call, whether a base case algorithm should take over.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/jfb/threshold_test.rs"]
mod threshold_test;

use crate::utils::{Float, GenericResult};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Specifies how a cutoff size for a base case is determined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThresholdPolicy {
    /// A fixed cutoff.
    Constant(usize),
    /// A cutoff derived from the slice size and the amount of objectives still in play:
    /// `base * min(obj, floor(log2(size)))`.
    Dynamic(usize),
    /// The same as `Dynamic`, but multiplied by a factor which grows by `growth` every time the base
    /// case is used. The factor never decreases during the lifetime of a sorter.
    DynamicAdjustable {
        /// A base cutoff.
        base: usize,
        /// A growth factor, should be greater than one.
        growth: Float,
    },
}

impl ThresholdPolicy {
    /// Checks whether the policy is properly configured.
    pub fn validate(&self) -> GenericResult<()> {
        match self {
            Self::DynamicAdjustable { growth, .. } if !growth.is_finite() || *growth <= 1. => {
                Err(format!("growth factor should be a finite number greater than one, got {growth}").into())
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for ThresholdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "constant {value}"),
            Self::Dynamic(base) => write!(f, "dynamic {base}"),
            Self::DynamicAdjustable { base, growth } => write!(f, "dynamic {base}, adjustable x{growth}"),
        }
    }
}

/// A threshold state owned by a single sorter instance.
pub struct Threshold {
    policy: ThresholdPolicy,
    multiplier: AtomicU64,
}

impl Threshold {
    /// Creates a new instance of `Threshold` with a fresh multiplier.
    pub fn new(policy: ThresholdPolicy) -> Self {
        Self { policy, multiplier: AtomicU64::new((1. as Float).to_bits()) }
    }

    /// Returns the underlying policy.
    pub fn policy(&self) -> ThresholdPolicy {
        self.policy
    }

    /// Returns the current value of the adjustable multiplier.
    pub fn multiplier(&self) -> Float {
        Float::from_bits(self.multiplier.load(Ordering::Relaxed))
    }

    /// Returns the cutoff size for a slice of `size` points with objectives `1..=obj` in play.
    pub fn cutoff(&self, size: usize, obj: usize) -> Float {
        match self.policy {
            ThresholdPolicy::Constant(value) => value as Float,
            ThresholdPolicy::Dynamic(base) => dynamic_cutoff(base, size, obj),
            ThresholdPolicy::DynamicAdjustable { base, .. } => dynamic_cutoff(base, size, obj) * self.multiplier(),
        }
    }

    /// Checks whether the base case should be used and records the decision.
    pub fn should_use_base_case(&self, size: usize, obj: usize) -> bool {
        let accepted = size as Float <= self.cutoff(size, obj);

        if let (true, ThresholdPolicy::DynamicAdjustable { growth, .. }) = (accepted, self.policy) {
            let _ = self.multiplier.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |bits| {
                Some((Float::from_bits(bits) * growth).to_bits())
            });
        }

        accepted
    }
}

fn dynamic_cutoff(base: usize, size: usize, obj: usize) -> Float {
    let scale = obj.min(size.max(2).ilog2() as usize).max(1);

    base.saturating_mul(scale) as Float
}
