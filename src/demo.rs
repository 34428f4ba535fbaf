use crate::{
    config::DemoConfig,
    overflow::{OverflowError, OverflowPolicy},
};

/// The adder component.
///
/// `Demo` owns nothing but its overflow policy, so constructing, copying and
/// dropping one has no observable effect. It is safe to share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Demo {
    policy: OverflowPolicy,
}

impl Demo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &DemoConfig) -> Self {
        Self::with_policy(config.overflow)
    }

    pub fn with_policy(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Returns `a + b`, wrapping on overflow regardless of the configured policy.
    pub fn add(&self, a: i32, b: i32) -> i32 {
        add(a, b)
    }

    /// Returns `a + b` under the configured [`OverflowPolicy`].
    pub fn try_add(&self, a: i32, b: i32) -> Result<i32, OverflowError> {
        self.policy.apply(a, b)
    }
}

/// Wrapping `i32` addition.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}
