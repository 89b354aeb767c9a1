//! Optimization safety checks.

use ov_core::entities::{CompilerFamily, CompilerVersion};
use ov_core::enums::CheckOutcome;
use ov_core::reports::{SafetyCheck, SafetyCheckResult};

/// Checks reported for every family × version × level combination.
pub const SAFETY_CHECK_NAMES: [&str; 6] = [
    "undefined_behavior_preservation",
    "volatile_access_ordering",
    "floating_point_semantics",
    "strict_aliasing",
    "integer_overflow_semantics",
    "memory_ordering",
];

/// Runs the safety checks for one compiler version at one optimization level.
pub trait SafetyChecker {
    fn run(
        &self,
        family: &CompilerFamily,
        version: &CompilerVersion,
        optimization_level: &str,
    ) -> Vec<SafetyCheck>;
}

/// Executes nothing. Every check comes back as
/// [`SafetyCheckResult::Placeholder`] with a nominal `PASS`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderSafetyChecker;

impl SafetyChecker for PlaceholderSafetyChecker {
    fn run(
        &self,
        _family: &CompilerFamily,
        _version: &CompilerVersion,
        _optimization_level: &str,
    ) -> Vec<SafetyCheck> {
        SAFETY_CHECK_NAMES
            .iter()
            .map(|name| SafetyCheck {
                name: (*name).to_string(),
                result: SafetyCheckResult::Placeholder {
                    nominal: CheckOutcome::Pass,
                },
            })
            .collect()
    }
}
