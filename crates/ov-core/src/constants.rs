//! Fixed values shared by the store, registry, and report generator.

/// Version string stamped into every report's `metadata.tool_version`.
pub const TOOL_VERSION: &str = "1.0.0";

/// Requirement tags attached to every verification record.
pub const REQUIREMENT_TAGS: [&str; 3] = [
    "REQ-OPT-VERIFY-001",
    "REQ-OPT-VERIFY-002",
    "REQ-OPT-VERIFY-003",
];

/// Optimization levels supported by the seeded compiler families.
pub const DEFAULT_OPTIMIZATION_LEVELS: [&str; 4] = ["-O0", "-O1", "-O2", "-Os"];

/// Compiler families present in a freshly initialized store: `(id, display_name)`.
pub const SEEDED_FAMILIES: [(&str, &str); 2] = [
    ("gcc", "GNU Compiler Collection"),
    ("clang", "Clang/LLVM"),
];

/// Requirement tags as owned strings, in declaration order.
#[must_use]
pub fn requirement_tags() -> Vec<String> {
    REQUIREMENT_TAGS.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_tags_are_ordered() {
        assert_eq!(
            requirement_tags(),
            vec![
                "REQ-OPT-VERIFY-001".to_string(),
                "REQ-OPT-VERIFY-002".to_string(),
                "REQ-OPT-VERIFY-003".to_string(),
            ]
        );
    }

    #[test]
    fn default_levels_exclude_o3() {
        assert!(!DEFAULT_OPTIMIZATION_LEVELS.contains(&"-O3"));
    }
}
