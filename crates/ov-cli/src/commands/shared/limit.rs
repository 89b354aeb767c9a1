/// Row cap for list commands: `--limit` on the subcommand, then the global
/// `--limit`, then `general.default_limit` from config.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, configured: u32) -> usize {
    let limit = local.or(global).unwrap_or(configured);
    usize::try_from(limit).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn subcommand_limit_wins() {
        assert_eq!(effective_limit(Some(5), Some(10), 20), 5);
    }

    #[test]
    fn global_limit_beats_config() {
        assert_eq!(effective_limit(None, Some(10), 20), 10);
    }

    #[test]
    fn config_limit_is_last_resort() {
        assert_eq!(effective_limit(None, None, 20), 20);
    }
}
