use ov_core::entities::VerificationRecord;
use ov_store::VerificationFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    family: Option<&str>,
    version: Option<&str>,
    level: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let filter = build_filter(family, version, level);

    let rows: Vec<&VerificationRecord> = ctx
        .registry
        .list_verifications(&filter)
        .take(limit)
        .collect();

    output(&rows, flags.format)
}

fn build_filter(
    family: Option<&str>,
    version: Option<&str>,
    level: Option<&str>,
) -> VerificationFilter {
    let mut filter = VerificationFilter::default();
    if let Some(family) = family {
        filter = filter.family(family);
    }
    if let Some(version) = version {
        filter = filter.version(version);
    }
    if let Some(level) = level {
        filter = filter.level(level);
    }
    filter
}
