use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    family: &str,
    version: &str,
    level: &str,
    evidence: Vec<String>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let record = ctx
        .registry
        .record_verification(id, family, version, level, evidence)?;
    ctx.save()?;

    output(&record, flags.format)
}
