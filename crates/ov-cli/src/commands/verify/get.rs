use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx
        .registry
        .verification(id)
        .ok_or_else(|| anyhow::anyhow!("verification '{id}' not found"))?;

    output(record, flags.format)
}
