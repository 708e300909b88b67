//! list - List cloned repositories under the workspace root

use anyhow::{Context as _, Result};

use super::Context;
use crate::core::workspace::repositories;
use crate::ui::output;
use crate::ui::template::{EntryContext, LIST_TEMPLATE};

pub fn list(ctx: &Context, level: usize) -> Result<()> {
    let template = ctx.template(ctx.config.list_output(), LIST_TEMPLATE)?;

    for entry in repositories(&ctx.root, level) {
        let entry = entry.context("Failed to find repositories")?;

        if ctx.json {
            output::json(&entry).context("Failed to write output")?;
        } else {
            let line = template.render(&EntryContext::new(&entry, &ctx.root))?;
            output::data(line).context("Failed to write output")?;
        }
    }

    Ok(())
}
