//! root - Print the workspace root

use anyhow::{Context as _, Result};

use super::Context;
use crate::ui::output;

pub fn root(ctx: &Context) -> Result<()> {
    output::data(ctx.root.display()).context("Failed to write output")
}
