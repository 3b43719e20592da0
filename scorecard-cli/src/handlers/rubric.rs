//! Rubric command handler

use crate::args::RubricArgs;
use crate::context::ScorecardCliContext;
use crate::output::*;

pub fn handle_rubric_command(
    args: RubricArgs,
    ctx: ScorecardCliContext,
    output_format: &str,
) -> scorecard::Result<()> {
    let rubric = ctx.with_rubric(args.rubric.as_deref()).rubric()?;

    if output_format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&rubric).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        print_rubric(&rubric);
    }

    Ok(())
}
