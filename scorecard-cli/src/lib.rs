pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use context::ScorecardCliContext;
pub use output::{
    CliColors, format_error, format_info, format_score, output_error,
    print_rubric, print_score_result,
};
