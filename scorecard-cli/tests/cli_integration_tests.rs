//! Integration tests for the Scorecard CLI
//!
//! These tests cover argument parsing, rubric resolution, scoring through the
//! CLI context and completion generation.

use clap::Parser;
use scorecard::config::ConfigBuilder;
use scorecard_cli::args::Shell;
use scorecard_cli::handlers::handle_completions_command;
use scorecard_cli::{Cli, Commands, ScorecardCliContext};
use std::io::Write;
use std::path::Path;

fn test_context() -> ScorecardCliContext {
    let config = ConfigBuilder::testing()
        .build()
        .expect("Failed to build config");
    ScorecardCliContext::from_config(config)
}

fn write_rubric(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("rubric.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"
[[criteria]]
criterion = "Introduction"
description = "Greets the audience and says their name"
keywords = "hello, name"
weight = 10
min_words = 5
max_words = 50

[[criteria]]
name = "Closing"
description = "Thanks the audience"
keywords = ["thank you"]
weight = 5
"#
    )
    .unwrap();
    path
}

mod parsing {
    use super::*;

    #[test]
    fn test_score_with_weights() {
        let cli = Cli::try_parse_from([
            "scorecard-cli",
            "score",
            "--text",
            "Hello there",
            "--semantic-weight",
            "0.4",
            "--keyword-weight",
            "0.5",
            "--length-weight",
            "0.1",
            "--output",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.output, "json");
        match cli.command {
            Commands::Score(args) => {
                assert_eq!(args.text.as_deref(), Some("Hello there"));
                let overrides = args.weight_overrides().unwrap();
                assert_eq!(overrides.semantic_weight, Some(0.4));
                assert_eq!(overrides.keyword_weight, Some(0.5));
                assert_eq!(overrides.length_weight, Some(0.1));
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn test_score_without_weights_has_no_overrides() {
        let cli = Cli::try_parse_from(["scorecard-cli", "score", "intro.txt"]).unwrap();
        match cli.command {
            Commands::Score(args) => {
                assert!(args.weight_overrides().is_none());
                assert_eq!(args.file.as_deref(), Some(Path::new("intro.txt")));
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn test_file_and_text_conflict() {
        let result =
            Cli::try_parse_from(["scorecard-cli", "score", "intro.txt", "--text", "Hello"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        let result = Cli::try_parse_from(["scorecard-cli", "rubric", "--output", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_completions_shell() {
        let cli = Cli::try_parse_from(["scorecard-cli", "completions", "powershell"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.shell, Shell::Power),
            _ => panic!("expected completions command"),
        }
    }
}

mod scoring {
    use super::*;

    #[test]
    fn test_builtin_rubric_by_default() {
        let rubric = test_context().rubric().unwrap();
        assert_eq!(rubric.source, "builtin");
        assert_eq!(rubric.len(), 8);
    }

    #[test]
    fn test_rubric_flag_replaces_rubric() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_rubric(dir.path());

        let rubric = test_context().with_rubric(Some(&path)).rubric().unwrap();
        assert_eq!(rubric.len(), 2);
        assert_eq!(rubric.criteria[0].keywords, vec!["hello", "name"]);
        assert_eq!(rubric.criteria[1].weight, 5.0);
        assert_eq!(rubric.criteria[1].max_words, None);
    }

    #[test]
    fn test_score_with_rubric_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_rubric(dir.path());

        let scorer = test_context().with_rubric(Some(&path)).scorer().unwrap();
        let result = scorer
            .score("Hello, my name is Sam. Thank you for listening.", None)
            .unwrap();

        assert_eq!(result.per_criterion.len(), 2);
        assert_eq!(result.per_criterion[0].kw_score, 100.0);
        assert_eq!(result.per_criterion[1].kw_score, 100.0);
        assert!((0.0..=100.0).contains(&result.overall_score));
        assert_eq!(result.metadata.rubric_source, path.display().to_string());
    }

    #[test]
    fn test_missing_rubric_file_fails() {
        let ctx = test_context().with_rubric(Some(Path::new("/definitely/not/here.toml")));
        let result = ctx.scorer();
        assert!(matches!(
            result,
            Err(scorecard::ScorecardError::InvalidRubric(_))
        ));
    }
}

#[test]
fn test_completions_mention_binary() {
    let mut out = Vec::new();
    let cli = Cli::try_parse_from(["scorecard-cli", "completions", "bash"]).unwrap();
    let Commands::Completions(args) = cli.command else {
        panic!("expected completions command");
    };

    handle_completions_command(args, &mut out);

    let script = String::from_utf8(out).unwrap();
    assert!(script.contains("scorecard-cli"));
    assert!(script.contains("score"));
}
