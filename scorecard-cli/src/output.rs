use colored::*;
use scorecard::ScorecardError;
use scorecard::rubric::Rubric;
use scorecard::scoring::{OverallResult, describe_bounds};
use serde_json::json;

pub struct CliColors;

impl CliColors {
    pub fn success() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }

    pub fn primary() -> Color {
        Color::White
    }

    pub fn accent() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }
}

/// Print an error as JSON or as a colored message on stderr
pub fn output_error(error: &ScorecardError, output_format: &str) {
    if output_format == "json" {
        let error_response = json!({
            "error": error.to_string(),
            "kind": error.kind(),
            "status": "error",
            "timestamp": chrono::Utc::now().to_rfc3339()
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&error_response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        eprintln!("{}", format_error(&error.to_string()));
    }
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

/// Color a 0-100 score by band
pub fn format_score(score: f64) -> ColoredString {
    let text = format!("{:.2}", score);
    if score >= 70.0 {
        text.color(CliColors::success()).bold()
    } else if score >= 40.0 {
        text.color(CliColors::warning()).bold()
    } else {
        text.color(CliColors::error()).bold()
    }
}

/// Truncate to `max` characters, appending an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

pub fn print_score_result(result: &OverallResult) {
    println!("{}", "━━━ Transcript Score ━━━".color(CliColors::accent()).bold());
    println!(
        "{}: {} / 100",
        "Overall".color(CliColors::muted()),
        format_score(result.overall_score)
    );
    println!(
        "{}: {}",
        "Words".color(CliColors::muted()),
        result.metadata.total_words.to_string().color(CliColors::primary())
    );
    println!(
        "{}: semantic {:.2}, keyword {:.2}, length {:.2}",
        "Weights".color(CliColors::muted()),
        result.metadata.semantic_weight,
        result.metadata.keyword_weight,
        result.metadata.length_weight
    );
    println!(
        "{}: {} ({})",
        "Rubric".color(CliColors::muted()),
        result.metadata.rubric_source.color(CliColors::primary()),
        result.metadata.provider.color(CliColors::muted())
    );
    println!();

    println!(
        "{:<24} {:>7} {:>8} {:>8} {:>8} {:>8}",
        "Criterion".color(CliColors::muted()).bold(),
        "Weight".color(CliColors::muted()).bold(),
        "Keyword".color(CliColors::muted()).bold(),
        "Semantic".color(CliColors::muted()).bold(),
        "Length".color(CliColors::muted()).bold(),
        "Score".color(CliColors::muted()).bold()
    );
    println!("{}", "─".repeat(68).color(CliColors::muted()));

    for criterion in &result.per_criterion {
        println!(
            "{:<24} {:>7.1} {:>8.2} {:>8.2} {:>8.2} {:>8}",
            truncate(&criterion.criterion, 24).color(CliColors::primary()),
            criterion.weight,
            criterion.kw_score,
            criterion.sem_score,
            criterion.len_score,
            format_score(criterion.criterion_raw)
        );
    }

    println!();
    println!("{}", "Feedback".color(CliColors::accent()).bold());
    for criterion in &result.per_criterion {
        println!(
            "  {} {}",
            format!("{}:", criterion.criterion).color(CliColors::muted()),
            criterion.feedback
        );
    }
}

pub fn print_rubric(rubric: &Rubric) {
    println!("{}", "━━━ Rubric ━━━".color(CliColors::accent()).bold());
    println!(
        "{}: {}",
        "Source".color(CliColors::muted()),
        rubric.source.color(CliColors::primary())
    );
    println!(
        "{}: {} criteria, total weight {:.1}",
        "Size".color(CliColors::muted()),
        rubric.len(),
        rubric.total_weight()
    );

    for criterion in &rubric.criteria {
        println!();
        println!(
            "{} {}",
            criterion.name.color(CliColors::accent()).bold(),
            format!("(weight {:.1})", criterion.weight).color(CliColors::muted())
        );
        if !criterion.description.is_empty() {
            println!("  {}", criterion.description);
        }
        if !criterion.keywords.is_empty() {
            println!(
                "  {}: {}",
                "Keywords".color(CliColors::muted()),
                criterion.keywords.join(", ").color(CliColors::info())
            );
        }
        if let Some(bounds) = describe_bounds(criterion.min_words, criterion.max_words) {
            println!(
                "  {}: {} words",
                "Length".color(CliColors::muted()),
                bounds
            );
        }
    }
}
