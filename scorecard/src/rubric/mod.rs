//! Rubrics: the weighted criteria a transcript is scored against
//!
//! A [`Rubric`] is either the builtin self-introduction rubric or loaded
//! from a TOML, YAML or JSON file. Once loaded it is never modified; the
//! scorer shares it behind an `Arc`.

mod builtin;
mod keywords;
mod loader;
mod model;

pub use builtin::builtin_criteria;
pub use keywords::{normalize_keywords, parse_keywords};
pub use model::{Criterion, CriterionBuilder, Rubric};
