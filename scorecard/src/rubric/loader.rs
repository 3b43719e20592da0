//! Loading rubrics from TOML, YAML or JSON files
//!
//! A rubric file holds a top-level `criteria` array:
//!
//! ```toml
//! [[criteria]]
//! criterion = "Salutation Level"
//! description = "Quality and appropriateness of greeting"
//! keywords = "hello, hi, good morning"
//! weight = 5
//!
//! [[criteria]]
//! name = "Speech Rate"
//! weight = 10
//! min_words = 80
//! max_words = 160
//! ```

use figment::{
    Figment,
    providers::{Format, Json, Toml, Yaml},
};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

use super::model::{Criterion, Rubric};
use crate::{Result, ScorecardError};

#[derive(Debug, Deserialize)]
struct RubricFile {
    #[serde(default)]
    criteria: Vec<Criterion>,
}

impl Rubric {
    /// Load and validate a rubric file. The format follows the extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading rubric from: {}", path.display());

        if !path.exists() {
            return Err(ScorecardError::InvalidRubric(format!(
                "Rubric file not found: {}",
                path.display()
            )));
        }

        let figment = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Figment::from(Toml::file(path)),
            Some("yaml") | Some("yml") => Figment::from(Yaml::file(path)),
            Some("json") => Figment::from(Json::file(path)),
            _ => {
                return Err(ScorecardError::InvalidRubric(format!(
                    "Unsupported rubric format: {}",
                    path.display()
                )));
            }
        };

        let file: RubricFile = figment.extract().map_err(|e| {
            ScorecardError::InvalidRubric(format!(
                "Failed to parse rubric {}: {}",
                path.display(),
                e
            ))
        })?;

        let rubric = Rubric::new(path.display().to_string(), file.criteria)?;

        info!("Loaded {} criteria from rubric", rubric.len());
        for criterion in &rubric.criteria {
            debug!(
                weight = criterion.weight,
                min_words = ?criterion.min_words,
                max_words = ?criterion.max_words,
                "  - {}",
                criterion.name
            );
        }

        Ok(rubric)
    }

    /// Load the rubric at `path`, or the builtin rubric when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No rubric file configured, using builtin rubric");
                Ok(Self::builtin())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_rubric(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_toml_rubric() {
        let file = write_rubric(
            ".toml",
            r#"
[[criteria]]
criterion = "Salutation Level"
description = "Greets the audience"
keywords = "Hello; Good Morning"
weight = 5

[[criteria]]
name = "Speech Rate"
weight = 10.0
minwords = 80
max_words_count = 160
"#,
        );

        let rubric = Rubric::from_file(file.path()).unwrap();
        assert_eq!(rubric.len(), 2);
        assert_eq!(rubric.source, file.path().display().to_string());
        assert_eq!(rubric.criteria[0].name, "Salutation Level");
        assert_eq!(rubric.criteria[0].keywords, vec!["hello", "good morning"]);
        assert_eq!(rubric.criteria[0].weight, 5.0);
        assert_eq!(rubric.criteria[1].min_words, Some(80));
        assert_eq!(rubric.criteria[1].max_words, Some(160));
        assert!(rubric.criteria[1].keywords.is_empty());
    }

    #[test]
    fn test_load_yaml_rubric_with_keyword_list() {
        let file = write_rubric(
            ".yaml",
            r#"
criteria:
  - name: Engagement
    description: Positive, enthusiastic tone
    keywords: [Enjoy, "  love  ", ""]
  - name: Clarity
    weight: 2
"#,
        );

        let rubric = Rubric::from_file(file.path()).unwrap();
        assert_eq!(rubric.criteria[0].keywords, vec!["enjoy", "love"]);
        assert_eq!(rubric.criteria[0].weight, 1.0);
        assert_eq!(rubric.criteria[1].weight, 2.0);
    }

    #[test]
    fn test_load_json_rubric() {
        let file = write_rubric(
            ".json",
            r#"{"criteria": [{"criterion": "Flow", "keywords": "thank you/finally", "weight": 3}]}"#,
        );

        let rubric = Rubric::from_file(file.path()).unwrap();
        assert_eq!(rubric.criteria[0].keywords, vec!["thank you", "finally"]);
    }

    #[test]
    fn test_invalid_rubric_files() {
        let empty = write_rubric(".toml", "");
        assert!(matches!(
            Rubric::from_file(empty.path()),
            Err(ScorecardError::InvalidRubric(_))
        ));

        let zero = write_rubric(
            ".json",
            r#"{"criteria": [{"name": "A", "weight": 0}, {"name": "B", "weight": 0}]}"#,
        );
        assert!(matches!(
            Rubric::from_file(zero.path()),
            Err(ScorecardError::InvalidRubric(_))
        ));

        let unsupported = write_rubric(".xlsx", "binary");
        assert!(matches!(
            Rubric::from_file(unsupported.path()),
            Err(ScorecardError::InvalidRubric(_))
        ));

        assert!(matches!(
            Rubric::from_file("/no/such/rubric.toml"),
            Err(ScorecardError::InvalidRubric(_))
        ));
    }

    #[test]
    fn test_load_falls_back_to_builtin() {
        let rubric = Rubric::load(None).unwrap();
        assert_eq!(rubric.source, Rubric::BUILTIN_SOURCE);
    }
}
