//! Keyword list parsing shared by the rubric loader and builder

use serde::{Deserialize, Deserializer};

/// Split a keyword string on `,`, `;`, `|` or `/`.
///
/// Keywords are trimmed and lowercased; empty entries are dropped. Order is
/// preserved.
///
/// ```rust
/// use scorecard::rubric::parse_keywords;
///
/// assert_eq!(
///     parse_keywords("Hello; good morning | hi,,"),
///     vec!["hello", "good morning", "hi"]
/// );
/// ```
pub fn parse_keywords(keywords: &str) -> Vec<String> {
    keywords
        .split([',', ';', '|', '/'])
        .filter_map(normalize_keyword)
        .collect()
}

/// Normalize keywords that are already split into a list
pub fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .filter_map(|keyword| normalize_keyword(keyword.as_ref()))
        .collect()
}

fn normalize_keyword(keyword: &str) -> Option<String> {
    let keyword = keyword.trim();
    (!keyword.is_empty()).then(|| keyword.to_lowercase())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KeywordField {
    Text(String),
    List(Vec<String>),
}

/// Accepts either a separated string or a list of strings
pub(crate) fn deserialize_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = Option::<KeywordField>::deserialize(deserializer)?;
    Ok(match field {
        Some(KeywordField::Text(text)) => parse_keywords(&text),
        Some(KeywordField::List(list)) => normalize_keywords(list),
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords_separators() {
        assert_eq!(
            parse_keywords("name,age;class|school/family"),
            vec!["name", "age", "class", "school", "family"]
        );
    }

    #[test]
    fn test_parse_keywords_trims_and_lowercases() {
        assert_eq!(
            parse_keywords("  Good Morning , HELLO ,, ;"),
            vec!["good morning", "hello"]
        );
        assert_eq!(parse_keywords("well-structured"), vec!["well-structured"]);
    }

    #[test]
    fn test_parse_empty_keywords() {
        assert!(parse_keywords("").is_empty());
        assert!(parse_keywords(" , ; ").is_empty());
    }

    #[test]
    fn test_normalize_list_keeps_separators_inside_items() {
        assert_eq!(
            normalize_keywords(["Fun Fact", " ", "hobbies/interests"]),
            vec!["fun fact", "hobbies/interests"]
        );
    }

    #[test]
    fn test_deserialize_string_or_list() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default, deserialize_with = "deserialize_keywords")]
            keywords: Vec<String>,
        }

        let holder: Holder = serde_json::from_str(r#"{"keywords": "Hi, Hello"}"#).unwrap();
        assert_eq!(holder.keywords, vec!["hi", "hello"]);

        let holder: Holder = serde_json::from_str(r#"{"keywords": ["Hi", " Hello "]}"#).unwrap();
        assert_eq!(holder.keywords, vec!["hi", "hello"]);

        let holder: Holder = serde_json::from_str(r#"{"keywords": null}"#).unwrap();
        assert!(holder.keywords.is_empty());

        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.keywords.is_empty());
    }
}
