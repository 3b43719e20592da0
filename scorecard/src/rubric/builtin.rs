//! Default rubric for spoken self-introductions

use super::model::{Criterion, CriterionBuilder, Rubric};

/// The eight criteria used when no rubric file is configured
pub fn builtin_criteria() -> Vec<Criterion> {
    vec![
        CriterionBuilder::new("Salutation Level")
            .description(
                "Quality and appropriateness of greeting (Hello everyone, Good morning, etc.)",
            )
            .keywords(
                "hello,hi,good morning,good afternoon,good evening,good day,greetings,excited,introduce",
            )
            .weight(5.0)
            .build(),
        CriterionBuilder::new("Key Word Presence")
            .description(
                "Includes essential information: name, age, class, school, family, hobbies/interests, goals, and unique facts",
            )
            .keywords(
                "name,age,class,school,family,mother,father,brother,sister,hobby,hobbies,interest,goal,dream,fun fact,special,unique",
            )
            .weight(30.0)
            .build(),
        CriterionBuilder::new("Flow")
            .description(
                "Introduction follows logical order: Salutation, Name, Mandatory details, Optional details, Closing",
            )
            .keywords("thank you,listening,conclude,finally,that's all,in conclusion")
            .weight(5.0)
            .build(),
        CriterionBuilder::new("Speech Rate")
            .description(
                "Appropriate speaking pace (ideal: 111-140 words per minute for 52 seconds duration)",
            )
            .weight(10.0)
            .word_range(80, 160)
            .build(),
        CriterionBuilder::new("Grammar")
            .description("Minimal grammatical errors, proper sentence structure and word usage")
            .keywords("proper,correct,well-structured,grammatical")
            .weight(10.0)
            .build(),
        CriterionBuilder::new("Vocabulary Richness")
            .description("Diverse and rich vocabulary usage (high type-token ratio)")
            .keywords("interesting,fascinating,explore,discover,improve,special,unique,wonderful")
            .weight(10.0)
            .build(),
        CriterionBuilder::new("Clarity")
            .description(
                "Minimal use of filler words (um, uh, like, you know, so, actually, basically, right)",
            )
            .weight(15.0)
            .build(),
        CriterionBuilder::new("Engagement")
            .description("Positive, enthusiastic, confident tone; shows interest and engagement")
            .keywords(
                "enjoy,love,excited,happy,wonderful,great,special,interesting,fascinating,passionate",
            )
            .weight(15.0)
            .build(),
    ]
}

impl Rubric {
    /// The builtin self-introduction rubric
    pub fn builtin() -> Self {
        Self {
            source: Self::BUILTIN_SOURCE.to_string(),
            criteria: builtin_criteria(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let rubric = Rubric::builtin();
        assert!(rubric.validate().is_ok());
        assert_eq!(rubric.source, "builtin");
        assert_eq!(rubric.len(), 8);
        assert_eq!(rubric.total_weight(), 100.0);
    }

    #[test]
    fn test_builtin_speech_rate_bounds() {
        let rubric = Rubric::builtin();
        let speech_rate = rubric.criterion("speech rate").unwrap();

        assert_eq!(speech_rate.min_words, Some(80));
        assert_eq!(speech_rate.max_words, Some(160));
        assert!(speech_rate.keywords.is_empty());
        assert!(
            rubric
                .criteria
                .iter()
                .filter(|c| c.name != "Speech Rate")
                .all(|c| !c.has_length_bounds())
        );
    }

    #[test]
    fn test_builtin_keywords_are_normalized() {
        let rubric = Rubric::builtin();
        let key_words = rubric.criterion("Key Word Presence").unwrap();

        assert_eq!(key_words.keywords.len(), 17);
        assert!(key_words.keywords.contains(&"fun fact".to_string()));
        assert!(
            rubric
                .criteria
                .iter()
                .flat_map(|c| &c.keywords)
                .all(|k| k == &k.to_lowercase() && k.trim() == k)
        );
    }
}
