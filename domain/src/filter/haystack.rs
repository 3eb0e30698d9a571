//! Search haystack construction

use crate::question::record::QuestionRecord;

/// Case-folded text searched by a free-text query.
///
/// The question text, topic, subtopic and space-joined tags, separated by
/// single spaces. Missing fields contribute an empty string. Exam and paper
/// are not searched; they are facets only.
pub fn haystack(record: &QuestionRecord) -> String {
    format!(
        "{} {} {} {}",
        record.question,
        record.topic.as_deref().unwrap_or_default(),
        record.subtopic.as_deref().unwrap_or_default(),
        record.tags.join(" ")
    )
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haystack_layout() {
        let record = QuestionRecord::new("Define GDP")
            .with_topic("Economy")
            .with_subtopic("National Income")
            .with_tags(["macro", "India"]);
        assert_eq!(haystack(&record), "define gdp economy national income macro india");
    }

    #[test]
    fn test_missing_fields_leave_gaps() {
        let record = QuestionRecord::new("Define GDP");
        assert_eq!(haystack(&record), "define gdp   ");
    }
}
