//! Question record entity

use super::facet_value::FacetValue;
use crate::facet::field::FacetField;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A single exam question as loaded from the question document (Entity)
///
/// The document schema varies between question banks: the primary facet
/// is called `exam` in some and `year` in others, and the display text is
/// `question` or `text`. Both spellings are accepted. Unknown keys are
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, alias = "year", skip_serializing_if = "Option::is_none")]
    pub exam: Option<FacetValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper: Option<String>,
    #[serde(alias = "text")]
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtopic: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub question_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl QuestionRecord {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            id: None,
            exam: None,
            paper: None,
            question: question.into(),
            topic: None,
            subtopic: None,
            question_type: None,
            marks: None,
            tags: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_exam(mut self, exam: impl Into<FacetValue>) -> Self {
        self.exam = Some(exam.into());
        self
    }

    pub fn with_paper(mut self, paper: impl Into<String>) -> Self {
        self.paper = Some(paper.into());
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_subtopic(mut self, subtopic: impl Into<String>) -> Self {
        self.subtopic = Some(subtopic.into());
        self
    }

    pub fn with_type(mut self, question_type: impl Into<String>) -> Self {
        self.question_type = Some(question_type.into());
        self
    }

    pub fn with_marks(mut self, marks: u32) -> Self {
        self.marks = Some(marks);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Normalized value of a facet field, `None` when the record lacks it
    pub fn facet(&self, field: FacetField) -> Option<Cow<'_, str>> {
        match field {
            FacetField::Exam => self.exam.as_ref().map(FacetValue::as_key),
            FacetField::Paper => self.paper.as_deref().map(Cow::Borrowed),
            FacetField::Topic => self.topic.as_deref().map(Cow::Borrowed),
            FacetField::Subtopic => self.subtopic.as_deref().map(Cow::Borrowed),
        }
    }
}
