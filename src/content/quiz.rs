use serde::{Deserialize, Serialize};

use super::ContentError;

/// Number of answer choices every question must offer.
pub const OPTION_COUNT: usize = 4;

/// A multiple-choice question about the five solids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// Question text.
    pub question: String,
    /// Answer choices, in display order.
    pub options: Vec<String>,
    /// The choice that is right; must be one of `options`.
    pub correct_answer: String,
    /// Short child-friendly explanation shown after answering.
    #[serde(default)]
    pub explanation: String,
}

impl QuizQuestion {
    /// Check the quiz rules: non-empty question, exactly four choices, and
    /// the correct answer among them.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.question.trim().is_empty() {
            return Err(ContentError::InvalidQuestion("empty question"));
        }
        if self.options.len() != OPTION_COUNT {
            return Err(ContentError::InvalidQuestion("needs exactly four options"));
        }
        if !self.options.contains(&self.correct_answer) {
            return Err(ContentError::InvalidQuestion(
                "correct answer is not among the options",
            ));
        }
        Ok(())
    }

    /// Whether `choice` is the correct answer.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }
}

/// Remove markdown code fences a model may wrap its JSON in.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    text.strip_suffix("```").unwrap_or(text).trim()
}

/// Parse and validate a provider's quiz response.
pub fn parse_quiz_response(text: &str) -> Result<QuizQuestion, ContentError> {
    let body = strip_code_fences(text);
    if body.is_empty() {
        return Err(ContentError::EmptyResponse);
    }
    let question: QuizQuestion =
        serde_json::from_str(body).map_err(|e| ContentError::Malformed(e.to_string()))?;
    question.validate()?;
    Ok(question)
}

/// Score keeping across a run of questions.
///
/// Only the first answer to each question counts; later clicks are ignored
/// until the next question is presented.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    current: Option<QuizQuestion>,
    selected: Option<String>,
    score: u32,
    asked: u32,
}

impl QuizSession {
    /// Fresh session with a zero score.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `question`, clearing the previous selection.
    pub fn present(&mut self, question: QuizQuestion) {
        self.current = Some(question);
        self.selected = None;
        self.asked += 1;
    }

    /// Record `choice` for the current question.
    ///
    /// Returns whether it was correct, or `None` when there is no question
    /// or it has already been answered.
    pub fn answer(&mut self, choice: &str) -> Option<bool> {
        let question = self.current.as_ref()?;
        if self.selected.is_some() {
            return None;
        }
        let correct = question.is_correct(choice);
        if correct {
            self.score += 1;
        }
        self.selected = Some(choice.to_owned());
        Some(correct)
    }

    /// Question on screen.
    #[must_use]
    pub fn current(&self) -> Option<&QuizQuestion> {
        self.current.as_ref()
    }

    /// Choice made for the current question, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Questions answered correctly.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Questions presented so far.
    #[must_use]
    pub fn asked(&self) -> u32 {
        self.asked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "question": "魔方是什么形状的？",
        "options": ["长方体", "正方体", "球体", "圆锥体"],
        "correctAnswer": "正方体",
        "explanation": "六个面都是一样大的正方形。"
    }"#;

    #[test]
    fn parses_plain_json() {
        let q = parse_quiz_response(RESPONSE).unwrap();
        assert_eq!(q.correct_answer, "正方体");
        assert_eq!(q.options.len(), 4);
    }

    #[test]
    fn strips_code_fences() {
        let fenced = format!("```json\n{RESPONSE}\n```");
        assert_eq!(
            parse_quiz_response(&fenced).unwrap(),
            parse_quiz_response(RESPONSE).unwrap()
        );
    }

    #[test]
    fn rejects_answer_outside_options() {
        let text = RESPONSE.replace(
            "\"correctAnswer\": \"正方体\"",
            "\"correctAnswer\": \"圆柱体\"",
        );
        assert_eq!(
            parse_quiz_response(&text),
            Err(ContentError::InvalidQuestion(
                "correct answer is not among the options"
            ))
        );
    }

    #[test]
    fn rejects_wrong_option_count() {
        let text = RESPONSE.replace(", \"圆锥体\"", "");
        assert!(matches!(
            parse_quiz_response(&text),
            Err(ContentError::InvalidQuestion(_))
        ));
    }

    #[test]
    fn rejects_non_json_and_empty() {
        assert!(matches!(
            parse_quiz_response("not json"),
            Err(ContentError::Malformed(_))
        ));
        assert_eq!(parse_quiz_response("```\n```"), Err(ContentError::EmptyResponse));
    }

    #[test]
    fn only_first_answer_is_graded() {
        let mut session = QuizSession::new();
        assert_eq!(session.answer("正方体"), None);
        session.present(parse_quiz_response(RESPONSE).unwrap());
        assert_eq!(session.answer("球体"), Some(false));
        assert_eq!(session.answer("正方体"), None);
        assert_eq!(session.score(), 0);

        session.present(parse_quiz_response(RESPONSE).unwrap());
        assert_eq!(session.answer("正方体"), Some(true));
        assert_eq!(session.score(), 1);
        assert_eq!(session.asked(), 2);
    }
}
