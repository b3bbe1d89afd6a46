//! Multiple-choice assessment grading.
//!
//! The upstream service generates assessment questions alongside each
//! concept map. This module grades them: an [`AnswerSheet`] records which
//! option the learner selected per question and answers correctness
//! queries against the question's expected answer text.
//!
//! Like the layout queries, grading never errors: a missing question, an
//! out-of-range option, or an absent selection degrades to the default
//! (unselected, not correct) state.

use std::collections::HashMap;

use serde::Deserialize;

/// Code point of the first option label ('A').
const OPTION_LABEL_BASE: u32 = 'A' as u32;

/// A multiple-choice question.
///
/// `correct_answer` holds the text of the correct option, not its label;
/// grading compares option text case-insensitively.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    prompt: String,

    #[serde(default)]
    options: Vec<String>,

    correct_answer: String,

    #[serde(default)]
    explanation: Option<String>,
}

impl Question {
    /// Creates a new question from its prompt, options, and correct answer text.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct_answer: correct_answer.into(),
            explanation: None,
        }
    }

    /// Sets the explanation shown after answering, returning the question.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Returns the question prompt.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the answer options in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns the text of the correct option.
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Returns the explanation, if any.
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }
}

/// Grading state of one option of one question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnswerState {
    selected: bool,
    correct: bool,
    incorrect: bool,
}

impl AnswerState {
    /// Returns true when this option is the learner's current selection.
    pub fn is_selected(self) -> bool {
        self.selected
    }

    /// Returns true when this option is selected and matches the answer.
    pub fn is_correct(self) -> bool {
        self.correct
    }

    /// Returns true when this option is selected and does not match.
    pub fn is_incorrect(self) -> bool {
        self.incorrect
    }
}

/// Selection and grading state for one learner over one question set.
///
/// This is an explicit session-context object: callers create one per
/// assessment session and pass it by reference, rather than sharing
/// process-wide mutable state.
#[derive(Debug)]
pub struct AnswerSheet<'a> {
    questions: &'a [Question],
    // question index -> selected option label
    selected: HashMap<usize, char>,
}

impl<'a> AnswerSheet<'a> {
    /// Creates an empty answer sheet over the given questions.
    pub fn new(questions: &'a [Question]) -> Self {
        Self {
            questions,
            selected: HashMap::new(),
        }
    }

    /// Returns the display label for an option index: 'A', 'B', 'C', ...
    ///
    /// Indices beyond the representable range yield `None`.
    pub fn option_label(option: usize) -> Option<char> {
        u32::try_from(option)
            .ok()
            .and_then(|i| OPTION_LABEL_BASE.checked_add(i))
            .and_then(char::from_u32)
    }

    fn option_index(label: char) -> Option<usize> {
        (label as u32).checked_sub(OPTION_LABEL_BASE).map(|i| i as usize)
    }

    /// Records (or replaces) the selected option label for a question.
    pub fn select(&mut self, question: usize, label: char) {
        self.selected.insert(question, label);
    }

    /// Returns true when the question has a recorded selection.
    pub fn has_answer(&self, question: usize) -> bool {
        self.selected.contains_key(&question)
    }

    /// Returns the text of the selected option for a question.
    ///
    /// Missing selections, unknown questions, and out-of-range labels all
    /// degrade to the empty string.
    pub fn selected_option_text(&self, question: usize) -> &'a str {
        let Some(&label) = self.selected.get(&question) else {
            return "";
        };
        let Some(q) = self.questions.get(question) else {
            return "";
        };

        Self::option_index(label)
            .and_then(|index| q.options().get(index))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Returns the grading state of one option of one question.
    ///
    /// Only the currently selected option carries correctness flags; every
    /// other option (and every degenerate input) is the default state.
    pub fn answer_state(&self, question: usize, option: usize) -> AnswerState {
        if self.questions.get(question).is_none() {
            return AnswerState::default();
        }
        let Some(label) = Self::option_label(option) else {
            return AnswerState::default();
        };
        if self.selected.get(&question) != Some(&label) {
            return AnswerState::default();
        }

        let correct = self.is_question_correct(question);
        AnswerState {
            selected: true,
            correct,
            incorrect: !correct,
        }
    }

    /// Returns true when the question's selected option matches its answer.
    ///
    /// The selected option text and the expected answer are compared
    /// case-insensitively, following the upstream grader.
    pub fn is_question_correct(&self, question: usize) -> bool {
        let Some(q) = self.questions.get(question) else {
            return false;
        };
        if !self.has_answer(question) {
            return false;
        }

        normalize_answer(self.selected_option_text(question)) == normalize_answer(q.correct_answer())
    }
}

fn normalize_answer(answer: &str) -> String {
    answer.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<Question> {
        vec![
            Question::new(
                "Which phase change produces steam?",
                vec![
                    "Melting".to_string(),
                    "Evaporation".to_string(),
                    "Condensation".to_string(),
                    "Freezing".to_string(),
                ],
                "Evaporation",
            )
            .with_explanation("Liquid water becomes vapor when heated."),
            Question::new(
                "What does ice melt into?",
                vec!["water".to_string(), "steam".to_string()],
                "Water",
            ),
        ]
    }

    #[test]
    fn test_option_labels_run_from_a() {
        assert_eq!(AnswerSheet::option_label(0), Some('A'));
        assert_eq!(AnswerSheet::option_label(1), Some('B'));
        assert_eq!(AnswerSheet::option_label(3), Some('D'));
    }

    #[test]
    fn test_fresh_sheet_has_no_answers() {
        let questions = questions();
        let sheet = AnswerSheet::new(&questions);

        assert!(!sheet.has_answer(0));
        assert_eq!(sheet.selected_option_text(0), "");
        assert_eq!(sheet.answer_state(0, 0), AnswerState::default());
        assert!(!sheet.is_question_correct(0));
    }

    #[test]
    fn test_correct_selection_is_graded_correct() {
        let questions = questions();
        let mut sheet = AnswerSheet::new(&questions);
        sheet.select(0, 'B');

        assert!(sheet.has_answer(0));
        assert_eq!(sheet.selected_option_text(0), "Evaporation");
        assert!(sheet.is_question_correct(0));

        let state = sheet.answer_state(0, 1);
        assert!(state.is_selected());
        assert!(state.is_correct());
        assert!(!state.is_incorrect());
    }

    #[test]
    fn test_wrong_selection_is_graded_incorrect() {
        let questions = questions();
        let mut sheet = AnswerSheet::new(&questions);
        sheet.select(0, 'A');

        assert!(!sheet.is_question_correct(0));

        let state = sheet.answer_state(0, 0);
        assert!(state.is_selected());
        assert!(!state.is_correct());
        assert!(state.is_incorrect());

        // Options other than the selection stay in the default state.
        assert_eq!(sheet.answer_state(0, 1), AnswerState::default());
    }

    #[test]
    fn test_reselecting_replaces_previous_answer() {
        let questions = questions();
        let mut sheet = AnswerSheet::new(&questions);
        sheet.select(0, 'A');
        sheet.select(0, 'B');

        assert!(sheet.is_question_correct(0));
        assert!(!sheet.answer_state(0, 0).is_selected());
    }

    #[test]
    fn test_grading_is_case_insensitive() {
        let questions = questions();
        let mut sheet = AnswerSheet::new(&questions);
        // Option text "water" vs expected answer "Water".
        sheet.select(1, 'A');

        assert!(sheet.is_question_correct(1));
    }

    #[test]
    fn test_unknown_question_degrades_to_defaults() {
        let questions = questions();
        let mut sheet = AnswerSheet::new(&questions);
        sheet.select(9, 'A');

        assert_eq!(sheet.selected_option_text(9), "");
        assert_eq!(sheet.answer_state(9, 0), AnswerState::default());
        assert!(!sheet.is_question_correct(9));
    }

    #[test]
    fn test_out_of_range_label_degrades_to_empty_text() {
        let questions = questions();
        let mut sheet = AnswerSheet::new(&questions);
        sheet.select(1, 'Z');

        assert_eq!(sheet.selected_option_text(1), "");
        assert!(!sheet.is_question_correct(1));
    }

    #[test]
    fn test_question_deserializes_from_service_json() {
        let source = r#"{
            "prompt": "Which phase change produces steam?",
            "options": ["Melting", "Evaporation"],
            "correctAnswer": "Evaporation",
            "explanation": "Liquid water becomes vapor when heated."
        }"#;

        let question: Question = serde_json::from_str(source).expect("valid question");
        assert_eq!(question.correct_answer(), "Evaporation");
        assert_eq!(question.options().len(), 2);
        assert!(question.explanation().is_some());
    }
}
