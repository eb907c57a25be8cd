//! Question Answering for assist_core
//!
//! Canned answers for the `question` intent: time/date questions resolved
//! against a caller-supplied "now", plus a small fixed knowledge base about
//! the assistant itself. Stateless and deterministic given (question, now).

use chrono::NaiveDateTime;
use regex::Regex;

const FALLBACK_ANSWER: &str = "I don't have an answer for that question. \
I'm a basic assistant focused on tasks, reminders, weather, and news.";

/// Stateless responder for free-text questions
pub struct QuestionAnswerer {
    time_question: Option<Regex>,
    knowledge: Vec<(&'static str, &'static str)>,
}

impl QuestionAnswerer {
    /// Create a responder with the built-in knowledge base
    pub fn new() -> Self {
        Self {
            time_question: Regex::new(r"what (?:time|day|date) is it").ok(),
            knowledge: vec![
                (
                    "who are you",
                    "I'm your personal assistant. I can help you manage tasks, \
                     set reminders, answer questions, and more.",
                ),
                (
                    "what can you do",
                    "I can help with tasks, reminders, answer questions, check \
                     the weather, and get news updates.",
                ),
                (
                    "how do you work",
                    "I read your natural language commands to understand your \
                     intent, then take the matching action like setting a \
                     reminder or retrieving information.",
                ),
            ],
        }
    }

    /// Answer a question, formatting any time/date reply from `now`
    pub fn answer(&self, question: &str, now: NaiveDateTime) -> String {
        let question = question.trim().to_lowercase();

        if let Some(re) = &self.time_question {
            if re.is_match(&question) {
                return format!(
                    "It's {} on {}.",
                    now.format("%I:%M %p"),
                    now.format("%A, %B %d, %Y")
                );
            }
        }

        for (key, value) in &self.knowledge {
            if question.contains(key) {
                return (*value).to_string();
            }
        }

        FALLBACK_ANSWER.to_string()
    }
}

impl Default for QuestionAnswerer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon_jan_first() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_time_question_uses_supplied_now() {
        let qa = QuestionAnswerer::new();
        let answer = qa.answer("What time is it?", noon_jan_first());
        assert_eq!(answer, "It's 12:30 PM on Monday, January 01, 2024.");
    }

    #[test]
    fn test_date_question() {
        let qa = QuestionAnswerer::new();
        let answer = qa.answer("what date is it", noon_jan_first());
        assert!(answer.contains("January 01, 2024"));
    }

    #[test]
    fn test_knowledge_base_match() {
        let qa = QuestionAnswerer::new();
        let answer = qa.answer("So, what can you do exactly?", noon_jan_first());
        assert!(answer.contains("tasks, reminders"));
    }

    #[test]
    fn test_fallback_for_unanswerable() {
        let qa = QuestionAnswerer::new();
        let answer = qa.answer("what is the capital of France?", noon_jan_first());
        assert_eq!(answer, FALLBACK_ANSWER);
        assert_eq!(qa.answer("", noon_jan_first()), FALLBACK_ANSWER);
    }

    #[test]
    fn test_deterministic() {
        let qa = QuestionAnswerer::new();
        let now = noon_jan_first();
        assert_eq!(qa.answer("who are you", now), qa.answer("who are you", now));
    }
}
