//! Intent Classification for assist_core
//!
//! Routes a free-text command to one of a fixed set of intent categories
//! using ordered groups of lexical patterns. First matching group wins;
//! group order is the tie-break, not pattern specificity.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The coarse category a command is routed to
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Task,
    Reminder,
    Weather,
    News,
    Question,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Task => "task",
            Intent::Reminder => "reminder",
            Intent::Weather => "weather",
            Intent::News => "news",
            Intent::Question => "question",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Words that mark a command as a question when no group matched
const QUESTION_STARTERS: &[&str] = &[
    "what", "how", "why", "when", "where", "who", "can", "do", "does", "is", "are",
];

/// A group of patterns all mapping to the same intent
struct PatternGroup {
    intent: Intent,
    patterns: Vec<Regex>,
}

/// Intent classification engine
///
/// Groups are evaluated in the order they were registered: task, reminder,
/// weather, news. Classification is pure and never fails; input that
/// matches nothing degrades to `Question` or `Unknown`.
pub struct IntentClassifier {
    groups: Vec<PatternGroup>,
}

impl IntentClassifier {
    /// Create a classifier with the default pattern inventory
    pub fn new() -> Self {
        let groups = vec![
            group(
                Intent::Task,
                &[
                    r"add (?:a )?task",
                    r"create (?:a )?task",
                    r"need to",
                    r"todo",
                    r"add to (?:my )?list",
                ],
            ),
            group(
                Intent::Reminder,
                &[
                    r"remind me",
                    r"reminder",
                    r"don'?t forget",
                    r"at \d+[:.]\d+",
                    r"at \d+ (?:am|pm)",
                ],
            ),
            group(
                Intent::Weather,
                &[
                    r"weather",
                    r"temperature",
                    r"forecast",
                    r"is it (?:hot|cold|raining|snowing)",
                    r"(?:how|what)(?:'s| is) the weather",
                ],
            ),
            group(
                Intent::News,
                &[r"news", r"headlines", r"what'?s happening", r"current events"],
            ),
        ];

        Self { groups }
    }

    /// Classify a command into an intent
    pub fn classify(&self, command: &str) -> Intent {
        let command = command.trim().to_lowercase();
        if command.is_empty() {
            return Intent::Unknown;
        }

        for group in &self.groups {
            if group.patterns.iter().any(|p| p.is_match(&command)) {
                return group.intent;
            }
        }

        // Fallback heuristic: interrogative or auxiliary first token
        if let Some(first) = command.split_whitespace().next() {
            let first = first.trim_end_matches(|c: char| !c.is_alphanumeric());
            if QUESTION_STARTERS.contains(&first) {
                return Intent::Question;
            }
        }

        Intent::Unknown
    }

    /// Intents in evaluation order, fallbacks last
    pub fn intent_order(&self) -> Vec<Intent> {
        let mut order: Vec<Intent> = self.groups.iter().map(|g| g.intent).collect();
        order.push(Intent::Question);
        order.push(Intent::Unknown);
        order
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn group(intent: Intent, patterns: &[&str]) -> PatternGroup {
    PatternGroup {
        intent,
        // Patterns are static and known-valid; skip any that fail to
        // compile rather than poisoning the whole group.
        patterns: patterns.iter().filter_map(|p| Regex::new(p).ok()).collect(),
    }
}
