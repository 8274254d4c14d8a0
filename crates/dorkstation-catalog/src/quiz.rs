//! Learning-mode quiz over the operator vocabulary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct_index: usize,
    pub explain: &'static str,
}

pub const QUIZ_BANK: [QuizQuestion; 3] = [
    QuizQuestion {
        id: "q1",
        prompt: "Which operator excludes Pinterest results?",
        options: ["site:", "-", "filetype:", "intitle:"],
        correct_index: 1,
        explain: "Use a leading minus ( -example.com ) to exclude hosts or terms.",
    },
    QuizQuestion {
        id: "q2",
        prompt: "How do you restrict to PDF files?",
        options: ["inurl:", "filetype:", "intitle:", "site:"],
        correct_index: 1,
        explain: "Use filetype:pdf to limit results to PDFs.",
    },
    QuizQuestion {
        id: "q3",
        prompt: "How do you search for an exact phrase?",
        options: ["()", "OR", "\"\"", "-"],
        correct_index: 2,
        explain: "Use double quotes (\"exact phrase\") to match the words in that specific order.",
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub current: usize,
    pub correct: usize,
    pub answered: Option<usize>,
}

impl Quiz {
    pub fn question(&self) -> &'static QuizQuestion {
        &QUIZ_BANK[self.current % QUIZ_BANK.len()]
    }

    /// Record an answer for the current question.
    ///
    /// Returns whether it was correct, or `None` if the option does not exist
    /// or the question was already answered.
    pub fn answer(&mut self, option: usize) -> Option<bool> {
        let question = self.question();
        if self.answered.is_some() || option >= question.options.len() {
            return None;
        }
        self.answered = Some(option);
        let correct = option == question.correct_index;
        if correct {
            self.correct += 1;
        }
        Some(correct)
    }

    /// Advance to the next question, wrapping after the last one.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % QUIZ_BANK.len();
        self.answered = None;
    }
}
