//! Trivia quiz engine.
//!
//! DESIGN
//! ======
//! One engine backs both quiz variants in the widget; the difference is pure
//! timing policy. The cultural quiz uses [`AdvancePolicy::ManualReveal`]
//! (select, then an explicit check step, then an explicit next step). Quiz
//! Battle uses [`AdvancePolicy::AutoAdvance`]: selecting an option locks and
//! scores it immediately and asks the host to schedule [`TriviaGame::advance`]
//! after the configured delay.

#[cfg(test)]
#[path = "trivia_test.rs"]
mod trivia_test;

use serde::{Deserialize, Serialize};

/// Delay before Quiz Battle moves to the next question, in milliseconds.
pub const AUTO_ADVANCE_DELAY_MS: u32 = 1200;

/// One question with its answer options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct: usize,
}

impl Question {
    #[must_use]
    pub fn new(prompt: &str, options: &[&str], correct: usize) -> Self {
        Self {
            prompt: prompt.to_owned(),
            options: options.iter().map(|&o| o.to_owned()).collect(),
            correct,
        }
    }
}

/// When an answer locks in and who drives the move to the next question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvancePolicy {
    /// Selection is provisional until an explicit [`TriviaGame::reveal`].
    ManualReveal,
    /// Selection locks and scores immediately; the host schedules
    /// [`TriviaGame::advance`] after `delay_ms`.
    AutoAdvance { delay_ms: u32 },
}

/// Result of a selection attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed: the answer was already revealed, the quiz is
    /// complete, or the option index is out of range.
    Rejected,
    /// The option is selected; the host may re-select or reveal.
    Selected,
    /// The answer locked and scored; schedule [`TriviaGame::advance`] after
    /// this many milliseconds.
    ScheduleAdvance { delay_ms: u32 },
}

/// Quiz state: question cursor, score, and the current answer's lifecycle.
#[derive(Clone, Debug)]
pub struct TriviaGame {
    questions: Vec<Question>,
    policy: AdvancePolicy,
    reward_code: Option<String>,
    index: usize,
    score: u32,
    selected: Option<usize>,
    revealed: bool,
    completed: bool,
}

impl TriviaGame {
    #[must_use]
    pub fn new(questions: Vec<Question>, policy: AdvancePolicy) -> Self {
        Self {
            questions,
            policy,
            reward_code: None,
            index: 0,
            score: 0,
            selected: None,
            revealed: false,
            completed: false,
        }
    }

    /// A quiz that surfaces a reward code on completion.
    #[must_use]
    pub fn with_reward(questions: Vec<Question>, policy: AdvancePolicy, code: &str) -> Self {
        let mut game = Self::new(questions, policy);
        game.reward_code = Some(code.to_owned());
        game
    }

    /// Choose an answer option for the current question.
    pub fn select(&mut self, option: usize) -> SelectOutcome {
        if self.completed || self.revealed {
            return SelectOutcome::Rejected;
        }
        let Some(question) = self.questions.get(self.index) else {
            return SelectOutcome::Rejected;
        };
        if option >= question.options.len() {
            return SelectOutcome::Rejected;
        }
        self.selected = Some(option);
        match self.policy {
            AdvancePolicy::ManualReveal => SelectOutcome::Selected,
            AdvancePolicy::AutoAdvance { delay_ms } => {
                self.lock_in();
                SelectOutcome::ScheduleAdvance { delay_ms }
            }
        }
    }

    /// Lock in the current selection and score it. No-op without a
    /// selection, after a reveal, or once completed.
    pub fn reveal(&mut self) {
        if self.completed || self.revealed || self.selected.is_none() {
            return;
        }
        self.lock_in();
    }

    fn lock_in(&mut self) {
        self.revealed = true;
        let correct = self.questions.get(self.index).map(|q| q.correct);
        if self.selected.is_some() && self.selected == correct {
            self.score += 1;
        }
    }

    /// Move to the next question, or into the terminal completed state after
    /// the last one. No-op until the current answer is revealed.
    pub fn advance(&mut self) {
        if self.completed || !self.revealed {
            return;
        }
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.selected = None;
            self.revealed = false;
        } else {
            self.completed = true;
        }
    }

    /// Back to question zero with a zero score.
    pub fn restart(&mut self) {
        self.index = 0;
        self.score = 0;
        self.selected = None;
        self.revealed = false;
        self.completed = false;
    }

    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Reward surfaced on the completion screen, when configured.
    #[must_use]
    pub fn reward_code(&self) -> Option<&str> {
        self.reward_code.as_deref()
    }

    /// Whether the current question is the last one.
    #[must_use]
    pub fn on_last_question(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }
}
