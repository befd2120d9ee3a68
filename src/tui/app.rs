use crate::rubric::Category;
use crate::survey::{Question, WeeklyParticipation, QUESTIONS};

/// What the survey loop is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Asking,
    Done,
    Aborted,
}

/// State for the four-question wizard: which question is showing, where
/// the cursor sits, and what has been answered so far.
pub struct App {
    pub current: usize,
    pub cursor: usize,
    answers: [Option<Category>; 4],
    pub phase: Phase,
}

impl App {
    pub fn new() -> Self {
        Self {
            current: 0,
            cursor: 0,
            answers: [None; 4],
            phase: Phase::Asking,
        }
    }

    pub fn question(&self) -> &'static Question {
        &QUESTIONS[self.current]
    }

    /// Number of questions answered, for the progress indicator.
    pub fn answered(&self) -> usize {
        self.answers.iter().flatten().count()
    }

    pub fn next_option(&mut self) {
        self.cursor = if self.cursor >= Category::ALL.len() - 1 {
            0
        } else {
            self.cursor + 1
        };
    }

    pub fn previous_option(&mut self) {
        self.cursor = if self.cursor == 0 {
            Category::ALL.len() - 1
        } else {
            self.cursor - 1
        };
    }

    /// Records the highlighted category and advances to the next
    /// question, or finishes the form on the last one.
    pub fn select(&mut self) {
        self.answers[self.current] = Some(Category::ALL[self.cursor]);
        if self.current + 1 >= QUESTIONS.len() {
            self.phase = Phase::Done;
        } else {
            self.current += 1;
            self.cursor = self.cursor_for(self.current);
        }
    }

    /// Returns to the previous question with its recorded answer
    /// re-highlighted. No-op on the first question.
    pub fn back(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.cursor = self.cursor_for(self.current);
        }
    }

    pub fn abort(&mut self) {
        self.phase = Phase::Aborted;
    }

    /// The completed record, once every question has an answer.
    pub fn result(&self) -> Option<WeeklyParticipation> {
        let answers = [
            self.answers[0]?,
            self.answers[1]?,
            self.answers[2]?,
            self.answers[3]?,
        ];
        Some(WeeklyParticipation::from_answers(answers))
    }

    /// Cursor position for a question: its recorded answer if it has
    /// one, the first option otherwise.
    fn cursor_for(&self, index: usize) -> usize {
        self.answers[index]
            .and_then(|answer| Category::ALL.iter().position(|c| *c == answer))
            .unwrap_or(0)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps_both_directions() {
        let mut app = App::new();
        app.previous_option();
        assert_eq!(app.cursor, Category::ALL.len() - 1);
        app.next_option();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_select_advances_and_resets_cursor() {
        let mut app = App::new();
        app.next_option();
        app.select();
        assert_eq!(app.current, 1);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.phase, Phase::Asking);
        assert_eq!(app.answered(), 1);
    }

    #[test]
    fn test_back_restores_recorded_answer() {
        let mut app = App::new();
        app.next_option();
        app.next_option(); // Decent
        app.select();
        app.back();
        assert_eq!(app.current, 0);
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_back_on_first_question_is_noop() {
        let mut app = App::new();
        app.next_option();
        app.back();
        assert_eq!(app.current, 0);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_full_walkthrough_builds_record() {
        let mut app = App::new();
        // Excellent, Proficient, Decent, Poor
        for steps in [0usize, 1, 2, 4] {
            for _ in 0..steps {
                app.next_option();
            }
            app.select();
        }
        assert_eq!(app.phase, Phase::Done);

        let week = app.result().unwrap();
        assert_eq!(week.engagement, Category::Excellent);
        assert_eq!(week.verbal_participation, Category::Proficient);
        assert_eq!(week.classwork_and_organization, Category::Decent);
        assert_eq!(week.wonder_and_depth_of_inquiry, Category::Poor);
    }

    #[test]
    fn test_result_is_none_while_incomplete() {
        let mut app = App::new();
        app.select();
        assert_eq!(app.result(), None);
    }

    #[test]
    fn test_abort_sets_phase() {
        let mut app = App::new();
        app.abort();
        assert_eq!(app.phase, Phase::Aborted);
    }
}
