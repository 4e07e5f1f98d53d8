use crate::config::GameConfig;
use crate::shuffle::{RngOracle, shuffled};

use super::bank::{QUESTION_BANK, QuizQuestion};
use super::error::QuizError;

/// Final tally of one pass through the bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    /// Rounded for display; the pass check uses exact arithmetic.
    pub percent: u32,
    pub passed: bool,
}

impl QuizResult {
    fn tally(score: usize, total: usize, pass_percent: u32) -> Self {
        let hundredths = score as u64 * 100;
        let total_u64 = total as u64;
        Self {
            score,
            total,
            percent: ((hundredths + total_u64 / 2) / total_u64) as u32,
            passed: hundredths >= u64::from(pass_percent) * total_u64,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress,
    /// Only a passing run stays here; a failing run restarts at once.
    Finished(QuizResult),
}

/// What happened to a single answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_option: usize,
    /// Set when this answer was the last one of the run. When the result is a
    /// failure the engine has already reshuffled and is back in progress.
    pub finished: Option<QuizResult>,
}

/// One quiz session over a shuffled copy of the bank.
///
/// `NotStarted → InProgress → Finished(pass)`. A failing run is reported
/// through [`AnswerOutcome::finished`] and immediately replaced by a fresh
/// shuffle, so the engine never rests in a failed state.
#[derive(Clone, Debug)]
pub struct QuizEngine {
    bank: Vec<QuizQuestion>,
    pass_percent: u32,
    order: Vec<QuizQuestion>,
    index: usize,
    score: usize,
    phase: QuizPhase,
}

impl QuizEngine {
    /// Engine over the built-in bank with the given pass line.
    pub fn with_pass_percent(pass_percent: u32) -> Self {
        Self {
            bank: QUESTION_BANK.to_vec(),
            pass_percent,
            order: Vec::new(),
            index: 0,
            score: 0,
            phase: QuizPhase::NotStarted,
        }
    }

    /// Shuffles a fresh copy of the bank and resets index and score.
    pub fn start(&mut self, rng: &mut impl RngOracle) {
        self.order = shuffled(&self.bank, rng);
        self.index = 0;
        self.score = 0;
        self.phase = QuizPhase::InProgress;
    }

    /// Back to `NotStarted`, dropping any session.
    pub fn reset(&mut self) {
        self.order.clear();
        self.index = 0;
        self.score = 0;
        self.phase = QuizPhase::NotStarted;
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.bank.len()
    }

    /// Session order of the current run.
    pub fn order(&self) -> &[QuizQuestion] {
        &self.order
    }

    /// Question awaiting an answer, `None` when no run is in progress.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            QuizPhase::InProgress => self.order.get(self.index),
            _ => None,
        }
    }

    /// `(index, total)` of the current question.
    pub fn progress(&self) -> (usize, usize) {
        (self.index, self.order.len())
    }

    /// Scores `selected` against the current question and advances.
    ///
    /// Correct or not, the session moves on. After the last question the run
    /// is tallied; a failing run restarts with a new shuffle from `rng`.
    pub fn answer(
        &mut self,
        selected: usize,
        rng: &mut impl RngOracle,
    ) -> Result<AnswerOutcome, QuizError> {
        let question = *self.current_question().ok_or(QuizError::NotInProgress)?;
        if selected >= question.options.len() {
            return Err(QuizError::InvalidOption {
                selected,
                count: GameConfig::QUIZ_OPTION_COUNT,
            });
        }

        let correct = question.is_correct(selected);
        if correct {
            self.score += 1;
        }
        self.index += 1;

        let finished = if self.index >= self.order.len() {
            let result = QuizResult::tally(self.score, self.order.len(), self.pass_percent);
            if result.passed {
                self.phase = QuizPhase::Finished(result);
            } else {
                self.start(rng);
            }
            Some(result)
        } else {
            None
        };

        Ok(AnswerOutcome {
            correct,
            correct_option: question.correct,
            finished,
        })
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::with_pass_percent(GameConfig::DEFAULT_QUIZ_PASS_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shuffle::PcgRng;

    /// Answers the whole run, getting the first `right` questions correct.
    fn play(engine: &mut QuizEngine, rng: &mut PcgRng, right: usize) -> Option<QuizResult> {
        let mut last = None;
        for i in 0..engine.total() {
            let question = *engine.current_question().expect("question available");
            let choice = if i < right {
                question.correct
            } else {
                (question.correct + 1) % GameConfig::QUIZ_OPTION_COUNT
            };
            let outcome = engine.answer(choice, rng).expect("answer accepted");
            assert_eq!(outcome.correct, i < right);
            last = outcome.finished;
        }
        last
    }

    #[test]
    fn seven_of_ten_passes() {
        let mut rng = PcgRng::new(7);
        let mut engine = QuizEngine::default();
        engine.start(&mut rng);

        let result = play(&mut engine, &mut rng, 7).expect("run finished");
        assert_eq!(
            result,
            QuizResult {
                score: 7,
                total: 10,
                percent: 70,
                passed: true
            }
        );
        assert_eq!(engine.phase(), QuizPhase::Finished(result));
        assert!(engine.current_question().is_none());
    }

    #[test]
    fn six_of_ten_fails_and_restarts() {
        let mut rng = PcgRng::new(6);
        let mut engine = QuizEngine::default();
        engine.start(&mut rng);

        let result = play(&mut engine, &mut rng, 6).expect("run finished");
        assert!(!result.passed);
        assert_eq!(result.percent, 60);
        assert_eq!(engine.phase(), QuizPhase::InProgress);
        assert_eq!(engine.progress(), (0, 10));
        assert_eq!(engine.score(), 0);
        assert!(engine.current_question().is_some());
    }

    #[test]
    fn restarts_reshuffle() {
        let mut rng = PcgRng::new(42);
        let mut engine = QuizEngine::default();
        engine.start(&mut rng);

        let mut orders = vec![engine.order().to_vec()];
        for _ in 0..5 {
            play(&mut engine, &mut rng, 0);
            orders.push(engine.order().to_vec());
        }
        assert!(orders.windows(2).any(|pair| pair[0] != pair[1]));
        for order in &orders {
            let mut prompts: Vec<_> = order.iter().map(|q| q.prompt).collect();
            prompts.sort_unstable();
            let mut bank: Vec<_> = QUESTION_BANK.iter().map(|q| q.prompt).collect();
            bank.sort_unstable();
            assert_eq!(prompts, bank);
        }
    }

    #[test]
    fn wrong_answers_still_advance() {
        let mut rng = PcgRng::new(1);
        let mut engine = QuizEngine::default();
        engine.start(&mut rng);
        let question = *engine.current_question().unwrap();
        let outcome = engine
            .answer((question.correct + 1) % 4, &mut rng)
            .unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_option, question.correct);
        assert_eq!(engine.progress(), (1, 10));
    }

    #[test]
    fn answering_before_start_is_rejected() {
        let mut engine = QuizEngine::default();
        assert_eq!(
            engine.answer(0, &mut PcgRng::new(0)),
            Err(QuizError::NotInProgress)
        );
    }

    #[test]
    fn out_of_range_option_does_not_advance() {
        let mut rng = PcgRng::new(2);
        let mut engine = QuizEngine::default();
        engine.start(&mut rng);
        assert_eq!(
            engine.answer(4, &mut rng),
            Err(QuizError::InvalidOption {
                selected: 4,
                count: 4
            })
        );
        assert_eq!(engine.progress(), (0, 10));
    }

    #[test]
    fn answering_after_pass_is_rejected() {
        let mut rng = PcgRng::new(3);
        let mut engine = QuizEngine::default();
        engine.start(&mut rng);
        play(&mut engine, &mut rng, 10);
        assert_eq!(engine.answer(0, &mut rng), Err(QuizError::NotInProgress));
    }

    #[test]
    fn start_never_mutates_bank() {
        let mut rng = PcgRng::new(5);
        let mut engine = QuizEngine::default();
        engine.start(&mut rng);
        engine.start(&mut rng);
        assert_eq!(engine.bank, QUESTION_BANK.to_vec());
    }

    #[test]
    fn pass_line_is_exact() {
        assert!(QuizResult::tally(2, 3, 66).passed);
        assert!(!QuizResult::tally(2, 3, 67).passed);
        assert_eq!(QuizResult::tally(2, 3, 67).percent, 67);
    }
}
