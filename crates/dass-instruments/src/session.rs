//! Answer collection for a single questionnaire run.
//!
//! A [`Session`] is the "collecting" state: answers can be set and changed
//! in any order. [`Session::submit`] consumes it and yields a [`Submission`],
//! the terminal "submitted" state, only when every question has an answer.

use dass_core::models::{Response, SubscaleTotal};

use crate::Instrument;
use crate::error::InstrumentError;

pub struct Session<'a> {
    instrument: &'a dyn Instrument,
    answers: Vec<Option<u32>>,
}

/// Scored result of a completed session.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub instrument_id: String,
    pub responses: Vec<Response>,
    pub totals: Vec<SubscaleTotal>,
}

impl<'a> Session<'a> {
    pub fn new(instrument: &'a dyn Instrument) -> Self {
        Self {
            instrument,
            answers: vec![None; instrument.bank().len()],
        }
    }

    pub fn instrument(&self) -> &'a dyn Instrument {
        self.instrument
    }

    /// Record the option with `score` for the 0-based `question`. Answering
    /// again replaces the previous choice.
    pub fn answer(&mut self, question: usize, score: u32) -> Result<(), InstrumentError> {
        let count = self.answers.len();
        let max = self.instrument.bank().options.max_score().unwrap_or(0);
        let slot = self
            .answers
            .get_mut(question)
            .ok_or(InstrumentError::UnknownQuestion { question, count })?;

        if score > max {
            return Err(InstrumentError::ScoreOutOfRange {
                question: question + 1,
                score,
                max,
            });
        }
        *slot = Some(score);
        Ok(())
    }

    /// Record an answer by option label instead of score.
    pub fn answer_label(&mut self, question: usize, label: &str) -> Result<(), InstrumentError> {
        let score = self
            .instrument
            .bank()
            .options
            .score_of(label)
            .ok_or_else(|| InstrumentError::UnknownOption {
                question: question + 1,
                label: label.to_string(),
            })?;
        self.answer(question, score)
    }

    /// Fill answers in question order, starting at the first question.
    pub fn answer_all(&mut self, scores: &[u32]) -> Result<(), InstrumentError> {
        for (question, &score) in scores.iter().enumerate() {
            self.answer(question, score)?;
        }
        Ok(())
    }

    pub fn selected(&self, question: usize) -> Option<u32> {
        self.answers.get(question).copied().flatten()
    }

    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// 1-based numbers of the questions still without an answer.
    pub fn unanswered(&self) -> Vec<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_none())
            .map(|(i, _)| i + 1)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    /// Score the session. Rejects incomplete sessions rather than treating
    /// missing answers as zero.
    pub fn submit(self) -> Result<Submission, InstrumentError> {
        let unanswered = self.unanswered();
        if !unanswered.is_empty() {
            tracing::warn!(count = unanswered.len(), "submission rejected: unanswered questions");
            return Err(InstrumentError::Incomplete { unanswered });
        }

        let responses: Vec<Response> = self
            .answers
            .iter()
            .enumerate()
            .filter_map(|(question, a)| a.map(|score| Response { question, score }))
            .collect();

        let totals = self.instrument.score(&responses)?;
        tracing::info!(instrument = self.instrument.id(), "session submitted");

        Ok(Submission {
            instrument_id: self.instrument.id().to_string(),
            responses,
            totals,
        })
    }
}
