//! dass-instruments
//!
//! Questionnaire definitions and scoring. Pure data and arithmetic: the
//! question bank, the shared response options, the per-subscale severity
//! cutoffs, the scorer, and the answer-collection session.

pub mod bank;
pub mod cutoffs;
pub mod error;
pub mod instruments;
pub mod scoring;
pub mod session;

use std::path::Path;

use dass_core::models::{Response, Subscale, SubscaleTotal};

use bank::QuestionBank;
use cutoffs::CutoffTable;
use error::InstrumentError;

/// Trait implemented by each questionnaire instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "dass21").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "DASS-21").
    fn name(&self) -> &str;

    /// The questions, in presentation order, and their response options.
    fn bank(&self) -> &QuestionBank;

    /// Severity thresholds per subscale.
    fn cutoffs(&self) -> &CutoffTable;

    /// Check the definition is usable. Run once at startup; an instrument
    /// that fails here must not be used to score anything.
    fn validate(&self) -> Result<(), InstrumentError> {
        let bank = self.bank();
        if bank.is_empty() {
            return Err(InstrumentError::EmptyBank {
                instrument_id: self.id().to_string(),
            });
        }
        if bank.options.is_empty() {
            return Err(InstrumentError::EmptyOptions {
                instrument_id: self.id().to_string(),
            });
        }

        // Every subscale is always reported, so every subscale needs cutoffs
        // even when the bank has no questions for it.
        for subscale in Subscale::ALL {
            if self.cutoffs().get(subscale).is_none() {
                return Err(InstrumentError::MissingCutoffs { subscale });
            }
        }
        self.cutoffs().validate()
    }

    /// Score and classify a complete response set.
    fn score(&self, responses: &[Response]) -> Result<Vec<SubscaleTotal>, InstrumentError> {
        scoring::score(self.bank(), self.cutoffs(), responses)
    }
}

/// Return all built-in instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::dass21::Dass21)]
}

/// Look up a built-in instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Resolve the instrument to run and validate it.
///
/// A custom definition file wins over the built-in `id`.
pub fn open_instrument(
    id: &str,
    custom: Option<&Path>,
) -> Result<Box<dyn Instrument>, InstrumentError> {
    let instrument: Box<dyn Instrument> = match custom {
        Some(path) => Box::new(instruments::custom::CustomInstrument::load(path)?),
        None => get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))?,
    };

    instrument.validate()?;
    tracing::info!(
        instrument = instrument.id(),
        questions = instrument.bank().len(),
        options = instrument.bank().options.len(),
        "instrument loaded"
    );
    Ok(instrument)
}
