//! Form input: how answers get into a [`Session`].
//!
//! Interactive runs prompt for every question with the first option
//! preselected, so they always complete. Answers passed on the command line
//! or in a file may be short or have blank entries; those questions stay
//! unanswered and the session is rejected at submit time.

use std::path::Path;

use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use serde::Deserialize;

use dass_instruments::session::Session;

/// One answer as given on the command line or in an answers file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Score(u32),
    Label(String),
}

impl AnswerValue {
    /// Numbers are option scores; anything else is an option label.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<u32>() {
            Ok(score) => AnswerValue::Score(score),
            Err(_) => AnswerValue::Label(raw.to_string()),
        }
    }
}

/// Apply answers in question order, starting at question 1. A `None` entry
/// leaves its question unanswered.
pub fn apply_answers(
    session: &mut Session<'_>,
    answers: &[Option<AnswerValue>],
) -> eyre::Result<()> {
    let count = session.instrument().bank().len();
    if answers.len() > count {
        return Err(eyre::eyre!(
            "got {} answers but the questionnaire has {count} questions",
            answers.len()
        ));
    }

    for (question, answer) in answers.iter().enumerate() {
        match answer {
            Some(AnswerValue::Score(score)) => session.answer(question, *score)?,
            Some(AnswerValue::Label(label)) => session.answer_label(question, label)?,
            None => {}
        }
    }
    Ok(())
}

/// One entry per question; blank tokens keep their position.
pub fn answers_from_args(raw: &[String]) -> Vec<Option<AnswerValue>> {
    raw.iter()
        .map(|s| (!s.trim().is_empty()).then(|| AnswerValue::parse(s)))
        .collect()
}

/// A JSON array of scores, labels or `null` for a skipped question.
pub fn answers_from_file(path: &Path) -> eyre::Result<Vec<Option<AnswerValue>>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", path.display()))?;
    let answers: Vec<Option<AnswerValue>> = serde_json::from_str(&contents)?;
    Ok(answers)
}

/// Prompt for every question on the terminal.
pub fn collect_interactive(session: &mut Session<'_>) -> eyre::Result<()> {
    let instrument = session.instrument();
    let bank = instrument.bank();
    let labels = bank.options.labels();
    let theme = ColorfulTheme::default();

    println!("{}", instrument.name());
    println!("Choose the response that fits you best. Esc aborts.\n");

    for (index, question) in bank.questions.iter().enumerate() {
        let selection = Select::with_theme(&theme)
            .with_prompt(format!("{}/{}. {}", index + 1, bank.len(), question.prompt))
            .items(labels)
            .default(session.selected(index).unwrap_or(0) as usize)
            .interact_opt()?;

        let Some(choice) = selection else {
            return Err(eyre::eyre!(
                "aborted after {} of {} questions",
                session.answered(),
                bank.len()
            ));
        };
        session.answer(index, choice as u32)?;
    }
    Ok(())
}
