use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Instrument;
use crate::bank::QuestionBank;
use crate::cutoffs::CutoffTable;
use crate::error::InstrumentError;

/// A user-supplied instrument, read from a JSON definition such as:
///
/// ```json
/// {
///   "id": "team-checkin",
///   "name": "Team check-in",
///   "options": ["Never", "Sometimes", "Often", "Almost Always"],
///   "questions": [{ "subscale": "S", "prompt": "I find it hard to wind down" }],
///   "cutoffs": { "D": [10, 14, 21, 28], "A": [8, 10, 15, 20], "S": [15, 19, 26, 34] }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomInstrument {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub bank: QuestionBank,
    pub cutoffs: CutoffTable,
}

impl CustomInstrument {
    pub fn from_json(json: &str) -> Result<Self, InstrumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a definition from disk. Does not validate; see
    /// [`Instrument::validate`].
    pub fn load(path: &Path) -> Result<Self, InstrumentError> {
        let contents = std::fs::read_to_string(path)?;
        let instrument = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), id = %instrument.id, "custom instrument read");
        Ok(instrument)
    }
}

impl Instrument for CustomInstrument {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    fn cutoffs(&self) -> &CutoffTable {
        &self.cutoffs
    }
}
