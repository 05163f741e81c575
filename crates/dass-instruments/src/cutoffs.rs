use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dass_core::models::{Severity, Subscale};

use crate::error::InstrumentError;

/// Bands opened by the four cutoffs, in cutoff order.
const BANDS: [Severity; 4] = [
    Severity::Mild,
    Severity::Moderate,
    Severity::Severe,
    Severity::ExtremelySevere,
];

/// Per-subscale severity thresholds.
///
/// Each entry holds the minimum score for Mild, Moderate, Severe and
/// Extremely Severe, in that order. Anything below the first is Normal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CutoffTable {
    entries: BTreeMap<Subscale, [u32; 4]>,
}

impl CutoffTable {
    pub fn new(entries: impl IntoIterator<Item = (Subscale, [u32; 4])>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, subscale: Subscale) -> Option<&[u32; 4]> {
        self.entries.get(&subscale)
    }

    /// Fails on the first subscale whose thresholds are not strictly increasing.
    pub fn validate(&self) -> Result<(), InstrumentError> {
        for (&subscale, cutoffs) in &self.entries {
            if !cutoffs.windows(2).all(|w| w[0] < w[1]) {
                return Err(InstrumentError::NonIncreasingCutoffs {
                    subscale,
                    cutoffs: *cutoffs,
                });
            }
        }
        Ok(())
    }

    /// Classify a (normalized) score. A score equal to a cutoff belongs to
    /// the band that cutoff opens.
    pub fn classify(&self, score: u32, subscale: Subscale) -> Result<Severity, InstrumentError> {
        let cutoffs = self
            .get(subscale)
            .ok_or(InstrumentError::MissingCutoffs { subscale })?;

        Ok(cutoffs
            .iter()
            .zip(BANDS)
            .rev()
            .find(|(cutoff, _)| score >= **cutoff)
            .map(|(_, band)| band)
            .unwrap_or(Severity::Normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CutoffTable {
        CutoffTable::new([
            (Subscale::Depression, [10, 14, 21, 28]),
            (Subscale::Anxiety, [8, 10, 15, 20]),
        ])
    }

    #[test]
    fn boundaries_open_their_band() {
        let t = table();
        assert_eq!(t.classify(9, Subscale::Depression).unwrap(), Severity::Normal);
        assert_eq!(t.classify(10, Subscale::Depression).unwrap(), Severity::Mild);
        assert_eq!(t.classify(13, Subscale::Depression).unwrap(), Severity::Mild);
        assert_eq!(t.classify(14, Subscale::Depression).unwrap(), Severity::Moderate);
        assert_eq!(t.classify(21, Subscale::Depression).unwrap(), Severity::Severe);
        assert_eq!(
            t.classify(28, Subscale::Depression).unwrap(),
            Severity::ExtremelySevere
        );
        assert_eq!(
            t.classify(500, Subscale::Depression).unwrap(),
            Severity::ExtremelySevere
        );
    }

    #[test]
    fn missing_subscale_is_an_error() {
        let err = table().classify(3, Subscale::Stress).unwrap_err();
        assert!(matches!(
            err,
            InstrumentError::MissingCutoffs {
                subscale: Subscale::Stress
            }
        ));
    }

    #[test]
    fn equal_neighbours_fail_validation() {
        let t = CutoffTable::new([(Subscale::Stress, [15, 19, 19, 34])]);
        assert!(matches!(
            t.validate(),
            Err(InstrumentError::NonIncreasingCutoffs { .. })
        ));
        assert!(table().validate().is_ok());
    }
}
