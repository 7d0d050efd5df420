use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::EmotionError;

/// Six-rank confidence scale reported by the vision provider, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LikelihoodLevel {
    Unknown,
    VeryUnlikely,
    Unlikely,
    Possible,
    Likely,
    VeryLikely,
}

impl LikelihoodLevel {
    pub const ALL: [LikelihoodLevel; 6] = [
        LikelihoodLevel::Unknown,
        LikelihoodLevel::VeryUnlikely,
        LikelihoodLevel::Unlikely,
        LikelihoodLevel::Possible,
        LikelihoodLevel::Likely,
        LikelihoodLevel::VeryLikely,
    ];

    /// Numeric rank, 0 (unknown) to 5 (very likely).
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn from_level(level: u8) -> Result<Self, EmotionError> {
        Self::ALL
            .get(level as usize)
            .copied()
            .ok_or_else(|| EmotionError::invalid(format!("likelihood level {level} is outside 0..=5")))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LikelihoodLevel::Unknown => "UNKNOWN",
            LikelihoodLevel::VeryUnlikely => "VERY_UNLIKELY",
            LikelihoodLevel::Unlikely => "UNLIKELY",
            LikelihoodLevel::Possible => "POSSIBLE",
            LikelihoodLevel::Likely => "LIKELY",
            LikelihoodLevel::VeryLikely => "VERY_LIKELY",
        }
    }
}

impl FromStr for LikelihoodLevel {
    type Err = EmotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| EmotionError::invalid(format!("unknown likelihood value {s:?}")))
    }
}

impl fmt::Display for LikelihoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of emotions the provider scores for every face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    #[serde(rename = "angerLikelihood")]
    Anger,
    #[serde(rename = "joyLikelihood")]
    Joy,
    #[serde(rename = "sorrowLikelihood")]
    Sorrow,
    #[serde(rename = "surpriseLikelihood")]
    Surprise,
}

impl Emotion {
    /// Fixed order, also used to break ties between equal levels.
    pub const ALL: [Emotion; 4] = [Emotion::Anger, Emotion::Joy, Emotion::Sorrow, Emotion::Surprise];

    /// Name of the provider field carrying this emotion's likelihood.
    pub fn field_name(self) -> &'static str {
        match self {
            Emotion::Anger => "angerLikelihood",
            Emotion::Joy => "joyLikelihood",
            Emotion::Sorrow => "sorrowLikelihood",
            Emotion::Surprise => "surpriseLikelihood",
        }
    }
}

impl FromStr for Emotion {
    type Err = EmotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|emotion| emotion.field_name() == s)
            .ok_or_else(|| EmotionError::UnreachableLabel(s.to_string()))
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedLikelihood {
    pub label: Emotion,
    pub value: LikelihoodLevel,
}

impl RankedLikelihood {
    pub fn new(label: Emotion, value: LikelihoodLevel) -> Self {
        RankedLikelihood { label, value }
    }
}

#[cfg(test)]
mod tests {
    use crate::annotation::likelihood::{Emotion, LikelihoodLevel, RankedLikelihood};
    use crate::error::EmotionError;

    #[test]
    fn test_likelihood_ordering() {
        for pair in LikelihoodLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].level() + 1, pair[1].level());
        }
        assert_eq!(LikelihoodLevel::Unknown.level(), 0);
        assert_eq!(LikelihoodLevel::VeryLikely.level(), 5);
    }

    #[test]
    fn test_likelihood_from_level() {
        assert_eq!(LikelihoodLevel::from_level(3).unwrap(), LikelihoodLevel::Possible);
        assert!(matches!(
            LikelihoodLevel::from_level(6),
            Err(EmotionError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_likelihood_parse() {
        assert_eq!("VERY_LIKELY".parse::<LikelihoodLevel>().unwrap(), LikelihoodLevel::VeryLikely);
        assert_eq!("UNKNOWN".parse::<LikelihoodLevel>().unwrap(), LikelihoodLevel::Unknown);
        assert!(matches!(
            "very_likely".parse::<LikelihoodLevel>(),
            Err(EmotionError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_likelihood_serde_matches_wire_names() {
        for level in LikelihoodLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
    }

    #[test]
    fn test_emotion_parse() {
        assert_eq!("joyLikelihood".parse::<Emotion>().unwrap(), Emotion::Joy);
        assert!(matches!(
            "fearLikelihood".parse::<Emotion>(),
            Err(EmotionError::UnreachableLabel(ref label)) if label == "fearLikelihood"
        ));
    }

    #[test]
    fn test_ranked_likelihood_json() {
        let ranked = RankedLikelihood::new(Emotion::Sorrow, LikelihoodLevel::Likely);
        let json = serde_json::to_string(&ranked).unwrap();
        assert_eq!(json, r#"{"label":"sorrowLikelihood","value":"LIKELY"}"#);
    }
}
