use std::fmt;
use serde::{Serialize, Serializer};
use crate::annotation::likelihood::{Emotion, LikelihoodLevel, RankedLikelihood};
use crate::error::{EmotionError, Result};

/// Symbols a face can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emoji {
    /// 😶 nothing detected, or joy with unknown level
    Neutral,
    /// 😆
    Laughing,
    /// 😃
    Grinning,
    /// 🙂
    Smiling,
    /// 😐
    Straight,
    /// 😭
    Sobbing,
    /// 😢
    Crying,
    /// 😟
    Worried,
    /// 😡
    Furious,
    /// 😠
    Angry,
    /// 😤
    Huffing,
    /// 😲
    Astonished,
    /// 😮
    OpenMouth,
    /// 😯
    Hushed,
}

impl Emoji {
    pub fn as_str(self) -> &'static str {
        match self {
            Emoji::Neutral => "😶",
            Emoji::Laughing => "😆",
            Emoji::Grinning => "😃",
            Emoji::Smiling => "🙂",
            Emoji::Straight => "😐",
            Emoji::Sobbing => "😭",
            Emoji::Crying => "😢",
            Emoji::Worried => "😟",
            Emoji::Furious => "😡",
            Emoji::Angry => "😠",
            Emoji::Huffing => "😤",
            Emoji::Astonished => "😲",
            Emoji::OpenMouth => "😮",
            Emoji::Hushed => "😯",
        }
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Emoji {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

fn emoji_for(label: Emotion, value: LikelihoodLevel) -> Emoji {
    use LikelihoodLevel::*;

    match label {
        Emotion::Joy => match value {
            VeryLikely => Emoji::Laughing,
            Likely => Emoji::Grinning,
            Possible => Emoji::Smiling,
            Unlikely | VeryUnlikely => Emoji::Straight,
            Unknown => Emoji::Neutral,
        },
        Emotion::Sorrow => match value {
            VeryLikely => Emoji::Sobbing,
            Likely => Emoji::Crying,
            _ => Emoji::Worried,
        },
        Emotion::Anger => match value {
            VeryLikely => Emoji::Furious,
            Likely => Emoji::Angry,
            _ => Emoji::Huffing,
        },
        Emotion::Surprise => match value {
            VeryLikely => Emoji::Astonished,
            Likely => Emoji::OpenMouth,
            _ => Emoji::Hushed,
        },
    }
}

/// resolve picks the emoji for a face from its ranked likelihoods.
///
/// Only the first entry decides the symbol, unless every level is unknown.
///
/// # Arguments
/// * `ranked` - The four likelihoods of a face, most confident first
///
/// # Returns
/// * `Result<Emoji>`
pub fn resolve(ranked: &[RankedLikelihood]) -> Result<Emoji> {
    if ranked.len() != Emotion::ALL.len() {
        return Err(EmotionError::invalid(format!(
            "expected {} ranked likelihoods, got {}",
            Emotion::ALL.len(),
            ranked.len()
        )));
    }

    if ranked.iter().all(|r| r.value == LikelihoodLevel::Unknown) {
        return Ok(Emoji::Neutral);
    }

    let top = ranked[0];
    Ok(emoji_for(top.label, top.value))
}

/// resolve_labeled resolves entries whose labels are still provider field names.
pub fn resolve_labeled(ranked: &[(String, LikelihoodLevel)]) -> Result<Emoji> {
    let ranked = ranked
        .iter()
        .map(|(label, value)| -> Result<RankedLikelihood> {
            Ok(RankedLikelihood::new(label.parse()?, *value))
        })
        .collect::<Result<Vec<_>>>()?;
    resolve(&ranked)
}
