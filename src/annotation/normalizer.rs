use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::annotation::likelihood::{Emotion, LikelihoodLevel, RankedLikelihood};
use crate::error::{EmotionError, Result};
use crate::resolver::emoji_resolver::{resolve, Emoji};
use crate::utils::coordinate::{BoundingPoly, Vertex};

/// One face annotation as returned by the vision provider.
///
/// Likelihood fields stay raw strings so a missing or unknown value is
/// reported against its face instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFaceAnnotation {
    pub anger_likelihood: Option<String>,
    pub joy_likelihood: Option<String>,
    pub sorrow_likelihood: Option<String>,
    pub surprise_likelihood: Option<String>,
    #[serde(default)]
    pub fd_bounding_poly: BoundingPoly,
}

impl RawFaceAnnotation {
    fn raw_value(&self, emotion: Emotion) -> Option<&str> {
        match emotion {
            Emotion::Anger => self.anger_likelihood.as_deref(),
            Emotion::Joy => self.joy_likelihood.as_deref(),
            Emotion::Sorrow => self.sorrow_likelihood.as_deref(),
            Emotion::Surprise => self.surprise_likelihood.as_deref(),
        }
    }

    /// likelihood parses the field for `emotion`.
    pub fn likelihood(&self, emotion: Emotion) -> Result<LikelihoodLevel> {
        match self.raw_value(emotion) {
            Some(value) => value.parse(),
            None => Err(EmotionError::invalid(format!("missing {}", emotion.field_name()))),
        }
    }
}

/// A face reduced to its polygon and its emotions ranked by confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedAnnotation {
    pub positions: Vec<Vertex>,
    pub likelihoods: [RankedLikelihood; 4],
}

impl CleanedAnnotation {
    /// The most confident emotion of the face.
    pub fn dominant(&self) -> RankedLikelihood {
        self.likelihoods[0]
    }

    pub fn emoji(&self) -> Result<Emoji> {
        resolve(&self.likelihoods)
    }
}

/// rank_likelihoods sorts the four emotions by descending level.
///
/// The sort is stable, so equal levels keep the anger, joy, sorrow, surprise order.
pub fn rank_likelihoods(levels: [LikelihoodLevel; 4]) -> [RankedLikelihood; 4] {
    let mut ranked: [RankedLikelihood; 4] =
        std::array::from_fn(|i| RankedLikelihood::new(Emotion::ALL[i], levels[i]));
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked
}

/// normalize_face ranks the likelihoods of the face at `index`.
pub fn normalize_face(index: usize, annotation: &RawFaceAnnotation) -> Result<CleanedAnnotation> {
    let mut levels = [LikelihoodLevel::Unknown; 4];
    for (level, emotion) in levels.iter_mut().zip(Emotion::ALL) {
        *level = annotation.likelihood(emotion).map_err(|e| e.at_face(index))?;
    }

    let likelihoods = rank_likelihoods(levels);
    debug!(
        face = index,
        top = %likelihoods[0].label,
        level = %likelihoods[0].value,
        "normalized face annotation"
    );

    Ok(CleanedAnnotation {
        positions: annotation.fd_bounding_poly.vertices.clone(),
        likelihoods,
    })
}

/// normalize cleans every annotation, preserving order.
///
/// # Arguments
/// * `annotations` - Face annotations from the vision provider
///
/// # Returns
/// * `Result<Vec<CleanedAnnotation>>` - fails on the first malformed face, naming its index
pub fn normalize(annotations: &[RawFaceAnnotation]) -> Result<Vec<CleanedAnnotation>> {
    annotations
        .iter()
        .enumerate()
        .map(|(index, annotation)| normalize_face(index, annotation))
        .collect()
}
