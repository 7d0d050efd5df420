use serde::Serialize;
use tracing::debug;
use crate::annotation::normalizer::{normalize, CleanedAnnotation, RawFaceAnnotation};
use crate::error::Result;
use crate::modules::vision_client::VisionClient;
use crate::resolver::emoji_resolver::Emoji;

/// A detected face together with the emoji it resolves to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceEmoji {
    pub annotation: CleanedAnnotation,
    pub emoji: Emoji,
}

/// annotate normalizes raw faces and resolves an emoji for each of them.
///
/// # Arguments
/// * `annotations` - Raw face annotations, already decoded from the provider response
///
/// # Returns
/// * `Result<Vec<FaceEmoji>>` - one entry per face, in input order
pub fn annotate(annotations: &[RawFaceAnnotation]) -> Result<Vec<FaceEmoji>> {
    let cleaned = normalize(annotations)?;
    cleaned
        .into_iter()
        .enumerate()
        .map(|(index, annotation)| -> Result<FaceEmoji> {
            let emoji = annotation.emoji().map_err(|e| e.at_face(index))?;
            debug!(face = index, emoji = %emoji, "resolved face emoji");
            Ok(FaceEmoji { annotation, emoji })
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct EmojiPipeline {
    vision: VisionClient,
}

impl EmojiPipeline {

    /// new initializes new instance of the pipeline
    pub fn new(vision_client: VisionClient) -> Self {
        EmojiPipeline {
            vision: vision_client,
        }
    }

    /// annotate resolves emojis for annotations the caller already fetched.
    pub fn annotate(&self, annotations: &[RawFaceAnnotation]) -> Result<Vec<FaceEmoji>> {
        annotate(annotations)
    }

    /// detect_emojis sends the image to the vision provider and resolves every detected face.
    ///
    /// # Arguments
    /// * `im_bytes` - Encoded image bytes (jpeg, png, ...)
    ///
    /// # Returns
    /// * `Result<Vec<FaceEmoji>>`
    pub async fn detect_emojis(&self, im_bytes: &[u8]) -> Result<Vec<FaceEmoji>> {
        let raw = self.vision.detect_faces(im_bytes).await?;
        annotate(&raw)
    }

    /// detect_emojis_base64 is `detect_emojis` for an image that is already base64 encoded.
    pub async fn detect_emojis_base64(&self, content: &str) -> Result<Vec<FaceEmoji>> {
        let raw = self.vision.detect_faces_base64(content).await?;
        annotate(&raw)
    }
}
