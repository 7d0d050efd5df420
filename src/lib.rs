pub mod annotation;
pub mod config;
pub mod error;
pub mod helper;
pub mod modules;
pub mod pipeline;
pub mod resolver;
pub mod utils;

pub use annotation::likelihood::{Emotion, LikelihoodLevel, RankedLikelihood};
pub use annotation::normalizer::{normalize, CleanedAnnotation, RawFaceAnnotation};
pub use error::{EmotionError, Result};
pub use resolver::emoji_resolver::{resolve, Emoji};
