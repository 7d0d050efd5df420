use nalgebra::Vector2;
use crate::annotation::normalizer::CleanedAnnotation;
use crate::error::{EmotionError, Result};
use crate::utils::coordinate::Vertex;

/// Which face the presentation layer currently highlights.
///
/// Owned by the caller and passed to whatever needs it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceFocus {
    focused: Option<usize>,
}

impl FaceFocus {
    pub fn new() -> Self {
        FaceFocus { focused: None }
    }

    /// focus selects the face at `index` among `len` faces.
    pub fn focus(&mut self, index: usize, len: usize) -> Result<()> {
        if index >= len {
            return Err(EmotionError::invalid(format!(
                "cannot focus face {index}, only {len} detected"
            )));
        }
        self.focused = Some(index);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_annotation<'a>(&self, faces: &'a [CleanedAnnotation]) -> Option<&'a CleanedAnnotation> {
        self.focused.and_then(|index| faces.get(index))
    }
}

/// bounding_box returns the top-left and bottom-right corners enclosing `positions`.
pub fn bounding_box(positions: &[Vertex]) -> Option<(Vertex, Vertex)> {
    let first = positions.first()?;
    let (mut min, mut max) = (*first, *first);
    for v in &positions[1..] {
        min.x = min.x.min(v.x);
        min.y = min.y.min(v.y);
        max.x = max.x.max(v.x);
        max.y = max.y.max(v.y);
    }
    Some((min, max))
}

/// centroid returns the center of the bounding box of `positions`.
pub fn centroid(positions: &[Vertex]) -> Option<Vertex> {
    let (min, max) = bounding_box(positions)?;
    let center = (Vector2::new(min.x, min.y) + Vector2::new(max.x, max.y)) / 2.0;
    Some(Vertex::new(center.x, center.y))
}

fn face_area(positions: &[Vertex]) -> f32 {
    match bounding_box(positions) {
        Some((min, max)) => (max.x - min.x) * (max.y - min.y),
        None => 0.0,
    }
}

/// get_largest_face returns the index of the face with the largest bounding box.
///
/// Equal areas resolve to the earliest face.
pub fn get_largest_face(faces: &[CleanedAnnotation]) -> Option<usize> {
    let mut largest: Option<(usize, f32)> = None;
    for (idx, face) in faces.iter().enumerate() {
        let area = face_area(&face.positions);
        if largest.map_or(true, |(_, best)| area > best) {
            largest = Some((idx, area));
        }
    }
    largest.map(|(idx, _)| idx)
}

/// get_center_face returns the index of the face whose center is nearest to `center`.
///
/// Faces without geometry are skipped.
pub fn get_center_face(faces: &[CleanedAnnotation], center: Vertex) -> Option<usize> {
    let target = Vector2::new(center.x, center.y);
    let mut nearest: Option<(usize, f32)> = None;
    for (idx, face) in faces.iter().enumerate() {
        let face_center = match centroid(&face.positions) {
            Some(c) => Vector2::new(c.x, c.y),
            None => continue,
        };
        let dist = (face_center - target).norm();
        if nearest.map_or(true, |(_, best)| dist < best) {
            nearest = Some((idx, dist));
        }
    }
    nearest.map(|(idx, _)| idx)
}
