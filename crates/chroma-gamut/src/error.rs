//! Gamut construction errors.

use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Errors raised while building a gamut boundary.
///
/// Both variants are contract violations caught at construction; queries on
/// a built gamut never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GamutError {
    /// Triangle primaries lie on one line, so the RGB/XYZ map is singular.
    #[error("gamut primaries are collinear, RGB/XYZ map would be singular")]
    CollinearPrimaries,

    /// A polygon boundary needs at least three vertices.
    #[error("polygon gamut needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },
}

impl GamutError {
    /// Create a too-few-vertices error.
    pub fn too_few_vertices(count: usize) -> Self {
        Self::TooFewVertices { count }
    }

    /// Check if this is the collinear-primaries case.
    pub fn is_collinear(&self) -> bool {
        matches!(self, Self::CollinearPrimaries)
    }
}

/// Result alias for gamut construction.
pub type GamutResult<T> = Result<T, GamutError>;

// ============================================================================
// Tests
// ============================================================================
