//! Result of one route resolution request

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::route::RouteResult;

/// Terminal failure of a resolution request
///
/// Messages are fixed; provider detail never reaches this level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionFailure {
    /// Both geocoding tiers failed for the source or the destination
    #[error("failed to resolve coordinates")]
    GeocodeFailed,

    /// Both routing tiers failed
    #[error("failed to resolve route")]
    RouteFailed,
}

/// Either a resolved route or a typed failure, never both
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// Geocoding and routing both succeeded
    Resolved(RouteResult),
    /// One of the stages exhausted its fallbacks
    Failed(ResolutionFailure),
}

impl ResolutionOutcome {
    /// Build a failed outcome
    #[must_use]
    pub const fn failed(reason: ResolutionFailure) -> Self {
        Self::Failed(reason)
    }

    /// Whether a route was resolved
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Failure reason, if any
    #[must_use]
    pub const fn failure(&self) -> Option<ResolutionFailure> {
        match self {
            Self::Resolved(_) => None,
            Self::Failed(reason) => Some(*reason),
        }
    }

    /// Convert into a `Result`, moving the route out
    ///
    /// # Errors
    ///
    /// Returns the failure reason when the outcome is not resolved.
    pub fn into_result(self) -> Result<RouteResult, ResolutionFailure> {
        match self {
            Self::Resolved(route) => Ok(route),
            Self::Failed(reason) => Err(reason),
        }
    }
}

impl From<ResolutionFailure> for ResolutionOutcome {
    fn from(reason: ResolutionFailure) -> Self {
        Self::failed(reason)
    }
}
