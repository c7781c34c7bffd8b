//! Two-tier provider chain
//!
//! A chain is exactly one primary and one fallback implementation of the
//! same port. Resolvers walk the tiers in order and stop at the first
//! success; the chain itself holds no per-request state.

use std::fmt;
use std::sync::Arc;

/// Position of a provider within its chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderTier {
    /// Tried first
    Primary,
    /// Tried only after the primary failed
    Fallback,
}

impl fmt::Display for ProviderTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// Ordered primary/fallback pair of providers for one capability
pub struct ProviderChain<P: ?Sized> {
    primary: Arc<P>,
    fallback: Arc<P>,
}

impl<P: ?Sized> ProviderChain<P> {
    /// Create a chain from its two tiers
    #[must_use]
    pub const fn new(primary: Arc<P>, fallback: Arc<P>) -> Self {
        Self { primary, fallback }
    }

    /// The provider tried first
    #[must_use]
    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// The provider tried second
    #[must_use]
    pub fn fallback(&self) -> &P {
        &self.fallback
    }

    /// Both tiers in attempt order
    #[must_use]
    pub fn tiers(&self) -> [(ProviderTier, &P); 2] {
        [
            (ProviderTier::Primary, &*self.primary),
            (ProviderTier::Fallback, &*self.fallback),
        ]
    }
}

impl<P: ?Sized> Clone for ProviderChain<P> {
    fn clone(&self) -> Self {
        Self {
            primary: Arc::clone(&self.primary),
            fallback: Arc::clone(&self.fallback),
        }
    }
}

impl<P: ?Sized> fmt::Debug for ProviderChain<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderChain").finish_non_exhaustive()
    }
}
