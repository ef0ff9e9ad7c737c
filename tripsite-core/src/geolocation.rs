use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;
use tracing::debug;

use crate::model::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationUnavailable {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location could not be determined: {0}")]
    Failed(String),
}

/// Source of the device position. One attempt per call, no retries.
#[async_trait]
pub trait Locator: Send + Sync + Debug {
    async fn current_position(&self) -> Result<Coordinate, LocationUnavailable>;
}

/// A locator that always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator(pub Coordinate);

#[async_trait]
impl Locator for FixedLocator {
    async fn current_position(&self) -> Result<Coordinate, LocationUnavailable> {
        Ok(self.0)
    }
}

/// A locator whose permission prompt was declined.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocator;

#[async_trait]
impl Locator for DeniedLocator {
    async fn current_position(&self) -> Result<Coordinate, LocationUnavailable> {
        Err(LocationUnavailable::PermissionDenied)
    }
}

/// Resolve the coordinate to show weather for.
///
/// A missing capability, a denial and any failure all resolve to
/// [`Coordinate::FALLBACK`]; none of them is surfaced to the user.
pub async fn resolve_coordinate(locator: Option<&dyn Locator>) -> Coordinate {
    let Some(locator) = locator else {
        debug!("no location capability, using fallback coordinate");
        return Coordinate::FALLBACK;
    };

    match locator.current_position().await {
        Ok(coord) => coord,
        Err(err) => {
            debug!(%err, "device location unavailable, using fallback coordinate");
            Coordinate::FALLBACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn device_position_is_used_when_granted() {
        let here = Coordinate::new(48.8566, 2.3522);
        let coord = resolve_coordinate(Some(&FixedLocator(here) as &dyn Locator)).await;

        assert_eq!(coord, here);
    }

    #[tokio::test]
    async fn denial_falls_back_to_tbilisi() {
        let coord = resolve_coordinate(Some(&DeniedLocator as &dyn Locator)).await;

        assert_eq!(coord, Coordinate::new(41.7151, 44.8271));
    }

    #[tokio::test]
    async fn missing_capability_falls_back() {
        assert_eq!(resolve_coordinate(None).await, Coordinate::FALLBACK);
    }
}
