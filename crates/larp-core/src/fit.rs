//! Size recommendation: match a player's chest and waist against a uniform's
//! catalogued sizes.
//!
//! Matching is two-tier. A *perfect* fit has both measurements inside the
//! size's ranges. Only when no size fits perfectly are *valid* fits
//! considered: one measurement inside its range and the other at or below the
//! size's minimum for that dimension (see [`UniformSize::valid_fit`]).

use serde::Serialize;

use crate::uniform::UniformSize;

/// Which tier produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitTier {
  Perfect,
  Valid,
}

/// The outcome of [`recommend`]. `sizes` keeps catalogue order and is empty
/// when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation<'a> {
  pub tier:  Option<FitTier>,
  pub sizes: Vec<&'a UniformSize>,
}

impl<'a> Recommendation<'a> {
  pub fn is_empty(&self) -> bool { self.sizes.is_empty() }

  /// The top candidate; the only one that counts towards order quantities.
  pub fn first(&self) -> Option<&'a UniformSize> { self.sizes.first().copied() }
}

/// Every size that fits `chest`/`waist` perfectly, in catalogue order.
pub fn perfect_fits(sizes: &[UniformSize], chest: i32, waist: i32) -> Vec<&UniformSize> {
  sizes.iter().filter(|s| s.perfect_fit(chest, waist)).collect()
}

/// Every size that is a valid (loose) fit, in catalogue order.
pub fn valid_fits(sizes: &[UniformSize], chest: i32, waist: i32) -> Vec<&UniformSize> {
  sizes.iter().filter(|s| s.valid_fit(chest, waist)).collect()
}

/// Recommend sizes for a player. Perfect fits win outright; valid fits are
/// only returned when there are none.
pub fn recommend(sizes: &[UniformSize], chest: i32, waist: i32) -> Recommendation<'_> {
  let perfect = perfect_fits(sizes, chest, waist);
  if !perfect.is_empty() {
    return Recommendation { tier: Some(FitTier::Perfect), sizes: perfect };
  }

  let valid = valid_fits(sizes, chest, waist);
  if valid.is_empty() {
    Recommendation { tier: None, sizes: valid }
  } else {
    Recommendation { tier: Some(FitTier::Valid), sizes: valid }
  }
}
