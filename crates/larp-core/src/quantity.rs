//! Order quantities: tally the top recommendation of every player in a group
//! against a uniform's catalogue.

use serde::Serialize;

use crate::{fit, player::PlayerMeasurement, uniform::UniformSize};

/// One catalogued size and how many of it to order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeQuantity {
  pub label:    String,
  pub size:     UniformSize,
  pub quantity: u32,
}

/// Seed every catalogued size at 0, then add one to every bucket whose label
/// matches each player's first recommended size. Further candidates are not
/// counted.
///
/// Buckets are keyed by label, so catalogue rows that share one (the same size
/// imported twice, or women's and men's rows both labelled `M / 40`) all
/// receive the count.
pub fn aggregate(sizes: &[UniformSize], profiles: &[PlayerMeasurement]) -> Vec<SizeQuantity> {
  let mut buckets: Vec<SizeQuantity> = sizes
    .iter()
    .map(|size| SizeQuantity { label: size.label(), size: size.clone(), quantity: 0 })
    .collect();

  for profile in profiles {
    let recommendation = fit::recommend(sizes, profile.chest, profile.waist);
    let Some(top) = recommendation.first() else {
      continue;
    };
    let label = top.label();
    for bucket in buckets.iter_mut().filter(|b| b.label == label) {
      bucket.quantity += 1;
    }
  }

  buckets
}

/// Sum of all quantities.
pub fn total(quantities: &[SizeQuantity]) -> u32 { quantities.iter().map(|q| q.quantity).sum() }

#[cfg(test)]
mod tests {
  use uuid::Uuid;

  use super::*;
  use crate::uniform::test_helpers::{pilots, size};

  fn profile(chest: i32, waist: i32) -> PlayerMeasurement {
    let mut p = PlayerMeasurement::empty(Uuid::new_v4());
    p.chest = chest;
    p.waist = waist;
    p
  }

  #[test]
  fn every_size_is_seeded_at_zero() {
    let quantities = aggregate(&pilots(), &[]);
    assert_eq!(quantities.len(), 6);
    assert!(quantities.iter().all(|q| q.quantity == 0));
    assert_eq!(quantities[0].label, "S / 38");
  }

  #[test]
  fn only_the_top_candidate_is_counted() {
    // 94/78 fits M/40 and M/42 perfectly; only M/40 is counted.
    let profiles = [profile(94, 78), profile(100, 84), profile(100, 84)];
    let quantities = aggregate(&pilots(), &profiles);

    let by_label = |label: &str| {
      quantities.iter().find(|q| q.label == label).map(|q| q.quantity)
    };
    assert_eq!(by_label("M / 40"), Some(1));
    assert_eq!(by_label("M / 42"), Some(0));
    assert_eq!(by_label("L / 44"), Some(2));
    assert_eq!(total(&quantities), 3);
  }

  #[test]
  fn unmatched_players_are_not_counted() {
    let quantities = aggregate(&pilots(), &[profile(120, 120), profile(0, 0)]);
    assert_eq!(total(&quantities), 0);
  }

  #[test]
  fn rows_sharing_a_label_are_all_counted() {
    let sizes = vec![
      size("L", "44", (98, 102), (82, 86)),
      size("L", "44", (98, 102), (82, 86)),
    ];
    let quantities = aggregate(&sizes, &[profile(100, 84)]);
    assert_eq!(quantities.len(), 2);
    assert_eq!(quantities[0].quantity, 1);
    assert_eq!(quantities[1].quantity, 1);
  }
}
