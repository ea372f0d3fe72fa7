//! Uniforms and their catalogued sizes.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{event::Group, text::is_blank};

/// Gender recorded on a size row that leaves the column blank.
pub const UNISEX: &str = "unisex";

/// Shown in place of a group name for a uniform that has none.
pub const NO_GROUP: &str = "group not assigned";

// ─── Uniform ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uniform {
  pub uniform_id: Uuid,
  pub name:       String,
  pub group_id:   Option<Uuid>,
}

/// Natural key of a [`Uniform`], also the input for creating one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformKey {
  pub name:     String,
  pub group_id: Option<Uuid>,
}

/// `"{uniform} - {group}"`, with [`NO_GROUP`] when the uniform has none.
pub struct UniformDisplay<'a> {
  pub uniform: &'a Uniform,
  pub group:   Option<&'a Group>,
}

impl fmt::Display for UniformDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let group = self.group.map_or(NO_GROUP, |g| g.name.as_str());
    write!(f, "{} - {}", self.uniform.name, group)
  }
}

// ─── Size ────────────────────────────────────────────────────────────────────

/// One catalogued size of a uniform. Ranges are inclusive; `min <= max` is
/// expected but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformSize {
  pub size_id:       Uuid,
  pub uniform_id:    Uuid,
  pub gender:        Option<String>,
  pub american_size: String,
  pub european_size: String,
  pub chest_min:     i32,
  pub chest_max:     i32,
  pub waist_min:     i32,
  pub waist_max:     i32,
}

/// Input for appending a size to a uniform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUniformSize {
  pub gender:        Option<String>,
  pub american_size: String,
  pub european_size: String,
  pub chest_min:     i32,
  pub chest_max:     i32,
  pub waist_min:     i32,
  pub waist_max:     i32,
}

impl NewUniformSize {
  /// Normalise the gender column: blank becomes [`UNISEX`].
  pub fn gender_or_unisex(raw: &str) -> String {
    if is_blank(raw) { UNISEX.to_owned() } else { raw.to_owned() }
  }
}

impl UniformSize {
  pub fn chest_fit(&self, chest: i32) -> bool {
    self.chest_min <= chest && chest <= self.chest_max
  }

  pub fn waist_fit(&self, waist: i32) -> bool {
    self.waist_min <= waist && waist <= self.waist_max
  }

  /// Loose chest test: in range, or the size starts at or above `chest`.
  pub fn chest_minimum_fit(&self, chest: i32) -> bool {
    self.chest_fit(chest) || self.chest_min >= chest
  }

  /// Loose waist test: in range, or the size starts at or above `waist`.
  pub fn waist_minimum_fit(&self, waist: i32) -> bool {
    self.waist_fit(waist) || self.waist_min >= waist
  }

  pub fn perfect_fit(&self, chest: i32, waist: i32) -> bool {
    self.chest_fit(chest) && self.waist_fit(waist)
  }

  pub fn valid_fit(&self, chest: i32, waist: i32) -> bool {
    (self.chest_fit(chest) && self.waist_minimum_fit(waist))
      || (self.chest_minimum_fit(chest) && self.waist_fit(waist))
  }

  /// Short label used to bucket order quantities: `"{american} / {european}"`,
  /// or whichever of the two is present.
  pub fn label(&self) -> String {
    match (self.american_size.is_empty(), self.european_size.is_empty()) {
      (false, false) => format!("{} / {}", self.american_size, self.european_size),
      (false, true) => self.american_size.clone(),
      _ => self.european_size.clone(),
    }
  }

  /// Long form used in import reports, e.g.
  /// `"women. L/44 chest(98,102) waist(82,86)"`.
  pub fn display<'a>(&'a self, uniform: &'a Uniform) -> SizeDisplay<'a> {
    SizeDisplay { size: self, uniform }
  }
}

/// See [`UniformSize::display`]. Sizes without a gender are prefixed with the
/// uniform name instead.
pub struct SizeDisplay<'a> {
  size:    &'a UniformSize,
  uniform: &'a Uniform,
}

impl fmt::Display for SizeDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = self.size;
    match &s.gender {
      Some(gender) => write!(f, "{gender}. ")?,
      None => write!(f, "{} ", self.uniform.name)?,
    }
    match (s.american_size.is_empty(), s.european_size.is_empty()) {
      (false, false) => write!(f, "{}/{} ", s.american_size, s.european_size)?,
      (false, true) => write!(f, "{} ", s.american_size)?,
      (true, false) => write!(f, "{} ", s.european_size)?,
      (true, true) => {}
    }
    write!(
      f,
      "chest({},{}) waist({},{})",
      s.chest_min, s.chest_max, s.waist_min, s.waist_max
    )
  }
}

#[cfg(test)]
pub(crate) mod test_helpers {
  use super::*;

  /// A women's size with the given labels and inclusive ranges.
  pub(crate) fn size(
    american: &str,
    european: &str,
    chest: (i32, i32),
    waist: (i32, i32),
  ) -> UniformSize {
    UniformSize {
      size_id:       Uuid::new_v4(),
      uniform_id:    Uuid::nil(),
      gender:        Some("women".into()),
      american_size: american.into(),
      european_size: european.into(),
      chest_min:     chest.0,
      chest_max:     chest.1,
      waist_min:     waist.0,
      waist_max:     waist.1,
    }
  }

  /// The women's pilot catalogue used across the tests.
  pub(crate) fn pilots() -> Vec<UniformSize> {
    vec![
      size("S", "38", (86, 90), (70, 74)),
      size("M", "40", (90, 94), (74, 78)),
      size("M", "42", (94, 98), (78, 82)),
      size("L", "44", (98, 102), (82, 86)),
      size("L", "46", (102, 107), (86, 91)),
      size("XL", "48", (107, 113), (91, 97)),
    ]
  }
}
