//! The two row schemas an upload can carry, and the tag that selects one.

use csv::StringRecord;
use larp_core::{text::parse_measurement, uniform::NewUniformSize};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which schema the rows of an upload follow. Tags match exactly:
/// `character` or `uniform`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FileType {
  /// `run, player, character, group, race, rank`
  Character,
  /// `name, group, color, gender, american_size, european_size, chest_min,
  /// chest_max, waist_min, waist_max`
  Uniform,
}

/// Field `index` of `record`, or `""` when the row is too short.
fn field(record: &StringRecord, index: usize) -> String {
  record.get(index).unwrap_or_default().to_owned()
}

/// The row as it appeared in the file, for status lines:
/// `['1', 'Ana Perez', '']`.
fn describe(record: &StringRecord) -> String {
  let fields: Vec<String> = record.iter().map(|f| format!("'{f}'")).collect();
  format!("[{}]", fields.join(", "))
}

// ─── Character rows ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterRow {
  pub run:       String,
  pub player:    String,
  pub character: String,
  pub group:     String,
  pub race:      String,
  pub rank:      String,
  pub raw:       String,
}

impl CharacterRow {
  pub fn from_record(record: &StringRecord) -> Self {
    Self {
      run:       field(record, 0),
      player:    field(record, 1),
      character: field(record, 2),
      group:     field(record, 3),
      race:      field(record, 4),
      rank:      field(record, 5),
      raw:       describe(record),
    }
  }
}

// ─── Uniform rows ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniformRow {
  pub name:          String,
  pub group:         String,
  pub color:         String,
  pub gender:        String,
  pub american_size: String,
  pub european_size: String,
  pub chest_min:     String,
  pub chest_max:     String,
  pub waist_min:     String,
  pub waist_max:     String,
  pub raw:           String,
}

impl UniformRow {
  pub fn from_record(record: &StringRecord) -> Self {
    Self {
      name:          field(record, 0),
      group:         field(record, 1),
      color:         field(record, 2),
      gender:        field(record, 3),
      american_size: field(record, 4),
      european_size: field(record, 5),
      chest_min:     field(record, 6),
      chest_max:     field(record, 7),
      waist_min:     field(record, 8),
      waist_max:     field(record, 9),
      raw:           describe(record),
    }
  }

  /// The size described by this row. Blank gender means unisex; blank or
  /// malformed numbers mean 0.
  pub fn size(&self) -> NewUniformSize {
    NewUniformSize {
      gender:        Some(NewUniformSize::gender_or_unisex(&self.gender)),
      american_size: self.american_size.clone(),
      european_size: self.european_size.clone(),
      chest_min:     parse_measurement(&self.chest_min),
      chest_max:     parse_measurement(&self.chest_max),
      waist_min:     parse_measurement(&self.waist_min),
      waist_max:     parse_measurement(&self.waist_max),
    }
  }
}

// ─── Tagged union ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
  Character(CharacterRow),
  Uniform(UniformRow),
}

impl Row {
  pub fn parse(file_type: FileType, record: &StringRecord) -> Self {
    match file_type {
      FileType::Character => Self::Character(CharacterRow::from_record(record)),
      FileType::Uniform => Self::Uniform(UniformRow::from_record(record)),
    }
  }

  /// Status line for a row whose persistence failed part way.
  pub fn not_processed(&self) -> String {
    match self {
      Self::Character(row) => format!("Character info NOT PROCESSED. {}", row.raw),
      Self::Uniform(row) => format!("Uniform info NOT PROCESSED. {}", row.raw),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use super::*;

  #[test]
  fn file_type_tags() {
    assert_eq!(FileType::from_str("character").unwrap(), FileType::Character);
    assert_eq!(FileType::from_str("uniform").unwrap(), FileType::Uniform);
    for tag in ["Characters", "characters", "Character", " character", "uniforms", "UNIFORM", ""] {
      assert!(FileType::from_str(tag).is_err(), "{tag:?} should not parse");
    }
    assert!(FileType::from_str("bookings").is_err());
    assert_eq!(FileType::Uniform.to_string(), "uniform");
  }

  #[test]
  fn short_character_row_pads_with_blanks() {
    let record = StringRecord::from(vec!["2", "Samuel Bascomb"]);
    let row = CharacterRow::from_record(&record);
    assert_eq!(row.run, "2");
    assert_eq!(row.player, "Samuel Bascomb");
    assert_eq!(row.character, "");
    assert_eq!(row.rank, "");
    assert_eq!(row.raw, "['2', 'Samuel Bascomb']");
  }

  #[test]
  fn uniform_row_size_defaults() {
    let record = StringRecord::from(vec!["", "Pilots", "", "", "L", "44", "", "x", " 82 "]);
    let size = UniformRow::from_record(&record).size();
    assert_eq!(size.gender.as_deref(), Some("unisex"));
    assert_eq!(size.american_size, "L");
    assert_eq!(size.european_size, "44");
    assert_eq!((size.chest_min, size.chest_max), (0, 0));
    assert_eq!((size.waist_min, size.waist_max), (82, 0));
  }

  #[test]
  fn not_processed_names_the_row_kind() {
    let record = StringRecord::from(vec!["a", "b"]);
    let row = Row::parse(FileType::Uniform, &record);
    assert_eq!(row.not_processed(), "Uniform info NOT PROCESSED. ['a', 'b']");
  }
}
