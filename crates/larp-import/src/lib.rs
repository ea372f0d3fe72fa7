//! CSV import pipeline for the LARP store.
//!
//! Converts an uploaded CSV file into players, characters, assignments,
//! uniforms and uniform sizes, returning one human-readable status line per
//! data row. Works against any [`LarpStore`].
//!
//! # Quick start
//!
//! ```no_run
//! # async fn run(store: &impl larp_core::store::LarpStore) -> larp_import::Result<()> {
//! let csv = b"run,player,character,group,race,rank\n1,Ana Perez,Ono,Pilots,Terrans,\n";
//! let report = larp_import::process(store, "Ad Astra", csv, "character").await?;
//! assert_eq!(report, ["Character Ono assigned to Ana Perez"]);
//! # Ok(())
//! # }
//! ```
//!
//! [`LarpStore`]: larp_core::store::LarpStore

pub mod character;
pub mod dispatch;
pub mod error;
pub mod resolve;
pub mod row;
pub mod uniform;

pub use dispatch::{process, process_str};
pub use error::{Error, Result};
pub use row::FileType;

#[cfg(test)]
mod tests;
