//! Core types and trait definitions for the LARP organiser tooling.
//!
//! Records, the [`store::LarpStore`] trait, the size matcher and the roster
//! reports. No CSV or database code lives here; `larp-import` and
//! `larp-store-sqlite` build on this crate.

// Native `async fn` in traits; the store trait spells out `Send` itself.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod event;
pub mod fit;
pub mod player;
pub mod quantity;
pub mod roster;
pub mod store;
pub mod text;
pub mod uniform;

pub use error::{Error, Result};
