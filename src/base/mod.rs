//! Foundation types.
//!
//! - [`ItemKey`] - Cache identity for model items
//! - [`normalize`], [`eq`] - Case/space/underscore-insensitive name comparison
//!
//! This module has NO dependencies on other crate modules.

mod item_key;
mod name;

pub use item_key::ItemKey;
pub use name::{eq, normalize};
