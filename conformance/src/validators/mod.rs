//! Registry validators.

pub mod compression;
pub mod inheritance;
pub mod inventory;
pub mod vocabulary;
