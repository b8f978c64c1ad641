//! Static data read at initialization
//!
//! Content catalog, manual pages and the boot banner. All of it is embedded
//! in the binary and treated as immutable configuration.

pub mod art;
pub mod content;
pub mod manual;

pub use art::banner;
pub use content::{CatalogEntry, ContentCatalog};
pub use manual::{ManualPages, MAN_USAGE};
