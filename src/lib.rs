//! Paginated PDF reports for real-estate listings.
//!
//! A [ReportComposer] takes one or more [Property] records and lays them out into
//! a [Document]: a photo gallery, price and specs, features and description, with
//! content flowing onto new pages as needed and a footer stamped on every page at
//! the end. The result is a [Report], ready to preview or save.
//!
//! ```no_run
//! use inmobidata_report::{mock, ReportComposer, ReportConfig, UrlImageLoader};
//!
//! # async fn demo() -> Result<(), inmobidata_report::GenerationError> {
//! let config = ReportConfig::default();
//! let loader = UrlImageLoader::new(config.image_timeout_secs);
//! let composer = ReportComposer::new(config, loader);
//!
//! let report = composer.generate_multi(&mock::properties()).await?;
//! report.save(".")?;
//! # Ok(())
//! # }
//! ```

mod colour;
pub use colour::*;

mod composer;
pub use composer::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Price, area and date formatting as printed on reports
pub mod format;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Cursor-driven layout of galleries and text sections
pub mod layout;

mod loader;
pub use loader::*;

/// Demo listings
pub mod mock;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

pub mod pagesize;

mod property;
pub use property::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod report;
pub use report::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
