//! Checksum, digest and text encoding report.
//!
//! ```
//! use hashcalc::{Config, Family, Report};
//!
//! let config = Config {
//!     only: vec![Family::Checksum],
//!     ..Config::default()
//! };
//! let report = Report::generate(b"123456789", &config)?;
//! assert_eq!(report.get("CRC32"), Some("CBF43926"));
//! assert_eq!(report.get("MD5"), None);
//! # Ok::<(), hashcalc::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod config;
mod error;
mod report;

pub use config::{Config, Family};
pub use error::{Error, Result};
pub use report::{Entry, Report};
