//! Top-10 occupation and work-site state rankings of certified visa
//! applications, read from and written to `;`-delimited text files.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod table;

pub use config::Config;
pub use error::{ErrorPolicy, Partial, ReportError};
pub use pipeline::{generate_reports, RunSummary};
