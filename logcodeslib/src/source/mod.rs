//! Source discovery: find the log files to scan.
//!
//! This module handles the first stage of the pipeline - deciding what
//! input to read. Directories are walked recursively, hidden directories
//! are skipped, and include/exclude glob patterns narrow the selection.
//!
//! ## Example
//!
//! ```rust,ignore
//! use logcodeslib::source::{discover_files, FilterConfig};
//!
//! let filter = FilterConfig::new()
//!     .include("**/access*.log")?
//!     .exclude("**/archive/**")?;
//! let files = discover_files("/var/log/nginx", &filter)?;
//! ```

pub mod filter;

pub use filter::{discover_files, discover_files_in_paths, FilterConfig};
