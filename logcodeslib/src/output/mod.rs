//! Output formatting: present data as tables.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting query results for display. It provides:
//!
//! - **CodeTable**: Table-ready data structure with headers, rows, and footer
//! - **TableRow**: Individual row with label, formatted values and style
//!
//! ## Example
//!
//! ```rust,ignore
//! use logcodeslib::output::CodeTable;
//!
//! let table = CodeTable::from_queryset(&queryset);
//! // table.headers: ["Code", "Count", "Share"]
//! // table.rows: [TableRow { label: "200", values: ["3", "75.0%"], .. }]
//! // table.footer: TableRow { label: "Total (6 lines, 2 skipped, 1 file)", .. }
//! ```

pub mod table;

pub use table::{CodeTable, TableRow};
