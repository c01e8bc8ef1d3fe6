//! Query processing: group and sort scan results.
//!
//! This module handles the third stage of the pipeline - transforming raw
//! scan results into a query-ready format. It provides:
//!
//! - **Options**: grouping and ordering (`Aggregation`, `Ordering`)
//! - **Classes**: status class of a code (`StatusClass`)
//! - **QuerySet**: processed data ready for presentation
//!
//! ## Example
//!
//! ```rust,ignore
//! use logcodeslib::query::{Aggregation, CodeQuerySet, Ordering};
//!
//! let queryset = CodeQuerySet::from_result(&result, Aggregation::ByClass, Ordering::by_count());
//! ```

pub mod class;
pub mod options;
pub mod queryset;

pub use class::StatusClass;
pub use options::{Aggregation, OrderBy, OrderDirection, Ordering};
pub use queryset::{CodeQuerySet, QueryItem};
