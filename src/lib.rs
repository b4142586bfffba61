//! # Floem Media
//! Responsive breakpoints expressed as CSS media queries.
//!
//! Breakpoints are named pixel widths. Each breakpoint owns the widths from
//! its own value up to the next larger breakpoint, and content can be
//! targeted at those ranges with a [`MediaQuery`]:
//!
//! ```rust
//! use floem_media::*;
//!
//! let breakpoints = parse_breakpoints(r#"{"sm":0,"md":768,"lg":1024}"#).unwrap();
//! let sorted = create_sorted_breakpoints(&breakpoints);
//!
//! let query = MediaQuery::LessThan("md".to_string());
//! assert_eq!(
//!     create_breakpoint_query(&breakpoints, &sorted, &query).unwrap(),
//!     "(max-width:767px)"
//! );
//!
//! // A host that only renders for tablets and desktops never shows it.
//! assert!(!should_render(&breakpoints, &sorted, Some(&query), &["md", "lg"]).unwrap());
//! ```
//!
//! Everything is computed from the breakpoint map passed in; nothing is
//! cached between calls.

mod error;
mod query;
mod render;
pub mod responsive;
pub mod stylesheet;

pub use error::{BreakpointError, Result};
pub use query::{
    BreakpointProps, MediaQuery, create_at_breakpoint_queries, create_breakpoint_query,
};
pub use render::should_render;
pub use responsive::{
    AtRange, AtRanges, BreakpointMap, create_at_ranges, create_sorted_breakpoints,
    default_breakpoints, find_breakpoint_at_width, find_breakpoints_for_widths,
    largest_breakpoint, parse_breakpoints,
};
pub use stylesheet::{DEFAULT_CLASS_PREFIX, create_media_style};
