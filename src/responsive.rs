//! Breakpoint ordering and the ranges each breakpoint owns.
//!
//! A breakpoint "owns" the widths from its own value up to (but excluding)
//! the next larger breakpoint. The largest breakpoint owns everything above
//! it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{BreakpointError, Result};
use crate::query::MediaQuery;

/// Breakpoint name to width in pixels.
pub type BreakpointMap = IndexMap<String, u32>;

/// Breakpoint name to the range it owns, in ascending width order.
pub type AtRanges = IndexMap<String, AtRange>;

/// The range owned by a single breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AtRange {
    Between(String, String),
    GreaterThanOrEqual(String),
}

impl AtRange {
    pub fn to_query(&self) -> MediaQuery {
        self.clone().into()
    }
}

impl From<AtRange> for MediaQuery {
    fn from(range: AtRange) -> Self {
        match range {
            AtRange::Between(from, to) => MediaQuery::Between(from, to),
            AtRange::GreaterThanOrEqual(name) => MediaQuery::GreaterThanOrEqual(name),
        }
    }
}

/// The widths used by Floem's grid, from `xs` up to `xxl`.
pub fn default_breakpoints() -> BreakpointMap {
    [
        ("xs", 0),
        ("sm", 576),
        ("md", 768),
        ("lg", 992),
        ("xl", 1200),
        ("xxl", 1400),
    ]
    .into_iter()
    .map(|(name, width)| (name.to_string(), width))
    .collect()
}

/// Parses a breakpoint map from a JSON object such as `{"sm":0,"md":768}`.
///
/// Document order is preserved.
pub fn parse_breakpoints(json: &str) -> Result<BreakpointMap> {
    Ok(serde_json::from_str(json)?)
}

/// Returns the breakpoint names ordered by ascending width.
///
/// Breakpoints sharing a width have no defined relative order.
pub fn create_sorted_breakpoints(breakpoints: &BreakpointMap) -> Vec<String> {
    let mut sorted: Vec<(&String, u32)> = breakpoints
        .iter()
        .map(|(name, width)| (name, *width))
        .collect();
    sorted.sort_by_key(|(_, width)| *width);
    sorted.into_iter().map(|(name, _)| name.clone()).collect()
}

/// The range owned by the breakpoint at `index` in sorted order.
fn range_at(sorted_breakpoints: &[String], index: usize) -> AtRange {
    let from = sorted_breakpoints[index].clone();
    match sorted_breakpoints.get(index + 1) {
        Some(to) => AtRange::Between(from, to.clone()),
        None => AtRange::GreaterThanOrEqual(from),
    }
}

pub fn create_at_ranges(sorted_breakpoints: &[String]) -> AtRanges {
    (0..sorted_breakpoints.len())
        .map(|i| (sorted_breakpoints[i].clone(), range_at(sorted_breakpoints, i)))
        .collect()
}

pub(crate) fn width_of(breakpoints: &BreakpointMap, breakpoint: &str) -> Result<u32> {
    breakpoints
        .get(breakpoint)
        .copied()
        .ok_or_else(|| BreakpointError::UnknownBreakpoint {
            breakpoint: breakpoint.to_string(),
        })
}

fn position_of(sorted_breakpoints: &[String], breakpoint: &str) -> Result<usize> {
    sorted_breakpoints
        .iter()
        .position(|name| name == breakpoint)
        .ok_or_else(|| BreakpointError::UnknownBreakpoint {
            breakpoint: breakpoint.to_string(),
        })
}

pub(crate) fn next_breakpoint<'a>(
    sorted_breakpoints: &'a [String],
    breakpoint: &str,
) -> Result<&'a str> {
    let index = position_of(sorted_breakpoints, breakpoint)?;
    sorted_breakpoints
        .get(index + 1)
        .map(String::as_str)
        .ok_or_else(|| BreakpointError::NoLargerBreakpoint {
            breakpoint: breakpoint.to_string(),
        })
}

/// The range `breakpoint` owns, as [`create_at_ranges`] would build it.
pub(crate) fn at_range(sorted_breakpoints: &[String], breakpoint: &str) -> Result<AtRange> {
    let index = position_of(sorted_breakpoints, breakpoint)?;
    Ok(range_at(sorted_breakpoints, index))
}

pub fn largest_breakpoint(sorted_breakpoints: &[String]) -> Option<&str> {
    sorted_breakpoints.last().map(String::as_str)
}

fn index_at_width(
    breakpoints: &BreakpointMap,
    sorted_breakpoints: &[String],
    width: u32,
) -> Option<usize> {
    let widths: Vec<u32> = sorted_breakpoints
        .iter()
        .map(|name| breakpoints.get(name).copied())
        .collect::<Option<_>>()?;

    widths.iter().enumerate().position(|(i, from)| match widths.get(i + 1) {
        Some(to) => width >= *from && width < *to,
        None => width >= *from,
    })
}

/// Finds the breakpoint whose range contains `width`.
///
/// Returns `None` when `width` is smaller than every breakpoint.
pub fn find_breakpoint_at_width<'a>(
    breakpoints: &BreakpointMap,
    sorted_breakpoints: &'a [String],
    width: u32,
) -> Option<&'a str> {
    index_at_width(breakpoints, sorted_breakpoints, width)
        .map(|i| sorted_breakpoints[i].as_str())
}

/// Collects every breakpoint whose range intersects `from..=through`.
///
/// The result can be passed straight to [`should_render`](crate::should_render)
/// as the set of widths a host renders at.
pub fn find_breakpoints_for_widths(
    breakpoints: &BreakpointMap,
    sorted_breakpoints: &[String],
    from: u32,
    through: u32,
) -> Option<Vec<String>> {
    if from > through {
        return None;
    }
    let end = index_at_width(breakpoints, sorted_breakpoints, through)?;
    let start = index_at_width(breakpoints, sorted_breakpoints, from).unwrap_or(0);
    Some(sorted_breakpoints[start..=end].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakpoints() -> BreakpointMap {
        parse_breakpoints(r#"{"lg":1024,"sm":0,"md":768}"#).unwrap()
    }

    #[test]
    fn sorts_by_width() {
        let sorted = create_sorted_breakpoints(&breakpoints());
        assert_eq!(sorted, ["sm", "md", "lg"]);
    }

    #[test]
    fn sorting_empty_map() {
        assert!(create_sorted_breakpoints(&BreakpointMap::new()).is_empty());
        assert!(create_at_ranges(&[]).is_empty());
    }

    #[test]
    fn default_grid_is_ascending() {
        let breakpoints = default_breakpoints();
        let sorted = create_sorted_breakpoints(&breakpoints);
        assert_eq!(sorted, ["xs", "sm", "md", "lg", "xl", "xxl"]);
    }

    #[test]
    fn ranges_cover_every_breakpoint() {
        let sorted = create_sorted_breakpoints(&breakpoints());
        let ranges = create_at_ranges(&sorted);

        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges["sm"], AtRange::Between("sm".into(), "md".into()));
        assert_eq!(ranges["md"], AtRange::Between("md".into(), "lg".into()));
        assert_eq!(ranges["lg"], AtRange::GreaterThanOrEqual("lg".into()));
        assert_eq!(ranges.keys().collect::<Vec<_>>(), ["sm", "md", "lg"]);
    }

    #[test]
    fn single_breakpoint_is_open_ended() {
        let ranges = create_at_ranges(&["only".to_string()]);
        assert_eq!(ranges["only"], AtRange::GreaterThanOrEqual("only".into()));
    }

    #[test]
    fn single_range_matches_full_ranges() {
        let sorted = create_sorted_breakpoints(&breakpoints());
        let ranges = create_at_ranges(&sorted);
        for name in &sorted {
            assert_eq!(at_range(&sorted, name).as_ref(), Ok(&ranges[name]));
        }
        assert!(matches!(
            at_range(&sorted, "xl"),
            Err(BreakpointError::UnknownBreakpoint { .. })
        ));
    }

    #[test]
    fn next_breakpoint_of_largest() {
        let sorted = create_sorted_breakpoints(&breakpoints());
        assert_eq!(next_breakpoint(&sorted, "sm"), Ok("md"));
        assert_eq!(
            next_breakpoint(&sorted, "lg"),
            Err(BreakpointError::NoLargerBreakpoint {
                breakpoint: "lg".into()
            })
        );
        assert!(matches!(
            next_breakpoint(&sorted, "huge"),
            Err(BreakpointError::UnknownBreakpoint { .. })
        ));
    }

    #[test]
    fn breakpoint_at_width() {
        let breakpoints = breakpoints();
        let sorted = create_sorted_breakpoints(&breakpoints);
        assert_eq!(find_breakpoint_at_width(&breakpoints, &sorted, 0), Some("sm"));
        assert_eq!(find_breakpoint_at_width(&breakpoints, &sorted, 767), Some("sm"));
        assert_eq!(find_breakpoint_at_width(&breakpoints, &sorted, 768), Some("md"));
        assert_eq!(find_breakpoint_at_width(&breakpoints, &sorted, 5000), Some("lg"));
        assert_eq!(largest_breakpoint(&sorted), Some("lg"));
    }

    #[test]
    fn width_below_every_breakpoint() {
        let breakpoints = parse_breakpoints(r#"{"md":768,"lg":1024}"#).unwrap();
        let sorted = create_sorted_breakpoints(&breakpoints);
        assert_eq!(find_breakpoint_at_width(&breakpoints, &sorted, 320), None);
        assert_eq!(find_breakpoints_for_widths(&breakpoints, &sorted, 0, 320), None);
        assert_eq!(
            find_breakpoints_for_widths(&breakpoints, &sorted, 320, 800),
            Some(vec!["md".to_string()])
        );
    }

    #[test]
    fn breakpoints_for_width_span() {
        let breakpoints = breakpoints();
        let sorted = create_sorted_breakpoints(&breakpoints);
        assert_eq!(
            find_breakpoints_for_widths(&breakpoints, &sorted, 100, 900),
            Some(vec!["sm".to_string(), "md".to_string()])
        );
        assert_eq!(
            find_breakpoints_for_widths(&breakpoints, &sorted, 1100, 1200),
            Some(vec!["lg".to_string()])
        );
        assert_eq!(find_breakpoints_for_widths(&breakpoints, &sorted, 900, 100), None);
    }

    #[test]
    fn malformed_config() {
        assert!(matches!(
            parse_breakpoints(r#"{"sm":-1}"#),
            Err(BreakpointError::Config(_))
        ));
    }
}
