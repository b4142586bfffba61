//! Breakpoint queries and their CSS media-query form.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{BreakpointError, Result};
use crate::responsive::{AtRanges, BreakpointMap, at_range, next_breakpoint, width_of};

/// A condition on the viewport width, expressed in terms of breakpoint names.
///
/// Serializes with the same keys component props use, e.g.
/// `{"lessThan":"md"}` or `{"between":["sm","lg"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaQuery {
    /// Only within the range owned by the breakpoint.
    At(String),
    LessThan(String),
    /// At or above the breakpoint *after* this one.
    GreaterThan(String),
    GreaterThanOrEqual(String),
    /// From the first breakpoint up to, but excluding, the second.
    Between(String, String),
}

impl MediaQuery {
    /// The props key naming this kind of query.
    pub fn kind(&self) -> &'static str {
        match self {
            MediaQuery::At(_) => "at",
            MediaQuery::LessThan(_) => "lessThan",
            MediaQuery::GreaterThan(_) => "greaterThan",
            MediaQuery::GreaterThanOrEqual(_) => "greaterThanOrEqual",
            MediaQuery::Between(..) => "between",
        }
    }
}

/// Breakpoint props as a component receives them: every field optional.
///
/// At most one field is expected to be set. When several are, formatting
/// and visibility resolve them in different orders; see [`query`] and
/// [`visibility_query`].
///
/// [`query`]: BreakpointProps::query
/// [`visibility_query`]: BreakpointProps::visibility_query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub less_than: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greater_than: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greater_than_or_equal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub between: Option<(String, String)>,
}

fn set(field: &Option<String>) -> Option<String> {
    field.as_ref().filter(|name| !name.is_empty()).cloned()
}

impl BreakpointProps {
    fn range_query(&self) -> Option<MediaQuery> {
        set(&self.less_than)
            .map(MediaQuery::LessThan)
            .or_else(|| set(&self.greater_than).map(MediaQuery::GreaterThan))
            .or_else(|| {
                set(&self.greater_than_or_equal).map(MediaQuery::GreaterThanOrEqual)
            })
            .or_else(|| {
                self.between
                    .clone()
                    .map(|(from, to)| MediaQuery::Between(from, to))
            })
    }

    /// The query to format, if any field is set.
    ///
    /// The first set field wins in the order `lessThan`, `greaterThan`,
    /// `greaterThanOrEqual`, `between`, then `at`. Empty names count as unset.
    pub fn query(&self) -> Option<MediaQuery> {
        self.range_query().or_else(|| set(&self.at).map(MediaQuery::At))
    }

    /// The query to pass to [`should_render`](crate::should_render).
    ///
    /// Same as [`query`](BreakpointProps::query), except `at` takes
    /// precedence over every other field.
    pub fn visibility_query(&self) -> Option<MediaQuery> {
        set(&self.at)
            .map(MediaQuery::At)
            .or_else(|| self.range_query())
    }
}

impl TryFrom<&BreakpointProps> for MediaQuery {
    type Error = BreakpointError;

    fn try_from(props: &BreakpointProps) -> Result<Self> {
        props
            .query()
            .ok_or_else(|| BreakpointError::UnrecognizedDescriptor {
                descriptor: serde_json::to_string(props)
                    .unwrap_or_else(|_| format!("{props:?}")),
            })
    }
}

impl TryFrom<BreakpointProps> for MediaQuery {
    type Error = BreakpointError;

    fn try_from(props: BreakpointProps) -> Result<Self> {
        MediaQuery::try_from(&props)
    }
}

impl From<MediaQuery> for BreakpointProps {
    fn from(query: MediaQuery) -> Self {
        let mut props = BreakpointProps::default();
        match query {
            MediaQuery::At(name) => props.at = Some(name),
            MediaQuery::LessThan(name) => props.less_than = Some(name),
            MediaQuery::GreaterThan(name) => props.greater_than = Some(name),
            MediaQuery::GreaterThanOrEqual(name) => props.greater_than_or_equal = Some(name),
            MediaQuery::Between(from, to) => props.between = Some((from, to)),
        }
        props
    }
}

fn max_width(width: u32) -> i64 {
    i64::from(width) - 1
}

/// Formats `query` as a CSS media condition, e.g. `(min-width:768px)`.
///
/// No `@media` prefix is added.
pub fn create_breakpoint_query(
    breakpoints: &BreakpointMap,
    sorted_breakpoints: &[String],
    query: &MediaQuery,
) -> Result<String> {
    let css = match query {
        MediaQuery::At(name) => {
            let range = MediaQuery::from(at_range(sorted_breakpoints, name)?);
            return create_breakpoint_query(breakpoints, sorted_breakpoints, &range);
        }
        MediaQuery::LessThan(name) => {
            let width = width_of(breakpoints, name)?;
            format!("(max-width:{}px)", max_width(width))
        }
        MediaQuery::GreaterThan(name) => {
            let next = next_breakpoint(sorted_breakpoints, name)?;
            let width = width_of(breakpoints, next)?;
            format!("(min-width:{width}px)")
        }
        MediaQuery::GreaterThanOrEqual(name) => {
            let width = width_of(breakpoints, name)?;
            format!("(min-width:{width}px)")
        }
        MediaQuery::Between(from, to) => {
            let from_width = width_of(breakpoints, from)?;
            let to_width = width_of(breakpoints, to)?;
            format!(
                "(min-width:{from_width}px) and (max-width:{}px)",
                max_width(to_width)
            )
        }
    };
    trace!(?query, %css, "created breakpoint query");
    Ok(css)
}

/// Formats the query for every range, keyed by the breakpoint owning it.
pub fn create_at_breakpoint_queries(
    breakpoints: &BreakpointMap,
    sorted_breakpoints: &[String],
    at_ranges: &AtRanges,
) -> Result<IndexMap<String, String>> {
    at_ranges
        .iter()
        .map(|(name, range)| {
            let css =
                create_breakpoint_query(breakpoints, sorted_breakpoints, &range.to_query())?;
            Ok((name.clone(), css))
        })
        .collect()
}
