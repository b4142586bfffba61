//! Render pruning for hosts that only ever render at known widths.
//!
//! A server rendering markup for a fixed set of device classes can skip any
//! content whose query can never match one of those widths. The test here is
//! conservative: content is kept whenever a match is *possible*.

use tracing::{debug, trace};

use crate::error::Result;
use crate::query::MediaQuery;
use crate::responsive::{BreakpointMap, at_range, next_breakpoint, width_of};

/// Decides whether content behind `query` could be visible when the host
/// only renders at the breakpoints in `only_render_at`.
///
/// A missing query always renders. An empty `only_render_at` renders
/// nothing.
pub fn should_render<S: AsRef<str>>(
    breakpoints: &BreakpointMap,
    sorted_breakpoints: &[String],
    query: Option<&MediaQuery>,
    only_render_at: &[S],
) -> Result<bool> {
    let Some(query) = query else {
        return Ok(true);
    };

    let allowed = only_render_at
        .iter()
        .map(|name| width_of(breakpoints, name.as_ref()))
        .collect::<Result<Vec<u32>>>()?;
    let lowest = allowed.iter().copied().min();
    let highest = allowed.iter().copied().max();

    let render = match query {
        MediaQuery::At(name) => {
            let range = at_range(sorted_breakpoints, name)?;
            return should_render(
                breakpoints,
                sorted_breakpoints,
                Some(&MediaQuery::from(range)),
                only_render_at,
            );
        }
        MediaQuery::LessThan(name) => {
            let width = width_of(breakpoints, name)?;
            lowest.is_some_and(|lowest| lowest < width)
        }
        MediaQuery::GreaterThan(name) => {
            let next = next_breakpoint(sorted_breakpoints, name)?;
            let width = width_of(breakpoints, next)?;
            highest.is_some_and(|highest| highest >= width)
        }
        MediaQuery::GreaterThanOrEqual(name) => {
            let width = width_of(breakpoints, name)?;
            highest.is_some_and(|highest| highest >= width)
        }
        MediaQuery::Between(from, to) => {
            let from_width = width_of(breakpoints, from)?;
            let to_width = width_of(breakpoints, to)?;
            match (lowest, highest) {
                (Some(lowest), Some(highest)) => highest >= from_width && lowest < to_width,
                _ => false,
            }
        }
    };

    if render {
        trace!(?query, ?allowed, "query may match");
    } else {
        debug!(?query, ?allowed, "query can never match, skipping render");
    }
    Ok(render)
}
