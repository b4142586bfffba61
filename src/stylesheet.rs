//! Stylesheet that hides responsive content outside its breakpoint range.
//!
//! Markup rendered ahead of time for several breakpoints carries one class
//! per query (see [`class_name`]). Shipping this stylesheet with it lets the
//! browser hide whichever copies don't apply to the current viewport.

use crate::error::Result;
use crate::query::{MediaQuery, create_breakpoint_query};
use crate::responsive::BreakpointMap;

pub const DEFAULT_CLASS_PREFIX: &str = "floem";

/// The class marking content rendered for `query`,
/// e.g. `floem-greaterThanOrEqual-md` or `floem-between-sm-lg`.
pub fn class_name(prefix: &str, query: &MediaQuery) -> String {
    let names = match query {
        MediaQuery::At(name)
        | MediaQuery::LessThan(name)
        | MediaQuery::GreaterThan(name)
        | MediaQuery::GreaterThanOrEqual(name) => name.clone(),
        MediaQuery::Between(from, to) => format!("{from}-{to}"),
    };
    format!("{prefix}-{}-{names}", query.kind())
}

/// Every query a stylesheet needs a rule for.
fn media_queries(sorted_breakpoints: &[String]) -> Vec<MediaQuery> {
    let mut queries = Vec::new();
    let last = sorted_breakpoints.len().saturating_sub(1);

    queries.extend(sorted_breakpoints.iter().cloned().map(MediaQuery::At));
    queries.extend(
        sorted_breakpoints
            .iter()
            .skip(1)
            .cloned()
            .map(MediaQuery::LessThan),
    );
    queries.extend(
        sorted_breakpoints
            .iter()
            .take(last)
            .cloned()
            .map(MediaQuery::GreaterThan),
    );
    queries.extend(
        sorted_breakpoints
            .iter()
            .cloned()
            .map(MediaQuery::GreaterThanOrEqual),
    );
    for (i, from) in sorted_breakpoints.iter().enumerate() {
        for to in &sorted_breakpoints[i + 1..] {
            queries.push(MediaQuery::Between(from.clone(), to.clone()));
        }
    }
    queries
}

/// Builds the stylesheet, one rule per line.
pub fn create_media_style(
    breakpoints: &BreakpointMap,
    sorted_breakpoints: &[String],
    class_prefix: &str,
) -> Result<String> {
    let mut rules = vec![format!(".{class_prefix}-container{{margin:0;padding:0;}}")];
    for query in media_queries(sorted_breakpoints) {
        let css = create_breakpoint_query(breakpoints, sorted_breakpoints, &query)?;
        rules.push(format!(
            "@media not all and {css}{{.{}{{display:none!important;}}}}",
            class_name(class_prefix, &query)
        ));
    }
    Ok(rules.join("\n"))
}
