//! Repair of model-generated flowchart text.
//!
//! Generation models frequently try to recolor a grouped area by emitting
//! `class <subgraph-id> someStyle`, which Mermaid rejects: `class` statements
//! may only target nodes, never subgraph containers. The cleanup here drops
//! exactly those statements so one bad styling line does not take down an
//! otherwise valid diagram.

use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

fn subgraph_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^subgraph\s+([A-Za-z_][A-Za-z0-9_]*)").expect("valid regex"))
}

fn subgraph_label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^subgraph\s+"([^"]+)""#).expect("valid regex"))
}

fn class_targets_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^class\s+([^;:]+)").expect("valid regex"))
}

/// Collects every identifier that can denote a subgraph container, regardless
/// of where in the document it is declared.
///
/// Two declaration forms are recognized on a whitespace-trimmed line:
///
/// - `subgraph Ident` adds `Ident` verbatim;
/// - `subgraph "Some Label"` adds the label verbatim, plus a normalized
///   variant with spaces and `'` removed (Mermaid derives an implicit id from
///   the label, and that is the form class statements tend to reference).
pub fn collect_subgraph_ids<'a>(lines: impl IntoIterator<Item = &'a str>) -> FxHashSet<String> {
    let mut ids = FxHashSet::default();
    for line in lines {
        let trimmed = line.trim();
        if let Some(caps) = subgraph_id_regex().captures(trimmed) {
            ids.insert(caps[1].to_string());
        } else if let Some(caps) = subgraph_label_regex().captures(trimmed) {
            let label = &caps[1];
            ids.insert(label.to_string());
            let normalized: String = label.chars().filter(|&c| c != ' ' && c != '\'').collect();
            if !normalized.is_empty() {
                ids.insert(normalized);
            }
        }
    }
    ids
}

/// Splits the trailing style reference off a `class` targets clause.
///
/// `class A,B someStyle` carries the style name after the target list, so the
/// last whitespace-separated token is not a target. A clause ending in a quote
/// is all targets (`class "My Service"`): the whitespace belongs to a quoted
/// label, not a style reference.
fn class_target_list(clause: &str) -> &str {
    if clause.ends_with(['"', '\'']) {
        return clause;
    }
    match clause.rsplit_once(|c: char| c.is_whitespace()) {
        Some((targets, _style)) => targets,
        None => clause,
    }
}

/// Whether a line is a `class` statement that illegally targets a subgraph.
///
/// The decision is made on the trimmed line; callers keep or drop the
/// original line, preserving indentation. Targets that contain a space or a
/// `'` are treated as subgraph labels even when the declaration scan did not
/// register them (no bare node id looks like that).
fn targets_subgraph(line: &str, subgraph_ids: &FxHashSet<String>) -> bool {
    let trimmed = line.trim();
    if !trimmed.starts_with("class ") {
        return false;
    }
    let Some(caps) = class_targets_regex().captures(trimmed) else {
        return false;
    };
    let clause = caps.get(1).map(|m| m.as_str()).unwrap_or_default().trim();
    class_target_list(clause).split(',').any(|target| {
        let id = target.trim().trim_matches(|c| c == '"' || c == '\'');
        subgraph_ids.contains(id) || id.contains(' ') || id.contains('\'')
    })
}

/// Removes `class` statements that try to style subgraph containers.
///
/// Two passes over the text: first collect every subgraph identifier (so a
/// `class` statement ahead of its subgraph's declaration is still caught),
/// then filter lines against that fixed set. Everything that is not an
/// offending `class` statement passes through verbatim, in order. Total over
/// any input; `""` yields `""`.
pub fn clean_invalid_class_statements(diagram: &str) -> String {
    let lines: Vec<&str> = diagram.split('\n').collect();
    let subgraph_ids = collect_subgraph_ids(lines.iter().copied());

    let kept: Vec<&str> = lines
        .into_iter()
        .filter(|line| {
            let drop = targets_subgraph(line, &subgraph_ids);
            if drop {
                tracing::debug!(line, "dropping class statement that targets a subgraph");
            }
            !drop
        })
        .collect();

    kept.join("\n")
}
