use super::path::{HamiltonPath, OverlapEdge};

/// Concatenates the fragments of `path` into a superstring of every key in the reduced graph.
///
/// Each fragment is written as its head key followed by the non-overlapping suffix of every following key.
/// Fragments are emitted in the order of their head keys.
pub(crate) fn assemble(keys: &[String], path: &HamiltonPath) -> String {
    let mut next: Vec<Option<OverlapEdge>> = vec![None; keys.len()];
    for edge in path.edges() {
        next[edge.source] = Some(*edge);
    }

    let mut superstring = String::new();
    for head in path.heads() {
        superstring.push_str(&keys[head]);

        let mut current = head;
        while let Some(edge) = next[current].take() {
            superstring.push_str(skip_symbols(&keys[edge.dest], edge.overlap));
            current = edge.dest;
        }
    }

    superstring
}

/// Returns `s` without its first `n` symbols.
fn skip_symbols(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or("", |(offset, _)| &s[offset..])
}
