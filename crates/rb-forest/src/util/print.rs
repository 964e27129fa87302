use crate::types::{Links, NIL};

/// Draws the tree shape, one node per line.
///
/// ```text
/// └─ 10
///   ← 5
///   → 20
/// ```
///
/// `label` renders a single node; an empty tree renders as `∅`.
pub fn render<T, F>(t: &T, label: F) -> String
where
    T: Links + ?Sized,
    F: Fn(u32) -> String,
{
    if t.root() == NIL {
        return "∅".to_string();
    }

    let mut out = String::new();
    let mut stack = vec![(t.root(), 0usize, "└─")];
    while let Some((i, depth, side)) = stack.pop() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&"  ".repeat(depth));
        out.push_str(side);
        out.push(' ');
        out.push_str(&label(i));

        let (l, r) = (t.l(i), t.r(i));
        if r != NIL {
            stack.push((r, depth + 1, "→"));
        }
        if l != NIL {
            stack.push((l, depth + 1, "←"));
        }
    }
    out
}
