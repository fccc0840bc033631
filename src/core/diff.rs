//! Unified diff between two secret versions.
//!
//! Lines keep their terminators, so a missing final newline is a change.
//! Matching follows a shortest edit script (Myers); hunks carry
//! [`DIFF_CONTEXT`](crate::core::constants::DIFF_CONTEXT) lines of context.

use std::fmt;
use std::ops::{Index, IndexMut, Range};
use tracing::debug;

use crate::core::constants::DIFF_CONTEXT;
use crate::core::domain::SecretRef;
use crate::core::store::{fetch_text, SecretStore};
use crate::error::Result;

/// Kind of a diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Context,
    Removed,
    Added,
}

/// One line of a hunk, terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub kind: LineKind,
    pub text: String,
}

/// A contiguous block of changes with surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    old_start: usize,
    old_len: usize,
    new_start: usize,
    new_len: usize,
    lines: Vec<DiffLine>,
}

impl Hunk {
    /// `@@ -l,s +l,s @@` header.
    pub fn header(&self) -> String {
        format!(
            "@@ -{} +{} @@",
            range(self.old_start, self.old_len),
            range(self.new_start, self.new_len)
        )
    }

    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }
}

/// Unified range: 1-based start, length omitted when 1, start backed up when empty.
fn range(start: usize, len: usize) -> String {
    match len {
        1 => format!("{}", start + 1),
        0 => format!("{},0", start),
        n => format!("{},{}", start + 1, n),
    }
}

/// The full delta between two texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedDiff {
    from: String,
    to: String,
    hunks: Vec<Hunk>,
}

impl UnifiedDiff {
    /// Compare `old` against `new`, labelling the sides `from` and `to`.
    pub fn compute(from: &str, old: &str, to: &str, new: &str) -> Self {
        let a = split_lines(old);
        let b = split_lines(new);
        let ops = opcodes(&a, &b);
        let hunks = group(&ops, DIFF_CONTEXT)
            .into_iter()
            .map(|group| build_hunk(&group, &a, &b))
            .collect();

        Self {
            from: from.to_string(),
            to: to.to_string(),
            hunks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    pub fn hunks(&self) -> &[Hunk] {
        &self.hunks
    }

    pub fn from_label(&self) -> &str {
        &self.from
    }

    pub fn to_label(&self) -> &str {
        &self.to
    }
}

impl fmt::Display for UnifiedDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        writeln!(f, "--- {}", self.from)?;
        writeln!(f, "+++ {}", self.to)?;
        for hunk in &self.hunks {
            writeln!(f, "{}", hunk.header())?;
            for line in &hunk.lines {
                let marker = match line.kind {
                    LineKind::Context => ' ',
                    LineKind::Removed => '-',
                    LineKind::Added => '+',
                };
                match line.text.strip_suffix('\n') {
                    Some(body) => {
                        let body = body.strip_suffix('\r').unwrap_or(body);
                        writeln!(f, "{}{}", marker, body)?;
                    }
                    None => {
                        writeln!(f, "{}{}", marker, line.text)?;
                        writeln!(f, "\\ No newline at end of file")?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Split after every `\n`, keeping terminators.
fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Equal,
    Replace,
    Delete,
    Insert,
}

/// `a[i1..i2]` relates to `b[j1..j2]` as `tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Opcode {
    tag: Tag,
    i1: usize,
    i2: usize,
    j1: usize,
    j2: usize,
}

/// Edit script as runs of equal and changed lines.
fn opcodes(a: &[&str], b: &[&str]) -> Vec<Opcode> {
    let mut ops = Vec::new();
    let (mut i, mut j) = (0, 0);

    for (bi, bj, len) in matching_blocks(a, b) {
        push_change(&mut ops, i, j, bi, bj);
        let extended = match ops.last_mut() {
            Some(last) if last.tag == Tag::Equal && last.i2 == bi && last.j2 == bj => {
                last.i2 += len;
                last.j2 += len;
                true
            }
            _ => false,
        };
        if !extended {
            ops.push(Opcode {
                tag: Tag::Equal,
                i1: bi,
                i2: bi + len,
                j1: bj,
                j2: bj + len,
            });
        }
        i = bi + len;
        j = bj + len;
    }
    push_change(&mut ops, i, j, a.len(), b.len());
    ops
}

/// Record the change between `(i, j)` and `(i2, j2)`, if any.
fn push_change(ops: &mut Vec<Opcode>, i: usize, j: usize, i2: usize, j2: usize) {
    let tag = match (i2 > i, j2 > j) {
        (true, true) => Tag::Replace,
        (true, false) => Tag::Delete,
        (false, true) => Tag::Insert,
        (false, false) => return,
    };
    ops.push(Opcode {
        tag,
        i1: i,
        i2,
        j1: j,
        j2,
    });
}

/// Furthest-reaching x per diagonal `k`, indexable by negative `k`.
struct Frontier {
    offset: isize,
    x: Vec<usize>,
}

impl Frontier {
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize,
            x: vec![0; 2 * max_d + 2],
        }
    }
}

impl Index<isize> for Frontier {
    type Output = usize;

    fn index(&self, k: isize) -> &usize {
        &self.x[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut usize {
        &mut self.x[(k + self.offset) as usize]
    }
}

/// Matching runs `(old index, new index, length)` along a shortest edit script.
///
/// Myers' divide and conquer over the middle snake: linear space, `O((n + m) d)` time.
fn matching_blocks(a: &[&str], b: &[&str]) -> Vec<(usize, usize, usize)> {
    let max_d = (a.len() + b.len() + 1) / 2 + 1;
    let mut forward = Frontier::new(max_d);
    let mut backward = Frontier::new(max_d);
    let mut blocks = Vec::new();
    conquer(
        a,
        0..a.len(),
        b,
        0..b.len(),
        &mut forward,
        &mut backward,
        &mut blocks,
    );
    blocks
}

fn conquer(
    a: &[&str],
    mut old: Range<usize>,
    b: &[&str],
    mut new: Range<usize>,
    forward: &mut Frontier,
    backward: &mut Frontier,
    blocks: &mut Vec<(usize, usize, usize)>,
) {
    let prefix = common_prefix(&a[old.clone()], &b[new.clone()]);
    if prefix > 0 {
        blocks.push((old.start, new.start, prefix));
    }
    old.start += prefix;
    new.start += prefix;

    let suffix = common_suffix(&a[old.clone()], &b[new.clone()]);
    old.end -= suffix;
    new.end -= suffix;

    if !old.is_empty() && !new.is_empty() {
        if let Some((x, y)) = middle_snake(a, old.clone(), b, new.clone(), forward, backward) {
            conquer(a, old.start..x, b, new.start..y, forward, backward, blocks);
            conquer(a, x..old.end, b, y..new.end, forward, backward, blocks);
        }
    }

    if suffix > 0 {
        blocks.push((old.end, new.end, suffix));
    }
}

/// A point on a shortest edit path strictly inside the box, found by running
/// the search from both corners until the frontiers overlap.
fn middle_snake(
    a: &[&str],
    old: Range<usize>,
    b: &[&str],
    new: Range<usize>,
    forward: &mut Frontier,
    backward: &mut Frontier,
) -> Option<(usize, usize)> {
    let (a, b) = (&a[old.clone()], &b[new.clone()]);
    let (n, m) = (a.len(), b.len());
    let delta = n as isize - m as isize;
    let odd = delta & 1 != 0;
    let max_d = ((n + m + 1) / 2 + 1) as isize;

    forward[1] = 0;
    backward[1] = 0;

    for d in 0..max_d {
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && forward[k - 1] < forward[k + 1]) {
                forward[k + 1]
            } else {
                forward[k - 1] + 1
            };
            // Off-grid diagonals wrap `y` past `m` and skip the snake.
            let y = (x as isize - k) as usize;
            let (x0, y0) = (x, y);
            if x < n && y < m {
                x += common_prefix(&a[x..], &b[y..]);
            }
            forward[k] = x;
            if odd && (k - delta).abs() < d && forward[k] + backward[delta - k] >= n {
                return Some((old.start + x0, new.start + y0));
            }
        }

        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && backward[k - 1] < backward[k + 1]) {
                backward[k + 1]
            } else {
                backward[k - 1] + 1
            };
            let mut y = (x as isize - k) as usize;
            if x < n && y < m {
                let run = common_suffix(&a[..n - x], &b[..m - y]);
                x += run;
                y += run;
            }
            backward[k] = x;
            if !odd && (k - delta).abs() <= d && backward[k] + forward[delta - k] >= n {
                return Some((old.start + n - x, new.start + m - y));
            }
        }
    }
    None
}

fn common_prefix(a: &[&str], b: &[&str]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn common_suffix(a: &[&str], b: &[&str]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Split opcodes into hunks with `context` lines around each change.
fn group(ops: &[Opcode], context: usize) -> Vec<Vec<Opcode>> {
    if ops.iter().all(|op| op.tag == Tag::Equal) {
        return Vec::new();
    }

    let mut codes = ops.to_vec();
    if let Some(first) = codes.first_mut() {
        if first.tag == Tag::Equal {
            first.i1 = first.i1.max(first.i2.saturating_sub(context));
            first.j1 = first.j1.max(first.j2.saturating_sub(context));
        }
    }
    if let Some(last) = codes.last_mut() {
        if last.tag == Tag::Equal {
            last.i2 = last.i2.min(last.i1 + context);
            last.j2 = last.j2.min(last.j1 + context);
        }
    }

    let mut groups = Vec::new();
    let mut current = Vec::new();
    for mut op in codes {
        if op.tag == Tag::Equal && op.i2 - op.i1 > 2 * context {
            current.push(Opcode {
                i2: op.i2.min(op.i1 + context),
                j2: op.j2.min(op.j1 + context),
                ..op
            });
            groups.push(std::mem::take(&mut current));
            op.i1 = op.i1.max(op.i2.saturating_sub(context));
            op.j1 = op.j1.max(op.j2.saturating_sub(context));
        }
        current.push(op);
    }
    if !(current.len() == 1 && current[0].tag == Tag::Equal) && !current.is_empty() {
        groups.push(current);
    }
    groups
}

fn build_hunk(group: &[Opcode], a: &[&str], b: &[&str]) -> Hunk {
    let first = group[0];
    let last = group[group.len() - 1];
    let mut lines = Vec::new();
    let line = |kind, text: &str| DiffLine {
        kind,
        text: text.to_string(),
    };

    for op in group {
        match op.tag {
            Tag::Equal => {
                lines.extend(a[op.i1..op.i2].iter().map(|t| line(LineKind::Context, *t)));
            }
            Tag::Delete | Tag::Replace | Tag::Insert => {
                lines.extend(a[op.i1..op.i2].iter().map(|t| line(LineKind::Removed, *t)));
                lines.extend(b[op.j1..op.j2].iter().map(|t| line(LineKind::Added, *t)));
            }
        }
    }

    Hunk {
        old_start: first.i1,
        old_len: last.i2 - first.i1,
        new_start: first.j1,
        new_len: last.j2 - first.j1,
        lines,
    }
}

/// Fetch two versions of the same secret and diff them.
///
/// # Errors
///
/// Either side missing aborts with `StoreError::NotFound` for that side.
pub fn diff_versions(
    store: &dyn SecretStore,
    secret: &SecretRef,
    version_a: &str,
    version_b: &str,
) -> Result<UnifiedDiff> {
    let side_a = secret.with_version(version_a);
    let side_b = secret.with_version(version_b);

    let text_a = fetch_text(store, &side_a)?;
    let text_b = fetch_text(store, &side_b)?;

    let diff = UnifiedDiff::compute(&side_a.locator(), &text_a, &side_b.locator(), &text_b);
    debug!(
        from = %side_a,
        to = %side_b,
        hunks = diff.hunks().len(),
        "computed diff"
    );
    Ok(diff)
}
