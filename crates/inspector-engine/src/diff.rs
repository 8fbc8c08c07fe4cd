//! Line-level change summary between two model outputs

use inspector_core::Analysis;
use similar::{capture_diff_slices, Algorithm, DiffTag};

/// Count added, removed and modified lines going from `old` to `new`.
///
/// Each run of non-equal diff ops is one hunk. Within a hunk, lines that
/// pair up with a line on the other side count as modified; the surplus
/// counts as added or removed.
pub fn analyze(old: &str, new: &str) -> Analysis {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();
    let ops = capture_diff_slices(Algorithm::Myers, &old_lines, &new_lines);

    let mut counts = Counts::default();
    let mut hunk = (0usize, 0usize);

    for op in &ops {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        if tag == DiffTag::Equal {
            counts.close(&mut hunk);
            continue;
        }
        hunk.0 += old_range.len();
        hunk.1 += new_range.len();
    }
    counts.close(&mut hunk);

    Analysis::from_counts(
        to_u32(counts.added),
        to_u32(counts.removed),
        to_u32(counts.changed),
    )
}

#[derive(Default)]
struct Counts {
    added: usize,
    removed: usize,
    changed: usize,
}

impl Counts {
    fn close(&mut self, hunk: &mut (usize, usize)) {
        let (old_len, new_len) = *hunk;
        let paired = old_len.min(new_len);
        self.changed += paired;
        self.removed += old_len - paired;
        self.added += new_len - paired;
        *hunk = (0, 0);
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
