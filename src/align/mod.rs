//! Line-level alignment of two sequences.
//!
//! Matching blocks are found the classic way: take the longest matching block
//! in the current window, then recurse on the windows left and right of it.
//! Everything between two consecutive blocks becomes an insert, delete or
//! replace opcode.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

#[cfg(test)]
mod tests;

/// Sequences shorter than this never have popular elements purged.
const AUTOJUNK_MIN_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    Equal,
    Insert,
    Delete,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub tag: OpTag,
    pub a: Range<usize>,
    pub b: Range<usize>,
}

impl Opcode {
    fn new(tag: OpTag, i1: usize, i2: usize, j1: usize, j2: usize) -> Self {
        Self {
            tag,
            a: i1..i2,
            b: j1..j2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    b2j: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self::with_autojunk(a, b, true)
    }

    /// With `autojunk`, elements of a long `b` that occur in more than 1% of
    /// its positions cannot seed a match; they can still extend one.
    pub fn with_autojunk(a: &'a [T], b: &'a [T], autojunk: bool) -> Self {
        let mut b2j: HashMap<&'a T, Vec<usize>> = HashMap::new();
        for (j, element) in b.iter().enumerate() {
            b2j.entry(element).or_default().push(j);
        }

        if autojunk && b.len() >= AUTOJUNK_MIN_LEN {
            let popular_threshold = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= popular_threshold);
        }

        Self { a, b, b2j }
    }

    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0_usize);

        // j2len[j] = length of the match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let previous = if j == 0 {
                        0
                    } else {
                        j2len.get(&(j - 1)).copied().unwrap_or(0)
                    };
                    let length = previous + 1;
                    next_j2len.insert(j, length);
                    if length > best_size {
                        best_i = i + 1 - length;
                        best_j = j + 1 - length;
                        best_size = length;
                    }
                }
            }
            j2len = next_j2len;
        }

        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        MatchingBlock {
            a: best_i,
            b: best_j,
            size: best_size,
        }
    }

    /// Maximal matching blocks in increasing order, adjacent blocks merged,
    /// terminated by the sentinel `(len_a, len_b, 0)`.
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let (len_a, len_b) = (self.a.len(), self.b.len());
        let mut queue = vec![(0, len_a, 0, len_b)];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            blocks.push(block);
            if alo < block.a && blo < block.b {
                queue.push((alo, block.a, blo, block.b));
            }
            if block.a + block.size < ahi && block.b + block.size < bhi {
                queue.push((block.a + block.size, ahi, block.b + block.size, bhi));
            }
        }
        blocks.sort_by_key(|block| (block.a, block.b, block.size));

        let mut merged: Vec<MatchingBlock> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            match merged.last_mut() {
                Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }
        merged.push(MatchingBlock {
            a: len_a,
            b: len_b,
            size: 0,
        });
        merged
    }

    /// Opcodes covering both sequences contiguously, in index order.
    pub fn opcodes(&self) -> Vec<Opcode> {
        let (mut i, mut j) = (0, 0);
        let mut opcodes = Vec::new();

        for block in self.matching_blocks() {
            let tag = match (i < block.a, j < block.b) {
                (true, true) => Some(OpTag::Replace),
                (true, false) => Some(OpTag::Delete),
                (false, true) => Some(OpTag::Insert),
                (false, false) => None,
            };
            if let Some(tag) = tag {
                opcodes.push(Opcode::new(tag, i, block.a, j, block.b));
            }
            i = block.a + block.size;
            j = block.b + block.size;
            if block.size > 0 {
                opcodes.push(Opcode::new(OpTag::Equal, block.a, i, block.b, j));
            }
        }

        opcodes
    }

    /// Hunks of changes with up to `context` equal lines on either side.
    pub fn grouped_opcodes(&self, context: usize) -> Vec<Vec<Opcode>> {
        let mut codes = self.opcodes();
        if codes.is_empty() {
            codes.push(Opcode::new(OpTag::Equal, 0, 1, 0, 1));
        }

        if let Some(first) = codes.first_mut().filter(|code| code.tag == OpTag::Equal) {
            first.a.start = first.a.start.max(first.a.end.saturating_sub(context));
            first.b.start = first.b.start.max(first.b.end.saturating_sub(context));
        }
        if let Some(last) = codes.last_mut().filter(|code| code.tag == OpTag::Equal) {
            last.a.end = last.a.end.min(last.a.start + context);
            last.b.end = last.b.end.min(last.b.start + context);
        }

        let mut groups = Vec::new();
        let mut group: Vec<Opcode> = Vec::new();
        for mut code in codes {
            if code.tag == OpTag::Equal && code.a.len() > context * 2 {
                group.push(Opcode::new(
                    OpTag::Equal,
                    code.a.start,
                    code.a.end.min(code.a.start + context),
                    code.b.start,
                    code.b.end.min(code.b.start + context),
                ));
                groups.push(std::mem::take(&mut group));
                code.a.start = code.a.start.max(code.a.end.saturating_sub(context));
                code.b.start = code.b.start.max(code.b.end.saturating_sub(context));
            }
            group.push(code);
        }

        let only_equal = group.len() == 1 && group[0].tag == OpTag::Equal;
        if !group.is_empty() && !only_equal {
            groups.push(group);
        }

        groups
    }
}
