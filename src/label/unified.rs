use std::hash::Hash;

use crate::align::{OpTag, SequenceMatcher};

const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file\n";

/// Renders hunks in unified format; empty when the sequences are equal.
pub fn unified_diff<T: AsRef<str> + Eq + Hash>(
    matcher: &SequenceMatcher<'_, T>,
    from_lines: &[T],
    to_lines: &[T],
    from_name: &str,
    to_name: &str,
    context: usize,
) -> String {
    let mut output = String::new();

    for group in matcher.grouped_opcodes(context) {
        if output.is_empty() {
            output.push_str(&format!("--- {from_name}\n+++ {to_name}\n"));
        }

        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        output.push_str(&format!(
            "@@ -{} +{} @@\n",
            format_range(first.a.start, last.a.end),
            format_range(first.b.start, last.b.end)
        ));

        for opcode in &group {
            if opcode.tag == OpTag::Equal {
                push_lines(&mut output, ' ', &from_lines[opcode.a.clone()]);
                continue;
            }
            if matches!(opcode.tag, OpTag::Replace | OpTag::Delete) {
                push_lines(&mut output, '-', &from_lines[opcode.a.clone()]);
            }
            if matches!(opcode.tag, OpTag::Replace | OpTag::Insert) {
                push_lines(&mut output, '+', &to_lines[opcode.b.clone()]);
            }
        }
    }

    output
}

fn format_range(start: usize, stop: usize) -> String {
    let length = stop - start;
    match length {
        0 => format!("{start},0"),
        1 => format!("{}", start + 1),
        _ => format!("{},{length}", start + 1),
    }
}

fn push_lines<T: AsRef<str>>(output: &mut String, marker: char, lines: &[T]) {
    for line in lines {
        let line = line.as_ref();
        output.push(marker);
        output.push_str(line);
        if !line.ends_with('\n') {
            output.push('\n');
            output.push_str(NO_NEWLINE_MARKER);
        }
    }
}
