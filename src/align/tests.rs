use super::*;

fn lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

fn assert_contiguous(opcodes: &[Opcode], len_a: usize, len_b: usize) {
    let (mut next_a, mut next_b) = (0, 0);
    for opcode in opcodes {
        assert_eq!(opcode.a.start, next_a, "gap or overlap on a side: {opcodes:?}");
        assert_eq!(opcode.b.start, next_b, "gap or overlap on b side: {opcodes:?}");
        next_a = opcode.a.end;
        next_b = opcode.b.end;
    }
    assert_eq!(next_a, len_a);
    assert_eq!(next_b, len_b);
}

#[test]
fn identical_sequences_produce_single_equal_opcode() {
    let a = lines("int a;\nint b;\nreturn 0;\n");
    let matcher = SequenceMatcher::new(&a, &a);
    let opcodes = matcher.opcodes();
    assert_eq!(opcodes, vec![Opcode::new(OpTag::Equal, 0, 3, 0, 3)]);
    assert!(matcher.grouped_opcodes(3).is_empty());
}

#[test]
fn opcodes_classify_replace_insert_and_delete() {
    let a = vec!["a", "b", "x", "c", "d", "e"];
    let b = vec!["a", "b", "y", "c", "new", "d"];
    let opcodes = SequenceMatcher::new(&a, &b).opcodes();

    assert_eq!(
        opcodes,
        vec![
            Opcode::new(OpTag::Equal, 0, 2, 0, 2),
            Opcode::new(OpTag::Replace, 2, 3, 2, 3),
            Opcode::new(OpTag::Equal, 3, 4, 3, 4),
            Opcode::new(OpTag::Insert, 4, 4, 4, 5),
            Opcode::new(OpTag::Equal, 4, 5, 5, 6),
            Opcode::new(OpTag::Delete, 5, 6, 6, 6),
        ]
    );
}

#[test]
fn empty_sides_are_pure_insert_or_delete() {
    let empty: Vec<&str> = Vec::new();
    let b = vec!["x", "y"];

    let inserted = SequenceMatcher::new(&empty, &b).opcodes();
    assert_eq!(inserted, vec![Opcode::new(OpTag::Insert, 0, 0, 0, 2)]);

    let deleted = SequenceMatcher::new(&b, &empty).opcodes();
    assert_eq!(deleted, vec![Opcode::new(OpTag::Delete, 0, 2, 0, 0)]);

    assert!(SequenceMatcher::new(&empty, &empty).opcodes().is_empty());
}

#[test]
fn whitespace_only_change_is_a_mismatch() {
    let a = lines("if (x)\n  y = 1;\n");
    let b = lines("if (x)\n    y = 1;\n");
    let opcodes = SequenceMatcher::new(&a, &b).opcodes();
    assert_eq!(opcodes[1], Opcode::new(OpTag::Replace, 1, 2, 1, 2));
}

#[test]
fn opcodes_cover_both_sequences_without_gaps() {
    let cases: Vec<(Vec<&str>, Vec<&str>)> = vec![
        (vec!["a", "b", "c"], vec!["c", "b", "a"]),
        (vec!["x", "x", "x", "y"], vec!["y", "x", "x"]),
        (vec!["1", "2", "3", "4", "5"], vec!["0", "2", "4", "6"]),
        (vec![], vec!["a"]),
        (vec!["q", "r"], vec![]),
        (vec!["a", "b", "a", "b", "a"], vec!["b", "a", "b"]),
    ];

    for (a, b) in cases {
        let opcodes = SequenceMatcher::new(&a, &b).opcodes();
        assert_contiguous(&opcodes, a.len(), b.len());
    }
}

#[test]
fn matching_blocks_end_with_sentinel_and_merge_adjacent_runs() {
    let a = vec!["a", "b", "c", "d"];
    let b = vec!["a", "b", "c", "d"];
    let blocks = SequenceMatcher::new(&a, &b).matching_blocks();
    assert_eq!(
        blocks,
        vec![
            MatchingBlock { a: 0, b: 0, size: 4 },
            MatchingBlock { a: 4, b: 4, size: 0 },
        ]
    );
}

#[test]
fn alignment_is_deterministic() {
    let a: Vec<String> = (0..50).map(|index| format!("line {}\n", index % 7)).collect();
    let b: Vec<String> = (0..60).map(|index| format!("line {}\n", index % 5)).collect();

    let first = SequenceMatcher::new(&a, &b).opcodes();
    let second = SequenceMatcher::new(&a, &b).opcodes();
    assert_eq!(first, second);
    assert_contiguous(&first, a.len(), b.len());
}

#[test]
fn popular_lines_do_not_seed_matches_in_long_inputs() {
    let mut b = vec!["unique\n".to_string()];
    b.extend(std::iter::repeat_n("}\n".to_string(), 250));
    let a = vec!["}\n".to_string()];

    let with_autojunk = SequenceMatcher::new(&a, &b).opcodes();
    assert!(with_autojunk.iter().all(|opcode| opcode.tag != OpTag::Equal));
    assert_contiguous(&with_autojunk, a.len(), b.len());

    let without_autojunk = SequenceMatcher::with_autojunk(&a, &b, false).opcodes();
    assert!(without_autojunk.iter().any(|opcode| opcode.tag == OpTag::Equal));
    assert_contiguous(&without_autojunk, a.len(), b.len());
}

#[test]
fn grouped_opcodes_trim_context_and_split_distant_changes() {
    let a: Vec<String> = (0..20).map(|index| format!("{index}\n")).collect();
    let mut b = a.clone();
    b[2] = "two\n".to_string();
    b[17] = "seventeen\n".to_string();

    let groups = SequenceMatcher::new(&a, &b).grouped_opcodes(3);
    assert_eq!(groups.len(), 2);

    let first = &groups[0];
    assert_eq!(first.first().map(|code| code.a.clone()), Some(0..2));
    assert_eq!(first.last().map(|code| code.a.clone()), Some(3..6));

    let second = &groups[1];
    assert_eq!(second.first().map(|code| code.a.clone()), Some(14..17));
    assert_eq!(second.last().map(|code| code.a.clone()), Some(18..20));
}
