use proptest::prelude::*;
use splice_blocks::{AnchorRule, CommentStyle, add_or_update, has_block, remove};

/// Host text made of lowercase lines with `anchors` spliced in at the given
/// positions. Lowercase filler can never match an uppercase anchor or a marker.
fn host_text(filler: Vec<String>, anchors: &[(&str, usize)]) -> String {
    let mut lines = filler;
    for (anchor, position) in anchors {
        let at = (*position).min(lines.len());
        lines.insert(at, (*anchor).to_string());
    }
    lines.join("\n")
}

/// Host line index a block anchored on `anchor` is inserted in front of.
fn insertion_gap(text: &str, anchor: &str, offset: usize) -> usize {
    let lines: Vec<&str> = text.split('\n').collect();
    let line = lines.iter().position(|line| *line == anchor).unwrap_or(lines.len());
    (line + offset).min(lines.len())
}

fn style() -> impl Strategy<Value = CommentStyle> {
    prop_oneof![
        Just(CommentStyle::Hash),
        Just(CommentStyle::DoubleSlash),
        Just(CommentStyle::Xml),
    ]
}

proptest! {
    #[test]
    fn rerun_is_byte_identical(
        filler in prop::collection::vec("[a-z ]{0,12}", 0..12),
        position in 0usize..12,
        offset in 0usize..3,
        payload in "[a-z =\n]{0,40}",
        style in style(),
    ) {
        let text = host_text(filler, &[("ANCHOR", position)]);
        let rule = AnchorRule::literal("ANCHOR").with_offset(offset);

        let first = add_or_update(&text, "frag", &rule, style, &payload).unwrap();
        prop_assert!(first.did_merge);
        prop_assert!(!first.did_clear);

        let second = add_or_update(&first.contents, "frag", &rule, style, &payload).unwrap();
        prop_assert!(!second.did_merge);
        prop_assert!(!second.did_clear);
        prop_assert_eq!(second.contents, first.contents);
    }

    #[test]
    fn remove_restores_original(
        filler in prop::collection::vec("[a-z ]{0,12}", 0..12),
        position in 0usize..12,
        offset in 0usize..3,
        payload in "[a-z =\n]{0,40}",
        style in style(),
    ) {
        let text = host_text(filler, &[("ANCHOR", position)]);
        let rule = AnchorRule::literal("ANCHOR").with_offset(offset);

        let merged = add_or_update(&text, "frag", &rule, style, &payload).unwrap();
        let removed = remove(&merged.contents, "frag");
        prop_assert!(removed.did_clear);
        prop_assert!(!removed.did_merge);
        prop_assert_eq!(removed.contents, text);
    }

    #[test]
    fn update_then_remove_restores_original(
        filler in prop::collection::vec("[a-z ]{0,12}", 0..12),
        position in 0usize..12,
        old in "[a-z]{1,10}",
        new in "[a-z]{1,10}",
    ) {
        prop_assume!(old != new);
        let text = host_text(filler, &[("ANCHOR", position)]);
        let rule = AnchorRule::literal("ANCHOR");

        let first = add_or_update(&text, "frag", &rule, CommentStyle::Hash, &old).unwrap();
        let second = add_or_update(&first.contents, "frag", &rule, CommentStyle::Hash, &new).unwrap();
        prop_assert!(second.did_merge);
        prop_assert!(second.did_clear);
        prop_assert_eq!(remove(&second.contents, "frag").contents, text);
    }

    #[test]
    fn distinct_anchors_commute(
        filler in prop::collection::vec("[a-z ]{0,12}", 0..12),
        first_position in 0usize..12,
        second_position in 0usize..12,
        first_offset in 0usize..4,
        second_offset in 0usize..4,
    ) {
        let text = host_text(filler, &[("ALPHA", first_position), ("OMEGA", second_position)]);
        // Two blocks aimed at the same gap have no defined order.
        prop_assume!(
            insertion_gap(&text, "ALPHA", first_offset) != insertion_gap(&text, "OMEGA", second_offset)
        );
        let alpha = AnchorRule::literal("ALPHA").with_offset(first_offset);
        let omega = AnchorRule::literal("OMEGA").with_offset(second_offset);

        let a = add_or_update(&text, "a", &alpha, CommentStyle::Hash, "alpha payload").unwrap();
        let ab = add_or_update(&a.contents, "b", &omega, CommentStyle::Hash, "omega payload").unwrap();

        let b = add_or_update(&text, "b", &omega, CommentStyle::Hash, "omega payload").unwrap();
        let ba = add_or_update(&b.contents, "a", &alpha, CommentStyle::Hash, "alpha payload").unwrap();

        prop_assert_eq!(&ab.contents, &ba.contents);

        // Each block survives the other's removal intact.
        let without_b = remove(&ab.contents, "b");
        prop_assert!(has_block(&without_b.contents, "a"));
        prop_assert_eq!(&without_b.contents, &a.contents);
        let without_a = remove(&ab.contents, "a");
        prop_assert!(has_block(&without_a.contents, "b"));
        prop_assert_eq!(&without_a.contents, &b.contents);
    }

    #[test]
    fn text_without_anchor_is_rejected_verbatim(
        filler in prop::collection::vec("[a-z ]{0,12}", 0..12),
    ) {
        let text = filler.join("\n");
        let rule = AnchorRule::literal("ANCHOR");
        let err = add_or_update(&text, "frag", &rule, CommentStyle::Hash, "x").unwrap_err();
        prop_assert!(err.is_anchor_error());
        prop_assert!(err.to_string().contains(&text));
    }
}
