//! The fragment capability set
//!
//! A [`Fragment`] is everything the merger needs to know about one kind of
//! generated content: its identifier, where it goes, how markers are
//! commented, and the payload. Adapters implement the trait; the functions in
//! this module run the shared lifecycle for any of them.

use crate::anchor::AnchorRule;
use crate::error::Result;
use crate::marker::CommentStyle;
use crate::merge::{self, BlockStatus, MergeResult};

/// One independently managed unit of generated content.
pub trait Fragment {
    /// Logical identifier embedded in the block markers.
    fn id(&self) -> &str;

    /// Where a fresh block is inserted.
    fn anchor(&self) -> &AnchorRule;

    /// Comment syntax of the host file.
    fn comment(&self) -> CommentStyle;

    /// The generated content, computed from the fragment's parameters.
    fn payload(&self) -> String;
}

impl<F: Fragment + ?Sized> Fragment for Box<F> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn anchor(&self) -> &AnchorRule {
        (**self).anchor()
    }

    fn comment(&self) -> CommentStyle {
        (**self).comment()
    }

    fn payload(&self) -> String {
        (**self).payload()
    }
}

/// Insert or refresh `fragment` in `text`.
pub fn apply_fragment<F: Fragment + ?Sized>(text: &str, fragment: &F) -> Result<MergeResult> {
    merge::add_or_update(
        text,
        fragment.id(),
        fragment.anchor(),
        fragment.comment(),
        &fragment.payload(),
    )
}

/// Remove the block `fragment` generated, if any.
pub fn remove_fragment<F: Fragment + ?Sized>(text: &str, fragment: &F) -> MergeResult {
    merge::remove(text, fragment.id())
}

/// Classify `text` against what `fragment` would generate.
pub fn fragment_status<F: Fragment + ?Sized>(text: &str, fragment: &F) -> BlockStatus {
    merge::status(text, fragment.id(), &fragment.payload())
}

/// Apply several fragments to the same text, in order.
///
/// Stops at the first error, in which case no text is returned.
pub fn apply_all<'a, I, F>(text: &str, fragments: I) -> Result<MergeResult>
where
    I: IntoIterator<Item = &'a F>,
    F: Fragment + ?Sized + 'a,
{
    let mut result = MergeResult {
        contents: text.to_string(),
        did_merge: false,
        did_clear: false,
    };
    for fragment in fragments {
        let next = apply_fragment(&result.contents, fragment)?;
        result = result.then(next);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        id: &'static str,
        anchor: AnchorRule,
        value: String,
    }

    impl Fragment for Line {
        fn id(&self) -> &str {
            self.id
        }

        fn anchor(&self) -> &AnchorRule {
            &self.anchor
        }

        fn comment(&self) -> CommentStyle {
            CommentStyle::DoubleSlash
        }

        fn payload(&self) -> String {
            format!("value = {}", self.value)
        }
    }

    fn line(id: &'static str, anchor: &str, value: &str) -> Line {
        Line {
            id,
            anchor: AnchorRule::literal(anchor),
            value: value.to_string(),
        }
    }

    #[test]
    fn fragment_lifecycle() {
        let source = "top\nMARK\nbottom";
        let fragment = line("value", "MARK", "1");

        assert_eq!(fragment_status(source, &fragment), BlockStatus::Missing);
        let applied = apply_fragment(source, &fragment).unwrap();
        assert!(applied.contents.contains("// @generated begin value - splice"));
        assert_eq!(fragment_status(&applied.contents, &fragment), BlockStatus::Current);

        let removed = remove_fragment(&applied.contents, &fragment);
        assert_eq!(removed.contents, source);
        assert!(removed.did_clear);
    }

    #[test]
    fn apply_all_accumulates_flags() {
        let source = "A\nB";
        let fragments: Vec<Box<dyn Fragment>> = vec![
            Box::new(line("one", "A", "1")),
            Box::new(line("two", "B", "2")),
        ];
        let result = apply_all(source, &fragments).unwrap();
        assert!(result.did_merge);
        assert!(!result.did_clear);
        assert!(result.contents.contains("value = 1"));
        assert!(result.contents.contains("value = 2"));

        let again = apply_all(&result.contents, &fragments).unwrap();
        assert!(!again.changed());
    }

    #[test]
    fn apply_all_stops_at_first_error() {
        let fragments = vec![line("one", "A", "1"), line("two", "missing", "2")];
        assert!(apply_all("A", &fragments).is_err());
    }
}
