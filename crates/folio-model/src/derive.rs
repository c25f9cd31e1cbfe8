//! Computed-field derivations.
//!
//! Each derivation reads only the document it is applied to: its path and
//! its raw body. Nothing here looks at other documents.

use std::num::NonZeroU32;
use std::sync::LazyLock;

use folio_content::RawDocument;
use folio_core::util::paths::file_name;
use regex::Regex;

use crate::schema::{ContentKind, Derivation};
use crate::value::{FieldValue, ReadingTime};

/// Average reading speed used when none is configured.
pub const DEFAULT_WORDS_PER_MINUTE: NonZeroU32 = match NonZeroU32::new(200) {
    Some(wpm) => wpm,
    None => unreachable!(),
};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Slug of a document path: its final segment with the source suffix
/// removed.
///
/// Nothing else is normalised, so the slug round-trips to the file name.
///
/// ```
/// use folio_model::derive::slug;
/// use folio_model::ContentKind;
///
/// assert_eq!(slug("data/articles/my-post.mdx", ContentKind::Mdx), "my-post");
/// assert_eq!(slug("data/articles/My Post.mdx", ContentKind::Mdx), "My Post");
/// ```
pub fn slug(path: &str, kind: ContentKind) -> &str {
    let name = file_name(path);
    name.strip_suffix(kind.suffix()).unwrap_or(name)
}

/// Number of pieces the body splits into on runs of whitespace.
///
/// Leading or trailing whitespace yields an empty piece that is counted,
/// and an empty body counts as 1. Existing word counts depend on this.
pub fn word_count(body: &str) -> usize {
    WHITESPACE_RUN.split(body).count()
}

/// Reading time for `words` at `words_per_minute`.
///
/// Minutes are rounded up and never below 1.
pub fn reading_time(words: usize, words_per_minute: NonZeroU32) -> ReadingTime {
    let wpm = u64::from(words_per_minute.get());
    let minutes = (words as u64).div_ceil(wpm).max(1);
    let time = (words as f64 / wpm as f64 * 60_000.0).round() as u64;

    ReadingTime {
        text: format!("{minutes} min read"),
        minutes,
        time,
        words,
    }
}

impl Derivation {
    /// Compute this derivation for `doc`.
    pub fn derive(
        &self,
        doc: &RawDocument,
        kind: ContentKind,
        words_per_minute: NonZeroU32,
    ) -> FieldValue {
        match self {
            Self::Slug => FieldValue::String(slug(doc.path(), kind).to_string()),
            Self::WordCount => FieldValue::Count(word_count(doc.body())),
            Self::ReadingTime => {
                FieldValue::ReadingTime(reading_time(word_count(doc.body()), words_per_minute))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::Frontmatter;
    use proptest::prelude::*;

    // ------------------------------------------------------------------------
    // slug
    // ------------------------------------------------------------------------

    #[test]
    fn test_slug_strips_suffix() {
        assert_eq!(slug("data/articles/my-post.mdx", ContentKind::Mdx), "my-post");
        assert_eq!(slug("data/block-content/intro.mdx", ContentKind::Mdx), "intro");
    }

    #[test]
    fn test_slug_no_normalisation() {
        assert_eq!(slug("a/ Spaced Out .mdx", ContentKind::Mdx), " Spaced Out ");
        assert_eq!(slug("a/CamelCase.mdx", ContentKind::Mdx), "CamelCase");
    }

    #[test]
    fn test_slug_only_final_suffix() {
        assert_eq!(slug("a/post.mdx.mdx", ContentKind::Mdx), "post.mdx");
        assert_eq!(slug("a/post.mdx.bak", ContentKind::Mdx), "post.mdx.bak");
    }

    #[test]
    fn test_slug_content_kind() {
        assert_eq!(slug("notes/today.md", ContentKind::Markdown), "today");
        assert_eq!(slug("notes/today.md", ContentKind::Mdx), "today.md");
    }

    #[test]
    fn test_slug_ignores_directories() {
        assert_eq!(
            slug("other/place/my-post.mdx", ContentKind::Mdx),
            slug("data/articles/my-post.mdx", ContentKind::Mdx)
        );
    }

    // ------------------------------------------------------------------------
    // word_count
    // ------------------------------------------------------------------------

    #[test]
    fn test_word_count_basic() {
        assert_eq!(word_count("hello world  foo"), 3);
        assert_eq!(word_count("One two three four five"), 5);
    }

    #[test]
    fn test_word_count_mixed_whitespace() {
        assert_eq!(word_count("a\tb\n\nc\r\nd"), 4);
    }

    #[test]
    fn test_word_count_empty_is_one() {
        assert_eq!(word_count(""), 1);
    }

    #[test]
    fn test_word_count_whitespace_only() {
        assert_eq!(word_count("   "), 2);
        assert_eq!(word_count("\n"), 2);
    }

    #[test]
    fn test_word_count_counts_edge_whitespace() {
        assert_eq!(word_count("\nhello world\n"), 4);
        assert_eq!(word_count("hello "), 2);
    }

    // ------------------------------------------------------------------------
    // reading_time
    // ------------------------------------------------------------------------

    #[test]
    fn test_reading_time_five_words() {
        let rt = reading_time(5, DEFAULT_WORDS_PER_MINUTE);
        assert_eq!(rt.minutes, 1);
        assert_eq!(rt.text, "1 min read");
        assert_eq!(rt.words, 5);
        assert_eq!(rt.time, 1500);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        assert_eq!(reading_time(200, DEFAULT_WORDS_PER_MINUTE).minutes, 1);
        assert_eq!(reading_time(201, DEFAULT_WORDS_PER_MINUTE).minutes, 2);
        let rt = reading_time(600, DEFAULT_WORDS_PER_MINUTE);
        assert_eq!(rt.minutes, 3);
        assert_eq!(rt.text, "3 min read");
    }

    #[test]
    fn test_reading_time_zero_words() {
        assert_eq!(reading_time(0, DEFAULT_WORDS_PER_MINUTE).minutes, 1);
    }

    #[test]
    fn test_reading_time_milliseconds_rounded() {
        let wpm = NonZeroU32::new(180).unwrap();
        // 7 / 180 minutes is 2333.33 ms.
        assert_eq!(reading_time(7, wpm).time, 2333);
        // 11 / 180 minutes is 3666.67 ms.
        assert_eq!(reading_time(11, wpm).time, 3667);
    }

    #[test]
    fn test_reading_time_custom_speed() {
        let wpm = NonZeroU32::new(100).unwrap();
        assert_eq!(reading_time(250, wpm).minutes, 3);
    }

    proptest! {
        #[test]
        fn prop_reading_time_monotone(a in 0usize..1_000_000, b in 0usize..1_000_000, wpm in 1u32..2_000) {
            let wpm = NonZeroU32::new(wpm).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo_rt = reading_time(lo, wpm);
            let hi_rt = reading_time(hi, wpm);
            prop_assert!(lo_rt.minutes >= 1);
            prop_assert!(lo_rt.minutes <= hi_rt.minutes);
        }

        #[test]
        fn prop_word_count_matches_joined_words(words in proptest::collection::vec("[a-z]{1,8}", 1..50)) {
            let body = words.join("  \n");
            prop_assert_eq!(word_count(&body), words.len());
        }
    }

    // ------------------------------------------------------------------------
    // Derivation::derive
    // ------------------------------------------------------------------------

    #[test]
    fn test_derive_dispatch() {
        let doc = RawDocument::new(
            "data/articles/hello.mdx",
            "One two three four five",
            Frontmatter::new(),
        );
        let wpm = DEFAULT_WORDS_PER_MINUTE;

        assert_eq!(
            Derivation::Slug.derive(&doc, ContentKind::Mdx, wpm),
            FieldValue::String("hello".into())
        );
        assert_eq!(
            Derivation::WordCount.derive(&doc, ContentKind::Mdx, wpm),
            FieldValue::Count(5)
        );
        let rt = Derivation::ReadingTime.derive(&doc, ContentKind::Mdx, wpm);
        assert_eq!(rt.as_reading_time().unwrap().text, "1 min read");
    }
}
