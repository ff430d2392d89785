// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide data model.
//!
//! [`SlideSet`] is an ordered sequence of [`SlideRecord`]s with indices
//! `0..len()`. Hosts materialize a set into markup, bind a carousel to the
//! resulting element counts, and replace the set wholesale when fresh data
//! arrives; the carousel itself never inspects records, only counts.
//!
//! With the `serde` feature, [`SlideSet`] deserializes from any of the feed
//! shapes observed in deployed hosts: a bare array, or an object keyed
//! `"slides"` or `"events"`. Unknown record fields are ignored and the legacy
//! `"url"` key is accepted for [`link`](SlideRecord::link).

use alloc::string::String;
use alloc::vec::Vec;

/// One unit of rotating content.
///
/// `id`, `title`, and `link` are required. The remaining fields are rendering
/// concerns, carried opaquely for whatever materializes the markup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideRecord {
    /// Stable identifier, unique within a feed.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Navigation target for the slide's call to action.
    #[cfg_attr(feature = "serde", serde(alias = "url"))]
    pub link: String,
    /// Short badge text (e.g. "New").
    pub badge: Option<String>,
    /// Human-readable date line.
    pub date: Option<String>,
    /// Longer body copy.
    pub description: Option<String>,
    /// Tag classification, driving per-tag treatment in renderers.
    pub tag: Option<String>,
}

/// An ordered sequence of slide records.
///
/// Indices run `0..len()`. A set is immutable once handed to a host: new data
/// arrives as a whole new set (reload), never as in-place edits while a
/// carousel is bound to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "FeedShape"))]
pub struct SlideSet {
    records: Vec<SlideRecord>,
}

impl SlideSet {
    /// An empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Wraps an ordered sequence of records.
    #[must_use]
    pub fn from_records(records: Vec<SlideRecord>) -> Self {
        Self { records }
    }

    /// Number of slides.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no slides.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `index`, if in range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SlideRecord> {
        self.records.get(index)
    }

    /// Iterates the records in order.
    pub fn iter(&self) -> core::slice::Iter<'_, SlideRecord> {
        self.records.iter()
    }

    /// The records as a slice.
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[SlideRecord] {
        &self.records
    }
}

impl From<Vec<SlideRecord>> for SlideSet {
    fn from(records: Vec<SlideRecord>) -> Self {
        Self::from_records(records)
    }
}

impl<'a> IntoIterator for &'a SlideSet {
    type Item = &'a SlideRecord;
    type IntoIter = core::slice::Iter<'a, SlideRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The feed shapes deployed hosts actually serve.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum FeedShape {
    Bare(Vec<SlideRecord>),
    Slides { slides: Vec<SlideRecord> },
    Events { events: Vec<SlideRecord> },
}

#[cfg(feature = "serde")]
impl From<FeedShape> for SlideSet {
    fn from(shape: FeedShape) -> Self {
        let records = match shape {
            FeedShape::Bare(records)
            | FeedShape::Slides { slides: records }
            | FeedShape::Events { events: records } => records,
        };
        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    fn sample(id: &str) -> SlideRecord {
        SlideRecord {
            id: id.to_string(),
            title: "Title".to_string(),
            link: "https://example.com".to_string(),
            ..SlideRecord::default()
        }
    }

    #[test]
    fn indices_are_ordered_and_bounded() {
        let set = SlideSet::from_records(vec![sample("a"), sample("b"), sample("c")]);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        assert_eq!(set.get(0).map(|r| r.id.as_str()), Some("a"));
        assert_eq!(set.get(2).map(|r| r.id.as_str()), Some("c"));
        assert!(set.get(3).is_none());
    }

    #[test]
    fn empty_set_reports_no_slides() {
        let set = SlideSet::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert!(set.get(0).is_none());
    }

    #[test]
    fn iteration_preserves_feed_order() {
        let set = SlideSet::from_records(vec![sample("first"), sample("second")]);
        let ids: Vec<&str> = set.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[cfg(feature = "serde")]
    mod feed_shapes {
        use super::*;

        #[test]
        fn bare_array_parses() {
            let set: SlideSet = serde_json::from_str(
                r#"[{"id": "a", "title": "A", "link": "https://example.com/a"}]"#,
            )
            .unwrap();
            assert_eq!(set.len(), 1);
            assert_eq!(set.get(0).unwrap().id, "a");
        }

        #[test]
        fn slides_wrapper_parses() {
            let set: SlideSet = serde_json::from_str(
                r#"{"slides": [{"id": "a", "title": "A", "link": "https://example.com/a"},
                               {"id": "b", "title": "B", "link": "https://example.com/b"}]}"#,
            )
            .unwrap();
            assert_eq!(set.len(), 2);
        }

        #[test]
        fn events_wrapper_parses() {
            let set: SlideSet = serde_json::from_str(
                r#"{"events": [{"id": "a", "title": "A", "link": "https://example.com/a"}]}"#,
            )
            .unwrap();
            assert_eq!(set.len(), 1);
        }

        #[test]
        fn legacy_url_key_fills_link() {
            let set: SlideSet = serde_json::from_str(
                r#"[{"id": "a", "title": "A", "url": "https://example.com/legacy"}]"#,
            )
            .unwrap();
            assert_eq!(set.get(0).unwrap().link, "https://example.com/legacy");
        }

        #[test]
        fn unknown_record_fields_are_ignored() {
            let set: SlideSet = serde_json::from_str(
                r#"[{"id": "a", "title": "A", "link": "https://example.com/a",
                     "image": "hero.png", "buttonText": "Go", "timing": 12}]"#,
            )
            .unwrap();
            assert_eq!(set.len(), 1);
            assert!(set.get(0).unwrap().badge.is_none());
        }

        #[test]
        fn optional_fields_round_through() {
            let set: SlideSet = serde_json::from_str(
                r#"[{"id": "a", "title": "A", "link": "https://example.com/a",
                     "badge": "New", "date": "March 4", "tag": "webinar"}]"#,
            )
            .unwrap();
            let record = set.get(0).unwrap();
            assert_eq!(record.badge.as_deref(), Some("New"));
            assert_eq!(record.date.as_deref(), Some("March 4"));
            assert_eq!(record.tag.as_deref(), Some("webinar"));
            assert!(record.description.is_none());
        }

        #[test]
        fn missing_required_field_is_an_error() {
            let result: Result<SlideSet, _> =
                serde_json::from_str(r#"[{"id": "a", "title": "A"}]"#);
            assert!(result.is_err(), "a record without a link must not parse");
        }
    }
}
