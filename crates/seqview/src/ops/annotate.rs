//! Color-range annotation of residue sequences.
//!
//! A [`RangeSet`] holds user-defined [`ColorRange`]s sorted by start index. The same sorted
//! list drives both outputs: colored HTML for the sequence display, and
//! [`StyleDirective`]s for the 3D viewer.
//!
//! Ranges are inclusive and 0-based. HTML generation walks the sorted ranges with a cursor
//! and clamps every slice to the sequence, so overlapping or inverted ranges never panic.
//! They produce the slicing artifacts documented on [`RangeSet::to_html`] instead.
//! Callers that want to reject such input opt in with [`RangeSet::strict`].

use crate::ops::error::Error;
use crate::ops::sequence::Sequence;
use crate::render::{Representation, ResidueSpan, StyleDirective};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write;
use std::str::FromStr;

/// Highlight palette shared by the sequence display and the 3D viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Violet,
    Pink,
    Orange,
    Cyan,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Violet,
        Color::Pink,
        Color::Orange,
        Color::Cyan,
    ];

    /// CSS color keyword, also accepted by the viewer.
    pub fn css_name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Violet => "violet",
            Color::Pink => "pink",
            Color::Orange => "orange",
            Color::Cyan => "cyan",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|color| color.css_name() == lower)
            .ok_or_else(|| Error::UnknownColor {
                name: s.trim().to_string(),
                expected: Self::ALL.map(|color| color.css_name()).join(", "),
            })
    }
}

/// Inclusive 0-based residue interval painted in one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorRange {
    pub start: usize,
    pub end: usize,
    pub color: Color,
}

impl ColorRange {
    pub fn new(start: usize, end: usize, color: Color) -> Self {
        Self { start, end, color }
    }

    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Both endpoints must index into a sequence of length `len`.
    fn check_bounds(&self, len: usize) -> Result<(), Error> {
        if self.start >= len || self.end >= len {
            return Err(Error::RangeIndex {
                start: self.start,
                end: self.end,
                len,
            });
        }
        Ok(())
    }
}

impl fmt::Display for ColorRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.end, self.color)
    }
}

/// Parses the `START:END:COLOR` form used on the command line.
impl FromStr for ColorRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(3, ':');
        let (Some(start), Some(end), Some(color)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::invalid_range(s, "expected START:END:COLOR"));
        };

        let start = start
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::invalid_range(s, "start is not a non-negative integer"))?;
        let end = end
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::invalid_range(s, "end is not a non-negative integer"))?;
        let color = color.parse::<Color>()?;

        Ok(Self::new(start, end, color))
    }
}

/// Color ranges sorted by start index.
///
/// Sorting is stable, so ranges sharing a start keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<ColorRange>,
}

impl RangeSet {
    /// Sorts `ranges` without validating them.
    pub fn new(ranges: impl IntoIterator<Item = ColorRange>) -> Self {
        let mut ranges: Vec<ColorRange> = ranges.into_iter().collect();
        ranges.sort_by_key(|range| range.start);
        Self { ranges }
    }

    /// Sorts `ranges` after checking that every endpoint lies inside the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RangeIndex`] for the first range with an endpoint at or past
    /// `sequence_len`. Every range fails on an empty sequence.
    pub fn checked(
        ranges: impl IntoIterator<Item = ColorRange>,
        sequence_len: usize,
    ) -> Result<Self, Error> {
        let set = Self::new(ranges);
        for range in &set.ranges {
            range.check_bounds(sequence_len)?;
        }
        Ok(set)
    }

    /// Like [`RangeSet::checked`], but also rejects inverted and overlapping ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RangeOverlap`] when a range ends before it starts or begins at or
    /// before the end of the previous range in sorted order.
    pub fn strict(
        ranges: impl IntoIterator<Item = ColorRange>,
        sequence_len: usize,
    ) -> Result<Self, Error> {
        let set = Self::checked(ranges, sequence_len)?;

        let mut previous_end: Option<usize> = None;
        for range in &set.ranges {
            if range.is_inverted() {
                return Err(Error::range_overlap(
                    range.start,
                    range.end,
                    "ends before it starts",
                ));
            }
            if let Some(previous_end) = previous_end.filter(|&end| range.start <= end) {
                return Err(Error::range_overlap(
                    range.start,
                    range.end,
                    format!("overlaps a range ending at {previous_end}"),
                ));
            }
            previous_end = Some(range.end);
        }
        Ok(set)
    }

    /// Dispatches to [`RangeSet::strict`] or [`RangeSet::checked`].
    ///
    /// Every surface that accepts user ranges goes through here, so the HTML and the viewer
    /// always see the same validated list.
    pub fn validated(
        ranges: impl IntoIterator<Item = ColorRange>,
        sequence_len: usize,
        strict: bool,
    ) -> Result<Self, Error> {
        if strict {
            Self::strict(ranges, sequence_len)
        } else {
            Self::checked(ranges, sequence_len)
        }
    }

    pub fn ranges(&self) -> &[ColorRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorRange> {
        self.ranges.iter()
    }

    /// Renders `sequence` with every range wrapped in a colored `<span>`.
    ///
    /// A cursor starts at 0. For each range the text from the cursor to the range start is
    /// emitted plain, then the range's own text inside a span, then the cursor moves past the
    /// range end. All slices clamp to the sequence and are empty when inverted, so:
    ///
    /// * an overlapping range repeats the residues it shares with its predecessor,
    /// * an inverted range emits an empty span and leaves the cursor behind its start,
    ///   so the residues after the cursor are emitted again.
    ///
    /// With no ranges the output equals the sequence.
    pub fn to_html(&self, sequence: &Sequence) -> String {
        let mut html = String::with_capacity(sequence.len() + self.ranges.len() * 40);
        let mut cursor = 0usize;

        for range in &self.ranges {
            let after_end = range.end.saturating_add(1);
            html.push_str(sequence.segment(cursor, range.start));
            let _ = write!(
                html,
                r#"<span style="color: {};">{}</span>"#,
                range.color.css_name(),
                sequence.segment(range.start, after_end)
            );
            cursor = after_end;
        }
        html.push_str(sequence.segment(cursor, sequence.len()));

        html
    }

    /// One viewer directive per range, in sorted order, drawn with `representation`.
    pub fn to_style_directives(&self, representation: Representation) -> Vec<StyleDirective> {
        self.ranges
            .iter()
            .map(|range| {
                StyleDirective::new(
                    ResidueSpan::from_sequence_indices(range.start, range.end),
                    representation,
                    range.color,
                )
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a ColorRange;
    type IntoIter = std::slice::Iter<'a, ColorRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

/// Sorts `ranges` and renders the colored HTML for `sequence` without validation.
pub fn annotate(sequence: &Sequence, ranges: &[ColorRange]) -> String {
    RangeSet::new(ranges.iter().copied()).to_html(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    fn span(color: &str, text: &str) -> String {
        format!(r#"<span style="color: {color};">{text}</span>"#)
    }

    #[test]
    fn annotate_wraps_single_range() {
        let html = annotate(&seq("MKTAYIAK"), &[ColorRange::new(0, 2, Color::Red)]);

        assert_eq!(html, format!("{}AYIAK", span("red", "MKT")));
    }

    #[test]
    fn annotate_sorts_ranges_by_start() {
        let ranges = [
            ColorRange::new(5, 7, Color::Blue),
            ColorRange::new(0, 1, Color::Red),
        ];

        let html = annotate(&seq("MKTAYIAK"), &ranges);

        assert_eq!(
            html,
            format!("{}TAY{}", span("red", "MK"), span("blue", "IAK"))
        );
    }

    #[test]
    fn annotate_without_ranges_is_identity() {
        assert_eq!(annotate(&seq("MKTAYIAK"), &[]), "MKTAYIAK");
        assert_eq!(annotate(&seq(""), &[]), "");
    }

    #[test]
    fn annotate_covers_whole_sequence() {
        let html = annotate(&seq("MKTAYIAK"), &[ColorRange::new(0, 7, Color::Cyan)]);

        assert_eq!(html, span("cyan", "MKTAYIAK"));
    }

    #[test]
    fn annotate_single_residue_at_last_index() {
        let html = annotate(&seq("MKTAYIAK"), &[ColorRange::new(7, 7, Color::Pink)]);

        assert_eq!(html, format!("MKTAYIA{}", span("pink", "K")));
    }

    #[test]
    fn annotate_single_residue_at_first_index() {
        let html = annotate(&seq("MKTAYIAK"), &[ColorRange::new(0, 0, Color::Yellow)]);

        assert_eq!(html, format!("{}KTAYIAK", span("yellow", "M")));
    }

    fn strip_spans(html: &str) -> String {
        let mut text = String::new();
        let mut rest = html;
        while let Some(open) = rest.find("<span") {
            text.push_str(&rest[..open]);
            let close = rest[open..].find('>').expect("span tag is closed") + open + 1;
            rest = &rest[close..];
        }
        text.push_str(rest);
        text.replace("</span>", "")
    }

    #[test]
    fn disjoint_ranges_cover_the_sequence_exactly_once() {
        let sequence = seq("MKTAYIAKQRQISFVK");
        let range_sets = [
            vec![],
            vec![ColorRange::new(0, 0, Color::Red)],
            vec![ColorRange::new(15, 15, Color::Blue)],
            vec![ColorRange::new(0, 15, Color::Green)],
            vec![
                ColorRange::new(9, 12, Color::Violet),
                ColorRange::new(0, 3, Color::Red),
                ColorRange::new(4, 8, Color::Cyan),
            ],
            vec![
                ColorRange::new(2, 2, Color::Pink),
                ColorRange::new(5, 7, Color::Orange),
                ColorRange::new(11, 14, Color::Yellow),
            ],
        ];

        for ranges in range_sets {
            let set = RangeSet::strict(ranges.clone(), sequence.len()).unwrap();
            let html = set.to_html(&sequence);

            assert_eq!(html.matches("<span").count(), ranges.len());
            assert_eq!(strip_spans(&html), sequence.as_str(), "ranges: {ranges:?}");
        }
    }

    #[test]
    fn annotate_repeats_residues_for_overlapping_ranges() {
        let ranges = [
            ColorRange::new(0, 4, Color::Red),
            ColorRange::new(2, 6, Color::Blue),
        ];

        let html = annotate(&seq("MKTAYIAK"), &ranges);

        assert_eq!(
            html,
            format!("{}{}K", span("red", "MKTAY"), span("blue", "TAYIA"))
        );
    }

    #[test]
    fn annotate_inverted_range_emits_empty_span() {
        let html = annotate(&seq("MKTAYIAK"), &[ColorRange::new(3, 1, Color::Green)]);

        assert_eq!(html, format!("MKT{}TAYIAK", span("green", "")));
    }

    #[test]
    fn annotate_clamps_ranges_past_the_end() {
        let html = annotate(&seq("MKT"), &[ColorRange::new(1, 10, Color::Orange)]);

        assert_eq!(html, format!("M{}", span("orange", "KT")));
    }

    #[test]
    fn range_set_sort_is_stable_for_equal_starts() {
        let set = RangeSet::new([
            ColorRange::new(2, 3, Color::Red),
            ColorRange::new(0, 0, Color::Yellow),
            ColorRange::new(2, 2, Color::Blue),
        ]);

        let colors: Vec<Color> = set.iter().map(|range| range.color).collect();
        assert_eq!(colors, vec![Color::Yellow, Color::Red, Color::Blue]);
    }

    #[test]
    fn checked_rejects_out_of_bounds_endpoints() {
        let err = RangeSet::checked([ColorRange::new(2, 8, Color::Red)], 8).unwrap_err();
        assert!(matches!(
            err,
            Error::RangeIndex {
                start: 2,
                end: 8,
                len: 8
            }
        ));

        assert!(RangeSet::checked([ColorRange::new(9, 9, Color::Red)], 8).is_err());
        assert!(RangeSet::checked([ColorRange::new(0, 7, Color::Red)], 8).is_ok());
    }

    #[test]
    fn checked_rejects_any_range_on_empty_sequence() {
        assert!(RangeSet::checked([ColorRange::new(0, 0, Color::Red)], 0).is_err());
        assert!(RangeSet::checked([], 0).unwrap().is_empty());
    }

    #[test]
    fn checked_allows_overlap_and_inversion() {
        let set = RangeSet::checked(
            [
                ColorRange::new(0, 4, Color::Red),
                ColorRange::new(2, 6, Color::Blue),
                ColorRange::new(7, 5, Color::Green),
            ],
            8,
        )
        .unwrap();

        assert_eq!(set.len(), 3);
    }

    #[test]
    fn strict_rejects_overlapping_ranges() {
        let err = RangeSet::strict(
            [
                ColorRange::new(2, 6, Color::Blue),
                ColorRange::new(0, 4, Color::Red),
            ],
            8,
        )
        .unwrap_err();

        match err {
            Error::RangeOverlap { start, end, reason } => {
                assert_eq!((start, end), (2, 6));
                assert!(reason.contains("ending at 4"));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn strict_rejects_inverted_range() {
        let err = RangeSet::strict([ColorRange::new(3, 1, Color::Green)], 8).unwrap_err();

        assert!(matches!(err, Error::RangeOverlap { start: 3, end: 1, .. }));
    }

    #[test]
    fn strict_accepts_adjacent_ranges() {
        let set = RangeSet::strict(
            [
                ColorRange::new(0, 2, Color::Red),
                ColorRange::new(3, 7, Color::Blue),
            ],
            8,
        )
        .unwrap();

        assert_eq!(
            set.to_html(&seq("MKTAYIAK")),
            format!("{}{}", span("red", "MKT"), span("blue", "AYIAK"))
        );
    }

    #[test]
    fn to_style_directives_uses_one_based_spans_in_sorted_order() {
        let set = RangeSet::new([
            ColorRange::new(5, 7, Color::Blue),
            ColorRange::new(0, 2, Color::Red),
        ]);

        let directives = set.to_style_directives(Representation::Cartoon);

        let spans: Vec<String> = directives.iter().map(|d| d.residues.to_string()).collect();
        assert_eq!(spans, vec!["1-3", "6-8"]);
        assert_eq!(directives[0].color, Color::Red);
        assert!(
            directives
                .iter()
                .all(|d| d.representation == Representation::Cartoon)
        );
    }

    #[test]
    fn color_parses_case_insensitively_and_lists_palette_on_error() {
        assert_eq!("Violet".parse::<Color>().unwrap(), Color::Violet);

        let err = "magenta".parse::<Color>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("magenta"));
        assert!(message.contains("red, blue, green, yellow, violet, pink, orange, cyan"));
    }

    #[test]
    fn validated_switches_between_checked_and_strict() {
        let overlapping = [
            ColorRange::new(0, 4, Color::Red),
            ColorRange::new(2, 6, Color::Blue),
        ];

        assert_eq!(RangeSet::validated(overlapping, 8, false).unwrap().len(), 2);
        assert!(matches!(
            RangeSet::validated(overlapping, 8, true),
            Err(Error::RangeOverlap { .. })
        ));
        assert!(matches!(
            RangeSet::validated([ColorRange::new(0, 99, Color::Red)], 3, false),
            Err(Error::RangeIndex { len: 3, .. })
        ));
    }

    #[test]
    fn color_range_parses_command_line_form() {
        let range: ColorRange = "3:7:Blue".parse().unwrap();

        assert_eq!(range, ColorRange::new(3, 7, Color::Blue));
        assert_eq!(range.to_string(), "3:7:blue");
    }

    #[test]
    fn color_range_rejects_malformed_input() {
        assert!(matches!(
            "3-7:red".parse::<ColorRange>(),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            "-1:4:red".parse::<ColorRange>(),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            "1:4:mauve".parse::<ColorRange>(),
            Err(Error::UnknownColor { .. })
        ));
    }
}
