//! Seven-segment glyph table
//!
//! Maps a digit value to the lit/unlit state of each of the seven
//! segments. The table is a process-wide constant; anything outside
//! `0..=9` resolves to the blank pattern.

/// Number of segments in one glyph
pub const SEGMENT_COUNT: usize = 7;

/// Segment positions, in table order
///
/// ```text
///     CT
///   LT  RT
///     CC
///   LB  RB
///     CB
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    /// Left top
    LeftTop = 0,
    /// Left bottom
    LeftBottom = 1,
    /// Center top
    CenterTop = 2,
    /// Center center
    CenterCenter = 3,
    /// Center bottom
    CenterBottom = 4,
    /// Right top
    RightTop = 5,
    /// Right bottom
    RightBottom = 6,
}

impl Segment {
    /// All segments in table order
    pub const ALL: [Segment; SEGMENT_COUNT] = [
        Segment::LeftTop,
        Segment::LeftBottom,
        Segment::CenterTop,
        Segment::CenterCenter,
        Segment::CenterBottom,
        Segment::RightTop,
        Segment::RightBottom,
    ];

    /// Segment at a table index, if the index is in range
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SEGMENT_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Table index of this segment
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether the segment is one of the three horizontal bars
    pub const fn is_horizontal(self) -> bool {
        matches!(
            self,
            Segment::CenterTop | Segment::CenterCenter | Segment::CenterBottom
        )
    }
}

/// Lit/unlit state of all seven segments of one glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitPattern([bool; SEGMENT_COUNT]);

const ON: bool = true;
const OFF: bool = false;

/// Glyph table for digits 0-9 (LT, LB, CT, CC, CB, RT, RB)
///
/// Note that 9 has no lower-left segment.
const PATTERNS: [DigitPattern; 10] = [
    DigitPattern([ON, ON, ON, OFF, ON, ON, ON]),
    DigitPattern([OFF, OFF, OFF, OFF, OFF, ON, ON]),
    DigitPattern([OFF, ON, ON, ON, ON, ON, OFF]),
    DigitPattern([OFF, OFF, ON, ON, ON, ON, ON]),
    DigitPattern([ON, OFF, OFF, ON, OFF, ON, ON]),
    DigitPattern([ON, OFF, ON, ON, ON, OFF, ON]),
    DigitPattern([ON, ON, ON, ON, ON, OFF, ON]),
    DigitPattern([OFF, OFF, ON, OFF, OFF, ON, ON]),
    DigitPattern([ON, ON, ON, ON, ON, ON, ON]),
    DigitPattern([ON, OFF, ON, ON, ON, ON, ON]),
];

impl DigitPattern {
    /// All segments unlit
    pub const BLANK: DigitPattern = DigitPattern([OFF; SEGMENT_COUNT]);

    /// Pattern for a digit value; values outside `0..=9` are blank
    pub const fn for_digit(digit: i32) -> Self {
        if matches!(digit, 0..=9) {
            PATTERNS[digit as usize]
        } else {
            Self::BLANK
        }
    }

    /// Whether a segment is lit
    pub const fn is_lit(&self, segment: Segment) -> bool {
        self.0[segment.index()]
    }

    #[cfg(test)]
    pub(crate) fn lit_count(&self) -> usize {
        self.0.iter().filter(|&&lit| lit).count()
    }

    /// Iterate `(segment, lit)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (Segment, bool)> + '_ {
        Segment::ALL.iter().map(move |&s| (s, self.is_lit(s)))
    }
}

impl Default for DigitPattern {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Whether `segment_index` is lit when showing `digit`
///
/// Out-of-range digits are blank and out-of-range segment indices are
/// never lit; neither is an error.
pub const fn lit_pattern(digit: i32, segment_index: i32) -> bool {
    const LAST_INDEX: i32 = SEGMENT_COUNT as i32 - 1;
    match segment_index {
        0..=LAST_INDEX => DigitPattern::for_digit(digit).0[segment_index as usize],
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: [[u8; 7]; 10] = [
        [1, 1, 1, 0, 1, 1, 1],
        [0, 0, 0, 0, 0, 1, 1],
        [0, 1, 1, 1, 1, 1, 0],
        [0, 0, 1, 1, 1, 1, 1],
        [1, 0, 0, 1, 0, 1, 1],
        [1, 0, 1, 1, 1, 0, 1],
        [1, 1, 1, 1, 1, 0, 1],
        [0, 0, 1, 0, 0, 1, 1],
        [1, 1, 1, 1, 1, 1, 1],
        [1, 0, 1, 1, 1, 1, 1],
    ];

    #[test]
    fn test_table_matches_reference() {
        for (digit, row) in EXPECTED.iter().enumerate() {
            for (index, &lit) in row.iter().enumerate() {
                assert_eq!(
                    lit_pattern(digit as i32, index as i32),
                    lit == 1,
                    "digit {} segment {}",
                    digit,
                    index
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_digits_are_blank() {
        for digit in [-1, 10, 42, i32::MIN, i32::MAX] {
            for index in 0..7 {
                assert!(!lit_pattern(digit, index));
            }
            assert_eq!(DigitPattern::for_digit(digit), DigitPattern::BLANK);
        }
    }

    #[test]
    fn test_out_of_range_segment_is_unlit() {
        assert!(!lit_pattern(8, -1));
        assert!(!lit_pattern(8, 7));
    }

    #[test]
    fn test_nine_lacks_lower_left() {
        let nine = DigitPattern::for_digit(9);
        assert!(!nine.is_lit(Segment::LeftBottom));
        assert_eq!(nine.lit_count(), 6);
    }

    #[test]
    fn test_lit_counts() {
        let counts: [usize; 10] = core::array::from_fn(|d| DigitPattern::for_digit(d as i32).lit_count());
        assert_eq!(counts, [6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
    }

    #[test]
    fn test_segment_index_roundtrip() {
        for (i, segment) in Segment::ALL.iter().enumerate() {
            assert_eq!(segment.index(), i);
            assert_eq!(Segment::from_index(i), Some(*segment));
        }
        assert_eq!(Segment::from_index(7), None);
    }
}
