//! Letterform tables for the Mathematical Alphanumeric Symbols block.
//!
//! Most styles occupy one contiguous run per letter case, but the script
//! and fraktur alphabets were partly encoded earlier in the Letterlike
//! Symbols block. Those letters are holes in the mathematical block and
//! need their own single-letter ranges.
//!
//! Digits exist only for the bold and bold-italic styles. Unicode has no
//! bold-italic digits, so those tables reuse the bold digits.

use crate::range::RangeMapping;

const fn m(start: char, end: char, replacement: char) -> RangeMapping {
    RangeMapping::fixed(start, end, replacement)
}

pub(crate) static BOLD_SANS: [RangeMapping; 3] = [
    m('A', 'Z', '\u{1D5D4}'),
    m('a', 'z', '\u{1D5EE}'),
    m('0', '9', '\u{1D7EC}'),
];

pub(crate) static BOLD_SERIF: [RangeMapping; 3] = [
    m('A', 'Z', '\u{1D400}'),
    m('a', 'z', '\u{1D41A}'),
    m('0', '9', '\u{1D7CE}'),
];

pub(crate) static ITALIC_SANS: [RangeMapping; 2] = [
    m('A', 'Z', '\u{1D608}'),
    m('a', 'z', '\u{1D622}'),
];

// Italic small h is encoded at U+210E. The run is kept contiguous, so 'h'
// lands on the unassigned U+1D455.
pub(crate) static ITALIC_SERIF: [RangeMapping; 2] = [
    m('A', 'Z', '\u{1D434}'),
    m('a', 'z', '\u{1D44E}'),
];

pub(crate) static BOLD_ITALIC_SANS: [RangeMapping; 3] = [
    m('A', 'Z', '\u{1D63C}'),
    m('a', 'z', '\u{1D656}'),
    m('0', '9', '\u{1D7EC}'),
];

pub(crate) static BOLD_ITALIC_SERIF: [RangeMapping; 3] = [
    m('A', 'Z', '\u{1D468}'),
    m('a', 'z', '\u{1D482}'),
    m('0', '9', '\u{1D7CE}'),
];

pub(crate) static CURSIVE: [RangeMapping; 20] = [
    m('A', 'A', '\u{1D49C}'),
    m('B', 'B', '\u{212C}'),
    m('C', 'D', '\u{1D49E}'),
    m('E', 'F', '\u{2130}'),
    m('G', 'G', '\u{1D4A2}'),
    m('H', 'H', '\u{210B}'),
    m('I', 'I', '\u{2110}'),
    m('J', 'K', '\u{1D4A5}'),
    m('L', 'L', '\u{2112}'),
    m('M', 'M', '\u{2133}'),
    m('N', 'Q', '\u{1D4A9}'),
    m('R', 'R', '\u{211B}'),
    m('S', 'Z', '\u{1D4AE}'),
    m('a', 'd', '\u{1D4B6}'),
    m('e', 'e', '\u{212F}'),
    m('f', 'f', '\u{1D4BB}'),
    m('g', 'g', '\u{210A}'),
    m('h', 'n', '\u{1D4BD}'),
    m('o', 'o', '\u{2134}'),
    m('p', 'z', '\u{1D4C5}'),
];

pub(crate) static FRAKTUR: [RangeMapping; 10] = [
    m('A', 'B', '\u{1D504}'),
    m('C', 'C', '\u{212D}'),
    m('D', 'G', '\u{1D507}'),
    m('H', 'H', '\u{210C}'),
    m('I', 'I', '\u{2111}'),
    m('J', 'Q', '\u{1D50D}'),
    m('R', 'R', '\u{211C}'),
    m('S', 'Y', '\u{1D516}'),
    m('Z', 'Z', '\u{2128}'),
    m('a', 'z', '\u{1D51E}'),
];
