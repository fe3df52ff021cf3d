// 5x7 bitmap font, one byte per row, bit 4 is the leftmost column.

pub const GLYPH_COLUMNS: usize = 5;
pub const GLYPH_ROWS: usize = 7;

/// Horizontal advance in cells, one blank column between glyphs.
pub const GLYPH_ADVANCE: usize = 6;

type Glyph = [u8; GLYPH_ROWS];

const A: Glyph = [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001];
const B: Glyph = [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110];
const C: Glyph = [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110];
const D: Glyph = [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110];
const E: Glyph = [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111];
const F: Glyph = [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000];
const G: Glyph = [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111];
const H: Glyph = [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001];
const I: Glyph = [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110];
const J: Glyph = [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100];
const K: Glyph = [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001];
const L: Glyph = [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111];
const M: Glyph = [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001];
const N: Glyph = [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001];
const O: Glyph = [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110];
const P: Glyph = [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000];
const Q: Glyph = [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101];
const R: Glyph = [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001];
const S: Glyph = [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110];
const T: Glyph = [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100];
const U: Glyph = [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110];
const V: Glyph = [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100];
const W: Glyph = [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010];
const X: Glyph = [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001];
const Y: Glyph = [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100];
const Z: Glyph = [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111];

const DIGITS: [Glyph; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

const EXCLAMATION: Glyph = [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100];
const QUESTION: Glyph = [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100];
const PERIOD: Glyph = [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100];
const COMMA: Glyph = [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000];
const MINUS: Glyph = [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000];
const PLUS: Glyph = [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000];
const APOSTROPHE: Glyph = [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000];
const COLON: Glyph = [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000];

/// Bitmap for `c`, lowercase folded to uppercase. `None` draws nothing but
/// still advances the pen.
pub fn glyph(c: char) -> Option<&'static Glyph> {
    let g = match c.to_ascii_uppercase() {
        'A' => &A, 'B' => &B, 'C' => &C, 'D' => &D, 'E' => &E, 'F' => &F, 'G' => &G,
        'H' => &H, 'I' => &I, 'J' => &J, 'K' => &K, 'L' => &L, 'M' => &M, 'N' => &N,
        'O' => &O, 'P' => &P, 'Q' => &Q, 'R' => &R, 'S' => &S, 'T' => &T, 'U' => &U,
        'V' => &V, 'W' => &W, 'X' => &X, 'Y' => &Y, 'Z' => &Z,
        d @ '0'..='9' => &DIGITS[d as usize - '0' as usize],
        '!' => &EXCLAMATION,
        '?' => &QUESTION,
        '.' => &PERIOD,
        ',' => &COMMA,
        '-' => &MINUS,
        '+' => &PLUS,
        '\'' => &APOSTROPHE,
        ':' => &COLON,
        _ => return None,
    };

    Some(g)
}

#[inline]
pub fn is_set(glyph: &Glyph, row: usize, col: usize) -> bool {
    glyph[row] & (0b10000 >> col) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_folds_to_uppercase() {
        assert_eq!(glyph('r'), glyph('R'));
        assert!(glyph('y').is_some());
    }

    #[test]
    fn space_and_unknown_are_blank() {
        assert!(glyph(' ').is_none());
        assert!(glyph('é').is_none());
    }

    #[test]
    fn exclamation_has_gap() {
        let g = glyph('!').unwrap();
        assert!(is_set(g, 0, 2));
        assert!(!is_set(g, 5, 2));
        assert!(is_set(g, 6, 2));
    }
}
