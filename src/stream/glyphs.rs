//! Braille and block glyph lookup tables
//!
//! A braille cell is two dot columns of four dots each. The tables are
//! indexed as `[left_level][right_level]`, where the left half holds the
//! older sample of a pair and the right half the newer one.

/// Vertical orientation of a braille graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Dots grow from the bottom of the cell upward.
    #[default]
    Normal,
    /// Dots hang from the top of the cell downward; used for graphs drawn
    /// below a related graph so the two mirror each other.
    Flipped,
}

/// Dots filled from the bottom.
pub const BRAILLE_UP: [[char; 5]; 5] = [
    [' ', '⢀', '⢠', '⢰', '⢸'],
    ['⡀', '⣀', '⣠', '⣰', '⣸'],
    ['⡄', '⣄', '⣤', '⣴', '⣼'],
    ['⡆', '⣆', '⣦', '⣶', '⣾'],
    ['⡇', '⣇', '⣧', '⣷', '⣿'],
];

/// Dots filled from the top.
pub const BRAILLE_DOWN: [[char; 5]; 5] = [
    [' ', '⠈', '⠘', '⠸', '⢸'],
    ['⠁', '⠉', '⠙', '⠹', '⢹'],
    ['⠃', '⠋', '⠛', '⠻', '⢻'],
    ['⠇', '⠏', '⠟', '⠿', '⢿'],
    ['⡇', '⡏', '⡟', '⡿', '⣿'],
];

/// Eighth blocks, empty through full.
pub const BLOCKS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Sub-units per character row of a braille cell.
pub const DOTS_PER_ROW: usize = 4;

impl Orientation {
    pub fn table(self) -> &'static [[char; 5]; 5] {
        match self {
            Self::Normal => &BRAILLE_UP,
            Self::Flipped => &BRAILLE_DOWN,
        }
    }

    pub fn is_flipped(self) -> bool {
        self == Self::Flipped
    }
}

/// Glyph for a pair of row levels, each in `0..=4`.
pub fn braille(orientation: Orientation, left: u8, right: u8) -> char {
    let table = orientation.table();
    table[usize::from(left.min(4))][usize::from(right.min(4))]
}

/// Mirror a braille glyph top-to-bottom. Characters outside the braille
/// block are returned unchanged.
#[cfg(test)]
pub fn mirror_vertical(glyph: char) -> char {
    let code = glyph as u32;
    if !(0x2800..=0x28FF).contains(&code) {
        return glyph;
    }
    let bits = code - 0x2800;
    // Dot bit positions per column, top to bottom.
    const LEFT: [u32; 4] = [0, 1, 2, 6];
    const RIGHT: [u32; 4] = [3, 4, 5, 7];
    let mut mirrored = 0;
    for column in [LEFT, RIGHT] {
        for (row, bit) in column.iter().enumerate() {
            if bits & (1 << bit) != 0 {
                mirrored |= 1 << column[3 - row];
            }
        }
    }
    char::from_u32(0x2800 + mirrored).unwrap_or(glyph)
}

/// Count of raised dots in the left and right halves of a braille glyph.
/// A blank space counts as an empty cell.
#[cfg(test)]
pub fn dot_counts(glyph: char) -> (u32, u32) {
    let code = glyph as u32;
    if !(0x2800..=0x28FF).contains(&code) {
        return (0, 0);
    }
    let bits = code - 0x2800;
    let left = [0, 1, 2, 6].iter().filter(|b| bits & (1 << **b) != 0).count();
    let right = [3, 4, 5, 7].iter().filter(|b| bits & (1 << **b) != 0).count();
    (left as u32, right as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tables_are_bijective() {
        for orientation in [Orientation::Normal, Orientation::Flipped] {
            let glyphs: HashSet<char> = orientation.table().iter().flatten().copied().collect();
            assert_eq!(glyphs.len(), 25);
        }
    }

    #[test]
    fn levels_fill_their_own_half_monotonically() {
        for orientation in [Orientation::Normal, Orientation::Flipped] {
            for left in 0..=4u8 {
                for right in 0..=4u8 {
                    let (l, r) = dot_counts(braille(orientation, left, right));
                    assert_eq!(l, u32::from(left), "{orientation:?} {left} {right}");
                    assert_eq!(r, u32::from(right), "{orientation:?} {left} {right}");
                }
            }
        }
    }

    #[test]
    fn flipped_table_is_mirror_of_normal() {
        for left in 0..=4u8 {
            for right in 0..=4u8 {
                let up = braille(Orientation::Normal, left, right);
                let down = braille(Orientation::Flipped, left, right);
                let up = if up == ' ' { '\u{2800}' } else { up };
                let expected = if down == ' ' { '\u{2800}' } else { down };
                assert_eq!(mirror_vertical(up), expected);
            }
        }
    }

    #[test]
    fn mirror_leaves_other_characters_alone() {
        assert_eq!(mirror_vertical('x'), 'x');
        assert_eq!(mirror_vertical('⣿'), '⣿');
    }
}
