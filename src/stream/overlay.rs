//! Splicing short labels into rendered graph rows
//!
//! Rows are made of multi-byte glyphs, so all offsets here count
//! characters, never bytes. The row keeps its character count; a label
//! longer than the row is cut to fit.

/// Replace the trailing characters of `row` with `text`.
pub fn overlay_right(row: &str, text: &str) -> String {
    let width = row.chars().count();
    let label: Vec<char> = text.chars().take(width).collect();
    row.chars()
        .take(width - label.len())
        .chain(label)
        .collect()
}

/// Replace the leading characters of `row` with `text`.
pub fn overlay_left(row: &str, text: &str) -> String {
    let width = row.chars().count();
    let label: Vec<char> = text.chars().take(width).collect();
    let skip = label.len();
    label.into_iter().chain(row.chars().skip(skip)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_overlay_replaces_tail() {
        assert_eq!(overlay_right("⢀⣠⣴⣾⣿⣿", " 42.3%"), " 42.3%");
        assert_eq!(overlay_right("⢀⣠⣴⣾⣿⣿⣿", "61°C"), "⢀⣠⣴61°C");
        assert_eq!(overlay_right("   ", ""), "   ");
    }

    #[test]
    fn left_overlay_replaces_head() {
        assert_eq!(overlay_left("⣿⣿⣿⣿⣿⣿", "used"), "used⣿⣿");
        assert_eq!(overlay_left("⣿⣿", "free 1 GiB"), "fr");
    }

    #[test]
    fn long_labels_are_cut_to_row() {
        assert_eq!(overlay_right("⣿⣿⣿", "100.0%"), "100");
        assert_eq!(overlay_right("", "x"), "");
    }
}
