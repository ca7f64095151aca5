//! Single-stroke Roman glyphs in a unit cell (x right, y up, 0..1).

/// One pen stroke
pub type Stroke = &'static [(f64, f64)];
/// All strokes of one character
pub type Glyph = &'static [Stroke];

/// Look up the strokes for an (upper-case) character.
#[rustfmt::skip]
pub fn roman(c: char) -> Option<Glyph> {
    let g: Glyph = match c {
        'A' => &[
            &[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)],
            &[(0.2, 0.4), (0.8, 0.4)],
        ],
        'B' => &[&[
            (0.0, 1.0), (0.0, 0.0), (0.6, 0.0), (0.8, 0.2), (0.6, 0.4),
            (0.0, 0.4), (0.7, 0.4), (0.9, 0.6), (0.7, 1.0), (0.0, 1.0),
        ]],
        'C' => &[&[(0.9, 0.2), (0.7, 0.0), (0.3, 0.0), (0.0, 0.5), (0.3, 1.0), (0.7, 1.0), (0.9, 0.8)]],
        'D' => &[&[(0.0, 1.0), (0.0, 0.0), (0.5, 0.0), (0.9, 0.5), (0.5, 1.0), (0.0, 1.0)]],
        'E' => &[
            &[(0.0, 1.0), (0.0, 0.0), (0.8, 0.0)],
            &[(0.0, 0.5), (0.6, 0.5)],
            &[(0.0, 1.0), (0.8, 1.0)],
        ],
        'F' => &[
            &[(0.0, 1.0), (0.0, 0.0), (0.8, 0.0)],
            &[(0.0, 0.5), (0.6, 0.5)],
        ],
        'G' => &[&[
            (0.9, 0.2), (0.7, 0.0), (0.3, 0.0), (0.0, 0.5), (0.3, 1.0),
            (0.7, 1.0), (0.9, 0.8), (0.9, 0.5), (0.5, 0.5),
        ]],
        'H' => &[
            &[(0.0, 1.0), (0.0, 0.0)],
            &[(1.0, 1.0), (1.0, 0.0)],
            &[(0.0, 0.5), (1.0, 0.5)],
        ],
        'I' => &[
            &[(0.2, 1.0), (0.8, 1.0)],
            &[(0.5, 1.0), (0.5, 0.0)],
            &[(0.2, 0.0), (0.8, 0.0)],
        ],
        'J' => &[
            &[(0.2, 1.0), (0.8, 1.0)],
            &[(0.5, 1.0), (0.5, 0.2), (0.3, 0.0), (0.0, 0.2)],
        ],
        'K' => &[
            &[(0.0, 1.0), (0.0, 0.0)],
            &[(0.8, 1.0), (0.0, 0.5), (0.8, 0.0)],
        ],
        'L' => &[&[(0.0, 1.0), (0.0, 0.0), (0.8, 0.0)]],
        'M' => &[&[(0.0, 0.0), (0.0, 1.0), (0.5, 0.5), (1.0, 1.0), (1.0, 0.0)]],
        'N' => &[&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]],
        'O' | '0' => &[&[(0.2, 0.0), (0.0, 0.5), (0.2, 1.0), (0.8, 1.0), (1.0, 0.5), (0.8, 0.0), (0.2, 0.0)]],
        'P' => &[&[(0.0, 0.0), (0.0, 1.0), (0.7, 1.0), (0.9, 0.8), (0.7, 0.5), (0.0, 0.5)]],
        'Q' => &[
            &[(0.2, 0.0), (0.0, 0.5), (0.2, 1.0), (0.8, 1.0), (1.0, 0.5), (0.8, 0.0), (0.2, 0.0)],
            &[(0.6, 0.5), (1.0, 0.0)],
        ],
        'R' => &[&[
            (0.0, 0.0), (0.0, 1.0), (0.7, 1.0), (0.9, 0.8),
            (0.7, 0.5), (0.0, 0.5), (0.8, 0.5), (1.0, 0.0),
        ]],
        'S' => &[&[
            (0.9, 0.2), (0.7, 0.0), (0.3, 0.0), (0.1, 0.2), (0.3, 0.5),
            (0.7, 0.5), (0.9, 0.8), (0.7, 1.0), (0.3, 1.0), (0.1, 0.8),
        ]],
        'T' => &[
            &[(0.0, 1.0), (1.0, 1.0)],
            &[(0.5, 1.0), (0.5, 0.0)],
        ],
        'U' => &[&[(0.0, 1.0), (0.0, 0.2), (0.3, 0.0), (0.7, 0.0), (1.0, 0.2), (1.0, 1.0)]],
        'V' => &[&[(0.0, 1.0), (0.5, 0.0), (1.0, 1.0)]],
        'W' => &[&[(0.0, 1.0), (0.25, 0.0), (0.5, 0.6), (0.75, 0.0), (1.0, 1.0)]],
        'X' => &[
            &[(0.0, 1.0), (1.0, 0.0)],
            &[(0.0, 0.0), (1.0, 1.0)],
        ],
        'Y' => &[
            &[(0.0, 1.0), (0.5, 0.5)],
            &[(1.0, 1.0), (0.5, 0.5)],
            &[(0.5, 0.5), (0.5, 0.0)],
        ],
        'Z' => &[&[(0.0, 1.0), (1.0, 1.0), (0.0, 0.0), (1.0, 0.0)]],
        '1' => &[&[(0.3, 0.2), (0.5, 0.0), (0.5, 0.0), (0.5, 1.0)]],
        '2' => &[&[(0.0, 0.2), (0.3, 0.0), (0.7, 0.0), (1.0, 0.3), (0.0, 1.0), (1.0, 1.0)]],
        '3' => &[&[
            (0.0, 0.8), (0.4, 0.6), (0.8, 0.6), (0.6, 0.5), (0.8, 0.4), (0.4, 0.4),
            (0.6, 0.4), (0.9, 0.2), (0.7, 0.0), (0.3, 0.0), (0.0, 0.2),
        ]],
        '4' => &[&[(0.7, 1.0), (0.7, 0.0), (0.0, 0.7), (1.0, 0.7)]],
        '5' => &[&[
            (1.0, 1.0), (0.0, 1.0), (0.0, 0.5), (0.7, 0.5),
            (0.9, 0.3), (0.7, 0.0), (0.3, 0.0), (0.1, 0.2),
        ]],
        '6' => &[&[
            (0.8, 0.2), (0.6, 0.0), (0.2, 0.0), (0.0, 0.5), (0.2, 1.0),
            (0.8, 1.0), (1.0, 0.5), (0.8, 0.5), (0.2, 0.5),
        ]],
        '7' => &[&[(0.0, 1.0), (1.0, 1.0), (0.3, 0.0)]],
        '8' => &[
            &[(0.3, 0.0), (0.0, 0.5), (0.3, 1.0), (0.7, 1.0), (1.0, 0.5), (0.7, 0.0), (0.3, 0.0)],
            &[(0.7, 0.0), (0.9, 0.5), (0.7, 1.0)],
        ],
        '9' => &[&[(0.2, 1.0), (0.4, 1.0), (1.0, 1.0), (1.0, 0.5), (0.8, 0.0), (0.2, 0.0), (0.3, 0.5)]],
        '-' => &[&[(0.2, 0.5), (0.8, 0.5)]],
        '/' => &[&[(0.2, 1.0), (0.8, 0.0)]],
        '"' => &[
            &[(0.2, 0.9), (0.2, 0.7)],
            &[(0.8, 0.9), (0.8, 0.7)],
        ],
        '\'' => &[&[(0.5, 1.0), (0.5, 0.7)]],
        _ => return None,
    };
    Some(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_alphabet_and_digits() {
        for c in ('A'..='Z').chain('0'..='9') {
            assert!(roman(c).is_some(), "missing glyph {c}");
        }
        for c in ['-', '/', '"', '\''] {
            assert!(roman(c).is_some(), "missing glyph {c}");
        }
    }

    #[test]
    fn glyphs_stay_in_unit_cell() {
        for c in ('A'..='Z').chain('0'..='9') {
            for stroke in roman(c).unwrap() {
                assert!(stroke.len() >= 2);
                for &(x, y) in *stroke {
                    assert!((0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y));
                }
            }
        }
    }

    #[test]
    fn lowercase_is_not_in_table() {
        assert!(roman('a').is_none());
        assert!(roman('@').is_none());
    }
}
