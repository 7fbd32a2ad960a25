//! Deterministic per-subject colors.
//!
//! Two schemes exist, both pure functions of the subject string:
//! a fixed palette keyed by first-seen order of distinct subjects (dated
//! calendar), and a string hash mapped into a bounded HSL range (weekly
//! grid). Neither involves randomness, so a subject keeps its color across
//! renders.

use std::collections::HashMap;

/// Background/text color pair for one calendar event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventColors {
    pub background: String,
    pub text: String,
}

/// Fixed seven-color palette cycled over distinct subjects in first-seen
/// order.
const PALETTE: [&str; 7] = [
    "#ef4444", "#3b82f6", "#22c55e", "#eab308", "#8b5cf6", "#ec4899", "#6366f1",
];

/// Fallback for a subject that was not present when the palette was built.
const FALLBACK_COLOR: &str = "#9ca3af";

/// Palette assignment over the distinct subjects of a session store.
///
/// Built once from the full store (not the filtered view) so a subject keeps
/// its color while filters change.
#[derive(Debug, Clone, Default)]
pub struct SubjectPalette {
    colors: HashMap<String, &'static str>,
}

impl SubjectPalette {
    /// Assigns palette colors to subjects in first-seen order, cycling when
    /// there are more than seven.
    pub fn assign<'a>(subjects: impl IntoIterator<Item = &'a str>) -> Self {
        let mut colors = HashMap::new();
        let mut next = 0usize;
        for subject in subjects {
            if !colors.contains_key(subject) {
                colors.insert(subject.to_string(), PALETTE[next % PALETTE.len()]);
                next += 1;
            }
        }
        Self { colors }
    }

    pub fn colors_for(&self, subject: &str) -> EventColors {
        EventColors {
            background: self
                .colors
                .get(subject)
                .copied()
                .unwrap_or(FALLBACK_COLOR)
                .to_string(),
            text: "#ffffff".to_string(),
        }
    }
}

/// Hashes a subject string into a bounded HSL color.
///
/// Hue stays below 270, saturation in 75-95, lightness in 55-70; the text
/// color is picked against the computed lightness. The hash runs over UTF-16
/// code units with wrapping 32-bit arithmetic, so any unicode subject name
/// gets a stable color.
pub fn hash_color(subject: &str) -> EventColors {
    let mut hash: i32 = 0;
    for unit in subject.encode_utf16() {
        hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(i32::from(unit));
    }
    let magnitude = hash.unsigned_abs();
    let hue = magnitude % 270;
    let saturation = 75 + magnitude % 20;
    let lightness = 55 + magnitude % 15;
    let text = if lightness > 30 { "#000000" } else { "#ffffff" };
    EventColors {
        background: format!("hsl({hue}, {saturation}%, {lightness}%)"),
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_stable_and_distinct_for_seven_subjects() {
        let subjects = [
            "Math",
            "Chemistry",
            "Physics",
            "Biology",
            "Econs",
            "GP",
            "English",
        ];
        let palette = SubjectPalette::assign(subjects.iter().copied());
        let mut seen = std::collections::HashSet::new();
        for subject in subjects {
            let first = palette.colors_for(subject);
            let second = palette.colors_for(subject);
            assert_eq!(first, second);
            assert!(seen.insert(first.background.clone()), "duplicate color");
        }
    }

    #[test]
    fn palette_ignores_repeated_subjects() {
        let palette = SubjectPalette::assign(["Math", "Math", "Chemistry"]);
        assert_ne!(
            palette.colors_for("Math").background,
            palette.colors_for("Chemistry").background
        );
    }

    #[test]
    fn unknown_subject_gets_the_fallback() {
        let palette = SubjectPalette::assign(["Math"]);
        assert_eq!(palette.colors_for("History").background, FALLBACK_COLOR);
    }

    #[test]
    fn hash_color_is_deterministic_and_bounded() {
        let first = hash_color("Pure Chemistry");
        let second = hash_color("Pure Chemistry");
        assert_eq!(first, second);
        assert!(first.background.starts_with("hsl("));

        // Lightness stays in 55-70, so the contrast rule always picks black.
        assert_eq!(hash_color("Sec 3 Physics").text, "#000000");
    }
}
