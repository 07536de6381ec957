//! Replacement behavior over the built-in table.

use emojicon::{BOOTSTRAP_ICONS, ReplacementTable, replace_emojis, replace_emojis_with};
use proptest::prelude::*;

fn html(input: &str) -> String {
    replace_emojis(input)
}

// --- Concrete scenarios ---

#[test]
fn award_line() {
    assert_eq!(
        html("Award: 🏆 done ✅"),
        "Award: <i class=\"bi bi-trophy-fill\"></i> done <i class=\"bi bi-check-circle-fill\"></i>"
    );
}

#[test]
fn unmapped_emoji_next_to_mapped() {
    assert_eq!(
        html("<h2>🚀💻 Projects</h2>"),
        "<h2>🚀<i class=\"bi bi-terminal-fill\"></i> Projects</h2>"
    );
}

#[test]
fn emoji_inside_markup() {
    let input = "<li class=\"skill\">🎨 Design</li>\n<li title=\"🌐\">Web</li>";
    assert_eq!(
        html(input),
        "<li class=\"skill\"><i class=\"bi bi-palette-fill\"></i> Design</li>\n\
         <li title=\"<i class=\"bi bi-globe2\"></i>\">Web</li>"
    );
}

#[test]
fn each_entry_maps_to_its_icon() {
    for &(emoji, icon) in BOOTSTRAP_ICONS {
        assert_eq!(html(&format!("[{emoji}]")), format!("[{icon}]"), "{emoji}");
    }
}

#[test]
fn lookalike_characters_are_not_replaced() {
    // U+2714 heavy check mark and U+2B50 star are not table keys.
    let input = "✔ ⭐ ☑";
    assert_eq!(html(input), input);
}

#[test]
fn variation_selector_is_kept() {
    // Only the base character is a key; a trailing U+FE0F survives.
    assert_eq!(html("✨\u{FE0F}"), "<i class=\"bi bi-star-fill\"></i>\u{FE0F}");
}

#[test]
fn empty_input() {
    assert_eq!(html(""), "");
}

#[test]
fn reversed_table_gives_same_output() {
    let reversed: Vec<_> = BOOTSTRAP_ICONS.iter().rev().copied().collect();
    let table = ReplacementTable::new(&reversed).unwrap();
    let input = "🎯 ✨ ✅ 🔬 🍓 🎬 🎨 🌐 💻 🏆 🎯";
    assert_eq!(replace_emojis_with(input, &table), html(input));
}

// --- Properties ---

fn mapped_emoji() -> impl Strategy<Value = &'static str> {
    prop::sample::select(BOOTSTRAP_ICONS.iter().map(|(k, _)| *k).collect::<Vec<_>>())
}

/// Text that never contains a table key.
fn plain_text() -> impl Strategy<Value = String> {
    any::<String>().prop_map(|s| {
        s.chars()
            .filter(|c| {
                let mut buf = [0u8; 4];
                let c = &*c.encode_utf8(&mut buf);
                !BOOTSTRAP_ICONS.iter().any(|(k, _)| *k == c)
            })
            .collect()
    })
}

/// Interleaving of plain text and mapped emojis.
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![plain_text(), mapped_emoji().prop_map(str::to_owned)],
        0..16,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn text_without_emoji_is_unchanged(input in plain_text()) {
        prop_assert_eq!(html(&input), input);
    }

    #[test]
    fn single_emoji_substituted_in_place(
        before in plain_text(),
        after in plain_text(),
        emoji in mapped_emoji(),
    ) {
        let input = format!("{before}{emoji}{after}");
        let icon = ReplacementTable::bootstrap().get(emoji).unwrap();
        prop_assert_eq!(html(&input), format!("{before}{icon}{after}"));
    }

    #[test]
    fn no_mapped_emoji_survives(input in mixed_text()) {
        let out = html(&input);
        for &(emoji, _) in BOOTSTRAP_ICONS {
            prop_assert!(!out.contains(emoji));
        }
    }

    #[test]
    fn second_run_is_identical(input in mixed_text()) {
        let once = html(&input);
        prop_assert_eq!(html(&once), once);
    }

    #[test]
    fn table_order_does_not_matter(input in mixed_text(), seed in any::<u64>()) {
        let mut entries = BOOTSTRAP_ICONS.to_vec();
        // Deterministic rotation keeps the shrinker simple.
        let len = entries.len();
        entries.rotate_left((seed % len as u64) as usize);
        let table = ReplacementTable::new(&entries).unwrap();
        prop_assert_eq!(replace_emojis_with(&input, &table), html(&input));
    }
}
