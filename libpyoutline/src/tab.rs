//! Indentation settings.

use serde::Serialize;

/// Spaces per level when none is given.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// How leading whitespace maps to indent levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabFormat {
    /// Spaces per indent level in soft mode.
    pub size: usize,
    /// When set, every leading whitespace character is one level.
    pub hard: bool,
}

impl Default for TabFormat {
    fn default() -> Self {
        Self {
            size: DEFAULT_TAB_SIZE,
            hard: false,
        }
    }
}

impl TabFormat {
    /// Soft (space-indented) format with the given size.
    pub fn soft(size: usize) -> Self {
        Self { size, hard: false }.normalized()
    }

    /// Hard (tab-indented) format.
    pub fn hard() -> Self {
        Self {
            hard: true,
            ..Self::default()
        }
    }

    /// Map editor settings: `insert_spaces == false` means hard tabs.
    pub fn from_editor(tab_size: usize, insert_spaces: bool) -> Self {
        Self {
            size: tab_size,
            hard: !insert_spaces,
        }
        .normalized()
    }

    /// Replace a zero size with the default.
    pub fn normalized(self) -> Self {
        if self.size == 0 {
            Self {
                size: DEFAULT_TAB_SIZE,
                ..self
            }
        } else {
            self
        }
    }

    /// Indent level of a line.
    ///
    /// Soft mode rounds partial units up: with size 4, one to four leading
    /// spaces are level 1, five to eight are level 2.
    pub fn indent_of(&self, line: &str) -> usize {
        let leading = line.chars().take_while(|c| c.is_whitespace()).count();
        if self.hard {
            leading
        } else {
            leading.div_ceil(self.size.max(1))
        }
    }
}


#[cfg(test)]
mod proptest_indent {
    use super::TabFormat;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn whole_units_map_to_level(size in 1usize..9, levels in 0usize..100) {
            let line = format!("{}x = 1", " ".repeat(size * levels));
            prop_assert_eq!(TabFormat::soft(size).indent_of(&line), levels);
        }

        #[test]
        fn partial_units_round_up(size in 2usize..9, levels in 0usize..100, extra in 1usize..8) {
            let extra = 1 + (extra - 1) % (size - 1);
            let line = format!("{}x = 1", " ".repeat(size * levels + extra));
            prop_assert_eq!(TabFormat::soft(size).indent_of(&line), levels + 1);
        }

        #[test]
        fn hard_tabs_count_characters(levels in 0usize..100) {
            let line = format!("{}pass", "\t".repeat(levels));
            prop_assert_eq!(TabFormat::hard().indent_of(&line), levels);
        }
    }
}
