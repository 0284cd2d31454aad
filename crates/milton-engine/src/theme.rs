//! Theme catalogs for the display surface.
//!
//! Two catalogs exist: the album-inspired swatch palette and the basic
//! black/white pair the dual-theme variant wires to its reset toggle. Both
//! are fixed at startup and indexed by position.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// A named (text, background) color pair selectable as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub text: Rgb,
    pub background: Rgb,
}

/// Album-inspired swatch palette, indexed by position.
pub const ALBUM_THEMES: &[Theme] = &[
    Theme {
        name: "slate",
        text: Rgb::new(0x1f, 0x29, 0x37), // #1f2937
        background: Rgb::new(0xf9, 0xfa, 0xfb), // #f9fafb
    },
    Theme {
        name: "lime",
        text: Rgb::new(0x00, 0x00, 0x00), // #000000
        background: Rgb::new(0x8a, 0xce, 0x00), // #8ace00
    },
    Theme {
        name: "noir",
        text: Rgb::new(0xf5, 0xf5, 0xf4), // #f5f5f4
        background: Rgb::new(0x0c, 0x0a, 0x09), // #0c0a09
    },
    Theme {
        name: "blush",
        text: Rgb::new(0x50, 0x10, 0x28), // #501028
        background: Rgb::new(0xf9, 0xc8, 0xd8), // #f9c8d8
    },
    Theme {
        name: "ocean",
        text: Rgb::new(0xe0, 0xf2, 0xfe), // #e0f2fe
        background: Rgb::new(0x0c, 0x4a, 0x6e), // #0c4a6e
    },
    Theme {
        name: "ivory",
        text: Rgb::new(0x44, 0x40, 0x3c), // #44403c
        background: Rgb::new(0xfa, 0xf7, 0xf0), // #faf7f0
    },
];

/// The basic toggle pair used by the dual-theme reset.
pub const BASIC_THEMES: &[Theme] = &[
    Theme {
        name: "black-on-white",
        text: Rgb::new(0x00, 0x00, 0x00),
        background: Rgb::new(0xff, 0xff, 0xff),
    },
    Theme {
        name: "white-on-black",
        text: Rgb::new(0xff, 0xff, 0xff),
        background: Rgb::new(0x00, 0x00, 0x00),
    },
];

/// Index of the black-on-white entry in [`BASIC_THEMES`].
pub const BASIC_BLACK_ON_WHITE: usize = 0;
/// Index of the white-on-black entry in [`BASIC_THEMES`].
pub const BASIC_WHITE_ON_BLACK: usize = 1;

/// Which catalog a selection points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    Album,
    Basic,
}

impl ThemeKind {
    /// The catalog this kind indexes.
    pub fn catalog(self) -> &'static [Theme] {
        match self {
            Self::Album => ALBUM_THEMES,
            Self::Basic => BASIC_THEMES,
        }
    }

    /// Persisted discriminator string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Basic => "basic",
        }
    }

    /// Parse a persisted discriminator. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "album" => Some(Self::Album),
            "basic" => Some(Self::Basic),
            _ => None,
        }
    }
}

/// The active theme: a catalog plus an index into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSelection {
    pub kind: ThemeKind,
    pub index: usize,
}

impl ThemeSelection {
    /// Select an album theme by swatch position.
    pub fn album(index: usize) -> Self {
        Self {
            kind: ThemeKind::Album,
            index,
        }
    }

    /// Select one of the basic pair.
    pub fn basic(index: usize) -> Self {
        Self {
            kind: ThemeKind::Basic,
            index,
        }
    }

    /// Resolve the selection against its catalog. An out-of-range index is
    /// a programming invariant violation, not a handled error; persisted
    /// indices are validated at load time.
    pub fn theme(self) -> Theme {
        let catalog = self.kind.catalog();
        debug_assert!(self.index < catalog.len(), "theme index out of range");
        catalog[self.index]
    }

    /// Whether the index is valid for its catalog.
    pub fn in_range(self) -> bool {
        self.index < self.kind.catalog().len()
    }
}
