//! Colour tokens for the light and dark themes.
//!
//! Colours are CSS strings (`#RRGGBB` or `rgba(...)`) so views can hand them
//! to the host toolkit unchanged.

/// A tonal scale indexed by Tailwind-style steps (`50`, `100`, ..., `900`).
#[derive(Debug, PartialEq, Eq)]
pub struct ColorScale {
    steps: &'static [(u16, &'static str)],
}

impl ColorScale {
    pub fn get(&self, step: u16) -> Option<&'static str> {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, colour)| *colour)
    }

    /// The brand shade used for buttons and accents.
    pub fn main(&self) -> &'static str {
        self.get(500).unwrap_or("#000000")
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct SemanticColors {
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub info: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct BackgroundColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
    pub overlay: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
    pub inverse: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct BorderColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct StateColors {
    pub hover: &'static str,
    pub pressed: &'static str,
    pub disabled: &'static str,
    pub focus: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: ColorScale,
    pub secondary: ColorScale,
    pub accent: ColorScale,
    pub neutral: ColorScale,
    pub semantic: SemanticColors,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub border: BorderColors,
    pub state: StateColors,
}

const PRIMARY: ColorScale = ColorScale {
    steps: &[
        (50, "#E6FFFA"),
        (100, "#B2F5EA"),
        (200, "#81E6D9"),
        (300, "#4FD1C7"),
        (400, "#38B2AC"),
        (500, "#0CE5DC"),
        (600, "#0DD9C4"),
        (700, "#0A8B7F"),
        (800, "#085F56"),
        (900, "#064E47"),
    ],
};

const SECONDARY: ColorScale = ColorScale {
    steps: &[
        (50, "#F0FDFF"),
        (100, "#CCFBF1"),
        (200, "#99F6E4"),
        (300, "#5EEAD4"),
        (400, "#2DD4BF"),
        (500, "#13C9F2"),
        (600, "#13DCF2"),
        (700, "#0F766E"),
        (800, "#115E59"),
        (900, "#134E4A"),
    ],
};

const ACCENT: ColorScale = ColorScale {
    steps: &[
        (50, "#F0FDFA"),
        (100, "#CCFBF1"),
        (200, "#99F6E4"),
        (300, "#5EEAD4"),
        (400, "#2DD4BF"),
        (500, "#0FF2C9"),
        (600, "#0DD9C4"),
        (700, "#0F766E"),
        (800, "#115E59"),
        (900, "#134E4A"),
    ],
};

const NEUTRAL: ColorScale = ColorScale {
    steps: &[
        (0, "#FFFFFF"),
        (50, "#F9FAFB"),
        (100, "#F3F4F6"),
        (200, "#E5E7EB"),
        (300, "#D1D5DB"),
        (400, "#9CA3AF"),
        (500, "#6B7280"),
        (600, "#4B5563"),
        (700, "#374151"),
        (800, "#1F2937"),
        (900, "#111827"),
        (950, "#030712"),
    ],
};

const SEMANTIC: SemanticColors = SemanticColors {
    success: "#10B981",
    warning: "#F59E0B",
    error: "#EF4444",
    info: "#3B82F6",
};

pub static LIGHT: Palette = Palette {
    primary: PRIMARY,
    secondary: SECONDARY,
    accent: ACCENT,
    neutral: NEUTRAL,
    semantic: SEMANTIC,
    background: BackgroundColors {
        primary: "#FFFFFF",
        secondary: "#F9FAFB",
        tertiary: "#F3F4F6",
        overlay: "rgba(0, 0, 0, 0.5)",
    },
    text: TextColors {
        primary: "#111827",
        secondary: "#6B7280",
        tertiary: "#9CA3AF",
        inverse: "#FFFFFF",
        accent: "#0CE5DC",
    },
    border: BorderColors {
        primary: "#E5E7EB",
        secondary: "#D1D5DB",
        accent: "#0CE5DC",
    },
    state: StateColors {
        hover: "#F3F4F6",
        pressed: "#E5E7EB",
        disabled: "#9CA3AF",
        focus: "#0CE5DC",
    },
};

/// Same brand scales as [`LIGHT`]; surfaces and text are inverted.
pub static DARK: Palette = Palette {
    primary: PRIMARY,
    secondary: SECONDARY,
    accent: ACCENT,
    neutral: NEUTRAL,
    semantic: SEMANTIC,
    background: BackgroundColors {
        primary: "#0D0D0D",
        secondary: "#1F2937",
        tertiary: "#374151",
        overlay: "rgba(0, 0, 0, 0.7)",
    },
    text: TextColors {
        primary: "#FFFFFF",
        secondary: "#D1D5DB",
        tertiary: "#9CA3AF",
        inverse: "#111827",
        accent: "#13C9F2",
    },
    border: BorderColors {
        primary: "#374151",
        secondary: "#4B5563",
        accent: "#13C9F2",
    },
    state: StateColors {
        hover: "#374151",
        pressed: "#4B5563",
        disabled: "#6B7280",
        focus: "#13C9F2",
    },
};

// ---------------------------------------------------------------------------
// Gradients
// ---------------------------------------------------------------------------

pub struct Gradients {
    pub primary: [&'static str; 2],
    pub secondary: [&'static str; 2],
    pub accent: [&'static str; 2],
    pub hero: [&'static str; 3],
    pub dark: [&'static str; 3],
}

pub static GRADIENTS: Gradients = Gradients {
    primary: ["#0CE5DC", "#13C9F2"],
    secondary: ["#13C9F2", "#13DCF2"],
    accent: ["#0DD9C4", "#0FF2C9"],
    hero: ["#0CE5DC", "#13C9F2", "#0DD9C4"],
    dark: ["#0D0D0D", "#1F2937", "#374151"],
};

// ---------------------------------------------------------------------------
// Component colours (light theme)
// ---------------------------------------------------------------------------

pub struct ButtonColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub disabled: &'static str,
}

pub struct CardColors {
    pub background: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
}

pub struct TabColors {
    pub active: &'static str,
    pub inactive: &'static str,
    pub background: &'static str,
}

pub struct HeaderColors {
    pub background: &'static str,
    pub text: &'static str,
}

pub struct ComponentColors {
    pub button: ButtonColors,
    pub card: CardColors,
    pub tab: TabColors,
    pub header: HeaderColors,
}

pub static COMPONENT_COLORS: ComponentColors = ComponentColors {
    button: ButtonColors {
        primary: "#0CE5DC",
        secondary: "#13C9F2",
        accent: "#0FF2C9",
        disabled: "#D1D5DB",
    },
    card: CardColors {
        background: "#FFFFFF",
        border: "#E5E7EB",
        shadow: "rgba(0, 0, 0, 0.1)",
    },
    tab: TabColors {
        active: "#0CE5DC",
        inactive: "#9CA3AF",
        background: "#FFFFFF",
    },
    header: HeaderColors {
        background: "#0CE5DC",
        text: "#FFFFFF",
    },
};
