//! Styles for the themed text, card and button primitives.
//!
//! Pure functions of the palette and the component props; views translate
//! the returned values into their toolkit's style objects.

use crate::theme::palette::{Palette, GRADIENTS};

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextVariant {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    Inverse,
    Accent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextSize {
    Xs,
    Sm,
    #[default]
    Base,
    Lg,
    Xl,
    Xl2,
    Xl3,
}

impl TextSize {
    pub fn points(self) -> f32 {
        match self {
            TextSize::Xs => 12.0,
            TextSize::Sm => 14.0,
            TextSize::Base => 16.0,
            TextSize::Lg => 18.0,
            TextSize::Xl => 20.0,
            TextSize::Xl2 => 24.0,
            TextSize::Xl3 => 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    SemiBold,
    Bold,
}

impl FontWeight {
    pub fn font_family(self) -> &'static str {
        match self {
            FontWeight::Regular => "Inter-Regular",
            FontWeight::Medium => "Inter-Medium",
            FontWeight::SemiBold => "Inter-SemiBold",
            FontWeight::Bold => "Inter-Bold",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: &'static str,
    pub font_size: f32,
    pub font_family: &'static str,
}

pub fn text_style(
    palette: &Palette,
    variant: TextVariant,
    size: TextSize,
    weight: FontWeight,
) -> TextStyle {
    let color = match variant {
        TextVariant::Primary => palette.text.primary,
        TextVariant::Secondary => palette.text.secondary,
        TextVariant::Tertiary => palette.text.tertiary,
        TextVariant::Inverse => palette.text.inverse,
        // the brand shade, not `text.accent`
        TextVariant::Accent => palette.accent.main(),
    };

    TextStyle {
        color,
        font_size: size.points(),
        font_family: weight.font_family(),
    }
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Elevated,
    Outlined,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardPadding {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

impl CardPadding {
    pub fn points(self) -> f32 {
        match self {
            CardPadding::None => 0.0,
            CardPadding::Small => 12.0,
            CardPadding::Medium => 16.0,
            CardPadding::Large => 24.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub color: &'static str,
    pub offset_x: f32,
    pub offset_y: f32,
    pub opacity: f32,
    pub radius: f32,
    /// Android elevation.
    pub elevation: f32,
}

impl Shadow {
    pub const NONE: Shadow = Shadow {
        color: "transparent",
        offset_x: 0.0,
        offset_y: 0.0,
        opacity: 0.0,
        radius: 0.0,
        elevation: 0.0,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub background_color: &'static str,
    pub border_width: f32,
    pub border_color: Option<&'static str>,
    pub border_radius: f32,
    pub padding: f32,
    pub shadow: Shadow,
}

const CARD_RADIUS: f32 = 16.0;

pub fn card_style(palette: &Palette, variant: CardVariant, padding: CardPadding) -> CardStyle {
    let (background_color, border_width, border_color, shadow) = match variant {
        CardVariant::Default => (
            palette.background.secondary,
            1.0,
            Some(palette.border.primary),
            Shadow {
                color: "#000000",
                offset_x: 0.0,
                offset_y: 2.0,
                opacity: 0.05,
                radius: 8.0,
                elevation: 3.0,
            },
        ),
        CardVariant::Elevated => (
            palette.background.primary,
            0.0,
            None,
            Shadow {
                color: "#000000",
                offset_x: 0.0,
                offset_y: 4.0,
                opacity: 0.1,
                radius: 12.0,
                elevation: 6.0,
            },
        ),
        CardVariant::Outlined => (
            palette.background.primary,
            1.0,
            Some(palette.border.primary),
            Shadow::NONE,
        ),
    };

    CardStyle {
        background_color,
        border_width,
        border_color,
        border_radius: CARD_RADIUS,
        padding: padding.points(),
        shadow,
    }
}

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Accent,
    Outline,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub border_width: f32,
    pub border_radius: f32,
    pub padding_vertical: f32,
    pub padding_horizontal: f32,
    pub text_color: &'static str,
    pub font_size: f32,
    pub font_family: &'static str,
    /// Set when the button is drawn over a linear gradient.
    pub gradient: Option<&'static [&'static str]>,
}

const BUTTON_RADIUS: f32 = 12.0;

pub fn button_style(
    palette: &Palette,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    gradient: bool,
) -> ButtonStyle {
    let primary = palette.primary.main();
    let (background, text, border) = match variant {
        ButtonVariant::Primary => (primary, palette.text.inverse, primary),
        ButtonVariant::Secondary => {
            let c = palette.secondary.main();
            (c, palette.text.inverse, c)
        }
        ButtonVariant::Accent => {
            let c = palette.accent.main();
            (c, palette.text.inverse, c)
        }
        ButtonVariant::Outline => ("transparent", primary, primary),
    };

    let (padding_vertical, padding_horizontal, font_size) = match size {
        ButtonSize::Small => (8.0, 16.0, 14.0),
        ButtonSize::Medium => (12.0, 20.0, 16.0),
        ButtonSize::Large => (16.0, 24.0, 18.0),
    };

    let mut style = ButtonStyle {
        background_color: if disabled { palette.state.disabled } else { background },
        border_color: if disabled { palette.state.disabled } else { border },
        border_width: 1.0,
        border_radius: BUTTON_RADIUS,
        padding_vertical,
        padding_horizontal,
        text_color: if disabled { palette.text.tertiary } else { text },
        font_size,
        font_family: FontWeight::SemiBold.font_family(),
        gradient: None,
    };

    if gradient && variant == ButtonVariant::Primary && !disabled {
        style.background_color = "transparent";
        style.border_width = 0.0;
        style.gradient = Some(&GRADIENTS.primary[..]);
    }

    style
}
