//! Spacing constants, the status badge palette, and shared widget styles.

use iced::widget::{button, container};
use iced::{Border, Color, Theme};

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Full/pill radius - badges
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// TABLE METRICS
// =============================================================================

/// Horizontal cell padding
pub const TABLE_CELL_PADDING_X: f32 = 12.0;

/// Vertical cell padding
pub const TABLE_CELL_PADDING_Y: f32 = 8.0;

/// Height of the scrollable table body
pub const TABLE_BODY_HEIGHT: f32 = 520.0;

// =============================================================================
// BADGE PALETTE
// =============================================================================

/// Alpha applied to a badge color to derive its background tint.
pub const ALPHA_LIGHT: f32 = 0.15;

/// Active / success green.
pub const GREEN: Color = Color::from_rgb(0.18, 0.62, 0.27);

/// Draft / processing yellow.
pub const YELLOW: Color = Color::from_rgb(0.87, 0.56, 0.0);

/// Deprecated / failed red.
pub const RED: Color = Color::from_rgb(0.88, 0.19, 0.19);

/// Merged grape.
pub const GRAPE: Color = Color::from_rgb(0.61, 0.21, 0.71);

/// Neutral gray for unknown statuses.
pub const GRAY: Color = Color::from_rgb(0.53, 0.56, 0.59);

// =============================================================================
// WIDGET STYLES
// =============================================================================

/// Ghost button: no chrome until hovered.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.background.weak.color.into())
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Primary action button.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        _ => palette.primary.base.color,
    };
    button::Style {
        background: Some(background.into()),
        text_color: palette.primary.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Elevated card surface with a subtle border.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: BORDER_RADIUS_MD.into(),
        },
        ..Default::default()
    }
}

/// Muted text color for secondary copy.
pub fn text_muted(theme: &Theme) -> Color {
    theme.extended_palette().background.strong.text
}

/// Semibold variant of the default font, for labels and headings.
pub fn font_semibold() -> iced::Font {
    iced::Font {
        weight: iced::font::Weight::Semibold,
        ..iced::Font::DEFAULT
    }
}
