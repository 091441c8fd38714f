//! Pagination controls.
//!
//! First/previous/next/last buttons around a page indicator. Pages are
//! 1-based; `page_count` already carries its floor of one, so a zero-result
//! table still shows "Page 1 of 1".

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Border, Element, Theme};
use iced_fonts::lucide;

use crate::theme::{BORDER_RADIUS_SM, SPACING_XS, button_ghost, text_muted};

/// Pagination controls emitting `on_page(target)` for each jump.
pub fn pagination<'a, M: Clone + 'a>(
    page: usize,
    page_count: usize,
    on_page: impl Fn(usize) -> M,
) -> Element<'a, M> {
    let prev_enabled = page > 1;
    let next_enabled = page < page_count;

    let first_button = button(lucide::chevrons_left().size(14))
        .on_press_maybe(prev_enabled.then(|| on_page(1)))
        .padding([6.0, 8.0])
        .style(button_ghost);

    let prev_button = button(lucide::chevron_left().size(14))
        .on_press_maybe(prev_enabled.then(|| on_page(page - 1)))
        .padding([6.0, 8.0])
        .style(button_ghost);

    let page_info = container(
        text(format!("Page {page} of {page_count}"))
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(text_muted(theme)),
            }),
    )
    .padding([6.0, 12.0])
    .style(|theme: &Theme| container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let next_button = button(lucide::chevron_right().size(14))
        .on_press_maybe(next_enabled.then(|| on_page(page + 1)))
        .padding([6.0, 8.0])
        .style(button_ghost);

    let last_button = button(lucide::chevrons_right().size(14))
        .on_press_maybe(next_enabled.then(|| on_page(page_count)))
        .padding([6.0, 8.0])
        .style(button_ghost);

    row![
        first_button,
        prev_button,
        Space::new().width(SPACING_XS),
        page_info,
        Space::new().width(SPACING_XS),
        next_button,
        last_button,
    ]
    .align_y(Alignment::Center)
    .into()
}
