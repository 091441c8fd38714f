//! The browser page: header, taxonomy selector, toolbar, topics table, and
//! detail panel.
//!
//! Page-level states: no taxonomy selected (selector + hint), taxonomy
//! selected and loading, loaded, and loaded with a topic selected. Once a
//! taxonomy is chosen the selector only ever switches to another taxonomy,
//! never back to "none".

use iced::widget::{Space, button, column, combo_box, container, row, scrollable, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use crate::message::{BrowserMessage, Message};
use crate::settings::ThemeMode;
use crate::state::AppState;
use crate::theme::{
    BORDER_RADIUS_MD, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS, button_ghost,
    card, font_semibold, text_muted,
};
use crate::view::{view_detail_panel, view_toolbar, view_topics_table};

/// Render the whole browser page.
pub fn view_browser(state: &AppState) -> Element<'_, Message> {
    let header = view_header(state);

    let selector_section = column![
        text("Taxonomy").size(14).font(font_semibold()),
        Space::new().height(SPACING_XS),
        view_taxonomy_selector(state),
    ];

    let body: Element<'_, Message> = if state.browser.selected_taxonomy.is_some() {
        let slot = state.topics_slot();
        let total = slot.data.map(|page| page.total).unwrap_or(0);
        let enabled = !slot.is_loading();
        column![
            view_toolbar(state, total, enabled),
            row![
                container(view_topics_table(state)).width(Length::FillPortion(2)),
                container(view_detail_panel(state)).width(Length::FillPortion(1)),
            ]
            .spacing(SPACING_LG)
            .align_y(Alignment::Start),
        ]
        .spacing(SPACING_LG)
        .into()
    } else {
        view_select_hint()
    };

    let panel = container(column![selector_section, body].spacing(SPACING_LG))
        .padding(SPACING_LG)
        .width(Length::Fill)
        .style(card);

    scrollable(
        container(column![header, panel].spacing(SPACING_LG))
            .padding(SPACING_XL)
            .width(Length::Fill),
    )
    .into()
}

fn view_header(state: &AppState) -> Element<'_, Message> {
    let titles = column![
        text("Taxonomy Browser").size(26).font(font_semibold()),
        text("Choose a taxonomy to view its topics, status, and relationships.")
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(text_muted(theme)),
            }),
    ]
    .spacing(SPACING_XS);

    let theme_icon = match state.settings.theme_mode {
        ThemeMode::Light => lucide::moon().size(16),
        ThemeMode::Dark => lucide::sun().size(16),
    };
    let theme_toggle = button(theme_icon)
        .on_press(Message::ToggleTheme)
        .padding([6.0, 8.0])
        .style(button_ghost);

    row![titles, Space::new().width(Length::Fill), theme_toggle]
        .align_y(Alignment::End)
        .into()
}

/// The searchable taxonomy selector with its inline loading and error
/// states.
fn view_taxonomy_selector(state: &AppState) -> Element<'_, Message> {
    let slot = state.taxonomies_slot();
    let placeholder = if slot.is_loading() {
        "Loading taxonomies..."
    } else if slot.is_error() {
        "Failed to load taxonomies"
    } else {
        "Select a taxonomy"
    };

    let selector = combo_box(
        &state.taxonomy_choices,
        placeholder,
        state.selected_choice.as_ref(),
        |choice| Message::Browser(BrowserMessage::TaxonomySelected(choice)),
    )
    .width(Length::Fixed(360.0));

    let mut section = column![selector].spacing(SPACING_XS);

    if let Some(error) = slot.error {
        section = section.push(
            row![
                text(error.to_string())
                    .size(12)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().danger.base.color),
                    }),
                button(text("Retry").size(12))
                    .on_press(Message::Browser(BrowserMessage::RetryTaxonomies))
                    .padding([2.0, 8.0])
                    .style(button_ghost),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
        );
    }

    section.into()
}

fn view_select_hint<'a>() -> Element<'a, Message> {
    container(
        row![
            lucide::info().size(16),
            text("Please select a taxonomy to load topics.").size(13),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.primary.weak.color.into()),
            text_color: Some(palette.primary.strong.color),
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .into()
}
