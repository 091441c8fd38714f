//! Search, filter, page-size, and pagination toolbar for the topics table.

use std::fmt;

use iced::widget::{Space, button, pick_list, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use onto_model::TopicStatus;

use crate::component::{pagination, search_box, status_display};
use crate::message::{BrowserMessage, Message};
use crate::state::{AppState, PAGE_SIZES};
use crate::theme::{SPACING_SM, button_ghost, text_muted};

/// Status filter menu entry rendered with its display label rather than the
/// wire value.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StatusChoice(TopicStatus);

impl fmt::Display for StatusChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&status_display(&self.0).0)
    }
}

/// Render the toolbar. `total` is the server-reported count of matching
/// topics; `enabled` is false during the very first load of a taxonomy.
pub fn view_toolbar(state: &AppState, total: usize, enabled: bool) -> Element<'_, Message> {
    let browser = &state.browser;

    let search = search_box(
        &browser.search,
        "Search topics",
        enabled,
        |value| Message::Browser(BrowserMessage::SearchChanged(value)),
        Message::Browser(BrowserMessage::SearchCleared),
    );

    let status_options: Vec<StatusChoice> = TopicStatus::KNOWN
        .iter()
        .cloned()
        .map(StatusChoice)
        .collect();
    let selected_status = browser.status.clone().map(StatusChoice);
    let status_filter = pick_list(status_options, selected_status, |choice| {
        Message::Browser(BrowserMessage::StatusFilterChanged(choice.0))
    })
    .placeholder("Filter by status")
    .text_size(13);

    let mut filter_group = row![search, status_filter]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);
    if browser.status.is_some() {
        filter_group = filter_group.push(
            button(lucide::x().size(14))
                .on_press(Message::Browser(BrowserMessage::StatusFilterCleared))
                .padding([4.0, 8.0])
                .style(button_ghost),
        );
    }

    let total_label = text(format!("{total} topics"))
        .size(12)
        .style(|theme: &Theme| text::Style {
            color: Some(text_muted(theme)),
        });

    let page_size_label = text("Page size")
        .size(12)
        .style(|theme: &Theme| text::Style {
            color: Some(text_muted(theme)),
        });
    let page_size = pick_list(PAGE_SIZES.to_vec(), Some(browser.page_size), |size| {
        Message::Browser(BrowserMessage::PageSizeChanged(size))
    })
    .text_size(13);

    let pager = pagination(browser.page, browser.page_count(total), |page| {
        Message::Browser(BrowserMessage::PageChanged(page))
    });

    row![
        filter_group,
        Space::new().width(Length::Fill),
        total_label,
        page_size_label,
        page_size,
        pager,
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}
