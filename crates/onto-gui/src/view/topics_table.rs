//! Topics table.
//!
//! Columns are a tagged list of descriptors iterated directly - no generic
//! table framework. The body renders exactly one of: a loading state while a
//! fetch for the current key is in flight, an error state with a retry
//! action once a fetch settled into an error, an empty state for zero
//! results, or the rows of the current page.

use iced::widget::{button, checkbox, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use onto_model::{SortKey, SortOrder, TopicOverview};

use crate::component::{EmptyState, ErrorState, LoadingState, status_badge};
use crate::message::{BrowserMessage, Message};
use crate::state::AppState;
use crate::theme::{
    SPACING_XS, TABLE_BODY_HEIGHT, TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y, button_ghost, card,
    font_semibold, text_muted,
};
use crate::util::{PLACEHOLDER, format_date, truncate};

/// Maximum characters shown in the description column, roughly two lines.
const DESCRIPTION_CHARS: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKey {
    Select,
    Title,
    Status,
    ChildCount,
    Description,
    CreatedAt,
    Parent,
}

/// Column descriptor: header, width, and the sort key for sortable columns.
struct Column {
    key: ColumnKey,
    header: &'static str,
    width: Length,
    sort: Option<SortKey>,
}

const COLUMNS: [Column; 7] = [
    Column {
        key: ColumnKey::Select,
        header: "",
        width: Length::Fixed(36.0),
        sort: None,
    },
    Column {
        key: ColumnKey::Title,
        header: "Topic Name",
        width: Length::FillPortion(3),
        sort: Some(SortKey::Title),
    },
    Column {
        key: ColumnKey::Status,
        header: "Status",
        width: Length::FillPortion(2),
        sort: Some(SortKey::Status),
    },
    Column {
        key: ColumnKey::ChildCount,
        header: "# Children",
        width: Length::Fixed(90.0),
        sort: Some(SortKey::ChildCount),
    },
    Column {
        key: ColumnKey::Description,
        header: "Description",
        width: Length::FillPortion(4),
        sort: None,
    },
    Column {
        key: ColumnKey::CreatedAt,
        header: "Date added",
        width: Length::FillPortion(2),
        sort: Some(SortKey::CreatedAt),
    },
    Column {
        key: ColumnKey::Parent,
        header: "Parent topic name",
        width: Length::FillPortion(2),
        sort: None,
    },
];

/// Render the topics table for the current key's slot.
pub fn view_topics_table(state: &AppState) -> Element<'_, Message> {
    let slot = state.topics_slot();
    let selected = state.browser.selected_topic.as_deref();

    let header = row(COLUMNS
        .iter()
        .map(|column| header_cell(column, state.browser.sort_by, state.browser.sort_order))
        .collect::<Vec<Element<'_, Message>>>())
    .align_y(Alignment::Center);

    let body: Element<'_, Message> = if slot.is_fetching {
        LoadingState::new("Loading topics…")
            .height(TABLE_BODY_HEIGHT / 2.0)
            .view()
    } else if let Some(error) = slot.error {
        ErrorState::new("Failed to load topics")
            .message(error.to_string())
            .retry(Message::Browser(BrowserMessage::RetryTopics))
            .view()
    } else {
        let items = slot.data.map(|page| page.items.as_slice()).unwrap_or(&[]);
        if items.is_empty() {
            EmptyState::new(
                lucide::folder_open().size(32),
                "No topics found for this taxonomy.",
            )
            .height(TABLE_BODY_HEIGHT / 2.0)
            .view()
        } else {
            let rows: Vec<Element<'_, Message>> = items
                .iter()
                .map(|record| table_row(record, selected))
                .collect();
            scrollable(column(rows))
                .height(Length::Fixed(TABLE_BODY_HEIGHT))
                .into()
        }
    };

    container(column![header, body])
        .width(Length::Fill)
        .style(card)
        .into()
}

fn header_cell<'a>(
    column: &Column,
    sort_by: SortKey,
    sort_order: SortOrder,
) -> Element<'a, Message> {
    let content: Element<'_, Message> = match column.sort {
        Some(key) => {
            let mut inner = row![
                text(column.header).size(12).font(font_semibold()),
            ]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center);
            if sort_by == key {
                let chevron = match sort_order {
                    SortOrder::Asc => lucide::chevron_up(),
                    SortOrder::Desc => lucide::chevron_down(),
                };
                inner = inner.push(chevron.size(12));
            }
            button(inner)
                .on_press(Message::Browser(BrowserMessage::SortClicked(key)))
                .padding(0.0)
                .style(button_ghost)
                .into()
        }
        None => text(column.header).size(12).font(font_semibold()).into(),
    };

    container(content)
        .width(column.width)
        .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

fn table_row<'a>(record: &'a TopicOverview, selected: Option<&str>) -> Element<'a, Message> {
    let is_selected = selected == Some(record.topic.id.as_str());
    let cells: Vec<Element<'_, Message>> = COLUMNS
        .iter()
        .map(|column| cell(column, record, is_selected))
        .collect();

    button(row(cells).align_y(Alignment::Center))
        .on_press(Message::Browser(BrowserMessage::TopicSelected(
            record.topic.id.clone(),
        )))
        .padding(0.0)
        .style(move |theme: &Theme, status| {
            let palette = theme.extended_palette();
            let background = if is_selected {
                Some(palette.primary.weak.color.into())
            } else {
                match status {
                    button::Status::Hovered => Some(palette.background.weak.color.into()),
                    _ => None,
                }
            };
            button::Style {
                background,
                text_color: palette.background.base.text,
                ..Default::default()
            }
        })
        .into()
}

fn cell<'a>(column: &Column, record: &'a TopicOverview, is_selected: bool) -> Element<'a, Message> {
    let topic = &record.topic;
    let content: Element<'a, Message> = match column.key {
        ColumnKey::Select => {
            let topic_id = topic.id.clone();
            checkbox(is_selected)
                .on_toggle(move |_| {
                    Message::Browser(BrowserMessage::TopicSelected(topic_id.clone()))
                })
                .into()
        }
        ColumnKey::Title => text(topic.title.as_str())
            .size(13)
            .font(font_semibold())
            .into(),
        ColumnKey::Status => status_badge(&topic.status),
        ColumnKey::ChildCount => text(record.child_count.to_string()).size(13).into(),
        ColumnKey::Description => text(truncate(
            topic.description.as_deref().unwrap_or(PLACEHOLDER),
            DESCRIPTION_CHARS,
        ))
        .size(12)
        .style(|theme: &Theme| text::Style {
            color: Some(text_muted(theme)),
        })
        .into(),
        ColumnKey::CreatedAt => text(format_date(topic.created_at.as_deref())).size(13).into(),
        ColumnKey::Parent => text(record.first_parent_title().unwrap_or(PLACEHOLDER).to_string())
            .size(13)
            .into(),
    };

    container(content)
        .width(column.width)
        .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
        .into()
}
