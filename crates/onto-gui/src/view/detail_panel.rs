//! Topic detail side panel.
//!
//! Shows a prompt until a topic on the current page is selected, then the
//! topic's description and its parent/child relationship lists.

use iced::widget::rule::horizontal as horizontal_rule;
use iced::widget::{Space, column, container, text};
use iced::{Element, Length, Theme};

use onto_model::TopicRelationshipRef;

use crate::component::status_badge;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS, card, font_semibold, text_muted};

pub fn view_detail_panel(state: &AppState) -> Element<'_, Message> {
    let content: Element<'_, Message> = match state.selected_topic() {
        None => column![
            text("Topic details").size(18).font(font_semibold()),
            Space::new().height(SPACING_SM),
            text("Select a topic to view its description, parents, and children.")
                .size(13)
                .style(|theme: &Theme| text::Style {
                    color: Some(text_muted(theme)),
                }),
        ]
        .into(),
        Some(record) => {
            let topic = &record.topic;
            column![
                text(topic.title.as_str()).size(18).font(font_semibold()),
                Space::new().height(SPACING_XS),
                status_badge(&topic.status),
                Space::new().height(SPACING_SM),
                text(
                    topic
                        .description
                        .as_deref()
                        .unwrap_or("No description provided.")
                )
                .size(13),
                Space::new().height(SPACING_MD),
                relationship_list("Topic children:", &record.children, "No children"),
                horizontal_rule(1),
                relationship_list("Topic parents:", &record.parents, "(none)"),
            ]
            .spacing(SPACING_XS)
            .into()
        }
    };

    container(content)
        .width(Length::Fill)
        .padding(SPACING_MD)
        .style(card)
        .into()
}

fn relationship_list<'a>(
    heading: &'a str,
    refs: &'a [TopicRelationshipRef],
    empty_label: &'a str,
) -> Element<'a, Message> {
    let mut list = column![text(heading).size(13).font(font_semibold())].spacing(SPACING_XS);

    if refs.is_empty() {
        list = list.push(text(empty_label).size(12).style(|theme: &Theme| {
            text::Style {
                color: Some(text_muted(theme)),
            }
        }));
    } else {
        for reference in refs {
            list = list.push(
                column![
                    text(reference.title.as_str()).size(13),
                    text(reference.identifier.as_str())
                        .size(11)
                        .style(|theme: &Theme| text::Style {
                            color: Some(text_muted(theme)),
                        }),
                ]
                .spacing(2.0),
            );
        }
    }

    list.into()
}
