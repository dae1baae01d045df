use iced::widget::{button, column, container, horizontal_space, row, text, Column, Row};
use iced::{Center, Element, Fill};

use crate::app::Message;
use crate::i18n::Translator;
use crate::state::SelectionMessage;
use crate::ui::styles::{card, subtle, tag};

use super::ProjectEntry;

pub fn card_view<'a>(
    project: ProjectEntry<'a>,
    index: usize,
    t: &Translator<'a>,
) -> Element<'a, Message> {
    let head = row![
        text(project.name).size(22).width(Fill),
        text(project.impact).size(13).style(subtle),
    ]
    .spacing(12)
    .align_y(Center);

    let actions = row![
        button(text(t.text("projects.viewDetails")))
            .on_press(Message::Selection(SelectionMessage::Open(index)))
            .style(button::primary),
        button(text(t.text("projects.watchDemo")))
            .on_press(Message::OpenLink(project.links.youtube.to_string()))
            .style(button::text),
    ]
    .spacing(10);

    container(
        column![
            head,
            text(project.description),
            tags(project.stack),
            actions,
        ]
        .spacing(14),
    )
    .padding(20)
    .width(Fill)
    .style(card)
    .into()
}

/// Full entry shown inside the overlay.
pub fn detail_view<'a>(
    project: ProjectEntry<'a>,
    index: usize,
    count: usize,
    t: &Translator<'a>,
) -> Element<'a, Message> {
    let selection = crate::state::Selection::Open(index);

    let nav_button = |label: &'a str, message: Option<SelectionMessage>| {
        button(text(label))
            .on_press_maybe(message.map(Message::Selection))
            .style(button::secondary)
    };

    let header = row![
        text(project.name).size(28),
        horizontal_space(),
        button(text(t.text("projects.modal.close")))
            .on_press(Message::Selection(SelectionMessage::Close))
            .style(button::text),
    ]
    .align_y(Center);

    let highlights: Column<'a, Message> = Column::with_children(
        project
            .highlights
            .iter()
            .map(|point| text(format!("• {point}")).into()),
    )
    .spacing(6);

    let links = row![
        button(text(t.text("projects.links.github")))
            .on_press(Message::OpenLink(project.links.github.to_string()))
            .style(button::primary),
        button(text(t.text("projects.links.youtube")))
            .on_press(Message::OpenLink(project.links.youtube.to_string()))
            .style(button::secondary),
        horizontal_space(),
        nav_button(t.text("projects.modal.previous"), selection.previous(count)),
        nav_button(t.text("projects.modal.next"), selection.next(count)),
    ]
    .spacing(10)
    .align_y(Center);

    container(
        column![
            header,
            text(project.description).style(subtle),
            section(t.text("projects.modal.summary"), text(project.summary).into()),
            section(t.text("projects.modal.impact"), text(project.impact).into()),
            section(t.text("projects.modal.stack"), tags(project.stack)),
            section(t.text("projects.modal.highlights"), highlights.into()),
            links,
        ]
        .spacing(18),
    )
    .padding(28)
    .max_width(720)
    .style(card)
    .into()
}

fn section<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    column![text(title).size(13).style(subtle), body]
        .spacing(6)
        .into()
}

fn tags<'a>(stack: &'a [String]) -> Element<'a, Message> {
    let chips: Row<'a, Message> = Row::with_children(stack.iter().map(|tech| {
        container(text(tech.as_str()).size(12))
            .padding([4, 10])
            .style(tag)
            .into()
    }));

    chips.spacing(8).into()
}
