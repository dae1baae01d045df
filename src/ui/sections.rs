use iced::widget::scrollable::RelativeOffset;
use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Element, Fill};

use crate::app::Message;
use crate::i18n::{field, Translator};
use crate::project::{self, ProjectEntry};

use super::styles::{accent, card, subtle, tag};

pub const CONTACT_EMAIL: &str = "mailto:os67583@gmail.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/oscar-salazar-709865232/";

/// Page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Projects, Section::Skills, Section::Contact];

    pub fn label_key(self) -> &'static str {
        match self {
            Section::Projects => "nav.projects",
            Section::Skills => "nav.skills",
            Section::Contact => "nav.contact",
        }
    }

    /// Approximate vertical position of the section within the page.
    pub fn offset(self) -> RelativeOffset {
        let y = match self {
            Section::Projects => 0.22,
            Section::Skills => 0.78,
            Section::Contact => 1.0,
        };
        RelativeOffset { x: 0.0, y }
    }
}

pub fn hero<'a>(t: &Translator<'a>) -> Element<'a, Message> {
    let stats: Row<'a, Message> =
        Row::with_children(t.records("hero.stats").iter().map(|stat| {
            column![
                text(field(stat, "number")).size(28).style(accent),
                text(field(stat, "label")).size(13).style(subtle),
            ]
            .spacing(2)
            .into()
        }));

    let copy = column![
        text(t.text("hero.eyebrow")).size(14).style(accent),
        text(t.text("hero.headline")).size(44),
        text(t.text("hero.subhead")).size(18).style(subtle),
        row![
            button(text(t.text("hero.ctaPrimary")))
                .on_press(Message::ScrollTo(Section::Projects))
                .style(button::primary),
            button(text(t.text("hero.ctaSecondary")))
                .on_press(Message::ScrollTo(Section::Contact))
                .style(button::secondary),
        ]
        .spacing(12),
        stats.spacing(32),
    ]
    .spacing(18)
    .width(Fill);

    let focus: Column<'a, Message> = Column::with_children(
        t.list("hero.focusList")
            .iter()
            .map(|item| text(format!("• {item}")).into()),
    );

    let focus_card = container(
        column![
            text(t.text("hero.focusTitle")).size(20),
            focus.spacing(8),
            container(text(t.text("hero.focusStatus")).size(12))
                .padding([4, 12])
                .style(tag),
        ]
        .spacing(16),
    )
    .padding(24)
    .width(320)
    .style(card);

    row![copy, focus_card].spacing(40).into()
}

pub fn projects<'a>(t: &Translator<'a>, entries: &[ProjectEntry<'a>]) -> Element<'a, Message> {
    let cards: Column<'a, Message> = Column::with_children(
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| project::view::card_view(*entry, index, t)),
    );

    column![
        title(t.text("projects.title"), t.text("projects.subtitle")),
        cards.spacing(20),
    ]
    .spacing(24)
    .into()
}

pub fn skills<'a>(t: &Translator<'a>) -> Element<'a, Message> {
    let cards: Column<'a, Message> =
        Column::with_children(t.records("skills.items").iter().map(|skill| {
            container(
                column![
                    text(field(skill, "title")).size(18),
                    text(field(skill, "body")).style(subtle),
                ]
                .spacing(8),
            )
            .padding(20)
            .width(Fill)
            .style(card)
            .into()
        }));

    column![
        title(t.text("skills.title"), t.text("skills.subtitle")),
        cards.spacing(16),
    ]
    .spacing(24)
    .into()
}

pub fn contact<'a>(t: &Translator<'a>) -> Element<'a, Message> {
    container(
        column![
            text(t.text("contact.title")).size(30),
            text(t.text("contact.body")).style(subtle),
            row![
                button(text(t.text("contact.primary")))
                    .on_press(Message::OpenLink(CONTACT_EMAIL.to_string()))
                    .style(button::primary),
                button(text(t.text("contact.secondary")))
                    .on_press(Message::OpenLink(LINKEDIN_URL.to_string()))
                    .style(button::secondary),
            ]
            .spacing(12),
        ]
        .spacing(16),
    )
    .padding(32)
    .width(Fill)
    .style(card)
    .into()
}

pub fn footer<'a>(t: &Translator<'a>) -> Element<'a, Message> {
    row![
        text(t.text("footer.left")).size(12).style(subtle).width(Fill),
        text(t.text("footer.right")).size(12).style(subtle),
    ]
    .into()
}

fn title<'a>(eyebrow: &'a str, heading: &'a str) -> Element<'a, Message> {
    column![
        text(eyebrow).size(14).style(accent),
        text(heading).size(32),
    ]
    .spacing(6)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_scroll_in_page_order() {
        let offsets: Vec<f32> = Section::ALL
            .iter()
            .map(|section| section.offset().y)
            .collect();
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(offsets.last(), Some(&1.0));
    }
}
