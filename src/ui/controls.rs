use iced::widget::{button, container, row, text, Row};
use iced::{Center, Element, Fill};

use crate::app::Message;
use crate::i18n::{Language, Translator};
use crate::state::ThemePreference;

use super::sections::Section;
use super::styles::accent;

/// Top bar: section labels, language buttons and the theme toggle.
pub fn view_controls<'a>(t: &Translator<'a>, theme: ThemePreference) -> Element<'a, Message> {
    let current_language = t.language();

    let language_button = |language: Language| {
        button(text(language.label()).size(12))
            .on_press(Message::LanguageChanged(language))
            .padding([5, 12])
            .style(if language == current_language {
                button::primary
            } else {
                button::text
            })
    };

    let languages: Row<'a, Message> = Row::with_children(
        Language::ALL
            .into_iter()
            .map(|language| language_button(language).into()),
    );

    // The toggle names the theme it switches to.
    let theme_label = match theme {
        ThemePreference::Dark => t.text("theme.toLight"),
        ThemePreference::Light => t.text("theme.toDark"),
    };

    let sections: Row<'a, Message> = Row::with_children(Section::ALL.into_iter().map(|section| {
        button(text(t.text(section.label_key())).size(14))
            .on_press(Message::ScrollTo(section))
            .style(button::text)
            .into()
    }));

    row![
        container(text("OS").size(20).style(accent)).width(Fill),
        sections.spacing(8),
        languages.spacing(4).align_y(Center),
        button(text(theme_label).size(12))
            .on_press(Message::ThemeToggled)
            .padding([5, 12])
            .style(button::secondary),
    ]
    .spacing(24)
    .align_y(Center)
    .into()
}
