use iced::keyboard::{self, key};
use iced::widget::{column, container, scrollable};
use iced::{Element, Fill, Subscription, Task as Command, Theme};

use crate::i18n::{Catalog, Language, Translator};
use crate::project;
use crate::state::persistence::PreferenceStore;
use crate::state::{Selection, SelectionMessage, State, ThemeState};
use crate::ui::controls::view_controls;
use crate::ui::modal::modal;
use crate::ui::sections::{self, Section};

#[derive(Debug)]
pub struct Portfolio {
    catalog: Catalog,
    state: State,
}

#[derive(Debug, Clone)]
pub enum Message {
    LanguageChanged(Language),
    ThemeToggled,
    Selection(SelectionMessage),
    OpenLink(String),
    ScrollTo(Section),
}

impl Portfolio {
    pub fn new(catalog: Catalog, store: Box<dyn PreferenceStore>) -> (Self, Command<Message>) {
        let state = State::new(ThemeState::load(store));
        tracing::info!(theme = %state.theme.current(), "starting portfolio");

        (Self { catalog, state }, Command::none())
    }

    fn page_id() -> scrollable::Id {
        scrollable::Id::new("page")
    }

    pub fn translator(&self) -> Translator<'_> {
        self.catalog.translator(self.state.language)
    }

    pub fn selection(&self) -> Selection {
        self.state.selection
    }

    pub fn theme(&self) -> Theme {
        self.state.theme.current().theme()
    }

    pub fn title(&self) -> String {
        self.translator().text("meta.title").to_string()
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::LanguageChanged(language) => {
                self.state.language = language;
                Command::none()
            }
            Message::ThemeToggled => {
                let theme = self.state.theme.toggle();
                tracing::debug!(%theme, "theme toggled");
                Command::none()
            }
            Message::Selection(SelectionMessage::Open(index))
                if index >= project::entries(&self.translator()).len() =>
            {
                tracing::warn!(index, "ignoring selection of unknown project");
                Command::none()
            }
            Message::Selection(selection_message) => {
                self.state.selection.update(selection_message);
                Command::none()
            }
            Message::OpenLink(url) => {
                if let Err(err) = webbrowser::open(&url) {
                    tracing::warn!(%url, %err, "failed to open link");
                }
                Command::none()
            }
            Message::ScrollTo(section) => scrollable::snap_to(Self::page_id(), section.offset()),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let t = self.translator();
        let entries = project::entries(&t);

        let page = column![
            view_controls(&t, self.state.theme.current()),
            sections::hero(&t),
            sections::projects(&t, &entries),
            sections::skills(&t),
            sections::contact(&t),
            sections::footer(&t),
        ]
        .spacing(64)
        .padding(32)
        .max_width(1080);

        let base = scrollable(container(page).center_x(Fill))
            .id(Self::page_id())
            .height(Fill);

        match self.selection().selected() {
            Some(index) => match entries.get(index) {
                Some(entry) => modal(
                    base,
                    project::view::detail_view(*entry, index, entries.len(), &t),
                    Message::Selection(SelectionMessage::Close),
                ),
                None => base.into(),
            },
            None => base.into(),
        }
    }

    /// Escape closes the overlay. The listener only exists while it is open.
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.state.selection.listens_for_cancel() {
            return Subscription::none();
        }

        keyboard::on_key_press(cancel_on_escape)
    }
}

fn cancel_on_escape(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        keyboard::Key::Named(key::Named::Escape) => {
            Some(Message::Selection(SelectionMessage::Cancel))
        }
        _ => None,
    }
}
