/// Which project, if any, is shown in the detail overlay.
///
/// The overlay is visible exactly when a project is selected, so both facts
/// are carried by one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMessage {
    Open(usize),
    Close,
    /// Escape, or any other out-of-band request to dismiss the overlay.
    Cancel,
}

impl Selection {
    pub fn update(&mut self, message: SelectionMessage) {
        match message {
            SelectionMessage::Open(project) => {
                *self = Selection::Open(project);
            }
            SelectionMessage::Close | SelectionMessage::Cancel => {
                *self = Selection::Closed;
            }
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            Selection::Open(project) => Some(*project),
            Selection::Closed => None,
        }
    }

    pub fn overlay_visible(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    /// Whether the cancellation listener should be registered.
    pub fn listens_for_cancel(&self) -> bool {
        self.overlay_visible()
    }

    /// Selection of the project after the current one, wrapping around.
    pub fn next(&self, count: usize) -> Option<SelectionMessage> {
        let current = self.selected()?;
        (count > 0).then(|| SelectionMessage::Open((current + 1) % count))
    }

    /// Selection of the project before the current one, wrapping around.
    pub fn previous(&self, count: usize) -> Option<SelectionMessage> {
        let current = self.selected()?;
        (count > 0).then(|| SelectionMessage::Open((current + count - 1) % count))
    }
}
