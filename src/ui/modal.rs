use iced::widget::{center, mouse_area, opaque, stack};
use iced::Element;

use super::styles::backdrop;

/// Draws `content` centered over a dimmed `base`. Clicking outside the
/// content emits `on_blur`.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let base: Element<'a, Message> = base.into();

    stack![
        base,
        opaque(
            mouse_area(center(opaque(content)).style(backdrop))
                .on_press(on_blur)
        ),
    ]
    .into()
}
