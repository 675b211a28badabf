//! Shared modal utilities - backdrop helpers and form labels.

use crate::app::Atelier;
use gpui::*;

/// Renders a modal backdrop with click-to-close behavior using state-tracking.
///
/// A boolean flag distinguishes clicks on the backdrop from clicks on the
/// modal content: the flag is set on mouse down and checked on mouse up, so
/// only a press that both starts and ends on the backdrop closes the modal.
pub fn render_modal_backdrop(
    id: impl Into<ElementId>,
    backdrop: Hsla,
    cx: &mut Context<Atelier>,
    on_backdrop_mouse_down: impl Fn(&mut Atelier, &MouseDownEvent, &mut Window, &mut Context<Atelier>)
    + 'static,
    on_backdrop_mouse_up: impl Fn(&mut Atelier, &MouseUpEvent, &mut Window, &mut Context<Atelier>)
    + 'static,
    child: impl IntoElement,
) -> impl IntoElement {
    deferred(
        div()
            .id(id)
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .bg(backdrop)
            .flex()
            .items_center()
            .justify_center()
            .on_mouse_down(MouseButton::Left, cx.listener(on_backdrop_mouse_down))
            .on_mouse_up(MouseButton::Left, cx.listener(on_backdrop_mouse_up))
            .on_scroll_wheel(cx.listener(|_, _, _, _| {}))
            .child(child),
    )
    .with_priority(1500)
}

/// Small tracked-out field label, uppercase with a required marker.
pub fn field_label(text: &'static str, required: bool, muted_fg: Hsla) -> Div {
    div()
        .text_xs()
        .text_color(muted_fg)
        .child(if required {
            format!("{} *", text)
        } else {
            text.to_string()
        })
}
