//! Lightbox overlay - full-size artwork viewing over a dimmed backdrop.

use super::modal_base::render_modal_backdrop;
use crate::app::Atelier;
use crate::constants::LIGHTBOX_BACKDROP_OPACITY;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{h_flex, v_flex};

pub fn render_lightbox(app: &Atelier, cx: &mut Context<Atelier>) -> Option<impl IntoElement> {
    let index = app.lightbox.current?;
    let visible = app.visible_artworks();
    let artwork = visible.get(index)?.clone();
    let multiple = visible.len() > 1;
    let hint_visible = app.lightbox.hint_visible();

    let content = v_flex()
        .id("lightbox-content")
        .w_full()
        .h_full()
        .p(px(40.0))
        .items_center()
        .justify_center()
        .gap(px(16.0))
        // Presses on the content must not fall through to the backdrop
        .on_mouse_down(MouseButton::Left, cx.listener(|_, _, _, _| {}))
        .on_mouse_up(MouseButton::Left, cx.listener(|_, _, _, _| {}))
        .when(hint_visible, |this| {
            this.child(
                h_flex()
                    .gap(px(12.0))
                    .px(px(20.0))
                    .py(px(8.0))
                    .rounded_full()
                    .bg(hsla(0.0, 0.0, 0.0, 0.8))
                    .text_xs()
                    .text_color(hsla(0.0, 0.0, 1.0, 0.9))
                    .child("← → navigate")
                    .child("·")
                    .child("Esc or click outside to close"),
            )
        })
        .child(
            h_flex()
                .flex_1()
                .min_h_0()
                .w_full()
                .items_center()
                .justify_center()
                .gap(px(24.0))
                .when(multiple, |this| {
                    this.child(lightbox_nav_button("lightbox-prev", "‹", false, cx))
                })
                .child(
                    div()
                        .flex_1()
                        .h_full()
                        .child(
                            img(artwork.src.clone())
                                .size_full()
                                .object_fit(ObjectFit::Contain),
                        ),
                )
                .when(multiple, |this| {
                    this.child(lightbox_nav_button("lightbox-next", "›", true, cx))
                }),
        )
        .child(
            v_flex()
                .items_center()
                .gap(px(2.0))
                .child(
                    div()
                        .text_lg()
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(hsla(0.0, 0.0, 1.0, 1.0))
                        .child(artwork.title.clone()),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(hsla(0.0, 0.0, 1.0, 0.7))
                        .child(format!("{} — {}", artwork.caption(), artwork.size)),
                ),
        );

    Some(render_modal_backdrop(
        "lightbox-backdrop",
        hsla(0.0, 0.0, 0.05, LIGHTBOX_BACKDROP_OPACITY),
        cx,
        |this, _, _, _| this.lightbox.backdrop_clicked = true,
        |this, _, _, cx| {
            if this.lightbox.backdrop_clicked {
                this.lightbox.backdrop_clicked = false;
                this.close_lightbox(cx);
            }
        },
        content,
    ))
}

fn lightbox_nav_button(
    id: &'static str,
    glyph: &'static str,
    next: bool,
    cx: &mut Context<Atelier>,
) -> Stateful<Div> {
    div()
        .id(id)
        .w(px(48.0))
        .h(px(48.0))
        .rounded_full()
        .border_1()
        .border_color(hsla(0.0, 0.0, 1.0, 0.4))
        .flex()
        .items_center()
        .justify_center()
        .text_xl()
        .text_color(hsla(0.0, 0.0, 1.0, 0.9))
        .cursor_pointer()
        .hover(|s| s.border_color(hsla(0.0, 0.0, 1.0, 0.9)))
        .child(glyph)
        .on_click(cx.listener(move |this, _, _, cx| {
            if next {
                this.lightbox_next(cx);
            } else {
                this.lightbox_prev(cx);
            }
        }))
}
