//! Rendering - the application shell and both views.
//!
//! ## Modules
//!
//! - `carousel` - The featured-works track on the home view
//! - `gallery` - Filter bar, artwork grid, and CTA block
//! - `overlays` - Lightbox and enquiry modal
//! - `toasts` - Transient notification stack

pub mod carousel;
pub mod gallery;
pub mod overlays;
pub mod toasts;

use crate::app::Atelier;
use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, PADDING_LG};
use crate::types::AppView;
use gpui::*;
use gpui_component::{h_flex, ActiveTheme as _};

impl Render for Atelier {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Keep the frame loop alive while anything is animating
        if self.needs_frames() {
            self.request_frame(window, cx);
        }

        let view = self.navigation.view;

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .on_scroll_wheel(cx.listener(Self::handle_scroll))
            .on_key_down(cx.listener(Self::handle_key_down))
            .child(render_header(view, cx))
            .child(match view {
                AppView::Home => carousel::render_home(self, cx).into_any_element(),
                AppView::Gallery => gallery::render_gallery(self, cx).into_any_element(),
            })
            .child(render_footer(cx))
            .children(overlays::lightbox::render_lightbox(self, cx))
            .children(overlays::enquiry::render_enquiry_modal(self, window, cx))
            .child(toasts::render_toasts(self, cx))
    }
}

/// Render a header nav link.
fn nav_link(
    id: &'static str,
    label: &'static str,
    active: bool,
    on_click: impl Fn(&mut Atelier, &mut Window, &mut Context<Atelier>) + 'static,
    cx: &Context<Atelier>,
) -> Stateful<Div> {
    let fg = if active {
        cx.theme().foreground
    } else {
        cx.theme().muted_foreground
    };
    let underline = if active {
        cx.theme().foreground
    } else {
        cx.theme().transparent
    };

    div()
        .id(id)
        .px(px(12.0))
        .py(px(6.0))
        .border_b_2()
        .border_color(underline)
        .text_sm()
        .text_color(fg)
        .cursor_pointer()
        .hover(|s| s.text_color(cx.theme().foreground))
        .on_click(cx.listener(move |this, _, window, cx| on_click(this, window, cx)))
}

fn render_header(view: AppView, cx: &Context<Atelier>) -> impl IntoElement {
    h_flex()
        .w_full()
        .h(px(HEADER_HEIGHT))
        .px(px(PADDING_LG * 2.0))
        .items_center()
        .justify_between()
        .border_b_1()
        .border_color(cx.theme().border)
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::BOLD)
                .child("ATELIER"),
        )
        .child(
            h_flex()
                .gap(px(8.0))
                .child(nav_link(
                    "nav-home",
                    "Home",
                    view == AppView::Home,
                    |this, _, cx| this.show_home(cx),
                    cx,
                ))
                .child(nav_link(
                    "nav-gallery",
                    "Gallery",
                    view == AppView::Gallery,
                    |this, _, cx| this.show_gallery(cx),
                    cx,
                )),
        )
}

fn render_footer(cx: &Context<Atelier>) -> impl IntoElement {
    h_flex()
        .w_full()
        .h(px(FOOTER_HEIGHT))
        .px(px(PADDING_LG * 2.0))
        .items_center()
        .justify_between()
        .border_t_1()
        .border_color(cx.theme().border)
        .child(
            div()
                .text_xs()
                .text_color(cx.theme().muted_foreground)
                .child("© 2026 Atelier — all works by the artist"),
        )
        .child(
            div()
                .text_xs()
                .text_color(cx.theme().muted_foreground)
                .child("Originals and commissions"),
        )
}
