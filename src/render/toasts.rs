//! Toast rendering - bottom-right notification stack.

use crate::app::Atelier;
use crate::constants::{BORDER_RADIUS_MD, PADDING_MD};
use crate::notifications::ToastLevel;
use gpui::*;
use gpui_component::{v_flex, ActiveTheme as _};

pub fn render_toasts(app: &Atelier, cx: &Context<Atelier>) -> impl IntoElement {
    let mut stack = v_flex()
        .absolute()
        .bottom(px(48.0))
        .right(px(24.0))
        .gap(px(8.0))
        .items_end();

    for toast in app.ui.toast_manager.active() {
        let accent = match toast.level {
            ToastLevel::Info => cx.theme().primary,
            ToastLevel::Success => cx.theme().success,
            ToastLevel::Warning => cx.theme().warning,
            ToastLevel::Error => cx.theme().danger,
        };

        stack = stack.child(
            div()
                .px(px(PADDING_MD))
                .py(px(8.0))
                .bg(cx.theme().background)
                .border_l_2()
                .border_color(accent)
                .rounded(px(BORDER_RADIUS_MD))
                .shadow_md()
                .text_sm()
                .child(toast.message.clone()),
        );
    }

    stack
}
