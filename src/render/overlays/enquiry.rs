//! Enquiry modal - artwork summary, contact form, validation feedback.

use super::modal_base::{field_label, render_modal_backdrop};
use crate::app::Atelier;
use crate::constants::{BORDER_RADIUS_MD, MODAL_BACKDROP_OPACITY, MODAL_WIDTH_MD, PADDING_LG};
use crate::enquiry::EnquiryField;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::input::{Input, InputState};
use gpui_component::{h_flex, v_flex, ActiveTheme as _};

pub fn render_enquiry_modal(
    app: &Atelier,
    _window: &mut Window,
    cx: &mut Context<Atelier>,
) -> Option<impl IntoElement> {
    let artwork_id = app.enquiry.artwork_id?;
    let artwork = app.gallery.catalog.get(artwork_id)?.clone();

    let name_input = app.enquiry.name_input.clone()?;
    let email_input = app.enquiry.email_input.clone()?;
    let phone_input = app.enquiry.phone_input.clone()?;
    let message_input = app.enquiry.message_input.clone()?;

    let muted_fg = cx.theme().muted_foreground;

    let modal = v_flex()
        .id("enquiry-modal")
        .w(px(MODAL_WIDTH_MD))
        .max_h(px(640.0))
        .bg(cx.theme().background)
        .border_1()
        .border_color(cx.theme().border)
        .rounded(px(BORDER_RADIUS_MD))
        .overflow_hidden()
        // Presses on the modal must not fall through to the backdrop
        .on_mouse_down(MouseButton::Left, cx.listener(|_, _, _, _| {}))
        .on_mouse_up(MouseButton::Left, cx.listener(|_, _, _, _| {}))
        // Header
        .child(
            h_flex()
                .w_full()
                .p(px(PADDING_LG))
                .items_center()
                .justify_between()
                .border_b_1()
                .border_color(cx.theme().border)
                .child(
                    div()
                        .text_xl()
                        .font_weight(FontWeight::BOLD)
                        .child("Enquiry Form"),
                )
                .child(
                    div()
                        .id("enquiry-close")
                        .w(px(32.0))
                        .h(px(32.0))
                        .flex()
                        .items_center()
                        .justify_center()
                        .cursor_pointer()
                        .hover(|s| s.bg(cx.theme().muted))
                        .child("✕")
                        .on_click(cx.listener(|this, _, _, cx| this.close_enquiry(cx))),
                ),
        )
        .child(
            v_flex()
                .id("enquiry-body")
                .flex_1()
                .min_h_0()
                .overflow_y_scroll()
                .p(px(PADDING_LG))
                .gap(px(PADDING_LG))
                // Artwork summary
                .child(
                    h_flex()
                        .w_full()
                        .p(px(12.0))
                        .gap(px(12.0))
                        .bg(cx.theme().muted.opacity(0.4))
                        .border_1()
                        .border_color(cx.theme().border)
                        .child(
                            div().w(px(72.0)).h(px(96.0)).bg(cx.theme().muted).child(
                                img(artwork.src.clone())
                                    .size_full()
                                    .object_fit(ObjectFit::Contain),
                            ),
                        )
                        .child(
                            v_flex()
                                .gap(px(2.0))
                                .text_sm()
                                .child(
                                    div()
                                        .text_lg()
                                        .font_weight(FontWeight::SEMIBOLD)
                                        .child(artwork.title.clone()),
                                )
                                .child(div().text_color(muted_fg).child(artwork.caption()))
                                .child(div().text_color(muted_fg).child(artwork.size.clone()))
                                .child(
                                    div().text_color(muted_fg).italic().child(artwork.series.clone()),
                                ),
                        ),
                )
                .child(form_field(
                    "NAME",
                    true,
                    &name_input,
                    Some(EnquiryField::Name),
                    app,
                    cx,
                ))
                .child(form_field(
                    "EMAIL",
                    true,
                    &email_input,
                    Some(EnquiryField::Email),
                    app,
                    cx,
                ))
                // Phone is optional and never fails validation
                .child(form_field("PHONE", false, &phone_input, None, app, cx))
                .child(form_field(
                    "MESSAGE",
                    false,
                    &message_input,
                    Some(EnquiryField::Message),
                    app,
                    cx,
                ))
                .child(checkbox_row(
                    "enquiry-newsletter",
                    "Receive newsletters about new works and exhibitions",
                    app.enquiry.form.newsletter,
                    |this, cx| this.toggle_newsletter(cx),
                    cx,
                ))
                .child(checkbox_row(
                    "enquiry-privacy",
                    "I agree to the Privacy Policy *",
                    app.enquiry.form.privacy_consent,
                    |this, cx| this.toggle_privacy_consent(cx),
                    cx,
                ))
                .child(field_error(EnquiryField::Privacy, app, cx))
                .child(
                    div()
                        .text_xs()
                        .text_color(muted_fg)
                        .child("* denotes required fields"),
                )
                // Submit
                .child(
                    div()
                        .id("enquiry-submit")
                        .w_full()
                        .py(px(12.0))
                        .bg(cx.theme().primary)
                        .text_sm()
                        .font_weight(FontWeight::MEDIUM)
                        .text_center()
                        .text_color(cx.theme().primary_foreground)
                        .cursor_pointer()
                        .hover(|s| s.opacity(0.9))
                        .child("SUBMIT ENQUIRY")
                        .on_click(cx.listener(|this, _, window, cx| {
                            this.submit_enquiry(window, cx);
                        })),
                ),
        );

    Some(render_modal_backdrop(
        "enquiry-backdrop",
        hsla(0.0, 0.0, 0.0, MODAL_BACKDROP_OPACITY),
        cx,
        |this, _, _, _| this.enquiry.backdrop_clicked = true,
        |this, _, _, cx| {
            if this.enquiry.backdrop_clicked {
                this.enquiry.backdrop_clicked = false;
                this.close_enquiry(cx);
            }
        },
        modal,
    ))
}

fn form_field(
    label: &'static str,
    required: bool,
    input: &Entity<InputState>,
    field: Option<EnquiryField>,
    app: &Atelier,
    cx: &mut Context<Atelier>,
) -> impl IntoElement {
    v_flex()
        .w_full()
        .gap(px(4.0))
        .child(field_label(label, required, cx.theme().muted_foreground))
        .child(Input::new(input))
        .when_some(field, |this, field| this.child(field_error(field, app, cx)))
}

/// First validation message for the given field, or an empty element.
fn field_error(field: EnquiryField, app: &Atelier, cx: &Context<Atelier>) -> Div {
    let message = app
        .enquiry
        .errors
        .iter()
        .find(|e| e.field() == field)
        .map(|e| e.to_string());

    div().when_some(message, |this, message| {
        this.text_xs().text_color(cx.theme().danger).child(message)
    })
}

fn checkbox_row(
    id: &'static str,
    label: &'static str,
    checked: bool,
    on_toggle: impl Fn(&mut Atelier, &mut Context<Atelier>) + 'static,
    cx: &mut Context<Atelier>,
) -> impl IntoElement {
    h_flex()
        .id(id)
        .w_full()
        .gap(px(8.0))
        .items_center()
        .cursor_pointer()
        .child(
            div()
                .w(px(16.0))
                .h(px(16.0))
                .border_2()
                .border_color(cx.theme().border)
                .flex()
                .items_center()
                .justify_center()
                .when(checked, |this| {
                    this.bg(cx.theme().primary)
                        .text_color(cx.theme().primary_foreground)
                        .text_xs()
                        .child("✓")
                }),
        )
        .child(div().text_sm().child(label))
        .on_click(cx.listener(move |this, _, _, cx| on_toggle(this, cx)))
}
