//! Gallery view rendering - filter bar, artwork grid, and CTA block.

use crate::app::Atelier;
use crate::constants::{
    BORDER_RADIUS_SM, GRID_GAP, GRID_MIN_COLUMN_WIDTH, PADDING_LG,
};
use crate::types::{Artwork, CategoryFilter};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{h_flex, v_flex, ActiveTheme as _};

pub fn render_gallery(app: &Atelier, cx: &mut Context<Atelier>) -> impl IntoElement {
    let visible = app.visible_artworks();

    v_flex()
        .id("gallery-view")
        .flex_1()
        .min_h_0()
        .overflow_y_scroll()
        .px(px(PADDING_LG * 2.0))
        .py(px(PADDING_LG))
        .gap(px(PADDING_LG))
        .child(
            v_flex()
                .gap(px(4.0))
                .child(
                    div()
                        .text_xs()
                        .text_color(cx.theme().muted_foreground)
                        .child("THE COLLECTION"),
                )
                .child(
                    div()
                        .text_3xl()
                        .font_weight(FontWeight::BOLD)
                        .child("All Works"),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child("Original pieces across painting, sculpture and digital media."),
                ),
        )
        .child(render_filter_bar(app, cx))
        .child(render_grid(&visible, cx))
        .when(visible.is_empty(), |this| {
            this.child(
                div()
                    .w_full()
                    .py(px(60.0))
                    .text_center()
                    .text_lg()
                    .text_color(cx.theme().muted_foreground)
                    .child("No artworks found in this category."),
            )
        })
        .child(render_cta(cx))
}

fn render_filter_bar(app: &Atelier, cx: &mut Context<Atelier>) -> impl IntoElement {
    let mut filters = vec![CategoryFilter::All];
    filters.extend(
        app.gallery
            .catalog
            .categories()
            .into_iter()
            .map(CategoryFilter::Category),
    );

    let mut bar = h_flex().flex_wrap().gap(px(8.0));
    for filter in filters {
        let selected = app.gallery.filter == filter;
        let label = filter.label().to_string();
        let (fg, underline) = if selected {
            (cx.theme().foreground, cx.theme().foreground)
        } else {
            (cx.theme().muted_foreground, cx.theme().transparent)
        };

        bar = bar.child(
            div()
                .id(ElementId::Name(format!("filter-{}", label).into()))
                .px(px(16.0))
                .py(px(6.0))
                .border_b_2()
                .border_color(underline)
                .text_sm()
                .text_color(fg)
                .cursor_pointer()
                .hover(|s| s.text_color(cx.theme().foreground))
                .child(label)
                .on_click(cx.listener(move |this, _, _, cx| {
                    this.select_filter(filter.clone(), cx);
                })),
        );
    }
    bar
}

fn render_grid(visible: &[Artwork], cx: &mut Context<Atelier>) -> impl IntoElement {
    let mut grid = h_flex().flex_wrap().items_start().gap(px(GRID_GAP));
    for (index, artwork) in visible.iter().enumerate() {
        grid = grid.child(render_grid_card(artwork, index, cx));
    }
    grid
}

fn render_grid_card(artwork: &Artwork, index: usize, cx: &mut Context<Atelier>) -> impl IntoElement {
    let artwork_id = artwork.id;
    let (dw, dh) = artwork.display_size();
    let image_height = GRID_MIN_COLUMN_WIDTH * dh / dw;

    v_flex()
        .w(px(GRID_MIN_COLUMN_WIDTH))
        .gap(px(10.0))
        // Image opens the lightbox
        .child(
            div()
                .id(ElementId::Name(format!("art-{}", artwork_id).into()))
                .w_full()
                .h(px(image_height))
                .bg(cx.theme().muted)
                .rounded(px(BORDER_RADIUS_SM))
                .overflow_hidden()
                .cursor_pointer()
                .child(
                    img(artwork.src.clone())
                        .size_full()
                        .object_fit(ObjectFit::Cover),
                )
                .on_click(cx.listener(move |this, _, window, cx| {
                    this.open_lightbox(index, window, cx);
                })),
        )
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::MEDIUM)
                .child(artwork.title.clone()),
        )
        .child(detail_row("Year", artwork.year.clone(), cx))
        .child(detail_row("Medium", artwork.medium.clone(), cx))
        .child(detail_row("Size", artwork.size.clone(), cx))
        .child(detail_row("Series", artwork.series.clone(), cx))
        .child(
            h_flex()
                .gap(px(8.0))
                .mt(px(4.0))
                .child(
                    div()
                        .id(ElementId::Name(format!("view-{}", artwork_id).into()))
                        .flex_1()
                        .py(px(6.0))
                        .border_2()
                        .border_color(cx.theme().border)
                        .text_sm()
                        .text_center()
                        .cursor_pointer()
                        .hover(|s| s.border_color(cx.theme().foreground))
                        .child("View Details")
                        .on_click(cx.listener(move |this, _, window, cx| {
                            this.open_lightbox(index, window, cx);
                        })),
                )
                .child(
                    div()
                        .id(ElementId::Name(format!("enquire-{}", artwork_id).into()))
                        .flex_1()
                        .py(px(6.0))
                        .bg(cx.theme().primary)
                        .text_sm()
                        .text_center()
                        .text_color(cx.theme().primary_foreground)
                        .cursor_pointer()
                        .hover(|s| s.opacity(0.9))
                        .child("Enquire")
                        .on_click(cx.listener(move |this, _, window, cx| {
                            this.open_enquiry(artwork_id, window, cx);
                        })),
                ),
        )
}

fn detail_row(label: &'static str, value: String, cx: &Context<Atelier>) -> impl IntoElement {
    h_flex()
        .w_full()
        .justify_between()
        .text_sm()
        .child(div().text_color(cx.theme().muted_foreground).child(label))
        .child(div().child(value))
}

fn render_cta(cx: &mut Context<Atelier>) -> impl IntoElement {
    v_flex()
        .w_full()
        .py(px(40.0))
        .items_center()
        .gap(px(12.0))
        .child(
            div()
                .text_2xl()
                .font_weight(FontWeight::BOLD)
                .child("Interested in a piece?"),
        )
        .child(
            div()
                .text_sm()
                .text_color(cx.theme().muted_foreground)
                .max_w(px(520.0))
                .text_center()
                .child(
                    "Each artwork is available for purchase or commission. \
                     Get in touch to discuss pricing, shipping, or a custom piece.",
                ),
        )
        .child(
            h_flex()
                .gap(px(12.0))
                .child(
                    div()
                        .id("cta-contact")
                        .px(px(24.0))
                        .py(px(10.0))
                        .bg(cx.theme().primary)
                        .text_sm()
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(cx.theme().primary_foreground)
                        .cursor_pointer()
                        .hover(|s| s.opacity(0.9))
                        .child("Contact Artist")
                        .on_click(cx.listener(|this, _, window, cx| {
                            this.contact_artist(window, cx);
                        })),
                )
                .child(
                    div()
                        .id("cta-home")
                        .px(px(24.0))
                        .py(px(10.0))
                        .border_2()
                        .border_color(cx.theme().foreground)
                        .text_sm()
                        .font_weight(FontWeight::MEDIUM)
                        .cursor_pointer()
                        .hover(|s| s.bg(cx.theme().muted))
                        .child("Back to Home")
                        .on_click(cx.listener(|this, _, _, cx| this.show_home(cx))),
                ),
        )
}
