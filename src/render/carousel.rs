//! Home view rendering - hero block and the featured-works carousel.
//!
//! The carousel is a hot path: every drag move repaints the track. Cards
//! fully outside the viewport are culled, and all per-card math (stagger,
//! caption fade) is O(1) derived from the track's progress.

use crate::app::Atelier;
use crate::carousel::{caption_opacity, stagger_offset, ScrollDirection};
use crate::constants::{
    BORDER_RADIUS_SM, CAPTION_BLOCK_WIDTH, CARD_GAP, CARD_HEIGHT, CARD_WIDTH, HERO_HEIGHT,
    PADDING_LG, TRACK_END_PADDING, VIEW_ALL_CARD_HEIGHT, VIEW_ALL_CARD_WIDTH,
};
use crate::profile_scope;
use crate::types::Artwork;
use gpui::*;
use gpui_component::{h_flex, v_flex, ActiveTheme as _};

/// Margin around the viewport before cards are culled (prevents pop-in)
const CULLING_MARGIN: f32 = 100.0;

/// Total width of the carousel track content for the given card count.
pub fn track_content_width(card_count: usize) -> f32 {
    CAPTION_BLOCK_WIDTH
        + CARD_GAP
        + card_count as f32 * (CARD_WIDTH + CARD_GAP)
        + VIEW_ALL_CARD_WIDTH
        + TRACK_END_PADDING
}

pub fn render_home(app: &Atelier, cx: &mut Context<Atelier>) -> impl IntoElement {
    v_flex()
        .flex_1()
        .min_h_0()
        .child(render_hero(cx))
        .child(render_carousel_section(app, cx))
}

fn render_hero(cx: &Context<Atelier>) -> impl IntoElement {
    v_flex()
        .w_full()
        .h(px(HERO_HEIGHT))
        .px(px(PADDING_LG * 2.0))
        .py(px(PADDING_LG))
        .gap(px(8.0))
        .justify_center()
        .child(
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .child("Paintings, sculpture and works on paper"),
        )
        .child(
            div()
                .text_sm()
                .text_color(cx.theme().muted_foreground)
                .child("A studio practice exploring color, sediment and light."),
        )
        .child(
            div()
                .id("hero-cta")
                .mt(px(8.0))
                .px(px(16.0))
                .py(px(8.0))
                .w(px(180.0))
                .border_2()
                .border_color(cx.theme().foreground)
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .text_center()
                .cursor_pointer()
                .hover(|s| s.bg(cx.theme().muted))
                .child("Explore Gallery")
                .on_click(cx.listener(|this, _, _, cx| this.show_gallery(cx))),
        )
}

fn render_carousel_section(app: &Atelier, cx: &mut Context<Atelier>) -> impl IntoElement {
    let featured = app.featured_artworks();
    let dragging = app.carousel.track.is_dragging();

    v_flex()
        .flex_1()
        .min_h_0()
        .track_focus(&app.system.carousel_focus)
        .on_key_down(cx.listener(Atelier::handle_carousel_key_down))
        // Heading row with nav buttons
        .child(
            h_flex()
                .w_full()
                .px(px(PADDING_LG * 2.0))
                .items_center()
                .justify_between()
                .child(
                    div()
                        .text_2xl()
                        .font_weight(FontWeight::BOLD)
                        .child("Selected Works"),
                )
                .child(
                    h_flex()
                        .gap(px(12.0))
                        .child(nav_button("carousel-prev", "‹", ScrollDirection::Left, cx))
                        .child(nav_button("carousel-next", "›", ScrollDirection::Right, cx)),
                ),
        )
        // Drag hint
        .child(
            div()
                .px(px(PADDING_LG * 2.0))
                .text_xs()
                .italic()
                .text_color(cx.theme().muted_foreground)
                .child("Drag to explore or use arrows"),
        )
        .child(render_track(app, &featured, dragging, cx))
}

fn nav_button(
    id: &'static str,
    glyph: &'static str,
    direction: ScrollDirection,
    cx: &Context<Atelier>,
) -> Stateful<Div> {
    div()
        .id(id)
        .w(px(44.0))
        .h(px(44.0))
        .border_2()
        .border_color(cx.theme().border)
        .flex()
        .items_center()
        .justify_center()
        .text_lg()
        .cursor_pointer()
        .hover(|s| s.border_color(cx.theme().foreground))
        .child(glyph)
        .on_click(cx.listener(move |this, _, window, cx| {
            this.scroll_carousel(direction, window, cx);
        }))
}

fn render_track(
    app: &Atelier,
    featured: &[Artwork],
    dragging: bool,
    cx: &mut Context<Atelier>,
) -> impl IntoElement {
    profile_scope!("render_track");

    let tuning = app.settings.data.tuning.clone();
    let offset = app.carousel.track.offset();
    let progress = app.carousel.track.progress();
    let content_width = track_content_width(featured.len());
    let viewport_width = app
        .carousel
        .region
        .map(|r| f32::from(r.size.width))
        .unwrap_or(f32::MAX);

    // Capture the track's bounds at layout: the region is what mouse
    // handlers hit-test against, and the width feeds the track's extents.
    let entity = cx.entity();
    let measure = canvas(
        move |bounds, _window, cx| {
            entity.update(cx, |this, _| {
                this.carousel.region = Some(bounds);
                this.carousel
                    .track
                    .set_extents(content_width, f32::from(bounds.size.width));
            });
        },
        |_, _, _, _| {},
    )
    .absolute()
    .size_full();

    // Cards converge from their staggered start; reserve headroom so the
    // upward-shifted ones stay inside the clip rect.
    let base_y = tuning.stagger_amount;

    let mut cards: Vec<AnyElement> = Vec::with_capacity(featured.len() + 2);

    // Intro caption scrolls with the track and fades with progress
    let opacity = caption_opacity(progress, tuning.caption_fade_end);
    cards.push(
        v_flex()
            .absolute()
            .left(px(PADDING_LG * 2.0 - offset))
            .top(px(base_y + 40.0))
            .w(px(CAPTION_BLOCK_WIDTH - CARD_GAP))
            .opacity(opacity)
            .text_3xl()
            .font_weight(FontWeight::EXTRA_BOLD)
            .child("CONTEMPORARY")
            .child("ABSTRACT")
            .child("ART")
            .into_any_element(),
    );

    for (i, artwork) in featured.iter().enumerate() {
        let x = CAPTION_BLOCK_WIDTH + CARD_GAP + i as f32 * (CARD_WIDTH + CARD_GAP) - offset;

        // Viewport culling: skip cards completely outside the visible area
        if x + CARD_WIDTH < -CULLING_MARGIN || x > viewport_width + CULLING_MARGIN {
            continue;
        }

        let y = base_y
            + stagger_offset(
                i,
                progress,
                tuning.stagger_amount,
                tuning.stagger_converge_end,
            );
        cards.push(render_card(artwork, x, y, cx).into_any_element());
    }

    // Trailing "View All Works" card
    let view_all_x = CAPTION_BLOCK_WIDTH
        + CARD_GAP
        + featured.len() as f32 * (CARD_WIDTH + CARD_GAP)
        - offset;
    if view_all_x <= viewport_width + CULLING_MARGIN {
        cards.push(render_view_all_card(view_all_x, base_y, cx).into_any_element());
    }

    div()
        .id("carousel-track")
        .relative()
        .flex_1()
        .min_h_0()
        .overflow_hidden()
        .cursor(if dragging {
            CursorStyle::ClosedHand
        } else {
            CursorStyle::OpenHand
        })
        .child(measure)
        .children(cards)
}

fn render_card(artwork: &Artwork, x: f32, y: f32, cx: &Context<Atelier>) -> impl IntoElement {
    let (dw, dh) = artwork.display_size();
    let image_height = (CARD_WIDTH * dh / dw).min(CARD_HEIGHT);

    v_flex()
        .absolute()
        .left(px(x))
        .top(px(y))
        .w(px(CARD_WIDTH))
        .gap(px(12.0))
        .child(
            div()
                .w_full()
                .h(px(image_height))
                .bg(cx.theme().muted)
                .rounded(px(BORDER_RADIUS_SM))
                .overflow_hidden()
                .child(
                    img(artwork.src.clone())
                        .size_full()
                        .object_fit(ObjectFit::Cover),
                ),
        )
        .child(
            v_flex()
                .gap(px(2.0))
                .child(
                    div()
                        .text_lg()
                        .font_weight(FontWeight::MEDIUM)
                        .child(artwork.title.clone()),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child(artwork.caption()),
                ),
        )
}

fn render_view_all_card(x: f32, y: f32, cx: &Context<Atelier>) -> impl IntoElement {
    div()
        .id("view-all-card")
        .absolute()
        .left(px(x))
        .top(px(y))
        .w(px(VIEW_ALL_CARD_WIDTH))
        .h(px(VIEW_ALL_CARD_HEIGHT))
        .border_2()
        .border_color(cx.theme().border)
        .bg(cx.theme().muted.opacity(0.4))
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .gap(px(16.0))
        .cursor_pointer()
        .hover(|s| s.bg(cx.theme().muted))
        .child(
            v_flex()
                .items_center()
                .text_2xl()
                .font_weight(FontWeight::BOLD)
                .child("View All")
                .child("Works"),
        )
        .child(
            div()
                .text_sm()
                .text_color(cx.theme().muted_foreground)
                .child("Explore Gallery →"),
        )
        .on_click(cx.listener(|this, _, _, cx| this.show_gallery(cx)))
}
