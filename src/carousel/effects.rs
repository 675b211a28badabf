//! Progress-driven visual effects - pure functions of carousel progress.
//!
//! These are recomputed on every offset change, including mid-drag, so the
//! caption fade and card stagger follow the gesture in real time. No hidden
//! state: each is O(1) per call and cheap enough to re-derive every frame.

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Opacity of the intro caption: fully visible at progress 0, fully
/// transparent once progress reaches `fade_end`, unchanged thereafter.
pub fn caption_opacity(progress: f32, fade_end: f32) -> f32 {
    if fade_end <= 0.0 {
        return if progress > 0.0 { 0.0 } else { 1.0 };
    }
    1.0 - clamp01(progress / fade_end)
}

/// Initial vertical displacement for the card at `index`: even cards start
/// shifted up, odd cards down, alternating along the track.
pub fn initial_stagger(index: usize, amount: f32) -> f32 {
    if index % 2 == 0 { -amount } else { amount }
}

/// Vertical displacement for the card at `index` at the given progress.
///
/// Cards converge from their staggered start to the baseline by the time
/// progress reaches `converge_end`.
pub fn stagger_offset(index: usize, progress: f32, amount: f32, converge_end: f32) -> f32 {
    let t = if converge_end <= 0.0 {
        1.0
    } else {
        clamp01(progress / converge_end)
    };
    lerp(initial_stagger(index, amount), 0.0, t)
}
