use super::types::{Location, Size};

/// True when `target` lies inside the window's span of the world on both axes, edges included.
pub(crate) fn is_visible(target: Location, scroll: Location, window: Size) -> bool {
    let within = |t: i32, s: i32, extent: i32| t >= s && t <= s + extent;
    within(target.x, scroll.x, window.width) && within(target.y, scroll.y, window.height)
}

pub(crate) fn screen_position(target: Location, scroll: Location) -> Location {
    Location::new(target.x - scroll.x, target.y - scroll.y)
}

/// Strict test: a distance of exactly `radius` on either axis is not an arrival.
pub(crate) fn within_radius(a: Location, b: Location, radius: f32) -> bool {
    let dx = (a.x - b.x).abs() as f32;
    let dy = (a.y - b.y).abs() as f32;
    dx < radius && dy < radius
}

/// Whether the character, at screen position `character`, has reached the world-space `target`.
pub(crate) fn has_arrived(
    character: Location,
    target: Location,
    scroll: Location,
    window: Size,
    radius: f32,
) -> bool {
    is_visible(target, scroll, window)
        && within_radius(character, screen_position(target, scroll), radius)
}
