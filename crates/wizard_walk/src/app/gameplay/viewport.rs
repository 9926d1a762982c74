use super::types::{Axis, AxisDirection, Facing, Location, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ViewportConfig {
    /// Pulls the dead-zone reference point up and left of the true window center.
    pub(crate) center_bias: i32,
    /// Closest the character may get to the far window edge once the world stops scrolling.
    pub(crate) edge_margin: i32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            center_bias: 40,
            edge_margin: 75,
        }
    }
}

/// One axis of viewport state: the character's screen coordinate and the world scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AxisState {
    pub(crate) character: i32,
    pub(crate) scroll: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AxisLimits {
    pub(crate) world_extent: i32,
    pub(crate) window_extent: i32,
    pub(crate) center: i32,
    pub(crate) edge_margin: i32,
}

impl AxisLimits {
    pub(crate) fn scroll_max(&self) -> i32 {
        scroll_max(self.world_extent, self.window_extent)
    }
}

pub(crate) fn scroll_max(world_extent: i32, window_extent: i32) -> i32 {
    (world_extent - window_extent).max(0)
}

pub(crate) fn window_center(window: Size, config: &ViewportConfig) -> Location {
    Location::new(
        window.width / 2 - config.center_bias,
        window.height / 2 - config.center_bias,
    )
}

/// Applies one fixed step along an axis, either to the character or to the scroll, never both.
pub(crate) fn step_axis(
    state: AxisState,
    limits: AxisLimits,
    direction: AxisDirection,
    speed: i32,
) -> AxisState {
    let AxisState {
        mut character,
        mut scroll,
    } = state;
    let scroll_max = limits.scroll_max();
    let scroll_at_max = scroll >= scroll_max;

    match direction {
        AxisDirection::Decreasing => {
            if character > 0 {
                let in_near_zone = character <= limits.center && scroll == 0;
                let in_far_zone = character > limits.center && scroll_at_max;
                if in_near_zone || in_far_zone {
                    character -= speed;
                } else if scroll > 0 {
                    scroll -= speed;
                }
            }
        }
        AxisDirection::Increasing => {
            let before_center = character < limits.center;
            let far_edge_room =
                scroll_at_max && character < limits.window_extent - limits.edge_margin;
            if before_center || far_edge_room {
                character += speed;
            } else if scroll < scroll_max {
                scroll += speed;
            }
        }
    }

    AxisState {
        character: character.clamp(0, limits.world_extent.max(0)),
        scroll: scroll.clamp(0, scroll_max),
    }
}

/// Fixed window over a scrollable world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Viewport {
    pub(crate) window: Size,
    pub(crate) config: ViewportConfig,
    pub(crate) walk_speed: i32,
}

impl Viewport {
    pub(crate) fn center(&self) -> Location {
        window_center(self.window, &self.config)
    }

    pub(crate) fn step(
        &self,
        facing: Facing,
        character: &mut Location,
        scroll: &mut Location,
        world: Size,
    ) {
        let axis = facing.axis();
        let limits = self.limits(axis, world);
        let next = step_axis(
            AxisState {
                character: character.get(axis),
                scroll: scroll.get(axis),
            },
            limits,
            facing.direction(),
            self.walk_speed,
        );
        character.set(axis, next.character);
        scroll.set(axis, next.scroll);
    }

    fn limits(&self, axis: Axis, world: Size) -> AxisLimits {
        AxisLimits {
            world_extent: world.extent(axis),
            window_extent: self.window.extent(axis),
            center: self.center().get(axis),
            edge_margin: self.config.edge_margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    const WINDOW: Size = Size::new(640, 480);
    const WORLD: Size = Size::new(2000, 1500);

    fn viewport() -> Viewport {
        Viewport {
            window: WINDOW,
            config: ViewportConfig::default(),
            walk_speed: 5,
        }
    }

    fn x_limits() -> AxisLimits {
        AxisLimits {
            world_extent: WORLD.width,
            window_extent: WINDOW.width,
            center: 280,
            edge_margin: 75,
        }
    }

    #[test]
    fn window_center_applies_bias() {
        assert_eq!(viewport().center(), Location::new(280, 200));
    }

    #[test]
    fn scroll_max_is_zero_for_small_worlds() {
        assert_eq!(scroll_max(2000, 640), 1360);
        assert_eq!(scroll_max(300, 640), 0);
    }

    #[test]
    fn holding_right_moves_then_scrolls_then_moves() {
        let viewport = viewport();
        let mut character = Location::default();
        let mut scroll = Location::default();
        let mut trace = Vec::new();

        for _ in 0..2000 {
            viewport.step(Facing::Right, &mut character, &mut scroll, WORLD);
            trace.push((character.x, scroll.x));
        }

        // Phase 1: character walks to the dead-zone edge with no scroll.
        assert!(trace
            .iter()
            .take_while(|(_, s)| *s == 0)
            .all(|(c, _)| *c <= 280));
        let first_scroll = trace
            .iter()
            .position(|(_, s)| *s > 0)
            .expect("world scrolls");
        assert_eq!(trace[first_scroll - 1], (280, 0));
        assert_eq!(first_scroll, 56);

        // Phase 2: scroll runs to its maximum with the character pinned.
        let scroll_done = trace
            .iter()
            .position(|(_, s)| *s == 1360)
            .expect("scroll reaches max");
        assert!(trace[first_scroll..=scroll_done]
            .iter()
            .all(|(c, _)| *c == 280));

        // Phase 3: character resumes toward the far margin and stops there.
        assert_eq!(trace[scroll_done + 1], (285, 1360));
        assert_eq!(*trace.last().expect("trace"), (565, 1360));
        assert_eq!((character.y, scroll.y), (0, 0));
    }

    #[test]
    fn holding_down_moves_then_scrolls_then_moves() {
        let viewport = viewport();
        let mut character = Location::default();
        let mut scroll = Location::default();
        let mut trace = Vec::new();

        for _ in 0..1500 {
            viewport.step(Facing::Down, &mut character, &mut scroll, WORLD);
            trace.push((character.y, scroll.y));
        }

        let first_scroll = trace
            .iter()
            .position(|(_, s)| *s > 0)
            .expect("world scrolls");
        assert_eq!(first_scroll, 40);
        assert_eq!(trace[first_scroll - 1], (200, 0));

        let scroll_done = trace
            .iter()
            .position(|(_, s)| *s == 1020)
            .expect("scroll reaches max");
        assert_eq!(scroll_done, first_scroll + 203);
        assert!(trace[first_scroll..=scroll_done]
            .iter()
            .all(|(c, _)| *c == 200));

        assert_eq!(trace[scroll_done + 1], (205, 1020));
        assert_eq!(*trace.last().expect("trace"), (405, 1020));
        assert_eq!((character.x, scroll.x), (0, 0));
    }

    #[test]
    fn holding_left_from_far_side_reverses_the_sequence() {
        let viewport = viewport();
        let mut character = Location::new(565, 0);
        let mut scroll = Location::new(1360, 0);

        for _ in 0..57 {
            viewport.step(Facing::Left, &mut character, &mut scroll, WORLD);
        }
        assert_eq!((character.x, scroll.x), (280, 1360));

        viewport.step(Facing::Left, &mut character, &mut scroll, WORLD);
        assert_eq!((character.x, scroll.x), (280, 1355));

        for _ in 0..2000 {
            viewport.step(Facing::Left, &mut character, &mut scroll, WORLD);
        }
        assert_eq!((character.x, scroll.x), (0, 0));
    }

    #[test]
    fn decreasing_at_zero_is_a_no_op() {
        let state = AxisState {
            character: 0,
            scroll: 500,
        };
        let next = step_axis(state, x_limits(), AxisDirection::Decreasing, 5);
        assert_eq!(next, state);
    }

    #[test]
    fn increasing_stops_at_far_margin_when_fully_scrolled() {
        let state = AxisState {
            character: 565,
            scroll: 1360,
        };
        let next = step_axis(state, x_limits(), AxisDirection::Increasing, 5);
        assert_eq!(next, state);
    }

    #[test]
    fn small_world_never_scrolls() {
        let limits = AxisLimits {
            world_extent: 300,
            window_extent: 640,
            center: 280,
            edge_margin: 75,
        };
        let mut state = AxisState {
            character: 0,
            scroll: 0,
        };
        for _ in 0..500 {
            state = step_axis(state, limits, AxisDirection::Increasing, 5);
            assert_eq!(state.scroll, 0);
            assert!(state.character <= 300);
        }
        assert_eq!(state.character, 300);
    }

    #[test]
    fn random_walks_never_move_both_and_stay_in_bounds() {
        let viewport = viewport();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let facings = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

        for _ in 0..50 {
            let mut character = Location::default();
            let mut scroll = Location::default();
            for _ in 0..2000 {
                let facing = facings[rng.random_range(0..facings.len())];
                let before = (character, scroll);
                viewport.step(facing, &mut character, &mut scroll, WORLD);

                let character_moved = character != before.0;
                let scroll_moved = scroll != before.1;
                assert!(!(character_moved && scroll_moved));

                assert!((0..=WORLD.width).contains(&character.x));
                assert!((0..=WORLD.height).contains(&character.y));
                assert!((0..=WORLD.width - WINDOW.width).contains(&scroll.x));
                assert!((0..=WORLD.height - WINDOW.height).contains(&scroll.y));
            }
        }
    }
}
