/// Pixel dimensions of a window or world surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Size {
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl Size {
    pub(crate) const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub(crate) fn extent(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Location {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Location {
    pub(crate) const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub(crate) fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub(crate) fn set(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Which way along an axis a step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AxisDirection {
    /// Toward 0 (up or left).
    Decreasing,
    /// Toward the far edge (down or right).
    Increasing,
}

impl Facing {
    pub(crate) fn axis(self) -> Axis {
        match self {
            Facing::Up | Facing::Down => Axis::Y,
            Facing::Left | Facing::Right => Axis::X,
        }
    }

    pub(crate) fn direction(self) -> AxisDirection {
        match self {
            Facing::Up | Facing::Left => AxisDirection::Decreasing,
            Facing::Down | Facing::Right => AxisDirection::Increasing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_maps_to_axis_and_direction() {
        assert_eq!(Facing::Up.axis(), Axis::Y);
        assert_eq!(Facing::Right.axis(), Axis::X);
        assert_eq!(Facing::Left.direction(), AxisDirection::Decreasing);
        assert_eq!(Facing::Down.direction(), AxisDirection::Increasing);
    }

    #[test]
    fn location_axis_accessors_round_trip() {
        let mut loc = Location::new(3, 9);
        loc.set(Axis::Y, 12);
        assert_eq!(loc.get(Axis::X), 3);
        assert_eq!(loc.get(Axis::Y), 12);
        assert_eq!(Size::new(640, 480).extent(Axis::Y), 480);
    }
}
