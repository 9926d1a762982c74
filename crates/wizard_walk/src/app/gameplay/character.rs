use walk_engine::{Image, InputSnapshot, Key};

use super::types::{Facing, Location};
use super::viewport::Viewport;
use super::world::World;

fn walk_facing(key: Key) -> Option<Facing> {
    match key {
        Key::Up => Some(Facing::Up),
        Key::Down => Some(Facing::Down),
        Key::Left => Some(Facing::Left),
        Key::Right => Some(Facing::Right),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub(crate) struct DirectionalSprites {
    pub(crate) up: Image,
    pub(crate) down: Image,
    pub(crate) left: Image,
    pub(crate) right: Image,
}

impl DirectionalSprites {
    /// Same image for every facing.
    pub(crate) fn uniform(image: Image) -> Self {
        Self {
            up: image.clone(),
            down: image.clone(),
            left: image.clone(),
            right: image,
        }
    }

    pub(crate) fn for_facing(&self, facing: Facing) -> &Image {
        match facing {
            Facing::Up => &self.up,
            Facing::Down => &self.down,
            Facing::Left => &self.left,
            Facing::Right => &self.right,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Character {
    sprites: DirectionalSprites,
    pub(crate) loc: Location,
    pub(crate) facing: Facing,
}

impl Character {
    pub(crate) fn new(sprites: DirectionalSprites, loc: Location) -> Self {
        Self {
            sprites,
            loc,
            facing: Facing::default(),
        }
    }

    pub(crate) fn sprite(&self) -> &Image {
        self.sprites.for_facing(self.facing)
    }

    /// Applies every held direction key once, in Up, Down, Left, Right order.
    pub(crate) fn walk(&mut self, input: &InputSnapshot, world: &mut World, viewport: &Viewport) {
        let world_size = world.size();
        for facing in input.held_keys().filter_map(walk_facing) {
            self.facing = facing;
            viewport.step(facing, &mut self.loc, &mut world.scroll, world_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::gameplay::types::Size;
    use crate::app::gameplay::viewport::ViewportConfig;

    fn tagged_sprites() -> DirectionalSprites {
        DirectionalSprites {
            up: Image::solid(1, 1, [1, 0, 0, 255]),
            down: Image::solid(1, 1, [2, 0, 0, 255]),
            left: Image::solid(1, 1, [3, 0, 0, 255]),
            right: Image::solid(1, 1, [4, 0, 0, 255]),
        }
    }

    fn viewport() -> Viewport {
        Viewport {
            window: Size::new(640, 480),
            config: ViewportConfig::default(),
            walk_speed: 5,
        }
    }

    fn world() -> World {
        World::new(Image::solid(2000, 1500, [0, 0, 0, 255]))
    }

    #[test]
    fn held_key_sets_facing_and_moves() {
        let mut character = Character::new(tagged_sprites(), Location::new(100, 100));
        let mut world = world();
        let input = InputSnapshot::empty().with_key_down(Key::Left, true);

        character.walk(&input, &mut world, &viewport());

        assert_eq!(character.facing, Facing::Left);
        assert_eq!(character.loc, Location::new(95, 100));
        assert_eq!(character.sprite().pixel(0, 0), Some([3, 0, 0, 255]));
    }

    #[test]
    fn multiple_held_keys_apply_independently() {
        let mut character = Character::new(tagged_sprites(), Location::new(100, 100));
        let mut world = world();
        let input = InputSnapshot::empty()
            .with_key_down(Key::Down, true)
            .with_key_down(Key::Right, true);

        character.walk(&input, &mut world, &viewport());

        assert_eq!(character.loc, Location::new(105, 105));
        assert_eq!(character.facing, Facing::Right);
    }

    #[test]
    fn opposite_keys_cancel_out() {
        let mut character = Character::new(tagged_sprites(), Location::new(100, 100));
        let mut world = world();
        let input = InputSnapshot::empty()
            .with_key_down(Key::Up, true)
            .with_key_down(Key::Down, true);

        character.walk(&input, &mut world, &viewport());

        assert_eq!(character.loc, Location::new(100, 100));
        assert_eq!(character.facing, Facing::Down);
    }

    #[test]
    fn no_keys_leaves_facing_and_position() {
        let mut character = Character::new(tagged_sprites(), Location::new(10, 10));
        character.facing = Facing::Up;
        let mut world = world();

        character.walk(&InputSnapshot::empty(), &mut world, &viewport());

        assert_eq!(character.facing, Facing::Up);
        assert_eq!(character.loc, Location::new(10, 10));
    }

    #[test]
    fn uniform_sprites_share_one_image() {
        let sprites = DirectionalSprites::uniform(Image::solid(2, 2, [9, 9, 9, 255]));
        assert_eq!(sprites.for_facing(Facing::Up), sprites.for_facing(Facing::Right));
    }
}
