//! Movement domain: facing side and sprite orientation.

use crate::movement::{AnimationBridge, MovementFlags, Side};

/// Tracks the logical facing side and the side the sprite is currently drawn
/// toward. The two differ while wall sliding or climbing, where the sprite is
/// turned without changing `side`; landing copies the sprite back into `side`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FacingController {
    side: Side,
    sprite: Side,
}

impl FacingController {
    pub fn new(side: Side) -> Self {
        Self { side, sprite: side }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn sprite_side(&self) -> Side {
        self.sprite
    }

    /// Change the logical side and draw the sprite that way.
    pub fn face(&mut self, side: Side, anim: &mut impl AnimationBridge) {
        self.side = side;
        self.show(side, anim);
    }

    /// Draw the sprite toward `side` without changing the logical side.
    pub fn show(&mut self, side: Side, anim: &mut impl AnimationBridge) {
        if self.sprite != side {
            self.sprite = side;
            anim.flip(side);
        }
    }

    pub fn turn_around(&mut self, anim: &mut impl AnimationBridge) {
        self.face(self.side.opposite(), anim);
    }

    /// Take the side from whatever the sprite currently shows.
    pub fn resync_from_sprite(&mut self) {
        self.side = self.sprite;
    }

    /// Follow horizontal input unless movement is locked. Returns true if input
    /// set the side this tick.
    pub fn update_from_input(
        &mut self,
        x_axis: f32,
        deadzone: f32,
        flags: &MovementFlags,
        anim: &mut impl AnimationBridge,
    ) -> bool {
        if flags.movement_locked() || x_axis.abs() <= deadzone {
            return false;
        }

        match Side::from_sign(x_axis) {
            Some(side) => {
                self.face(side, anim);
                true
            }
            None => false,
        }
    }
}
