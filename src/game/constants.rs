use cgmath::Vector2;

use super::anim::SheetDesc;

// DIMENSIONING

/// The conversion factor from meters to pixels.
pub const PIXELS_PER_METER: f32 = 80.0;
/// The width of the visible game screen, in pixels.
pub const SCREEN_WIDTH: u32 = 1280;
/// The height of the visible game screen, in pixels.
pub const SCREEN_HEIGHT: u32 = 720;
/// The width of the visible game screen, in meters.
pub const PHYSICS_WIDTH: f32 = SCREEN_WIDTH as f32 / PIXELS_PER_METER;
/// The height of the visible game screen, in meters.
pub const PHYSICS_HEIGHT: f32 = SCREEN_HEIGHT as f32 / PIXELS_PER_METER;
/// The gravity vector bearing down upon all entities, in meters per second squared.
pub const GRAVITY: Vector2<f32> = Vector2 { x: 0.0, y: -10.0 };
/// The fixed simulation timestep, in seconds.
pub const TIME_STEP: f64 = 1.0 / 30.0;

// ANGLING

/// Conversion factor from degrees to radians.
pub const RADIANS_PER_DEGREE: f32 = std::f32::consts::PI / 180.0;
/// Conversion factor from radians to degrees.
pub const DEGREES_PER_RADIAN: f32 = 180.0 / std::f32::consts::PI;

// TIMINGS
// All durations are in milliseconds

/// Charge held for at least this long unleashes a weak attack.
pub const SHORT_TIME: u64 = 0;
/// Charge held for at least this long unleashes a medium attack.
pub const MED_TIME: u64 = 500;
/// Charge held for at least this long unleashes a strong attack.
pub const LONG_TIME: u64 = 1500;
/// How long entities stay stunned after being hit.
pub const STUN_TIME: u64 = 1000;

// INITIAL VALUES

/// The initial dimensions of the player, in meters.
pub const ID_PLAYER: Vector2<f32> = Vector2 { x: 0.75, y: 1.5 };
/// The initial position of the spear, relative to the player's main hitbox.
pub const IP_SPEAR: Vector2<f32> = Vector2 {
    x: ID_PLAYER.x * 0.75,
    y: 0.0,
};

// ANIMATIONS

/// The sprite sheet for player movement.
pub const ANIM_PLAYER_RUNNING: SheetDesc = SheetDesc {
    path: "assets/player-running.png",
    rows: 1,
    cols: 4,
    frame_duration: 0.15,
};

/// The horizontal facing of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// The opposite facing.
    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Sign of the facing along the x axis, -1 for left and +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// The unit an angle is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_screen_dimensions() {
        assert_eq!(PHYSICS_WIDTH, 16.0);
        assert_eq!(PHYSICS_HEIGHT, 9.0);
    }

    #[test]
    fn test_facing() {
        assert_eq!(Facing::Left.flipped(), Facing::Right);
        assert_eq!(Facing::Right.flipped(), Facing::Left);
        assert_eq!(Facing::Left.sign(), -1.0);
        assert_eq!(Facing::Right.sign(), 1.0);
    }

    #[test]
    fn test_spear_starts_at_the_player_edge() {
        assert_eq!(IP_SPEAR.x, ID_PLAYER.x * 0.75);
        assert_eq!(IP_SPEAR.y, 0.0);
    }
}
