use bitflags::bitflags;

use super::constants::{LONG_TIME, MED_TIME};

bitflags! {
    /// Collision categories for physics fixtures
    /// Stored in the fixture's filter data, combined with bitwise OR
    pub struct CollisionCategory : u16 {
        /// The entity is part of the terrain
        const TERRAIN = 0b00001;
        /// The entity is the player
        const PLAYER  = 0b00010;
        /// The entity is an enemy
        const ENEMY   = 0b00100;
        /// The entity is a movable object
        const OBJECT  = 0b01000;
    }
}

bitflags! {
    /// Player state flags
    /// Multiple states can be active at once (e.g. moving while charging)
    pub struct PlayerState : u16 {
        /// The player is currently stunned
        const STUNNED   = 0b00001;
        /// The player is currently walking
        const MOVING    = 0b00010;
        /// The player is currently jumping
        const JUMPING   = 0b00100;
        /// The player is currently charging an attack
        const CHARGING  = 0b01000;
        /// The player is currently unleashing an attack
        const ATTACKING = 0b10000;
    }
}

bitflags! {
    /// Tags identifying the role of a fixture within its body
    pub struct FixtureTag : u16 {
        /// The player's weapon hitbox
        const PLAYER_WEAPON = 0x0001;
        /// The player's main hitbox
        const PLAYER_MAIN   = 0x0002;
        /// An enemy's main hitbox
        const ENEMY_MAIN    = 0x0010;
        /// An arbitrary main hitbox
        const DUMMY_MAIN    = 0x1000;
    }
}

/// How hard an attack hits, determined by how long the charge was held.
/// NOTE: Not a flag namespace, the codes overlap bitwise and are never combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackStrength {
    Weak = 0x1,
    Medium = 0x2,
    Strong = 0x3,
}

impl AttackStrength {
    /// Map a held-charge duration in milliseconds to the attack strength it unleashes
    pub fn from_charge(held_ms: u64) -> Self {
        if held_ms >= LONG_TIME {
            AttackStrength::Strong
        } else if held_ms >= MED_TIME {
            AttackStrength::Medium
        } else {
            AttackStrength::Weak
        }
    }
}

/// The kind of weapon an entity wields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponKind {
    Spear = 0x2,
    Boomerang = 0x3,
    Sword = 0x4,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every value in a flag namespace must be a single, distinct bit
    fn assert_disjoint_single_bits(bits: &[u16]) {
        for (i, a) in bits.iter().enumerate() {
            assert_eq!(a.count_ones(), 1, "flag {:#06x} is not a single bit", a);
            for b in &bits[i + 1..] {
                assert_eq!(a & b, 0, "flags {:#06x} and {:#06x} overlap", a, b);
            }
        }
    }

    #[test]
    fn test_collision_categories_are_disjoint() {
        assert_disjoint_single_bits(&[
            CollisionCategory::TERRAIN.bits,
            CollisionCategory::PLAYER.bits,
            CollisionCategory::ENEMY.bits,
            CollisionCategory::OBJECT.bits,
        ]);
    }

    #[test]
    fn test_player_states_are_disjoint() {
        assert_disjoint_single_bits(&[
            PlayerState::STUNNED.bits,
            PlayerState::MOVING.bits,
            PlayerState::JUMPING.bits,
            PlayerState::CHARGING.bits,
            PlayerState::ATTACKING.bits,
        ]);
    }

    #[test]
    fn test_fixture_tags_are_disjoint() {
        assert_disjoint_single_bits(&[
            FixtureTag::PLAYER_WEAPON.bits,
            FixtureTag::PLAYER_MAIN.bits,
            FixtureTag::ENEMY_MAIN.bits,
            FixtureTag::DUMMY_MAIN.bits,
        ]);
    }

    #[test]
    fn test_states_combine_and_clear() {
        let mut state = PlayerState::MOVING | PlayerState::CHARGING;
        assert!(state.contains(PlayerState::MOVING));
        assert!(!state.contains(PlayerState::STUNNED));

        state.remove(PlayerState::MOVING);
        state.insert(PlayerState::ATTACKING);
        assert_eq!(state, PlayerState::CHARGING | PlayerState::ATTACKING);
    }

    #[test]
    fn test_attack_strength_thresholds() {
        assert_eq!(AttackStrength::from_charge(0), AttackStrength::Weak);
        assert_eq!(AttackStrength::from_charge(499), AttackStrength::Weak);
        assert_eq!(AttackStrength::from_charge(500), AttackStrength::Medium);
        assert_eq!(AttackStrength::from_charge(1499), AttackStrength::Medium);
        assert_eq!(AttackStrength::from_charge(1500), AttackStrength::Strong);
        assert_eq!(AttackStrength::from_charge(60_000), AttackStrength::Strong);
    }
}
