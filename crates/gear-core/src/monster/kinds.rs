//! Monster and player presets

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::entity::{Ai, Color, DeathKind, Entity, Fighter, Position};

/// Monster kinds generated in rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum MonsterKind {
    #[strum(to_string = "malfunctioning service robot")]
    ServiceRobot,
    #[strum(to_string = "security robot")]
    SecurityRobot,
    #[strum(to_string = "brain in a jar")]
    BrainInAJar,
    #[strum(to_string = "sentient scrap metal")]
    ScrapMetal,
}

impl MonsterKind {
    /// Pick a kind from a `0..=100` roll
    pub const fn from_roll(roll: i32) -> Self {
        if roll < 20 {
            MonsterKind::ServiceRobot
        } else if roll < 40 {
            MonsterKind::SecurityRobot
        } else if roll < 60 {
            MonsterKind::BrainInAJar
        } else {
            MonsterKind::ScrapMetal
        }
    }

    pub const fn fighter(&self) -> Fighter {
        match self {
            MonsterKind::ServiceRobot => Fighter::new(15, 1, 3, DeathKind::Monster),
            MonsterKind::SecurityRobot => Fighter::new(13, 1, 4, DeathKind::Monster),
            MonsterKind::BrainInAJar => Fighter::new(8, 0, 1, DeathKind::Monster),
            MonsterKind::ScrapMetal => Fighter::new(10, 0, 3, DeathKind::Monster),
        }
    }

    pub const fn glyph(&self) -> char {
        match self {
            MonsterKind::ServiceRobot => 'r',
            MonsterKind::SecurityRobot => 's',
            MonsterKind::BrainInAJar => 'b',
            MonsterKind::ScrapMetal => 'm',
        }
    }

    pub const fn color(&self) -> Color {
        match self {
            MonsterKind::ServiceRobot => Color::LightestGrey,
            MonsterKind::SecurityRobot => Color::DarkestGreen,
            MonsterKind::BrainInAJar => Color::LightPink,
            MonsterKind::ScrapMetal => Color::LightGrey,
        }
    }

    pub fn spawn(&self, pos: Position) -> Entity {
        Entity::new(pos, self.glyph(), self.to_string(), self.color())
            .blocking()
            .with_fighter(self.fighter())
            .with_ai(Ai::Basic)
    }
}

/// The player: 30 hp, defense 2, power 6
pub fn player_entity(pos: Position) -> Entity {
    Entity::new(pos, '@', "player", Color::White)
        .blocking()
        .with_fighter(Fighter::new(30, 2, 6, DeathKind::Player))
        .with_ai(Ai::PlayerControlled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_roll_thresholds() {
        assert_eq!(MonsterKind::from_roll(0), MonsterKind::ServiceRobot);
        assert_eq!(MonsterKind::from_roll(20), MonsterKind::SecurityRobot);
        assert_eq!(MonsterKind::from_roll(59), MonsterKind::BrainInAJar);
        assert_eq!(MonsterKind::from_roll(100), MonsterKind::ScrapMetal);
    }

    #[test]
    fn test_monsters_block_and_think() {
        for kind in MonsterKind::iter() {
            let e = kind.spawn(Position::new(0, 0));
            assert!(e.blocks);
            assert_eq!(e.ai, Some(Ai::Basic));
            assert_eq!(e.fighter.unwrap().death, DeathKind::Monster);
        }
    }

    #[test]
    fn test_player_preset() {
        let p = player_entity(Position::new(4, 4));
        let f = p.fighter.unwrap();
        assert_eq!((f.hp, f.max_hp, f.defense, f.power), (30, 30, 2, 6));
        assert_eq!(f.death, DeathKind::Player);
        assert_eq!(p.glyph, '@');
    }
}
