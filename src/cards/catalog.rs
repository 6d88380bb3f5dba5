//! Card catalog: the closed set of playable card templates.
//!
//! Cards are a fixed registry, not user data. `CardKind` enumerates the
//! playable actions and each kind resolves to a static `CardSpec`
//! holding its cost, damage, block, and status payload. Runtime card
//! state does not exist; a card in a pile is just its kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status effects a card can apply.
///
/// `Weak` and `Vulnerable` are durations in turns; `Strength` is a
/// permanent additive bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusEffect {
    Weak,
    Vulnerable,
    Strength,
}

impl StatusEffect {
    /// Lowercase effect name as it appears in card descriptions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StatusEffect::Weak => "weak",
            StatusEffect::Vulnerable => "vulnerable",
            StatusEffect::Strength => "strength",
        }
    }
}

impl fmt::Display for StatusEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static card template.
///
/// All values are engine constants; see `CardKind::spec`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSpec {
    /// Display name, also the name matched by `Player::play_card`.
    pub name: &'static str,
    /// Energy cost to play.
    pub energy_cost: i64,
    /// Damage dealt to the target.
    pub damage: i64,
    /// Block granted to the player.
    pub block: i64,
    /// Status effects applied when the card resolves, in declaration
    /// order. Weak/vulnerable go to the target, strength to the player.
    pub status_effects: &'static [(StatusEffect, i64)],
    /// Whether playing this card requires a monster target.
    ///
    /// Authoritative, not derived from `damage`.
    pub requires_target: bool,
    /// Bespoke description overriding the generated one.
    description: Option<&'static str>,
}

const STRIKE: CardSpec = CardSpec {
    name: "Strike",
    energy_cost: 1,
    damage: 6,
    block: 0,
    status_effects: &[],
    requires_target: true,
    description: None,
};

const DEFEND: CardSpec = CardSpec {
    name: "Defend",
    energy_cost: 1,
    damage: 0,
    block: 5,
    status_effects: &[],
    requires_target: false,
    description: None,
};

const BASH: CardSpec = CardSpec {
    name: "Bash",
    energy_cost: 2,
    damage: 7,
    block: 5,
    status_effects: &[],
    requires_target: true,
    description: None,
};

const NEUTRALIZE: CardSpec = CardSpec {
    name: "Neutralize",
    energy_cost: 0,
    damage: 3,
    block: 0,
    status_effects: &[(StatusEffect::Weak, 1), (StatusEffect::Vulnerable, 2)],
    requires_target: true,
    description: None,
};

const SURVIVOR: CardSpec = CardSpec {
    name: "Survivor",
    energy_cost: 1,
    damage: 0,
    block: 8,
    status_effects: &[(StatusEffect::Strength, 1)],
    requires_target: false,
    description: Some("Gain 8 block and 1 strength."),
};

/// The closed set of playable cards.
///
/// ## Usage
///
/// ```
/// use spire_core::cards::CardKind;
///
/// let strike = CardKind::Strike;
/// assert_eq!(strike.spec().damage, 6);
/// assert_eq!(strike.describe(), "Deal 6 damage.");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardKind {
    Strike,
    Defend,
    Bash,
    Neutralize,
    Survivor,
}

impl CardKind {
    /// Every card kind, in catalog order.
    pub const ALL: [CardKind; 5] = [
        CardKind::Strike,
        CardKind::Defend,
        CardKind::Bash,
        CardKind::Neutralize,
        CardKind::Survivor,
    ];

    /// The static template for this kind.
    #[must_use]
    pub const fn spec(self) -> &'static CardSpec {
        match self {
            CardKind::Strike => &STRIKE,
            CardKind::Defend => &DEFEND,
            CardKind::Bash => &BASH,
            CardKind::Neutralize => &NEUTRALIZE,
            CardKind::Survivor => &SURVIVOR,
        }
    }

    /// Card name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.spec().name
    }

    /// Look up a card by its exact name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<CardKind> {
        CardKind::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Render the card's description.
    ///
    /// Clauses appear in a fixed order: damage, block, then each status
    /// effect in declaration order. Cards with none of these read
    /// "A card."
    #[must_use]
    pub fn describe(self) -> String {
        let spec = self.spec();
        if let Some(text) = spec.description {
            return text.to_string();
        }

        let mut clauses = Vec::new();
        if spec.damage > 0 {
            clauses.push(format!("Deal {} damage.", spec.damage));
        }
        if spec.block > 0 {
            clauses.push(format!("Gain {} block.", spec.block));
        }
        for &(effect, magnitude) in spec.status_effects {
            clauses.push(format!("Apply {magnitude} {effect}."));
        }

        if clauses.is_empty() {
            "A card.".to_string()
        } else {
            clauses.join(" ")
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_values() {
        assert_eq!(CardKind::Strike.spec().energy_cost, 1);
        assert_eq!(CardKind::Strike.spec().damage, 6);
        assert!(CardKind::Strike.spec().requires_target);

        assert_eq!(CardKind::Defend.spec().block, 5);
        assert!(!CardKind::Defend.spec().requires_target);

        assert_eq!(CardKind::Bash.spec().energy_cost, 2);
        assert_eq!(CardKind::Bash.spec().damage, 7);
        assert_eq!(CardKind::Bash.spec().block, 5);

        assert_eq!(CardKind::Neutralize.spec().energy_cost, 0);
        assert_eq!(
            CardKind::Neutralize.spec().status_effects,
            &[(StatusEffect::Weak, 1), (StatusEffect::Vulnerable, 2)]
        );

        assert_eq!(CardKind::Survivor.spec().block, 8);
        assert_eq!(
            CardKind::Survivor.spec().status_effects,
            &[(StatusEffect::Strength, 1)]
        );
    }

    #[test]
    fn test_describe_damage_only() {
        assert_eq!(CardKind::Strike.describe(), "Deal 6 damage.");
    }

    #[test]
    fn test_describe_block_only() {
        assert_eq!(CardKind::Defend.describe(), "Gain 5 block.");
    }

    #[test]
    fn test_describe_joins_clauses_in_order() {
        assert_eq!(CardKind::Bash.describe(), "Deal 7 damage. Gain 5 block.");
        assert_eq!(
            CardKind::Neutralize.describe(),
            "Deal 3 damage. Apply 1 weak. Apply 2 vulnerable."
        );
    }

    #[test]
    fn test_describe_override() {
        assert_eq!(CardKind::Survivor.describe(), "Gain 8 block and 1 strength.");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(CardKind::from_name("Strike"), Some(CardKind::Strike));
        assert_eq!(CardKind::from_name("Survivor"), Some(CardKind::Survivor));
        // Exact match only
        assert_eq!(CardKind::from_name("strike"), None);
        assert_eq!(CardKind::from_name("Fireball"), None);
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(format!("{}", CardKind::Neutralize), "Neutralize");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&CardKind::Bash).unwrap();
        let back: CardKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CardKind::Bash);
    }
}
