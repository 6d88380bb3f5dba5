//! The encounter turn state machine.
//!
//! An encounter owns one player and an ordered monster roster and
//! alternates between two phases. During `PlayerTurn` the player plays
//! cards (`player_apply_card`) and ends the turn (`end_player_turn`);
//! during `EnemyTurn` a single `enemy_turn` call resolves every
//! monster's action and hands the turn back.
//!
//! All validation is up front: a move either applies completely or is
//! rejected with every piece of partial state rolled back. Calls made
//! in the wrong phase are no-ops.
//!
//! Defeat is the caller's concern. `is_active()` reports the win
//! condition (no monsters left); the caller checks the player's hp
//! after each enemy phase for the loss condition.

pub mod roster;

pub use roster::{parse_encounters, MonsterEntry, Roster};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::StatusEffect;
use crate::core::GameRng;
use crate::error::EncounterError;
use crate::monsters::{Monster, MonsterId, MonsterIdAllocator, MonsterKind};
use crate::player::Player;

/// Whose move it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    PlayerTurn,
    EnemyTurn,
}

/// Outgoing damage after the status multipliers.
///
/// Vulnerability raises damage by 50%, weakness cuts it by 25%; the
/// product is floored once at the end, matching the reference rules.
fn scaled_damage(base: i64, vulnerable: bool, weak: bool) -> i64 {
    let mut damage = base as f64;
    if vulnerable {
        damage *= 1.5;
    }
    if weak {
        damage *= 0.75;
    }
    damage.floor() as i64
}

/// One combat session between the player and a monster roster.
///
/// ## Usage
///
/// ```
/// use spire_core::core::GameRng;
/// use spire_core::encounter::Encounter;
/// use spire_core::monsters::MonsterIdAllocator;
/// use spire_core::player::Player;
///
/// let mut ids = MonsterIdAllocator::new();
/// let roster = vec![("Louse".to_string(), 10), ("Cultist".to_string(), 20)];
///
/// let encounter =
///     Encounter::new(Player::ironclad(), &roster, &mut ids, GameRng::new(42)).unwrap();
///
/// assert!(encounter.is_active());
/// assert_eq!(encounter.monsters().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Encounter {
    player: Player,
    monsters: Vec<Monster>,
    phase: Phase,
    rng: GameRng,
}

impl Encounter {
    /// Build an encounter from a monster roster.
    ///
    /// Monsters are created in roster order, so ids and the Louse
    /// damage rolls are deterministic given the allocator and RNG.
    /// The player's piles are reset and the first turn begins before
    /// this returns.
    ///
    /// Fails with `UnknownMonsterType` if a roster entry names a
    /// variant outside the fixed set.
    pub fn new(
        player: Player,
        roster: &[MonsterEntry],
        ids: &mut MonsterIdAllocator,
        rng: GameRng,
    ) -> Result<Self, EncounterError> {
        let mut rng = rng;
        let mut monsters = Vec::with_capacity(roster.len());
        for (name, start_hp) in roster {
            let kind = MonsterKind::from_name(name)
                .ok_or_else(|| EncounterError::UnknownMonsterType(name.clone()))?;
            monsters.push(Monster::new(kind, *start_hp, ids, &mut rng));
        }

        let mut encounter = Self {
            player,
            monsters,
            phase: Phase::PlayerTurn,
            rng,
        };
        encounter.player.start_new_encounter();
        encounter.start_new_turn();
        Ok(encounter)
    }

    /// The player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Monsters still in the fight, in arrival order.
    #[must_use]
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// Look up a monster by id. Fails cleanly after removal.
    #[must_use]
    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monster_index(id).map(|i| &self.monsters[i])
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while at least one monster remains.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.monsters.iter().any(|m| !m.combatant.is_defeated())
    }

    /// Play a card by name, optionally against a target monster.
    ///
    /// Only valid during `PlayerTurn`. Returns `false` without any
    /// state change when the card is unknown, unaffordable, missing a
    /// required target, or the target id does not resolve to a live
    /// monster; a half-played card is rolled back (hand order, discard
    /// pile, and energy restored exactly).
    ///
    /// On success the player gains the card's block and strength, the
    /// target receives the card's weak/vulnerable and then
    /// `floor((damage + strength) * 1.5 if target vulnerable
    /// * 0.75 if player weak)` damage. A defeated target is removed
    /// from the roster by id.
    pub fn player_apply_card(&mut self, name: &str, target: Option<MonsterId>) -> bool {
        if self.phase != Phase::PlayerTurn {
            return false;
        }

        let Some((kind, hand_index)) = self.player.play_card_indexed(name) else {
            return false;
        };
        let spec = kind.spec();

        let target_index = if spec.requires_target {
            match target.and_then(|id| self.monster_index(id)) {
                Some(index) => Some(index),
                None => {
                    debug!("rolling back {kind}: no valid target ({target:?})");
                    self.player.unplay_card(kind, hand_index);
                    return false;
                }
            }
        } else {
            None
        };

        // Self-directed effects apply whether or not the card targets
        self.player.combatant.add_block(spec.block);
        for &(effect, magnitude) in spec.status_effects {
            if effect == StatusEffect::Strength {
                self.player.combatant.add_strength(magnitude);
            }
        }

        let Some(target_index) = target_index else {
            debug!("{kind} resolved with no target");
            return true;
        };

        let monster = &mut self.monsters[target_index];
        for &(effect, magnitude) in spec.status_effects {
            match effect {
                StatusEffect::Weak => monster.combatant.add_weak(magnitude),
                StatusEffect::Vulnerable => monster.combatant.add_vulnerable(magnitude),
                StatusEffect::Strength => {}
            }
        }

        let damage = scaled_damage(
            spec.damage + self.player.combatant.strength(),
            monster.combatant.vulnerable_turns() > 0,
            self.player.combatant.weak_turns() > 0,
        );
        monster.combatant.take_damage(damage);
        debug!("{kind} dealt {damage} to {}", monster.id());

        if monster.combatant.is_defeated() {
            let id = monster.id();
            debug!("{id} defeated");
            self.remove_by_id(id);
        }
        true
    }

    /// End the player's turn and hand control to the enemy phase.
    ///
    /// The player's hand is discarded and each monster runs its
    /// turn-start reset (block wiped, statuses ticked) so statuses
    /// applied this turn are at their post-tick values when the
    /// monsters act. Monsters take no actions here. No-op outside
    /// `PlayerTurn`.
    pub fn end_player_turn(&mut self) {
        if self.phase != Phase::PlayerTurn {
            return;
        }
        self.player.end_turn();
        self.phase = Phase::EnemyTurn;
        for monster in &mut self.monsters {
            monster.combatant.start_new_turn();
        }
    }

    /// Resolve the enemy phase. No-op outside `EnemyTurn`.
    ///
    /// Every monster acts in roster order: its action's strength is
    /// folded into the damage, any weak/vulnerable in the action lands
    /// on the player first, and the player then takes
    /// `floor(damage * 1.5 if the MONSTER is vulnerable * 0.75 if the
    /// player is weak)`. The attacker-side vulnerability multiplier is
    /// the reference rule set's inversion of the player-attack rule,
    /// preserved deliberately.
    ///
    /// All monsters act even if the player hits 0 hp mid-phase; the
    /// caller checks for defeat afterwards. Ends by starting the next
    /// player turn.
    pub fn enemy_turn(&mut self) {
        if self.phase != Phase::EnemyTurn {
            return;
        }

        for index in 0..self.monsters.len() {
            let action = self.monsters[index].action();
            let base = action.damage + action.strength.unwrap_or(0);

            if let Some(weak) = action.weak {
                self.player.combatant.add_weak(weak);
            }
            if let Some(vulnerable) = action.vulnerable {
                self.player.combatant.add_vulnerable(vulnerable);
            }

            let damage = scaled_damage(
                base,
                self.monsters[index].combatant.vulnerable_turns() > 0,
                self.player.combatant.weak_turns() > 0,
            );
            self.player.combatant.take_damage(damage);
            debug!("{} dealt {damage} to player", self.monsters[index].id());
        }

        self.start_new_turn();
    }

    /// Begin a player turn: phase flips back and the player's turn
    /// reset runs (block wipe, status tick, energy refill, draw).
    pub fn start_new_turn(&mut self) {
        self.phase = Phase::PlayerTurn;
        self.player.new_turn(&mut self.rng);
    }

    fn monster_index(&self, id: MonsterId) -> Option<usize> {
        self.monsters.iter().position(|m| m.id() == id)
    }

    fn remove_by_id(&mut self, id: MonsterId) {
        if let Some(index) = self.monster_index(id) {
            self.monsters.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    fn encounter_with(player: Player, roster: &[(&str, i64)]) -> Encounter {
        let roster: Vec<MonsterEntry> =
            roster.iter().map(|(n, hp)| (n.to_string(), *hp)).collect();
        let mut ids = MonsterIdAllocator::new();
        Encounter::new(player, &roster, &mut ids, GameRng::new(42)).unwrap()
    }

    #[test]
    fn test_construction_starts_player_turn_with_full_hand() {
        let encounter = encounter_with(Player::ironclad(), &[("Louse", 10)]);

        assert_eq!(encounter.phase(), Phase::PlayerTurn);
        assert_eq!(encounter.player().energy(), 3);
        assert_eq!(encounter.player().piles().hand().len(), 5);
    }

    #[test]
    fn test_unknown_monster_type_is_fatal() {
        let mut ids = MonsterIdAllocator::new();
        let roster = vec![("Louse".to_string(), 10), ("Dragon".to_string(), 20)];

        let err = Encounter::new(Player::ironclad(), &roster, &mut ids, GameRng::new(42))
            .unwrap_err();

        assert_eq!(err, EncounterError::UnknownMonsterType("Dragon".to_string()));
    }

    #[test]
    fn test_monster_names_resolve_case_insensitively() {
        let encounter = encounter_with(Player::ironclad(), &[("louse", 10), ("CULTIST", 20)]);
        assert_eq!(encounter.monsters()[0].kind(), MonsterKind::Louse);
        assert_eq!(encounter.monsters()[1].kind(), MonsterKind::Cultist);
    }

    #[test]
    fn test_apply_card_rejected_in_enemy_phase() {
        let mut encounter =
            encounter_with(Player::new(50, vec![CardKind::Defend; 5]), &[("Cultist", 20)]);
        encounter.end_player_turn();

        assert!(!encounter.player_apply_card("Defend", None));
        assert_eq!(encounter.player().piles().hand().len(), 0);
    }

    #[test]
    fn test_enemy_turn_is_noop_in_player_phase() {
        let mut encounter =
            encounter_with(Player::new(50, vec![CardKind::Defend; 5]), &[("Cultist", 20)]);

        encounter.enemy_turn();

        assert_eq!(encounter.phase(), Phase::PlayerTurn);
        assert_eq!(encounter.player().combatant.hp(), 50);
    }

    #[test]
    fn test_end_player_turn_is_noop_in_enemy_phase() {
        let mut encounter =
            encounter_with(Player::new(50, vec![CardKind::Defend; 5]), &[("Cultist", 20)]);

        encounter.end_player_turn();
        let discard_len = encounter.player().piles().discard().len();
        encounter.end_player_turn();

        assert_eq!(encounter.phase(), Phase::EnemyTurn);
        assert_eq!(encounter.player().piles().discard().len(), discard_len);
    }

    #[test]
    fn test_untargeted_card_stops_after_self_effects() {
        let mut encounter =
            encounter_with(Player::new(50, vec![CardKind::Survivor; 5]), &[("Cultist", 20)]);

        assert!(encounter.player_apply_card("Survivor", None));

        assert_eq!(encounter.player().combatant.block(), 8);
        assert_eq!(encounter.player().combatant.strength(), 1);
        assert_eq!(encounter.monsters()[0].combatant.hp(), 20);
    }

    #[test]
    fn test_scaled_damage_multipliers() {
        assert_eq!(scaled_damage(6, false, false), 6);
        assert_eq!(scaled_damage(6, true, false), 9);
        assert_eq!(scaled_damage(6, false, true), 4);
        // Single floor over the full product: 6 * 1.5 * 0.75 = 6.75
        assert_eq!(scaled_damage(6, true, true), 6);
        assert_eq!(scaled_damage(0, true, true), 0);
    }

    #[test]
    fn test_is_active_idempotent() {
        let encounter = encounter_with(Player::ironclad(), &[("Louse", 10)]);
        let first = encounter.is_active();
        for _ in 0..5 {
            assert_eq!(encounter.is_active(), first);
        }
    }
}
