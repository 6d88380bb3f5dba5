//! Property-based tests for the combat arithmetic and pile invariants.

use proptest::prelude::*;

use spire_core::cards::CardKind;
use spire_core::core::{Combatant, GameRng};
use spire_core::encounter::{Encounter, MonsterEntry};
use spire_core::monsters::{MonsterId, MonsterIdAllocator};
use spire_core::player::{Player, ENERGY_CAP, HAND_SIZE};

fn any_card() -> impl Strategy<Value = CardKind> {
    prop::sample::select(CardKind::ALL.to_vec())
}

fn any_deck(max_len: usize) -> impl Strategy<Value = Vec<CardKind>> {
    prop::collection::vec(any_card(), 0..=max_len)
}

fn card_counts(player: &Player) -> [usize; 5] {
    let piles = player.piles();
    let mut counts = [0; 5];
    for pile in [piles.deck(), piles.hand(), piles.discard()] {
        for kind in pile {
            counts[CardKind::ALL.iter().position(|k| k == kind).unwrap()] += 1;
        }
    }
    counts
}

proptest! {
    /// Block absorbs first, the excess hits hp, and hp floors at zero:
    /// hp' = max(0, hp - max(0, amount - block)),
    /// block' = max(0, block - amount).
    #[test]
    fn prop_take_damage_law(
        max_hp in 1i64..500,
        hurt in 0i64..500,
        block in 0i64..200,
        amount in 0i64..400,
    ) {
        let mut c = Combatant::new(max_hp);
        c.take_damage(hurt.min(max_hp - 1));
        c.add_block(block);

        let (old_hp, old_block) = (c.hp(), c.block());
        c.take_damage(amount);

        prop_assert_eq!(c.hp(), (old_hp - (amount - old_block).max(0)).max(0));
        prop_assert_eq!(c.block(), (old_block - amount).max(0));
        prop_assert_eq!(c.is_defeated(), c.hp() == 0);
    }

    /// The union of deck + hand + discard never changes composition,
    /// only distribution, across any sequence of pile operations.
    #[test]
    fn prop_pile_multiset_conserved(
        deck in any_deck(20),
        seed in any::<u64>(),
        ops in prop::collection::vec(0u8..4, 1..30),
    ) {
        let mut player = Player::new(50, deck);
        let mut rng = GameRng::new(seed);
        let before = card_counts(&player);

        for op in ops {
            match op {
                0 => player.new_turn(&mut rng),
                1 => player.end_turn(),
                2 => player.start_new_encounter(),
                _ => {
                    // Play whatever happens to be first in hand
                    if let Some(kind) = player.piles().hand().first().copied() {
                        player.play_card(kind.name());
                    }
                }
            }
            prop_assert_eq!(card_counts(&player), before);
        }
    }

    /// A new turn always yields full energy and a hand of
    /// min(HAND_SIZE, total owned cards).
    #[test]
    fn prop_new_turn_energy_and_hand_size(deck in any_deck(12), seed in any::<u64>()) {
        let total = deck.len();
        let mut player = Player::new(50, deck);
        let mut rng = GameRng::new(seed);

        for _ in 0..4 {
            player.new_turn(&mut rng);
            prop_assert_eq!(player.energy(), ENERGY_CAP);
            prop_assert_eq!(player.piles().hand().len(), HAND_SIZE.min(total));
            player.end_turn();
        }
    }

    /// A failed card application leaves the player element-for-element
    /// identical: same energy, same hand order, same discard pile.
    #[test]
    fn prop_failed_apply_rolls_back(
        deck in prop::collection::vec(any_card(), 1..12),
        seed in any::<u64>(),
    ) {
        let roster: Vec<MonsterEntry> = vec![("Cultist".to_string(), 50)];
        let mut ids = MonsterIdAllocator::new();
        let mut encounter =
            Encounter::new(Player::new(50, deck), &roster, &mut ids, GameRng::new(seed)).unwrap();

        let before = encounter.player().clone();

        // Unknown card, targeted card without a target, stale target id
        prop_assert!(!encounter.player_apply_card("Fireball", None));
        for kind in CardKind::ALL.iter().filter(|k| k.spec().requires_target) {
            prop_assert!(!encounter.player_apply_card(kind.name(), None));
            prop_assert!(!encounter.player_apply_card(kind.name(), Some(MonsterId(999))));
        }

        prop_assert_eq!(encounter.player(), &before);
    }
}
