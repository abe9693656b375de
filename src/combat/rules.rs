//! Outcome table for every ordered (attacker, defender) pairing
//!
//! Toads eat everything, other Toads included: a Toad attacking a Toad wins.
//! Dragon and Knight each win when attacking the other. Dragon vs Dragon and
//! Knight vs Knight are draws.

use serde::{Deserialize, Serialize};

use crate::entity::Variant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FightOutcome {
    AttackerWins,
    DefenderWins,
    Draw,
}

impl FightOutcome {
    /// True when the defender is defeated
    pub fn attacker_won(self) -> bool {
        matches!(self, FightOutcome::AttackerWins)
    }
}

/// Resolve a fight from the two variants alone
pub fn resolve(attacker: Variant, defender: Variant) -> FightOutcome {
    use self::FightOutcome::*;
    use crate::entity::Variant::*;

    match (attacker, defender) {
        (Toad, Toad) => AttackerWins,
        (Toad, Dragon) => AttackerWins,
        (Toad, Knight) => AttackerWins,

        (Dragon, Toad) => DefenderWins,
        (Dragon, Dragon) => Draw,
        (Dragon, Knight) => AttackerWins,

        (Knight, Toad) => DefenderWins,
        (Knight, Dragon) => AttackerWins,
        (Knight, Knight) => Draw,
    }
}

/// Narration used in debug logs, e.g. "Toad wins (eats all)"
pub fn narrate(attacker: Variant, defender: Variant) -> &'static str {
    match (resolve(attacker, defender), attacker, defender) {
        (FightOutcome::Draw, _, _) => "Draw",
        (FightOutcome::AttackerWins, Variant::Toad, _)
        | (FightOutcome::DefenderWins, _, Variant::Toad) => "Toad wins (eats all)",
        (FightOutcome::AttackerWins, Variant::Dragon, _) => "Dragon wins",
        (FightOutcome::AttackerWins, Variant::Knight, _) => "Knight wins",
        (FightOutcome::DefenderWins, _, Variant::Dragon) => "Dragon wins",
        (FightOutcome::DefenderWins, _, Variant::Knight) => "Knight wins",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Variant::*;

    #[test]
    fn test_full_table() {
        let expected = [
            (Toad, Toad, true),
            (Toad, Dragon, true),
            (Toad, Knight, true),
            (Dragon, Toad, false),
            (Dragon, Dragon, false),
            (Dragon, Knight, true),
            (Knight, Toad, false),
            (Knight, Dragon, true),
            (Knight, Knight, false),
        ];

        for (attacker, defender, won) in expected {
            assert_eq!(
                resolve(attacker, defender).attacker_won(),
                won,
                "{attacker} attacking {defender}"
            );
        }
    }

    #[test]
    fn test_toad_eats_toad() {
        assert_eq!(resolve(Toad, Toad), FightOutcome::AttackerWins);
    }

    #[test]
    fn test_same_kind_draws() {
        assert_eq!(resolve(Dragon, Dragon), FightOutcome::Draw);
        assert_eq!(resolve(Knight, Knight), FightOutcome::Draw);
    }

    #[test]
    fn test_losing_to_toad_is_defender_win() {
        assert_eq!(resolve(Dragon, Toad), FightOutcome::DefenderWins);
        assert_eq!(resolve(Knight, Toad), FightOutcome::DefenderWins);
    }

    #[test]
    fn test_narration() {
        assert_eq!(narrate(Toad, Knight), "Toad wins (eats all)");
        assert_eq!(narrate(Knight, Toad), "Toad wins (eats all)");
        assert_eq!(narrate(Dragon, Knight), "Dragon wins");
        assert_eq!(narrate(Knight, Dragon), "Knight wins");
        assert_eq!(narrate(Dragon, Dragon), "Draw");
    }
}
