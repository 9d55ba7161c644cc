use crate::event::Event;
use crate::log::push_event;
use crate::model::TapOutcome;
use crate::session::{ActionResult, ActiveSession};

impl ActiveSession {
    pub(crate) fn tap_action(&mut self) -> ActionResult {
        let mut events = Vec::new();
        let outcome = self.apply_tap(&mut events);
        ActionResult {
            events,
            changed: outcome == TapOutcome::Scored,
            error: String::new(),
        }
    }

    /// Scores one coin for one energy. The gate runs in the same handler as
    /// the mutation, so energy can never be spent below zero.
    pub(crate) fn apply_tap(&mut self, events: &mut Vec<String>) -> TapOutcome {
        if !self.state.can_tap() {
            self.taps_rejected = self.taps_rejected.saturating_add(1);
            push_event(
                events,
                Event::TapExhausted {
                    coins: self.state.coins,
                },
            );
            return TapOutcome::Exhausted;
        }

        self.state.coins = self.state.coins.saturating_add(1);
        self.state.energy -= 1;

        push_event(
            events,
            Event::CoinScored {
                coins: self.state.coins,
                energy: self.state.energy,
            },
        );
        TapOutcome::Scored
    }
}

#[cfg(test)]
mod tests {
    use crate::model::TapOutcome;
    use crate::session::ActiveSession;

    #[test]
    fn tap_scores_one_coin_for_one_energy() {
        let mut session = ActiveSession::new();
        let mut events = Vec::new();

        let outcome = session.apply_tap(&mut events);

        assert_eq!(outcome, TapOutcome::Scored);
        assert_eq!(session.state.coins, 1);
        assert_eq!(session.state.energy, 499);
        assert_eq!(events.len(), 1);
        assert!(events[0].contains("\"kind\":\"CoinScored\""));
    }

    #[test]
    fn tap_with_no_energy_leaves_counters_untouched() {
        let mut session = ActiveSession::new();
        session.state.energy = 0;
        session.state.coins = 42;
        let mut events = Vec::new();

        for _ in 0..5 {
            let outcome = session.apply_tap(&mut events);
            assert_eq!(outcome, TapOutcome::Exhausted);
        }

        assert_eq!(session.state.coins, 42);
        assert_eq!(session.state.energy, 0);
        assert_eq!(session.taps_rejected, 5);
        assert!(events.iter().all(|line| line.contains("\"kind\":\"TapExhausted\"")));
    }

    #[test]
    fn last_energy_point_is_spendable_once() {
        let mut session = ActiveSession::new();
        session.state.energy = 1;
        let mut events = Vec::new();

        assert_eq!(session.apply_tap(&mut events), TapOutcome::Scored);
        assert_eq!(session.state.energy, 0);
        assert_eq!(session.state.coins, 1);

        assert_eq!(session.apply_tap(&mut events), TapOutcome::Exhausted);
        assert_eq!(session.state.energy, 0);
        assert_eq!(session.state.coins, 1);
    }

    #[test]
    fn coins_only_ever_grow() {
        let mut session = ActiveSession::new();
        let mut events = Vec::new();
        let mut last_coins = 0;

        for _ in 0..600 {
            session.apply_tap(&mut events);
            assert!(session.state.coins >= last_coins);
            last_coins = session.state.coins;
        }

        assert_eq!(session.state.coins, 500);
        assert_eq!(session.state.energy, 0);
    }
}
