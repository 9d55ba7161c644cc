use crate::event::Event;
use crate::host::active_host;
use crate::log::push_event;
use crate::session::ActiveSession;

/// Replays one session headlessly: `taps` tap attempts, then `regen_ticks`
/// timer ticks, then a single state report. Returns every event line the
/// scenario produced.
pub fn run_scenario_internal(taps: u32, regen_ticks: u32) -> Vec<String> {
    let mut session = ActiveSession::new();
    let mut lines = Vec::new();

    push_event(
        &mut lines,
        Event::SessionStart {
            energy: session.state.energy,
        },
    );

    for _ in 0..taps {
        session.apply_tap(&mut lines);
    }

    for _ in 0..regen_ticks {
        session.apply_regen_tick(&mut lines);
    }

    session.report(&active_host(), &mut lines);
    lines
}

#[cfg(test)]
mod tests {
    use super::run_scenario_internal;

    #[test]
    fn full_drain_then_one_tick_reports_expected_payload() {
        // 500 scored taps empty the gauge, the 501st is rejected, one tick
        // restores 10.
        let lines = run_scenario_internal(501, 1);

        let scored = lines
            .iter()
            .filter(|line| line.contains("\"kind\":\"CoinScored\""))
            .count();
        assert_eq!(scored, 500);

        let rejected = lines
            .iter()
            .filter(|line| line.contains("\"kind\":\"TapExhausted\""))
            .count();
        assert_eq!(rejected, 1);

        assert_eq!(
            lines.last().map(String::as_str),
            Some(r#"{"kind":"StateReported","coins":500,"energy":10}"#)
        );
    }

    #[test]
    fn scenario_starts_from_a_full_gauge() {
        let lines = run_scenario_internal(0, 0);
        assert_eq!(lines[0], r#"{"kind":"SessionStart","energy":500}"#);
        assert_eq!(
            lines.last().map(String::as_str),
            Some(r#"{"kind":"StateReported","coins":0,"energy":500}"#)
        );
    }

    #[test]
    fn tick_count_tracks_the_energy_ledger() {
        // energy = 500 - scored + 10 * applied ticks while below the ceiling
        let lines = run_scenario_internal(40, 3);
        assert_eq!(
            lines.last().map(String::as_str),
            Some(r#"{"kind":"StateReported","coins":40,"energy":490}"#)
        );
    }
}
