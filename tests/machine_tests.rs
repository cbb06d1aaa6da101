//! Gameplay flows: selection, resolution, round completion, restart.

use proptest::prelude::*;

use memory_match::{
    AssetBatch, ContentId, GameConfig, MatchMachine, Phase, SceneCommand, SlotId, TapEvent,
};

fn ready_machine(seed: u64) -> MatchMachine {
    let mut machine = MatchMachine::new(GameConfig::default(), seed);
    let (ticket, _) = machine.start_round();
    machine
        .assets_ready(ticket, &AssetBatch::with_default_labels())
        .unwrap();
    machine
}

/// Slots currently holding `content`, in slot order.
fn slots_with(machine: &MatchMachine, content: ContentId) -> Vec<SlotId> {
    machine
        .round()
        .iter()
        .filter(|(_, card)| card.content == Some(content))
        .map(|(slot, _)| slot)
        .collect()
}

#[test]
fn test_matching_pair_scores_and_removes() {
    let mut machine = ready_machine(42);
    let pair = slots_with(&machine, ContentId::new(3));
    assert_eq!(pair.len(), 2);

    let first = machine.select_card(pair[0]);
    assert_eq!(first.event, TapEvent::FlippedUp(pair[0]));

    let second = machine.select_card(pair[1]);
    assert_eq!(
        second.event,
        TapEvent::Matched {
            slots: [pair[0], pair[1]],
            content: ContentId::new(3),
            score: 1,
        }
    );

    assert_eq!(machine.score(), 1);
    assert!(machine.round().card(pair[0]).unwrap().removed);
    assert!(machine.round().card(pair[1]).unwrap().removed);
    assert_eq!(machine.round().cards_remaining(), 14);
    assert_eq!(machine.phase(), Phase::Idle);

    assert!(second.commands.contains(&SceneCommand::Remove(pair[0])));
    assert!(second.commands.contains(&SceneCommand::Remove(pair[1])));
    assert!(second.commands.contains(&SceneCommand::ShowScore(1)));
}

#[test]
fn test_mismatched_pair_flips_back_down() {
    let mut machine = ready_machine(42);
    let threes = slots_with(&machine, ContentId::new(3));
    let fives = slots_with(&machine, ContentId::new(5));

    machine.select_card(threes[0]);
    let out = machine.select_card(fives[0]);

    assert_eq!(
        out.event,
        TapEvent::Mismatched {
            slots: [threes[0], fives[0]],
        }
    );
    assert_eq!(machine.score(), 0);
    assert!(out.commands.contains(&SceneCommand::FlipDown(threes[0])));
    assert!(out.commands.contains(&SceneCommand::FlipDown(fives[0])));

    machine.flip_down_complete();

    assert_eq!(machine.score(), 0);
    assert!(!machine.round().card(threes[0]).unwrap().face_up);
    assert!(!machine.round().card(fives[0]).unwrap().face_up);
    assert!(!machine.round().card(threes[0]).unwrap().removed);
    assert_eq!(machine.round().cards_remaining(), 16);
}

#[test]
fn test_reselecting_selected_card_is_noop() {
    let mut machine = ready_machine(42);
    let slot = SlotId::new(6);

    machine.select_card(slot);
    let out = machine.select_card(slot);

    assert!(out.event.is_ignored());
    assert!(out.commands.is_empty());
    assert_eq!(machine.phase(), Phase::OneSelected);
    assert_eq!(machine.selection(), &[slot]);
}

#[test]
fn test_removed_card_cannot_be_selected() {
    let mut machine = ready_machine(42);
    let pair = slots_with(&machine, ContentId::new(0));

    machine.select_card(pair[0]);
    machine.select_card(pair[1]);

    let out = machine.select_card(pair[0]);
    assert!(out.event.is_ignored());
    assert_eq!(machine.score(), 1);
}

#[test]
fn test_off_board_tap_is_noop() {
    let mut machine = ready_machine(42);

    let out = machine.select_card(SlotId::new(99));
    assert!(out.event.is_ignored());
    assert_eq!(machine.phase(), Phase::Idle);
}

#[test]
fn test_full_round_reaches_complete() {
    let mut machine = ready_machine(42);

    for content in ContentId::all(8) {
        let pair = slots_with(&machine, content);
        machine.select_card(pair[0]);
        let out = machine.select_card(pair[1]);
        assert!(matches!(out.event, TapEvent::Matched { .. }));

        if machine.score() == 8 {
            assert!(out.commands.contains(&SceneCommand::ShowEndBanner));
        }
    }

    assert_eq!(machine.score(), 8);
    assert_eq!(machine.round().cards_remaining(), 0);
    assert!(machine.round().is_finished());
    assert_eq!(machine.phase(), Phase::RoundComplete);

    // Taps after the win no longer select cards.
    let out = machine.select_card(SlotId::new(0));
    assert!(out.event.is_ignored());
}

#[test]
fn test_score_reaches_max_iff_all_removed() {
    let mut machine = ready_machine(7);

    for content in ContentId::all(8) {
        assert_eq!(
            machine.round().is_finished(),
            machine.round().cards_remaining() == 0
        );

        let pair = slots_with(&machine, content);
        machine.select_card(pair[0]);
        machine.select_card(pair[1]);
    }

    assert!(machine.round().is_finished());
    assert_eq!(machine.round().cards_remaining(), 0);
}

#[test]
fn test_play_again_starts_fresh_round() {
    let mut machine = ready_machine(42);

    for content in ContentId::all(8) {
        let pair = slots_with(&machine, content);
        machine.select_card(pair[0]);
        machine.select_card(pair[1]);
    }
    assert_eq!(machine.phase(), Phase::RoundComplete);

    let (ticket, output) = machine.play_again().expect("restart after win");
    assert!(output.commands.contains(&SceneCommand::HideEndBanner));
    assert!(output.commands.contains(&SceneCommand::ShowScore(0)));
    assert_eq!(machine.phase(), Phase::Loading);
    assert_eq!(machine.score(), 0);

    machine
        .assets_ready(ticket, &AssetBatch::with_default_labels())
        .unwrap();
    assert_eq!(machine.phase(), Phase::Idle);
    assert_eq!(machine.round().cards_remaining(), 16);
}

#[test]
fn test_play_again_rejected_mid_round() {
    let mut machine = ready_machine(42);
    machine.select_card(SlotId::new(0));

    assert!(machine.play_again().is_none());
    assert_eq!(machine.phase(), Phase::OneSelected);
}

#[test]
fn test_mismatch_then_match_on_same_cards() {
    let mut machine = ready_machine(42);
    let pair = slots_with(&machine, ContentId::new(2));
    let other = slots_with(&machine, ContentId::new(6));

    machine.select_card(pair[0]);
    machine.select_card(other[0]);
    machine.flip_down_complete();

    machine.select_card(pair[0]);
    let out = machine.select_card(pair[1]);

    assert!(matches!(out.event, TapEvent::Matched { score: 1, .. }));
    assert_eq!(machine.score(), 1);
}

#[test]
fn test_small_board_round() {
    let mut machine = MatchMachine::new(GameConfig::new(2, 2), 5);
    let (ticket, _) = machine.start_round();

    let batch = AssetBatch::new(
        vec![memory_match::ModelHandle(0), memory_match::ModelHandle(1)],
        vec!["tahi".to_string(), "rua".to_string()],
    );
    machine.assets_ready(ticket, &batch).unwrap();

    for content in ContentId::all(2) {
        let pair = slots_with(&machine, content);
        machine.select_card(pair[0]);
        machine.select_card(pair[1]);
    }

    assert_eq!(machine.score(), 2);
    assert_eq!(machine.phase(), Phase::RoundComplete);
}

proptest! {
    // A player who clears the board always ends at exactly pair_count,
    // incrementing once per match, regardless of the deal.
    #[test]
    fn prop_clearing_the_board_scores_once_per_pair(seed in any::<u64>()) {
        let mut machine = ready_machine(seed);

        let mut expected = 0u8;
        for content in ContentId::all(8) {
            let pair = slots_with(&machine, content);
            machine.select_card(pair[0]);
            let out = machine.select_card(pair[1]);

            expected += 1;
            prop_assert!(
                matches!(out.event, TapEvent::Matched { .. }),
                "expected TapEvent::Matched, got {:?}",
                out.event
            );
            prop_assert_eq!(machine.score(), expected);
        }

        prop_assert!(machine.round().is_finished());
        prop_assert_eq!(machine.round().cards_remaining(), 0);
    }

    // Mismatches never move the score, whatever the deal.
    #[test]
    fn prop_mismatches_never_score(seed in any::<u64>()) {
        let mut machine = ready_machine(seed);

        let a = slots_with(&machine, ContentId::new(0));
        let b = slots_with(&machine, ContentId::new(1));

        machine.select_card(a[0]);
        let out = machine.select_card(b[0]);
        prop_assert!(
            matches!(out.event, TapEvent::Mismatched { .. }),
            "expected TapEvent::Mismatched, got {:?}",
            out.event
        );
        prop_assert_eq!(machine.score(), 0);

        machine.flip_down_complete();
        prop_assert_eq!(machine.round().cards_remaining(), 16);
    }
}
