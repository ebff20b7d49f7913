//! Keypad-to-log pipeline through the session layer.

use tui_darts::core::{DartsEngine, GameConfig};
use tui_darts::input::PadKey;
use tui_darts::types::{GameStatus, PadAction};
use tui_darts::{EventLog, Session};

fn keys(s: &mut Session<Vec<u8>>, keys: &[PadKey]) {
    for &k in keys {
        s.press(k);
    }
}

fn log_lines(s: Session<Vec<u8>>) -> Vec<serde_json::Value> {
    let bytes = s.into_log().unwrap().into_inner();
    String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn test_typed_darts_score_a_round() {
    let mut s: Session<Vec<u8>> = Session::new(GameConfig::zero_one(501).unwrap());
    keys(
        &mut s,
        &[
            PadKey::Triple,
            PadKey::Digit(2),
            PadKey::Digit(0),
            PadKey::Double,
            PadKey::Bull,
            PadKey::Digit(1),
            PadKey::Enter,
        ],
    );
    let snap = s.snapshot();
    assert_eq!(snap.remaining(), Some(501 - 60 - 50 - 1));
    let labels: Vec<_> = snap.turn.slots().iter().map(|sl| sl.label()).collect();
    assert_eq!(labels, vec!["T-20", "D-BULL", "S-1"]);

    assert!(s.press(PadKey::NextRound));
    assert_eq!(s.engine().round_number(), 2);
    assert_eq!(s.engine().round_log()[0].total, 111);
}

#[test]
fn test_full_cricket_game_is_logged() {
    let log = EventLog::with_writer(Vec::new());
    let mut s = Session::with_log(GameConfig::cricket(), log);

    for target in [20u8, 19, 18, 17, 16, 15] {
        s.apply(PadAction::Throw {
            segment: target,
            multiplier: 3,
        });
        if s.engine().round_complete() {
            s.apply(PadAction::NextRound);
        }
    }
    s.press(PadKey::Double);
    s.press(PadKey::Bull);
    s.press(PadKey::Bull);
    assert_eq!(s.engine().status(), GameStatus::Finished);
    assert_eq!(s.history().len(), 1);
    assert_eq!(s.history()[0].game, "Cricket");

    s.press(PadKey::NextRound);
    assert_eq!(s.history()[0].rounds, 3);

    let lines = log_lines(s);
    let events: Vec<&str> = lines.iter().map(|l| l["event"].as_str().unwrap()).collect();
    assert_eq!(
        events,
        vec![
            "throw", "throw", "throw", "next_round", "throw", "throw", "throw", "next_round",
            "throw", "throw", "game_end", "next_round",
        ]
    );
    let end = &lines[10];
    assert_eq!(end["summary"]["status"], "finished");
    assert_eq!(end["snapshot"]["board"]["kind"], "cricket");
    assert_eq!(lines[11]["seq"], 12);
}

#[test]
fn test_restart_after_game_over_starts_fresh() {
    let config = GameConfig::zero_one(301).unwrap().with_max_rounds(1).unwrap();
    let mut s: Session<Vec<u8>> = Session::new(config);
    keys(&mut s, &[PadKey::Miss, PadKey::Miss, PadKey::Miss, PadKey::NextRound]);
    assert_eq!(s.engine().status(), GameStatus::GameOver);
    assert!(!s.press(PadKey::Digit(5)));

    assert!(s.press(PadKey::Restart));
    assert_eq!(s.engine().status(), GameStatus::Playing);
    assert_eq!(s.engine().round_number(), 1);
    assert!(s.engine().round_log().is_empty());
    assert_eq!(s.history().len(), 1);

    assert!(s.press(PadKey::Digit(5)));
    assert_eq!(s.snapshot().remaining(), Some(296));
}

#[test]
fn test_rejected_keys_are_not_logged() {
    let log = EventLog::with_writer(Vec::new());
    let mut s = Session::with_log(GameConfig::default(), log);
    s.press(PadKey::Backspace);
    s.press(PadKey::NextRound);
    s.press(PadKey::RetryRound);
    assert!(log_lines(s).is_empty());
}
