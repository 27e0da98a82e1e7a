use super::*;
use zenai_content::StudioCatalog;

fn deck() -> ReelDeck {
    let catalog = StudioCatalog::studio().expect("catalog builds");
    ReelDeck::new(catalog.reels())
}

#[test]
fn reels_start_muted_and_idle() {
    let deck = deck();
    assert_eq!(deck.len(), 5);
    for index in 0..deck.len() {
        assert_eq!(deck.state(index), Some(PlaybackState::Idle));
        assert!(deck.is_muted(index));
        assert!(!deck.shows_placeholder(index));
    }
    assert_eq!(deck.reel(0).map(|reel| reel.src), Some("/videos/dog.mp4"));
    assert!(deck.reel(5).is_none());
}

#[test]
fn hover_plays_and_leave_pauses() {
    let mut deck = deck();
    deck.hover_enter(1);
    assert_eq!(deck.state(1), Some(PlaybackState::Playing));
    assert!(!deck.is_muted(1));

    deck.hover_enter(1);
    deck.hover_leave(1);
    assert_eq!(
        deck.take_commands(),
        vec![MediaCommand::Play { reel: 1 }, MediaCommand::Pause { reel: 1 }]
    );
    assert!(deck.is_muted(1));
    assert!(deck.take_commands().is_empty());
}

#[test]
fn leave_without_enter_sends_nothing() {
    let mut deck = deck();
    deck.hover_leave(2);
    deck.hover_enter(42);
    assert!(deck.take_commands().is_empty());
}

#[test]
fn rejected_play_can_be_retried() {
    let mut deck = deck();
    deck.hover_enter(0);
    deck.play_rejected(0, "NotAllowedError");
    assert_eq!(deck.state(0), Some(PlaybackState::Idle));

    deck.hover_enter(0);
    assert_eq!(
        deck.take_commands(),
        vec![MediaCommand::Play { reel: 0 }, MediaCommand::Play { reel: 0 }]
    );
}

#[test]
fn failed_reel_shows_placeholder_and_ignores_hover() {
    let mut deck = deck();
    deck.load_failed(3, "404");
    assert!(deck.shows_placeholder(3));

    deck.hover_enter(3);
    deck.hover_leave(3);
    assert!(deck.take_commands().is_empty());
    assert_eq!(deck.state(3), Some(PlaybackState::Failed));
}
