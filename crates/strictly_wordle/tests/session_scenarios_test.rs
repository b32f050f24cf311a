//! End-to-end rounds through the public session API.

use strictly_wordle::{
    Classification, GameSession, MAX_GUESSES, Outcome, Phase, Submission, SubmitError, WordList,
};
use Classification::{Absent, Correct, Present};

fn session() -> GameSession<WordList> {
    GameSession::new(WordList::builtin())
}

fn guess(session: &mut GameSession<WordList>, word: &str) -> strictly_wordle::GuessReport {
    match session.submit_word(word) {
        Ok(Submission::Guessed(report)) => report,
        other => panic!("Expected {} to be scored, got {:?}", word, other),
    }
}

#[test]
fn test_exact_guess_wins_immediately() {
    let mut session = session();
    assert_eq!(session.submit_word("CRANE"), Ok(Submission::SecretSet));

    let report = guess(&mut session, "CRANE");
    assert_eq!(report.evaluation().classifications(), &[Correct; 5]);
    assert_eq!(report.outcome(), Some(Outcome::Win));
    assert_eq!(session.guess_count(), 1);
    assert!(session.is_over());
    assert_eq!(session.outcome(), Some(Outcome::Win));
}

#[test]
fn test_partial_match_feedback() {
    let mut session = session();
    session.submit_word("CRANE").unwrap();

    let report = guess(&mut session, "TRAIN");
    assert_eq!(
        report.evaluation().classifications(),
        &[Absent, Correct, Correct, Absent, Present]
    );
    assert!(!session.is_over());
}

#[test]
fn test_repeated_letters_each_marked_present() {
    let mut session = session();
    session.submit_word("APPLE").unwrap();

    let report = guess(&mut session, "PEPPY");
    let classes = report.evaluation().classifications();
    assert_eq!(classes[0], Present);
    assert_eq!(classes[2], Correct);
    assert_eq!(classes[3], Present);
    assert_eq!(classes, &[Present, Present, Correct, Present, Absent]);
}

#[test]
fn test_six_misses_lose() {
    let mut session = session();
    session.submit_word("CRANE").unwrap();

    let misses = ["TRAIN", "SLIDE", "NORTH", "GHOST", "STUDY", "WORLD"];
    for (i, word) in misses.iter().enumerate() {
        let report = guess(&mut session, word);
        assert_eq!(report.guesses_remaining(), MAX_GUESSES - (i + 1));
        if i + 1 < MAX_GUESSES {
            assert_eq!(report.outcome(), None);
        } else {
            assert_eq!(report.outcome(), Some(Outcome::Loss));
        }
    }

    assert!(session.is_over());
    assert_eq!(session.outcome(), Some(Outcome::Loss));
    assert_eq!(session.guesses_remaining(), 0);
}

#[test]
fn test_win_on_last_guess() {
    let mut session = session();
    session.submit_word("CRANE").unwrap();

    for word in ["TRAIN", "SLIDE", "NORTH", "GHOST", "STUDY"] {
        guess(&mut session, word);
    }
    let report = guess(&mut session, "CRANE");
    assert_eq!(report.outcome(), Some(Outcome::Win));
    assert_eq!(report.guesses_remaining(), 0);
}

#[test]
fn test_short_input_rejected_in_every_phase() {
    let mut session = session();

    assert!(session.submit_word("AB").unwrap_err().is_invalid_word());
    assert_eq!(session.phase(), Phase::AwaitingSecret);

    session.submit_word("CRANE").unwrap();
    guess(&mut session, "TRAIN");
    assert!(session.submit_word("AB").unwrap_err().is_invalid_word());
    assert_eq!(session.guess_count(), 1);

    guess(&mut session, "CRANE");
    assert!(session.submit_word("AB").unwrap_err().is_invalid_word());
    assert_eq!(session.guess_count(), 2);
}

#[test]
fn test_lowercase_input_is_canonicalized() {
    let mut session = session();
    session.submit_word("crane").unwrap();

    let report = guess(&mut session, "Crane");
    assert_eq!(report.outcome(), Some(Outcome::Win));
    assert_eq!(report.record().guess().to_string(), "CRANE");
}

#[test]
fn test_replay_after_round_over() {
    let mut session = session();
    session.submit_word("CRANE").unwrap();
    guess(&mut session, "CRANE");
    assert_eq!(
        session.submit_word("TRAIN"),
        Err(SubmitError::RoundOver(Outcome::Win))
    );

    session.start_new_round();
    assert_eq!(session.phase(), Phase::AwaitingSecret);
    assert_eq!(session.submit_word("TRAIN"), Ok(Submission::SecretSet));
    let report = guess(&mut session, "CRANE");
    assert_eq!(report.guesses_remaining(), MAX_GUESSES - 1);
}
