use dass_core::models::{Severity, Subscale};
use dass_instruments::error::InstrumentError;
use dass_instruments::instruments::dass21::Dass21;
use dass_instruments::session::Session;

#[test]
fn new_session_has_everything_unanswered() {
    let session = Session::new(&Dass21);
    assert_eq!(session.answered(), 0);
    assert!(!session.is_complete());
    assert_eq!(session.unanswered(), (1..=21).collect::<Vec<_>>());
}

#[test]
fn incomplete_submission_lists_missing_questions() {
    let mut session = Session::new(&Dass21);
    for q in 0..21 {
        if q != 3 && q != 17 {
            session.answer(q, 1).unwrap();
        }
    }

    let err = session.submit().unwrap_err();
    match err {
        InstrumentError::Incomplete { unanswered } => assert_eq!(unanswered, vec![4, 18]),
        other => panic!("expected Incomplete, got {other:?}"),
    }
}

#[test]
fn incomplete_error_message_names_questions() {
    let err = InstrumentError::Incomplete {
        unanswered: vec![2, 9],
    };
    assert_eq!(err.to_string(), "unanswered questions: 2, 9");
}

#[test]
fn reanswering_replaces_previous_choice() {
    let mut session = Session::new(&Dass21);
    session.answer(0, 3).unwrap();
    session.answer(0, 1).unwrap();
    assert_eq!(session.selected(0), Some(1));
    assert_eq!(session.answered(), 1);
}

#[test]
fn answers_by_label() {
    let mut session = Session::new(&Dass21);
    session.answer_label(0, "almost always").unwrap();
    assert_eq!(session.selected(0), Some(3));

    let err = session.answer_label(1, "Rarely").unwrap_err();
    assert!(matches!(err, InstrumentError::UnknownOption { question: 2, .. }));
}

#[test]
fn rejects_unknown_question_and_bad_score() {
    let mut session = Session::new(&Dass21);
    assert!(matches!(
        session.answer(21, 0),
        Err(InstrumentError::UnknownQuestion {
            question: 21,
            count: 21
        })
    ));
    assert!(matches!(
        session.answer(0, 4),
        Err(InstrumentError::ScoreOutOfRange { .. })
    ));
    assert_eq!(session.answered(), 0);
}

#[test]
fn complete_session_submits_scored_totals() {
    let mut session = Session::new(&Dass21);
    session.answer_all(&[2; 21]).unwrap();
    assert!(session.is_complete());

    let submission = session.submit().unwrap();
    assert_eq!(submission.instrument_id, "dass21");
    assert_eq!(submission.responses.len(), 21);
    assert!(submission.responses.iter().all(|r| r.score == 2));

    // 7 questions x 2 = 14 raw, 28 doubled for every subscale.
    let expected = [
        (Subscale::Depression, Severity::ExtremelySevere),
        (Subscale::Anxiety, Severity::ExtremelySevere),
        (Subscale::Stress, Severity::Severe),
    ];
    for (total, (subscale, severity)) in submission.totals.iter().zip(expected) {
        assert_eq!(total.subscale, subscale);
        assert_eq!(total.raw, 14);
        assert_eq!(total.score, 28);
        assert_eq!(total.severity, severity);
    }
}
