use std::io::Write;

use dass_cli::form::{AnswerValue, answers_from_args, answers_from_file, apply_answers};
use dass_instruments::error::InstrumentError;
use dass_instruments::instruments::dass21::Dass21;
use dass_instruments::session::Session;

#[test]
fn parses_numbers_and_labels() {
    let raw: Vec<String> = ["0", " 3", "Often", "almost always", ""]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(
        answers_from_args(&raw),
        vec![
            Some(AnswerValue::Score(0)),
            Some(AnswerValue::Score(3)),
            Some(AnswerValue::Label("Often".to_string())),
            Some(AnswerValue::Label("almost always".to_string())),
            None,
        ]
    );
}

#[test]
fn blank_entry_leaves_its_question_unanswered() {
    let mut raw = vec!["3".to_string(), String::new()];
    raw.extend(std::iter::repeat_n("1".to_string(), 19));
    assert_eq!(raw.len(), 21);

    let mut session = Session::new(&Dass21);
    apply_answers(&mut session, &answers_from_args(&raw)).unwrap();
    assert_eq!(session.selected(0), Some(3));
    assert_eq!(session.selected(1), None);
    assert_eq!(session.selected(2), Some(1));

    match session.submit().unwrap_err() {
        InstrumentError::Incomplete { unanswered } => assert_eq!(unanswered, vec![2]),
        other => panic!("expected Incomplete, got {other:?}"),
    }
}

#[test]
fn blank_entry_does_not_pull_later_answers_forward() {
    let mut raw = vec!["3".to_string(), " ".to_string()];
    raw.extend(std::iter::repeat_n("0".to_string(), 20));

    let mut session = Session::new(&Dass21);
    assert!(apply_answers(&mut session, &answers_from_args(&raw)).is_err());
    assert_eq!(session.answered(), 0);
}

#[test]
fn full_answer_list_completes_the_session() {
    let mut session = Session::new(&Dass21);
    let answers: Vec<_> = (0..21).map(|i| Some(AnswerValue::Score(i % 4))).collect();
    apply_answers(&mut session, &answers).unwrap();
    assert!(session.is_complete());
}

#[test]
fn short_answer_list_leaves_session_incomplete() {
    let mut session = Session::new(&Dass21);
    let answers = vec![Some(AnswerValue::Score(1)); 19];
    apply_answers(&mut session, &answers).unwrap();

    match session.submit().unwrap_err() {
        InstrumentError::Incomplete { unanswered } => assert_eq!(unanswered, vec![20, 21]),
        other => panic!("expected Incomplete, got {other:?}"),
    }
}

#[test]
fn too_many_answers_is_an_error() {
    let mut session = Session::new(&Dass21);
    let answers = vec![Some(AnswerValue::Score(0)); 22];
    assert!(apply_answers(&mut session, &answers).is_err());
    assert_eq!(session.answered(), 0);
}

#[test]
fn unknown_label_is_an_error() {
    let mut session = Session::new(&Dass21);
    let answers = vec![Some(AnswerValue::Label("Rarely".to_string()))];
    assert!(apply_answers(&mut session, &answers).is_err());
}

#[test]
fn reads_mixed_answers_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"[0, "Sometimes", null, "Almost Always"]"#).unwrap();

    let answers = answers_from_file(file.path()).unwrap();
    assert_eq!(
        answers,
        vec![
            Some(AnswerValue::Score(0)),
            Some(AnswerValue::Label("Sometimes".to_string())),
            None,
            Some(AnswerValue::Label("Almost Always".to_string())),
        ]
    );
}
