use services::{QuizError, QuizService};
use woodland_core::catalog::default_questions;

#[test]
fn answering_every_question_correctly_scores_four() {
    let mut quiz = QuizService::new(default_questions()).unwrap();

    while let Some(question) = quiz.current_question() {
        let answer = question.correct_answer().to_owned();
        quiz.submit_answer(&answer).unwrap();
    }

    let progress = quiz.progress();
    assert_eq!(progress.score, 4);
    assert_eq!(progress.total, 4);
    assert!(progress.finished);
}

#[test]
fn score_only_counts_exact_matches() {
    let mut quiz = QuizService::new(default_questions()).unwrap();

    let first = quiz.submit_answer("spruce").unwrap();
    let second = quiz.submit_answer("Point Pleasant Park").unwrap();

    assert!(!first.correct);
    assert!(second.correct);
    assert_eq!(quiz.score(), 1);
    assert_eq!(quiz.progress().position, 2);
}

#[test]
fn try_again_restores_a_fresh_session() {
    let mut quiz = QuizService::new(default_questions()).unwrap();
    for _ in 0..quiz.question_count() {
        quiz.submit_answer("Spruce").unwrap();
    }
    assert!(quiz.is_finished());
    assert_eq!(quiz.submit_answer("Spruce"), Err(QuizError::Finished));

    quiz.reset();
    quiz.reset();

    let progress = quiz.progress();
    assert_eq!((progress.position, progress.score, progress.finished), (0, 0, false));
    assert_eq!(
        quiz.current_question().map(|q| q.text().to_owned()),
        default_questions().first().map(|q| q.text().to_owned())
    );
}
