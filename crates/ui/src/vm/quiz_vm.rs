use services::QuizService;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub prompt: String,
    pub options: Vec<String>,
    pub progress_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub score_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Question(QuizQuestionVm),
    Complete(QuizResultVm),
}

#[must_use]
pub fn map_quiz_screen(quiz: &QuizService) -> QuizScreenVm {
    let progress = quiz.progress();
    match quiz.current_question() {
        Some(question) => QuizScreenVm::Question(QuizQuestionVm {
            prompt: question.text().to_string(),
            options: question.options().to_vec(),
            progress_label: format!("Question {} of {}", progress.position + 1, progress.total),
        }),
        None => QuizScreenVm::Complete(QuizResultVm {
            score_label: format!("You scored {} out of {}.", progress.score, progress.total),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use woodland_core::catalog::default_questions;

    #[test]
    fn question_screen_shows_position_and_options() {
        let mut quiz = QuizService::new(default_questions()).unwrap();
        quiz.submit_answer("Spruce").unwrap();

        let QuizScreenVm::Question(vm) = map_quiz_screen(&quiz) else {
            panic!("expected a question screen");
        };
        assert_eq!(vm.progress_label, "Question 2 of 4");
        assert_eq!(vm.options.len(), 4);
        assert_eq!(vm.options[0], "Point Pleasant Park");
    }

    #[test]
    fn finished_quiz_shows_score() {
        let mut quiz = QuizService::new(default_questions()).unwrap();
        for option in ["Spruce", "Citadel Hill", "They filter air and store carbon", "Penguins and seals"] {
            quiz.submit_answer(option).unwrap();
        }

        assert_eq!(
            map_quiz_screen(&quiz),
            QuizScreenVm::Complete(QuizResultVm {
                score_label: "You scored 2 out of 4.".to_string(),
            })
        );
    }
}
