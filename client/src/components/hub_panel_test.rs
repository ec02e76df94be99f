use super::*;

#[test]
fn cultural_quiz_has_three_questions_with_valid_answers() {
    let bank = questions();
    assert_eq!(bank.len(), 3);
    for question in &bank {
        assert!(question.correct < question.options.len());
    }
}

#[test]
fn completing_the_quiz_exposes_the_reward_code() {
    let mut game = TriviaGame::with_reward(questions(), AdvancePolicy::ManualReveal, REWARD_CODE);
    for question in questions() {
        game.select(question.correct);
        game.reveal();
        game.advance();
    }
    assert!(game.completed());
    assert_eq!(game.reward_code(), Some("CULTURE10"));
    assert_eq!(game.score(), 3);
}

#[test]
fn faq_entries_are_nonempty() {
    assert_eq!(FAQ.len(), 4);
    for entry in FAQ {
        assert!(!entry.question.is_empty());
        assert!(!entry.answer.is_empty());
    }
}
