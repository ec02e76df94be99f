use super::*;

#[test]
fn question_bank_has_five_questions() {
    assert_eq!(questions().len(), 5);
}

#[test]
fn every_correct_index_is_in_range() {
    for question in questions() {
        assert!(
            question.correct < question.options.len(),
            "{}: correct index out of range",
            question.prompt
        );
    }
}

#[test]
fn full_playthrough_with_all_correct_answers_scores_full_marks() {
    let bank = questions();
    let mut game = TriviaGame::new(
        bank.clone(),
        AdvancePolicy::AutoAdvance { delay_ms: AUTO_ADVANCE_DELAY_MS },
    );
    for question in &bank {
        assert!(matches!(game.select(question.correct), SelectOutcome::ScheduleAdvance { .. }));
        game.advance();
    }
    assert!(game.completed());
    assert_eq!(game.score() as usize, bank.len());
}
