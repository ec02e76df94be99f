use super::*;

#[test]
fn there_is_one_card_per_game() {
    let mut games: Vec<ActiveGame> = GAMES.iter().map(|def| def.game).collect();
    games.dedup();
    assert_eq!(games.len(), 3);
    assert!(games.contains(&ActiveGame::Memory));
    assert!(games.contains(&ActiveGame::Quiz));
    assert!(games.contains(&ActiveGame::Reaction));
}

#[test]
fn game_titles_are_unique_and_nonempty() {
    let mut titles: Vec<&str> = GAMES.iter().map(|def| def.title).collect();
    assert!(titles.iter().all(|title| !title.is_empty()));
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), GAMES.len());
}
