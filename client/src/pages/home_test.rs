use super::*;

#[test]
fn there_is_one_view_def_per_active_view() {
    let mut views: Vec<ActiveView> = VIEWS.iter().map(|def| def.view).collect();
    views.dedup();
    assert_eq!(views.len(), 3);
    assert!(views.contains(&ActiveView::Chat));
    assert!(views.contains(&ActiveView::Hub));
    assert!(views.contains(&ActiveView::Games));
}

#[test]
fn chat_is_the_first_and_default_view() {
    assert_eq!(VIEWS[0].view, ActiveView::Chat);
    assert_eq!(ActiveView::default(), ActiveView::Chat);
}

#[test]
fn view_names_are_unique_and_nonempty() {
    let mut names: Vec<&str> = VIEWS.iter().map(|def| def.name).collect();
    assert!(names.iter().all(|name| !name.is_empty()));
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), VIEWS.len());
}
