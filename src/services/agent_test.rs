use super::*;

#[test]
fn greeting_routes_to_the_welcome_reply() {
    let reply = respond("hello there");
    assert!(reply.response.contains("Welcome to CService"));
    assert!(!reply.follow_ups.is_empty());
}

#[test]
fn bare_hi_is_a_greeting() {
    assert!(respond("hi").response.contains("Welcome"));
    assert!(respond("Hej!").response.contains("Welcome"));
}

#[test]
fn order_keywords_route_to_order_help() {
    for query in ["where is my order", "Leverans imorgon?", "track my package"] {
        assert!(respond(query).response.contains("order"), "{query}");
    }
}

#[test]
fn return_keywords_route_to_returns() {
    assert!(respond("I want a refund").response.contains("return"));
    assert!(respond("hur gör jag en retur?").response.contains("30 days"));
}

#[test]
fn language_questions_route_to_the_language_reply() {
    let reply = respond("what languages do you speak?");
    assert!(reply.response.contains("English, Swedish, Spanish, Chinese, or Arabic"));
    let reply = respond("can you translate this?");
    assert!(reply.response.contains("translate"));
}

#[test]
fn language_beats_other_topics_when_both_match() {
    // "translate my order confirmation" should land on languages, which the
    // widget pairs with its inline translation offer.
    let reply = respond("translate my order confirmation");
    assert!(reply.response.contains("English, Swedish"));
}

#[test]
fn farewell_has_no_follow_ups() {
    let reply = respond("thanks, bye!");
    assert!(reply.follow_ups.is_empty());
}

#[test]
fn unknown_queries_get_the_fallback() {
    let reply = respond("qwerty asdf");
    assert!(reply.response.contains("not sure"));
    assert!(!reply.follow_ups.is_empty());
}

#[test]
fn responses_are_deterministic() {
    assert_eq!(respond("where is my order"), respond("where is my order"));
}
