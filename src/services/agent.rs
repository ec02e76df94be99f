//! Canned support agent.
//!
//! DESIGN
//! ======
//! Keyword-routed topical replies with fixed follow-up suggestions.
//! Deterministic given the query, which keeps the endpoint contract
//! testable and gives the widget a stable offline demo. When an upstream
//! relay is configured the reply text comes from there instead, but the
//! follow-up suggestions still come from this router.

#[cfg(test)]
#[path = "agent_test.rs"]
mod agent_test;

/// Reply text plus follow-up suggestions for one query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentReply {
    pub response: String,
    pub follow_ups: Vec<String>,
}

/// Support topics the router recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Topic {
    Greeting,
    Orders,
    Returns,
    Languages,
    Hours,
    Farewell,
    Fallback,
}

fn classify(query: &str) -> Topic {
    let lower = query.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));

    if has(&["translate", "language", "språk"]) {
        Topic::Languages
    } else if has(&["order", "delivery", "leverans", "package", "paket"]) {
        Topic::Orders
    } else if has(&["return", "refund", "retur", "återbetal"]) {
        Topic::Returns
    } else if has(&["open", "hours", "öppet", "öppettider"]) {
        Topic::Hours
    } else if has(&["bye", "goodbye", "thanks", "thank you", "tack"]) {
        Topic::Farewell
    } else if has(&["hello", "hi ", "hej", "hallå"]) || lower == "hi" {
        Topic::Greeting
    } else {
        Topic::Fallback
    }
}

/// Produce the canned reply for a query.
#[must_use]
pub fn respond(query: &str) -> AgentReply {
    let (response, follow_ups): (&str, &[&str]) = match classify(query) {
        Topic::Greeting => (
            "Hello! Welcome to CService. I can help with orders, returns, opening hours, and more. What do you need today?",
            &["Where is my order?", "How do I return an item?"],
        ),
        Topic::Orders => (
            "I can help with your order. Most deliveries arrive within 2-4 business days, and you can track yours with the order number from your confirmation email.",
            &["My delivery is late", "Change my delivery address"],
        ),
        Topic::Returns => (
            "You can return any item within 30 days of delivery. Start a return from your order page and we will email you a prepaid shipping label.",
            &["Where is my refund?", "Return without a receipt"],
        ),
        Topic::Languages => (
            "I can chat with you in English, Swedish, Spanish, Chinese, or Arabic. Use the translate button under any message, or switch language in the Translate tab.",
            &["Translate this conversation", "Switch to Swedish"],
        ),
        Topic::Hours => (
            "Our customer service is open weekdays 08:00-20:00 and weekends 10:00-16:00. This chat is available around the clock.",
            &["Talk to a human agent"],
        ),
        Topic::Farewell => ("Thanks for chatting with CService. Have a great day!", &[]),
        Topic::Fallback => (
            "I'm not sure I understood that. I can help with orders, returns, opening hours, and language questions.",
            &["Where is my order?", "What languages do you speak?"],
        ),
    };

    AgentReply {
        response: response.to_owned(),
        follow_ups: follow_ups.iter().map(|&s| s.to_owned()).collect(),
    }
}
