//! Chef Bot: canned kitchen tips picked by keyword.
//!
//! There is no model and no memory. Each reply depends only on the message
//! that triggered it.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::state::{ChatMessage, ChatRole};

pub const GREETING: &str =
    "Hi! I'm Chef Bot. Ask me about substitutions, cooking times, or recipe tips!";

pub const FALLBACK_REPLY: &str = "I'm still learning! Could you ask that differently?";

/// How long the bot "types" before its reply shows up
pub const REPLY_DELAY: Duration = Duration::from_millis(800);

/// Checked in order; the first rule with any matching substring wins.
const RULES: &[(&[&str], &str)] = &[
    (&["hi", "hello", "hey"], "Hello chef! What are we cooking today?"),
    (&["thank"], "You're welcome! Happy cooking! 🍳"),
    (&["egg"], "Baking? Try 1/4 cup applesauce or 1 mashed banana per egg."),
    (&["milk"], "Almond, soy, oat, or coconut milk work great."),
    (&["butter"], "You can use oil (coconut/vegetable) or applesauce in baking."),
    (&["sugar"], "Honey or maple syrup are great substitutes."),
    (&["salt"], "Too salty? Add a splash of acid (lemon/vinegar) or a pinch of sugar."),
    (&["spicy"], "Too spicy? Add dairy (yogurt, milk) or nut butter to cool it down."),
    (&["vegetarian"], "Swap meat for lentils, chickpeas, mushrooms, or tofu."),
    (&["time"], "Chicken takes 20-30 mins. Pasta is usually 8-12 mins boiling."),
];

pub struct ChefBot;

impl ChefBot {
    pub fn reply(input: &str) -> &'static str {
        let lower = input.to_lowercase();
        RULES
            .iter()
            .find(|(patterns, _)| patterns.iter().any(|p| lower.contains(p)))
            .map(|(_, reply)| *reply)
            .unwrap_or(FALLBACK_REPLY)
    }
}

#[derive(Debug, Clone)]
struct PendingReply {
    due: Instant,
    text: &'static str,
}

/// Message history for one chat widget session
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    pending: VecDeque<PendingReply>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Bot,
                text: GREETING.to_string(),
            }],
            pending: VecDeque::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Record a user message and schedule the bot's answer.
    /// Blank input is ignored and returns false.
    pub fn submit(&mut self, input: &str, now: Instant) -> bool {
        if input.trim().is_empty() {
            return false;
        }

        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text: input.to_string(),
        });
        self.pending.push_back(PendingReply {
            due: now + REPLY_DELAY,
            text: ChefBot::reply(input),
        });
        true
    }

    /// Deliver every reply whose delay has elapsed. Returns how many arrived.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut delivered = 0;
        while let Some(front) = self.pending.front() {
            if front.due > now {
                break;
            }
            if let Some(reply) = self.pending.pop_front() {
                self.messages.push(ChatMessage {
                    role: ChatRole::Bot,
                    text: reply.text.to_string(),
                });
                delivered += 1;
            }
        }
        delivered
    }

    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_replies() {
        assert_eq!(ChefBot::reply("Hello there"), "Hello chef! What are we cooking today?");
        assert_eq!(ChefBot::reply("THANKS a lot"), "You're welcome! Happy cooking! 🍳");
        assert_eq!(ChefBot::reply("no milk at home"), "Almond, soy, oat, or coconut milk work great.");
        assert_eq!(
            ChefBot::reply("Cooking time for pasta?"),
            "Chicken takes 20-30 mins. Pasta is usually 8-12 mins boiling."
        );
    }

    #[test]
    fn test_rule_order_wins() {
        // "egg" comes before "butter" in the rule list
        assert_eq!(
            ChefBot::reply("replace egg and butter"),
            "Baking? Try 1/4 cup applesauce or 1 mashed banana per egg."
        );
        // greeting substrings match inside other words too
        assert_eq!(ChefBot::reply("what is this"), "Hello chef! What are we cooking today?");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(ChefBot::reply("quantum"), FALLBACK_REPLY);
        assert_eq!(ChefBot::reply(""), FALLBACK_REPLY);
    }

    #[test]
    fn test_log_starts_with_greeting() {
        let log = ChatLog::new();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].role, ChatRole::Bot);
        assert_eq!(log.messages()[0].text, GREETING);
    }

    #[test]
    fn test_reply_arrives_after_delay() {
        let mut log = ChatLog::new();
        let t0 = Instant::now();
        assert!(log.submit("too much salt", t0));
        assert!(log.is_typing());
        assert_eq!(log.messages().len(), 2);

        assert_eq!(log.poll(t0 + Duration::from_millis(100)), 0);
        assert_eq!(log.poll(t0 + REPLY_DELAY), 1);
        assert!(!log.is_typing());

        let last = log.messages().last().unwrap();
        assert_eq!(last.role, ChatRole::Bot);
        assert!(last.text.starts_with("Too salty?"));
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut log = ChatLog::new();
        assert!(!log.submit("   ", Instant::now()));
        assert_eq!(log.messages().len(), 1);
        assert!(!log.is_typing());
    }
}
