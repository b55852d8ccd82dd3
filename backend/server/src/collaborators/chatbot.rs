use super::CollaboratorError;

pub trait Chatbot: Send + Sync {
    fn reply(&self, message: &str) -> Result<String, CollaboratorError>;
}

const EMPTY_PROMPT: &str = "Say something and I'll do my best to help you barter skills!";

const FALLBACK: &str =
    "I'm not sure about that yet. Try asking about skills, bartering, scheduling or feedback.";

// First match wins, so more specific topics go first.
const TOPICS: &[(&[&str], &str)] = &[
    (
        &["recommend", "suggest", "learn"],
        "Share your skills on the Recommend page and I'll suggest what to learn next.",
    ),
    (
        &["barter", "exchange", "swap", "trade"],
        "Skill Barter lets you trade an hour of your skill for an hour of someone else's.",
    ),
    (
        &["schedule", "session", "book", "meet"],
        "Use the Schedule form to pick a time with your barter partner.",
    ),
    (
        &["feedback", "contact", "bug", "problem"],
        "You can reach us through the Feedback form at the bottom of the page.",
    ),
    (
        &["skill", "teach"],
        "Add the skills you can teach to your profile so others can find you.",
    ),
    (
        &["hello", "hi", "hey"],
        "Hello! How can I help you with Skill Barter today?",
    ),
    (&["thank"], "You're welcome! Happy bartering."),
];

/// Canned replies keyed on words in the message.
#[derive(Default, Clone, Copy, Debug)]
pub struct KeywordChatbot;

impl Chatbot for KeywordChatbot {
    fn reply(&self, message: &str) -> Result<String, CollaboratorError> {
        let words: Vec<String> = message
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .collect();

        if words.is_empty() {
            return Ok(EMPTY_PROMPT.to_string());
        }

        let reply = TOPICS
            .iter()
            .find(|(keywords, _)| {
                words
                    .iter()
                    .any(|word| keywords.iter().any(|keyword| word.starts_with(keyword)))
            })
            .map(|(_, reply)| *reply)
            .unwrap_or(FALLBACK);

        Ok(reply.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        assert_eq!(KeywordChatbot.reply("").unwrap(), EMPTY_PROMPT);
        assert_eq!(KeywordChatbot.reply("  ?! ").unwrap(), EMPTY_PROMPT);
    }

    #[test]
    fn test_greeting() {
        assert!(KeywordChatbot.reply("Hi there").unwrap().starts_with("Hello!"));
    }

    #[test]
    fn test_topic_priority() {
        let reply = KeywordChatbot
            .reply("Hey, how do I trade my skills?")
            .unwrap();
        assert!(reply.contains("trade an hour"));

        let reply = KeywordChatbot.reply("Can you suggest a skill?").unwrap();
        assert!(reply.contains("Recommend page"));
    }

    #[test]
    fn test_fallback() {
        assert_eq!(KeywordChatbot.reply("What's the weather?").unwrap(), FALLBACK);
    }
}
