//! Core data models for the MiniCat catalog and creation surfaces.
//! Game records are owned by the catalog; the modal session treats them as
//! read-only for its whole lifetime.

use serde::{Deserialize, Serialize};

/// Placeholder snippet used when a record carries no code payload.
pub const DEFAULT_SNIPPET: &str = "print(\"Hello from Python!\")\n# Your game code will be here\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Label shown on catalog badges.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Label shown on the publish bar (the creation surface uses the
    /// easy/medium/hard wording).
    pub fn draft_label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "easy",
            Difficulty::Intermediate => "medium",
            Difficulty::Advanced => "hard",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub difficulty: Difficulty,
    pub rating: f64,
    pub author: String,
    /// Optional Python payload run inside the modal's script runtime.
    pub python_code: Option<String>,
}

impl GameRecord {
    pub fn code_or_default(&self) -> &str {
        self.python_code.as_deref().unwrap_or(DEFAULT_SNIPPET)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: usize,
    pub sender: Sender,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub difficulty: Difficulty,
    /// Starter code seeded into the draft when the template is selected.
    pub snippet: &'static str,
}

/// Work-in-progress game on the creation surface. Persisted to localStorage
/// as JSON so a draft survives a reload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameDraft {
    pub title: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub code: String,
}

impl Default for GameDraft {
    fn default() -> Self {
        Self {
            title: "Untitled Cat Meme Game".to_string(),
            difficulty: Difficulty::Intermediate,
            category: "Memes".to_string(),
            code: DEFAULT_SNIPPET.to_string(),
        }
    }
}

pub fn default_games() -> Vec<GameRecord> {
    vec![
        GameRecord {
            id: "1".to_string(),
            title: "MiniCat".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1661839808736-948aa33666ff?w=800&fit=crop"
                .to_string(),
            difficulty: Difficulty::Beginner,
            rating: 4.5,
            author: "Cat-rina's Mom".to_string(),
            python_code: Some("print(\"Welcome to MiniCat!\")".to_string()),
        },
        GameRecord {
            id: "2".to_string(),
            title: "Trial and Error".to_string(),
            thumbnail:
                "https://plus.unsplash.com/premium_photo-1671493286575-273500e65fa7?w=800&fit=crop"
                    .to_string(),
            difficulty: Difficulty::Intermediate,
            rating: 4.8,
            author: "Cat-rina's Dad".to_string(),
            python_code: Some("print(\"Welcome to Trial and Error!\")".to_string()),
        },
        GameRecord {
            id: "3".to_string(),
            title: "Dreaded Mystery".to_string(),
            thumbnail:
                "https://plus.unsplash.com/premium_photo-1695137470319-1ca87cb0ea32?w=800&fit=crop"
                    .to_string(),
            difficulty: Difficulty::Advanced,
            rating: 4.2,
            author: "NumberNinja".to_string(),
            python_code: Some("print(\"Welcome to Dreaded Mystery!\")".to_string()),
        },
    ]
}

pub fn default_templates() -> Vec<GameTemplate> {
    vec![
        GameTemplate {
            id: "1",
            title: "Grumpy Cat Matcher",
            description: "Match the perfect grumpy cat reaction to different situations",
            thumbnail:
                "https://images.unsplash.com/photo-1517519014922-8fc06b814a0e?w=400&h=300&fit=crop",
            difficulty: Difficulty::Beginner,
            snippet: "moods = [\"grumpy\", \"very grumpy\", \"done with everything\"]\nfor mood in moods:\n    print(f\"How {mood} is this cat?\")\n",
        },
        GameTemplate {
            id: "2",
            title: "Cat Meme Memory",
            description: "Match pairs of hilarious cat memes in this memory game",
            thumbnail:
                "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=400&h=300&fit=crop",
            difficulty: Difficulty::Intermediate,
            snippet: "pairs = {\"longcat\": \"is long\", \"ceiling cat\": \"is watching\"}\nfor meme, caption in pairs.items():\n    print(meme, caption)\n",
        },
        GameTemplate {
            id: "3",
            title: "Meme Caption Master",
            description: "Create the funniest captions for cat meme templates",
            thumbnail:
                "https://images.unsplash.com/photo-1543852786-1cf6624b9987?w=400&h=300&fit=crop",
            difficulty: Difficulty::Advanced,
            snippet: "caption = \"I can haz cheezburger?\"\nprint(caption.upper())\n",
        },
    ]
}

pub fn default_messages() -> Vec<ChatMessage> {
    vec![ChatMessage {
        id: 1,
        sender: Sender::Assistant,
        content: "Meow! I'm your feline friend here to help you create a purrfect cat meme game! \
                  What kind of cat-tastic game shall we make today?"
            .to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_falls_back_to_placeholder() {
        let mut game = default_games().remove(0);
        game.python_code = None;
        assert_eq!(game.code_or_default(), DEFAULT_SNIPPET);
    }

    #[test]
    fn code_payload_is_used_when_present() {
        let game = default_games().remove(0);
        assert_eq!(game.code_or_default(), "print(\"Welcome to MiniCat!\")");
    }

    #[test]
    fn difficulty_labels_match_surfaces() {
        assert_eq!(Difficulty::Beginner.label(), "Beginner");
        assert_eq!(Difficulty::Beginner.draft_label(), "easy");
        assert_eq!(Difficulty::Advanced.draft_label(), "hard");
    }

    #[test]
    fn draft_round_trips_through_json() {
        let draft = GameDraft::default();
        let raw = serde_json::to_string(&draft).unwrap();
        let back: GameDraft = serde_json::from_str(&raw).unwrap();
        assert_eq!(draft, back);
    }
}
