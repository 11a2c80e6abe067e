//! Command parsing for player input.

use nz_core::Chapter;
use nz_core::story::{compartment, station};

/// A flavor-only verb that is answered before chapter dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasterEgg {
    /// `cry`
    Cry,
    /// `sleep`
    Sleep,
    /// `sing`
    Sing,
    /// `dance`
    Dance,
    /// `kick` with a phrase mentioning a door.
    KickDoor,
}

impl EasterEgg {
    /// Parse one of the single-word easter-egg verbs.
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "cry" => Some(Self::Cry),
            "sleep" => Some(Self::Sleep),
            "sing" => Some(Self::Sing),
            "dance" => Some(Self::Dance),
            _ => None,
        }
    }

    /// The response line, which only varies by chapter for `kick door`.
    pub fn flavor(self, chapter: Chapter) -> &'static str {
        match self {
            Self::Cry => "You consider crying, but the universe remains deeply unimpressed.",
            Self::Sleep => {
                "You close your eyes for a second. Sadly, problems do not uninstall themselves."
            }
            Self::Sing => "You hum a shaky tune. No one claps. Brutal.",
            Self::Dance => "You do a tiny victory dance. Zero progress, mild serotonin.",
            Self::KickDoor => match chapter {
                Chapter::Compartment => compartment::KICK_DOOR,
                Chapter::Station => station::KICK_DOOR,
            },
        }
    }
}

/// A parsed player command.
///
/// Argument phrases keep the player's casing; handlers lowercase them
/// where matching is case-insensitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// An easter egg, handled the same way in every chapter.
    EasterEgg(EasterEgg),
    /// List the commands that make sense in this chapter.
    Help,
    /// Describe the scene, or examine a target.
    Look {
        /// Optional target to examine.
        target: Option<String>,
    },
    /// Examine a target.
    Examine {
        /// The target phrase.
        target: Option<String>,
    },
    /// Pick something up.
    Take {
        /// The item phrase.
        item: Option<String>,
    },
    /// Use a carried item, optionally on a target.
    Use {
        /// The item phrase, lowercased.
        item: Option<String>,
        /// Optional target after `on`, lowercased.
        target: Option<String>,
    },
    /// Attempt the phone cipher.
    Solve {
        /// The proposed text, exactly as typed (whitespace-normalized).
        text: String,
    },
    /// List carried items.
    Inventory,
    /// List recorded clues.
    Clues,
    /// Walk to an area.
    Move {
        /// The first word after the verb, lowercased.
        area: Option<String>,
    },
    /// Call someone with the phone.
    Call {
        /// The callee phrase, lowercased; empty when omitted.
        target: String,
    },
    /// Anything not in the verb table.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Verb synonyms for command parsing.
const HELP_VERBS: &[&str] = &["help"];
const LOOK_VERBS: &[&str] = &["look"];
const EXAMINE_VERBS: &[&str] = &["examine", "inspect"];
const TAKE_VERBS: &[&str] = &["take", "grab"];
const USE_VERBS: &[&str] = &["use"];
const SOLVE_VERBS: &[&str] = &["solve", "decode"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv"];
const CLUES_VERBS: &[&str] = &["clues"];
const MOVE_VERBS: &[&str] = &["move", "go"];
const CALL_VERBS: &[&str] = &["call"];

/// Parse a player input line into a command.
///
/// Returns `None` for blank input.
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    let words: Vec<&str> = input.split_whitespace().collect();
    let (first, rest) = words.split_first()?;
    let verb = first.to_lowercase();

    if let Some(egg) = EasterEgg::from_verb(&verb) {
        return Some(Command::EasterEgg(egg));
    }
    if verb == "kick" && rest.join(" ").to_lowercase().contains("door") {
        return Some(Command::EasterEgg(EasterEgg::KickDoor));
    }

    let verb = verb.as_str();
    let command = if HELP_VERBS.contains(&verb) {
        Command::Help
    } else if LOOK_VERBS.contains(&verb) {
        Command::Look {
            target: phrase(rest),
        }
    } else if EXAMINE_VERBS.contains(&verb) {
        Command::Examine {
            target: phrase(rest),
        }
    } else if TAKE_VERBS.contains(&verb) {
        Command::Take { item: phrase(rest) }
    } else if USE_VERBS.contains(&verb) {
        parse_use(rest)
    } else if SOLVE_VERBS.contains(&verb) {
        Command::Solve {
            text: rest.join(" "),
        }
    } else if INVENTORY_VERBS.contains(&verb) {
        Command::Inventory
    } else if CLUES_VERBS.contains(&verb) {
        Command::Clues
    } else if MOVE_VERBS.contains(&verb) {
        Command::Move {
            area: rest.first().map(|w| w.to_lowercase()),
        }
    } else if CALL_VERBS.contains(&verb) {
        Command::Call {
            target: rest.join(" ").to_lowercase(),
        }
    } else {
        Command::Unknown {
            input: input.to_string(),
        }
    };

    Some(command)
}

fn phrase(words: &[&str]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn parse_use(rest: &[&str]) -> Command {
    if rest.is_empty() {
        return Command::Use {
            item: None,
            target: None,
        };
    }

    // Split at an inner "on"; a leading or trailing "on" stays part of the item.
    let split = rest
        .iter()
        .enumerate()
        .skip(1)
        .take(rest.len().saturating_sub(2))
        .find(|(_, w)| w.eq_ignore_ascii_case("on"))
        .map(|(i, _)| i);

    match split {
        Some(pos) => Command::Use {
            item: Some(rest[..pos].join(" ").to_lowercase()),
            target: Some(rest[pos + 1..].join(" ").to_lowercase()),
        },
        None => Command::Use {
            item: Some(rest.join(" ").to_lowercase()),
            target: None,
        },
    }
}
