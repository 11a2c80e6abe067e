//! The closed sets of things a run can collect.

use std::fmt;

use serde::Serialize;

/// Something the player can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Item {
    /// The old phone from the compartment table.
    Phone,
    /// The crumpled note from the seat cushion.
    Note,
    /// The ticket issued by the station machine.
    StrangeTicket,
}

impl Item {
    /// Every item, in no particular order.
    pub const ALL: [Item; 3] = [Item::Phone, Item::Note, Item::StrangeTicket];

    /// The inventory label for this item.
    pub fn name(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Note => "note",
            Self::StrangeTicket => "strange ticket",
        }
    }

    /// Find the item whose label equals `input`, ignoring case.
    pub fn from_name(input: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|item| item.name().eq_ignore_ascii_case(input))
    }
}

/// A fact recorded in the clue log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Clue {
    /// The coded text on the phone.
    EncodedPhoneMessage,
    /// The note's instruction to shift letters back.
    ShiftHint,
    /// The letter mapping scratched on the window.
    AlphabetShiftPattern,
    /// The decoded door code.
    DoorCode,
    /// The motionless passengers.
    SilentPassengers,
    /// First look at the poster.
    LivingSymbols,
    /// The phrase hidden in the poster.
    StationOpens,
    /// The route shown on the map board.
    MapPlatformEcho,
    /// The clock ticking once.
    ClockTickedOnce,
    /// The ticket machine waking up.
    TicketMachineAwake,
    /// The text printed on the ticket.
    TicketPlatformEcho,
}

impl Clue {
    /// The text shown in the clue log.
    pub fn text(self) -> &'static str {
        match self {
            Self::EncodedPhoneMessage => "Encoded phone message",
            Self::ShiftHint => "Shift -3 hint",
            Self::AlphabetShiftPattern => "Alphabet shift pattern",
            Self::DoorCode => "Door code 5731",
            Self::SilentPassengers => "Silent passengers",
            Self::LivingSymbols => "Living symbols",
            Self::StationOpens => "Station opens when time moves",
            Self::MapPlatformEcho => "Map: Platform Echo",
            Self::ClockTickedOnce => "Clock ticked once",
            Self::TicketMachineAwake => "Ticket machine awake",
            Self::TicketPlatformEcho => "Ticket: Platform Echo",
        }
    }
}

/// An optional, hidden accomplishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Achievement {
    /// Tried an easter-egg verb.
    WrongUniverse,
    /// Decoded the phone message without the note.
    Codebreaker,
    /// Escaped the compartment without taking the note.
    MinimalistEscape,
    /// Called the unknown sender.
    OffTheMap,
}

impl Achievement {
    /// The display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::WrongUniverse => "Wrong Universe",
            Self::Codebreaker => "Codebreaker",
            Self::MinimalistEscape => "Minimalist Escape",
            Self::OffTheMap => "Off The Map",
        }
    }
}

/// A narrative outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Ending {
    /// Opened the compartment door with the decoded code.
    StandardEscape,
    /// Called the unknown sender and slipped into the station.
    OffTheMap,
    /// Passed through the station gate with the ticket.
    StationWalkthrough,
}

impl Ending {
    /// The display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::StandardEscape => "Standard Escape",
            Self::OffTheMap => "Off The Map",
            Self::StationWalkthrough => "Station Walkthrough",
        }
    }

    /// Whether reaching this ending finishes the run.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::OffTheMap)
    }
}

macro_rules! label_impls {
    ($($ty:ty => $label:ident),* $(,)?) => {
        $(
            impl From<$ty> for &'static str {
                fn from(value: $ty) -> Self {
                    value.$label()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.$label())
                }
            }
        )*
    };
}

label_impls!(
    Item => name,
    Clue => text,
    Achievement => name,
    Ending => name,
);
