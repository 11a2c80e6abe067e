//! Puzzle gates: pure functions that read the state and decide which
//! reveal or transition a command is allowed to trigger.
//!
//! Handlers match on these results instead of checking flags directly, so
//! the prerequisites for every puzzle are stated in one place.

use nz_core::{Clue, GameState, Item, Scene};

/// Where the phone cipher puzzle stands when the player calls `use phone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneUse {
    /// Decoded and standing at the door: the code can be typed in.
    UnlockDoor,
    /// Decoded but elsewhere: the phone offers a call back.
    SuggestCall,
    /// Not decoded yet.
    Undecoded,
}

/// Decide what using the phone does.
pub fn phone_use(state: &GameState) -> PhoneUse {
    let decoded = state.compartment.decoded_message.is_set();
    match (decoded, state.scene()) {
        (true, Scene::DoorArea) => PhoneUse::UnlockDoor,
        (true, _) => PhoneUse::SuggestCall,
        (false, _) => PhoneUse::Undecoded,
    }
}

/// Whether the `call` command can reach the unknown sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallGate {
    /// The phone is not in the inventory.
    NoPhone,
    /// The message has not been decoded.
    Undecoded,
    /// The call can go through.
    Ready,
}

/// Decide whether a call is possible.
pub fn call_gate(state: &GameState) -> CallGate {
    if !state.has_item(Item::Phone) {
        CallGate::NoPhone
    } else if !state.compartment.decoded_message.is_set() {
        CallGate::Undecoded
    } else {
        CallGate::Ready
    }
}

/// Whether the note can be picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotePickup {
    /// The note is only reachable from the seat.
    NotHere,
    /// Already in the inventory.
    AlreadyTaken,
    /// Can be taken.
    Ready,
}

/// Decide whether `take note` succeeds.
pub fn note_pickup(state: &GameState) -> NotePickup {
    if state.scene() != Scene::SeatArea {
        NotePickup::NotHere
    } else if state.has_item(Item::Note) {
        NotePickup::AlreadyTaken
    } else {
        NotePickup::Ready
    }
}

/// The note can only be read once it has been taken.
pub fn note_readable(state: &GameState) -> bool {
    state.has_item(Item::Note)
}

/// Solving the cipher counts as unaided if the note was never taken and
/// its hint never recorded.
pub fn earns_codebreaker(state: &GameState) -> bool {
    !state.has_item(Item::Note) && !state.has_clue(Clue::ShiftHint)
}

/// Escaping without ever taking the note.
pub fn earns_minimalist_escape(state: &GameState) -> bool {
    !state.has_item(Item::Note)
}

/// The two-step poster reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterStage {
    /// Never looked at closely.
    Shifting,
    /// Looked at once; the next look stabilizes it.
    Glimpsed,
    /// The phrase is readable.
    Stable,
}

/// Current stage of the poster.
pub fn poster_stage(state: &GameState) -> PosterStage {
    if state.station.symbols_stabilized.is_set() {
        PosterStage::Stable
    } else if state.has_clue(Clue::LivingSymbols) {
        PosterStage::Glimpsed
    } else {
        PosterStage::Shifting
    }
}

/// Whether the clock has ticked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStage {
    /// Still at 00:00.
    Frozen,
    /// Ticked once to 00:01.
    Ticked,
}

/// Current stage of the clock.
pub fn clock_stage(state: &GameState) -> ClockStage {
    if state.station.clock_awakened.is_set() {
        ClockStage::Ticked
    } else {
        ClockStage::Frozen
    }
}

/// The map board's three-way gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardGate {
    /// The clock has not ticked; the board is unreadable.
    Blocked,
    /// The clock ticked but the poster still shifts.
    Partial,
    /// Both prerequisites hold; the next look reveals the map.
    Ready,
    /// The map has been revealed.
    Revealed,
}

/// Current gate of the map board.
pub fn board_gate(state: &GameState) -> BoardGate {
    let station = &state.station;
    if station.map_revealed.is_set() {
        BoardGate::Revealed
    } else if !station.clock_awakened.is_set() {
        BoardGate::Blocked
    } else if !station.symbols_stabilized.is_set() {
        BoardGate::Partial
    } else {
        BoardGate::Ready
    }
}

/// The ticket machine's gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineGate {
    /// The station is not awake yet.
    Cold,
    /// Map revealed and clock ticking; the next look wakes it.
    Waking,
    /// Awake and offering a ticket.
    Issuing,
    /// The ticket has been taken.
    Spent,
}

/// Current gate of the ticket machine.
pub fn machine_gate(state: &GameState) -> MachineGate {
    let station = &state.station;
    if station.machine_awake.is_set() {
        if station.ticket_taken.is_set() {
            MachineGate::Spent
        } else {
            MachineGate::Issuing
        }
    } else if station.map_revealed.is_set() && station.clock_awakened.is_set() {
        MachineGate::Waking
    } else {
        MachineGate::Cold
    }
}

/// Whether `take ticket` succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketPickup {
    /// Not standing at the machine.
    NotHere,
    /// The machine has not woken up.
    MachineAsleep,
    /// Already taken.
    AlreadyTaken,
    /// Can be taken.
    Ready,
}

/// Decide whether the ticket can be taken.
pub fn ticket_pickup(state: &GameState) -> TicketPickup {
    if state.scene() != Scene::MachineArea {
        TicketPickup::NotHere
    } else if !state.station.machine_awake.is_set() {
        TicketPickup::MachineAsleep
    } else if state.station.ticket_taken.is_set() {
        TicketPickup::AlreadyTaken
    } else {
        TicketPickup::Ready
    }
}

/// The station gate's description stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStage {
    /// No ticket yet.
    Sealed,
    /// Ticket in hand, gate closed.
    Ready,
    /// The gate has opened.
    Open,
}

/// Current stage of the gate.
pub fn gate_stage(state: &GameState) -> GateStage {
    if !state.station.ticket_taken.is_set() {
        GateStage::Sealed
    } else if !state.station.gate_opened.is_set() {
        GateStage::Ready
    } else {
        GateStage::Open
    }
}

/// What `use ticket` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketUse {
    /// Nothing ticket-like is carried.
    NoTicket,
    /// Carried, but not at the gate.
    WrongPlace,
    /// The gate accepts the ticket.
    Accepted,
    /// The gate is already open.
    AlreadyOpen,
}

/// Decide what using the ticket does.
pub fn ticket_use(state: &GameState) -> TicketUse {
    let carrying = state.inventory.iter().any(|i| i.name().contains("ticket"));
    if !carrying {
        TicketUse::NoTicket
    } else if state.scene() != Scene::GateArea {
        TicketUse::WrongPlace
    } else if state.station.gate_opened.is_set() {
        TicketUse::AlreadyOpen
    } else {
        TicketUse::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nz_core::Chapter;

    fn station() -> GameState {
        let mut state = GameState::new();
        state.enter_chapter(Chapter::Station).unwrap();
        state
    }

    #[test]
    fn phone_use_depends_on_decoding_and_scene() {
        let mut state = GameState::new();
        assert_eq!(phone_use(&state), PhoneUse::Undecoded);
        state.compartment.decoded_message.set();
        assert_eq!(phone_use(&state), PhoneUse::SuggestCall);
        state.move_to(Scene::DoorArea).unwrap();
        assert_eq!(phone_use(&state), PhoneUse::UnlockDoor);
    }

    #[test]
    fn call_needs_phone_then_decoding() {
        let mut state = GameState::new();
        state.compartment.decoded_message.set();
        assert_eq!(call_gate(&state), CallGate::NoPhone);
        let mut state = GameState::new();
        state.inventory.insert(Item::Phone);
        assert_eq!(call_gate(&state), CallGate::Undecoded);
        state.compartment.decoded_message.set();
        assert_eq!(call_gate(&state), CallGate::Ready);
    }

    #[test]
    fn note_only_reachable_from_seat() {
        let mut state = GameState::new();
        assert_eq!(note_pickup(&state), NotePickup::NotHere);
        state.move_to(Scene::SeatArea).unwrap();
        assert_eq!(note_pickup(&state), NotePickup::Ready);
        assert!(!note_readable(&state));
        state.inventory.insert(Item::Note);
        assert_eq!(note_pickup(&state), NotePickup::AlreadyTaken);
        assert!(note_readable(&state));
    }

    #[test]
    fn codebreaker_requires_no_hint() {
        let mut state = GameState::new();
        assert!(earns_codebreaker(&state));
        state.clues.insert(Clue::ShiftHint);
        assert!(!earns_codebreaker(&state));

        let mut state = GameState::new();
        state.inventory.insert(Item::Note);
        assert!(!earns_codebreaker(&state));
        assert!(!earns_minimalist_escape(&state));
    }

    #[test]
    fn poster_two_stage() {
        let mut state = station();
        assert_eq!(poster_stage(&state), PosterStage::Shifting);
        state.clues.insert(Clue::LivingSymbols);
        assert_eq!(poster_stage(&state), PosterStage::Glimpsed);
        state.station.symbols_stabilized.set();
        assert_eq!(poster_stage(&state), PosterStage::Stable);
    }

    #[test]
    fn board_needs_clock_then_symbols() {
        let mut state = station();
        state.station.symbols_stabilized.set();
        assert_eq!(board_gate(&state), BoardGate::Blocked);

        let mut state = station();
        state.station.clock_awakened.set();
        assert_eq!(clock_stage(&state), ClockStage::Ticked);
        assert_eq!(board_gate(&state), BoardGate::Partial);
        state.station.symbols_stabilized.set();
        assert_eq!(board_gate(&state), BoardGate::Ready);
        state.station.map_revealed.set();
        assert_eq!(board_gate(&state), BoardGate::Revealed);
    }

    #[test]
    fn machine_needs_map_and_clock() {
        let mut state = station();
        assert_eq!(machine_gate(&state), MachineGate::Cold);
        state.station.map_revealed.set();
        assert_eq!(machine_gate(&state), MachineGate::Cold);
        state.station.clock_awakened.set();
        assert_eq!(machine_gate(&state), MachineGate::Waking);
        state.station.machine_awake.set();
        assert_eq!(machine_gate(&state), MachineGate::Issuing);
        state.station.ticket_taken.set();
        assert_eq!(machine_gate(&state), MachineGate::Spent);
    }

    #[test]
    fn ticket_pickup_order() {
        let mut state = station();
        assert_eq!(ticket_pickup(&state), TicketPickup::NotHere);
        state.move_to(Scene::MachineArea).unwrap();
        assert_eq!(ticket_pickup(&state), TicketPickup::MachineAsleep);
        state.station.machine_awake.set();
        assert_eq!(ticket_pickup(&state), TicketPickup::Ready);
        state.station.ticket_taken.set();
        assert_eq!(ticket_pickup(&state), TicketPickup::AlreadyTaken);
    }

    #[test]
    fn gate_and_ticket_use() {
        let mut state = station();
        assert_eq!(gate_stage(&state), GateStage::Sealed);
        assert_eq!(ticket_use(&state), TicketUse::NoTicket);

        state.station.ticket_taken.set();
        state.inventory.insert(Item::StrangeTicket);
        assert_eq!(gate_stage(&state), GateStage::Ready);
        assert_eq!(ticket_use(&state), TicketUse::WrongPlace);

        state.move_to(Scene::GateArea).unwrap();
        assert_eq!(ticket_use(&state), TicketUse::Accepted);
        state.station.gate_opened.set();
        assert_eq!(gate_stage(&state), GateStage::Open);
        assert_eq!(ticket_use(&state), TicketUse::AlreadyOpen);
    }
}
