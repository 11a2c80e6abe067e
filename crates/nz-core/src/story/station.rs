//! Chapter 2 text: the Station of Silent Faces.

/// Chapter heading, shown without animation.
pub const TITLE: &str = "Chapter 2: The Station of Silent Faces";

/// Arrival narration after the title.
pub const ARRIVAL: &[&str] = &[
    "",
    "Your vision clears.",
    "You stand on a silent station platform that does not exist on any map you know.",
    "Passengers line the benches, perfectly still. Their eyes follow you, but none of them speak.",
    "Pale symbols shift on signs and posters, flickering between alphabets.",
    "You feel the train is gone. The only way is forward. Try \"look\" or \"move poster / clock / board / machine / gate\".",
];

/// Command reference for chapter 2.
pub const HELP: &[&str] = &[
    "Available commands (Station):",
    "- look",
    "- examine <object>",
    "- take <item>",
    "- use <item>",
    "- inventory / inv",
    "- clues",
    "- move <area> (platform, poster, board, clock, machine, gate)",
];

/// The platform.
pub const LOOK_PLATFORM: &[&str] = &[
    "You stand on a long, dimly lit platform.",
    "Silent passengers sit on benches, watching without blinking.",
    "Glowing signs overhead ripple with unreadable symbols.",
    "You notice a POSTER near one pillar, a MAP BOARD flickering at the center, a CLOCK tower above, a TICKET MACHINE by a wall, and a GATE at the far end.",
];
/// The poster area.
pub const LOOK_POSTER: &str =
    "You stand near a tall poster covered in shifting symbols. The text refuses to stay still.";
/// The board before the map is revealed.
pub const LOOK_BOARD_BLURRED: &str = "A large station map board flickers, the layout blurry as if you are not allowed to read it yet.";
/// The board after the map is revealed.
pub const LOOK_BOARD_REVEALED: &str =
    "The station map is now sharp and legible, showing routes that should not exist.";
/// Below the clock.
pub const LOOK_CLOCK: &str = "You are directly under the station clock. Its hands are frozen at 00:00, defying the sense of constant time.";
/// The machine before it wakes.
pub const LOOK_MACHINE_DORMANT: &str = "A dusty ticket machine stands silent, its screen dark.";
/// The machine once awake.
pub const LOOK_MACHINE_AWAKE: &str = "The ticket machine screen glows faintly, waiting. A slot below looks ready to dispense something.";
/// First line at the gate.
pub const LOOK_GATE: &str = "At the far end of the platform stands a narrow gate with a dull scanner.";
/// Gate line while the player has no ticket.
pub const LOOK_GATE_NO_TICKET: &str =
    "A faint symbol on the scanner pulses, as if expecting something you do not have.";
/// Gate line while the player carries the ticket.
pub const LOOK_GATE_TICKET: &str = "The scanner seems to react lazily to the strange ticket you carry.";

/// Examining the passengers.
pub const PASSENGERS: &str = "The passengers sit unnaturally still. When you look at any one of them, their heads tilt slightly, like they are listening to a voice you cannot hear.";

/// First look at the poster.
pub const POSTER_GLIMPSE: &[&str] = &[
    "You step closer to the poster. Symbols cascade like falling letters, rearranging themselves whenever you try to focus.",
    "For a second, you glimpse an English phrase beneath the symbols, but it slips away.",
];
/// Lead-in to the stabilized phrase.
pub const POSTER_FOCUS: &str = "You focus harder. The symbols slow down enough to form a phrase:";
/// The phrase hidden in the poster.
pub const POSTER_PHRASE: &str = "\"THE STATION OPENS WHEN TIME MOVES.\"";
/// The poster after it has stabilized.
pub const POSTER_STABLE: &str = "The poster now holds steady: \"THE STATION OPENS WHEN TIME MOVES.\"";

/// Board while the clock is still frozen.
pub const BOARD_BLOCKED: &[&str] = &[
    "The map flickers. Lines and station names blur out of recognition.",
    "It feels like the station is refusing to show you the routes until something else changes.",
];
/// Board once the clock ticked but the symbols still shift.
pub const BOARD_PARTIAL: &[&str] = &[
    "The map sharpens for a moment, but the symbols on the signs still clash with it.",
    "Maybe the poster with shifting symbols is connected.",
];
/// Board reveal.
pub const BOARD_REVEAL: &[&str] = &[
    "The board hums once, then stabilizes.",
    "You can finally read the routes:",
    "- \"LINE 0: ORIGIN\"",
    "- \"LINE ∞: RETURN\"",
    "- \"PLATFORM: ECHO\"",
    "A small note at the bottom reads: \"Ticket required: ONE WHO REMEMBERS.\"",
];
/// Board after the reveal.
pub const BOARD_CALM: &str =
    "The map calmly shows impossible routes, as if you have always known them.";

/// First look at the clock.
pub const CLOCK_TICK: &[&str] = &[
    "The clock hands are frozen at 00:00. No ticking. No motion.",
    "You stare at it long enough that for a heartbeat, you hear a single tick.",
];
/// The clock after its single tick.
pub const CLOCK_AFTER: &str = "The clock now reads 00:01. It seems to move only when truly observed.";

/// Machine before the station is awake.
pub const MACHINE_COLD: &[&str] = &[
    "The machine is cold and lifeless. A faint symbol above it matches the ones on the posters.",
    "Maybe the station needs to be 'awake' before this responds.",
];
/// Machine waking up.
pub const MACHINE_WAKE: &[&str] = &[
    "As you approach, the ticket machine flickers to life.",
    "On the screen, a single option appears: \"ISSUE PASS TO PLATFORM ECHO\".",
    "A narrow slot below waits patiently.",
];
/// Machine awake, ticket not yet taken.
pub const MACHINE_PROMPT: &[&str] = &[
    "The screen still shows: \"ISSUE PASS TO PLATFORM ECHO\".",
    "Something tells you it will respond if you try to take a ticket.",
];
/// Machine after the ticket was taken.
pub const MACHINE_BLANK: &str = "The machine screen is blank again, as if it has done its job.";

/// Gate without a ticket.
pub const GATE_SEALED: &[&str] = &[
    "The narrow gate is sealed. A dull scanner sits at hand level, pulsing with a symbol you now recognize from the map.",
    "It feels like it expects a specific ticket.",
];
/// Gate with a ticket in hand.
pub const GATE_READY: &[&str] = &[
    "The scanner pulses brighter whenever your hand nears your pocket, where the strange ticket rests.",
    "Maybe you should \"use ticket\" here.",
];
/// Gate once opened.
pub const GATE_OPEN: &str = "The gate stands open. Beyond it, a staircase descends into a light that does not behave like light.";

/// Taking the ticket.
pub const TICKET_ISSUED: &[&str] = &[
    "You reach out. With a soft mechanical sigh, a thin ticket slides out of the slot.",
    "It is warm to the touch. The text on it reads: \"PLATFORM ECHO — ONE WHO REMEMBERS.\"",
];

/// Using the ticket away from the gate.
pub const TICKET_WRONG_PLACE: &[&str] = &[
    "You hold up the ticket, but nothing nearby reacts.",
    "Maybe the gate at the far end of the platform is where it belongs.",
];

/// Walking through the gate.
pub const STATION_WALKTHROUGH: &[&str] = &[
    "You press the ticket gently against the scanner.",
    "For a heartbeat, the symbols on the station signs and the ones on the ticket sync perfectly.",
    "The gate unlocks with a tone that feels more like a thought than a sound.",
    "Beyond the gate, a staircase descends into a soft, bending light.",
    "You step through, and the station watches you go.",
];

/// Flavor for kicking where the train door used to be.
pub const KICK_DOOR: &str =
    "You kick the invisible line where a train used to be. It achieves precisely nothing.";
