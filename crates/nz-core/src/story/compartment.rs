//! Chapter 1 text: the locked train compartment.

/// Opening narration for a new run.
pub const INTRO: &[&str] = &[
    "You wake up in a locked train compartment. The train is moving. You are alone.",
    "On the small table, an old phone is vibrating. The compartment door is locked.",
];

/// Shown after the intro, without animation.
pub const HELP_PROMPT: &str = "Type \"help\" for commands.";

/// Command reference for chapter 1.
pub const HELP: &[&str] = &[
    "Available commands:",
    "- look",
    "- examine <object>",
    "- take <item>",
    "- use <item> [on <target>]",
    "- solve <coded message> / decode <coded message>",
    "- inventory / inv",
    "- clues",
    "- move <area> (seat, window, door)",
    "- call <target> (when you have the phone)",
];

/// Middle of the compartment.
pub const LOOK_CENTER: &str =
    "You are in a compact train compartment: a table, two seats, a window, and the locked door.";
/// Added to the center description while the phone is still on the table.
pub const LOOK_CENTER_PHONE: &str = "On the table, an old phone is buzzing.";
/// Closing line of the center description.
pub const LOOK_CENTER_EXITS: &str = "You see a seat, a window, and the compartment door.";
/// Seat area.
pub const LOOK_SEAT: &str = "You are focused on the seat and luggage rack. There is a crumpled note wedged between the cushions.";
/// Window area.
pub const LOOK_WINDOW: &str = "You stare at the window. Outside, blurred lights streak by. There is a faint scratch on the glass: '-3?'";
/// Door area, still locked.
pub const LOOK_DOOR_LOCKED: &str =
    "You are at the door. There is an electronic lock with a 4 digit keypad.";
/// Door area, unlocked.
pub const LOOK_DOOR_OPEN: &str = "The door is unlocked, slightly open. Freedom is one push away.";

/// Examining the phone while it is still on the table.
pub const PHONE_ON_TABLE: &str =
    "The old phone is cracked but still working. A notification lights up the screen.";
/// Examining the phone once it is in hand.
pub const PHONE_IN_HAND: &str = "You check the phone in your hand. The message still reads:";

/// Examining the seat.
pub const EXAMINE_SEAT: &[&str] = &[
    "The seat cushion is slightly torn. A folded note sticks out.",
    "You might be able to take the note.",
];
/// Examining the note before taking it.
pub const NOTE_NOT_TAKEN: &str =
    "You can see part of the note, but you have not taken it yet. Try taking the note.";
/// The text written on the note.
pub const NOTE_TEXT: &str = "SHIFT LETTERS BACK BY 3";
/// Examining the window.
pub const EXAMINE_WINDOW: &str = "On the lower corner of the window, someone scratched: \"A→D, B→E, C→F\" with an arrow pointing back.";
/// Examining the locked door.
pub const EXAMINE_DOOR_LOCKED: &[&str] = &[
    "The door lock blinks impatiently. It expects a 4 digit code.",
    "Maybe the phone message is related. Try to solve it.",
];
/// Examining the unlocked door.
pub const EXAMINE_DOOR_OPEN: &str =
    "The door is unlocked. You can leave this compartment whenever you are ready.";

/// Successful decode narration; the decoded text follows it.
pub const SOLVE_INTRO: &str = "You mentally shift each letter back by 3.";
/// Follow-up after the decoded text.
pub const SOLVE_FOLLOW_UP: &str = "So the door code is 5731. Try going to the door using move door.";
/// Solving with the bare digits.
pub const SOLVE_DIGITS_ONLY: &str =
    "You know the digits, but you should prove it. Use the encoded message itself in solve.";
/// Any other solve attempt.
pub const SOLVE_MISS: &str =
    "You try to decode it, but something does not click. Check your clues again.";

/// Standard escape narration, printed after the door unlocks.
pub const STANDARD_ESCAPE: &[&str] = &[
    "The lock beeps, then turns green. The door unlocks with a soft click.",
    "For a moment, the constant noise of the train feels quieter.",
    "You step into the corridor, leaving the locked compartment behind.",
];

/// The call to the unknown sender.
pub const OFF_THE_MAP: &[&str] = &[
    "You tap the option to call back the unknown number.",
    "The line connects instantly. No ringtone, no greeting. Just the low hum of the train.",
    "A distorted voice whispers: \"You solved it faster than expected.\"",
    "The compartment around you flickers, as if reality is buffering.",
    "When the world stabilizes, the door slides open on its own.",
    "Beyond it is not a normal station.",
];

/// Flavor for kicking the compartment door.
pub const KICK_DOOR: &str =
    "You kick the compartment door. It does not open. Your foot files a complaint.";
