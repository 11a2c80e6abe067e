//! Static story text and puzzle constants.

pub mod compartment;
pub mod station;

/// The coded text shown on the phone.
pub const ENCODED_MESSAGE: &str = "WKH GRRU FRGH LV 5731";

/// The plain text behind [`ENCODED_MESSAGE`].
pub const DECODED_MESSAGE: &str = "THE DOOR CODE IS 5731";

/// The keypad code for the compartment door.
pub const DOOR_CODE: &str = "5731";

/// How far the phone message's letters were shifted forward.
pub const CIPHER_SHIFT: u8 = 3;

/// Printed for every command after the run has ended.
pub const END_OF_RUN: &str = "The story has reached its end. Restart to begin again.";

/// Printed for verbs the interpreter does not know.
pub const COMMAND_IGNORED: &str = "The world ignores that command.";

/// Generic line for examine targets that hold nothing of interest.
pub const NOTHING_SPECIAL: &str = "You do not notice anything special about that.";

/// Printed at the bottom of the end-of-run summary.
pub const RESTART_HINT: &str = "Restart to play again.";

/// Shift every ASCII letter in `text` back by `shift` places, wrapping
/// within the alphabet. Other characters pass through unchanged.
pub fn shift_letters_back(text: &str, shift: u8) -> String {
    let shift = shift % 26;
    text.chars()
        .map(|c| {
            let base = match c {
                'A'..='Z' => b'A',
                'a'..='z' => b'a',
                _ => return c,
            };
            let offset = (c as u8 - base + 26 - shift) % 26;
            char::from(base + offset)
        })
        .collect()
}
