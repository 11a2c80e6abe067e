//! Chapter 1: escaping the locked train compartment.

use nz_core::story::{
    CIPHER_SHIFT, DOOR_CODE, ENCODED_MESSAGE, NOTHING_SPECIAL, compartment, shift_letters_back,
    station,
};
use nz_core::{Achievement, Chapter, Clue, Ending, Item, Scene};
use tracing::info;

use super::ChapterRules;
use crate::audio::{AMBIENT_ESCAPE, AMBIENT_OFF_THE_MAP, AudioCue};
use crate::error::EngineResult;
use crate::gates::{self, CallGate, NotePickup, PhoneUse};
use crate::tracker;
use crate::turn::Turn;

/// Callee phrases that reach the unknown sender.
const CALLBACK_TARGETS: &[&str] = &["", "unknown", "number", "sender"];

/// Rules for the compartment chapter.
#[derive(Debug)]
pub(crate) struct Compartment;

impl ChapterRules for Compartment {
    fn chapter(&self) -> Chapter {
        Chapter::Compartment
    }

    fn help(&self, turn: &mut Turn<'_>) {
        turn.say_all(compartment::HELP);
    }

    fn describe_scene(&self, turn: &mut Turn<'_>) {
        match turn.state.scene() {
            Scene::SeatArea => turn.say(compartment::LOOK_SEAT),
            Scene::WindowArea => turn.say(compartment::LOOK_WINDOW),
            Scene::DoorArea if turn.state.compartment.door_unlocked.is_set() => {
                turn.say(compartment::LOOK_DOOR_OPEN)
            }
            Scene::DoorArea => turn.say(compartment::LOOK_DOOR_LOCKED),
            _ => {
                turn.say(compartment::LOOK_CENTER);
                if !turn.state.compartment.phone_taken.is_set() {
                    turn.say(compartment::LOOK_CENTER_PHONE);
                }
                turn.say(compartment::LOOK_CENTER_EXITS);
            }
        }
    }

    fn examine(&self, turn: &mut Turn<'_>, target: Option<&str>) -> EngineResult<()> {
        let Some(target) = target else {
            turn.say("Examine what?");
            return Ok(());
        };
        let target = target.to_lowercase();

        if target.contains("phone") {
            if turn.state.compartment.phone_taken.is_set() {
                turn.say(compartment::PHONE_IN_HAND);
                turn.say(&format!("\"{ENCODED_MESSAGE}\""));
            } else {
                turn.say(compartment::PHONE_ON_TABLE);
                turn.say(&format!(
                    "On the screen you see a message: \"{ENCODED_MESSAGE}\""
                ));
            }
            turn.state.compartment.saw_encoded_message.set();
            turn.record_clue(Clue::EncodedPhoneMessage);
        } else if target.contains("seat") {
            turn.say_all(compartment::EXAMINE_SEAT);
        } else if target.contains("note") {
            if gates::note_readable(turn.state) {
                turn.say(&format!(
                    "You unfold the note. It reads: \"{}\".",
                    compartment::NOTE_TEXT
                ));
                turn.record_clue(Clue::ShiftHint);
            } else {
                turn.say(compartment::NOTE_NOT_TAKEN);
            }
        } else if target.contains("window") {
            turn.say(compartment::EXAMINE_WINDOW);
            turn.record_clue(Clue::AlphabetShiftPattern);
        } else if target.contains("door") {
            if turn.state.compartment.door_unlocked.is_set() {
                turn.say(compartment::EXAMINE_DOOR_OPEN);
            } else {
                turn.say_all(compartment::EXAMINE_DOOR_LOCKED);
            }
        } else {
            turn.say(NOTHING_SPECIAL);
        }
        Ok(())
    }

    fn take(&self, turn: &mut Turn<'_>, item: Option<&str>) -> EngineResult<()> {
        let Some(item) = item else {
            turn.say("Take what?");
            return Ok(());
        };
        let item = item.to_lowercase();

        if item.contains("phone") {
            if !turn.state.compartment.phone_taken.set() {
                turn.say("You already have the phone.");
                return Ok(());
            }
            turn.state.inventory.insert(Item::Phone);
            turn.say("You pick up the phone. It feels slightly warm.");
        } else if item.contains("note") {
            match gates::note_pickup(turn.state) {
                NotePickup::NotHere => turn.say("You do not see any note here."),
                NotePickup::AlreadyTaken => turn.say("You already took the note."),
                NotePickup::Ready => {
                    turn.state.inventory.insert(Item::Note);
                    turn.say("You pull out the crumpled note from the seat.");
                }
            }
        } else {
            turn.say("You cannot take that.");
        }
        Ok(())
    }

    fn use_item(
        &self,
        turn: &mut Turn<'_>,
        item: Option<&str>,
        _target: Option<&str>,
    ) -> EngineResult<()> {
        let Some(item) = item else {
            turn.say("Use what?");
            return Ok(());
        };
        let carried = Item::from_name(item).filter(|i| turn.state.has_item(*i));

        match carried {
            None => turn.say("You do not have that item."),
            Some(Item::Phone) => match gates::phone_use(turn.state) {
                PhoneUse::UnlockDoor => {
                    turn.say("You double check the phone. The decoded message confirms the door code.");
                    turn.say(&format!("You type {DOOR_CODE} into the keypad."));
                    standard_escape(turn);
                }
                PhoneUse::SuggestCall => {
                    turn.say("You stare at the decoded message. There is also an option to call back the unknown sender.");
                    turn.say("Maybe try: call unknown");
                }
                PhoneUse::Undecoded => {
                    turn.say("You stare at the phone. The coded message still bothers you.")
                }
            },
            Some(Item::Note) => turn.say(&format!(
                "You read the note again: \"{}\".",
                compartment::NOTE_TEXT
            )),
            Some(Item::StrangeTicket) => {
                turn.say("Using that item does not seem to do anything helpful.")
            }
        }
        Ok(())
    }

    fn walk(&self, turn: &mut Turn<'_>, area: Option<&str>) -> EngineResult<()> {
        let Some(area) = area else {
            turn.say("Move where? Seat, window, or door.");
            return Ok(());
        };

        let (scene, line) = match area {
            "seat" => (Scene::SeatArea, "You move closer to the seat and luggage rack."),
            "window" => (
                Scene::WindowArea,
                "You stand by the window, the outside rushing past.",
            ),
            "door" => (
                Scene::DoorArea,
                "You move to the compartment door and inspect the lock.",
            ),
            "compartment" | "back" => (
                Scene::Center,
                "You step back to the center of the compartment.",
            ),
            _ => {
                turn.say("That area does not exist in this compartment.");
                return Ok(());
            }
        };

        turn.move_to(scene)?;
        turn.say(line);
        self.describe_scene(turn);
        Ok(())
    }

    fn solve(&self, turn: &mut Turn<'_>, text: &str) -> EngineResult<()> {
        let text = text.trim();
        if text.is_empty() {
            turn.say("Solve what? Try typing the coded message from the phone.");
            return Ok(());
        }

        if text == ENCODED_MESSAGE {
            let unaided = gates::earns_codebreaker(turn.state);
            turn.state.compartment.decoded_message.set();
            turn.record_clue(Clue::DoorCode);

            turn.say(compartment::SOLVE_INTRO);
            turn.say(&format!(
                "The message becomes: \"{}\"",
                shift_letters_back(ENCODED_MESSAGE, CIPHER_SHIFT)
            ));
            turn.say(compartment::SOLVE_FOLLOW_UP);

            if unaided {
                tracker::unlock_achievement(turn, Achievement::Codebreaker);
            }
        } else if text == DOOR_CODE {
            turn.say(compartment::SOLVE_DIGITS_ONLY);
        } else {
            turn.say(compartment::SOLVE_MISS);
        }
        Ok(())
    }

    fn call(&self, turn: &mut Turn<'_>, target: &str) -> EngineResult<()> {
        match gates::call_gate(turn.state) {
            CallGate::NoPhone => turn.say("You have nothing to call with."),
            CallGate::Undecoded => turn.say(
                "You do not know who to call. The phone only shows the strange coded message.",
            ),
            CallGate::Ready if CALLBACK_TARGETS.contains(&target) => off_the_map(turn)?,
            CallGate::Ready => {
                turn.say("You try to dial, but the only available option is to call back the unknown sender.");
                turn.say("Maybe just type: call unknown");
            }
        }
        Ok(())
    }
}

/// Open the door with the decoded code and end the run.
fn standard_escape(turn: &mut Turn<'_>) {
    if !turn.state.compartment.door_unlocked.set() {
        turn.say("The door is already unlocked.");
        return;
    }

    turn.ambient(AMBIENT_ESCAPE);
    turn.cue(AudioCue::Unlock);

    if gates::earns_minimalist_escape(turn.state) {
        tracker::unlock_achievement(turn, Achievement::MinimalistEscape);
    }
    tracker::record_ending(turn, Ending::StandardEscape);

    turn.say_all(compartment::STANDARD_ESCAPE);
    turn.say_instant(&format!("Ending unlocked: {}.", Ending::StandardEscape));
    tracker::finish_run(turn);
}

/// Call the unknown sender and continue into the station.
fn off_the_map(turn: &mut Turn<'_>) -> EngineResult<()> {
    turn.ambient(AMBIENT_OFF_THE_MAP);
    turn.cue(AudioCue::Unlock);

    tracker::record_ending(turn, Ending::OffTheMap);
    tracker::unlock_achievement(turn, Achievement::OffTheMap);

    turn.say_all(compartment::OFF_THE_MAP);
    turn.say_instant(&format!(
        "Ending unlocked: {}. The real story starts now.",
        Ending::OffTheMap
    ));

    turn.state.enter_chapter(Chapter::Station)?;
    info!(chapter = %Chapter::Station, "chapter started");

    turn.clear_screen();
    turn.say_instant(station::TITLE);
    turn.say_all(station::ARRIVAL);
    Ok(())
}
