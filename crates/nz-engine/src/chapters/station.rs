//! Chapter 2: the station of silent faces.

use nz_core::story::{NOTHING_SPECIAL, station};
use nz_core::{Chapter, Clue, Ending, Item, Scene};

use super::ChapterRules;
use crate::audio::{AMBIENT_WALKTHROUGH, AudioCue};
use crate::error::EngineResult;
use crate::gates::{
    self, BoardGate, ClockStage, GateStage, MachineGate, PosterStage, TicketPickup, TicketUse,
};
use crate::tracker;
use crate::turn::Turn;

/// Rules for the station chapter.
#[derive(Debug)]
pub(crate) struct Station;

impl Station {
    fn examine_poster(turn: &mut Turn<'_>) {
        match gates::poster_stage(turn.state) {
            PosterStage::Shifting => {
                turn.say_all(station::POSTER_GLIMPSE);
                turn.record_clue(Clue::LivingSymbols);
            }
            PosterStage::Glimpsed => {
                turn.say(station::POSTER_FOCUS);
                turn.say_instant(station::POSTER_PHRASE);
                turn.state.station.symbols_stabilized.set();
                turn.record_clue(Clue::StationOpens);
            }
            PosterStage::Stable => turn.say(station::POSTER_STABLE),
        }
    }

    fn examine_board(turn: &mut Turn<'_>) {
        match gates::board_gate(turn.state) {
            BoardGate::Blocked => turn.say_all(station::BOARD_BLOCKED),
            BoardGate::Partial => turn.say_all(station::BOARD_PARTIAL),
            BoardGate::Ready => {
                turn.state.station.map_revealed.set();
                turn.say_all(station::BOARD_REVEAL);
                turn.record_clue(Clue::MapPlatformEcho);
            }
            BoardGate::Revealed => turn.say(station::BOARD_CALM),
        }
    }

    fn examine_clock(turn: &mut Turn<'_>) {
        match gates::clock_stage(turn.state) {
            ClockStage::Frozen => {
                turn.say_all(station::CLOCK_TICK);
                turn.state.station.clock_awakened.set();
                turn.record_clue(Clue::ClockTickedOnce);
            }
            ClockStage::Ticked => turn.say(station::CLOCK_AFTER),
        }
    }

    fn examine_machine(turn: &mut Turn<'_>) {
        match gates::machine_gate(turn.state) {
            MachineGate::Cold => turn.say_all(station::MACHINE_COLD),
            MachineGate::Waking => {
                turn.state.station.machine_awake.set();
                turn.say_all(station::MACHINE_WAKE);
                turn.record_clue(Clue::TicketMachineAwake);
            }
            MachineGate::Issuing => turn.say_all(station::MACHINE_PROMPT),
            MachineGate::Spent => turn.say(station::MACHINE_BLANK),
        }
    }

    fn examine_gate(turn: &mut Turn<'_>) {
        match gates::gate_stage(turn.state) {
            GateStage::Sealed => turn.say_all(station::GATE_SEALED),
            GateStage::Ready => turn.say_all(station::GATE_READY),
            GateStage::Open => turn.say(station::GATE_OPEN),
        }
    }
}

impl ChapterRules for Station {
    fn chapter(&self) -> Chapter {
        Chapter::Station
    }

    fn help(&self, turn: &mut Turn<'_>) {
        turn.say_all(station::HELP);
    }

    fn describe_scene(&self, turn: &mut Turn<'_>) {
        let flags = turn.state.station;
        match turn.state.scene() {
            Scene::PosterArea => turn.say(station::LOOK_POSTER),
            Scene::BoardArea if flags.map_revealed.is_set() => {
                turn.say(station::LOOK_BOARD_REVEALED)
            }
            Scene::BoardArea => turn.say(station::LOOK_BOARD_BLURRED),
            Scene::ClockArea => turn.say(station::LOOK_CLOCK),
            Scene::MachineArea if flags.machine_awake.is_set() => {
                turn.say(station::LOOK_MACHINE_AWAKE)
            }
            Scene::MachineArea => turn.say(station::LOOK_MACHINE_DORMANT),
            Scene::GateArea => {
                turn.say(station::LOOK_GATE);
                if flags.ticket_taken.is_set() {
                    turn.say(station::LOOK_GATE_TICKET);
                } else {
                    turn.say(station::LOOK_GATE_NO_TICKET);
                }
            }
            _ => turn.say_all(station::LOOK_PLATFORM),
        }
    }

    fn examine(&self, turn: &mut Turn<'_>, target: Option<&str>) -> EngineResult<()> {
        let Some(target) = target else {
            turn.say("Examine what?");
            return Ok(());
        };
        let target = target.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| target.contains(w));

        if mentions(&["passenger", "people", "crowd"]) {
            turn.say(station::PASSENGERS);
            turn.record_clue(Clue::SilentPassengers);
        } else if mentions(&["poster", "symbols"]) {
            turn.move_to(Scene::PosterArea)?;
            Self::examine_poster(turn);
        } else if mentions(&["board", "map"]) {
            turn.move_to(Scene::BoardArea)?;
            Self::examine_board(turn);
        } else if mentions(&["clock"]) {
            turn.move_to(Scene::ClockArea)?;
            Self::examine_clock(turn);
        } else if mentions(&["machine", "ticket"]) {
            turn.move_to(Scene::MachineArea)?;
            Self::examine_machine(turn);
        } else if mentions(&["gate", "exit"]) {
            turn.move_to(Scene::GateArea)?;
            Self::examine_gate(turn);
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
        if !item.to_lowercase().contains("ticket") {
            turn.say("That does not seem like something you can take.");
            return Ok(());
        }

        match gates::ticket_pickup(turn.state) {
            TicketPickup::NotHere => turn.say("You do not see any ticket here."),
            TicketPickup::MachineAsleep => turn.say("Nothing comes out of the machine."),
            TicketPickup::AlreadyTaken => turn.say("You already took the strange ticket."),
            TicketPickup::Ready => {
                turn.state.station.ticket_taken.set();
                turn.state.inventory.insert(Item::StrangeTicket);
                turn.say_all(station::TICKET_ISSUED);
                turn.record_clue(Clue::TicketPlatformEcho);
            }
        }
        Ok(())
    }

    fn use_item(
        &self,
        turn: &mut Turn<'_>,
        item: Option<&str>,
        target: Option<&str>,
    ) -> EngineResult<()> {
        let Some(item) = item else {
            turn.say("Use what?");
            return Ok(());
        };
        let about_ticket =
            item.contains("ticket") || target.is_some_and(|t| t.contains("ticket"));
        if !about_ticket {
            turn.say("Using that does not seem to have any effect here.");
            return Ok(());
        }

        match gates::ticket_use(turn.state) {
            TicketUse::NoTicket => turn.say("You pat your pockets. No ticket yet."),
            TicketUse::WrongPlace => turn.say_all(station::TICKET_WRONG_PLACE),
            TicketUse::AlreadyOpen => {
                turn.say("The gate is already open. The station has accepted your passage.")
            }
            TicketUse::Accepted => walk_through(turn),
        }
        Ok(())
    }

    fn walk(&self, turn: &mut Turn<'_>, area: Option<&str>) -> EngineResult<()> {
        let Some(area) = area else {
            turn.say("Move where? (platform, poster, board, clock, machine, gate)");
            return Ok(());
        };

        let (scene, line) = match area {
            "platform" => (Scene::Platform, "You walk back to the center of the platform."),
            "poster" => (
                Scene::PosterArea,
                "You move toward the tall poster with shifting symbols.",
            ),
            "board" | "map" => (
                Scene::BoardArea,
                "You walk over to the flickering station map board.",
            ),
            "clock" => (Scene::ClockArea, "You stand beneath the silent station clock."),
            "machine" => (
                Scene::MachineArea,
                "You walk to the old ticket machine by the wall.",
            ),
            "gate" | "exit" => (
                Scene::GateArea,
                "You approach the narrow gate at the far end of the platform.",
            ),
            _ => {
                turn.say("That area does not exist here.");
                return Ok(());
            }
        };

        turn.move_to(scene)?;
        turn.say(line);
        self.describe_scene(turn);
        Ok(())
    }

    fn solve(&self, turn: &mut Turn<'_>, _text: &str) -> EngineResult<()> {
        turn.say("There is nothing here to solve like that.");
        Ok(())
    }

    fn call(&self, turn: &mut Turn<'_>, _target: &str) -> EngineResult<()> {
        turn.say("There is no signal here.");
        Ok(())
    }
}

/// Pass the gate with the ticket and end the run.
fn walk_through(turn: &mut Turn<'_>) {
    turn.state.station.gate_opened.set();
    turn.ambient(AMBIENT_WALKTHROUGH);
    turn.cue(AudioCue::Unlock);

    turn.say_all(station::STATION_WALKTHROUGH);
    turn.say_instant(&format!("Ending unlocked: {}.", Ending::StationWalkthrough));
    tracker::record_ending(turn, Ending::StationWalkthrough);
    tracker::finish_run(turn);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrator::Transcript;
    use nz_core::GameState;

    fn arrived() -> GameState {
        let mut state = GameState::new();
        state.enter_chapter(Chapter::Station).unwrap();
        state
    }

    fn run<F>(state: &mut GameState, f: F) -> Transcript
    where
        F: FnOnce(&mut Turn<'_>) -> EngineResult<()>,
    {
        let mut narrator = Transcript::new();
        let mut turn = Turn::new(state, &mut narrator, None);
        f(&mut turn).unwrap();
        narrator
    }

    fn examine(state: &mut GameState, target: &str) -> Transcript {
        run(state, |t| Station.examine(t, Some(target)))
    }

    /// Symbols stable, clock ticked, map revealed and machine awake.
    fn machine_awake() -> GameState {
        let mut state = arrived();
        for target in ["poster", "poster", "clock", "board", "machine"] {
            examine(&mut state, target);
        }
        assert!(state.station.machine_awake.is_set());
        state
    }

    #[test]
    fn platform_is_the_default_view() {
        let mut state = arrived();
        let out = run(&mut state, |t| Station.look(t, None));
        assert_eq!(out.texts(), station::LOOK_PLATFORM);
    }

    #[test]
    fn passengers_do_not_move_the_player() {
        let mut state = arrived();
        let out = examine(&mut state, "the crowd");
        assert!(out.contains(station::PASSENGERS));
        assert_eq!(state.scene(), Scene::Platform);
        assert!(state.has_clue(Clue::SilentPassengers));
    }

    #[test]
    fn examining_moves_to_the_target_area() {
        let mut state = arrived();
        examine(&mut state, "clock");
        assert_eq!(state.scene(), Scene::ClockArea);
        examine(&mut state, "exit");
        assert_eq!(state.scene(), Scene::GateArea);
    }

    #[test]
    fn poster_needs_two_looks() {
        let mut state = arrived();
        examine(&mut state, "poster");
        assert!(state.has_clue(Clue::LivingSymbols));
        assert!(!state.station.symbols_stabilized.is_set());

        let out = examine(&mut state, "symbols");
        assert!(out.contains(station::POSTER_PHRASE));
        assert!(state.station.symbols_stabilized.is_set());
        assert!(state.has_clue(Clue::StationOpens));

        let out = examine(&mut state, "poster");
        assert!(out.contains(station::POSTER_STABLE));
    }

    #[test]
    fn board_stays_blurred_until_the_clock_ticks() {
        let mut state = arrived();
        examine(&mut state, "poster");
        examine(&mut state, "poster");
        let out = examine(&mut state, "map");
        assert_eq!(out.texts(), station::BOARD_BLOCKED);
        assert!(!state.station.map_revealed.is_set());

        examine(&mut state, "clock");
        examine(&mut state, "board");
        assert!(state.station.map_revealed.is_set());
        assert!(state.has_clue(Clue::MapPlatformEcho));
    }

    #[test]
    fn board_partial_without_stable_symbols() {
        let mut state = arrived();
        examine(&mut state, "clock");
        let out = examine(&mut state, "board");
        assert_eq!(out.texts(), station::BOARD_PARTIAL);
        assert!(!state.station.map_revealed.is_set());
    }

    #[test]
    fn machine_stays_cold_without_the_map() {
        let mut state = arrived();
        examine(&mut state, "clock");
        let out = examine(&mut state, "machine");
        assert_eq!(out.texts(), station::MACHINE_COLD);

        let out = run(&mut state, |t| Station.take(t, Some("ticket")));
        assert!(out.contains("Nothing comes out of the machine."));
        assert!(!state.has_item(Item::StrangeTicket));
    }

    #[test]
    fn ticket_only_at_the_machine() {
        let mut state = arrived();
        let out = run(&mut state, |t| Station.take(t, Some("ticket")));
        assert!(out.contains("You do not see any ticket here."));
        let out = run(&mut state, |t| Station.take(t, Some("bench")));
        assert!(out.contains("That does not seem like something you can take."));
    }

    #[test]
    fn ticket_use_checks_pockets_then_place() {
        let mut state = arrived();
        let out = run(&mut state, |t| Station.use_item(t, Some("ticket"), None));
        assert!(out.contains("You pat your pockets. No ticket yet."));

        state.inventory.insert(Item::StrangeTicket);
        state.station.ticket_taken.set();
        let out = run(&mut state, |t| Station.use_item(t, Some("ticket"), None));
        assert_eq!(out.texts(), station::TICKET_WRONG_PLACE);
        assert!(!state.is_over());
    }

    #[test]
    fn ticket_on_the_gate_ends_the_run() {
        let mut state = arrived();
        state.inventory.insert(Item::StrangeTicket);
        state.station.ticket_taken.set();
        run(&mut state, |t| Station.walk(t, Some("gate")));

        let out = run(&mut state, |t| {
            Station.use_item(t, Some("strange ticket"), Some("gate"))
        });
        assert!(out.contains("Ending unlocked: Station Walkthrough."));
        assert!(state.station.gate_opened.is_set());
        assert!(state.endings.contains(&Ending::StationWalkthrough));
        assert!(state.is_over());
    }

    #[test]
    fn using_something_else() {
        let mut state = arrived();
        let out = run(&mut state, |t| Station.use_item(t, Some("phone"), None));
        assert!(out.contains("Using that does not seem to have any effect here."));
    }

    #[test]
    fn walking_describes_the_new_area() {
        let mut state = arrived();
        let out = run(&mut state, |t| Station.walk(t, Some("machine")));
        assert_eq!(
            out.texts(),
            vec![
                "You walk to the old ticket machine by the wall.",
                station::LOOK_MACHINE_DORMANT,
            ]
        );

        let out = run(&mut state, |t| Station.walk(t, Some("tracks")));
        assert!(out.contains("That area does not exist here."));
        assert_eq!(state.scene(), Scene::MachineArea);
    }

    #[test]
    fn no_cipher_or_signal_here() {
        let mut state = arrived();
        let out = run(&mut state, |t| Station.solve(t, "WKH GRRU FRGH LV 5731"));
        assert!(out.contains("There is nothing here to solve like that."));
        let out = run(&mut state, |t| Station.call(t, "unknown"));
        assert!(out.contains("There is no signal here."));
    }

    #[test]
    fn clock_ticks_only_once() {
        let mut state = arrived();
        let out = examine(&mut state, "clock");
        assert_eq!(out.texts(), station::CLOCK_TICK);

        let out = examine(&mut state, "clock");
        assert_eq!(out.texts(), vec![station::CLOCK_AFTER]);
        assert!(out.contains("00:01"));
        assert_eq!(state.clues.iter().filter(|c| **c == Clue::ClockTickedOnce).count(), 1);
    }

    #[test]
    fn revealed_board_stays_calm() {
        let mut state = machine_awake();
        let clues = state.clues.len();
        let out = examine(&mut state, "board");
        assert_eq!(out.texts(), vec![station::BOARD_CALM]);
        assert_eq!(state.clues.len(), clues);
    }

    #[test]
    fn awake_machine_prompts_then_goes_blank() {
        let mut state = machine_awake();
        let out = examine(&mut state, "machine");
        assert_eq!(out.texts(), station::MACHINE_PROMPT);

        run(&mut state, |t| Station.take(t, Some("ticket")));
        let out = examine(&mut state, "ticket machine");
        assert_eq!(out.texts(), vec![station::MACHINE_BLANK]);
    }

    #[test]
    fn ticket_is_issued_once() {
        let mut state = machine_awake();
        let out = run(&mut state, |t| Station.take(t, Some("ticket")));
        assert!(out.contains(station::TICKET_ISSUED[0]));
        assert!(state.has_clue(Clue::TicketPlatformEcho));

        let out = run(&mut state, |t| Station.take(t, Some("Ticket")));
        assert_eq!(out.texts(), vec!["You already took the strange ticket."]);
        assert_eq!(state.inventory.as_slice(), &[Item::StrangeTicket]);
    }

    #[test]
    fn look_at_a_target_examines_it() {
        let mut state = arrived();
        let out = run(&mut state, |t| Station.look(t, Some("poster")));
        assert_eq!(out.texts(), station::POSTER_GLIMPSE);
        assert_eq!(state.scene(), Scene::PosterArea);
        assert!(state.has_clue(Clue::LivingSymbols));
    }
}
