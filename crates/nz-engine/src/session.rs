//! Story session management.

use nz_core::story::{COMMAND_IGNORED, END_OF_RUN, compartment};
use nz_core::{Achievement, GameState};
use tracing::{debug, info};

use crate::audio::{Audio, AudioCue};
use crate::chapters::rules_for;
use crate::config::GameConfig;
use crate::error::EngineResult;
use crate::narrator::Narrator;
use crate::parser::{Command, parse_command};
use crate::tracker;
use crate::turn::Turn;

/// A single run of the story.
///
/// The session owns the game state and forwards all output to its
/// narrator and audio sinks.
pub struct Session<N: Narrator, A: Audio> {
    state: GameState,
    narrator: N,
    audio: A,
    config: GameConfig,
}

impl<N: Narrator, A: Audio> Session<N, A> {
    /// Create a session with the default configuration.
    pub fn new(narrator: N, audio: A) -> Self {
        Self::with_config(narrator, audio, GameConfig::default())
    }

    /// Create a session with a specific configuration.
    pub fn with_config(narrator: N, audio: A, config: GameConfig) -> Self {
        Self {
            state: GameState::new(),
            narrator,
            audio,
            config,
        }
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The narrator.
    pub fn narrator(&self) -> &N {
        &self.narrator
    }

    /// Get a mutable reference to the narrator.
    pub fn narrator_mut(&mut self) -> &mut N {
        &mut self.narrator
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Consume the session, returning the state and both sinks.
    pub fn into_parts(self) -> (GameState, N, A) {
        (self.state, self.narrator, self.audio)
    }

    /// Print the opening narration and start the background audio.
    pub fn start(&mut self) {
        info!(chapter = %self.state.chapter(), "story started");
        let volume = self.config.ambient_volume;
        let mut turn = self.turn();
        turn.say_all(compartment::INTRO);
        turn.say_instant(compartment::HELP_PROMPT);
        turn.ambient(volume);
    }

    /// Process one line of player input.
    ///
    /// Blank input is ignored. Once the run has ended, every line is
    /// answered with the end-of-run message and the state is left alone.
    pub fn process(&mut self, input: &str) -> EngineResult<()> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }

        let over = self.state.is_over();
        let mut turn = self.turn();
        turn.cue(AudioCue::Click);
        if over {
            turn.say(END_OF_RUN);
            return Ok(());
        }
        turn.say_instant(&format!("> {input}"));

        match parse_command(input) {
            Some(command) => self.execute(command),
            None => Ok(()),
        }
    }

    /// Execute a parsed command against the current chapter.
    pub fn execute(&mut self, command: Command) -> EngineResult<()> {
        let rules = rules_for(self.state.chapter());
        debug!(
            ?command,
            chapter = %self.state.chapter(),
            scene = %self.state.scene(),
            "command"
        );

        let mut turn = self.turn();
        if turn.state.is_over() {
            turn.say(END_OF_RUN);
            return Ok(());
        }

        match command {
            Command::EasterEgg(egg) => {
                let line = egg.flavor(rules.chapter());
                turn.say(line);
                tracker::unlock_achievement(&mut turn, Achievement::WrongUniverse);
                Ok(())
            }
            Command::Help => {
                rules.help(&mut turn);
                Ok(())
            }
            Command::Look { target } => rules.look(&mut turn, target.as_deref()),
            Command::Examine { target } => rules.examine(&mut turn, target.as_deref()),
            Command::Take { item } => rules.take(&mut turn, item.as_deref()),
            Command::Use { item, target } => {
                rules.use_item(&mut turn, item.as_deref(), target.as_deref())
            }
            Command::Solve { text } => rules.solve(&mut turn, &text),
            Command::Inventory => {
                show_inventory(&mut turn);
                Ok(())
            }
            Command::Clues => {
                show_clues(&mut turn);
                Ok(())
            }
            Command::Move { area } => rules.walk(&mut turn, area.as_deref()),
            Command::Call { target } => rules.call(&mut turn, &target),
            Command::Unknown { .. } => {
                turn.say(COMMAND_IGNORED);
                Ok(())
            }
        }
    }

    fn turn(&mut self) -> Turn<'_> {
        let audio: Option<&mut dyn Audio> = if self.config.muted {
            None
        } else {
            Some(&mut self.audio)
        };
        Turn::new(&mut self.state, &mut self.narrator, audio)
    }
}

fn show_inventory(turn: &mut Turn<'_>) {
    if turn.state.inventory.is_empty() {
        turn.say("You are carrying nothing.");
        return;
    }
    let names: Vec<&str> = turn.state.inventory.iter().map(|i| i.name()).collect();
    turn.say(&format!("Inventory: {}", names.join(", ")));
}

fn show_clues(turn: &mut Turn<'_>) {
    if turn.state.clues.is_empty() {
        turn.say("You have not recorded any clues yet.");
        return;
    }
    let lines: Vec<String> = turn
        .state
        .clues
        .iter()
        .map(|c| format!("- {}", c.text()))
        .collect();
    turn.say("Clues:");
    for line in &lines {
        turn.say(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentAudio;
    use crate::error::AudioError;
    use crate::narrator::{LineStyle, Transcript};
    use nz_core::story::station;
    use nz_core::{Chapter, Clue, Ending, Item, Scene};

    const SOLVE: &str = "solve WKH GRRU FRGH LV 5731";

    fn session() -> Session<Transcript, SilentAudio> {
        Session::new(Transcript::new(), SilentAudio)
    }

    fn play<N: Narrator, A: Audio>(session: &mut Session<N, A>, commands: &[&str]) {
        for command in commands {
            session.process(command).unwrap();
        }
    }

    /// Output of the last command, without the echo line.
    fn last_output(session: &mut Session<Transcript, SilentAudio>) -> String {
        let lines = session.narrator_mut().take();
        lines
            .iter()
            .skip(1)
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[derive(Debug, Default)]
    struct RecordingAudio {
        cues: Vec<AudioCue>,
        volumes: Vec<f32>,
    }

    impl Audio for RecordingAudio {
        fn play_cue(&mut self, cue: AudioCue) -> Result<(), AudioError> {
            self.cues.push(cue);
            Ok(())
        }

        fn set_ambient_volume(&mut self, level: f32) -> Result<(), AudioError> {
            self.volumes.push(level);
            Ok(())
        }
    }

    struct FailingAudio;

    impl Audio for FailingAudio {
        fn play_cue(&mut self, _cue: AudioCue) -> Result<(), AudioError> {
            Err(AudioError::Unavailable("no device".to_string()))
        }

        fn set_ambient_volume(&mut self, _level: f32) -> Result<(), AudioError> {
            Err(AudioError::Unavailable("no device".to_string()))
        }
    }

    #[test]
    fn start_prints_intro() {
        let mut session = session();
        session.start();

        let lines = session.narrator().lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, compartment::INTRO[0]);
        assert_eq!(lines[2].text, "Type \"help\" for commands.");
        assert_eq!(lines[2].style, LineStyle::Instant);
    }

    #[test]
    fn blank_input_does_nothing() {
        let mut session = Session::new(Transcript::new(), RecordingAudio::default());
        session.process("   ").unwrap();

        let (state, narrator, audio) = session.into_parts();
        assert_eq!(state, GameState::new());
        assert!(narrator.lines().is_empty());
        assert!(audio.cues.is_empty());
    }

    #[test]
    fn input_is_echoed_instantly() {
        let mut session = session();
        session.process("  look  ").unwrap();

        let first = &session.narrator().lines()[0];
        assert_eq!(first.text, "> look");
        assert_eq!(first.style, LineStyle::Instant);
    }

    #[test]
    fn unknown_verb_is_ignored() {
        let mut session = session();
        session.process("jump").unwrap();
        assert_eq!(last_output(&mut session), COMMAND_IGNORED);
        assert_eq!(session.state(), &GameState::new());
    }

    #[test]
    fn help_compartment() {
        let mut session = session();
        session.process("help").unwrap();
        insta::assert_snapshot!(last_output(&mut session), @r#"
        Available commands:
        - look
        - examine <object>
        - take <item>
        - use <item> [on <target>]
        - solve <coded message> / decode <coded message>
        - inventory / inv
        - clues
        - move <area> (seat, window, door)
        - call <target> (when you have the phone)
        "#);
    }

    #[test]
    fn help_station() {
        let mut session = session();
        play(
            &mut session,
            &["take phone", SOLVE, "call unknown"],
        );
        session.narrator_mut().take();
        session.process("HELP").unwrap();
        insta::assert_snapshot!(last_output(&mut session), @r"
        Available commands (Station):
        - look
        - examine <object>
        - take <item>
        - use <item>
        - inventory / inv
        - clues
        - move <area> (platform, poster, board, clock, machine, gate)
        ");
    }

    #[test]
    fn inventory_and_clues() {
        let mut session = session();
        session.process("inv").unwrap();
        assert_eq!(last_output(&mut session), "You are carrying nothing.");
        session.process("clues").unwrap();
        assert_eq!(
            last_output(&mut session),
            "You have not recorded any clues yet."
        );

        play(&mut session, &["take phone", "examine phone", "examine window"]);
        session.narrator_mut().take();

        session.process("inventory").unwrap();
        assert_eq!(last_output(&mut session), "Inventory: phone");
        session.process("clues").unwrap();
        assert_eq!(
            last_output(&mut session),
            "Clues:\n- Encoded phone message\n- Alphabet shift pattern"
        );
    }

    #[test]
    fn easter_eggs_unlock_wrong_universe_once() {
        let mut session = session();
        play(&mut session, &["dance", "sing", "kick the door"]);

        let narrator = session.narrator();
        assert_eq!(narrator.count("Achievement unlocked: Wrong Universe"), 1);
        assert!(narrator.contains(compartment::KICK_DOOR));
        assert_eq!(
            session.state().achievements.as_slice(),
            &[Achievement::WrongUniverse]
        );
    }

    #[test]
    fn scenario_standard_escape_with_note() {
        let mut session = session();
        play(
            &mut session,
            &[
                "take phone",
                "examine phone",
                "move seat",
                "take note",
                "examine note",
                SOLVE,
                "move door",
                "use phone",
            ],
        );

        let state = session.state();
        assert!(state.is_over());
        assert!(state.has_clue(Clue::EncodedPhoneMessage));
        assert!(state.has_clue(Clue::ShiftHint));
        assert!(state.has_clue(Clue::DoorCode));
        assert_eq!(state.endings.as_slice(), &[Ending::StandardEscape]);
        assert!(!state.achievements.contains(&Achievement::Codebreaker));
        assert!(!state.achievements.contains(&Achievement::MinimalistEscape));
        assert!(session.narrator().contains("No achievements earned this run."));
    }

    #[test]
    fn scenario_off_the_map() {
        let mut session = session();
        play(
            &mut session,
            &["take phone", "decode WKH GRRU FRGH LV 5731", "call unknown"],
        );

        let state = session.state();
        assert_eq!(state.chapter(), Chapter::Station);
        assert_eq!(state.scene(), Scene::Platform);
        assert!(!state.is_over());
        assert_eq!(state.endings.as_slice(), &[Ending::OffTheMap]);
        assert_eq!(
            state.achievements.as_slice(),
            &[Achievement::Codebreaker, Achievement::OffTheMap]
        );
        assert!(session.narrator().contains(station::TITLE));
    }

    #[test]
    fn scenario_station_walkthrough() {
        let mut session = session();
        play(
            &mut session,
            &[
                "take phone",
                SOLVE,
                "call unknown",
                "examine passengers",
                "examine poster",
                "examine poster",
                "examine clock",
                "examine board",
                "examine machine",
                "take ticket",
                "move gate",
                "use ticket",
            ],
        );

        let state = session.state();
        assert!(state.is_over());
        assert!(state.has_item(Item::StrangeTicket));
        assert_eq!(
            state.endings.as_slice(),
            &[Ending::OffTheMap, Ending::StationWalkthrough]
        );
        assert_eq!(state.clues.len(), 8);

        let narrator = session.narrator();
        assert!(narrator.contains("Ending unlocked: Station Walkthrough."));
        assert!(narrator.contains("- Station Walkthrough"));
        assert_eq!(
            narrator.lines().last().map(|l| l.text.as_str()),
            Some("Restart to play again.")
        );
    }

    #[test]
    fn finished_run_is_locked() {
        let mut session = session();
        play(
            &mut session,
            &[
                "take phone",
                SOLVE,
                "move door",
                "use phone",
            ],
        );
        let frozen = session.state().clone();
        session.narrator_mut().take();

        play(&mut session, &["move window", "dance", "take note", "clues"]);

        assert_eq!(session.state(), &frozen);
        let texts = session.narrator().texts();
        assert_eq!(texts, vec![END_OF_RUN; 4]);
    }

    #[test]
    fn execute_respects_the_lock() {
        let mut session = session();
        play(
            &mut session,
            &[
                "take phone",
                SOLVE,
                "move door",
                "use phone",
            ],
        );
        let frozen = session.state().clone();
        session.execute(Command::Inventory).unwrap();
        assert_eq!(session.state(), &frozen);
    }

    #[test]
    fn solve_requires_the_exact_message() {
        let mut session = session();
        play(&mut session, &["solve 5731", "solve the door code is 5731"]);
        assert!(!session.state().compartment.decoded_message.is_set());
        assert!(!session.state().has_clue(Clue::DoorCode));
    }

    #[test]
    fn audio_notifications() {
        let mut session = Session::new(Transcript::new(), RecordingAudio::default());
        session.start();
        play(
            &mut session,
            &[
                "take phone",
                SOLVE,
                "move door",
                "use phone",
                "look",
            ],
        );

        let (_, _, audio) = session.into_parts();
        assert_eq!(audio.volumes, vec![0.4, 0.15]);
        assert_eq!(
            audio.cues,
            vec![
                AudioCue::Click,
                AudioCue::Click,
                AudioCue::Click,
                AudioCue::Click,
                AudioCue::Unlock,
                AudioCue::Click,
            ]
        );
    }

    #[test]
    fn muted_sessions_stay_silent() {
        let config = GameConfig::default().with_muted(true);
        let mut session =
            Session::with_config(Transcript::new(), RecordingAudio::default(), config);
        session.start();
        play(&mut session, &["take phone", "look"]);

        let (_, _, audio) = session.into_parts();
        assert!(audio.cues.is_empty());
        assert!(audio.volumes.is_empty());
    }

    #[test]
    fn audio_failures_are_absorbed() {
        let mut session = Session::new(Transcript::new(), FailingAudio);
        session.start();
        play(
            &mut session,
            &[
                "take phone",
                SOLVE,
                "call unknown",
            ],
        );
        assert_eq!(session.state().chapter(), Chapter::Station);
    }

    #[test]
    fn kicking_the_door_at_the_station() {
        let mut session = session();
        play(&mut session, &["take phone", SOLVE, "call unknown"]);
        session.narrator_mut().take();

        session.process("kick door").unwrap();
        let output = last_output(&mut session);
        assert!(output.starts_with(station::KICK_DOOR));
        assert!(!output.contains(compartment::KICK_DOOR));
        assert!(session.state().achievements.contains(&Achievement::WrongUniverse));
    }

    #[test]
    fn configured_volume_is_used_at_start() {
        let config = GameConfig::default().with_ambient_volume(0.7);
        let mut session =
            Session::with_config(Transcript::new(), RecordingAudio::default(), config);
        assert_eq!(session.config().ambient_volume, 0.7);

        session.start();
        let (_, _, audio) = session.into_parts();
        assert_eq!(audio.volumes, vec![0.7]);
    }
}
