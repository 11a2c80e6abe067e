//! Chapters and the scenes inside them.

use std::fmt;

use serde::Serialize;

use crate::error::{StoryError, StoryResult};

/// One of the two story arcs. Ordered so that `Compartment < Station`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Chapter {
    /// Chapter 1: escaping the locked train compartment.
    Compartment,
    /// Chapter 2: the Station of Silent Faces.
    Station,
}

impl Chapter {
    /// The chapter number shown to the player (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Self::Compartment => 1,
            Self::Station => 2,
        }
    }

    /// The scene a player starts in when entering this chapter.
    pub fn entry_scene(self) -> Scene {
        match self {
            Self::Compartment => Scene::Center,
            Self::Station => Scene::Platform,
        }
    }

    /// Every scene that belongs to this chapter.
    pub fn scenes(self) -> &'static [Scene] {
        match self {
            Self::Compartment => &[
                Scene::Center,
                Scene::SeatArea,
                Scene::WindowArea,
                Scene::DoorArea,
            ],
            Self::Station => &[
                Scene::Platform,
                Scene::PosterArea,
                Scene::BoardArea,
                Scene::ClockArea,
                Scene::MachineArea,
                Scene::GateArea,
            ],
        }
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A location the player can stand in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Scene {
    /// Middle of the compartment.
    Center,
    /// The torn seat and luggage rack.
    SeatArea,
    /// The scratched window.
    WindowArea,
    /// The locked compartment door.
    DoorArea,
    /// The station platform.
    Platform,
    /// The poster of shifting symbols.
    PosterArea,
    /// The station map board.
    BoardArea,
    /// Below the frozen clock.
    ClockArea,
    /// The ticket machine.
    MachineArea,
    /// The gate at the end of the platform.
    GateArea,
}

impl Scene {
    /// The stable key for this scene.
    pub fn key(self) -> &'static str {
        match self {
            Self::Center => "scene1",
            Self::SeatArea => "seat-area",
            Self::WindowArea => "window-area",
            Self::DoorArea => "door-area",
            Self::Platform => "platform",
            Self::PosterArea => "poster-area",
            Self::BoardArea => "board-area",
            Self::ClockArea => "clock-area",
            Self::MachineArea => "machine-area",
            Self::GateArea => "gate-area",
        }
    }

    /// Parse a scene from its key.
    pub fn parse(key: &str) -> StoryResult<Self> {
        [Chapter::Compartment, Chapter::Station]
            .into_iter()
            .flat_map(|c| c.scenes().iter().copied())
            .find(|s| s.key() == key)
            .ok_or_else(|| StoryError::UnknownScene(key.to_string()))
    }

    /// The chapter this scene belongs to.
    pub fn chapter(self) -> Chapter {
        match self {
            Self::Center | Self::SeatArea | Self::WindowArea | Self::DoorArea => {
                Chapter::Compartment
            }
            _ => Chapter::Station,
        }
    }
}

impl From<Scene> for &'static str {
    fn from(scene: Scene) -> Self {
        scene.key()
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
