//! Per-chapter command handlers.

mod compartment;
mod station;

use nz_core::Chapter;

use crate::error::EngineResult;
use crate::turn::Turn;

pub(crate) use compartment::Compartment;
pub(crate) use station::Station;

/// The handlers for one chapter.
///
/// Each method narrates through the turn and may mutate its state. An
/// `Err` is only returned when a handler would break a story invariant.
pub(crate) trait ChapterRules {
    /// The chapter these rules belong to.
    fn chapter(&self) -> Chapter;

    /// Print the commands that make sense in this chapter.
    fn help(&self, turn: &mut Turn<'_>);

    /// Describe the current scene.
    fn describe_scene(&self, turn: &mut Turn<'_>);

    /// Examine a target.
    fn examine(&self, turn: &mut Turn<'_>, target: Option<&str>) -> EngineResult<()>;

    /// Pick something up.
    fn take(&self, turn: &mut Turn<'_>, item: Option<&str>) -> EngineResult<()>;

    /// Use a carried item.
    fn use_item(
        &self,
        turn: &mut Turn<'_>,
        item: Option<&str>,
        target: Option<&str>,
    ) -> EngineResult<()>;

    /// Walk to an area of the chapter.
    fn walk(&self, turn: &mut Turn<'_>, area: Option<&str>) -> EngineResult<()>;

    /// Attempt the cipher.
    fn solve(&self, turn: &mut Turn<'_>, text: &str) -> EngineResult<()>;

    /// Place a phone call.
    fn call(&self, turn: &mut Turn<'_>, target: &str) -> EngineResult<()>;

    /// `look` without a target describes the scene; with one it examines.
    fn look(&self, turn: &mut Turn<'_>, target: Option<&str>) -> EngineResult<()> {
        match target {
            None => {
                self.describe_scene(turn);
                Ok(())
            }
            Some(_) => self.examine(turn, target),
        }
    }
}

/// The handlers for `chapter`.
pub(crate) fn rules_for(chapter: Chapter) -> &'static dyn ChapterRules {
    match chapter {
        Chapter::Compartment => &Compartment,
        Chapter::Station => &Station,
    }
}
