//! The authored progression graph.
//!
//! ```text
//! Loading --assets--> OpeningCutscene --cutscene--> MainMenu
//! MainMenu --start, resume 4/3/2--> Level4 / Level3 / Level2
//! MainMenu --start--> Level1
//! Level1 --> Level2 --> Level3 --> Level4 --> EndingCutscene
//! ```
//!
//! Resume edges are registered before the plain start edge so a continued
//! game lands on its saved level.

use game_core::{GameState, Level, PowerTier, messages};
use state_machine::{StateDefinition, StateMachine};

use super::context::{GameContext, Stage};
use super::deferred::Deferred;
use crate::api::ScreenId;
use crate::events::{FeedbackKind, FlowEvent, PuzzleEvent};
use crate::triggers::Triggers;

pub(crate) type GameMachine = StateMachine<GameState, GameContext>;

pub(crate) fn build_machine() -> GameMachine {
    let mut machine = StateMachine::new(GameState::Loading);

    machine.add_state(
        GameState::Loading,
        StateDefinition::new()
            .on_enter(GameContext::enter_loading)
            .on_exit(|ctx| ctx.leave(GameState::Loading)),
    );
    machine.add_state(
        GameState::OpeningCutscene,
        StateDefinition::new()
            .on_enter(GameContext::enter_opening_cutscene)
            .on_exit(|ctx| ctx.leave(GameState::OpeningCutscene)),
    );
    machine.add_state(
        GameState::MainMenu,
        StateDefinition::new()
            .on_enter(GameContext::enter_main_menu)
            .on_exit(|ctx| ctx.leave(GameState::MainMenu)),
    );
    for level in [Level::One, Level::Two, Level::Three, Level::Four] {
        let mut definition = StateDefinition::new()
            .on_enter(move |ctx: &mut GameContext| ctx.enter_level(level))
            .on_exit(move |ctx: &mut GameContext| ctx.exit_level(level));
        if level == Level::Two {
            definition = definition.on_update(GameContext::refresh_power_meter);
        }
        machine.add_state(level.state(), definition);
    }
    machine.add_state(
        GameState::EndingCutscene,
        StateDefinition::new().on_enter(GameContext::enter_ending_cutscene),
    );

    machine.add_transition(GameState::Loading, GameState::OpeningCutscene, |ctx| {
        ctx.triggers.contains(Triggers::ASSETS_LOADED)
    });
    machine.add_transition(GameState::OpeningCutscene, GameState::MainMenu, |ctx| {
        ctx.triggers.contains(Triggers::CUTSCENE_FINISHED)
    });
    for level in [Level::Four, Level::Three, Level::Two] {
        machine.add_transition(GameState::MainMenu, level.state(), move |ctx| {
            ctx.triggers.contains(Triggers::START_GAME_CLICKED) && ctx.resume_level == Some(level)
        });
    }
    machine.add_transition(GameState::MainMenu, GameState::Level1, |ctx| {
        ctx.triggers.contains(Triggers::START_GAME_CLICKED)
    });
    for (from, to) in [
        (Level::One, GameState::Level2),
        (Level::Two, GameState::Level3),
        (Level::Three, GameState::Level4),
        (Level::Four, GameState::EndingCutscene),
    ] {
        machine.add_transition(from.state(), to, move |ctx| {
            ctx.triggers.contains(Triggers::level_completed(from))
        });
    }

    machine
}

impl GameContext {
    /// Shared exit: consume the state's trigger and orphan its timers.
    fn leave(&mut self, state: GameState) {
        self.triggers.remove(Triggers::owned_by(state));
        self.clear_feedback();
        self.scheduler.invalidate();
    }

    fn enter_loading(&mut self) {
        self.scene.show_screen(ScreenId::LoadingScreen);
        self.triggers = Triggers::empty();
        self.resume_level = None;
        self.emit(FlowEvent::LoadingProgress {
            percent: 0,
            caption: messages::loading_progress(0),
        });
        self.load_assets();
    }

    /// Attempts every asset not loaded yet and opens the gate when all are in.
    pub(crate) fn load_assets(&mut self) {
        let bus = self.bus.clone();
        self.assets
            .load_outstanding(self.loader.as_mut(), |tracker, path, error| match error {
                None => {
                    let percent = tracker.progress_percent();
                    bus.publish(FlowEvent::LoadingProgress {
                        percent,
                        caption: messages::loading_progress(percent),
                    });
                }
                Some(error) => bus.publish(FlowEvent::AssetFailed {
                    path: path.to_string(),
                    reason: error.to_string(),
                }),
            });

        if self.assets.is_complete() {
            tracing::info!(total = self.assets.total(), "all assets loaded");
            self.triggers.insert(Triggers::ASSETS_LOADED);
        } else {
            let failed = self.assets.failed().len();
            tracing::warn!(failed, "asset loading incomplete, waiting for retry");
            self.feedback(messages::assets_failed(failed), FeedbackKind::Error);
        }
    }

    fn enter_opening_cutscene(&mut self) {
        self.scene.show_screen(ScreenId::OpeningCutscene);
        self.triggers.remove(Triggers::CUTSCENE_FINISHED);
        let duration = self.config.cutscene_duration;
        self.schedule(duration, Deferred::FinishCutscene);
    }

    fn enter_main_menu(&mut self) {
        self.scene.show_screen(ScreenId::MainMenu);
        self.triggers.remove(Triggers::START_GAME_CLICKED);
        self.resume_level = None;
        self.close_overlay();
    }

    fn enter_level(&mut self, level: Level) {
        self.scene.show_screen(ScreenId::GameCanvasContainer);
        self.progress.set_current_level(level);
        self.triggers.remove(Triggers::level_completed(level));
        self.reset_stage(level);
        self.autosave();
    }

    /// Fresh puzzle state and instructions for `level`.
    pub(crate) fn reset_stage(&mut self, level: Level) {
        self.close_overlay();
        self.stage = Stage::for_level(level, &self.config.game);
        if let Some(text) = messages::instructions(level.state()) {
            self.instructions(text);
        }
        if level == Level::Two {
            self.refresh_power_meter();
            let watts = self.progress.power_meter();
            self.emit(PuzzleEvent::PowerMeter {
                watts,
                tier: PowerTier::classify(watts, &self.config.game),
            });
        }
    }

    fn exit_level(&mut self, level: Level) {
        self.leave(level.state());
        self.close_overlay();
        self.stage = Stage::Idle;
    }

    /// Keeps the saved power meter in step with the kitchen appliances.
    fn refresh_power_meter(&mut self) {
        if let Stage::Efficiency(puzzle) = &self.stage {
            let watts = puzzle.current_consumption();
            if watts != self.progress.power_meter() {
                self.progress.set_power_meter(watts);
            }
        }
    }

    fn enter_ending_cutscene(&mut self) {
        self.scene.show_screen(ScreenId::OpeningCutscene);
        self.emit(FlowEvent::EndingCredits {
            title: messages::ENDING_TITLE.to_string(),
            subtitle: messages::ENDING_SUBTITLE.to_string(),
            character: messages::ENDING_CHARACTER.to_string(),
        });
        self.autosave();
    }
}
