//! End-to-end progression through the orchestrator with in-memory
//! collaborators and a fixed quiz seed.

use std::sync::Arc;
use std::time::Duration;

use game_core::{
    Appliance, CableComponent, GameState, Level, PuzzleKind, SaveRecord, SimAppliance, messages,
};
use runtime::{
    AssetError, AssetLoader, Event, FeedbackKind, FlowEvent, InMemoryProgressRepo, InputEvent,
    Orchestrator,
    Overlay, ProgressRepository, PuzzleEvent, QuizEvent, RuntimeConfig, RuntimeError, Topic,
    Triggers, UiTarget,
};

const FRAME: Duration = Duration::from_millis(16);

fn config() -> RuntimeConfig {
    RuntimeConfig {
        rng_seed: Some(7),
        ..RuntimeConfig::default()
    }
}

fn click(game: &mut Orchestrator, target: UiTarget) {
    game.handle_input(InputEvent::Click(target))
        .expect("click should be accepted");
}

fn key(game: &mut Orchestrator, code: &str) {
    game.handle_input(InputEvent::KeyDown(code.to_string()))
        .expect("key should be accepted");
}

fn tick(game: &mut Orchestrator, dt: Duration) -> Option<GameState> {
    game.tick(dt).expect("tick should succeed").map(|change| change.to)
}

/// Starts a game and plays through loading and the opening cutscene.
fn at_main_menu(game: &mut Orchestrator) {
    game.start().expect("start should succeed");
    assert_eq!(game.current_state(), GameState::Loading);
    assert_eq!(tick(game, FRAME), Some(GameState::OpeningCutscene));
    assert_eq!(tick(game, Duration::from_secs(8)), Some(GameState::MainMenu));
}

fn solve_cable(game: &mut Orchestrator) {
    key(game, "KeyE");
    for component in [
        CableComponent::BatteryPositive,
        CableComponent::Switch,
        CableComponent::Lamp,
        CableComponent::BatteryNegative,
    ] {
        click(game, UiTarget::Cable(component));
    }
}

fn drain(receiver: &mut tokio::sync::broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}

#[test]
fn full_playthrough_reaches_the_ending() {
    let mut game = Orchestrator::builder().config(config()).build().unwrap();
    at_main_menu(&mut game);
    let mut puzzle_events = game.subscribe(Topic::Puzzle);

    // ================================================================
    // Level 1: cable circuit
    // ================================================================
    click(&mut game, UiTarget::StartGame);
    assert_eq!(tick(&mut game, FRAME), Some(GameState::Level1));

    solve_cable(&mut game);
    assert!(game.progress().has_key(0));
    assert_eq!(tick(&mut game, Duration::from_secs(1)), None);
    assert_eq!(tick(&mut game, Duration::from_secs(1)), Some(GameState::Level2));

    // ================================================================
    // Level 2: kitchen efficiency
    // ================================================================
    key(&mut game, "Enter");
    assert_eq!(game.overlay(), Some(Overlay::Puzzle(PuzzleKind::Efficiency)));
    click(&mut game, UiTarget::Appliance(Appliance::Fridge));
    assert!(game.progress().has_key(1));
    assert_eq!(game.progress().power_meter(), 20);
    assert_eq!(tick(&mut game, Duration::from_secs(2)), Some(GameState::Level3));

    // ================================================================
    // Level 3: billing simulator
    // ================================================================
    click(&mut game, UiTarget::LevelScene);
    click(&mut game, UiTarget::Simulator(SimAppliance::Light));
    assert!(game.progress().all_keys_collected());
    assert_eq!(tick(&mut game, Duration::from_secs(2)), Some(GameState::Level4));

    // ================================================================
    // Level 4: final door and quiz
    // ================================================================
    click(&mut game, UiTarget::Door);
    assert!(game.current_question().is_none());
    tick(&mut game, Duration::from_secs(2));
    assert_eq!(game.overlay(), Some(Overlay::Quiz));

    for _ in 0..10 {
        let correct = game.current_question().expect("question shown").correct;
        click(&mut game, UiTarget::QuizOption(correct));
        // a second answer before the next question is ignored
        click(&mut game, UiTarget::QuizOption(correct));
        tick(&mut game, Duration::from_secs(2));
    }
    assert_eq!(tick(&mut game, Duration::from_secs(1)), Some(GameState::EndingCutscene));
    assert!(game.is_finished());

    let events = drain(&mut puzzle_events);
    let keys = events
        .iter()
        .filter(|event| matches!(event, Event::Puzzle(PuzzleEvent::KeyCollected { .. })))
        .count();
    assert_eq!(keys, 3);
    assert!(events.contains(&Event::Puzzle(PuzzleEvent::LevelCompleted { level: Level::Four })));
}

#[test]
fn wrong_cable_resets_the_circuit() {
    let mut game = Orchestrator::builder().config(config()).build().unwrap();
    at_main_menu(&mut game);
    click(&mut game, UiTarget::StartGame);
    tick(&mut game, FRAME);

    key(&mut game, "KeyE");
    click(&mut game, UiTarget::Cable(CableComponent::BatteryPositive));
    click(&mut game, UiTarget::Cable(CableComponent::Lamp));
    click(&mut game, UiTarget::Cable(CableComponent::BatteryNegative));
    assert!(!game.progress().has_key(0));

    solve_cable(&mut game);
    assert!(game.progress().has_key(0));
}

#[test]
fn puzzle_input_needs_an_open_panel() {
    let mut game = Orchestrator::builder().config(config()).build().unwrap();
    at_main_menu(&mut game);
    click(&mut game, UiTarget::StartGame);
    tick(&mut game, FRAME);

    for component in [
        CableComponent::BatteryPositive,
        CableComponent::Switch,
        CableComponent::Lamp,
        CableComponent::BatteryNegative,
    ] {
        click(&mut game, UiTarget::Cable(component));
    }
    assert!(!game.progress().has_key(0));

    key(&mut game, "KeyE");
    key(&mut game, "Escape");
    assert_eq!(game.overlay(), None);
}

#[test]
fn locked_door_keeps_the_quiz_away() {
    let repo = Arc::new(InMemoryProgressRepo::with_record(SaveRecord {
        energy_keys: [true, false, true],
        current_level: 4,
        power_meter: 20,
    }));
    let mut game = Orchestrator::builder()
        .config(config())
        .repository(repo)
        .build()
        .unwrap();
    at_main_menu(&mut game);

    assert!(game.continue_game());
    assert_eq!(tick(&mut game, FRAME), Some(GameState::Level4));

    let mut puzzle_events = game.subscribe(Topic::Puzzle);
    click(&mut game, UiTarget::Door);
    tick(&mut game, Duration::from_secs(5));
    assert_eq!(game.overlay(), None);
    assert!(game.current_question().is_none());
    assert!(drain(&mut puzzle_events).contains(&Event::Puzzle(PuzzleEvent::DoorLocked { missing: 1 })));
}

/// Resumes a save holding all three keys and opens the quiz.
fn at_quiz() -> Orchestrator {
    let repo = Arc::new(InMemoryProgressRepo::with_record(SaveRecord {
        energy_keys: [true, true, true],
        current_level: 4,
        power_meter: 20,
    }));
    let mut game = Orchestrator::builder()
        .config(config())
        .repository(repo)
        .build()
        .unwrap();
    at_main_menu(&mut game);
    click(&mut game, UiTarget::ContinueGame);
    assert_eq!(tick(&mut game, FRAME), Some(GameState::Level4));
    key(&mut game, "KeyE");
    tick(&mut game, Duration::from_secs(2));
    assert_eq!(game.overlay(), Some(Overlay::Quiz));
    game
}

/// Answers the first `correct` questions right and the rest wrong.
fn answer_quiz(game: &mut Orchestrator, correct: usize) {
    for index in 0..10 {
        let right = game.current_question().expect("question shown").correct;
        let choice = if index < correct { right } else { (right + 1) % 4 };
        click(game, UiTarget::QuizOption(choice));
        tick(game, Duration::from_secs(2));
    }
}

#[test]
fn failed_quiz_starts_over() {
    let mut game = at_quiz();
    let mut quiz_events = game.subscribe(Topic::Quiz);

    answer_quiz(&mut game, 0);
    assert_eq!(game.overlay(), None);
    assert_eq!(game.current_state(), GameState::Level4);

    tick(&mut game, Duration::from_secs(1));
    assert_eq!(game.overlay(), Some(Overlay::Quiz));
    assert_eq!(game.current_state(), GameState::Level4);

    let events = drain(&mut quiz_events);
    assert!(events.contains(&Event::Quiz(QuizEvent::Finished {
        score: 0,
        total: 10,
        percent: 0,
        passed: false,
    })));
    assert!(matches!(
        events.last(),
        Some(Event::Quiz(QuizEvent::Question { index: 0, total: 10, .. }))
    ));
}

#[test]
fn seven_of_ten_passes_the_quiz() {
    let mut game = at_quiz();
    let mut quiz_events = game.subscribe(Topic::Quiz);

    answer_quiz(&mut game, 7);
    assert_eq!(game.current_state(), GameState::Level4);
    assert_eq!(tick(&mut game, Duration::from_secs(1)), Some(GameState::EndingCutscene));

    assert!(drain(&mut quiz_events).contains(&Event::Quiz(QuizEvent::Finished {
        score: 7,
        total: 10,
        percent: 70,
        passed: true,
    })));
}

#[test]
fn six_of_ten_restarts_the_quiz() {
    let mut game = at_quiz();
    let mut quiz_events = game.subscribe(Topic::Quiz);

    answer_quiz(&mut game, 6);
    assert_eq!(game.overlay(), None);
    // the new run is held back until the result has been read
    assert_eq!(tick(&mut game, Duration::from_millis(900)), None);
    assert_eq!(game.overlay(), None);
    assert_eq!(tick(&mut game, Duration::from_millis(100)), None);
    assert_eq!(game.overlay(), Some(Overlay::Quiz));
    assert_eq!(game.current_state(), GameState::Level4);

    let events = drain(&mut quiz_events);
    assert!(events.contains(&Event::Quiz(QuizEvent::Finished {
        score: 6,
        total: 10,
        percent: 60,
        passed: false,
    })));
    assert!(matches!(
        events.last(),
        Some(Event::Quiz(QuizEvent::Question { index: 0, total: 10, .. }))
    ));
}

#[test]
fn first_two_panels_open_with_a_hint() {
    let mut game = Orchestrator::builder().config(config()).build().unwrap();
    at_main_menu(&mut game);
    click(&mut game, UiTarget::StartGame);
    tick(&mut game, FRAME);
    let mut flow = game.subscribe(Topic::Flow);

    key(&mut game, "KeyE");
    assert!(drain(&mut flow).contains(&Event::Flow(FlowEvent::Feedback {
        message: messages::CABLE_HINT.to_string(),
        kind: FeedbackKind::Info,
    })));
    solve_cable(&mut game);
    assert_eq!(tick(&mut game, Duration::from_secs(2)), Some(GameState::Level2));

    drain(&mut flow);
    key(&mut game, "KeyE");
    assert_eq!(game.overlay(), Some(Overlay::Puzzle(PuzzleKind::Efficiency)));
    assert!(drain(&mut flow).contains(&Event::Flow(FlowEvent::Feedback {
        message: messages::EFFICIENCY_HINT.to_string(),
        kind: FeedbackKind::Info,
    })));
    click(&mut game, UiTarget::Appliance(Appliance::Fridge));
    assert_eq!(tick(&mut game, Duration::from_secs(2)), Some(GameState::Level3));

    drain(&mut flow);
    key(&mut game, "KeyE");
    assert_eq!(game.overlay(), Some(Overlay::Puzzle(PuzzleKind::Simulator)));
    assert!(!drain(&mut flow).iter().any(|event| matches!(
        event,
        Event::Flow(FlowEvent::Feedback { kind: FeedbackKind::Info, .. })
    )));
}

#[test]
fn restart_hands_back_the_key_and_cancels_completion() {
    let mut game = Orchestrator::builder().config(config()).build().unwrap();
    at_main_menu(&mut game);
    click(&mut game, UiTarget::StartGame);
    tick(&mut game, FRAME);

    solve_cable(&mut game);
    assert!(game.progress().has_key(0));

    key(&mut game, "KeyR");
    assert!(!game.progress().has_key(0));
    assert_eq!(game.overlay(), None);
    assert_eq!(tick(&mut game, Duration::from_secs(5)), None);
    assert_eq!(game.current_state(), GameState::Level1);
    assert!(!game.triggers().contains(Triggers::LEVEL_1_COMPLETED));

    solve_cable(&mut game);
    assert_eq!(tick(&mut game, Duration::from_secs(2)), Some(GameState::Level2));
}

#[test]
fn restart_is_refused_outside_puzzle_levels() {
    let mut game = Orchestrator::builder().config(config()).build().unwrap();
    at_main_menu(&mut game);
    assert!(!game.restart_level().unwrap());
}

#[test]
fn continue_resumes_at_the_saved_level() {
    let repo = Arc::new(InMemoryProgressRepo::with_record(SaveRecord {
        energy_keys: [true, true, false],
        current_level: 3,
        power_meter: 20,
    }));
    let mut game = Orchestrator::builder()
        .config(config())
        .repository(repo)
        .build()
        .unwrap();
    at_main_menu(&mut game);

    click(&mut game, UiTarget::ContinueGame);
    assert_eq!(tick(&mut game, FRAME), Some(GameState::Level3));
    assert_eq!(game.progress().energy_keys(), [true, true, false]);
}

#[test]
fn invalid_save_is_treated_as_missing() {
    let repo = Arc::new(InMemoryProgressRepo::with_record(SaveRecord {
        energy_keys: [true, true, true],
        current_level: 9,
        power_meter: 20,
    }));
    let mut game = Orchestrator::builder()
        .config(config())
        .repository(repo)
        .build()
        .unwrap();
    at_main_menu(&mut game);
    let mut flow = game.subscribe(Topic::Flow);

    assert!(!game.continue_game());
    assert_eq!(tick(&mut game, FRAME), None);
    assert_eq!(game.current_state(), GameState::MainMenu);
    assert!(drain(&mut flow).contains(&Event::Flow(FlowEvent::SaveMissing)));
}

#[test]
fn continue_without_repository_reports_missing_save() {
    let mut game = Orchestrator::builder().config(config()).build().unwrap();
    at_main_menu(&mut game);
    assert!(!game.continue_game());
    assert_eq!(game.current_state(), GameState::MainMenu);
}

#[test]
fn save_and_load_need_a_repository() {
    let mut game = Orchestrator::builder().config(config()).build().unwrap();
    at_main_menu(&mut game);
    assert!(matches!(game.save(), Err(RuntimeError::MissingRepository)));
    assert!(matches!(game.load(), Err(RuntimeError::MissingRepository)));

    let mut game = Orchestrator::builder()
        .config(config())
        .repository(Arc::new(InMemoryProgressRepo::new()))
        .build()
        .unwrap();
    at_main_menu(&mut game);
    assert_eq!(game.load().unwrap(), None);
}

#[test]
fn persistence_saves_on_level_entry_and_key_collection() {
    let repo = Arc::new(InMemoryProgressRepo::new());
    let mut game = Orchestrator::builder()
        .config(RuntimeConfig {
            enable_persistence: true,
            ..config()
        })
        .repository(repo.clone())
        .build()
        .unwrap();
    at_main_menu(&mut game);

    click(&mut game, UiTarget::StartGame);
    tick(&mut game, FRAME);
    let saved = repo.load().unwrap().expect("saved on level entry");
    assert_eq!(saved.current_level, 1);
    assert_eq!(saved.energy_keys, [false, false, false]);

    solve_cable(&mut game);
    let saved = repo.load().unwrap().expect("saved on key collection");
    assert_eq!(saved.energy_keys, [true, false, false]);
}

#[test]
fn persistence_without_repository_is_rejected() {
    let result = Orchestrator::builder()
        .config(RuntimeConfig {
            enable_persistence: true,
            ..config()
        })
        .build();
    assert!(matches!(result, Err(RuntimeError::MissingRepository)));
}

#[test]
fn manual_save_and_return_to_menu() {
    let repo = Arc::new(InMemoryProgressRepo::new());
    let mut game = Orchestrator::builder()
        .config(config())
        .repository(repo.clone())
        .build()
        .unwrap();
    at_main_menu(&mut game);
    click(&mut game, UiTarget::StartGame);
    tick(&mut game, FRAME);
    solve_cable(&mut game);
    tick(&mut game, Duration::from_secs(2));
    assert_eq!(game.current_state(), GameState::Level2);

    click(&mut game, UiTarget::SaveGame);
    let saved = game.load().unwrap().expect("manual save written");
    assert_eq!(saved.current_level, 2);

    click(&mut game, UiTarget::MainMenu);
    assert_eq!(game.current_state(), GameState::MainMenu);
    click(&mut game, UiTarget::ContinueGame);
    assert_eq!(tick(&mut game, FRAME), Some(GameState::Level2));
    assert!(game.progress().has_key(0));
}

#[test]
fn new_game_clears_progress() {
    let repo = Arc::new(InMemoryProgressRepo::with_record(SaveRecord {
        energy_keys: [true, true, false],
        current_level: 3,
        power_meter: 20,
    }));
    let mut game = Orchestrator::builder()
        .config(config())
        .repository(repo)
        .build()
        .unwrap();
    at_main_menu(&mut game);
    assert!(game.continue_game());
    tick(&mut game, FRAME);
    assert!(game.return_to_main_menu().unwrap());

    assert!(game.new_game());
    assert_eq!(tick(&mut game, FRAME), Some(GameState::Level1));
    assert_eq!(game.progress().collected_keys(), 0);
}

#[test]
fn opening_cutscene_can_be_skipped() {
    let mut game = Orchestrator::builder().config(config()).build().unwrap();
    game.start().unwrap();
    tick(&mut game, FRAME);
    assert_eq!(game.current_state(), GameState::OpeningCutscene);

    key(&mut game, "KeyE");
    assert_eq!(tick(&mut game, FRAME), Some(GameState::MainMenu));
}

#[test]
fn nothing_moves_before_start() {
    let mut game = Orchestrator::builder().config(config()).build().unwrap();
    assert!(matches!(game.tick(FRAME), Err(RuntimeError::NotStarted)));
    assert!(matches!(
        game.handle_input(InputEvent::KeyDown("KeyE".into())),
        Err(RuntimeError::NotStarted)
    ));
}

/// Fails each listed path once, then succeeds.
struct FlakyLoader {
    failing: Vec<String>,
}

impl AssetLoader for FlakyLoader {
    fn load(&mut self, path: &str) -> Result<(), AssetError> {
        if let Some(position) = self.failing.iter().position(|p| p == path) {
            self.failing.remove(position);
            return Err(AssetError::Rejected {
                path: path.into(),
                reason: "connection reset".into(),
            });
        }
        Ok(())
    }
}

#[test]
fn failed_asset_blocks_loading_until_retry() {
    let mut game = Orchestrator::builder()
        .config(config())
        .manifest(["3D/ruangan/scene.gltf", "3D/dapur/scene.gltf"])
        .asset_loader(FlakyLoader {
            failing: vec!["3D/dapur/scene.gltf".to_string()],
        })
        .build()
        .unwrap();
    let mut flow = game.subscribe(Topic::Flow);
    game.start().unwrap();

    assert_eq!(tick(&mut game, Duration::from_secs(30)), None);
    assert_eq!(game.current_state(), GameState::Loading);
    assert_eq!(game.assets().failed().len(), 1);
    assert!(drain(&mut flow).iter().any(|event| matches!(
        event,
        Event::Flow(FlowEvent::AssetFailed { path, .. }) if path == "3D/dapur/scene.gltf"
    )));

    key(&mut game, "KeyR");
    assert!(game.assets().is_complete());
    assert_eq!(tick(&mut game, FRAME), Some(GameState::OpeningCutscene));
}
