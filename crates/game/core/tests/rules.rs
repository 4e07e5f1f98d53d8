//! Rules exercised together the way one session uses them.

use game_core::{
    Appliance, BillingPuzzle, CableComponent, CableOutcome, CablePuzzle, DoorOutcome,
    EfficiencyPuzzle, FinalDoor, GameConfig, GameProgress, Level, PcgRng, QuizEngine, QuizPhase,
    SimAppliance, SimulatorApplianceSet,
};

fn grant(progress: &mut GameProgress, level: Level) {
    let index = level.key_index().expect("puzzle level");
    assert!(progress.collect_key(index).unwrap());
}

#[test]
fn three_puzzles_open_the_door_and_the_quiz_decides() {
    let config = GameConfig::default();
    let mut progress = GameProgress::new();
    let mut door = FinalDoor::new();

    // Level 1
    let mut cable = CablePuzzle::new();
    let outcomes: Vec<_> = [
        CableComponent::BatteryPositive,
        CableComponent::Switch,
        CableComponent::Lamp,
        CableComponent::BatteryNegative,
    ]
    .into_iter()
    .map(|component| cable.attempt(component))
    .collect();
    assert_eq!(outcomes.last(), Some(&CableOutcome::Solved));
    grant(&mut progress, Level::One);
    assert!(matches!(
        door.try_open(&progress.energy_keys()),
        DoorOutcome::Locked { missing: 2 }
    ));

    // Level 3 before Level 2: key order does not matter
    let mut appliances = SimulatorApplianceSet::new();
    appliances.set_on(SimAppliance::Ac, true);
    appliances.set_hours(SimAppliance::Ac, 5);
    let mut billing = BillingPuzzle::with_appliances(appliances, &config);
    assert!(!billing.within_target());
    let outcome = billing.toggle(SimAppliance::Ac);
    assert!(outcome.status.is_solved_now());
    grant(&mut progress, Level::Three);

    let mut kitchen = EfficiencyPuzzle::new(&config);
    let outcome = kitchen.toggle(Appliance::Fridge);
    assert!(outcome.status.is_solved_now());
    progress.set_power_meter(outcome.consumption);
    grant(&mut progress, Level::Two);

    assert_eq!(door.try_open(&progress.energy_keys()), DoorOutcome::Opened);

    // Level 4
    let mut quiz = QuizEngine::default();
    let mut rng = PcgRng::new(2024);
    quiz.start(&mut rng);
    let mut result = None;
    while let Some(question) = quiz.current_question().copied() {
        let answer = quiz.answer(question.correct, &mut rng).unwrap();
        result = answer.finished;
    }
    let result = result.expect("quiz finished");
    assert!(result.passed);
    assert_eq!(quiz.phase(), QuizPhase::Finished(result));
}

#[test]
fn progress_survives_a_save_round_trip() {
    let mut progress = GameProgress::new();
    progress.collect_key(0).unwrap();
    progress.collect_key(2).unwrap();
    progress.set_current_level(Level::Four);
    progress.set_power_meter(20);

    let record = progress.to_save_record();
    assert_eq!(record.current_level, 4);
    let restored = GameProgress::from_save_record(&record).unwrap();
    assert_eq!(restored, progress);
}

#[test]
fn same_seed_same_quiz_order() {
    let mut first = QuizEngine::default();
    let mut second = QuizEngine::default();
    first.start(&mut PcgRng::new(5));
    second.start(&mut PcgRng::new(5));
    assert_eq!(first.order(), second.order());
}
