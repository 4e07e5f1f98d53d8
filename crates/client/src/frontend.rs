//! Text frontend: typed commands in, game events out.
use std::str::FromStr;

use game_core::{Appliance, CableComponent, SimAppliance};
use runtime::{Event, FeedbackKind, FlowEvent, InputEvent, PuzzleEvent, QuizEvent, UiTarget};

pub const HELP: &str = "\
perintah:
  start | continue | settings | about | close | menu | save | retry
  e (interaksi) | esc (batal) | r (ulangi level)
  cable <battery+|switch|lamp|battery->
  toggle <light|fridge|fan|riceCooker>
  sim <light|ac|tv|fridge|computer>
  hours <alat> <jam>
  door | answer <1-4>
  music <0-100> | sfx <0-100>
  help | quit";

/// One line typed by the player.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Input(InputEvent),
    Help,
    Quit,
}

/// A line that is not a valid command; the message is shown to the player.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ParseError(pub String);

fn click(target: UiTarget) -> Command {
    Command::Input(InputEvent::Click(target))
}

fn key(code: &str) -> Command {
    Command::Input(InputEvent::KeyDown(code.to_string()))
}

fn argument<'a>(arg: Option<&'a str>, usage: &str) -> Result<&'a str, ParseError> {
    arg.ok_or_else(|| ParseError(format!("usage: {usage}")))
}

fn named<T: FromStr>(arg: Option<&str>, usage: &str) -> Result<T, ParseError> {
    let raw = argument(arg, usage)?;
    raw.parse()
        .map_err(|_| ParseError(format!("unknown name `{raw}`; usage: {usage}")))
}

fn percent(arg: Option<&str>, usage: &str) -> Result<u8, ParseError> {
    let raw = argument(arg, usage)?;
    raw.parse::<u8>()
        .map(|value| value.min(100))
        .map_err(|_| ParseError(format!("usage: {usage}")))
}

/// Parses one command line. Empty lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let command = match head.to_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,

        "e" | "interact" => key("KeyE"),
        "esc" | "cancel" => key("Escape"),
        "r" | "restart" => key("KeyR"),

        "start" => click(UiTarget::StartGame),
        "continue" => click(UiTarget::ContinueGame),
        "settings" => click(UiTarget::Settings),
        "about" => click(UiTarget::About),
        "close" => click(UiTarget::CloseModal),
        "menu" => click(UiTarget::MainMenu),
        "save" => click(UiTarget::SaveGame),
        "retry" => click(UiTarget::RetryAssets),
        "door" => click(UiTarget::Door),

        "cable" => click(UiTarget::Cable(named::<CableComponent>(
            arg,
            "cable <battery+|switch|lamp|battery->",
        )?)),
        "toggle" => click(UiTarget::Appliance(named::<Appliance>(
            arg,
            "toggle <light|fridge|fan|riceCooker>",
        )?)),
        "sim" => click(UiTarget::Simulator(named::<SimAppliance>(
            arg,
            "sim <light|ac|tv|fridge|computer>",
        )?)),
        "hours" => {
            let appliance = named::<SimAppliance>(arg, "hours <appliance> <hours>")?;
            let raw = words.next().unwrap_or_default().to_string();
            click(UiTarget::SimulatorHours { appliance, raw })
        }
        "answer" => {
            let raw = argument(arg, "answer <1-4>")?;
            match raw.parse::<usize>() {
                Ok(choice @ 1..=4) => click(UiTarget::QuizOption(choice - 1)),
                _ => return Err(ParseError("usage: answer <1-4>".to_string())),
            }
        }
        "music" => click(UiTarget::MusicVolume(percent(arg, "music <0-100>")?)),
        "sfx" => click(UiTarget::SfxVolume(percent(arg, "sfx <0-100>")?)),

        other => return Err(ParseError(format!("unknown command `{other}`, try `help`"))),
    };
    Ok(Some(command))
}

/// Text shown for an event, if the player should see it.
pub fn render_event(event: &Event) -> Option<String> {
    match event {
        Event::Flow(flow) => render_flow(flow),
        Event::Puzzle(puzzle) => render_puzzle(puzzle),
        Event::Quiz(quiz) => render_quiz(quiz),
    }
}

fn render_flow(event: &FlowEvent) -> Option<String> {
    match event {
        FlowEvent::StateChanged { .. } | FlowEvent::FeedbackHidden => None,
        FlowEvent::Instructions { .. } => None,
        FlowEvent::LoadingProgress { caption, .. } => Some(caption.clone()),
        FlowEvent::AssetFailed { path, reason } => Some(format!("! {path}: {reason}")),
        FlowEvent::Feedback { message, kind } => {
            let marker = match kind {
                FeedbackKind::Success => "+",
                FeedbackKind::Error => "!",
                FeedbackKind::Info => "*",
            };
            Some(format!("{marker} {message}"))
        }
        FlowEvent::EndingCredits {
            title,
            subtitle,
            character,
        } => Some(format!("\n{title}\n{subtitle}\n\n{character}")),
        FlowEvent::ProgressSaved { level } => Some(format!("(tersimpan: {level})")),
        FlowEvent::SaveMissing => None,
    }
}

fn render_puzzle(event: &PuzzleEvent) -> Option<String> {
    match event {
        PuzzleEvent::PanelOpened { .. } | PuzzleEvent::PanelClosed => None,
        PuzzleEvent::CableConnected { connected } => Some(format!(
            "kabel tersambung: {connected}/{}",
            game_core::GameConfig::CABLE_SEQUENCE_LEN
        )),
        PuzzleEvent::CableRejected => None,
        PuzzleEvent::PowerMeter { watts, tier } => {
            Some(format!("Power Meter: {watts} W ({})", tier.label()))
        }
        PuzzleEvent::Bill {
            amount,
            within_target,
        } => {
            let mark = if *within_target { "OK" } else { "terlalu mahal" };
            Some(format!("Tagihan: Rp {amount:.0} [{mark}]"))
        }
        PuzzleEvent::KeyCollected { collected, .. } => Some(format!(
            "Kunci Energi: {collected}/{}",
            game_core::GameConfig::ENERGY_KEY_COUNT
        )),
        PuzzleEvent::DoorOpened | PuzzleEvent::DoorLocked { .. } => None,
        PuzzleEvent::LevelCompleted { level } => Some(format!("{level} selesai")),
    }
}

fn render_quiz(event: &QuizEvent) -> Option<String> {
    match event {
        QuizEvent::Question {
            index,
            total,
            prompt,
            options,
        } => {
            let mut text = format!(
                "\n{}\n{prompt}",
                game_core::messages::quiz_progress(*index, *total)
            );
            for (number, option) in options.iter().enumerate() {
                text.push_str(&format!("\n  {}. {option}", number + 1));
            }
            Some(text)
        }
        QuizEvent::Answered { correct_option, .. } => {
            Some(format!("jawaban benar: {}", correct_option + 1))
        }
        QuizEvent::Finished { .. } => None,
    }
}
