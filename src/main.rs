//! Fortress - terminal driver
//!
//! Runs the colony engine behind a small line-oriented REPL, or headless for
//! a fixed number of ticks with `--run`.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use serde::Serialize;

use fortress::command::{CommandExecutor, PlayerCommand};
use fortress::core::config::{config, set_config, SimulationConfig};
use fortress::core::error::{FortressError, Result};
use fortress::core::types::Position;
use fortress::entity::item::ItemType;
use fortress::simulation::clock::TickClock;
use fortress::simulation::tick::run_simulation_tick;
use fortress::world::generation::create_seeded_game_state;
use fortress::world::messages::MessageKind;
use fortress::world::state::GameState;
use fortress::world::terrain::ConstructionType;

/// Fortress - dwarf colony simulation
#[derive(Parser, Debug)]
#[command(name = "fortress")]
#[command(about = "Tick-driven dwarf colony simulation")]
struct Args {
    /// Random seed for deterministic worlds
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding simulation constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run this many ticks headless and print a JSON summary
    #[arg(long)]
    run: Option<u64>,
}

/// JSON output of a headless run
#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    dwarves_alive: usize,
    monsters: usize,
    stone: u32,
    wood: u32,
    items: usize,
    items_crafted: usize,
    monsters_spawned: usize,
    recent_messages: Vec<String>,
}

/// One parsed line of REPL input
#[derive(Debug, Clone, PartialEq)]
enum Input {
    Tick(u64),
    Play(u64),
    Command(PlayerCommand),
    Status,
    Map,
    Log,
    Json,
    Help,
    Quit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fortress=info")),
        )
        .init();

    let args = Args::parse();

    if let Some(path) = &args.config {
        let loaded = SimulationConfig::load(path)?;
        tracing::info!("Loaded config from {}", path.display());
        set_config(loaded)
            .map_err(|_| FortressError::InvalidConfig("config already initialised".into()))?;
    }
    let cfg = config();

    let seed = args.seed.unwrap_or_else(rand::random);
    let state = create_seeded_game_state(seed);
    tracing::info!("World created from seed {}", seed);

    match args.run {
        Some(ticks) => run_headless(state, cfg, seed, ticks),
        None => run_repl(state, cfg),
    }
}

fn run_headless(
    mut state: GameState,
    cfg: &SimulationConfig,
    seed: u64,
    ticks: u64,
) -> Result<()> {
    let mut items_crafted = 0;
    let mut monsters_spawned = 0;

    for _ in 0..ticks {
        let (next, report) = run_simulation_tick(&state, cfg);
        items_crafted += report.crafted.len();
        monsters_spawned += usize::from(report.spawned.is_some());
        state = next;
    }

    let summary = RunSummary {
        seed,
        ticks: state.tick,
        dwarves_alive: state.living_dwarves().count(),
        monsters: state.monsters.len(),
        stone: state.resources.stone,
        wood: state.resources.wood,
        items: state.items.len(),
        items_crafted,
        monsters_spawned,
        recent_messages: state.messages.iter().take(10).map(|m| m.text.clone()).collect(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn run_repl(mut state: GameState, cfg: &SimulationConfig) -> Result<()> {
    println!("\n=== FORTRESS ===");
    print_help();
    let mut unseen = print_new_messages(&state, 0);

    loop {
        print!("[tick {}{}]> ", state.tick, if state.is_paused { " paused" } else { "" });
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let input = match parse_input(line, &state) {
            Ok(input) => input,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match input {
            Input::Quit => break,
            Input::Tick(n) => {
                for _ in 0..n {
                    state = run_simulation_tick(&state, cfg).0;
                }
            }
            Input::Play(seconds) => state = play(state, cfg, seconds, &mut unseen),
            Input::Command(command) => {
                state = CommandExecutor::execute_with(&state, &command, cfg)
            }
            Input::Status => print_status(&state),
            Input::Map => print_map(&state),
            Input::Log => print_log(&state),
            Input::Json => println!("{}", state.to_json()?),
            Input::Help => print_help(),
        }
        unseen = print_new_messages(&state, unseen);
    }

    println!(
        "\nFarewell. {} dwarves remain after {} ticks.",
        state.living_dwarves().count(),
        state.tick
    );
    Ok(())
}

/// Run in real time at the snapshot's speed, printing messages as they arrive
fn play(
    mut state: GameState,
    cfg: &SimulationConfig,
    seconds: u64,
    unseen: &mut u64,
) -> GameState {
    if state.is_paused {
        println!("The game is paused. Use `pause` to resume.");
        return state;
    }

    let start = Instant::now();
    let deadline = start + Duration::from_secs(seconds);
    let mut clock = TickClock::new(start);

    while Instant::now() < deadline {
        if let Some(next) = clock.poll(&state, cfg, Instant::now()) {
            state = next;
            *unseen = print_new_messages(&state, *unseen);
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    state
}

fn parse_input(line: &str, state: &GameState) -> Result<Input> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let input = match words.as_slice() {
        ["quit" | "q"] => Input::Quit,
        ["tick" | "t"] => Input::Tick(1),
        ["run", n] => Input::Tick(parse_number(n)?),
        ["play", seconds] => Input::Play(parse_number(seconds)?),
        ["status" | "s"] => Input::Status,
        ["map" | "m"] => Input::Map,
        ["log"] => Input::Log,
        ["json"] => Input::Json,
        ["help" | "h" | "?"] => Input::Help,
        ["pause" | "p"] => Input::Command(PlayerCommand::TogglePause),
        ["speed", n] => Input::Command(PlayerCommand::SetSpeed {
            speed: parse_number(n)?,
        }),
        ["mine", x, y] => {
            let Position { x, y } = parse_position(x, y)?;
            Input::Command(PlayerCommand::DesignateMining { x, y })
        }
        ["zone", x, y] => {
            let Position { x, y } = parse_position(x, y)?;
            Input::Command(PlayerCommand::CreateStockpile { x, y })
        }
        ["build", kind, x, y] => {
            let kind: ConstructionType = kind.parse()?;
            let Position { x, y } = parse_position(x, y)?;
            Input::Command(PlayerCommand::Build { x, y, kind })
        }
        ["craft", x, y, item] => {
            let item_type: ItemType = item.parse()?;
            let Position { x, y } = parse_position(x, y)?;
            Input::Command(PlayerCommand::QueueCrafting { x, y, item_type })
        }
        ["equip", name, index] => {
            let dwarf = state
                .dwarf_by_name(name)
                .ok_or_else(|| FortressError::UnknownDwarf(name.to_string()))?;
            let index: usize = parse_number(index)?;
            let item = state.items.get(index).ok_or_else(|| {
                FortressError::InvalidCommand(format!("no item #{} (see `status`)", index))
            })?;
            Input::Command(PlayerCommand::Equip {
                dwarf: dwarf.id,
                item: item.id,
            })
        }
        _ => {
            return Err(FortressError::InvalidCommand(format!(
                "`{}` (type `help` for commands)",
                line
            )))
        }
    };
    Ok(input)
}

fn parse_number<T: std::str::FromStr>(word: &str) -> Result<T> {
    word.parse()
        .map_err(|_| FortressError::InvalidCommand(format!("`{}` is not a number", word)))
}

fn parse_position(x: &str, y: &str) -> Result<Position> {
    Ok(Position::new(parse_number(x)?, parse_number(y)?))
}

fn print_help() {
    println!("Commands:");
    println!("  tick / t              - Advance one tick");
    println!("  run <n>               - Advance n ticks");
    println!("  play <seconds>        - Run in real time at the current speed");
    println!("  mine <x> <y>          - Toggle dig/chop designation");
    println!("  build <kind> <x> <y>  - Place workshop, wall, house or nursery");
    println!("  zone <x> <y>          - Create a stockpile tile");
    println!("  craft <x> <y> <item>  - Queue pickaxe, sword, armor or furniture");
    println!("  equip <dwarf> <item#> - Send a dwarf to wear an item");
    println!("  pause / p             - Toggle pause");
    println!("  speed <1|2|4>         - Set game speed");
    println!("  status / s, map / m, log, json, help, quit / q");
    println!();
}

/// Print messages with id `unseen` or later, oldest first; returns the next unseen id
fn print_new_messages(state: &GameState, unseen: u64) -> u64 {
    let fresh: Vec<_> = state.messages.iter().take_while(|m| m.id >= unseen).collect();
    for msg in fresh.iter().rev() {
        println!("  {} {}", message_marker(msg.kind), msg.text);
    }
    state.messages.newest().map_or(unseen, |m| (m.id + 1).max(unseen))
}

fn message_marker(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "[i]",
        MessageKind::Warning => "[!]",
        MessageKind::Success => "[+]",
        MessageKind::Error => "[x]",
    }
}

fn print_status(state: &GameState) {
    println!();
    println!(
        "--- Tick {} | speed {}x{} | stone {} wood {} ---",
        state.tick,
        state.game_speed,
        if state.is_paused { " (paused)" } else { "" },
        state.resources.stone,
        state.resources.wood
    );

    println!("Dwarves:");
    for d in &state.dwarves {
        let mut gear = Vec::new();
        if let Some(weapon) = d.equipment.weapon {
            gear.push(weapon.name());
        }
        if let Some(armor) = d.equipment.armor {
            gear.push(armor.name());
        }
        println!(
            "  {:<8} {:>3}/{} hp  {:<10} at {}  {}",
            d.name,
            d.health,
            d.max_health,
            d.task.kind(),
            d.position,
            gear.join(", ")
        );
    }

    if !state.monsters.is_empty() {
        println!("Monsters:");
        for m in &state.monsters {
            println!(
                "  {:<8} {:>3}/{} hp  at {}",
                m.monster_type, m.health, m.max_health, m.position
            );
        }
    }

    let workshops = state.workshops();
    if !workshops.is_empty() {
        println!("Workshops:");
        for w in workshops {
            match (w.item_type, w.progress) {
                (Some(item), Some(progress)) => {
                    println!("  {}  {} {}%", w.position, item, progress)
                }
                _ => println!("  {}  idle", w.position),
            }
        }
    }

    if !state.items.is_empty() {
        println!("Items:");
        for (i, item) in state.items.iter().enumerate() {
            let stored = if state.is_stockpiled(item) { " (stored)" } else { "" };
            println!("  #{:<3} {:<10} at {}{}", i, item.item_type, item.location, stored);
        }
    }
    println!();
}

fn print_map(state: &GameState) {
    let mut rows: Vec<Vec<char>> = (0..state.tiles.height)
        .filter_map(|y| state.tiles.row(y))
        .map(|row| row.iter().map(|t| t.glyph()).collect())
        .collect();

    let mut mark = |pos: Position, glyph: char| {
        if let Some(cell) = rows
            .get_mut(pos.y as usize)
            .and_then(|row| row.get_mut(pos.x as usize))
        {
            *cell = glyph;
        }
    };
    for m in &state.monsters {
        mark(m.position, m.monster_type.glyph());
    }
    for d in state.living_dwarves() {
        mark(d.position, '@');
    }

    for row in rows {
        println!("{}", row.into_iter().collect::<String>());
    }
}

fn print_log(state: &GameState) {
    for msg in state.messages.iter().take(20) {
        println!(
            "  t{:<5} {} {}",
            msg.timestamp,
            message_marker(msg.kind),
            msg.text
        );
    }
}
