//! Headless driver: plays floors with a scripted auto-battler and prints a
//! JSON run report.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use serde::Serialize;

use tower_encounter::FloorEnginePlugin;
use tower_encounter::combat::{
    DamageEvent, DamageSource, Enemy, EnemyAttack, MoveSpeed, Player, PlayerAttack,
};
use tower_encounter::core::{
    EndlessModeRequest, FloorSet, RunProgress, RunVerdict, RunVerdictEvent, floor_in_progress,
};
use tower_encounter::economy::{
    Inventory, PlayerLoadout, UPGRADE_CURRENCY, UpgradeRequest, UpgradeStat,
};
use tower_encounter::modifiers::{FloorModifiersAppliedEvent, MultiplierState};

const TICK: Duration = Duration::from_nanos(1_000_000_000 / 60);
/// Distance an enemy covers before it can hit the player
const ENGAGE_DISTANCE: f32 = 6.0;
const ENEMY_ATTACK_INTERVAL: f32 = 1.0;

/// Command line arguments for the headless floor runner.
#[derive(Parser, Debug)]
#[command(name = "tower-encounter")]
#[command(about = "Plays tower floors headlessly and reports the run as JSON")]
#[command(version)]
struct Args {
    /// Run seed; a random one is drawn when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many floors even if the run is still going
    #[arg(long, default_value_t = 20)]
    max_floors: u32,

    /// Switch to endless mode as soon as the boss floor is reached
    #[arg(long)]
    endless: bool,

    /// Directory holding floor_defaults.ron
    #[arg(long, default_value = "assets/data")]
    data_dir: PathBuf,

    /// Simulate as fast as possible instead of at wall-clock speed
    #[arg(long)]
    fast: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Resource, Debug)]
struct DriverConfig {
    seed: Option<u64>,
    max_floors: u32,
    endless: bool,
}

/// Enemy closing in on the player
#[derive(Component, Debug)]
struct Approach {
    distance: f32,
    cooldown: f32,
}

#[derive(Debug, Serialize)]
struct FloorReport {
    floor: u32,
    modifiers: Vec<String>,
    multipliers: MultiplierState,
    enemy_speed_adjustment: f32,
    verdict: Option<RunVerdict>,
    score: u64,
}

#[derive(Resource, Debug, Default, Serialize)]
struct RunReport {
    seed: u64,
    floors: Vec<FloorReport>,
    final_verdict: Option<RunVerdict>,
    stopped_at_floor_cap: bool,
    inventory: Option<Inventory>,
    upgrades: BTreeMap<UpgradeStat, u32>,
}

fn main() {
    let args = Args::parse();
    let level = args.log_level.parse::<Level>().unwrap_or(Level::INFO);
    let wait = if args.fast { Duration::ZERO } else { TICK };

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(wait)))
        .add_plugins(LogPlugin {
            level,
            ..default()
        })
        .insert_resource(TimeUpdateStrategy::ManualDuration(TICK))
        .add_plugins(FloorEnginePlugin {
            content_path: args.data_dir.clone(),
        })
        .insert_resource(DriverConfig {
            seed: args.seed,
            max_floors: args.max_floors.max(1),
            endless: args.endless,
        })
        .init_resource::<RunReport>()
        .add_systems(Startup, start_run)
        .add_systems(
            Update,
            (engage_new_enemies, player_auto_attack, enemy_auto_attack)
                .chain()
                .in_set(FloorSet::Vitals)
                .run_if(floor_in_progress),
        )
        .add_systems(
            Update,
            (record_floor_start, handle_verdicts)
                .chain()
                .after(FloorSet::Progression),
        )
        .run();
}

fn start_run(config: Res<DriverConfig>, mut progress: ResMut<RunProgress>, mut report: ResMut<RunReport>) {
    match config.seed {
        Some(seed) => progress.start_new_run_with_seed(seed),
        None => progress.start_new_run(),
    }
    report.seed = progress.run_seed();
}

fn engage_new_enemies(mut commands: Commands, enemies: Query<Entity, Added<Enemy>>) {
    for enemy in &enemies {
        commands.entity(enemy).insert(Approach {
            distance: ENGAGE_DISTANCE,
            cooldown: 0.0,
        });
    }
}

/// The player swings at the oldest enemy; a faster player swings more often.
fn player_auto_attack(
    time: Res<Time>,
    mut swing_timer: Local<f32>,
    player: Query<(&MoveSpeed, &PlayerAttack), With<Player>>,
    enemies: Query<Entity, With<Enemy>>,
    mut damage: MessageWriter<DamageEvent>,
) {
    let Ok((speed, attack)) = player.single() else {
        return;
    };
    let interval = attack.interval_secs();
    let cadence = if speed.base > 0.0 {
        speed.current / speed.base
    } else {
        1.0
    };

    *swing_timer += time.delta_secs() * cadence;
    if *swing_timer < interval {
        return;
    }
    *swing_timer -= interval;

    if let Some(target) = enemies.iter().min() {
        damage.write(DamageEvent {
            target,
            amount: attack.damage,
            source: DamageSource::Player,
        });
    }
}

fn enemy_auto_attack(
    time: Res<Time>,
    player: Query<Entity, With<Player>>,
    mut enemies: Query<(&mut Approach, &MoveSpeed, &EnemyAttack), With<Enemy>>,
    mut damage: MessageWriter<DamageEvent>,
) {
    let Ok(target) = player.single() else {
        return;
    };
    let dt = time.delta_secs();

    for (mut approach, speed, attack) in &mut enemies {
        if approach.distance > 0.0 {
            approach.distance -= speed.current * dt;
            continue;
        }

        approach.cooldown -= dt;
        if approach.cooldown <= 0.0 {
            approach.cooldown += ENEMY_ATTACK_INTERVAL;
            damage.write(DamageEvent {
                target,
                amount: attack.damage,
                source: DamageSource::Enemy,
            });
        }
    }
}

fn record_floor_start(
    mut applied: MessageReader<FloorModifiersAppliedEvent>,
    mut report: ResMut<RunReport>,
) {
    for event in applied.read() {
        report.floors.push(FloorReport {
            floor: event.floor,
            modifiers: event.modifiers.iter().map(|m| m.description()).collect(),
            multipliers: event.multipliers,
            enemy_speed_adjustment: event.enemy_speed_adjustment,
            verdict: None,
            score: 0,
        });
    }
}

/// Cheapest upgrade the inventory can pay for right now
fn affordable_upgrade(loadout: &PlayerLoadout, inventory: &Inventory) -> Option<UpgradeStat> {
    UpgradeStat::ALL
        .into_iter()
        .filter(|stat| inventory.can_afford(UPGRADE_CURRENCY, loadout.cost_of(*stat)))
        .min_by_key(|stat| loadout.cost_of(*stat))
}

fn handle_verdicts(
    mut verdicts: MessageReader<RunVerdictEvent>,
    config: Res<DriverConfig>,
    progress: Res<RunProgress>,
    loadout: Res<PlayerLoadout>,
    inventory: Res<Inventory>,
    mut report: ResMut<RunReport>,
    mut endless: MessageWriter<EndlessModeRequest>,
    mut upgrades: MessageWriter<UpgradeRequest>,
    mut exit: MessageWriter<AppExit>,
) {
    for event in verdicts.read() {
        if let Some(floor) = report.floors.iter_mut().rev().find(|f| f.floor == event.floor) {
            floor.verdict = Some(event.verdict);
            floor.score = event.score;
        }

        let finished = match event.verdict {
            RunVerdict::Advanced { next_floor } if next_floor > config.max_floors => {
                report.stopped_at_floor_cap = true;
                true
            }
            RunVerdict::Advanced { .. } => {
                if config.endless && progress.can_toggle_endless_mode() && !progress.endless_mode() {
                    endless.write(EndlessModeRequest { enabled: true });
                }
                if let Some(stat) = affordable_upgrade(&loadout, &inventory) {
                    upgrades.write(UpgradeRequest { stat });
                }
                false
            }
            RunVerdict::CampaignWon | RunVerdict::Lost => {
                report.final_verdict = Some(event.verdict);
                true
            }
        };

        if finished {
            report.inventory = Some(inventory.clone());
            report.upgrades = UpgradeStat::ALL
                .into_iter()
                .map(|stat| (stat, loadout.upgrades(stat)))
                .collect();
            match serde_json::to_string_pretty(&*report) {
                Ok(json) => println!("{}", json),
                Err(e) => error!("[RUN] Failed to serialize run report: {}", e),
            }
            exit.write(AppExit::Success);
        }
    }
}
