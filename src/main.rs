//! Snake 3D entry point
//!
//! The browser build is driven from JavaScript through `snake_3d::web`.
//! Natively this runs a headless game: a key script is replayed on a
//! virtual clock ticking in 30 ms frames, and the outcome is logged.
//!
//! Usage: snake-3d [--settings FILE] [--save-settings FILE] [--seed N] [SCRIPT]
//!
//! Each SCRIPT character is fed on its own tick; `.` means no input.
//! `--save-settings` writes the effective settings (defaults filled in).

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use snake_3d::consts::FRAME_INTERVAL_MS;
    use snake_3d::sim::{GameEvent, TickResult};
    use snake_3d::{Session, Settings};

    env_logger::init();
    log::info!("Snake 3D (native, headless) starting...");

    let mut settings_path = None;
    let mut save_path = None;
    let mut seed = 0x5EED_u64;
    let mut script = String::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => settings_path = args.next(),
            "--save-settings" => save_path = args.next(),
            "--seed" => match args.next().map(|s| s.parse()) {
                Some(Ok(n)) => seed = n,
                _ => log::warn!("--seed expects an integer, keeping {seed:#x}"),
            },
            _ => script.push_str(&arg),
        }
    }

    let settings = match settings_path {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    if let Some(path) = save_path {
        match settings.save(&path) {
            Ok(()) => log::info!("Wrote settings to {path}"),
            Err(e) => log::error!("Failed to save settings to {path}: {e}"),
        }
    }

    let mut session = Session::new(settings, seed, 0.0);
    let mut keys = script.chars();
    let mut now = 0.0;
    let mut ticks = 0u64;
    let mut eaten = 0u32;

    // Feed the first key before the first tick, then one key per tick
    let mut feed = |session: &mut Session, now: f64| {
        if let Some(c) = keys.next() {
            if c != '.' && session.handle_char(c, now).is_none() {
                log::warn!("Ignoring unmapped key {c:?}");
            }
            true
        } else {
            false
        }
    };
    let mut script_left = feed(&mut session, now);

    // Once the script runs out, let the snake coast until it hits something
    let coast_limit = 4 * session.settings().grid_size as u64;
    let mut coasted = 0;

    loop {
        now += FRAME_INTERVAL_MS;
        let frame = session.frame(now);

        for event in &frame.events {
            match event {
                GameEvent::ConsumableEaten { position } => {
                    eaten += 1;
                    log::info!("Ate consumable at {position} (score {})", frame.score);
                }
                GameEvent::Died { cause } => {
                    log::info!("Died: {cause:?}");
                }
            }
        }

        if frame.dead {
            break;
        }
        if frame.result == TickResult::Advanced {
            ticks += 1;
            if script_left {
                script_left = feed(&mut session, now);
            } else {
                coasted += 1;
                if coasted >= coast_limit {
                    break;
                }
            }
        }
    }

    let state = session.state();
    println!(
        "ticks: {ticks}, consumables eaten: {eaten}, score: {}, dead: {}, head: {}",
        state.score(),
        state.is_dead(),
        state.position
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is snake_3d::web::start, this is just to satisfy the compiler
}
