//! Math Drill entry point
//!
//! The web build is driven from JS through `platform::web`. Natively this runs
//! a drill in the terminal:
//!
//! ```text
//! math-drill [CHAPTER_ID] [--seed N] [--settings PATH]
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod console {
    use std::io::{self, BufRead, Write};
    use std::path::PathBuf;
    use std::time::Instant;

    use math_drill::DrillSettings;
    use math_drill::drill::{
        Chapter, InputMode, Outcome, Phase, Session, SeededRng, Submission, normalize_answer,
    };
    use math_drill::platform::clock_seed;
    use math_drill::settings::SettingsStore;

    /// Settings persisted to a JSON file
    struct FileStore {
        path: PathBuf,
    }

    impl SettingsStore for FileStore {
        fn load_raw(&self) -> Option<String> {
            std::fs::read_to_string(&self.path).ok()
        }

        fn save_raw(&mut self, json: &str) {
            if let Err(e) = std::fs::write(&self.path, json) {
                log::warn!("Could not write {}: {e}", self.path.display());
            }
        }
    }

    struct Args {
        chapter_id: i32,
        seed: Option<u64>,
        settings: Option<PathBuf>,
    }

    fn parse_args() -> Result<Args, String> {
        let mut args = Args {
            chapter_id: 2,
            seed: None,
            settings: None,
        };
        let mut it = std::env::args().skip(1);
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--seed" => {
                    let v = it.next().ok_or("--seed needs a value")?;
                    args.seed = Some(v.parse().map_err(|_| format!("bad seed {v:?}"))?);
                }
                "--settings" => {
                    args.settings = Some(it.next().ok_or("--settings needs a path")?.into());
                }
                other => {
                    args.chapter_id = other.parse().map_err(|_| format!("bad chapter id {other:?}"))?;
                }
            }
        }
        Ok(args)
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let args = parse_args()?;
        let chapter = Chapter::from_id(args.chapter_id)?;
        let settings = match &args.settings {
            Some(path) => DrillSettings::load(&FileStore { path: path.clone() }),
            None => DrillSettings::default(),
        };
        let config = settings.to_config()?;
        let seed = args.seed.unwrap_or_else(clock_seed);
        log::info!("Seed {seed}");

        let mut session = Session::start(chapter, &config, SeededRng::new(seed))?;
        println!("{} ({} problems)", chapter.title(), session.total());

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        session.load_current();

        while let Some(view) = session.view() {
            println!();
            println!("[{}/{}] {}", view.index + 1, view.total, view.text);
            match view.input_mode {
                InputMode::Choice => {
                    for (i, option) in view.options.iter().enumerate() {
                        println!("  {}) {}", i + 1, option);
                    }
                }
                InputMode::Entry => println!("  keys: {}", view.keypad.join(" ")),
            }
            if let Some(countdown) = view.countdown {
                println!("  ({:.0}s)", countdown.remaining);
            }
            print!("> ");
            io::stdout().flush()?;

            let asked = Instant::now();
            let Some(line) = lines.next().transpose()? else {
                session.stop();
                break;
            };
            // Let the countdown catch up with however long the answer took
            session.tick(asked.elapsed().as_secs_f32());

            let raw = line.trim();
            let value = match view.input_mode {
                InputMode::Choice => raw
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| view.options.get(i).cloned())
                    .or_else(|| normalize_answer(raw)),
                InputMode::Entry => normalize_answer(raw),
            };
            if let Some(value) = value {
                session.submit(Submission::Value(value));
            } else if matches!(session.phase(), Phase::AwaitingAnswer { .. }) {
                // Unreadable input counts as a wrong answer
                session.submit(Submission::Value(raw.to_string()));
            }

            if let Some(feedback) = session.view().and_then(|v| v.feedback) {
                println!("{} {}", feedback.title, feedback.detail);
                if feedback.outcome == Outcome::TimeUp {
                    log::debug!("Question {} timed out", view.index);
                }
            }
            session.skip();
            session.skip();
        }

        if let Some(tier) = session.tier() {
            println!();
            println!("{} {}", tier.emoji(), tier.title());
            println!("{} / {}", session.score(), session.total());
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Math Drill (native) starting...");

    if let Err(e) = console::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
