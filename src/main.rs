// Minimal headless runner: loads a ROM, runs it for a bounded number of
// frames, optionally emitting a trace line per instruction. Sufficient for
// smoke-testing the core without a presentation layer.

use nescore::config::CoreConfig;
use nescore::console::Console;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = CoreConfig::load_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter.clone()))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(rom_path) = args.get(1) else {
        eprintln!("usage: nescore <rom.nes> [--trace]");
        return ExitCode::FAILURE;
    };
    let trace = args.iter().any(|a| a == "--trace");

    let mut console = Console::new();
    if let Err(err) = console.load_cartridge(rom_path) {
        eprintln!("failed to load {rom_path}: {err}");
        return ExitCode::FAILURE;
    }
    console.set_trace_enabled(trace);

    let mut frames_run: u64 = 0;
    loop {
        if let Some(line) = console.trace_line() {
            println!("{line}");
        }
        let outcome = console.step_instruction();
        if outcome.frame_complete {
            frames_run += 1;
            if let Some(max_frames) = config.max_frames {
                if frames_run >= max_frames {
                    break;
                }
            }
        }
    }

    ExitCode::SUCCESS
}
