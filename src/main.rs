use std::io;
use std::process::ExitCode;

use sosu_kazoe::config::load_or_create_config;
use sosu_kazoe::number_source::load_numbers;
use sosu_kazoe::report::run_report;

/// 使い方:
///
/// ```text
/// sosu-kazoe <file_path>
/// ```
///
/// - `<file_path>` は 1 行 1 整数のテキストファイル。パースできない行は黙ってスキップされる。
/// - 並列ワーカー数は `settings.toml` の `worker_count` で上書きできる（0 = 自動検出）。
fn main() -> ExitCode {
    env_logger::init();

    let Some(file_path) = std::env::args().nth(1) else {
        eprintln!("Usage: sosu-kazoe <file_path>");
        return ExitCode::FAILURE;
    };

    let cfg = match load_or_create_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    let numbers = match load_numbers(&file_path) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error reading file: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = run_report(&file_path, &numbers, cfg.worker_count, &mut stdout) {
        eprintln!("Error while writing report: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
