use std::process::ExitCode;

const DEFAULT_CONFIG: &str = "assets/spawn_pool.toml";

fn main() -> ExitCode {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    match spawn_pool::game::run(&path) {
        Ok(exit) if exit.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("spawn-pool: {e}");
            ExitCode::FAILURE
        }
    }
}
