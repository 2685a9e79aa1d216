/// Shared helpers for the integration tests: spawn the binary in a scratch
/// directory and load whatever it wrote.
use std::path::Path;
use std::process::{Command, Output};

use follows_gen::output::{
    FOLLOWS_BY_HANDLE_FILE, FOLLOWS_BY_ID_FILE, PERSONS_FILE, PersonRow, read_follows_by_handle,
    read_follows_by_id, read_persons,
};
use follows_gen::Follow;

/// Run `follows-gen` with `args` inside `dir`.
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_follows-gen"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run follows-gen")
}

/// The three files of one run.
pub struct Outputs {
    pub persons: Vec<PersonRow>,
    pub by_id: Vec<Follow>,
    pub by_handle: Vec<(String, String)>,
}

pub fn read_outputs(dir: &Path) -> Outputs {
    Outputs {
        persons: read_persons(&dir.join(PERSONS_FILE)).unwrap(),
        by_id: read_follows_by_id(&dir.join(FOLLOWS_BY_ID_FILE)).unwrap(),
        by_handle: read_follows_by_handle(&dir.join(FOLLOWS_BY_HANDLE_FILE)).unwrap(),
    }
}

/// Names of the regular files in `dir`, sorted.
pub fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
