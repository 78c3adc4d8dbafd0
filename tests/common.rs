use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for rotas, isolated from the user's configuration
pub fn rotas(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rotas");
    cmd.env("ROTAS_CONFIG_DIR", config_dir)
        .env_remove("ROTAS_NETWORK")
        .env_remove("ROTAS_LOG");
    cmd
}

/// Write a network file into `dir` and return its path
#[allow(dead_code)]
pub fn write_network(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write network file");
    path
}

/// Parse JSON written to stdout
#[allow(dead_code)]
pub fn stdout_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout is not valid JSON")
}

/// Small coastal network with one unconnected island
#[allow(dead_code)]
pub const COAST_TOML: &str = r#"
nodes = ["Fernando de Noronha"]

[[edges]]
from = "Santos"
to = "Ilhabela"
minutes = 150
mode = "barco"
bidirectional = true

[[edges]]
from = "Santos"
to = "São Paulo"
minutes = 75
mode = "metrô"
"#;
