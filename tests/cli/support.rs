use std::fs;
use std::path::Path;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::{tempdir, TempDir};

/// Eligibility table: MEX is restricted, CUN has no connections
pub const DESTINOS: &str = "Codigo,RequiereVisa\nLIM,No\nBOG,No\nMEX,Sí\nMIA,No\nCUN,No\n";

/// Connectivity table: the cheapest LIM-MIA route passes through MEX
pub const TARIFAS: &str =
    "Origen,Destino,Precio\nLIM,BOG,100\nBOG,MIA,50\nLIM,MIA,200\nBOG,MEX,30\nMEX,MIA,5\n";

/// Get a Command for waypath with the environment isolated from the host
pub fn waypath() -> Command {
    let mut cmd = cargo_bin_cmd!("waypath");
    cmd.env_remove("RUST_LOG")
        .env_remove("WAYPATH_LOG")
        .env_remove("WAYPATH_CONFIG");
    cmd
}

/// A temporary directory holding `destinos.csv` and `tarifas.csv`
pub fn network() -> TempDir {
    network_with(DESTINOS, TARIFAS)
}

pub fn network_with(destinos: &str, tarifas: &str) -> TempDir {
    let dir = tempdir().unwrap();
    write(dir.path(), "destinos.csv", destinos);
    write(dir.path(), "tarifas.csv", tarifas);
    dir
}

pub fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
