use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use anyhow::Context;
use tracing::debug;
use eda::board::Board;

#[tracing::instrument]
pub fn load_board(board_path: &Path) -> anyhow::Result<Board> {
    let file = File::open(board_path)
        .with_context(|| format!("Error opening board. file: {}", board_path.display()))?;

    let board: Board = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Error reading board. file: {}", board_path.display()))?;

    debug!("Loaded board. name: '{}', devices: {}", board.name, board.devices.len());

    Ok(board)
}
