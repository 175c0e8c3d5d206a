use std::path::Path;
use clap::Parser;
use tracing::{info, warn};
use assembly::BoardPickPlaceGenerator;
use pnp::pcb::PcbSide;
use pnp::pick_place::{PickPlaceDataItem, PickPlaceItemKind};
use crate::opts::{Command, Opts};

mod loader;
mod opts;

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    cli::tracing::configure_tracing(opts.trace.clone(), &opts.verbose)?;

    match opts.command {
        Command::Generate { board, locale, side, kind } => {
            generate(&board, locale, side.map(PcbSide::from), kind.map(PickPlaceItemKind::from))?;
        },
    }

    Ok(())
}

fn generate(board_path: &Path, locale_order: Vec<String>, side: Option<PcbSide>, kind: Option<PickPlaceItemKind>) -> anyhow::Result<()> {
    let mut board = loader::load_board(board_path)?;

    if !locale_order.is_empty() {
        info!("Using locale order. locales: {:?}", locale_order);
        board.project.locale_order = locale_order;
    }

    let data = BoardPickPlaceGenerator::new(&board).generate();

    info!("Project: '{}', version: '{}', board: '{}'", data.project_name(), data.project_version(), data.board_name());

    let items: Box<dyn Iterator<Item = &PickPlaceDataItem> + '_> = match side {
        Some(side) => Box::new(data.items_on_side(side)),
        None => Box::new(data.items().iter()),
    };

    let mut shown = 0;
    for item in items.filter(|item| kind.map_or(true, |kind| item.kind == kind)) {
        info!("{} {} {} {} {} value: '{}', device: '{}', package: '{}'",
            item.designator, item.kind, item.board_side, item.position, item.rotation,
            item.value, item.device_name, item.package_name,
        );
        shown += 1;
    }

    for designator in data.duplicate_designators() {
        warn!("Duplicate designator. designator: '{}'", designator);
    }

    info!("Items: {}, shown: {}", data.len(), shown);

    Ok(())
}
