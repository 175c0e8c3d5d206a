use tracing::{debug, info, trace, warn};
use eda::board::{Board, DeviceInstance, MountedPad};
use eda::layer::Layer;
use eda::library::AssemblyType;
use pnp::geometry::{Angle, Point};
use pnp::pcb::PcbSide;
use pnp::pick_place::{PickPlaceData, PickPlaceDataItem, PickPlaceItemKind};

/// Builds the pick-and-place data of a board.
///
/// For every device, in board order, the items are:
/// 1. one fiducial item per fiducial pad and outer copper side it is on, top before bottom.
/// 2. one item for the device itself, unless the package has nothing to mount.
///
/// When a device has more than one fiducial item the fiducial designators are numbered,
/// e.g. `PCB1:1`, `PCB1:2`. The device item always keeps the plain designator.
pub struct BoardPickPlaceGenerator<'board> {
    board: &'board Board,
}

impl<'board> BoardPickPlaceGenerator<'board> {
    pub fn new(board: &'board Board) -> Self {
        Self {
            board,
        }
    }

    #[tracing::instrument(skip_all, fields(board = %self.board.name))]
    pub fn generate(&self) -> PickPlaceData {
        let project = &self.board.project;
        let mut data = PickPlaceData::new(
            project.name.clone(),
            project.version.clone(),
            self.board.name.clone(),
        );

        for device in self.board.devices.iter() {
            for item in build_device_items(device, &project.locale_order) {
                trace!("{:?}", item);
                data.add_item(item);
            }
        }

        info!("Generated pick-and-place data. board: '{}', devices: {}, items: {}",
            self.board.name, self.board.devices.len(), data.len()
        );

        data
    }
}

pub fn generate(board: &Board) -> PickPlaceData {
    BoardPickPlaceGenerator::new(board).generate()
}

/// Maps the assembly type of a package to the kind of item to place, `None` if there is nothing to mount.
pub fn placement_kind(assembly_type: AssemblyType) -> Option<PickPlaceItemKind> {
    match assembly_type {
        AssemblyType::Tht => Some(PickPlaceItemKind::Tht),
        AssemblyType::Smt => Some(PickPlaceItemKind::Smt),
        AssemblyType::Mixed => Some(PickPlaceItemKind::Mixed),
        AssemblyType::Other => Some(PickPlaceItemKind::Other),
        AssemblyType::None | AssemblyType::Auto => None,
    }
}

fn build_device_items(device: &DeviceInstance, locale_order: &[String]) -> Vec<PickPlaceDataItem> {
    let designator = device.component.name.clone();
    let value = device.component.value(true).trim().to_string();
    let device_name = device.lib_device.names.value(locale_order).to_string();
    let package_name = device.lib_package.names.value(locale_order).to_string();

    let build_item = |position: Point, rotation: Angle, board_side: PcbSide, kind: PickPlaceItemKind| {
        PickPlaceDataItem::new(
            designator.clone(),
            value.clone(),
            device_name.clone(),
            package_name.clone(),
            position,
            rotation,
            board_side,
            kind,
        )
    };

    let mut items: Vec<PickPlaceDataItem> = vec![];

    for pad in device.mounted_pads().filter(|pad| pad.is_fiducial()) {
        let rotation = effective_rotation(pad.rotation(), pad.mirrored());
        for side in fiducial_sides(pad) {
            items.push(build_item(pad.position(), rotation, side, PickPlaceItemKind::Fiducial));
        }
    }

    if items.len() > 1 {
        for (index, item) in items.iter_mut().enumerate() {
            let numbered_designator = format!("{}:{}", item.designator, index + 1);
            item.set_designator(numbered_designator);
        }
    }

    let assembly_type = device.lib_package.assembly_type(true);
    match placement_kind(assembly_type) {
        Some(kind) => {
            if items.len() == 1 {
                // the single fiducial item is not numbered, so it shares the designator of the device item
                warn!("Duplicate designator, device has a single fiducial. designator: '{}'", designator);
            }
            items.push(build_item(
                device.position,
                effective_rotation(device.rotation, device.mirrored),
                PcbSide::from_mirrored(device.mirrored),
                kind,
            ));
        },
        None => {
            debug!("Nothing to mount. designator: '{}', assembly_type: {}", designator, assembly_type);
        }
    }

    debug!("Device processed. designator: '{}', items: {}", designator, items.len());

    items
}

fn fiducial_sides(pad: MountedPad<'_>) -> impl Iterator<Item = PcbSide> + '_ {
    [(Layer::TopCopper, PcbSide::Top), (Layer::BottomCopper, PcbSide::Bottom)]
        .into_iter()
        .filter(move |(layer, _side)| pad.is_on_layer(*layer))
        .map(|(_layer, side)| side)
}

/// Mirroring inverts the direction of rotation.
fn effective_rotation(rotation: Angle, mirrored: bool) -> Angle {
    match mirrored {
        true => -rotation,
        false => rotation,
    }
}
