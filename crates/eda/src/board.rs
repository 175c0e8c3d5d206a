use pnp::geometry::{Angle, Point};
use crate::circuit::ComponentInstance;
use crate::layer::Layer;
use crate::library::{LibraryDevice, LibraryPackage, PadDefinition};

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub version: String,
    /// Preferred locales, most preferred first, e.g. `["de_CH", "de_DE"]`.
    #[serde(default)]
    pub locale_order: Vec<String>,
}

impl Project {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            locale_order: vec![],
        }
    }

    pub fn with_locale_order(mut self, locale_order: &[&str]) -> Self {
        self.locale_order = locale_order.iter().map(|locale| locale.to_string()).collect();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Board {
    pub name: String,
    pub project: Project,
    #[serde(default)]
    pub devices: Vec<DeviceInstance>,
}

impl Board {
    pub fn new(name: &str, project: Project) -> Self {
        Self {
            name: name.to_string(),
            project,
            devices: vec![],
        }
    }

    pub fn with_device(mut self, device: DeviceInstance) -> Self {
        self.devices.push(device);
        self
    }
}

/// A device mounted on a board.
///
/// Mirrored devices are mounted on the bottom side.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeviceInstance {
    pub component: ComponentInstance,
    pub lib_device: LibraryDevice,
    pub lib_package: LibraryPackage,
    pub position: Point,
    #[serde(default)]
    pub rotation: Angle,
    #[serde(default)]
    pub mirrored: bool,
    #[serde(default)]
    pub pads: Vec<FootprintPad>,
}

impl DeviceInstance {
    pub fn new(
        component: ComponentInstance,
        lib_device: LibraryDevice,
        lib_package: LibraryPackage,
        position: Point,
        rotation: Angle,
        mirrored: bool,
    ) -> Self {
        Self {
            component,
            lib_device,
            lib_package,
            position,
            rotation,
            mirrored,
            pads: vec![],
        }
    }

    pub fn with_pad(mut self, definition: PadDefinition, position: Point, rotation: Angle) -> Self {
        self.pads.push(FootprintPad::new(definition, position, rotation));
        self
    }

    /// The pads of the device, in footprint order, mirrored together with the device.
    pub fn mounted_pads(&self) -> impl Iterator<Item = MountedPad<'_>> {
        self.pads.iter().map(|pad| MountedPad { pad, mirrored: self.mirrored })
    }
}

/// A footprint pad of a device.
///
/// Position and rotation are absolute, i.e. already transformed into board space. A pad has no
/// mirroring of its own, see `MountedPad`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FootprintPad {
    pub definition: PadDefinition,
    pub position: Point,
    #[serde(default)]
    pub rotation: Angle,
}

impl FootprintPad {
    pub fn new(definition: PadDefinition, position: Point, rotation: Angle) -> Self {
        Self {
            definition,
            position,
            rotation,
        }
    }
}

/// A footprint pad together with the mirroring of the device it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountedPad<'device> {
    pad: &'device FootprintPad,
    mirrored: bool,
}

impl<'device> MountedPad<'device> {
    pub fn position(&self) -> Point {
        self.pad.position
    }

    pub fn rotation(&self) -> Angle {
        self.pad.rotation
    }

    pub fn mirrored(&self) -> bool {
        self.mirrored
    }

    pub fn is_fiducial(&self) -> bool {
        self.pad.definition.function.is_fiducial()
    }

    /// THT pads are on every copper layer, SMT pads only on the outer layer of their side.
    pub fn is_on_layer(&self, layer: Layer) -> bool {
        if self.pad.definition.tht {
            return true;
        }

        self.smt_layer() == layer
    }

    fn smt_layer(&self) -> Layer {
        let layer = self.pad.definition.component_side.copper_layer();
        match self.mirrored {
            true => layer.mirrored(),
            false => layer,
        }
    }
}
