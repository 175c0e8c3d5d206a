use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;
use crate::layer::Layer;
use crate::locale::LocalizedNameMap;

/// Purpose of a footprint pad, as defined by the library.
#[derive(Debug, Clone, Copy, Default, DeserializeFromStr, SerializeDisplay, PartialEq, Eq, Hash)]
pub enum PadFunction {
    #[default]
    Unspecified,
    StandardPad,
    PressFitPad,
    ThermalPad,
    BgaPad,
    EdgeConnectorPad,
    TestPad,
    LocalFiducial,
    GlobalFiducial,
}

impl PadFunction {
    pub fn is_fiducial(&self) -> bool {
        matches!(self, PadFunction::LocalFiducial | PadFunction::GlobalFiducial)
    }
}

impl Display for PadFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Self::Unspecified => "unspecified",
            Self::StandardPad => "standard",
            Self::PressFitPad => "press_fit",
            Self::ThermalPad => "thermal",
            Self::BgaPad => "bga",
            Self::EdgeConnectorPad => "edge_connector",
            Self::TestPad => "test",
            Self::LocalFiducial => "local_fiducial",
            Self::GlobalFiducial => "global_fiducial",
        };
        f.write_str(token)
    }
}

impl FromStr for PadFunction {
    type Err = PadFunctionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "unspecified" => Ok(Self::Unspecified),
            "standard" => Ok(Self::StandardPad),
            "press_fit" => Ok(Self::PressFitPad),
            "thermal" => Ok(Self::ThermalPad),
            "bga" => Ok(Self::BgaPad),
            "edge_connector" => Ok(Self::EdgeConnectorPad),
            "test" => Ok(Self::TestPad),
            "local_fiducial" => Ok(Self::LocalFiducial),
            "global_fiducial" => Ok(Self::GlobalFiducial),
            _ => Err(PadFunctionError::Unknown(value.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum PadFunctionError {
    #[error("Unknown pad function. value: '{0:}'")]
    Unknown(String),
}

/// The side of a footprint an SMT pad is defined on, before any mirroring.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ComponentSide {
    #[default]
    Top,
    Bottom,
}

impl ComponentSide {
    pub fn copper_layer(&self) -> Layer {
        match self {
            ComponentSide::Top => Layer::TopCopper,
            ComponentSide::Bottom => Layer::BottomCopper,
        }
    }
}

/// A pad of a library footprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PadDefinition {
    pub name: String,
    #[serde(default)]
    pub function: PadFunction,
    #[serde(default)]
    pub component_side: ComponentSide,
    /// Pads with a hole are through-hole pads and exist on every copper layer.
    #[serde(default)]
    pub tht: bool,
}

impl PadDefinition {
    pub fn smt(name: &str, function: PadFunction, component_side: ComponentSide) -> Self {
        Self {
            name: name.to_string(),
            function,
            component_side,
            tht: false,
        }
    }

    pub fn tht(name: &str, function: PadFunction) -> Self {
        Self {
            name: name.to_string(),
            function,
            component_side: ComponentSide::Top,
            tht: true,
        }
    }
}

/// How a package is mounted onto a board.
///
/// `None` is used for things which are part of the board but are not mounted, e.g. fiducials,
/// mounting holes or test points. `Auto` means the type has to be derived from the footprint pads.
#[derive(Debug, Clone, Copy, Default, DeserializeFromStr, SerializeDisplay, PartialEq, Eq, Hash)]
pub enum AssemblyType {
    None,
    Tht,
    Smt,
    Mixed,
    Other,
    #[default]
    Auto,
}

impl Display for AssemblyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Tht => write!(f, "tht"),
            Self::Smt => write!(f, "smt"),
            Self::Mixed => write!(f, "mixed"),
            Self::Other => write!(f, "other"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for AssemblyType {
    type Err = AssemblyTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(Self::None),
            "tht" => Ok(Self::Tht),
            "smt" => Ok(Self::Smt),
            "mixed" => Ok(Self::Mixed),
            "other" => Ok(Self::Other),
            "auto" => Ok(Self::Auto),
            _ => Err(AssemblyTypeError::Unknown(value.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AssemblyTypeError {
    #[error("Unknown assembly type. value: '{0:}'")]
    Unknown(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LibraryDevice {
    pub names: LocalizedNameMap,
}

impl LibraryDevice {
    pub fn new(names: LocalizedNameMap) -> Self {
        Self {
            names,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LibraryPackage {
    pub names: LocalizedNameMap,
    #[serde(default)]
    pub assembly_type: AssemblyType,
    #[serde(default)]
    pub footprint_pads: Vec<PadDefinition>,
}

impl LibraryPackage {
    pub fn new(names: LocalizedNameMap, assembly_type: AssemblyType) -> Self {
        Self {
            names,
            assembly_type,
            footprint_pads: vec![],
        }
    }

    pub fn with_footprint_pads(mut self, footprint_pads: Vec<PadDefinition>) -> Self {
        self.footprint_pads = footprint_pads;
        self
    }

    /// The assembly type of the package.
    ///
    /// When `effective` is set, `Auto` is resolved using the footprint pads, otherwise the stored
    /// type is returned unchanged.
    pub fn assembly_type(&self, effective: bool) -> AssemblyType {
        match (effective, self.assembly_type) {
            (true, AssemblyType::Auto) => self.guess_assembly_type(),
            (_, assembly_type) => assembly_type,
        }
    }

    fn guess_assembly_type(&self) -> AssemblyType {
        let has_tht = self.footprint_pads.iter().any(|pad| pad.tht);
        let has_smt = self.footprint_pads.iter().any(|pad| !pad.tht);

        match (has_tht, has_smt) {
            (true, true) => AssemblyType::Mixed,
            (true, false) => AssemblyType::Tht,
            (false, true) => AssemblyType::Smt,
            (false, false) => AssemblyType::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use super::*;

    #[rstest]
    #[case(PadFunction::LocalFiducial, true)]
    #[case(PadFunction::GlobalFiducial, true)]
    #[case(PadFunction::TestPad, false)]
    #[case(PadFunction::Unspecified, false)]
    pub fn is_fiducial(#[case] function: PadFunction, #[case] expected: bool) {
        // expect
        assert_eq!(function.is_fiducial(), expected);
    }

    #[rstest]
    #[case("press_fit", Ok(PadFunction::PressFitPad))]
    #[case("global_fiducial", Ok(PadFunction::GlobalFiducial))]
    #[case("fiducial", Err(PadFunctionError::Unknown("fiducial".to_string())))]
    pub fn pad_function_from_str(#[case] input: &str, #[case] expected_result: Result<PadFunction, PadFunctionError>) {
        // expect
        assert_eq!(PadFunction::from_str(input), expected_result);
    }

    #[rstest]
    #[case("smt", Ok(AssemblyType::Smt))]
    #[case("none", Ok(AssemblyType::None))]
    #[case("SMT", Err(AssemblyTypeError::Unknown("SMT".to_string())))]
    pub fn assembly_type_from_str(#[case] input: &str, #[case] expected_result: Result<AssemblyType, AssemblyTypeError>) {
        // expect
        assert_eq!(AssemblyType::from_str(input), expected_result);
    }

    #[rstest]
    #[case(vec![], AssemblyType::None)]
    #[case(vec![PadDefinition::tht("1", PadFunction::StandardPad)], AssemblyType::Tht)]
    #[case(vec![PadDefinition::smt("1", PadFunction::StandardPad, ComponentSide::Top)], AssemblyType::Smt)]
    #[case(vec![
        PadDefinition::tht("1", PadFunction::StandardPad),
        PadDefinition::smt("2", PadFunction::ThermalPad, ComponentSide::Top),
    ], AssemblyType::Mixed)]
    pub fn effective_auto_assembly_type(#[case] footprint_pads: Vec<PadDefinition>, #[case] expected: AssemblyType) {
        // given
        let package = LibraryPackage::new(LocalizedNameMap::new("PKG"), AssemblyType::Auto)
            .with_footprint_pads(footprint_pads);

        // expect
        assert_eq!(package.assembly_type(true), expected);
        assert_eq!(package.assembly_type(false), AssemblyType::Auto);
    }

    #[test]
    pub fn explicit_assembly_type_is_not_guessed() {
        // given
        let package = LibraryPackage::new(LocalizedNameMap::new("PKG"), AssemblyType::Other)
            .with_footprint_pads(vec![PadDefinition::tht("1", PadFunction::StandardPad)]);

        // expect
        assert_eq!(package.assembly_type(true), AssemblyType::Other);
    }
}
