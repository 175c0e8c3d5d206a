use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;
use crate::geometry::{Angle, Point};
use crate::pcb::PcbSide;

/// What is placed by a pick-and-place item.
#[derive(Debug, Clone, Copy, DeserializeFromStr, SerializeDisplay, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PickPlaceItemKind {
    Tht,
    Smt,
    Mixed,
    Other,
    Fiducial,
}

impl Display for PickPlaceItemKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tht => write!(f, "tht"),
            Self::Smt => write!(f, "smt"),
            Self::Mixed => write!(f, "mixed"),
            Self::Other => write!(f, "other"),
            Self::Fiducial => write!(f, "fiducial"),
        }
    }
}

impl FromStr for PickPlaceItemKind {
    type Err = PickPlaceItemKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "tht" => Ok(Self::Tht),
            "smt" => Ok(Self::Smt),
            "mixed" => Ok(Self::Mixed),
            "other" => Ok(Self::Other),
            "fiducial" => Ok(Self::Fiducial),
            _ => Err(PickPlaceItemKindError::Unknown(value.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum PickPlaceItemKindError {
    #[error("Unknown pick-and-place item kind. value: '{0:}'")]
    Unknown(String),
}

/// A single placement instruction, either for a mounted device or for one of its fiducials.
///
/// See `Point` and `Angle` for details of the co-ordinate system.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PickPlaceDataItem {
    pub designator: String,
    pub value: String,
    pub device_name: String,
    pub package_name: String,
    pub position: Point,
    pub rotation: Angle,
    pub board_side: PcbSide,
    pub kind: PickPlaceItemKind,
}

impl PickPlaceDataItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        designator: String,
        value: String,
        device_name: String,
        package_name: String,
        position: Point,
        rotation: Angle,
        board_side: PcbSide,
        kind: PickPlaceItemKind,
    ) -> Self {
        Self {
            designator,
            value,
            device_name,
            package_name,
            position,
            rotation,
            board_side,
            kind,
        }
    }

    pub fn set_designator(&mut self, designator: String) {
        self.designator = designator;
    }
}

/// The pick-and-place items of one board, in board order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PickPlaceData {
    project_name: String,
    project_version: String,
    board_name: String,
    items: Vec<PickPlaceDataItem>,
}

impl PickPlaceData {
    pub fn new(project_name: String, project_version: String, board_name: String) -> Self {
        Self {
            project_name,
            project_version,
            board_name,
            items: vec![],
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_version(&self) -> &str {
        &self.project_version
    }

    pub fn board_name(&self) -> &str {
        &self.board_name
    }

    pub fn items(&self) -> &[PickPlaceDataItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_item(&mut self, item: PickPlaceDataItem) {
        self.items.push(item);
    }

    pub fn items_on_side(&self, side: PcbSide) -> impl Iterator<Item = &PickPlaceDataItem> {
        self.items.iter().filter(move |item| item.board_side == side)
    }

    /// Designators used by more than one item, in order of first occurrence.
    pub fn duplicate_designators(&self) -> Vec<&str> {
        let mut duplicates: Vec<&str> = vec![];
        for (index, item) in self.items.iter().enumerate() {
            let designator = item.designator.as_str();
            if duplicates.contains(&designator) {
                continue;
            }
            let seen_later = self.items[index + 1..].iter().any(|other| other.designator == designator);
            if seen_later {
                duplicates.push(designator);
            }
        }

        duplicates
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use super::*;

    fn build_item(designator: &str, side: PcbSide, kind: PickPlaceItemKind) -> PickPlaceDataItem {
        PickPlaceDataItem::new(
            designator.to_string(),
            "".to_string(),
            "".to_string(),
            "".to_string(),
            Point::new(dec!(1), dec!(2)),
            Angle::from_deg(dec!(0)),
            side,
            kind,
        )
    }

    #[rstest]
    #[case("tht", Ok(PickPlaceItemKind::Tht))]
    #[case("fiducial", Ok(PickPlaceItemKind::Fiducial))]
    #[case("none", Err(PickPlaceItemKindError::Unknown("none".to_string())))]
    pub fn kind_from_str(#[case] input: &str, #[case] expected_result: Result<PickPlaceItemKind, PickPlaceItemKindError>) {
        // expect
        assert_eq!(PickPlaceItemKind::from_str(input), expected_result);
    }

    #[test]
    pub fn items_keep_insertion_order() {
        // given
        let mut data = PickPlaceData::new("Project".to_string(), "v1".to_string(), "default".to_string());

        // when
        data.add_item(build_item("U2", PcbSide::Top, PickPlaceItemKind::Smt));
        data.add_item(build_item("U1", PcbSide::Bottom, PickPlaceItemKind::Tht));

        // then
        let designators: Vec<&str> = data.items().iter().map(|item| item.designator.as_str()).collect();
        assert_eq!(designators, vec!["U2", "U1"]);
        assert_eq!(data.len(), 2);
    }

    #[test]
    pub fn items_on_side() {
        // given
        let mut data = PickPlaceData::new("Project".to_string(), "v1".to_string(), "default".to_string());
        data.add_item(build_item("FID1", PcbSide::Top, PickPlaceItemKind::Fiducial));
        data.add_item(build_item("J1", PcbSide::Bottom, PickPlaceItemKind::Tht));
        data.add_item(build_item("R1", PcbSide::Top, PickPlaceItemKind::Smt));

        // when
        let result: Vec<&str> = data.items_on_side(PcbSide::Top).map(|item| item.designator.as_str()).collect();

        // then
        assert_eq!(result, vec!["FID1", "R1"]);
    }

    #[test]
    pub fn duplicate_designators() {
        // given
        let mut data = PickPlaceData::new("Project".to_string(), "v1".to_string(), "default".to_string());
        data.add_item(build_item("U1", PcbSide::Top, PickPlaceItemKind::Fiducial));
        data.add_item(build_item("U1", PcbSide::Top, PickPlaceItemKind::Smt));
        data.add_item(build_item("R1", PcbSide::Top, PickPlaceItemKind::Smt));
        data.add_item(build_item("U1", PcbSide::Bottom, PickPlaceItemKind::Other));

        // when
        let result = data.duplicate_designators();

        // then
        assert_eq!(result, vec!["U1"]);
    }

    #[test]
    pub fn serialize_kind_as_token() {
        // given
        let item = build_item("R1", PcbSide::Bottom, PickPlaceItemKind::Mixed);

        // when
        let value = serde_json::to_value(&item).expect("serializable");

        // then
        assert_eq!(value["kind"], "mixed");
        assert_eq!(value["board_side"], "bottom");
    }
}
