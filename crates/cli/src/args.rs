use clap::ValueEnum;
use pnp::pcb::PcbSide;
use pnp::pick_place::PickPlaceItemKind;

/// Args decouple of CLI arg handling requirements from the internal data structures

#[derive(ValueEnum, Clone, Copy, Debug)]
#[value(rename_all = "lower")]
pub enum PcbSideArg {
    Top,
    Bottom,
}

impl From<PcbSideArg> for PcbSide {
    fn from(value: PcbSideArg) -> Self {
        match value {
            PcbSideArg::Top => Self::Top,
            PcbSideArg::Bottom => Self::Bottom,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[value(rename_all = "lower")]
pub enum PickPlaceItemKindArg {
    Tht,
    Smt,
    Mixed,
    Other,
    Fiducial,
}

impl From<PickPlaceItemKindArg> for PickPlaceItemKind {
    fn from(value: PickPlaceItemKindArg) -> Self {
        match value {
            PickPlaceItemKindArg::Tht => Self::Tht,
            PickPlaceItemKindArg::Smt => Self::Smt,
            PickPlaceItemKindArg::Mixed => Self::Mixed,
            PickPlaceItemKindArg::Other => Self::Other,
            PickPlaceItemKindArg::Fiducial => Self::Fiducial,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use super::*;

    #[rstest]
    #[case("top", PcbSide::Top)]
    #[case("bottom", PcbSide::Bottom)]
    pub fn pcb_side_arg(#[case] input: &str, #[case] expected: PcbSide) {
        // given
        let arg = PcbSideArg::from_str(input, false).expect("valid side");

        // expect
        assert_eq!(PcbSide::from(arg), expected);
    }

    #[rstest]
    #[case("fiducial", PickPlaceItemKind::Fiducial)]
    #[case("mixed", PickPlaceItemKind::Mixed)]
    pub fn pick_place_item_kind_arg(#[case] input: &str, #[case] expected: PickPlaceItemKind) {
        // given
        let arg = PickPlaceItemKindArg::from_str(input, false).expect("valid kind");

        // expect
        assert_eq!(PickPlaceItemKind::from(arg), expected);
    }
}
