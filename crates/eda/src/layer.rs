/// A copper layer of a board.
///
/// Inner layers are numbered from 1, starting next to the top layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    TopCopper,
    InnerCopper(u8),
    BottomCopper,
}

impl Layer {
    /// The layer seen from the other side of the board.
    pub fn mirrored(&self) -> Layer {
        match self {
            Layer::TopCopper => Layer::BottomCopper,
            Layer::BottomCopper => Layer::TopCopper,
            Layer::InnerCopper(number) => Layer::InnerCopper(*number),
        }
    }
}
