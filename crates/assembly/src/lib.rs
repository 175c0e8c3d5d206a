pub mod pick_place;

pub use pick_place::BoardPickPlaceGenerator;
