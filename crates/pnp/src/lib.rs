pub mod geometry;
pub mod pcb;
pub mod pick_place;
