pub mod assert;

#[cfg(feature = "testing")]
pub mod test;
