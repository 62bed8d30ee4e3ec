pub mod density;
pub mod icon_gen;
pub mod verify;
