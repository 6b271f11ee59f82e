pub mod ask;
pub mod verify;
