pub mod a001_staff;
pub mod a002_position;
