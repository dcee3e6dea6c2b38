pub mod page;
pub mod video;
