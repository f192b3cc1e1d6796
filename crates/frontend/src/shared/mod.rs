pub mod api_utils;
pub mod components;
pub mod dynamic_rows;
pub mod icons;
pub mod page_frame;
