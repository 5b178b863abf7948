pub mod api_utils;
pub mod date_utils;
pub mod flash;
pub mod icons;
