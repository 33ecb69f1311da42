pub mod converters;
pub mod logger;
