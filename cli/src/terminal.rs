pub mod colors;
pub mod form;
pub mod format;
pub mod logging;
pub mod print;
pub mod report;
pub mod text;
