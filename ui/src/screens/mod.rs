pub mod loading;
pub mod portfolio;
pub mod trade;
