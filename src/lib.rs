pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod plot;
pub mod regression;

pub use app::run;
pub use config::RunConfig;
pub use data::Point;
pub use error::{ConfigErr, LoadErr, RecordErr, RenderErr};
pub use regression::{fit, Model, Regressor, Strategy};
