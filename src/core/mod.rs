pub mod add;
pub mod analytics;
pub mod conflict;
pub mod del;
pub mod embed;
pub mod expand;
pub mod log;
pub mod social;
pub mod state;
pub mod update;
pub mod validate;
pub mod widget;
