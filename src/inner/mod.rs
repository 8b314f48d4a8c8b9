pub(crate) mod command;
pub(crate) mod conf;
pub(crate) mod conv;
pub(crate) mod error;
pub(crate) mod model;
