pub(crate) mod dues_controller;
pub(crate) mod server;
