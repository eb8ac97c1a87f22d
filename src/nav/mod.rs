pub(crate) mod controller;
pub(crate) mod indicator;
pub(crate) mod state;
