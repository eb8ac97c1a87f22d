pub(crate) mod data;
pub(crate) mod model;
