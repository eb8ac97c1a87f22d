pub(crate) mod ease;
pub(crate) mod spring;
pub(crate) mod transition;
