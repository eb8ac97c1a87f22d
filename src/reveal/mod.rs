pub(crate) mod cascade;
pub(crate) mod trigger;
