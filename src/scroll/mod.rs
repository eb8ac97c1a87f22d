pub(crate) mod subscription;
pub(crate) mod tracker;
