pub(crate) mod scene;
pub(crate) mod schedule;
pub(crate) mod settings;
