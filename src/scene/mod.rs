pub(crate) mod bouncer;
pub(crate) mod demo;
pub(crate) mod group;
pub(crate) mod node;
