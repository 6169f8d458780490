pub(crate) mod decode;
pub(crate) mod frameset;
pub(crate) mod loader;
pub(crate) mod path;
