pub(crate) mod contact;
pub(crate) mod filter;
pub(crate) mod tilt;
pub(crate) mod typewriter;
