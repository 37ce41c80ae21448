// Compatibility scoring and the skill-overlap helpers built on top of it.
// Everything here is pure and synchronous; nothing touches the network.

pub mod compatibility;
pub mod matching;
