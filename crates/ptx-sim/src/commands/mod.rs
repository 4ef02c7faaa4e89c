pub mod card;
pub mod extract;
pub mod synth;
pub mod version;
