//! Driver-adapter implementations for the ptx pipeline.
//!
//! The crate provides the concrete event sources behind the
//! [`ptx_core::EventSource`] contract: a Les Houches Event file reader, a
//! scripted in-memory source for tests and determinism checks, and a seeded
//! synthetic generator. It also carries the engine configuration layer and an
//! SLHA-style parameter-card editor.

pub mod card;
pub mod config;
pub mod lhe;
pub mod scripted;
pub mod synthetic;

pub use card::{BlockEntry, ParamCard};
pub use config::{EngineConfig, FrameType};
pub use lhe::LheSource;
pub use scripted::ScriptedSource;
pub use synthetic::{SyntheticConfig, SyntheticSource};
