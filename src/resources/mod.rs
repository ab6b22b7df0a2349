//! ECS resources made available to systems.
//!
//! Overview
//! - `appconfig` – INI-backed flip-book and posterizer settings
//! - `remoteinput` – held buttons of the remote controller
//! - `rendergraph` – render graph boundary and its in-memory recorder
//! - `renderpasses` – installed render passes and their recording context
//! - `sessionstats` – counters filled by the session observers
//! - `worldtime` – simulation time and delta
pub mod appconfig;
pub mod remoteinput;
pub mod rendergraph;
pub mod renderpasses;
pub mod sessionstats;
pub mod worldtime;
