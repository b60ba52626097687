pub mod filter;
pub mod orchestrator;
pub mod policy;
pub mod remover;
pub mod selector;

pub use filter::NameFilter;
pub use orchestrator::purge;
pub use policy::is_expired;
pub use selector::select;
