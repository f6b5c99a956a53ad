mod jsonl;
pub mod snapshot;

pub use jsonl::flush_to_jsonl;
pub use snapshot::{SimulationSnapshot, from_json, load, save, to_json};
