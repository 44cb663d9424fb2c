mod machine;
mod state;

pub use machine::parse_url;
pub use state::State;
