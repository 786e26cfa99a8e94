use koltuk::{engine::Engine, repository::MemoryStore};

pub struct AppState {
    pub engine: Engine<MemoryStore>,
}

impl AppState {
    pub fn new(engine: Engine<MemoryStore>) -> Self {
        Self { engine }
    }
}
