use crate::ports::{IntroductionStore, TextGenerator};

/// Application context holding dependencies for command execution.
pub struct AppContext<G: TextGenerator, S: IntroductionStore> {
    generator: G,
    store: S,
}

impl<G: TextGenerator, S: IntroductionStore> AppContext<G, S> {
    /// Create a new application context.
    pub fn new(generator: G, store: S) -> Self {
        Self { generator, store }
    }

    /// Get a reference to the text generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Get a reference to the introduction store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
