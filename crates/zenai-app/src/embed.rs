//! Third-party embed mounting: container plus script, processed once.

/// Runs an embed processor exactly once, after both the content container
/// has mounted and the embed script has loaded, in whichever order those
/// two signals arrive.
pub struct EmbedSlot {
    container_mounted: bool,
    script_loaded: bool,
    processor: Option<Box<dyn FnOnce()>>,
}

impl EmbedSlot {
    pub fn new(processor: impl FnOnce() + 'static) -> Self {
        Self {
            container_mounted: false,
            script_loaded: false,
            processor: Some(Box::new(processor)),
        }
    }

    /// Returns true if this call ran the processor.
    pub fn container_mounted(&mut self) -> bool {
        self.container_mounted = true;
        self.try_process()
    }

    /// Returns true if this call ran the processor.
    pub fn script_loaded(&mut self) -> bool {
        self.script_loaded = true;
        self.try_process()
    }

    pub fn is_processed(&self) -> bool {
        self.processor.is_none()
    }

    fn try_process(&mut self) -> bool {
        if !(self.container_mounted && self.script_loaded) {
            return false;
        }
        match self.processor.take() {
            Some(processor) => {
                log::debug!("processing embed");
                processor();
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for EmbedSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbedSlot")
            .field("container_mounted", &self.container_mounted)
            .field("script_loaded", &self.script_loaded)
            .field("processed", &self.is_processed())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/embed_tests.rs"]
mod tests;
