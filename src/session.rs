/// Per-window state of the key validator that outlives a single request.
#[derive(Debug, Default)]
pub struct ValidatorSession {
    valid_key: Option<String>,
}

impl ValidatorSession {
    /// Record the result of a finished validation: the key is kept only if it
    /// passed, otherwise any previously remembered key is dropped.
    pub fn record(&mut self, key: &str, passed: bool) {
        self.valid_key = passed.then(|| key.trim().to_string());
    }

    pub fn valid_key(&self) -> Option<&str> {
        self.valid_key.as_deref()
    }

    pub fn clear(&mut self) {
        self.valid_key = None;
    }
}
