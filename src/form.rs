use crate::probe::ApiRequest;

/// Text fields of the generic tester window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TesterForm {
    pub api_url: String,
    pub api_key: String,
    pub key_param: String,
}

impl TesterForm {
    pub fn with_key_param(key_param: impl Into<String>) -> Self {
        Self {
            key_param: key_param.into(),
            ..Self::default()
        }
    }

    pub fn to_request(&self) -> ApiRequest {
        ApiRequest::new(&self.api_url, &self.api_key, &self.key_param)
    }

    /// Empties every field, the key parameter name included.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
