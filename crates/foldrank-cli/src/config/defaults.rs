use foldrank::core::sequence::DEFAULT_COPIES;
use foldrank::engine::provider::ESMFOLD_ENDPOINT;

pub struct DefaultsConfig {
    pub copies: usize,
    pub cache_dir: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            copies: DEFAULT_COPIES,
            cache_dir: "pdbs".to_string(),
            endpoint: ESMFOLD_ENDPOINT.to_string(),
            timeout_secs: 300,
        }
    }
}
