use crate::utils::error::Result;

/// Key-value persistence boundary. The production adapter is the local
/// filesystem; tests substitute in-memory or failing implementations.
pub trait Storage: Send + Sync {
    fn read_file(&self, key: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        key: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove_file(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn default_catalog_url(&self) -> &str;
    fn webhook_url(&self) -> &str;
    fn storage_path(&self) -> &str;
    /// Resolved admin secret: explicit override, then ADMIN_PASSWORD, then
    /// the built-in fallback.
    fn admin_secret(&self) -> String;
}
