/// 建立 [`Client`](crate::core::client::Client) 所需的連線設定來源
pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}
