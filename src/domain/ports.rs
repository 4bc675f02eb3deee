pub trait ConfigProvider: Send + Sync {
    fn price_cutoff(&self) -> f64;
    fn raise_rate(&self) -> f64;
}
