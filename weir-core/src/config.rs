use config::Source;

pub trait ConfigBuilder: Sized {
    type C;

    fn add_source<T>(self, source: T) -> anyhow::Result<Self>
    where
        T: Source + Send + Sync + 'static;

    fn build(self) -> anyhow::Result<Self::C>;
}
