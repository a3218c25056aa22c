use debbump_changelog::Timestamp;

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
