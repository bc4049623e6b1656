/// How an item is handed over.
pub trait Packaging: Send + Sync {
    fn pack(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Wrapper;

impl Packaging for Wrapper {
    fn pack(&self) -> String {
        "Wrapper".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Bottle;

impl Packaging for Bottle {
    fn pack(&self) -> String {
        "Bottle".to_string()
    }
}
