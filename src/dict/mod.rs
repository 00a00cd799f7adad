pub mod info;
pub mod loader;

pub use info::DictionaryInfo;
pub use loader::DictionaryLoader;
