pub mod types;
pub mod decode;
pub mod order;
pub mod builder;
pub mod collection;

pub use types::*;
pub use decode::{decode_document, decode_items, item_list_mut, parse_document, Decoded};
pub use order::MenuOrder;
pub use builder::MenuTreeBuilder;
pub use collection::{MenuCollection, MenuEvent};
