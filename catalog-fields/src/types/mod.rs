//! Built-in field types.

mod dropdown;
mod list_field;
mod number;
mod rich_text;
mod text;
mod toggle;
mod translated_text;

pub use dropdown::{Dropdown, SelectOption};
pub use list_field::ListField;
pub use number::{Number, NumberConfig};
pub use rich_text::RichText;
pub use text::Text;
pub use toggle::Toggle;
pub use translated_text::TranslatedText;
