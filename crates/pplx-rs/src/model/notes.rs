// crates/pplx-rs/src/model/notes.rs

use crate::entity::define_entity;

define_entity! {
    /// Free-form annotation attached to any element.
    pub struct Notes => Notes {
        text: String = String::new() => "Text",
        author: String = String::new() => "Author",
    }
    children: []
}
