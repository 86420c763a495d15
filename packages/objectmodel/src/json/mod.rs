//! JSON utilities for reading card properties.

mod utils;

pub use utils::{
    expect_object, get_bool, get_enum, get_string, get_type_name, get_u32, json_kind,
    rejects_text, required_text,
};
