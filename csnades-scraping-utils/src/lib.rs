pub mod bounded;
pub mod fs_json_util;
pub mod macros;
