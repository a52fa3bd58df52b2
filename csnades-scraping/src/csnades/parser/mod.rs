pub mod console;
pub mod nade_list;
