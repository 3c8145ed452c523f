pub mod build;
pub mod build_list;
pub mod build_list_item;
pub mod build_status;
pub mod tc_date;
