pub mod compare_form;
pub mod header;
pub mod history_list;
pub mod result_card;
