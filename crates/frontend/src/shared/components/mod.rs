pub mod count_table;
pub mod error_banner;
pub mod filter_bar;
pub mod form_field;
pub mod order_status_actions;
pub mod row_actions;
pub mod stat_card;
