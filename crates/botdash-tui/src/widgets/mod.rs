//! Widget components for the bot dashboard

pub mod accounts_list;
pub mod add_account_form;
pub mod bot_table;
pub mod confirm_dialog;
pub mod create_bot_form;
pub mod footer;
pub mod form_fields;
pub mod modal_overlay;
pub mod notifications;
pub mod stats_header;

pub use accounts_list::AccountsList;
pub use add_account_form::AddAccountFormView;
pub use bot_table::BotTable;
pub use confirm_dialog::ConfirmDialog;
pub use create_bot_form::CreateBotFormView;
pub use footer::Footer;
pub use notifications::NotificationStack;
pub use stats_header::StatsHeader;
