pub mod order_status;
pub mod report_status;
pub mod severity;
pub mod transaction_status;
pub mod withdrawal_status;

pub use order_status::OrderStatus;
pub use report_status::ReportStatus;
pub use severity::Severity;
pub use transaction_status::TransactionStatus;
pub use withdrawal_status::WithdrawalStatus;
