//! UI components.

pub mod calendar_page;
pub mod calendar_view;
pub mod dashboard;
pub mod day_detail;
pub mod decision_panel;
pub mod delete_confirm_button;
pub mod edit_modal;
pub mod item_card;
pub mod lists_page;
pub mod progress_bar;
pub mod quick_nav;
pub mod toast_stack;

pub use calendar_page::CalendarPage;
pub use calendar_view::CalendarView;
pub use dashboard::Dashboard;
pub use day_detail::DayDetail;
pub use decision_panel::DecisionPanel;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_modal::{EditModal, EditTarget};
pub use item_card::ItemCard;
pub use lists_page::ListsPage;
pub use progress_bar::ProgressBar;
pub use quick_nav::QuickNav;
pub use toast_stack::ToastStack;
