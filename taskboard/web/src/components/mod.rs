mod confirm_dialog;
mod nav_bar;
mod task_list;
mod task_modal;

pub use confirm_dialog::ConfirmDialog;
pub use nav_bar::NavBar;
pub use task_list::TaskList;
pub use task_modal::TaskModal;
