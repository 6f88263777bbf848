//! UI Components
//!
//! Reusable dialogs and inputs plus one component per page.

mod modal;
mod delete_modal;
mod data_table;
mod unit_select;
mod form_select;
mod forms_page;
mod labels_page;
mod new_label_page;

pub use modal::Modal;
pub use delete_modal::DeleteModal;
pub use data_table::DataTable;
pub use unit_select::UnitSelect;
pub use form_select::FormSelect;
pub use forms_page::FormsPage;
pub use labels_page::LabelsPage;
pub use new_label_page::NewLabelPage;
