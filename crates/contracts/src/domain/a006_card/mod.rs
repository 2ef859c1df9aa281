pub mod aggregate;
pub mod issue_form;
