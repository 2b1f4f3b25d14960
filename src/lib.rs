//! HospitalSync — internal web tool for filling pre-authored hospital HTML
//! form templates with patient details, previewing the result, and printing
//! it to PDF from the browser.

pub mod api;
pub mod config;
pub mod inject;
pub mod templates;
