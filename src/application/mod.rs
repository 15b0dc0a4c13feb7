//! Application services: the add-car form and its collaborator seams.

pub mod error;
pub mod submission;
