pub mod link;
pub mod note;
