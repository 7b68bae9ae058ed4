pub mod create_link;
