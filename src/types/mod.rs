pub mod record;
pub mod scoring;
