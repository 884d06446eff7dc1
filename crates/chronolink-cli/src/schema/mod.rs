pub mod record;
pub mod route_file;
