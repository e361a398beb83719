// External collaborators
// HTTP clients for upstream APIs

pub mod api;
