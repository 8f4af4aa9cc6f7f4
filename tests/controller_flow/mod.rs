mod apply;
mod fake_backend;
mod selection;
mod tablet_mapping;
