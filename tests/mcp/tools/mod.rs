mod catalogs;
mod config;
mod lookup;
mod scan;
