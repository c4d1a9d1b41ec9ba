mod infrastructure;
mod support;
