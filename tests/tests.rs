mod api;
mod form;
mod session;
