//! One view function per wizard screen. Each reads the controller and sends
//! `Msg`s back through the component link; none of them hold state.

pub mod configure_access;
pub mod create_stages;
pub mod enter_query;
pub mod flow_selection;
pub mod select_database;
